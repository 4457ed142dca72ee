//! Calculator 风险收益计算器模块
//!
//! [`RiskReturnCalculator`] 持有一份经过校验的 [`AnalysisConfig`]，
//! 并将每个统计阶段暴露为输入表的纯函数。计算器本身没有可变状态，可以被重复使用。

use crate::{
    asset::{AssetKind, AssetName},
    config::AnalysisConfig,
    error::{DataError, RiskError},
    frame::{
        CumulativeTable, FnvIndexMap, PriceTable, ReturnTable, RollingTable, align::PriceSeries,
    },
    statistic::{
        metric::{
            beta::mean_defined, rate_of_return::RateOfReturn, sharpe::SharpeRatio,
            std_dev::StdDev,
        },
        returns::{cumulative_returns, daily_returns},
        rolling::{self, RollingWindow},
        summary::{AssetSummary, RiskReturnSummary},
        time::{Daily, TradingYear},
    },
};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

/// 风险收益计算器。
///
/// # 使用示例
///
/// ```rust
/// use navrisk::{
///     calculator::RiskReturnCalculator,
///     config::AnalysisConfig,
///     test_utils::{consecutive_series, date, synthetic_navs},
/// };
///
/// let start = date(2019, 1, 1);
/// let calculator = RiskReturnCalculator::new(AnalysisConfig::default()).unwrap();
///
/// let prices = calculator
///     .align([
///         consecutive_series("FUND", start, synthetic_navs(120, 10.0, 0.0004, 1.2, 0.5)),
///         consecutive_series("S&P 500", start, synthetic_navs(120, 3000.0, 0.0003, 1.0, 1.7)),
///     ])
///     .unwrap();
///
/// let summary = calculator.summary(&prices).unwrap();
/// assert_eq!(summary.assets.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RiskReturnCalculator {
    config: AnalysisConfig,
}

impl Default for RiskReturnCalculator {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
        }
    }
}

impl RiskReturnCalculator {
    /// 使用校验后的配置构造 [`RiskReturnCalculator`]。
    pub fn new(config: AnalysisConfig) -> Result<Self, RiskError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 当前配置。
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// 配置的年化间隔。
    pub fn annual(&self) -> TradingYear {
        TradingYear::new(self.config.trading_days)
    }

    /// 将价格序列对齐为 [`PriceTable`]，并确认基准存在。
    pub fn align<Iter>(&self, series: Iter) -> Result<PriceTable, RiskError>
    where
        Iter: IntoIterator<Item = PriceSeries>,
    {
        let prices = PriceTable::align(series)?;
        prices.frame().try_column(&self.config.benchmark)?;
        Ok(prices)
    }

    /// 日收益率表。
    pub fn daily_returns(&self, prices: &PriceTable) -> Result<ReturnTable, RiskError> {
        daily_returns(prices).map_err(RiskError::from)
    }

    /// 累计收益率表。
    pub fn cumulative_returns(&self, returns: &ReturnTable) -> Result<CumulativeTable, RiskError> {
        cumulative_returns(returns).map_err(RiskError::from)
    }

    /// 去掉基准列后只包含基金的收益率表。
    pub fn fund_returns(&self, returns: &ReturnTable) -> ReturnTable {
        returns.without(&self.config.benchmark)
    }

    /// 每个资产日收益率的样本标准差。
    pub fn std_dev(
        &self,
        returns: &ReturnTable,
    ) -> Result<FnvIndexMap<AssetName, StdDev<Daily>>, RiskError> {
        returns
            .frame()
            .columns()
            .map(|(asset, column)| Ok((asset.clone(), StdDev::calculate(column, Daily)?)))
            .collect()
    }

    /// 每个资产的年化标准差：`std_dev * sqrt(trading_days)`。
    pub fn annualized_std_dev(
        &self,
        returns: &ReturnTable,
    ) -> Result<FnvIndexMap<AssetName, StdDev<TradingYear>>, RiskError> {
        let annual = self.annual();
        self.std_dev(returns)?
            .into_iter()
            .map(|(asset, std_dev)| Ok((asset, std_dev.scale(annual)?)))
            .collect()
    }

    /// 每个资产的滚动标准差，窗口为 `volatility_window`。
    pub fn rolling_std_dev(&self, returns: &ReturnTable) -> RollingTable {
        rolling::rolling_std_dev(returns, RollingWindow::new(self.config.volatility_window))
    }

    /// 每个资产的年化平均收益率：`mean * trading_days`。
    pub fn annualized_mean_return(
        &self,
        returns: &ReturnTable,
    ) -> Result<FnvIndexMap<AssetName, RateOfReturn<TradingYear>>, RiskError> {
        let annual = self.annual();
        returns
            .frame()
            .columns()
            .map(|(asset, column)| {
                let mean = RateOfReturn::from_returns(column, Daily)?;
                Ok((asset.clone(), mean.scale(annual)?))
            })
            .collect()
    }

    /// 每个资产的年化 Sharpe Ratio，年化标准差为零时为 `None`。
    pub fn sharpe_ratio(
        &self,
        returns: &ReturnTable,
    ) -> Result<FnvIndexMap<AssetName, Option<SharpeRatio<TradingYear>>>, RiskError> {
        let std_devs = self.annualized_std_dev(returns)?;
        let means = self.annualized_mean_return(returns)?;

        means
            .into_iter()
            .map(|(asset, mean)| {
                let std_dev = std_devs
                    .get(&asset)
                    .ok_or_else(|| DataError::MissingAsset(asset.clone()))?;

                let sharpe = SharpeRatio::calculate(
                    self.config.risk_free_return,
                    mean.value,
                    std_dev.value,
                    mean.interval,
                );
                if sharpe.is_none() {
                    warn!(%asset, "Sharpe ratio undefined for zero volatility");
                }

                Ok((asset, sharpe))
            })
            .collect()
    }

    /// 基准收益率的滚动方差，窗口为 `beta_window`。
    pub fn benchmark_rolling_variance(
        &self,
        returns: &ReturnTable,
    ) -> Result<RollingTable, RiskError> {
        rolling::rolling_variance(
            returns,
            &self.config.benchmark,
            RollingWindow::new(self.config.beta_window),
        )
        .map_err(RiskError::from)
    }

    /// 每个基金与基准之间的滚动协方差，窗口为 `beta_window`。
    pub fn rolling_covariance(&self, returns: &ReturnTable) -> Result<RollingTable, RiskError> {
        rolling::rolling_covariance(
            returns,
            &self.config.benchmark,
            RollingWindow::new(self.config.beta_window),
        )
        .map_err(RiskError::from)
    }

    /// 每个基金相对基准的滚动 Beta。
    pub fn rolling_beta(&self, returns: &ReturnTable) -> Result<RollingTable, RiskError> {
        let covariance = self.rolling_covariance(returns)?;
        let variance = self.benchmark_rolling_variance(returns)?;
        let variance = variance.try_column(&self.config.benchmark)?;

        let beta = rolling::rolling_beta(&covariance, variance)?;

        debug!(
            funds = beta.columns().count(),
            window = self.config.beta_window,
            "computed rolling beta"
        );

        Ok(beta)
    }

    /// 每个基金滚动 Beta 已定义值的平均。
    pub fn mean_rolling_beta(
        &self,
        returns: &ReturnTable,
    ) -> Result<FnvIndexMap<AssetName, Option<Decimal>>, RiskError> {
        Ok(self
            .rolling_beta(returns)?
            .columns()
            .map(|(asset, betas)| (asset.clone(), mean_defined(betas)))
            .collect())
    }

    /// 运行完整流水线并生成 [`RiskReturnSummary`]。
    pub fn summary(
        &self,
        prices: &PriceTable,
    ) -> Result<RiskReturnSummary<TradingYear>, RiskError> {
        let returns = self.daily_returns(prices)?;
        let cumulative = self.cumulative_returns(&returns)?;
        let beta_means = self.mean_rolling_beta(&returns)?;

        let (Some(time_start), Some((time_end, final_cumulative))) =
            (returns.frame().dates().first().copied(), cumulative.last_row())
        else {
            return Err(RiskError::from(DataError::TooFewPrices {
                asset: self.config.benchmark.clone(),
                available: prices.len(),
            }));
        };

        let annual = self.annual();
        let assets = returns
            .frame()
            .columns()
            .map(|(asset, column)| {
                let kind = match *asset == self.config.benchmark {
                    true => AssetKind::Benchmark,
                    false => AssetKind::Fund,
                };

                let summary = AssetSummary::generate(
                    kind,
                    column,
                    final_cumulative
                        .get(asset)
                        .copied()
                        .ok_or_else(|| DataError::MissingAsset(asset.clone()))?,
                    beta_means.get(asset).copied().flatten(),
                    self.config.risk_free_return,
                    annual,
                )?;

                Ok((asset.clone(), summary))
            })
            .collect::<Result<FnvIndexMap<_, _>, RiskError>>()?;

        info!(
            assets = assets.len(),
            %time_start,
            %time_end,
            benchmark = %self.config.benchmark,
            "generated RiskReturnSummary"
        );

        Ok(RiskReturnSummary::new(
            time_start,
            time_end,
            self.config.benchmark.clone(),
            assets,
        ))
    }
}
