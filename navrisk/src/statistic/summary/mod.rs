//! Summary 统计摘要模块
//!
//! 本模块提供了一组资产的风险收益统计摘要。
//!
//! # 核心概念
//!
//! - **RiskReturnSummary**: 分析区间内所有资产的摘要
//! - **AssetSummary**: 单个资产的标量统计量

use crate::{
    asset::{AssetKind, AssetName},
    error::RiskError,
    frame::FnvIndexMap,
    rank::sort_ascending,
    statistic::{
        metric::{rate_of_return::RateOfReturn, sharpe::SharpeRatio, std_dev::StdDev},
        time::{Daily, TimeInterval},
    },
};
use chrono::{NaiveDate, TimeDelta};
use derive_more::Constructor;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 文本表格展示。
pub mod display;

/// 风险收益摘要，包含分析区间内每个资产的统计量。
///
/// ## 类型参数
///
/// - `Interval`: 年化使用的时间间隔，例如 [`TradingYear`](crate::statistic::time::TradingYear)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct RiskReturnSummary<Interval> {
    /// 第一个收益率日期。
    pub time_start: NaiveDate,

    /// 最后一个收益率日期。
    pub time_end: NaiveDate,

    /// 基准资产名称。
    pub benchmark: AssetName,

    /// 按输入顺序排列的 [`AssetSummary`] 映射。
    pub assets: FnvIndexMap<AssetName, AssetSummary<Interval>>,
}

impl<Interval> RiskReturnSummary<Interval> {
    /// 摘要覆盖的日历时长。
    pub fn duration(&self) -> TimeDelta {
        self.time_end.signed_duration_since(self.time_start)
    }

    /// 按 Sharpe Ratio 升序排列的资产摘要，无定义的 Sharpe Ratio 排在最后。
    pub fn ranked_by_sharpe(&self) -> Vec<(&AssetName, &AssetSummary<Interval>)> {
        let sharpe = self
            .assets
            .iter()
            .map(|(asset, summary)| {
                let sharpe = summary.sharpe_ratio.as_ref().map(|sharpe| sharpe.value);
                (asset, sharpe)
            })
            .collect::<FnvIndexMap<_, _>>();

        sort_ascending(&sharpe)
            .into_iter()
            .filter_map(|(asset, _)| self.assets.get_key_value(*asset))
            .collect()
    }
}

/// 单个资产的风险收益统计量。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSummary<Interval> {
    /// 资产角色。
    pub kind: AssetKind,

    /// 日收益率样本标准差。
    pub std_dev: StdDev<Daily>,

    /// 年化标准差。
    pub std_dev_annualized: StdDev<Interval>,

    /// 年化平均收益率。
    pub mean_return_annualized: RateOfReturn<Interval>,

    /// Sharpe Ratio，年化标准差为零时无定义。
    pub sharpe_ratio: Option<SharpeRatio<Interval>>,

    /// 区间累计收益率。
    pub cumulative_return: Decimal,

    /// 滚动 Beta 已定义值的平均，基准或没有已定义值时为 `None`。
    pub beta_mean: Option<Decimal>,
}

impl<Interval> AssetSummary<Interval>
where
    Interval: TimeInterval,
{
    /// 从日收益率序列生成 [`AssetSummary`]。
    ///
    /// `risk_free_return` 位于 `interval` 上，例如年化无风险收益率。
    ///
    /// # 错误
    ///
    /// - 少于 2 个收益率观测值时返回 [`RiskError::InsufficientHistory`]
    /// - 运算溢出时返回 [`RiskError::Data`]
    pub fn generate(
        kind: AssetKind,
        returns: &[Decimal],
        cumulative_return: Decimal,
        beta_mean: Option<Decimal>,
        risk_free_return: Decimal,
        interval: Interval,
    ) -> Result<Self, RiskError> {
        let std_dev = StdDev::calculate(returns, Daily)?;
        let std_dev_annualized = std_dev.clone().scale(interval)?;
        let mean_return_annualized = RateOfReturn::from_returns(returns, Daily)?.scale(interval)?;
        let sharpe_ratio = SharpeRatio::calculate(
            risk_free_return,
            mean_return_annualized.value,
            std_dev_annualized.value,
            interval,
        );

        Ok(Self {
            kind,
            std_dev,
            std_dev_annualized,
            mean_return_annualized,
            sharpe_ratio,
            cumulative_return,
            beta_mean,
        })
    }
}
