//! Rolling 滚动统计模块
//!
//! 本模块提供了固定窗口的滚动样本统计量：标准差、方差、协方差与 Beta。
//!
//! # 缺失值语义
//!
//! 窗口为 `W` 时，下标 `t`（从 0 开始）的值当且仅当 `t >= W - 1` 时有定义，
//! 其余单元格为 `None`。Beta 在协方差或方差缺失、或方差为零时同样为 `None`。
//! 序列短于窗口不是错误，所有单元格均为 `None`。
//!
//! 每个窗口都使用新的 [`Moments`] 累加器计算，因此常数窗口的方差严格为零。

use crate::{
    asset::AssetName,
    error::DataError,
    frame::{ReturnTable, RollingTable},
    statistic::{
        algorithm::{CoMoments, Moments},
        metric::{beta::Beta, std_dev::sqrt_variance},
    },
};
use derive_more::{Constructor, Display};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

/// 滚动窗口长度。
#[derive(
    Debug,
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Deserialize,
    Serialize,
    Constructor,
    Display,
)]
#[display("RollingWindow({len})")]
pub struct RollingWindow {
    pub len: usize,
}

impl RollingWindow {
    /// 对每个完整窗口 `[t + 1 - len, t + 1)` 应用 `statistic`，不完整的窗口为 `None`。
    fn apply<F>(&self, observations: usize, mut statistic: F) -> Vec<Option<Decimal>>
    where
        F: FnMut(Range<usize>) -> Option<Decimal>,
    {
        (0..observations)
            .map(|t| match self.len > 0 && t + 1 >= self.len {
                true => statistic(t + 1 - self.len..t + 1),
                false => None,
            })
            .collect()
    }

    /// 滚动样本方差（ddof = 1），窗口内运算溢出时为 `None`。
    pub fn variance(&self, values: &[Decimal]) -> Vec<Option<Decimal>> {
        self.apply(values.len(), |window| {
            Moments::from_values(&values[window])?.sample_variance()
        })
    }

    /// 滚动样本标准差（ddof = 1）。
    ///
    /// ```rust
    /// use navrisk::statistic::rolling::RollingWindow;
    /// use rust_decimal::Decimal;
    ///
    /// let returns = [Decimal::ONE, Decimal::TWO, Decimal::from(3)];
    /// let rolling = RollingWindow::new(2).std_dev(&returns);
    ///
    /// assert_eq!(rolling[0], None);
    /// assert!(rolling[1].is_some());
    /// assert_eq!(rolling.len(), returns.len());
    /// ```
    pub fn std_dev(&self, values: &[Decimal]) -> Vec<Option<Decimal>> {
        self.variance(values)
            .into_iter()
            .map(|variance| variance.and_then(sqrt_variance))
            .collect()
    }

    /// 两个等长序列的滚动样本协方差（ddof = 1），窗口内运算溢出时为 `None`。
    ///
    /// # 错误
    ///
    /// 长度不一致时返回 [`DataError::Misaligned`]。
    pub fn covariance(
        &self,
        x: &[Decimal],
        y: &[Decimal],
    ) -> Result<Vec<Option<Decimal>>, DataError> {
        if x.len() != y.len() {
            return Err(DataError::Misaligned);
        }

        Ok(self.apply(x.len(), |window| {
            CoMoments::from_pairs(x[window.clone()].iter().zip(&y[window]))?.sample_covariance()
        }))
    }
}

/// 逐点计算 Beta：`covariance / variance`。
///
/// # 错误
///
/// 长度不一致时返回 [`DataError::Misaligned`]。
pub fn beta(
    covariance: &[Option<Decimal>],
    variance: &[Option<Decimal>],
) -> Result<Vec<Option<Decimal>>, DataError> {
    if covariance.len() != variance.len() {
        return Err(DataError::Misaligned);
    }

    Ok(covariance
        .iter()
        .zip(variance)
        .map(|(covariance, variance)| {
            Beta::calculate(*covariance, *variance).map(|beta| beta.value)
        })
        .collect())
}

/// 每个资产收益率的滚动标准差。
pub fn rolling_std_dev(returns: &ReturnTable, window: RollingWindow) -> RollingTable {
    debug!(%window, rows = returns.len(), "computing rolling standard deviation");
    returns
        .frame()
        .map_columns(|_, column| window.std_dev(column))
}

/// 单个资产（通常为基准）收益率的滚动方差，结果表只包含该资产一列。
///
/// # 错误
///
/// 资产不存在时返回 [`DataError::MissingAsset`]。
pub fn rolling_variance(
    returns: &ReturnTable,
    asset: &AssetName,
    window: RollingWindow,
) -> Result<RollingTable, DataError> {
    debug!(%asset, %window, "computing rolling variance");
    Ok(returns
        .frame()
        .select([asset])?
        .map_columns(|_, column| window.variance(column)))
}

/// 除基准以外每个资产与基准之间的滚动协方差。
///
/// # 错误
///
/// 基准不存在时返回 [`DataError::MissingAsset`]。
pub fn rolling_covariance(
    returns: &ReturnTable,
    benchmark: &AssetName,
    window: RollingWindow,
) -> Result<RollingTable, DataError> {
    let frame = returns.frame();
    let benchmark_returns = frame.try_column(benchmark)?;

    debug!(%benchmark, %window, "computing rolling covariance");
    frame
        .without(benchmark)
        .try_map_columns(frame.dates().to_vec(), |_, column| {
            window.covariance(column, benchmark_returns)
        })
}

/// 每个资产的滚动 Beta，`variance` 为基准的滚动方差序列。
///
/// # 错误
///
/// 序列长度与协方差表不一致时返回 [`DataError::Misaligned`]。
pub fn rolling_beta(
    covariance: &RollingTable,
    variance: &[Option<Decimal>],
) -> Result<RollingTable, DataError> {
    covariance.try_map_columns(covariance.dates().to_vec(), |_, column| {
        beta(column, variance)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        frame::Frame,
        test_utils::{date, date_plus_days},
    };
    use rust_decimal_macros::dec;

    fn returns_table(columns: Vec<(&str, Vec<Decimal>)>) -> ReturnTable {
        let len = columns[0].1.len();
        let dates = (0..len as u64)
            .map(|offset| date_plus_days(date(2020, 1, 1), offset))
            .collect();

        ReturnTable(
            Frame::new(
                dates,
                columns
                    .into_iter()
                    .map(|(asset, column)| (AssetName::from(asset), column)),
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_rolling_defined_iff_window_complete() {
        let values = (0..30).map(|i| Decimal::from(i % 7)).collect::<Vec<_>>();
        let window = RollingWindow::new(21);

        let std_dev = window.std_dev(&values);
        let variance = window.variance(&values);
        let covariance = window.covariance(&values, &values).unwrap();

        for t in 0..values.len() {
            let defined = t >= 20;
            assert_eq!(std_dev[t].is_some(), defined, "std_dev t={t}");
            assert_eq!(variance[t].is_some(), defined, "variance t={t}");
            assert_eq!(covariance[t].is_some(), defined, "covariance t={t}");
        }
    }

    #[test]
    fn test_rolling_window_values() {
        // 窗口 [1, 2, 3] -> 方差 1；窗口 [2, 3, 5] -> 均值 10/3，方差 7/3
        let values = [dec!(1), dec!(2), dec!(3), dec!(5)];
        let variance = RollingWindow::new(3).variance(&values);

        assert_eq!(variance[..2], [None, None]);
        assert_eq!(variance[2], Some(dec!(1)));
        assert!((variance[3].unwrap() - dec!(2.3333333333)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_rolling_shorter_than_window() {
        let values = [dec!(0.01), dec!(0.02)];
        assert_eq!(RollingWindow::new(60).variance(&values), vec![None, None]);
        assert_eq!(RollingWindow::new(0).std_dev(&values), vec![None, None]);
    }

    #[test]
    fn test_rolling_overflow_window_is_none() {
        // 净值 1e-10 -> 1e10 -> 1e-10 -> 1e-10
        let values = [
            dec!(99999999999999999999),
            dec!(-0.99999999999999999999),
            dec!(0),
        ];
        let window = RollingWindow::new(2);

        let variance = window.variance(&values);
        assert_eq!(variance[..2], [None, None]);
        assert!(variance[2].is_some());

        assert_eq!(window.std_dev(&values)[1], None);
        assert_eq!(window.covariance(&values, &values).unwrap()[1], None);
    }

    #[test]
    fn test_rolling_covariance_misaligned() {
        let actual = RollingWindow::new(2).covariance(&[dec!(1), dec!(2)], &[dec!(1)]);
        assert_eq!(actual, Err(DataError::Misaligned));
    }

    #[test]
    fn test_identical_returns_zero_covariance_and_undefined_beta() {
        let window = RollingWindow::new(60);
        let returns = returns_table(vec![
            ("FUND", vec![dec!(0.001); 60]),
            ("S&P 500", vec![dec!(0.001); 60]),
        ]);
        let benchmark = AssetName::from("S&P 500");
        let fund = AssetName::from("FUND");

        let covariance = rolling_covariance(&returns, &benchmark, window).unwrap();
        let variance = rolling_variance(&returns, &benchmark, window).unwrap();
        let variance = variance.column(&benchmark).unwrap();

        let fund_covariance = covariance.column(&fund).unwrap();
        assert_eq!(fund_covariance[59], Some(dec!(0)));
        assert_eq!(fund_covariance[58], None);
        assert_eq!(variance[59], Some(dec!(0)));
        assert!(!covariance.contains(&benchmark));

        let beta = rolling_beta(&covariance, variance).unwrap();
        assert!(beta.column(&fund).unwrap().iter().all(Option::is_none));
    }

    #[test]
    fn test_constant_fund_against_moving_benchmark_has_zero_beta() {
        let window = RollingWindow::new(60);
        let benchmark_returns = (0..60)
            .map(|i| Decimal::new(i % 5 - 2, 3))
            .collect::<Vec<_>>();
        let returns = returns_table(vec![
            ("FUND", vec![dec!(0.001); 60]),
            ("S&P 500", benchmark_returns),
        ]);
        let benchmark = AssetName::from("S&P 500");

        let covariance = rolling_covariance(&returns, &benchmark, window).unwrap();
        let variance = rolling_variance(&returns, &benchmark, window).unwrap();
        let beta = rolling_beta(&covariance, variance.column(&benchmark).unwrap()).unwrap();

        let fund_beta = beta.column(&AssetName::from("FUND")).unwrap();
        assert_eq!(fund_beta[59], Some(dec!(0)));
        assert!(fund_beta[..59].iter().all(Option::is_none));
    }

    #[test]
    fn test_rolling_beta_of_scaled_fund() {
        // fund = 2 * benchmark -> beta 2
        let benchmark_returns = vec![dec!(0.01), dec!(-0.01), dec!(0.03), dec!(0.04)];
        let fund_returns = benchmark_returns
            .iter()
            .map(|r| r * dec!(2))
            .collect::<Vec<_>>();
        let returns = returns_table(vec![
            ("FUND", fund_returns),
            ("S&P 500", benchmark_returns),
        ]);
        let benchmark = AssetName::from("S&P 500");
        let window = RollingWindow::new(3);

        let covariance = rolling_covariance(&returns, &benchmark, window).unwrap();
        let variance = rolling_variance(&returns, &benchmark, window).unwrap();
        let beta = rolling_beta(&covariance, variance.column(&benchmark).unwrap()).unwrap();

        assert_eq!(
            beta.column(&AssetName::from("FUND")),
            Some(&[None, None, Some(dec!(2)), Some(dec!(2))][..])
        );
    }

    #[test]
    fn test_rolling_missing_benchmark() {
        let returns = returns_table(vec![("FUND", vec![dec!(0.01), dec!(0.02)])]);
        let benchmark = AssetName::from("S&P 500");

        assert_eq!(
            rolling_covariance(&returns, &benchmark, RollingWindow::new(2)),
            Err(DataError::MissingAsset(benchmark.clone()))
        );
        assert_eq!(
            rolling_variance(&returns, &benchmark, RollingWindow::new(2)),
            Err(DataError::MissingAsset(benchmark))
        );
    }

    #[test]
    fn test_beta_misaligned() {
        let actual = beta(&[Some(dec!(1))], &[Some(dec!(1)), None]);
        assert_eq!(actual, Err(DataError::Misaligned));
    }
}
