//! Standard Deviation 标准差模块
//!
//! 本模块提供了收益率样本标准差（ddof = 1）的计算逻辑。
//!
//! # 缩放特性
//!
//! 标准差按平方根缩放：日标准差乘以 `sqrt(252)` 得到年化标准差。

use crate::{
    error::{DataError, InsufficientHistoryError, RiskError},
    statistic::{
        algorithm::Moments,
        time::{TimeInterval, sqrt_scale},
    },
};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 表示特定 [`TimeInterval`] 上的收益率标准差。
///
/// ## 类型参数
///
/// - `Interval`: 时间间隔类型
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct StdDev<Interval> {
    /// 标准差值。
    pub value: Decimal,
    /// 时间间隔。
    pub interval: Interval,
}

impl<Interval> StdDev<Interval>
where
    Interval: TimeInterval,
{
    /// 在提供的 [`TimeInterval`] 上计算收益率的样本标准差。
    ///
    /// # 错误
    ///
    /// - 少于 2 个观测值时样本方差无定义，返回 [`InsufficientHistoryError`]
    /// - 运算溢出时返回 [`DataError::Overflow`]
    pub fn calculate(returns: &[Decimal], returns_period: Interval) -> Result<Self, RiskError> {
        let moments = Moments::from_values(returns).ok_or_else(overflow)?;

        let variance = moments
            .sample_variance()
            .ok_or_else(|| InsufficientHistoryError {
                statistic: SmolStr::new_static("standard deviation"),
                required: 2,
                available: returns.len(),
            })?;

        let value = sqrt_variance(variance).ok_or_else(overflow)?;

        Ok(Self {
            value,
            interval: returns_period,
        })
    }

    /// 将 [`StdDev`] 从当前 [`TimeInterval`] 缩放到提供的 [`TimeInterval`]。
    ///
    /// 此缩放假设收益率是独立同分布（IID）的。
    ///
    /// ## 缩放公式
    ///
    /// `scaled_value = value * sqrt(target_interval / current_interval)`
    ///
    /// # 错误
    ///
    /// 当前间隔为零或乘法溢出时返回 [`DataError::Overflow`]。
    pub fn scale<TargetInterval>(
        self,
        target: TargetInterval,
    ) -> Result<StdDev<TargetInterval>, DataError>
    where
        TargetInterval: TimeInterval,
    {
        let value = sqrt_scale(self.interval, target)
            .and_then(|scale| self.value.checked_mul(scale))
            .ok_or_else(overflow)?;

        Ok(StdDev {
            value,
            interval: target,
        })
    }
}

fn overflow() -> DataError {
    DataError::Overflow(SmolStr::new_static("standard deviation"))
}

/// 方差的平方根。
///
/// Decimal 舍入可能产生极小的负方差，此时按零处理。
pub fn sqrt_variance(variance: Decimal) -> Option<Decimal> {
    variance.max(Decimal::ZERO).sqrt()
}
