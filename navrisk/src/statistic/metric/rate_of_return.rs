//! Rate Of Return 收益率模块
//!
//! 本模块提供了平均收益率的计算逻辑。
//! 与风险指标不同，收益率随时间线性缩放。
//!
//! # 缩放特性
//!
//! 1% 的日平均收益率缩放为 252% 的年化收益率（而不是 √252%）。
//! 这假设简单利息而不是复利。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/r/rateofreturn.asp>

use crate::{
    error::{DataError, InsufficientHistoryError, RiskError},
    statistic::{
        algorithm::Moments,
        time::{TimeInterval, linear_scale},
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 表示特定 [`TimeInterval`] 上的 Rate Of Return 值。
///
/// ## 类型参数
///
/// - `Interval`: 时间间隔类型
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct RateOfReturn<Interval> {
    /// 收益率值。
    pub value: Decimal,
    /// 时间间隔。
    pub interval: Interval,
}

impl<Interval> RateOfReturn<Interval>
where
    Interval: TimeInterval,
{
    /// 使用已知的平均收益率构造 [`RateOfReturn`]。
    pub fn calculate(mean_return: Decimal, returns_period: Interval) -> Self {
        Self {
            value: mean_return,
            interval: returns_period,
        }
    }

    /// 计算收益率序列的算术平均值。
    ///
    /// # 错误
    ///
    /// - 序列为空时返回 [`InsufficientHistoryError`]
    /// - 运算溢出时返回 [`DataError::Overflow`]
    pub fn from_returns(returns: &[Decimal], returns_period: Interval) -> Result<Self, RiskError> {
        let mean = Moments::from_values(returns)
            .ok_or_else(overflow)?
            .mean()
            .ok_or_else(|| InsufficientHistoryError {
                statistic: SmolStr::new_static("mean return"),
                required: 1,
                available: returns.len(),
            })?;

        Ok(Self::calculate(mean, returns_period))
    }

    /// 将 [`RateOfReturn`] 从当前 [`TimeInterval`] 线性缩放到提供的 [`TimeInterval`]。
    ///
    /// ## 缩放公式
    ///
    /// `scaled_value = value * (target_interval / current_interval)`
    ///
    /// # 错误
    ///
    /// 当前间隔为零或乘法溢出时返回 [`DataError::Overflow`]。
    pub fn scale<TargetInterval>(
        self,
        target: TargetInterval,
    ) -> Result<RateOfReturn<TargetInterval>, DataError>
    where
        TargetInterval: TimeInterval,
    {
        let value = linear_scale(self.interval, target)
            .and_then(|scale| self.value.checked_mul(scale))
            .ok_or_else(overflow)?;

        Ok(RateOfReturn {
            value,
            interval: target,
        })
    }
}

fn overflow() -> DataError {
    DataError::Overflow(SmolStr::new_static("mean return"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistic::time::{Daily, TradingYear};
    use rust_decimal_macros::dec;

    #[test]
    fn test_rate_of_return_from_returns() {
        let actual = RateOfReturn::from_returns(&[dec!(0.1), dec!(-0.1)], Daily).unwrap();
        assert_eq!(actual.value, dec!(0));

        let actual =
            RateOfReturn::from_returns(&[dec!(0.01), dec!(0.02), dec!(0.03)], Daily).unwrap();
        assert_eq!(actual.value, dec!(0.02));
    }

    #[test]
    fn test_rate_of_return_empty_returns() {
        let actual = RateOfReturn::from_returns(&[], Daily);
        assert_eq!(
            actual,
            Err(RiskError::InsufficientHistory(InsufficientHistoryError {
                statistic: SmolStr::new_static("mean return"),
                required: 1,
                available: 0,
            }))
        );
    }

    #[test]
    fn test_rate_of_return_overflow_is_error() {
        let actual = RateOfReturn::from_returns(&[Decimal::MAX, -Decimal::MAX], Daily);
        assert_eq!(
            actual,
            Err(RiskError::Data(DataError::Overflow(SmolStr::new_static(
                "mean return"
            ))))
        );

        let actual = RateOfReturn::calculate(Decimal::MAX, Daily).scale(TradingYear::default());
        assert!(matches!(actual, Err(DataError::Overflow(_))));
    }

    #[test]
    fn test_rate_of_return_scale() {
        struct TestCase {
            input: RateOfReturn<Daily>,
            target: TradingYear,
            expected: Decimal,
        }

        let cases = vec![
            // TC0: 正收益
            TestCase {
                input: RateOfReturn::calculate(dec!(0.01), Daily),
                target: TradingYear::default(),
                expected: dec!(2.52),
            },
            // TC1: 负收益
            TestCase {
                input: RateOfReturn::calculate(dec!(-0.0005), Daily),
                target: TradingYear::default(),
                expected: dec!(-0.126),
            },
            // TC2: 自定义交易日数
            TestCase {
                input: RateOfReturn::calculate(dec!(0.001), Daily),
                target: TradingYear::new(250),
                expected: dec!(0.25),
            },
            // TC3: 零收益
            TestCase {
                input: RateOfReturn::calculate(dec!(0), Daily),
                target: TradingYear::default(),
                expected: dec!(0),
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            let actual = test.input.scale(test.target).unwrap();
            assert_eq!(actual.value, test.expected, "TC{index} failed");
            assert_eq!(actual.interval, test.target, "TC{index} failed");
        }
    }
}
