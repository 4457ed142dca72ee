//! Sharpe Ratio 夏普比率模块
//!
//! 本模块提供了 Sharpe Ratio（夏普比率）的计算逻辑。
//! 夏普比率通过比较超额收益（超过无风险利率）与标准差来衡量风险调整后的收益。
//!
//! # 计算公式
//!
//! `Sharpe Ratio = (平均收益率 - 无风险收益率) / 收益率标准差`
//!
//! 标准差为零时比率无定义，结果为 `None`，而不是一个哨兵值。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/articles/07/sharpe_ratio.asp>

use crate::statistic::time::TimeInterval;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 表示特定 [`TimeInterval`] 上的 Sharpe Ratio 值。
///
/// ## 解释
///
/// - **高 Sharpe Ratio**: 承担相同风险获得了更高的收益
/// - **负 Sharpe Ratio**: 表现不如无风险资产
///
/// ## 类型参数
///
/// - `Interval`: 时间间隔类型
#[derive(Debug, Clone, PartialEq, PartialOrd, Default, Deserialize, Serialize)]
pub struct SharpeRatio<Interval> {
    /// Sharpe Ratio 值。
    pub value: Decimal,
    /// 时间间隔。
    pub interval: Interval,
}

impl<Interval> SharpeRatio<Interval>
where
    Interval: TimeInterval,
{
    /// 在提供的 [`TimeInterval`] 上计算 [`SharpeRatio`]。
    ///
    /// `mean_return`、`std_dev_returns` 与 `risk_free_return` 必须位于同一时间间隔，
    /// 例如都已年化。
    ///
    /// 标准差为零（无波动）时返回 `None`。
    ///
    /// # 使用示例
    ///
    /// ```rust
    /// use navrisk::statistic::{metric::sharpe::SharpeRatio, time::TradingYear};
    /// use rust_decimal::Decimal;
    ///
    /// let sharpe = SharpeRatio::calculate(
    ///     Decimal::ZERO,
    ///     Decimal::new(12, 2),
    ///     Decimal::new(24, 2),
    ///     TradingYear::default(),
    /// );
    /// assert_eq!(sharpe.map(|sharpe| sharpe.value), Some(Decimal::new(5, 1)));
    ///
    /// let flat = SharpeRatio::calculate(
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    ///     TradingYear::default(),
    /// );
    /// assert!(flat.is_none());
    /// ```
    pub fn calculate(
        risk_free_return: Decimal,
        mean_return: Decimal,
        std_dev_returns: Decimal,
        returns_period: Interval,
    ) -> Option<Self> {
        if std_dev_returns.is_zero() {
            return None;
        }

        let excess_returns = mean_return.checked_sub(risk_free_return)?;

        excess_returns
            .checked_div(std_dev_returns)
            .map(|value| Self {
                value,
                interval: returns_period,
            })
    }
}
