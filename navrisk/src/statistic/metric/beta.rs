//! Beta 模块
//!
//! Beta 衡量基金收益对基准收益的敏感度：
//!
//! `Beta = Cov(基金, 基准) / Var(基准)`
//!
//! 协方差或方差任一缺失，或基准方差为零时，Beta 无定义。
//!
//! # 参考文档
//!
//! <https://www.investopedia.com/terms/b/beta.asp>

use crate::statistic::algorithm::Moments;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 某一时点的 Beta 值。
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Deserialize, Serialize)]
pub struct Beta {
    /// Beta 值。
    pub value: Decimal,
}

impl Beta {
    /// 由协方差与基准方差计算 [`Beta`]。
    ///
    /// 任一输入缺失、方差为零或除法溢出时返回 `None`。
    ///
    /// ```rust
    /// use navrisk::statistic::metric::beta::Beta;
    /// use rust_decimal::Decimal;
    ///
    /// let beta = Beta::calculate(Some(Decimal::new(3, 4)), Some(Decimal::new(2, 4)));
    /// assert_eq!(beta.map(|beta| beta.value), Some(Decimal::new(15, 1)));
    ///
    /// assert_eq!(Beta::calculate(Some(Decimal::ONE), Some(Decimal::ZERO)), None);
    /// assert_eq!(Beta::calculate(None, Some(Decimal::ONE)), None);
    /// ```
    pub fn calculate(covariance: Option<Decimal>, variance: Option<Decimal>) -> Option<Self> {
        let (covariance, variance) = (covariance?, variance?);

        if variance.is_zero() {
            return None;
        }

        covariance
            .checked_div(variance)
            .map(|value| Self { value })
    }
}

/// 滚动 Beta 序列中已定义值的算术平均。
///
/// 没有任何已定义值或运算溢出时返回 `None`。
pub fn mean_defined<'a, Iter>(betas: Iter) -> Option<Decimal>
where
    Iter: IntoIterator<Item = &'a Option<Decimal>>,
{
    Moments::from_values(betas.into_iter().flatten())?.mean()
}
