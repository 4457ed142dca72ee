//! Rank 排序模块
//!
//! 按值升序排列每个资产的标量指标，仅用于展示。无定义的值排在最后，
//! 值相同时保持资产的插入顺序。

use crate::{
    frame::FnvIndexMap,
    statistic::metric::{rate_of_return::RateOfReturn, sharpe::SharpeRatio, std_dev::StdDev},
};
use itertools::Itertools;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// 可参与排序的标量指标。
pub trait RankValue {
    /// 用于排序的值，无定义时为 `None`。
    fn rank_value(&self) -> Option<Decimal>;
}

impl RankValue for Decimal {
    fn rank_value(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl<T> RankValue for Option<T>
where
    T: RankValue,
{
    fn rank_value(&self) -> Option<Decimal> {
        self.as_ref().and_then(RankValue::rank_value)
    }
}

impl<Interval> RankValue for StdDev<Interval> {
    fn rank_value(&self) -> Option<Decimal> {
        Some(self.value)
    }
}

impl<Interval> RankValue for RateOfReturn<Interval> {
    fn rank_value(&self) -> Option<Decimal> {
        Some(self.value)
    }
}

impl<Interval> RankValue for SharpeRatio<Interval> {
    fn rank_value(&self) -> Option<Decimal> {
        Some(self.value)
    }
}

/// 比较两个排序值，`None` 大于任何已定义的值。
pub fn compare_ascending(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// 按值升序返回 `(资产, 值)` 对。
///
/// ```rust
/// use navrisk::{asset::AssetName, frame::FnvIndexMap, rank::sort_ascending};
/// use rust_decimal::Decimal;
///
/// let mut sharpe = FnvIndexMap::default();
/// sharpe.insert(AssetName::from("A"), Some(Decimal::ONE));
/// sharpe.insert(AssetName::from("FLAT"), None);
/// sharpe.insert(AssetName::from("B"), Some(Decimal::NEGATIVE_ONE));
///
/// let order = sort_ascending(&sharpe)
///     .into_iter()
///     .map(|(asset, _)| asset.as_ref())
///     .collect::<Vec<&str>>();
///
/// assert_eq!(order, vec!["B", "A", "FLAT"]);
/// ```
pub fn sort_ascending<K, V>(values: &FnvIndexMap<K, V>) -> Vec<(&K, &V)>
where
    V: RankValue,
{
    values
        .iter()
        .sorted_by(|(_, a), (_, b)| compare_ascending(a.rank_value(), b.rank_value()))
        .collect()
}
