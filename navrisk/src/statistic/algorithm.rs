//! Algorithm 统计算法模块
//!
//! 本模块提供了用于分析数据集的统计算法。
//! 主要包括 Welford Online 算法，用于单次遍历计算均值、方差与协方差。
//!
//! # 核心概念
//!
//! - **Welford Online 算法**: 单次遍历计算均值和方差的在线算法
//! - **协方差**: 双变量的 Welford 递推关系 C
//! - **样本统计量**: 使用 Bessel 校正（`n - 1`）的无偏估计

use rust_decimal::Decimal;

/// [Welford Online](https://en.wikipedia.org/wiki/Algorithms_for_calculating_variance#Welford's_online_algorithm)
/// 算法集合，用于单次遍历计算运行中的值，如均值、方差和协方差。
///
/// 所有递推都使用 `checked_*` 运算，溢出或除零时返回 `None`。
///
/// ## 算法优势
///
/// - **单次遍历**: 只需遍历数据一次
/// - **数值稳定**: 减少舍入误差累积，常数序列的方差严格为零
///
/// # 使用示例
///
/// ```rust
/// use navrisk::statistic::algorithm::welford_online;
/// use rust_decimal::Decimal;
///
/// let data = [Decimal::ONE, Decimal::TWO, Decimal::from(3)];
///
/// let mut mean = Decimal::ZERO;
/// let mut m = Decimal::ZERO;
/// let mut count = Decimal::ZERO;
///
/// for value in data {
///     count += Decimal::ONE;
///     let new_mean = welford_online::calculate_mean(mean, value, count).unwrap();
///     m = welford_online::calculate_recurrence_relation_m(m, mean, value, new_mean).unwrap();
///     mean = new_mean;
/// }
///
/// assert_eq!(
///     welford_online::calculate_sample_variance(m, count),
///     Some(Decimal::ONE)
/// );
/// ```
pub mod welford_online {
    use rust_decimal::Decimal;

    /// 计算下一个均值。
    ///
    /// ## 公式
    ///
    /// `new_mean = prev_mean + (next_value - prev_mean) / count`
    pub fn calculate_mean(
        prev_mean: Decimal,
        next_value: Decimal,
        count: Decimal,
    ) -> Option<Decimal> {
        next_value
            .checked_sub(prev_mean)?
            .checked_div(count)?
            .checked_add(prev_mean)
    }

    /// 计算下一个 Welford Online 递推关系 M（用于方差）。
    ///
    /// ## 公式
    ///
    /// `M = prev_m + (new_value - prev_mean) * (new_value - new_mean)`
    pub fn calculate_recurrence_relation_m(
        prev_m: Decimal,
        prev_mean: Decimal,
        new_value: Decimal,
        new_mean: Decimal,
    ) -> Option<Decimal> {
        calculate_recurrence_relation_c(prev_m, prev_mean, new_value, new_mean, new_value)
    }

    /// 计算下一个双变量递推关系 C（用于协方差）。
    ///
    /// `x` 使用更新前的均值，`y` 使用更新后的均值。
    ///
    /// ## 公式
    ///
    /// `C = prev_c + (new_x - prev_mean_x) * (new_y - new_mean_y)`
    pub fn calculate_recurrence_relation_c(
        prev_c: Decimal,
        prev_mean_x: Decimal,
        new_x: Decimal,
        new_mean_y: Decimal,
        new_y: Decimal,
    ) -> Option<Decimal> {
        let deviation_x = new_x.checked_sub(prev_mean_x)?;
        let deviation_y = new_y.checked_sub(new_mean_y)?;

        prev_c.checked_add(deviation_x.checked_mul(deviation_y)?)
    }

    /// 使用 Bessel 校正（count - 1）计算无偏"样本"方差或协方差。
    ///
    /// count < 2 时无定义，返回 `None`。
    pub fn calculate_sample_variance(
        recurrence_relation: Decimal,
        count: Decimal,
    ) -> Option<Decimal> {
        match count < Decimal::TWO {
            true => None,
            false => recurrence_relation.checked_div(count.checked_sub(Decimal::ONE)?),
        }
    }
}

/// 单变量运行矩：计数、均值与递推关系 M。
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Moments {
    pub count: Decimal,
    pub mean: Decimal,
    pub m: Decimal,
}

impl Moments {
    /// 从值序列单次遍历计算运行矩，任一步溢出时返回 `None`。
    pub fn from_values<'a, Iter>(values: Iter) -> Option<Self>
    where
        Iter: IntoIterator<Item = &'a Decimal>,
    {
        values
            .into_iter()
            .try_fold(Self::default(), |moments, value| moments.update(*value))
    }

    /// 使用下一个值更新运行矩，溢出时返回 `None`。
    pub fn update(self, value: Decimal) -> Option<Self> {
        let count = self.count.checked_add(Decimal::ONE)?;
        let mean = welford_online::calculate_mean(self.mean, value, count)?;
        let m = welford_online::calculate_recurrence_relation_m(self.m, self.mean, value, mean)?;

        Some(Self { count, mean, m })
    }

    /// 均值，没有观测值时为 `None`。
    pub fn mean(&self) -> Option<Decimal> {
        (self.count > Decimal::ZERO).then_some(self.mean)
    }

    /// 样本方差（ddof = 1）。
    pub fn sample_variance(&self) -> Option<Decimal> {
        welford_online::calculate_sample_variance(self.m, self.count)
    }
}

/// 双变量运行矩，用于协方差。
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct CoMoments {
    pub count: Decimal,
    pub mean_x: Decimal,
    pub mean_y: Decimal,
    pub c: Decimal,
}

impl CoMoments {
    /// 从成对的值序列单次遍历计算运行矩，任一步溢出时返回 `None`。
    pub fn from_pairs<'a, Iter>(pairs: Iter) -> Option<Self>
    where
        Iter: IntoIterator<Item = (&'a Decimal, &'a Decimal)>,
    {
        pairs
            .into_iter()
            .try_fold(Self::default(), |moments, (x, y)| moments.update(*x, *y))
    }

    /// 使用下一对值更新运行矩，溢出时返回 `None`。
    pub fn update(self, x: Decimal, y: Decimal) -> Option<Self> {
        let count = self.count.checked_add(Decimal::ONE)?;
        let mean_x = welford_online::calculate_mean(self.mean_x, x, count)?;
        let mean_y = welford_online::calculate_mean(self.mean_y, y, count)?;
        let c =
            welford_online::calculate_recurrence_relation_c(self.c, self.mean_x, x, mean_y, y)?;

        Some(Self {
            count,
            mean_x,
            mean_y,
            c,
        })
    }

    /// 样本协方差（ddof = 1）。
    pub fn sample_covariance(&self) -> Option<Decimal> {
        welford_online::calculate_sample_variance(self.c, self.count)
    }
}
