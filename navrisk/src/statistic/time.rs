//! TimeInterval 时间间隔模块
//!
//! 本模块定义了用于金融计算的时间间隔类型。
//! 时间间隔用于年化收益率、波动率等金融指标的计算。
//!
//! # 核心概念
//!
//! - **TimeInterval**: Trait，定义时间间隔接口
//! - **TradingYear**: 按交易日计的年化间隔，默认 252 天（传统市场）
//! - **Daily**: 日间隔

use crate::config::TRADING_DAYS_PER_YEAR;
use chrono::TimeDelta;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};
use std::fmt::Debug;

/// 表示用于金融计算的时间间隔类型的 Trait。
///
/// # 使用示例
///
/// ```rust
/// use navrisk::statistic::time::{Daily, TimeInterval, TradingYear};
///
/// let daily = Daily;
/// assert_eq!(daily.name().as_str(), "Daily");
/// assert_eq!(daily.interval().num_days(), 1);
///
/// let annual = TradingYear::default();
/// assert_eq!(annual.name().as_str(), "Annual(252)");
/// assert_eq!(annual.interval().num_days(), 252);
/// ```
pub trait TimeInterval: Debug + Copy {
    /// 返回时间间隔的人类可读名称。
    fn name(&self) -> SmolStr;

    /// 返回时间间隔的持续时间。
    fn interval(&self) -> TimeDelta;
}

/// 按交易日计的年化时间间隔。
///
/// 传统市场每年通常有 252 个交易日（排除周末和节假日）。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub struct TradingYear {
    /// 每年的交易日数。
    pub days: u32,
}

impl TradingYear {
    /// 252 天年化间隔。
    pub const ANNUAL_252: Self = Self {
        days: TRADING_DAYS_PER_YEAR,
    };

    /// 使用指定交易日数创建年化间隔。
    pub fn new(days: u32) -> Self {
        Self { days }
    }
}

impl Default for TradingYear {
    fn default() -> Self {
        Self::ANNUAL_252
    }
}

impl TimeInterval for TradingYear {
    fn name(&self) -> SmolStr {
        format_smolstr!("Annual({})", self.days)
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(i64::from(self.days))
    }
}

/// 日时间间隔。
///
/// 表示单个交易日的时间间隔，日收益率序列的统计量都在此间隔上。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Deserialize, Serialize)]
pub struct Daily;

impl TimeInterval for Daily {
    fn name(&self) -> SmolStr {
        SmolStr::new_static("Daily")
    }

    fn interval(&self) -> TimeDelta {
        TimeDelta::days(1)
    }
}

/// 从 `current` 到 `target` 的线性缩放因子：`target / current`。
///
/// 用于收益率等随时间线性累积的指标。`current` 为零时返回 `None`。
pub fn linear_scale<Current, Target>(current: Current, target: Target) -> Option<Decimal>
where
    Current: TimeInterval,
    Target: TimeInterval,
{
    let target_secs = Decimal::from(target.interval().num_seconds());
    let current_secs = Decimal::from(current.interval().num_seconds());

    target_secs.abs().checked_div(current_secs.abs())
}

/// 从 `current` 到 `target` 的平方根缩放因子：`sqrt(target / current)`。
///
/// 在收益率独立同分布（IID）的假设下，用于标准差、Sharpe Ratio 等指标。
/// 例如从 [`Daily`] 到 [`TradingYear::ANNUAL_252`] 的因子为 `sqrt(252)`。
pub fn sqrt_scale<Current, Target>(current: Current, target: Target) -> Option<Decimal>
where
    Current: TimeInterval,
    Target: TimeInterval,
{
    linear_scale(current, target)?.sqrt()
}
