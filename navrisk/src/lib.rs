#![forbid(unsafe_code)]
#![warn(
    unused,
    clippy::cognitive_complexity,
    unused_crate_dependencies,
    unused_extern_crates,
    clippy::unused_self,
    clippy::useless_let_if_seq,
    missing_debug_implementations,
    rust_2018_idioms,
    rust_2024_compatibility
)]
#![allow(clippy::type_complexity, type_alias_bounds)]

//! # NavRisk
//! NavRisk 是一个用于分析基金净值（NAV）序列风险与收益的 Rust 统计库。
//! * **精确**：所有计算基于 `Decimal`，不会静默产生 NaN 或无穷大。
//! * **显式缺失**：滚动窗口不足或除零时，单元格为 `None`，并向下游传播。
//! * **纯函数**：每个阶段都是输入表与固定参数的纯函数，输出新的不可变表。
//!
//! ## 概述
//! 输入为若干基金 NAV 序列与一个基准指数（例如 S&P 500）收盘价序列。
//! [`RiskReturnCalculator`](calculator::RiskReturnCalculator) 按以下顺序计算：
//! * 对齐日期，生成 [`PriceTable`](frame::PriceTable)。
//! * 日收益率与累计收益率。
//! * 样本标准差、年化标准差、滚动标准差（默认窗口 21）。
//! * 年化平均收益率与 Sharpe Ratio。
//! * 基准滚动方差、基金与基准的滚动协方差、滚动 Beta（默认窗口 60）。
//!
//! ## 快速开始
//!
//! ```rust
//! use navrisk::{
//!     calculator::RiskReturnCalculator,
//!     config::AnalysisConfig,
//!     frame::{PriceTable, align::PriceSeries},
//!     test_utils::date,
//! };
//!
//! let fund = PriceSeries::from_values(
//!     "FUND",
//!     [(date(2020, 1, 2), 100.0), (date(2020, 1, 3), 110.0), (date(2020, 1, 6), 99.0)],
//! );
//! let index = PriceSeries::from_values(
//!     "S&P 500",
//!     [(date(2020, 1, 2), 3000.0), (date(2020, 1, 3), 3030.0), (date(2020, 1, 6), 3015.0)],
//! );
//!
//! let prices = PriceTable::align([fund, index]).unwrap();
//! let calculator = RiskReturnCalculator::new(AnalysisConfig::default()).unwrap();
//! let returns = calculator.daily_returns(&prices).unwrap();
//! assert_eq!(returns.len(), 2);
//! ```

use chrono::NaiveDate;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// 资产名称。
///
/// 例如：`AssetName`、`AssetKind`。
pub mod asset;

/// 风险收益计算器，串联所有统计阶段。
pub mod calculator;

/// 分析配置（基准、交易日数、窗口大小、无风险收益率）。
pub mod config;

/// 定义 NavRisk 中所有可能的错误。
pub mod error;

/// 按日期索引的列式数据表。
///
/// 例如：`Frame`、`PriceTable`、`ReturnTable`、`PriceSeries`。
pub mod frame;

/// 提供 NavRisk 的默认 Tracing 日志初始化器。
pub mod logging;

/// 升序排序等展示辅助函数。
pub mod rank;

/// 用于分析收益序列的统计算法、金融指标和摘要。
///
/// 例如：`SharpeRatio`、`StdDev`、`RollingWindow`、`RiskReturnSummary` 等。
pub mod statistic;

/// 带日期的值。
///
/// 用于将任意值与交易日期关联，例如某一交易日的基金净值。
///
/// # 类型参数
///
/// - `T`: 值的类型
///
/// # 使用示例
///
/// ```rust,ignore
/// let nav = Dated::new(1.0325, date(2020, 1, 2));
/// println!("净值: {}, 日期: {}", nav.value, nav.date);
/// ```
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Constructor,
)]
pub struct Dated<T> {
    /// 存储的值
    pub value: T,
    /// 交易日期
    pub date: NaiveDate,
}

/// NavRisk 测试工具。
///
/// 提供用于测试、示例和基准测试的辅助函数，包括日期构造、Decimal 容差比较、
/// 以及确定性的合成 NAV 序列。
pub mod test_utils {
    use crate::{Dated, asset::AssetName, frame::align::PriceSeries};
    use chrono::{Days, NaiveDate};
    use rust_decimal::Decimal;

    /// 构造 [`NaiveDate`]。
    ///
    /// # Panics
    ///
    /// 如果日期无效，此函数会 panic。
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// 在基础日期上增加指定的天数。
    ///
    /// # Panics
    ///
    /// 如果日期溢出，此函数会 panic。
    pub fn date_plus_days(base: NaiveDate, plus: u64) -> NaiveDate {
        base.checked_add_days(Days::new(plus)).unwrap()
    }

    /// 比较两个 `Decimal` 是否在 `epsilon` 容差内相等。
    pub fn decimal_is_eq(actual: Decimal, expected: Decimal, epsilon: Decimal) -> bool {
        (actual - expected).abs() < epsilon
    }

    /// 从连续日期和 `f64` 值构造 [`PriceSeries`]，日期从 `start` 起每天递增一天。
    pub fn consecutive_series<I>(asset: &str, start: NaiveDate, values: I) -> PriceSeries
    where
        I: IntoIterator<Item = f64>,
    {
        PriceSeries::new(
            AssetName::from(asset),
            values
                .into_iter()
                .enumerate()
                .map(|(offset, value)| {
                    Dated::new(Some(value), date_plus_days(start, offset as u64))
                })
                .collect(),
        )
    }

    /// 生成确定性的合成 NAV 序列。
    ///
    /// 日收益率由 `drift`、按 `beta` 缩放的市场因子以及周期性的特质扰动组成，
    /// 便于在没有外部数据的情况下得到可复现的波动与 Beta。
    pub fn synthetic_navs(len: usize, start: f64, drift: f64, beta: f64, phase: f64) -> Vec<f64> {
        if len == 0 {
            return Vec::new();
        }

        let mut nav = start;
        let mut navs = Vec::with_capacity(len);
        navs.push(nav);

        for step in 1..len {
            let t = step as f64;
            let market = 0.011 * (t * 0.37).sin() + 0.004 * (t * 0.051).cos();
            let idiosyncratic = 0.003 * (t * 1.13 + phase).sin();
            nav *= 1.0 + drift + beta * market + idiosyncratic;
            navs.push(nav);
        }

        navs
    }
}
