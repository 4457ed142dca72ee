//! Statistic 统计模块
//!
//! 本模块提供了用于分析收益率序列的统计算法和金融指标。
//!
//! # 核心概念
//!
//! - **algorithm**: 用于分析数据集的统计算法（Welford Online）
//! - **metric**: 金融指标及其在不同时间间隔上的缩放
//! - **returns**: 日收益率与累计收益率
//! - **rolling**: 固定窗口的滚动统计量
//! - **summary**: 风险收益统计摘要
//! - **time**: 用于金融计算的时间间隔定义

/// 用于分析数据集的统计算法。
pub mod algorithm;

/// 金融指标及其在不同 [`TimeIntervals`](time::TimeInterval) 上的计算方法。
pub mod metric;

/// 日收益率与累计收益率。
pub mod returns;

/// 滚动标准差、方差、协方差与 Beta。
pub mod rolling;

/// 风险收益统计摘要。
///
/// 例如，`RiskReturnSummary`、`AssetSummary`。
pub mod summary;

/// 用于金融计算的时间间隔定义。
///
/// 例如，`TradingYear`、`Daily` 等。
pub mod time;
