//! Error 错误处理模块
//!
//! 本模块定义了风险收益计算可能遇到的所有错误类型。
//!
//! # 核心概念
//!
//! - **RiskError**: 顶层错误枚举，包含所有可能的错误
//! - **DataError**: 输入序列格式错误、为空或无法对齐
//! - **InsufficientHistoryError**: 观测值数量少于计算所需
//! - **ConfigError**: 分析配置无效
//!
//! # 错误处理策略
//!
//! 所有错误对本次计算都是终止性的。计算是确定且无状态的，因此重试没有意义，
//! 调用方应修正输入数据后重新调用。
//!
//! 滚动窗口不足或基准方差为零导致的未定义值不是错误，它们以 `None` 表示并向下游传播。

use crate::asset::AssetName;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

/// 表示 NavRisk 可能遇到的所有错误。
///
/// # 使用示例
///
/// ```rust,ignore
/// match calculator.summary(&prices) {
///     Ok(summary) => println!("{}", summary.display_table()),
///     Err(RiskError::Data(error)) => error!(%error, "input series rejected"),
///     Err(error) => error!(%error, "analysis failed"),
/// }
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
pub enum RiskError {
    /// 输入数据错误。
    #[error("DataError: {0}")]
    Data(#[from] DataError),

    /// 历史观测值不足。
    #[error("InsufficientHistoryError: {0}")]
    InsufficientHistory(#[from] InsufficientHistoryError),

    /// 配置错误。
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
}

/// 输入序列格式错误、为空或无法对齐。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
pub enum DataError {
    /// 资产序列不包含任何价格点。
    #[error("asset {0} price series is empty")]
    EmptySeries(AssetName),

    /// 价格不是有限数值（NaN 或无穷大）。
    #[error("asset {asset} has non-numeric price at {date}")]
    NonNumeric { asset: AssetName, date: NaiveDate },

    /// 价格小于或等于零。
    #[error("asset {asset} has non-positive price {value} at {date}")]
    NonPositive {
        asset: AssetName,
        date: NaiveDate,
        value: Decimal,
    },

    /// 同一资产中出现重复日期。
    #[error("asset {asset} has duplicate date {date}")]
    DuplicateDate { asset: AssetName, date: NaiveDate },

    /// 同一资产名称出现多次。
    #[error("asset {0} supplied more than once")]
    DuplicateAsset(AssetName),

    /// 未提供任何资产。
    #[error("no asset series supplied")]
    NoAssets,

    /// 所有资产没有共同的交易日期。
    #[error("asset series share no common dates")]
    NoCommonDates,

    /// 表中缺少所需资产（例如基准）。
    #[error("asset {0} not found in table")]
    MissingAsset(AssetName),

    /// 计算日收益率至少需要 2 个价格点。
    #[error("asset {asset} has {available} price points, at least 2 are required")]
    TooFewPrices { asset: AssetName, available: usize },

    /// 两个序列的日期索引不一致。
    #[error("tables are not aligned on the same dates")]
    Misaligned,

    /// Decimal 运算溢出。
    #[error("arithmetic overflow computing {0}")]
    Overflow(SmolStr),
}

/// 观测值数量少于所需窗口或自由度。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
#[error("{statistic} requires {required} observations, {available} available")]
pub struct InsufficientHistoryError {
    /// 统计量名称。
    pub statistic: SmolStr,
    /// 需要的观测值数量。
    pub required: usize,
    /// 实际可用的观测值数量。
    pub available: usize,
}

/// 分析配置无效。
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize, Error)]
pub enum ConfigError {
    /// 滚动窗口必须至少为 2（样本统计量使用 `n - 1` 作为分母）。
    #[error("{name} window must be at least 2, got {value}")]
    Window { name: SmolStr, value: usize },

    /// 年化交易日数必须大于零。
    #[error("trading_days must be greater than zero")]
    TradingDays,

    /// 配置无法解析。
    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
