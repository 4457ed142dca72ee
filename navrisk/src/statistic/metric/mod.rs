//! Metric 金融指标模块
//!
//! 本模块提供了评估基金风险收益所用的金融指标。
//! 指标值与其所在的时间间隔一起保存，并可以缩放到其他时间间隔。
//!
//! # 核心指标
//!
//! - **Standard Deviation**: 收益率样本标准差，按平方根缩放
//! - **Rate Of Return**: 平均收益率，线性缩放
//! - **Sharpe Ratio**: 夏普比率，衡量风险调整后的收益
//! - **Beta**: 相对基准的敏感度

/// Beta 计算逻辑。
pub mod beta;

/// Rate Of Return 收益率计算逻辑。
pub mod rate_of_return;

/// Sharpe Ratio 夏普比率计算逻辑。
pub mod sharpe;

/// Standard Deviation 标准差计算逻辑。
pub mod std_dev;
