//! AnalysisConfig 分析配置模块
//!
//! 本模块提供了风险收益分析的配置结构。
//!
//! 252 个交易日与样本统计量（`n - 1` 分母）是行业惯例，而不是从数据中推断出来的，
//! 因此它们作为固定的配置常量保存。

use crate::{asset::AssetName, error::ConfigError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::io::Read;

/// 每年的交易日数（传统市场惯例）。
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// 滚动标准差的默认窗口（约一个交易月）。
pub const DEFAULT_VOLATILITY_WINDOW: usize = 21;

/// 滚动方差、协方差与 Beta 的默认窗口（约一个交易季度）。
pub const DEFAULT_BETA_WINDOW: usize = 60;

/// 默认基准名称。
pub const DEFAULT_BENCHMARK: &str = "S&P 500";

/// 风险收益分析的顶级配置。
///
/// ## 字段说明
///
/// - **benchmark**: 基准资产名称，其余资产视为基金
/// - **trading_days**: 年化使用的交易日数
/// - **volatility_window**: 滚动标准差窗口
/// - **beta_window**: 滚动方差、协方差与 Beta 窗口
/// - **risk_free_return**: 年化无风险收益率，用于 Sharpe Ratio
///
/// # 使用示例
///
/// ```rust
/// use navrisk::config::AnalysisConfig;
///
/// let json = r#"{ "benchmark": "CSI 300", "beta_window": 120 }"#;
/// let config = AnalysisConfig::from_reader(json.as_bytes()).unwrap();
///
/// assert_eq!(config.benchmark.as_ref(), "CSI 300");
/// assert_eq!(config.beta_window, 120);
/// assert_eq!(config.trading_days, 252);
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// 基准资产名称。
    pub benchmark: AssetName,

    /// 年化使用的交易日数。
    pub trading_days: u32,

    /// 滚动标准差窗口。
    pub volatility_window: usize,

    /// 滚动方差、协方差与 Beta 窗口。
    pub beta_window: usize,

    /// 年化无风险收益率。
    ///
    /// 默认为零，此时 Sharpe Ratio 为年化平均收益率除以年化标准差。
    pub risk_free_return: Decimal,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            benchmark: AssetName::from(DEFAULT_BENCHMARK),
            trading_days: TRADING_DAYS_PER_YEAR,
            volatility_window: DEFAULT_VOLATILITY_WINDOW,
            beta_window: DEFAULT_BETA_WINDOW,
            risk_free_return: Decimal::ZERO,
        }
    }
}

impl AnalysisConfig {
    /// 从 JSON 读取配置，缺省字段使用默认值，并在返回前校验。
    pub fn from_reader<R>(reader: R) -> Result<Self, ConfigError>
    where
        R: Read,
    {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置。
    ///
    /// 窗口小于 2 时样本统计量无定义，交易日数为零时无法年化。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trading_days == 0 {
            return Err(ConfigError::TradingDays);
        }

        for (name, value) in [
            ("volatility", self.volatility_window),
            ("beta", self.beta_window),
        ] {
            if value < 2 {
                return Err(ConfigError::Window {
                    name: SmolStr::new_static(name),
                    value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config_matches_conventions() {
        let config = AnalysisConfig::default();
        assert_eq!(config.benchmark, AssetName::from("S&P 500"));
        assert_eq!(config.trading_days, 252);
        assert_eq!(config.volatility_window, 21);
        assert_eq!(config.beta_window, 60);
        assert_eq!(config.risk_free_return, Decimal::ZERO);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_from_reader_partial_json() {
        let json = r#"{ "volatility_window": 10, "risk_free_return": "0.02" }"#;
        let config = AnalysisConfig::from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.volatility_window, 10);
        assert_eq!(config.risk_free_return, dec!(0.02));
        assert_eq!(config.beta_window, 60);
    }

    #[test]
    fn test_validate_rejects_invalid_config() {
        struct TestCase {
            config: AnalysisConfig,
            expected: ConfigError,
        }

        let cases = vec![
            // TC0: 零交易日
            TestCase {
                config: AnalysisConfig {
                    trading_days: 0,
                    ..Default::default()
                },
                expected: ConfigError::TradingDays,
            },
            // TC1: 滚动标准差窗口过小
            TestCase {
                config: AnalysisConfig {
                    volatility_window: 1,
                    ..Default::default()
                },
                expected: ConfigError::Window {
                    name: SmolStr::new_static("volatility"),
                    value: 1,
                },
            },
            // TC2: Beta 窗口为零
            TestCase {
                config: AnalysisConfig {
                    beta_window: 0,
                    ..Default::default()
                },
                expected: ConfigError::Window {
                    name: SmolStr::new_static("beta"),
                    value: 0,
                },
            },
        ];

        for (index, test) in cases.into_iter().enumerate() {
            assert_eq!(test.config.validate(), Err(test.expected), "TC{index} failed");
        }
    }

    #[test]
    fn test_from_reader_invalid_json() {
        let actual = AnalysisConfig::from_reader("{ not json".as_bytes());
        assert!(matches!(actual, Err(ConfigError::Parse(_))));
    }
}
