//! Asset 资产模块
//!
//! 定义资产名称，以及区分基金与基准指数的资产类型。

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// 资产名称，例如 `"BERKSHIRE HATHAWAY INC"` 或 `"S&P 500"`。
///
/// 使用 [`SmolStr`] 存储，短名称无需堆分配，克隆开销低。
#[derive(
    Debug,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Default,
    Deserialize,
    Serialize,
    Display,
    From,
)]
pub struct AssetName(SmolStr);

impl AssetName {
    /// 从任意字符串创建新的 `AssetName`。
    pub fn new<S>(name: S) -> Self
    where
        S: AsRef<str>,
    {
        Self(SmolStr::new(name))
    }

    /// 返回名称的字符串切片。
    pub fn name(&self) -> &SmolStr {
        &self.0
    }
}

impl From<&str> for AssetName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AssetName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for AssetName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// 资产在分析中的角色。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
pub enum AssetKind {
    /// 被评估的基金。
    Fund,
    /// 用于计算 Beta 的基准指数。
    Benchmark,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name_from_str_and_display() {
        let name = AssetName::from("S&P 500");
        assert_eq!(name.to_string(), "S&P 500");
        assert_eq!(name.as_ref(), "S&P 500");
        assert_eq!(name, AssetName::new(String::from("S&P 500")));
    }
}
