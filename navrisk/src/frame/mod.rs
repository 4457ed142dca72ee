//! Frame 数据表模块
//!
//! 本模块定义了按交易日期索引的列式（struct-of-arrays）数据表。
//!
//! # 核心概念
//!
//! - **Frame**: 通用数据表，一个升序日期索引加上每个资产一列
//! - **PriceTable**: 日期对齐后的价格表
//! - **ReturnTable**: 日收益率表
//! - **RollingTable**: 滚动统计量表，单元格为 `Option<Decimal>`
//!
//! 所有表都是不可变的派生视图：每个计算阶段都返回一个新表。

use crate::{asset::AssetName, error::DataError};
use chrono::NaiveDate;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 价格序列输入与日期对齐逻辑。
pub mod align;

/// 使用 FNV 哈希的 [`IndexMap`]，保持资产插入顺序。
pub type FnvIndexMap<K, V> = IndexMap<K, V, FnvBuildHasher>;

/// 滚动统计量表，窗口不足或无定义的单元格为 `None`。
pub type RollingTable = Frame<Option<Decimal>>;

/// 累计收益率表。
pub type CumulativeTable = Frame<Decimal>;

/// 按交易日期索引的列式数据表。
///
/// ## 不变量
///
/// - `dates` 严格升序，无重复
/// - 每一列的长度都等于 `dates` 的长度
/// - 列按资产的插入顺序保存
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Frame<T> {
    dates: Vec<NaiveDate>,
    columns: FnvIndexMap<AssetName, Vec<T>>,
}

impl<T> Frame<T> {
    /// 从日期索引与列构造 [`Frame`]，校验所有列与索引长度一致且日期严格升序。
    pub fn new<Iter>(dates: Vec<NaiveDate>, columns: Iter) -> Result<Self, DataError>
    where
        Iter: IntoIterator<Item = (AssetName, Vec<T>)>,
    {
        if dates.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DataError::Misaligned);
        }

        let mut checked = FnvIndexMap::default();
        for (asset, column) in columns {
            if column.len() != dates.len() {
                return Err(DataError::Misaligned);
            }
            if checked.insert(asset.clone(), column).is_some() {
                return Err(DataError::DuplicateAsset(asset));
            }
        }

        Ok(Self {
            dates,
            columns: checked,
        })
    }

    /// 不做校验的构造，调用方保证不变量成立。
    pub(crate) fn from_parts(
        dates: Vec<NaiveDate>,
        columns: FnvIndexMap<AssetName, Vec<T>>,
    ) -> Self {
        debug_assert!(columns.values().all(|column| column.len() == dates.len()));
        Self { dates, columns }
    }

    /// 日期索引。
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// 行数。
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// 表是否没有任何行。
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// 按插入顺序迭代资产名称。
    pub fn assets(&self) -> impl Iterator<Item = &AssetName> {
        self.columns.keys()
    }

    /// 按插入顺序迭代 `(资产, 列)`。
    pub fn columns(&self) -> impl Iterator<Item = (&AssetName, &[T])> {
        self.columns
            .iter()
            .map(|(asset, column)| (asset, column.as_slice()))
    }

    /// 返回资产对应的列，资产不存在时返回 `None`。
    pub fn column(&self, asset: &AssetName) -> Option<&[T]> {
        self.columns.get(asset).map(Vec::as_slice)
    }

    /// 返回资产对应的列，资产不存在时返回 [`DataError::MissingAsset`]。
    pub fn try_column(&self, asset: &AssetName) -> Result<&[T], DataError> {
        self.column(asset)
            .ok_or_else(|| DataError::MissingAsset(asset.clone()))
    }

    /// 表是否包含该资产。
    pub fn contains(&self, asset: &AssetName) -> bool {
        self.columns.contains_key(asset)
    }

    /// 对每一列应用 `f`，保留日期索引，生成新表。
    pub fn map_columns<U, F>(&self, mut f: F) -> Frame<U>
    where
        F: FnMut(&AssetName, &[T]) -> Vec<U>,
    {
        let columns = self
            .columns
            .iter()
            .map(|(asset, column)| (asset.clone(), f(asset, column)))
            .collect();

        Frame::from_parts(self.dates.clone(), columns)
    }

    /// 与 [`Frame::map_columns`] 相同，但 `f` 可能失败，第一个错误即终止。
    ///
    /// `dates` 为新表的日期索引，`f` 返回的每一列长度都必须与之相等。
    pub fn try_map_columns<U, E, F>(&self, dates: Vec<NaiveDate>, mut f: F) -> Result<Frame<U>, E>
    where
        F: FnMut(&AssetName, &[T]) -> Result<Vec<U>, E>,
        E: From<DataError>,
    {
        let mut columns = FnvIndexMap::default();
        for (asset, column) in &self.columns {
            let mapped = f(asset, column)?;
            if mapped.len() != dates.len() {
                return Err(E::from(DataError::Misaligned));
            }
            columns.insert(asset.clone(), mapped);
        }

        Ok(Frame::from_parts(dates, columns))
    }
}

impl<T> Frame<T>
where
    T: Clone,
{
    /// 返回最后 `n` 行组成的新表（`n` 大于行数时返回整表）。
    pub fn tail(&self, n: usize) -> Self {
        let start = self.len().saturating_sub(n);
        let columns = self
            .columns
            .iter()
            .map(|(asset, column)| (asset.clone(), column[start..].to_vec()))
            .collect();

        Self::from_parts(self.dates[start..].to_vec(), columns)
    }

    /// 返回去掉指定资产列后的新表。资产不存在时返回原表的副本。
    pub fn without(&self, asset: &AssetName) -> Self {
        let columns = self
            .columns
            .iter()
            .filter(|(name, _)| *name != asset)
            .map(|(name, column)| (name.clone(), column.clone()))
            .collect();

        Self::from_parts(self.dates.clone(), columns)
    }

    /// 返回只包含指定资产列的新表，按 `assets` 的顺序排列。
    pub fn select<'a, Iter>(&self, assets: Iter) -> Result<Self, DataError>
    where
        Iter: IntoIterator<Item = &'a AssetName>,
    {
        let columns = assets
            .into_iter()
            .map(|asset| {
                self.try_column(asset)
                    .map(|column| (asset.clone(), column.to_vec()))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self::from_parts(self.dates.clone(), columns))
    }

    /// 最后一行，按资产映射。表为空时返回 `None`。
    pub fn last_row(&self) -> Option<(NaiveDate, FnvIndexMap<AssetName, T>)> {
        let date = *self.dates.last()?;
        let row = self
            .columns
            .iter()
            .filter_map(|(asset, column)| Some((asset.clone(), column.last()?.clone())))
            .collect();

        Some((date, row))
    }
}

/// 日期对齐后的价格表，所有价格为正。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PriceTable(pub Frame<Decimal>);

impl PriceTable {
    /// 底层数据表。
    pub fn frame(&self) -> &Frame<Decimal> {
        &self.0
    }

    /// 行数。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 表是否没有任何行。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 日收益率表，日期索引为价格表去掉第一个日期。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ReturnTable(pub Frame<Decimal>);

impl ReturnTable {
    /// 底层数据表。
    pub fn frame(&self) -> &Frame<Decimal> {
        &self.0
    }

    /// 行数。
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 表是否没有任何行。
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 去掉某一资产（通常是基准）后的收益率表，例如只包含基金的视图。
    pub fn without(&self, asset: &AssetName) -> Self {
        Self(self.0.without(asset))
    }

    /// 最后 `n` 行。
    pub fn tail(&self, n: usize) -> Self {
        Self(self.0.tail(n))
    }
}
