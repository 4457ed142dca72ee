//! Align 日期对齐模块
//!
//! 将多个按日期索引的价格序列对齐为一个 [`PriceTable`]：
//!
//! 1. 校验每个序列：非空、无重复日期、数值有限且为正
//! 2. 丢弃缺失值（`None`），例如某基金成立前的前导缺失
//! 3. 取所有资产日期的交集并升序排列

use crate::{
    Dated,
    asset::AssetName,
    error::DataError,
    frame::{FnvIndexMap, Frame, PriceTable},
};
use chrono::NaiveDate;
use derive_more::Constructor;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// 单个资产的原始价格序列。
///
/// 日期可以是任意顺序；缺失的价格点以 `None` 表示，并在对齐时被丢弃。
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Constructor)]
pub struct PriceSeries {
    /// 资产名称。
    pub asset: AssetName,
    /// 价格点。
    pub points: Vec<Dated<Option<f64>>>,
}

impl PriceSeries {
    /// 从 `(日期, 价格)` 对构造没有缺失值的 [`PriceSeries`]。
    pub fn from_values<A, Iter>(asset: A, values: Iter) -> Self
    where
        A: Into<AssetName>,
        Iter: IntoIterator<Item = (NaiveDate, f64)>,
    {
        Self {
            asset: asset.into(),
            points: values
                .into_iter()
                .map(|(date, value)| Dated::new(Some(value), date))
                .collect(),
        }
    }

    /// 校验序列并转换为按日期排序的 `Decimal` 价格映射。
    fn validate(&self) -> Result<BTreeMap<NaiveDate, Decimal>, DataError> {
        if self.points.is_empty() {
            return Err(DataError::EmptySeries(self.asset.clone()));
        }

        let mut seen = BTreeSet::new();
        let mut prices = BTreeMap::new();

        for point in &self.points {
            if !seen.insert(point.date) {
                return Err(DataError::DuplicateDate {
                    asset: self.asset.clone(),
                    date: point.date,
                });
            }

            // 缺失值直接跳过
            let Some(value) = point.value else {
                continue;
            };

            let price = Decimal::from_f64(value)
                .filter(|_| value.is_finite())
                .ok_or_else(|| DataError::NonNumeric {
                    asset: self.asset.clone(),
                    date: point.date,
                })?;

            if price <= Decimal::ZERO {
                return Err(DataError::NonPositive {
                    asset: self.asset.clone(),
                    date: point.date,
                    value: price,
                });
            }

            prices.insert(point.date, price);
        }

        if prices.is_empty() {
            return Err(DataError::EmptySeries(self.asset.clone()));
        }

        Ok(prices)
    }
}

impl PriceTable {
    /// 将多个资产的价格序列对齐为一个 [`PriceTable`]。
    ///
    /// 结果表的日期索引是所有资产有效日期的交集，升序排列；列顺序与输入顺序一致。
    ///
    /// # 错误
    ///
    /// - [`DataError::NoAssets`]: 未提供任何序列
    /// - [`DataError::DuplicateAsset`]: 同一资产出现多次
    /// - [`DataError::EmptySeries`]: 某个序列为空或全部缺失
    /// - [`DataError::DuplicateDate`]、[`DataError::NonNumeric`]、[`DataError::NonPositive`]
    /// - [`DataError::NoCommonDates`]: 日期交集为空
    pub fn align<Iter>(series: Iter) -> Result<Self, DataError>
    where
        Iter: IntoIterator<Item = PriceSeries>,
    {
        let mut validated: FnvIndexMap<AssetName, BTreeMap<NaiveDate, Decimal>> =
            FnvIndexMap::default();

        for series in series {
            if validated.contains_key(&series.asset) {
                return Err(DataError::DuplicateAsset(series.asset));
            }
            let prices = series.validate()?;
            validated.insert(series.asset, prices);
        }

        let Some((_, first)) = validated.first() else {
            return Err(DataError::NoAssets);
        };

        let dates = first
            .keys()
            .filter(|date| validated.values().all(|prices| prices.contains_key(*date)))
            .copied()
            .collect::<Vec<_>>();

        if dates.is_empty() {
            return Err(DataError::NoCommonDates);
        }

        let columns = validated
            .into_iter()
            .map(|(asset, prices)| {
                let dropped = prices.len() - dates.len();
                if dropped > 0 {
                    debug!(%asset, dropped, "PriceTable dropped dates not shared by every asset");
                }

                let column = dates
                    .iter()
                    .filter_map(|date| prices.get(date).copied())
                    .collect::<Vec<_>>();

                (asset, column)
            })
            .collect::<FnvIndexMap<_, _>>();

        info!(
            assets = columns.len(),
            rows = dates.len(),
            first = %dates[0],
            last = %dates[dates.len() - 1],
            "PriceTable aligned"
        );

        Ok(Self(Frame::from_parts(dates, columns)))
    }
}
