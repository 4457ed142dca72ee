//! Returns 收益率模块
//!
//! - 日收益率：`r[t] = p[t] / p[t-1] - 1`，丢弃第一行
//! - 累计收益率：`c[t] = prod(1 + r[i], i <= t) - 1`

use crate::{
    asset::AssetName,
    error::DataError,
    frame::{CumulativeTable, PriceTable, ReturnTable},
};
use itertools::Itertools;
use rust_decimal::Decimal;
use smol_str::SmolStr;
use tracing::debug;

/// 计算每个资产的日收益率。
///
/// 返回表的日期索引为价格表去掉第一个日期，每列长度为价格列长度减一。
///
/// # 错误
///
/// - [`DataError::TooFewPrices`]: 价格点少于 2 个
/// - [`DataError::Overflow`]: Decimal 运算溢出
pub fn daily_returns(prices: &PriceTable) -> Result<ReturnTable, DataError> {
    let frame = prices.frame();

    if frame.len() < 2 {
        let asset = frame
            .assets()
            .next()
            .cloned()
            .ok_or(DataError::NoAssets)?;

        return Err(DataError::TooFewPrices {
            asset,
            available: frame.len(),
        });
    }

    let dates = frame.dates()[1..].to_vec();
    let returns = frame.try_map_columns(dates, |asset, column| {
        column
            .iter()
            .tuple_windows()
            .map(|(prev, next)| simple_return(asset, *prev, *next))
            .collect::<Result<Vec<_>, DataError>>()
    })?;

    debug!(assets = returns.columns().count(), rows = returns.len(), "computed daily returns");

    Ok(ReturnTable(returns))
}

/// 单期简单收益率 `next / prev - 1`。
fn simple_return(asset: &AssetName, prev: Decimal, next: Decimal) -> Result<Decimal, DataError> {
    next.checked_div(prev)
        .and_then(|ratio| ratio.checked_sub(Decimal::ONE))
        .ok_or_else(|| overflow(asset, "daily return"))
}

/// 计算每个资产的累计收益率。
///
/// 第一个值等于第一个日收益率。
///
/// # 错误
///
/// 复利乘积溢出时返回 [`DataError::Overflow`]。
pub fn cumulative_returns(returns: &ReturnTable) -> Result<CumulativeTable, DataError> {
    let frame = returns.frame();

    frame.try_map_columns(frame.dates().to_vec(), |asset, column| {
        let mut growth = Decimal::ONE;
        let mut cumulative = Vec::with_capacity(column.len());

        for daily in column {
            growth = Decimal::ONE
                .checked_add(*daily)
                .and_then(|factor| growth.checked_mul(factor))
                .ok_or_else(|| overflow(asset, "cumulative return"))?;

            cumulative.push(growth - Decimal::ONE);
        }

        Ok(cumulative)
    })
}

fn overflow(asset: &AssetName, statistic: &str) -> DataError {
    DataError::Overflow(SmolStr::from(format!("{statistic} of {asset}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        frame::align::PriceSeries,
        test_utils::{consecutive_series, date, decimal_is_eq},
    };
    use rust_decimal_macros::dec;

    fn prices(series: impl IntoIterator<Item = PriceSeries>) -> PriceTable {
        PriceTable::align(series).unwrap()
    }

    #[test]
    fn test_daily_and_cumulative_returns() {
        let table = prices([consecutive_series(
            "FUND",
            date(2020, 1, 1),
            [100.0, 110.0, 99.0],
        )]);

        let returns = daily_returns(&table).unwrap();
        let fund = AssetName::from("FUND");

        assert_eq!(returns.frame().dates(), &[date(2020, 1, 2), date(2020, 1, 3)]);
        assert_eq!(returns.frame().column(&fund), Some(&[dec!(0.1), dec!(-0.1)][..]));

        let cumulative = cumulative_returns(&returns).unwrap();
        assert_eq!(cumulative.column(&fund), Some(&[dec!(0.1), dec!(-0.01)][..]));
    }

    #[test]
    fn test_daily_returns_constant_prices() {
        let table = prices([consecutive_series(
            "FLAT",
            date(2020, 1, 1),
            [50.0, 50.0, 50.0, 50.0],
        )]);

        let returns = daily_returns(&table).unwrap();
        assert_eq!(
            returns.frame().column(&AssetName::from("FLAT")),
            Some(&[dec!(0), dec!(0), dec!(0)][..])
        );
    }

    #[test]
    fn test_daily_returns_too_few_prices() {
        let table = prices([consecutive_series("FUND", date(2020, 1, 1), [100.0])]);

        assert_eq!(
            daily_returns(&table),
            Err(DataError::TooFewPrices {
                asset: AssetName::from("FUND"),
                available: 1,
            })
        );
    }

    #[test]
    fn test_returns_length_and_compounding() {
        let navs = crate::test_utils::synthetic_navs(250, 1.0, 0.0004, 1.1, 0.3);
        let index = crate::test_utils::synthetic_navs(250, 3000.0, 0.0003, 1.0, 2.1);
        let table = prices([
            consecutive_series("FUND", date(2019, 1, 1), navs),
            consecutive_series("S&P 500", date(2019, 1, 1), index),
        ]);

        let returns = daily_returns(&table).unwrap();
        let cumulative = cumulative_returns(&returns).unwrap();

        for (asset, daily) in returns.frame().columns() {
            assert_eq!(daily.len(), table.len() - 1);

            let product = daily
                .iter()
                .fold(Decimal::ONE, |acc, daily| acc * (Decimal::ONE + daily));
            let last = cumulative.column(asset).and_then(|column| column.last()).unwrap();

            assert!(decimal_is_eq(*last + Decimal::ONE, product, dec!(0.000000001)));
        }

        let fund = table.frame().column(&AssetName::from("FUND")).unwrap();
        let expected = fund[fund.len() - 1] / fund[0] - Decimal::ONE;
        let (_, last) = cumulative.last_row().unwrap();
        assert!(decimal_is_eq(
            last[&AssetName::from("FUND")],
            expected,
            dec!(0.000000001)
        ));
    }
}
