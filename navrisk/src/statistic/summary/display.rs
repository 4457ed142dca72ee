use crate::{
    asset::AssetKind,
    statistic::{summary::RiskReturnSummary, time::TimeInterval},
};
use prettytable::{Cell, Row, Table, format::consts::FORMAT_BOX_CHARS, row};
use rust_decimal::Decimal;

const DECIMAL_PLACES: u32 = 4;
const UNDEFINED: &str = "n/a";

impl<Interval> RiskReturnSummary<Interval>
where
    Interval: TimeInterval,
{
    /// 生成摘要文本表格，行按 Sharpe Ratio 升序排列。
    pub fn table(&self) -> Table {
        let interval = self
            .assets
            .values()
            .next()
            .map(|summary| summary.std_dev_annualized.interval.name())
            .unwrap_or_default();

        let mut table = Table::new();
        table.set_format(*FORMAT_BOX_CHARS);
        table.set_titles(row![
            "Asset",
            "Kind",
            "Std Dev (Daily)",
            format!("Std Dev ({interval})"),
            format!("Mean Return ({interval})"),
            format!("Sharpe ({interval})"),
            "Cumulative Return",
            "Mean Beta"
        ]);

        for (asset, summary) in self.ranked_by_sharpe() {
            let kind = match summary.kind {
                AssetKind::Fund => "Fund",
                AssetKind::Benchmark => "Benchmark",
            };

            table.add_row(Row::new(vec![
                Cell::new(asset.as_ref()),
                Cell::new(kind),
                Cell::new(&format_decimal(summary.std_dev.value)),
                Cell::new(&format_decimal(summary.std_dev_annualized.value)),
                Cell::new(&format_decimal(summary.mean_return_annualized.value)),
                Cell::new(&format_optional(
                    summary.sharpe_ratio.as_ref().map(|sharpe| sharpe.value),
                )),
                Cell::new(&format_decimal(summary.cumulative_return)),
                Cell::new(&format_optional(summary.beta_mean)),
            ]));
        }

        table
    }

    /// 将摘要打印到标准输出。
    pub fn print_summary(&self) {
        println!(
            "\n--- Risk Return Summary: {} to {} (benchmark {}) ---",
            self.time_start, self.time_end, self.benchmark
        );
        self.table().printstd();
    }
}

fn format_decimal(value: Decimal) -> String {
    value.round_dp(DECIMAL_PLACES).to_string()
}

fn format_optional(value: Option<Decimal>) -> String {
    value
        .map(format_decimal)
        .unwrap_or_else(|| UNDEFINED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        asset::AssetName,
        frame::FnvIndexMap,
        statistic::{summary::AssetSummary, time::TradingYear},
        test_utils::date,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(dec!(1.234567))), "1.2346");
        assert_eq!(format_optional(None), "n/a");
    }

    #[test]
    fn test_table_has_one_row_per_asset() {
        let mut assets = FnvIndexMap::default();
        for (asset, kind, returns) in [
            ("FUND", AssetKind::Fund, [dec!(0.01), dec!(0.03)]),
            ("S&P 500", AssetKind::Benchmark, [dec!(0), dec!(0)]),
        ] {
            assets.insert(
                AssetName::from(asset),
                AssetSummary::generate(
                    kind,
                    &returns,
                    dec!(0.0403),
                    None,
                    dec!(0),
                    TradingYear::default(),
                )
                .unwrap(),
            );
        }

        let summary = RiskReturnSummary::new(
            date(2020, 1, 2),
            date(2020, 1, 3),
            AssetName::from("S&P 500"),
            assets,
        );

        let table = summary.table();
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("Annual(252)"));
        assert!(rendered.contains("n/a"));
        assert!(rendered.contains("0.0403"));
    }
}
