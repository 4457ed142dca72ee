use navrisk::{
    calculator::RiskReturnCalculator,
    config::AnalysisConfig,
    frame::Frame,
    logging::init_logging,
    rank::sort_ascending,
    test_utils::{consecutive_series, date, synthetic_navs},
};
use std::{fmt::Debug, fs::File, io::BufReader};

/// 分析配置文件路径。
const FILE_PATH_ANALYSIS_CONFIG: &str = "navrisk/examples/config/analysis_config.json";

/// 合成序列的交易日数量（约四年）。
const TRADING_DAYS: usize = 1_000;

/// 复查表格末尾的行数。
const TAIL_ROWS: usize = 5;

/// 示例：评估四个"巨鲸"基金相对 S&P 500 的风险与收益。
///
/// NAV 序列是确定性生成的合成数据，因此示例无需任何外部文件即可运行。
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志追踪
    init_logging();

    // 加载分析配置
    let config = load_config()?;
    let calculator = RiskReturnCalculator::new(config)?;

    // 生成基金与基准的 NAV 序列
    let start = date(2015, 3, 2);
    let series = [
        ("SOROS FUND MANAGEMENT LLC", 1.0, 0.0001, 0.45, 0.3),
        ("PAULSON & CO.INC.", 1.0, -0.0002, 0.35, 1.9),
        ("TIGER GLOBAL MANAGEMENT LLC", 1.0, 0.0000, 0.25, 4.1),
        ("BERKSHIRE HATHAWAY INC", 1.0, 0.0003, 0.85, 2.7),
        ("S&P 500", 2_100.0, 0.0003, 1.0, 0.0),
    ]
    .map(|(asset, nav, drift, beta, phase)| {
        consecutive_series(asset, start, synthetic_navs(TRADING_DAYS, nav, drift, beta, phase))
    });

    // 对齐并计算收益率
    let prices = calculator.align(series)?;
    let returns = calculator.daily_returns(&prices)?;

    // 复查累计收益率的最后几行
    let cumulative = calculator.cumulative_returns(&returns)?;
    print_tail("Cumulative Returns", &cumulative);

    // 年化标准差，按升序排列
    let volatility = calculator.annualized_std_dev(&returns)?;
    println!("\n--- Annualized Standard Deviation (ascending) ---");
    for (asset, std_dev) in sort_ascending(&volatility) {
        println!("{asset:<30} {:.4}", std_dev.value);
    }

    // 仅基金的滚动波动率
    let funds = calculator.fund_returns(&returns);
    print_tail("Rolling Std Dev (funds)", &calculator.rolling_std_dev(&funds));

    // 基准滚动方差、协方差与 Beta
    print_tail(
        "Rolling Variance (benchmark)",
        &calculator.benchmark_rolling_variance(&returns)?,
    );
    print_tail("Rolling Covariance", &calculator.rolling_covariance(&returns)?);
    print_tail("Rolling Beta", &calculator.rolling_beta(&returns)?);

    // 生成 RiskReturnSummary 并打印到终端
    let summary = calculator.summary(&prices)?;
    summary.print_summary();

    Ok(())
}

/// 打印表格的最后几行。
fn print_tail<T>(title: &str, frame: &Frame<T>)
where
    T: Clone + Debug,
{
    println!("\n--- {title} (last {TAIL_ROWS} rows) ---");
    let tail = frame.tail(TAIL_ROWS);
    for (row, date) in tail.dates().iter().enumerate() {
        let cells = tail
            .columns()
            .map(|(asset, column)| format!("{asset}={:?}", column[row]))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{date} {cells}");
    }
}

/// 从文件加载分析配置。
fn load_config() -> Result<AnalysisConfig, Box<dyn std::error::Error>> {
    let file = File::open(FILE_PATH_ANALYSIS_CONFIG)?;
    let reader = BufReader::new(file);
    let config = AnalysisConfig::from_reader(reader)?;
    Ok(config)
}
