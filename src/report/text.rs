use crate::dashboard::{DashboardSnapshot, MarketView, Trend};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct HoldingRow {
    #[tabled(rename = "Asset")]
    name: &'static str,
    #[tabled(rename = "Symbol")]
    symbol: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Share")]
    share: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    title: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Asset")]
    name: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(rename = "Trend")]
    trend: &'static str,
    #[tabled(rename = "Sparkline")]
    spark: String,
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "▲",
        Trend::Negative => "▼",
    }
}

/// The MarketGraph header, in terminal form:
/// current price, signed move since the range start, and the range extremes.
fn market_header(market: &MarketView) -> String {
    let s = &market.summary;
    format!(
        "[{}] {} {}{:.2} ({}) High {} Low {}",
        market.timeframe,
        s.current,
        if s.delta < 0.0 { "-$" } else { "+$" },
        s.delta.abs(),
        s.percent_change,
        s.range_max,
        s.range_min,
    )
}

/// Crude block rendering of a sparkline, scaled to the spark band.
fn spark_strip(points: &[crate::domain::SparkPoint]) -> String {
    const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
    points
        .iter()
        .map(|p| {
            let norm = (p.value.value() - 10.0) / (150.0 - 10.0);
            let idx = ((norm * (GLYPHS.len() - 1) as f64).round() as usize).min(GLYPHS.len() - 1);
            GLYPHS[idx]
        })
        .collect()
}

pub fn render(snapshot: &DashboardSnapshot) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Crypto Portfolio Overview — {}\n\n",
        snapshot.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    out.push_str(&format!(
        "My Portfolio (total value {})\n",
        snapshot.total_value
    ));
    let allocation = snapshot.portfolio.allocation();
    let holding_rows: Vec<HoldingRow> = snapshot
        .portfolio
        .holdings
        .iter()
        .zip(&allocation)
        .map(|(h, slice)| HoldingRow {
            name: h.name,
            symbol: h.symbol,
            amount: format!("{:.8}", h.amount),
            value: h.value.to_string(),
            share: format!("{:.1}%", slice.share.value()),
        })
        .collect();
    out.push_str(&Table::new(holding_rows).with(Style::sharp()).to_string());
    out.push_str("\n\n");

    let stat_rows: Vec<StatRow> = snapshot
        .stats
        .iter()
        .map(|card| StatRow {
            title: card.title,
            value: card.value.to_string(),
            change: card.change.to_string(),
        })
        .collect();
    out.push_str(&Table::new(stat_rows).with(Style::sharp()).to_string());
    out.push_str("\n\n");

    out.push_str("Market Graph\n");
    out.push_str(&market_header(&snapshot.market));
    out.push('\n');
    out.push_str(&format!(
        "Total Balance {}   Profit {}   Loss {}\n\n",
        snapshot.market.balance.compact(),
        snapshot.market.profit.compact_signed(),
        snapshot.market.loss.compact_signed(),
    ));

    let summary_rows: Vec<SummaryRow> = snapshot
        .summaries
        .iter()
        .map(|card| SummaryRow {
            name: card.name,
            value: card.value.to_string(),
            change: card.change.to_string(),
            trend: trend_arrow(card.trend),
            spark: spark_strip(&card.spark),
        })
        .collect();
    out.push_str(&Table::new(summary_rows).with(Style::sharp()).to_string());
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Timeframe;
    use crate::dashboard::DashboardSnapshot;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn render_includes_every_section() {
        let mut rng = StdRng::seed_from_u64(9);
        let snapshot = DashboardSnapshot::generate(&mut rng, Timeframe::D7);
        let rendered = render(&snapshot);

        assert!(rendered.contains("My Portfolio"));
        assert!(rendered.contains("BTC"));
        assert!(rendered.contains("TOTAL INVESTED"));
        assert!(rendered.contains("Market Graph"));
        assert!(rendered.contains("[7D]"));
        assert!(rendered.contains("Total Balance $72.8k"));
        assert!(rendered.contains("Dash"));
    }

    #[test]
    fn spark_strip_is_one_glyph_per_point() {
        let mut rng = StdRng::seed_from_u64(10);
        let snapshot = DashboardSnapshot::generate(&mut rng, Timeframe::D7);
        let strip = spark_strip(&snapshot.summaries[0].spark);
        assert_eq!(strip.chars().count(), snapshot.summaries[0].spark.len());
    }
}
