//! Console table for a [`PortfolioReport`].

use rust_decimal::Decimal;
use tickerbook_core::constants::DISPLAY_DECIMAL_PRECISION;
use tickerbook_core::{HoldingRow, HoldingView, MarketSection, MarketTotals, PortfolioReport, Trend};

const UP_STYLE: &str = "\x1b[38;2;255;100;100m";
const DOWN_STYLE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

enum Line {
    Cells(Vec<String>, Option<Trend>),
    Title(String),
    Rule,
}

/// Renders every section of the report followed by the skipped holdings.
/// Rows are colored by trend when `color` is set.
pub fn render_report(report: &PortfolioReport, color: bool) -> String {
    let header = vec![
        "name".to_string(),
        "amount".to_string(),
        format!("investment({})", report.reporting_currency),
        format!("current({})", report.reporting_currency),
        format!("earnings({})", report.reporting_currency),
        "ratio".to_string(),
        "purchase".to_string(),
        "today".to_string(),
        "daily".to_string(),
        "daily%".to_string(),
    ];

    let mut lines = vec![Line::Cells(header, None), Line::Rule];
    for view in [HoldingView::Aggregated, HoldingView::PerLot] {
        lines.push(Line::Title(view.to_string()));
        for section in report.sections_for(view) {
            push_section(&mut lines, section);
        }
    }

    let widths = column_widths(&lines);
    let mut out = format!(
        "{}/{} {}\n\n",
        report.foreign_currency,
        report.reporting_currency,
        fixed(report.exchange_rate)
    );
    for line in &lines {
        out.push_str(&render_line(line, &widths, color));
        out.push('\n');
    }

    if !report.skipped.is_empty() {
        out.push_str("\nskipped:\n");
        for skipped in &report.skipped {
            out.push_str(&format!("  {}: {}\n", skipped.display_name, skipped.reason));
        }
    }
    out
}

fn push_section(lines: &mut Vec<Line>, section: &MarketSection) {
    for row in &section.rows {
        lines.push(Line::Cells(row_cells(row), Some(row.trend)));
    }
    lines.push(Line::Rule);
    lines.push(Line::Cells(totals_cells(section.market.as_str(), &section.totals), None));
    lines.push(Line::Rule);
}

fn row_cells(row: &HoldingRow) -> Vec<String> {
    vec![
        row.display_name.clone(),
        row.quantity.to_string(),
        group_thousands(row.cost),
        group_thousands(row.value),
        group_thousands(row.profit_loss),
        percent(row.price_ratio),
        fixed(row.purchase_price),
        fixed(row.current_price),
        fixed(row.daily_delta),
        percent(row.daily_delta_percent),
    ]
}

fn totals_cells(label: &str, totals: &MarketTotals) -> Vec<String> {
    let whole = totals.whole_units();
    vec![
        label.to_string(),
        String::new(),
        group_thousands(whole.total_cost),
        group_thousands(whole.total_value),
        group_thousands(whole.total_profit_loss),
        percent(totals.profit_loss_percent()),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ]
}

fn column_widths(lines: &[Line]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for line in lines {
        if let Line::Cells(cells, _) = line {
            for (i, cell) in cells.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
    }
    widths
}

fn render_line(line: &Line, widths: &[usize], color: bool) -> String {
    match line {
        Line::Rule => {
            let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
            "-".repeat(total)
        }
        Line::Title(title) => format!("[{}]", title),
        Line::Cells(cells, trend) => {
            let text = cells
                .iter()
                .zip(widths)
                .enumerate()
                .map(|(i, (cell, width))| {
                    if i == 0 {
                        format!("{:<width$}", cell, width = *width)
                    } else {
                        format!("{:>width$}", cell, width = *width)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ");
            let text = text.trim_end().to_string();
            match (color, trend) {
                (true, Some(Trend::Up)) => format!("{}{}{}", UP_STYLE, text, RESET),
                (true, Some(Trend::Down)) => format!("{}{}{}", DOWN_STYLE, text, RESET),
                _ => text,
            }
        }
    }
}

/// Whole units with thousands separators, e.g. `-1,234,567`.
fn group_thousands(value: Decimal) -> String {
    let whole = value.trunc();
    if whole.is_zero() {
        return "0".to_string();
    }
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole.is_sign_negative() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn fixed(value: Decimal) -> String {
    format!(
        "{:.prec$}",
        value.round_dp(DISPLAY_DECIMAL_PRECISION),
        prec = DISPLAY_DECIMAL_PRECISION as usize
    )
}

fn percent(value: Option<Decimal>) -> String {
    match value {
        Some(v) => format!("{}%", fixed(v)),
        None => "-".to_string(),
    }
}
