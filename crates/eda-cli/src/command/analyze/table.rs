//! Text table display
//!
//! This module prints every part of an analysis report as a fixed-width
//! text table, and histograms as horizontal `#` bars.

use eda_analysis::{
    categorical::FrequencyTable,
    correlation::{CorrelationMatrix, CorrelationTable, OutcomeCorrelations},
    dataset::Record,
    missing::MissingValueReport,
    numeric::NumericSummary,
    outcome::GroupOutcomeReport,
    session::DatasetInfo,
};
use eda_stats::histogram::Histogram;

/// Widest a preview cell may get before it is truncated
const MAX_PREVIEW_WIDTH: usize = 20;

/// Length of the longest histogram bar
const MAX_BAR_WIDTH: usize = 40;

fn print_separator(width: usize) {
    println!("  {}", "-".repeat(width));
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut truncated = text.chars().take(width - 1).collect::<String>();
    truncated.push('…');
    truncated
}

pub(super) fn print_overview(info: &DatasetInfo) {
    println!("Dataset Overview:");
    println!(
        "  Records: {} total, {} train, {} test",
        info.total_records, info.train_records, info.test_records
    );
    println!("  Features: {}", info.features.join(", "));
}

pub(super) fn print_preview(columns: &[String], records: &[Record]) {
    let cells = records
        .iter()
        .map(|record| {
            record
                .values()
                .iter()
                .map(|value| truncate(&value.to_string(), MAX_PREVIEW_WIDTH))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let widths = columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .chain([column.chars().count().min(MAX_PREVIEW_WIDTH)])
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    let header = columns
        .iter()
        .zip(&widths)
        .map(|(column, &width)| format!("{:<width$}", truncate(column, width)))
        .collect::<Vec<_>>()
        .join(" ");
    println!("  {header}");
    print_separator(widths.iter().sum::<usize>() + widths.len().saturating_sub(1));
    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {line}");
    }
}

pub(super) fn print_missing_values(report: &MissingValueReport) {
    println!("  {:<20} {:>8} {:>9}", "Column", "Missing", "Percent");
    print_separator(39);
    for entry in &report.entries {
        println!(
            "  {:<20} {:>8} {:>8.2}%",
            entry.column, entry.missing_count, entry.percentage
        );
    }
}

pub(super) fn print_numeric_summary(summary: &NumericSummary) {
    println!(
        "  {:<12} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "Column", "Count", "Mean", "Median", "Std Dev", "Min", "Max"
    );
    print_separator(74);
    for column in &summary.columns {
        let stats = &column.stats;
        println!(
            "  {:<12} {:>6} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>10.2}",
            column.column, stats.count, stats.mean, stats.median, stats.std_dev, stats.min, stats.max
        );
    }
}

pub(super) fn print_frequency_table(table: &FrequencyTable) {
    println!("  {:<20} {:>8} {:>9}", "Value", "Count", "Percent");
    print_separator(39);
    for entry in &table.entries {
        println!(
            "  {:<20} {:>8} {:>8.2}%",
            entry.value, entry.count, entry.percentage
        );
    }
}

#[expect(clippy::cast_possible_truncation)]
#[expect(clippy::cast_precision_loss)]
#[expect(clippy::cast_sign_loss)]
pub(super) fn print_histogram(histogram: &Histogram) {
    let max_count = histogram.bins.iter().map(|b| b.count).max().unwrap_or(0);
    for bin in &histogram.bins {
        let bar_len = if max_count == 0 {
            0
        } else {
            (bin.count as f64 / max_count as f64 * MAX_BAR_WIDTH as f64).round() as usize
        };
        println!(
            "  {:<8} {:>6} {}",
            bin.label(),
            bin.count,
            "#".repeat(bar_len)
        );
    }
}

pub(super) fn print_outcome_table(label_col: &str, report: &GroupOutcomeReport<String>) {
    println!(
        "  {:<20} {:>8} {:>8} {:>8} {:>9}",
        label_col, "Survived", "Died", "Total", "Rate"
    );
    print_separator(57);
    for (group, counts) in &report.groups {
        let rate = counts
            .survival_rate()
            .map_or("N/A".to_string(), |r| format!("{:.1}%", r * 100.0));
        println!(
            "  {:<20} {:>8} {:>8} {:>8} {:>9}",
            group,
            counts.survived,
            counts.died,
            counts.total(),
            rate
        );
    }
}

pub(super) fn print_correlation(table: &CorrelationTable) {
    match table {
        CorrelationTable::Matrix(matrix) => print_correlation_matrix(matrix),
        CorrelationTable::OutcomeVector(vector) => print_outcome_correlations(vector),
    }
}

fn print_correlation_matrix(matrix: &CorrelationMatrix) {
    let header = matrix
        .features
        .iter()
        .map(|f| format!("{:>9}", truncate(f, 9)))
        .collect::<String>();
    println!("  {:<10}{header}", "");
    print_separator(10 + 9 * matrix.features.len());
    for (feature, row) in matrix.features.iter().zip(&matrix.values) {
        let cells = row.iter().map(|r| format!("{r:>9.3}")).collect::<String>();
        println!("  {:<10}{cells}", truncate(feature, 10));
    }
}

fn print_outcome_correlations(vector: &OutcomeCorrelations) {
    println!("  {:<12} {:>12}", "Feature", format!("r({})", vector.outcome));
    print_separator(25);
    for (feature, r) in &vector.entries {
        println!("  {feature:<12} {r:>12.3}");
    }
}
