// Colored terminal output for scan summaries and the code-point table.
//
// Everything here prints to stdout; main.rs keeps logging on stderr so the
// two never interleave in a pipe.

use colored::Colorize;

use crate::filter::ScanReport;
use crate::tables::ranges::CodePointRange;

/// Display what a strip would remove from one input.
pub fn display_scan_report(label: &str, report: &ScanReport, stripped: &str) {
    println!("\n{}", format!("=== {label} ===").bold());

    if report.is_clean() {
        println!("  {}", "clean: nothing to strip".green());
    } else {
        println!(
            "  Emoji runs: {} ({} code points)",
            colorize_count(report.emoji_runs),
            report.emoji_chars
        );
        println!("  Emoticons:  {}", colorize_count(report.emoticons));
    }

    if report.preserved > 0 {
        println!("  Preserved:  {}", report.preserved.to_string().cyan());
    }

    let preview = super::truncate_chars(&super::single_line(stripped), 80);
    if !preview.is_empty() {
        println!("  Result: {}", preview.dimmed());
    }
}

/// Display totals across several inputs.
pub fn display_scan_totals(inputs: usize, total: &ScanReport) {
    println!();
    println!(
        "  {} inputs, {} emoji runs, {} emoticons, {} preserved",
        inputs,
        colorize_count(total.emoji_runs),
        colorize_count(total.emoticons),
        total.preserved
    );
}

/// Display the emoji code-point table.
pub fn display_ranges(ranges: &[CodePointRange]) {
    println!(
        "\n{}",
        format!("=== Emoji Ranges ({} entries) ===", ranges.len()).bold()
    );
    println!();
    println!(
        "  {:<19} {:>6}  {}",
        "Range".dimmed(),
        "Count".dimmed(),
        "Block".dimmed()
    );
    println!("  {}", "-".repeat(60).dimmed());

    for range in ranges {
        let span = if range.start == range.end {
            format!("U+{:04X}", range.start)
        } else {
            format!("U+{:04X}..U+{:04X}", range.start, range.end)
        };
        println!("  {:<19} {:>6}  {}", span, range.size(), range.name);
    }

    let total: u32 = ranges.iter().map(|r| r.size()).sum();
    println!();
    println!("  {} code points total", total);
}

fn colorize_count(count: usize) -> colored::ColoredString {
    match count {
        0 => count.to_string().green(),
        1..=9 => count.to_string().yellow(),
        _ => count.to_string().red().bold(),
    }
}
