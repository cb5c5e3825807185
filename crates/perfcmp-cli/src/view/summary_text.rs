use std::io::{self, Write};

use crate::model::summary_report::SummaryReport;

const RULE_WIDTH: usize = 50;

/// Writes the human-readable comparison: one block per series, then the verdict.
pub fn write_summary<W>(w: &mut W, report: &SummaryReport) -> io::Result<()>
where
    W: Write,
{
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w, "{rule}")?;
    writeln!(w, "PERFORMANCE ANALYSIS SUMMARY")?;
    writeln!(w, "{rule}")?;

    for series in &report.series {
        let s = &series.summary;
        writeln!(w)?;
        writeln!(w, "{} Performance:", series.name)?;
        writeln!(w, "  - Average: {:.2}", s.mean)?;
        writeln!(w, "  - Improvement: {:+.2} over {} days", s.delta, s.len)?;
        writeln!(w, "  - Consistency (lower is better): {:.2}", s.std_dev)?;
        writeln!(w, "  - Peak: {:.2}", s.max)?;
        writeln!(w, "  - Trend: {:+.2} per day", s.trend_slope)?;
    }

    writeln!(w)?;
    match &report.verdict {
        Some(verdict) => writeln!(w, "Winner: {verdict}")?,
        None => writeln!(w, "Winner: none (no series)")?,
    }
    writeln!(w, "{rule}")?;
    Ok(())
}
