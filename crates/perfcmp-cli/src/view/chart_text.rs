use std::{
    fmt,
    io::{self, Write},
};

use perfcmp_stats::{boxplot::BoxPlotStats, descriptive::DescriptiveStats, histogram::Histogram};

use crate::model::{dataset::Dataset, summary_report::SummaryReport};

const MAX_BAR_WIDTH: usize = 40;

/// Writes the data behind the four comparison charts as plain text.
pub fn write_charts<W>(
    w: &mut W,
    dataset: &Dataset,
    report: &SummaryReport,
    num_bins: usize,
) -> io::Result<()>
where
    W: Write,
{
    write_time_series(w, dataset)?;
    write_distribution(w, dataset, num_bins)?;
    write_range(w, dataset)?;
    write_trend(w, report)?;
    write_statistics(w, dataset, report)?;
    Ok(())
}

fn write_heading<W>(w: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(w)?;
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "-".repeat(title.len()))
}

fn write_time_series<W>(w: &mut W, dataset: &Dataset) -> io::Result<()>
where
    W: Write,
{
    write_heading(w, "Performance Over Time")?;
    write!(w, "{:<10}", "Date")?;
    for series in &dataset.series {
        write!(w, " | {:>10}", series.name)?;
    }
    writeln!(w)?;
    for (day, date) in dataset.dates().enumerate() {
        write!(w, "{date}")?;
        for series in &dataset.series {
            match series.values.get(day) {
                Some(value) => write!(w, " | {value:>10.2}")?,
                None => write!(w, " | {:>10}", "-")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

fn write_distribution<W>(w: &mut W, dataset: &Dataset, num_bins: usize) -> io::Result<()>
where
    W: Write,
{
    write_heading(w, "Performance Distribution")?;
    for series in &dataset.series {
        writeln!(w, "{}:", series.name)?;
        let histogram = Histogram::new(series.values.iter().copied(), num_bins, None);
        write_histogram(
            w,
            histogram.bins.iter().map(|bin| {
                (
                    format!("{:7.2}..{:<7.2}", bin.range.start, bin.range.end),
                    bin.count,
                )
            }),
        )?;
    }
    Ok(())
}

fn write_histogram<W, I, S>(w: &mut W, data: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = (S, u64)>,
    S: fmt::Display,
{
    let data = data.collect::<Vec<_>>();
    let max_count = data.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    for (label, count) in &data {
        let bar_width = usize::try_from(count * MAX_BAR_WIDTH as u64 / max_count).unwrap_or(0);
        writeln!(w, "  {label:>16} | {count:<4} {}", "#".repeat(bar_width))?;
    }
    Ok(())
}

fn write_range<W>(w: &mut W, dataset: &Dataset) -> io::Result<()>
where
    W: Write,
{
    write_heading(w, "Performance Range Comparison")?;
    for series in &dataset.series {
        let Some(stats) = BoxPlotStats::new(series.values.iter().copied()) else {
            writeln!(w, "{}: no data", series.name)?;
            continue;
        };
        writeln!(
            w,
            "{}: whiskers {:.2}..{:.2}, box {:.2} | {:.2} | {:.2}, outliers {:.2?}",
            series.name,
            stats.lower_whisker,
            stats.upper_whisker,
            stats.q1,
            stats.median,
            stats.q3,
            stats.outliers,
        )?;
    }
    Ok(())
}

fn write_trend<W>(w: &mut W, report: &SummaryReport) -> io::Result<()>
where
    W: Write,
{
    write_heading(w, "Performance Trend Analysis")?;
    for series in &report.series {
        let trend = series.summary.trend();
        let points = trend.points(series.summary.len);
        let (Some(start), Some(end)) = (points.first(), points.last()) else {
            continue;
        };
        writeln!(
            w,
            "{}: y = {:.3}x {:+.3} (day 0: {start:.2}, day {}: {end:.2})",
            series.name,
            trend.slope,
            trend.intercept,
            points.len() - 1,
        )?;
    }
    Ok(())
}

fn write_statistics<W>(w: &mut W, dataset: &Dataset, report: &SummaryReport) -> io::Result<()>
where
    W: Write,
{
    write_heading(w, &format!("Statistics ({} days)", dataset.num_days()))?;
    // Mean, std and max come from the summary so they match the report figures exactly.
    for (series, entry) in dataset.series.iter().zip(&report.series) {
        let Some(stats) = DescriptiveStats::new(series.values.iter().copied()) else {
            continue;
        };
        let summary = &entry.summary;
        writeln!(
            w,
            "{}: mean {:.1}, median {:.1}, std {:.1}, max {:.1}",
            entry.name, summary.mean, stats.median, summary.std_dev, summary.max,
        )?;
    }
    Ok(())
}
