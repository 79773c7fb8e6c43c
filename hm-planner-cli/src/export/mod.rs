use anyhow::{Context, Result};
use chrono::Datelike;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::models::WeekPlan;
use crate::planner::Locale;

pub const DEFAULT_FILE_NAME: &str = "half_marathon_plan.csv";

const HEADER: [&str; 6] = ["Week", "Date", "Day", "Block", "Label", "Detail"];

/// Every field quoted, `\n` row endings.
fn csv_writer<W: Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(inner)
}

/// Write the header and one row per session, returning the session count.
fn write_rows<W: Write>(
    plan: &[WeekPlan],
    locale: Locale,
    writer: &mut csv::Writer<W>,
) -> Result<usize> {
    writer.write_record(HEADER)?;

    let mut rows = 0;
    for week in plan {
        for session in &week.sessions {
            writer.write_record([
                week.week_index.to_string(),
                session.date.format("%Y-%m-%d").to_string(),
                locale.weekday_char(session.date.weekday()).to_string(),
                week.block.key().to_string(),
                session.label.clone(),
                session.detail.clone(),
            ])?;
            rows += 1;
        }
    }

    writer.flush()?;
    Ok(rows)
}

/// Render the plan as CSV, one row per session.
pub fn plan_to_csv(plan: &[WeekPlan], locale: Locale) -> Result<String> {
    let mut writer = csv_writer(Vec::new());
    write_rows(plan, locale, &mut writer)?;

    let bytes = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .context("Failed to finish CSV buffer")?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the plan CSV to `path`, returning the number of session rows.
pub fn write_csv(plan: &[WeekPlan], locale: Locale, path: &Path) -> Result<usize> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = csv_writer(file);
    let rows = write_rows(plan, locale, &mut writer)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Exported {} sessions to {}", rows, path.display());
    Ok(rows)
}
