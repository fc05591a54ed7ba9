//! Plain-text rendering of homework data.
use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

use chrono::TimeZone;
use regex::Regex;

use crate::homeworks::{HomeworkDay, HomeworkSummary};

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("<[^<]+?>").expect("tag pattern is valid"));

const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Used when the timestamp has a sub-second part.
const MODIFIED_FORMAT_FRACTION: &str = "%Y-%m-%d %H:%M:%S%.6f";
const DAY_FORMAT: &str = "%A, %d of %B %Y";

/// Remove HTML tags. Entities are left as-is.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

/// `<title> - <id> - by <author> - last modified <datetime in tz>`
pub fn summary_line<Tz>(summary: &HomeworkSummary, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let modified = summary.modified_at().map_or_else(
        || summary.modified.millis.to_string(),
        |at| {
            let format = if at.timestamp_subsec_nanos() == 0 {
                MODIFIED_FORMAT
            } else {
                MODIFIED_FORMAT_FRACTION
            };
            at.with_timezone(tz).format(format).to_string()
        },
    );
    format!(
        "{} - {} - by {} - last modified {}",
        summary.title, summary.id, summary.author, modified
    )
}

/// Print one line per homework set, in the order received.
pub fn write_homework_list<W, Tz>(out: &mut W, list: &[HomeworkSummary], tz: &Tz) -> io::Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    for summary in list {
        writeln!(out, "{}", summary_line(summary, tz))?;
    }
    Ok(())
}

/// Print each day header followed by its entries, or `No homeworks`.
pub fn write_homeworks<W: Write>(out: &mut W, days: &[HomeworkDay]) -> io::Result<()> {
    if days.is_empty() {
        writeln!(out, "No homeworks")?;
        return Ok(());
    }

    for day in days {
        writeln!(out, "📖 {}", day.date.format(DAY_FORMAT))?;
        for entry in &day.entries {
            writeln!(out, "    📚 {}: {}", entry.title, strip_tags(&entry.value))?;
        }
    }
    Ok(())
}
