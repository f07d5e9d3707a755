//! Best-effort reading of the free-text `dates` field.
//!
//! Two shapes are understood:
//! - `"<start> to <end>"` where `<end>` is a day and month name (`"13 March"`, `"March 13"`,
//!   `"13th March"`). The event ends once the whole end day has passed.
//! - `"... in <Month>"` (`"Every Saturday in April"`). The event ends once the last day of
//!   that month has begun.
//!
//! Neither shape carries a year, so the current year in the board's time zone is assumed.
//! Ranges crossing New Year, or data viewed in a later year, are read wrongly. Anything
//! else is inconclusive and never counts as ended.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Whether the event described by `dates_text` is over at `now`.
pub fn has_concluded(now: DateTime<Utc>, dates_text: &str, tz: Tz) -> bool {
    let year = now.with_timezone(&tz).year();
    concluded_at(dates_text, year, tz).is_some_and(|end| now > end)
}

/// The instant after which the event counts as over, if the text can be read.
pub fn concluded_at(dates_text: &str, year: i32, tz: Tz) -> Option<DateTime<Utc>> {
    let words: Vec<&str> = dates_text.split_whitespace().collect();

    if let Some(pos) = words.iter().position(|w| w.eq_ignore_ascii_case("to")) {
        let end_day = parse_day_month(&words[pos + 1..], year)?;
        return local_midnight(end_day.succ_opt()?, tz);
    }

    if words.iter().any(|w| w.eq_ignore_ascii_case("in")) {
        let month = find_month(dates_text)?;
        return local_midnight(last_day_of_month(year, month)?, tz);
    }

    None
}

fn parse_day_month(words: &[&str], year: i32) -> Option<NaiveDate> {
    if words.is_empty() {
        return None;
    }

    let cleaned: Vec<&str> = words.iter()
        .map(|w| w.trim_matches(|c: char| c == ',' || c == '.'))
        .map(strip_ordinal)
        .filter(|w| !w.is_empty())
        .collect();
    let candidate = format!("{} {}", cleaned.join(" "), year);

    ["%d %B %Y", "%B %d %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&candidate, fmt).ok())
}

fn strip_ordinal(word: &str) -> &str {
    let digits = word.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return word;
    }
    match &word[digits..].to_ascii_lowercase()[..] {
        "st" | "nd" | "rd" | "th" => &word[..digits],
        _ => word,
    }
}

/// 1-based month whose name appears earliest in `text`, ignoring case.
fn find_month(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    MONTHS.iter()
        .enumerate()
        .filter_map(|(idx, name)| lower.find(name).map(|at| (at, idx as u32 + 1)))
        .min_by_key(|(at, _)| *at)
        .map(|(_, month)| month)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).map(|first| first - Duration::days(1))
}

fn local_midnight(day: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&day.and_hms_opt(0, 0, 0)?)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}
