//! Date normalization into the RFC5322 `date-time` shape
//!
//! Bounce messages carry dates in every shape an MTA ever printed. The
//! normalizer classifies each space-separated token by its length and
//! content, then reassembles `Www, D Mon YYYY HH:MM:SS +ZZZZ`.

use crate::strings;
use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike};
use regex::Regex;
use tracing::trace;

static MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

static DAYS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// 2018-02-02T18:30:22, 2018-02-02T18:30:22.250Z, 2018-02-02T18:30:22+09:00
static ISO_8601_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?$").unwrap()
});

static ZONED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];

static NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Fields collected while walking the tokens
#[derive(Debug, Default)]
struct DateParts {
    year: Option<u16>,
    short_year: Option<u8>,
    month: Option<&'static str>,
    day: Option<u32>,
    weekday: Option<&'static str>,
    time: Option<String>,
    offset: Option<String>,
}

impl DateParts {
    /// Classifies one token; `None` aborts the whole normalization
    fn feed(&mut self, token: &str) -> Option<()> {
        let size = token.len();

        if size < 3 {
            // 1, 02, 31 or a 2-digit year such as 97
            if !strings::is_digits(token) {
                return None;
            }
            let value: u8 = token.parse().ok()?;
            if value == 0 || value > 31 {
                self.short_year = Some(value);
            } else {
                self.day = Some(u32::from(value));
            }
        } else if size == 3 || (size == 4 && token.ends_with(',')) {
            if strings::is_digits(token) && token.starts_with('0') {
                // Tue, 029 Apr 2019 23:34:45 -0800 (PST)
                if let Some(day) = token.parse::<u32>().ok().filter(|d| (1..=31).contains(d)) {
                    self.day = Some(day);
                }
            } else if let Some(name) = token.get(..3).map(title_case) {
                if let Some(month) = MONTHS.iter().copied().find(|e| *e == name) {
                    self.month = Some(month);
                } else if let Some(weekday) = DAYS.iter().copied().find(|e| *e == name) {
                    self.weekday = Some(weekday);
                }
            }
        } else if size == 4 {
            if strings::is_digits(token) {
                self.year = token.parse().ok();
            }
        } else if size == 5 && strings::has_prefix_any(token, &["+", "-"]) {
            // +0900, -0400
            if strings::is_digits(&token[1..]) {
                self.offset = Some(token.to_string());
            }
        } else if ISO_8601_REGEX.is_match(token) {
            self.feed_iso8601(token);
        } else if token.matches(':').count() == 2 {
            // 18:30:22 or 3:1:4
            let mut fields = [0u8; 3];
            for (slot, e) in fields.iter_mut().zip(token.split(':')) {
                if !strings::is_digits(e) {
                    return None;
                }
                *slot = e.parse::<u8>().ok().filter(|v| *v <= 60)?;
            }
            self.time = Some(format!("{:02}:{:02}:{:02}", fields[0], fields[1], fields[2]));
        }
        Some(())
    }

    /// Fills every field an ISO-8601 date-time token carries
    fn feed_iso8601(&mut self, token: &str) {
        let zoned = DateTime::parse_from_rfc3339(token).ok().or_else(|| {
            ZONED_FORMATS
                .iter()
                .find_map(|f| DateTime::parse_from_str(token, f).ok())
        });
        let (naive, offset) = match zoned {
            Some(dt) => (dt.naive_local(), Some(*dt.offset())),
            None => match NAIVE_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(token, f).ok())
            {
                Some(naive) => (naive, None),
                None => {
                    trace!(token, "not an ISO-8601 date-time");
                    return;
                }
            },
        };

        self.year = u16::try_from(naive.year()).ok();
        self.month = MONTHS.get(naive.month0() as usize).copied();
        self.day = Some(naive.day());
        if self.weekday.is_none() {
            self.weekday = DAYS
                .get(naive.weekday().num_days_from_sunday() as usize)
                .copied();
        }
        self.time = Some(format!(
            "{:02}:{:02}:{:02}",
            naive.hour(),
            naive.minute(),
            naive.second()
        ));
        if let Some(offset) = offset {
            self.offset = Some(format_offset(offset));
        }
    }

    fn finish(self) -> Option<String> {
        let year = self.year.or_else(|| {
            // RFC822 was published in August 1982
            self.short_year.filter(|y| *y > 0).map(|y| {
                let century = if y > 81 { 1900 } else { 2000 };
                century + u16::from(y)
            })
        })?;

        Some(format!(
            "{}, {} {} {:04} {} {}",
            self.weekday.unwrap_or("Thu"),
            self.day?,
            self.month?,
            year,
            self.time?,
            self.offset.as_deref().unwrap_or("+0000"),
        ))
    }
}

/// "fEB" -> "Feb"
fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

/// Converts a date string to `Www, D Mon YYYY HH:MM:SS +ZZZZ`.
///
/// Returns an empty string when the year, month, day or time of day cannot be
/// determined, or when a short numeric token is malformed. A missing weekday
/// becomes `Thu` and a missing offset becomes `+0000`.
///
/// ```
/// use bounce_fields::date::normalize;
///
/// assert_eq!(normalize("Thu,22 Feb 2022 22:22:22 +0900"), "Thu, 22 Feb 2022 22:22:22 +0900");
/// assert_eq!(normalize("2018-02-02T18:30:22 Fri"), "Fri, 2 Feb 2018 18:30:22 +0000");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let spaced = strings::squeeze(&text.replace(',', ", "), ' ');
    let mut parts = DateParts::default();
    for e in spaced.split(' ').filter(|e| !e.is_empty()) {
        if parts.feed(e).is_none() {
            trace!(token = e, "malformed date token");
            return String::new();
        }
    }
    parts.finish().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fEB"), "Feb");
        assert_eq!(title_case("THU"), "Thu");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_format_offset() {
        let east = FixedOffset::east_opt(9 * 3600).unwrap();
        let west = FixedOffset::west_opt(4 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_offset(east), "+0900");
        assert_eq!(format_offset(west), "-0430");
    }
}
