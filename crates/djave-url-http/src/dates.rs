//! Date tokens in URLs.
//!
//! Dates travel in query strings as `YYYY-MM-DD`. Decoding is lenient about
//! one historical typo: a day past the end of its month (`2017-09-31`) is
//! repaired by stepping the month back until the day fits, so that token
//! decodes to `2017-08-31`.

use chrono::{Datelike, NaiveDate};

use djave_url_core::{DateParseError, DateParseErrorKind, UrlResult};

use crate::full_path::{query_as_dict, FullPath};

/// The `strftime` format of a date token.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The query parameter that carries the selected day.
pub const DAY_PARAM: &str = "day";

/// Formats a date as a URL token (`YYYY-MM-DD`).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use djave_url_http::dates::date_to_url_str;
///
/// let day = NaiveDate::from_ymd_opt(2018, 2, 5).unwrap();
/// assert_eq!(date_to_url_str(day), "2018-02-05");
/// ```
pub fn date_to_url_str(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a URL token back into a date.
///
/// The token must be `Y-M-D` with a month in `1..=12` and a day in
/// `1..=31`; month and day need not be zero-padded. The year is written the
/// way [`date_to_url_str`] writes it: four bare digits for `0000..=9999`,
/// otherwise a `+` or `-` sign and at least four digits, so every
/// `NaiveDate` survives a round trip. When the day is
/// past the end of the month, the month is decremented (keeping the day)
/// until a real date comes out.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use djave_url_http::dates::url_str_to_date;
///
/// assert_eq!(
///     url_str_to_date("2017-09-31").unwrap(),
///     NaiveDate::from_ymd_opt(2017, 8, 31).unwrap()
/// );
/// assert!(url_str_to_date("not-a-date").is_err());
/// ```
pub fn url_str_to_date(token: &str) -> Result<NaiveDate, DateParseError> {
    let (year, mut month, day) = split_token(token)?;

    loop {
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Ok(date);
        }
        if month <= 1 {
            return Err(DateParseError::new(token, DateParseErrorKind::MonthUnderflow));
        }
        tracing::debug!(token, month, day, "day is out of range for month, trying the month before");
        month -= 1;
    }
}

/// Reads the [`DAY_PARAM`] date out of a path or request.
///
/// A missing or blank `day` parameter yields `today`.
pub fn date_from_url<S: FullPath + ?Sized>(source: &S, today: NaiveDate) -> UrlResult<NaiveDate> {
    let query = query_as_dict(source)?;
    match query.get(DAY_PARAM) {
        Some(token) => Ok(url_str_to_date(token)?),
        None => Ok(today),
    }
}

fn split_token(token: &str) -> Result<(i32, u32, u32), DateParseError> {
    let malformed = || DateParseError::new(token, DateParseErrorKind::Malformed);
    let invalid_year = || DateParseError::new(token, DateParseErrorKind::InvalidYear);

    let (sign, unsigned) = match token.as_bytes().first() {
        Some(b'+') => (Sign::Plus, &token[1..]),
        Some(b'-') => (Sign::Minus, &token[1..]),
        _ => (Sign::Unsigned, token),
    };

    let mut parts = unsigned.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };

    let (year_digits, year) = numeric(year, MAX_YEAR_DIGITS).ok_or_else(malformed)?;
    let (month_digits, month) = numeric(month, 4).ok_or_else(malformed)?;
    let (day_digits, day) = numeric(day, 4).ok_or_else(malformed)?;

    let year = i32::try_from(year)
        .ok()
        .filter(|&y| sign.accepts(year_digits, y))
        .map(|y| if sign == Sign::Minus { -y } else { y })
        .filter(|y| (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(y))
        .ok_or_else(invalid_year)?;
    if month_digits > 2 || !(1..=12).contains(&month) {
        return Err(DateParseError::new(token, DateParseErrorKind::InvalidMonth));
    }
    if day_digits > 2 || !(1..=31).contains(&day) {
        return Err(DateParseError::new(token, DateParseErrorKind::InvalidDay));
    }

    Ok((year, month, day))
}

/// More than chrono can represent, few enough to fit a `u32`.
const MAX_YEAR_DIGITS: usize = 9;

/// The sign in front of the year, as `%Y` writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    Unsigned,
    Plus,
    Minus,
}

impl Sign {
    /// Years `0..=9999` are written as four bare digits; anything else is
    /// signed and padded to at least four digits.
    fn accepts(self, digits: usize, magnitude: i32) -> bool {
        match self {
            Self::Unsigned => digits == 4,
            Self::Plus => digits >= 4 && magnitude > 9999,
            Self::Minus => digits >= 4 && magnitude > 0,
        }
    }
}

/// Parses a run of at most `max_digits` ASCII digits, returning
/// `(digit_count, value)`.
fn numeric(part: &str, max_digits: usize) -> Option<(usize, u32)> {
    if part.is_empty() || part.len() > max_digits || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().map(|value| (part.len(), value))
}
