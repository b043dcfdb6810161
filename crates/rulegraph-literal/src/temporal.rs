//! Structured temporal values.
//!
//! The XML Schema temporal lexical spaces (`time`, `date`, `dateTime`,
//! `duration`) with optional timezone offsets where the grammar allows them.
//! Each type parses from its lexical form (`FromStr`) and renders a canonical
//! form (`Display`) that round-trips through the parser, so a temporal
//! literal's text is stable enough to participate in result equality.
//!
//! `time`/`date`/`dateTime` are backed by `chrono`; `duration` has no
//! ecosystem representation that keeps calendar components (years/months)
//! separate from day-time components, so it is parsed here with `nom`.

use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use nom::{
    character::complete::{char as pchar, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{preceded, terminated, tuple},
    IResult,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemporalParseError {
    #[error("invalid time `{0}`")]
    Time(String),
    #[error("invalid date `{0}`")]
    Date(String),
    #[error("invalid dateTime `{0}`")]
    DateTime(String),
    #[error("invalid duration `{0}`")]
    Duration(String),
    #[error("invalid timezone offset `{0}`")]
    Offset(String),
}

// ============================================================================
// Timezone handling
// ============================================================================

/// Split a trailing `Z` or `±hh:mm` timezone designator off a lexical form.
fn split_timezone(input: &str) -> Result<(&str, Option<FixedOffset>), TemporalParseError> {
    if let Some(body) = input.strip_suffix('Z') {
        let utc = FixedOffset::east_opt(0)
            .ok_or_else(|| TemporalParseError::Offset("Z".to_string()))?;
        return Ok((body, Some(utc)));
    }

    // `get` rather than indexing: the split point may fall inside a
    // multi-byte character in garbage input.
    if let Some(tail) = (input.len() > 6)
        .then(|| input.get(input.len() - 6..))
        .flatten()
    {
        let bytes = tail.as_bytes();
        let shaped = (bytes[0] == b'+' || bytes[0] == b'-')
            && bytes[1].is_ascii_digit()
            && bytes[2].is_ascii_digit()
            && bytes[3] == b':'
            && bytes[4].is_ascii_digit()
            && bytes[5].is_ascii_digit();
        if shaped {
            let hours: i32 = tail[1..3]
                .parse()
                .map_err(|_| TemporalParseError::Offset(tail.to_string()))?;
            let minutes: i32 = tail[4..6]
                .parse()
                .map_err(|_| TemporalParseError::Offset(tail.to_string()))?;
            if hours > 14 || minutes > 59 || (hours == 14 && minutes != 0) {
                return Err(TemporalParseError::Offset(tail.to_string()));
            }
            let mut seconds = hours * 3600 + minutes * 60;
            if bytes[0] == b'-' {
                seconds = -seconds;
            }
            let offset = FixedOffset::east_opt(seconds)
                .ok_or_else(|| TemporalParseError::Offset(tail.to_string()))?;
            return Ok((&input[..input.len() - 6], Some(offset)));
        }
    }

    Ok((input, None))
}

/// Render an optional offset canonically: UTC as `Z`, otherwise `±hh:mm`.
fn format_offset(f: &mut fmt::Formatter<'_>, offset: Option<FixedOffset>) -> fmt::Result {
    match offset {
        None => Ok(()),
        Some(offset) if offset.local_minus_utc() == 0 => write!(f, "Z"),
        Some(offset) => write!(f, "{offset}"),
    }
}

/// Serde via the lexical form, so serialized temporals look exactly like
/// their in-result rendering.
macro_rules! impl_lexical_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let lexical = String::deserialize(deserializer)?;
                lexical.parse().map_err(de::Error::custom)
            }
        }
    };
}

// ============================================================================
// Time of day
// ============================================================================

/// An `xsd:time` value: time of day with optional timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdTime {
    pub time: NaiveTime,
    pub offset: Option<FixedOffset>,
}

impl XsdTime {
    pub fn new(time: NaiveTime, offset: Option<FixedOffset>) -> Self {
        Self { time, offset }
    }
}

impl FromStr for XsdTime {
    type Err = TemporalParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (body, offset) = split_timezone(input)?;
        let time = NaiveTime::parse_from_str(body, "%H:%M:%S%.f")
            .map_err(|_| TemporalParseError::Time(input.to_string()))?;
        Ok(Self { time, offset })
    }
}

impl fmt::Display for XsdTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time.format("%H:%M:%S%.f"))?;
        format_offset(f, self.offset)
    }
}

impl_lexical_serde!(XsdTime);

// ============================================================================
// Calendar date
// ============================================================================

/// An `xsd:date` value: calendar date with optional timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdDate {
    pub date: NaiveDate,
    pub offset: Option<FixedOffset>,
}

impl XsdDate {
    pub fn new(date: NaiveDate, offset: Option<FixedOffset>) -> Self {
        Self { date, offset }
    }
}

impl FromStr for XsdDate {
    type Err = TemporalParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (body, offset) = split_timezone(input)?;
        let date = NaiveDate::parse_from_str(body, "%Y-%m-%d")
            .map_err(|_| TemporalParseError::Date(input.to_string()))?;
        Ok(Self { date, offset })
    }
}

impl fmt::Display for XsdDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date.format("%Y-%m-%d"))?;
        format_offset(f, self.offset)
    }
}

impl_lexical_serde!(XsdDate);

// ============================================================================
// Combined date and time
// ============================================================================

/// An `xsd:dateTime` value: date plus time of day with optional offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XsdDateTime {
    pub datetime: NaiveDateTime,
    pub offset: Option<FixedOffset>,
}

impl XsdDateTime {
    pub fn new(datetime: NaiveDateTime, offset: Option<FixedOffset>) -> Self {
        Self { datetime, offset }
    }
}

impl FromStr for XsdDateTime {
    type Err = TemporalParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (body, offset) = split_timezone(input)?;
        let datetime = NaiveDateTime::parse_from_str(body, "%Y-%m-%dT%H:%M:%S%.f")
            .map_err(|_| TemporalParseError::DateTime(input.to_string()))?;
        Ok(Self { datetime, offset })
    }
}

impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%dT%H:%M:%S%.f"))?;
        format_offset(f, self.offset)
    }
}

impl_lexical_serde!(XsdDateTime);

// ============================================================================
// Duration
// ============================================================================

/// An `xsd:duration` value.
///
/// Calendar components (years, months) are kept separate from day-time
/// components; only the seconds component may be fractional. An all-zero
/// duration renders as `PT0S`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct XsdDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl XsdDuration {
    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0.0
    }
}

fn component(marker: char) -> impl FnMut(&str) -> IResult<&str, u32> {
    move |input| map_res(terminated(digit1, pchar(marker)), str::parse::<u32>)(input)
}

fn seconds_component(input: &str) -> IResult<&str, f64> {
    map_res(
        terminated(
            recognize(tuple((digit1, opt(tuple((pchar('.'), digit1)))))),
            pchar('S'),
        ),
        str::parse::<f64>,
    )(input)
}

impl FromStr for XsdDuration {
    type Err = TemporalParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut parse = all_consuming(tuple((
            opt(pchar('-')),
            preceded(
                pchar('P'),
                tuple((
                    opt(component('Y')),
                    opt(component('M')),
                    opt(component('D')),
                    opt(preceded(
                        pchar('T'),
                        tuple((
                            opt(component('H')),
                            opt(component('M')),
                            opt(seconds_component),
                        )),
                    )),
                )),
            ),
        )));

        let (_, (sign, (years, months, days, time))) = parse(input)
            .map_err(|_| TemporalParseError::Duration(input.to_string()))?;

        // `P` alone and `...T` with an empty time section are not durations.
        let has_date_part = years.is_some() || months.is_some() || days.is_some();
        let has_time_part = matches!(
            time,
            Some((hours, minutes, seconds))
                if hours.is_some() || minutes.is_some() || seconds.is_some()
        );
        if !has_date_part && !has_time_part {
            return Err(TemporalParseError::Duration(input.to_string()));
        }
        if time.is_some() && !has_time_part {
            return Err(TemporalParseError::Duration(input.to_string()));
        }

        let (hours, minutes, seconds) = time.unwrap_or((None, None, None));
        Ok(Self {
            negative: sign.is_some(),
            years: years.unwrap_or(0),
            months: months.unwrap_or(0),
            days: days.unwrap_or(0),
            hours: hours.unwrap_or(0),
            minutes: minutes.unwrap_or(0),
            seconds: seconds.unwrap_or(0.0),
        })
    }
}

impl fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "PT0S");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds != 0.0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds != 0.0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

impl_lexical_serde!(XsdDuration);
