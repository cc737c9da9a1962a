//! Calendar date validation and formatting for the input layer.
//!
//! The generator itself hashes date strings opaquely; these helpers belong
//! to the surrounding form layer, which validates what the user typed before
//! handing the text over as a seed. The validated text is preserved exactly
//! as entered, because formatting differences (such as zero-padding) change
//! the seed and therefore the generated batch.

use rand::Rng;

use crate::error::DateError;

/// Largest accepted year.
pub const YEAR_MAX: u16 = 9999;

/// A validated calendar date together with its original spelling.
///
/// # Example
///
/// ```
/// use chrononews::DateInput;
///
/// let date = DateInput::parse("29.2.2024").expect("leap day");
/// assert_eq!(date.day(), 29);
/// assert_eq!(date.as_seed(), "29.2.2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInput {
    day: u8,
    month: u8,
    year: u16,
    text: String,
}

impl DateInput {
    /// Parses and validates `day.month.year` text.
    ///
    /// Components must be decimal numbers. The day is checked against the
    /// actual length of the month, with Gregorian leap-year handling. The
    /// original spelling is preserved verbatim for use as a seed.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the text is not three dot-separated numbers
    /// or any component is out of range.
    pub fn parse(text: &str) -> Result<Self, DateError> {
        let mut parts = text.split('.');
        let (Some(day_text), Some(month_text), Some(year_text), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::MalformedDate {
                input: text.to_owned(),
            });
        };

        let day_value = parse_component(day_text, text)?;
        let month_value = parse_component(month_text, text)?;
        let year_value = parse_component(year_text, text)?;

        let year = validate_year(year_value)?;
        let month = validate_month(month_value)?;
        let day = validate_day(day_value)?;

        let month_length = days_in_month(month, year);
        if day > month_length {
            return Err(DateError::DayOutOfRangeForMonth {
                month,
                days_in_month: month_length,
            });
        }

        Ok(Self {
            day,
            month,
            year,
            text: text.to_owned(),
        })
    }

    /// Generates a random valid date with canonical, unpadded spelling.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let year = rng.random_range(1..=YEAR_MAX);
        let month = rng.random_range(1..=12);
        let day = rng.random_range(1..=days_in_month(month, year));
        Self {
            day,
            month,
            year,
            text: format!("{day}.{month}.{year}"),
        }
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month number.
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the date text exactly as entered, for use as a seed.
    #[must_use]
    pub fn as_seed(&self) -> &str {
        &self.text
    }
}

/// Returns the number of days in the given month of the given year.
///
/// Months outside [1, 12] return 0; callers validate the month first.
#[must_use]
pub const fn days_in_month(month: u8, year: u16) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap-year rule: divisible by 4, except centuries unless
/// divisible by 400.
const fn is_leap_year(year: u16) -> bool {
    year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
}

fn parse_component(component: &str, input: &str) -> Result<u32, DateError> {
    component
        .parse::<u32>()
        .map_err(|_| DateError::MalformedDate {
            input: input.to_owned(),
        })
}

fn validate_year(value: u32) -> Result<u16, DateError> {
    if !(1..=u32::from(YEAR_MAX)).contains(&value) {
        return Err(DateError::InvalidYear { value });
    }
    u16::try_from(value).map_err(|_| DateError::InvalidYear { value })
}

fn validate_month(value: u32) -> Result<u8, DateError> {
    if !(1..=12).contains(&value) {
        return Err(DateError::InvalidMonth { value });
    }
    u8::try_from(value).map_err(|_| DateError::InvalidMonth { value })
}

fn validate_day(value: u32) -> Result<u8, DateError> {
    if !(1..=31).contains(&value) {
        return Err(DateError::InvalidDay { value });
    }
    u8::try_from(value).map_err(|_| DateError::InvalidDay { value })
}
