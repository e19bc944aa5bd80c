//! Audience insight value objects attached to a release.
//!
//! Percentages are in `[0.0, 100.0]`, ages in `[0, MAX_AGE]`.

use serde::Serialize;
use std::fmt;

use super::validation::{percentage, ValidationError, ValidationResult};

pub const MAX_AGE: u32 = 150;

const VALID_TOTAL: std::ops::RangeInclusive<f64> = 99.9..=100.1;

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn age(value: i64, field: &'static str) -> ValidationResult<u32> {
    if !(0..=MAX_AGE as i64).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value: value.to_string(),
            min: "0".to_owned(),
            max: MAX_AGE.to_string(),
        });
    }
    Ok(value as u32)
}

/// Audience split by gender.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Gender {
    male: f64,
    female: f64,
    other: f64,
}

impl Gender {
    /// When `other` is absent it is derived as whatever is left of 100%.
    pub fn new(male: f64, female: f64, other: Option<f64>) -> ValidationResult<Gender> {
        let male = percentage(male, "male")?;
        let female = percentage(female, "female")?;
        let other = match other {
            Some(other) => percentage(other, "other")?,
            None => percentage(round_one_decimal(100.0 - (male + female)), "other")?,
        };

        let total = male + female + other;
        if !VALID_TOTAL.contains(&total) {
            return Err(ValidationError::PercentageTotal {
                male,
                female,
                other,
            });
        }
        Ok(Gender {
            male,
            female,
            other,
        })
    }

    pub fn male(&self) -> f64 {
        self.male
    }

    pub fn female(&self) -> f64 {
        self.female
    }

    pub fn other(&self) -> f64 {
        self.other
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "male={:?} female={:?} other={:?}",
            self.male, self.female, self.other
        )
    }
}

/// Share of the audience within an age bracket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AgeRange {
    min_age: u32,
    max_age: u32,
    percent: f64,
}

impl AgeRange {
    /// An open-ended bracket (`max_age: None`) extends to [`MAX_AGE`].
    pub fn new(min_age: i64, max_age: Option<i64>, percent: f64) -> ValidationResult<AgeRange> {
        let min_age = age(min_age, "min_age")?;
        let max_age = match max_age {
            Some(max_age) => age(max_age, "max_age")?,
            None => MAX_AGE,
        };
        let percent = percentage(percent, "percent")?;
        Ok(AgeRange {
            min_age,
            max_age,
            percent,
        })
    }

    pub fn min_age(&self) -> u32 {
        self.min_age
    }

    pub fn max_age(&self) -> u32 {
        self.max_age
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl fmt::Display for AgeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min_age={} max_age={} percent={:?}",
            self.min_age, self.max_age, self.percent
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopLocation {
    location: String,
    percent: f64,
}

impl TopLocation {
    pub fn new(location: impl Into<String>, percent: f64) -> ValidationResult<TopLocation> {
        Ok(TopLocation {
            location: location.into(),
            percent: percentage(percent, "percent")?,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl fmt::Display for TopLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location='{}' percent={:?}", self.location, self.percent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Audience {
    pub gender: Gender,
    pub agerange: Vec<AgeRange>,
    pub toplocation: Vec<TopLocation>,
}
