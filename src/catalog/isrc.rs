use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validation::{ValidationError, ValidationResult};

lazy_static! {
    static ref ISRC_PATTERN: Regex = Regex::new(r"^[A-Z]{2}[A-Z0-9]{3}[0-9]{7}$").unwrap();
}

/// International Standard Recording Code.
///
/// Two uppercase letters (country), three uppercase letters or digits
/// (registrant) and seven digits (year + designation). Only obtainable
/// through [`Isrc::parse`], so holding one means the format was checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Isrc(String);

impl Isrc {
    pub const LENGTH: usize = 12;

    pub fn parse(value: &str) -> ValidationResult<Isrc> {
        if value.len() != Self::LENGTH || !ISRC_PATTERN.is_match(value) {
            return Err(ValidationError::InvalidFormat {
                field: "isrc",
                value: value.to_owned(),
                expected: "12 characters matching [A-Z]{2}[A-Z0-9]{3}[0-9]{7}",
            });
        }
        Ok(Isrc(value.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isrc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Isrc {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Isrc::parse(&value)
    }
}

impl From<Isrc> for String {
    fn from(value: Isrc) -> Self {
        value.0
    }
}

impl PartialEq<str> for Isrc {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Isrc {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
