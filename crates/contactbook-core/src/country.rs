//! Supported countries and their dial codes.
//!
//! The dial code table is used for display only. Uniqueness is always
//! decided on the raw `countryCode` text stored in a record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// The fixed set of country codes a record may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountryCode {
    /// United States.
    US,
    /// Canada.
    CA,
    /// United Kingdom.
    GB,
    /// Australia.
    AU,
    /// India.
    IN,
    /// Germany.
    DE,
    /// France.
    FR,
    /// Japan.
    JP,
    /// Brazil.
    BR,
    /// Mexico.
    MX,
}

impl CountryCode {
    /// Every supported code, in form display order.
    pub const ALL: [CountryCode; 10] = [
        Self::US,
        Self::CA,
        Self::GB,
        Self::AU,
        Self::IN,
        Self::DE,
        Self::FR,
        Self::JP,
        Self::BR,
        Self::MX,
    ];

    /// The two-letter code as stored in a record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::US => "US",
            Self::CA => "CA",
            Self::GB => "GB",
            Self::AU => "AU",
            Self::IN => "IN",
            Self::DE => "DE",
            Self::FR => "FR",
            Self::JP => "JP",
            Self::BR => "BR",
            Self::MX => "MX",
        }
    }

    /// International dial prefix, including the leading `+`.
    pub fn dial_code(self) -> &'static str {
        match self {
            Self::US | Self::CA => "+1",
            Self::GB => "+44",
            Self::AU => "+61",
            Self::IN => "+91",
            Self::DE => "+49",
            Self::FR => "+33",
            Self::JP => "+81",
            Self::BR => "+55",
            Self::MX => "+52",
        }
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self::US
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCountryCode(pub String);

impl fmt::Display for UnknownCountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown country code: {}", self.0)
    }
}

impl std::error::Error for UnknownCountryCode {}

impl FromStr for CountryCode {
    type Err = UnknownCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| UnknownCountryCode(s.to_string()))
    }
}

/// Render a record's phone number with its country dial code.
///
/// Codes outside the supported set fall back to the raw code text.
pub fn format_phone(record: &Record) -> String {
    match record.country() {
        Some(code) => format!("{} {}", code.dial_code(), record.phone_number),
        None => format!("{} {}", record.country_code, record.phone_number),
    }
}
