/*!
 * Data type definitions for Surabaya NIK records
 *
 * This module contains type-safe representations of the fields embedded in a
 * 16-digit Indonesian national identity number (NIK) as issued for the city
 * of Surabaya.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// NIK (Nomor Induk Kependudukan) - 16 digit national identity number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Nik(pub String);

impl Nik {
    /// Create a new NIK, validating format
    pub fn new(nik: String) -> Result<Self, crate::NikError> {
        if nik.len() != 16 || !nik.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::NikError::invalid_format(&nik));
        }
        Ok(Nik(nik))
    }

    /// Get the NIK as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Nik {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender, derived from the gender-encoded day-of-month field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Derive gender from the raw (possibly offset) day field.
    ///
    /// Days above [`crate::constants::FEMALE_DAY_OFFSET`] mark female
    /// registrants; everything else is male.
    pub fn from_raw_day(raw_day: u32) -> Self {
        if raw_day > crate::constants::FEMALE_DAY_OFFSET {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "LAKI-LAKI"),
            Gender::Female => write!(f, "PEREMPUAN"),
        }
    }
}

/// Resolved name of a district or sub-district
///
/// A lookup miss is data, not an error: a syntactically valid NIK may carry
/// a code that is absent from the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationName {
    Registered(String),
    Unregistered,
}

impl LocationName {
    /// Resolve a code against a registry mapping
    pub fn resolve(map: &std::collections::HashMap<String, String>, code: &str) -> Self {
        match map.get(code) {
            Some(name) => LocationName::Registered(name.clone()),
            None => LocationName::Unregistered,
        }
    }

    /// Whether the code was present in the registry
    pub fn is_registered(&self) -> bool {
        matches!(self, LocationName::Registered(_))
    }
}

impl std::fmt::Display for LocationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocationName::Registered(name) => write!(f, "{}", name),
            LocationName::Unregistered => write!(f, "TIDAK TERDAFTAR"),
        }
    }
}

/// Decoded Surabaya NIK record
///
/// Constructed fresh per decode call and immutable afterwards. The three
/// code fields are fixed-offset substrings of the same validated input, so
/// the sub-district code always extends the district code, which extends
/// the region code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NikRecord {
    /// The validated 16-digit input
    pub nik: Nik,
    /// Province + city identifier (digits 0-3)
    pub region_code: String,
    /// Region code + 2-digit district index (digits 0-5)
    pub district_code: String,
    /// District code + 4-digit sub-district index (digits 0-9)
    pub subdistrict_code: String,
    /// Resolved district (kecamatan) name
    pub district_name: LocationName,
    /// Resolved sub-district (kelurahan) name
    pub subdistrict_name: LocationName,
    /// Day field as encoded (1-71 nominally; >40 marks female)
    pub raw_day: u32,
    /// Calendar day after removing the gender offset
    pub day: u32,
    /// Month field as encoded
    pub month: u32,
    /// Two-digit year field as encoded
    pub year_field: u32,
    /// Four-digit year after pivot resolution
    pub year: i32,
    pub gender: Gender,
    /// Serial disambiguator for same birth-date/region registrants
    pub sequence: String,
    /// Birth date under Gregorian rules, `None` when the encoded
    /// day/month/year do not form a real calendar date
    pub birth_date: Option<NaiveDate>,
}

impl NikRecord {
    /// Whether the encoded birth date is a real calendar date
    pub fn is_birth_date_valid(&self) -> bool {
        self.birth_date.is_some()
    }

    /// Format the birth date fields as `DD-MM-YYYY`
    ///
    /// Formats the raw decoded fields, so an impossible date like
    /// `35-02-2002` still renders for display.
    pub fn formatted_birth_date(&self) -> String {
        format!("{:02}-{:02}-{}", self.day, self.month, self.year)
    }
}
