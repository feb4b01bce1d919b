/*!
 * The Surabaya NIK decoder
 *
 * Validates a candidate identity number and decomposes it into its embedded
 * fields: nested region/district/sub-district codes, gender-encoded birth
 * date, and sequence number. The decoder is a pure transform over its
 * inputs; the district and sub-district mappings are injected, never read
 * from ambient state.
 */

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::constants::{
    DISTRICT_CODE_LEN, FEMALE_DAY_OFFSET, NIK_LENGTH, REGION_CODE_LEN, SUBDISTRICT_CODE_LEN,
    SURABAYA_REGION_CODE, YEAR_PIVOT,
};
use crate::data_types::{Gender, LocationName, Nik, NikRecord};
use crate::{NikError, Result};

/// Decoder over a pair of injected registry mappings
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use nik_surabaya::decoder::NikDecoder;
///
/// let districts: HashMap<String, String> = HashMap::new();
/// let subdistricts: HashMap<String, String> = HashMap::new();
/// let decoder = NikDecoder::new(&districts, &subdistricts);
///
/// let record = decoder.decode("3578126505990001").unwrap();
/// assert_eq!(record.day, 25);
/// assert_eq!(record.year, 1999);
/// ```
pub struct NikDecoder<'a> {
    districts: &'a HashMap<String, String>,
    subdistricts: &'a HashMap<String, String>,
}

impl<'a> NikDecoder<'a> {
    /// Create a decoder over the given district and sub-district mappings
    pub fn new(
        districts: &'a HashMap<String, String>,
        subdistricts: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            districts,
            subdistricts,
        }
    }

    /// Validate and decode a candidate NIK string
    ///
    /// Returns [`NikError::Format`] unless the input is exactly 16 ASCII
    /// digits, and [`NikError::RegionMismatch`] unless the leading four
    /// digits equal the Surabaya region code. An impossible birth date or a
    /// registry lookup miss is surfaced on the record, never as an error.
    pub fn decode(&self, input: &str) -> Result<NikRecord> {
        decode(input, self.districts, self.subdistricts)
    }
}

/// Validate and decode a candidate NIK string against the given mappings
///
/// Free-function form of [`NikDecoder::decode`] for callers that do not
/// want to hold a decoder.
pub fn decode(
    input: &str,
    districts: &HashMap<String, String>,
    subdistricts: &HashMap<String, String>,
) -> Result<NikRecord> {
    if input.len() != NIK_LENGTH || !input.chars().all(|c| c.is_ascii_digit()) {
        return Err(NikError::invalid_format(input));
    }

    let region_code = &input[..REGION_CODE_LEN];
    if region_code != SURABAYA_REGION_CODE {
        return Err(NikError::region_mismatch(region_code));
    }

    let district_code = &input[..DISTRICT_CODE_LEN];
    let subdistrict_code = &input[..SUBDISTRICT_CODE_LEN];
    let sequence = &input[12..16];

    // The input is all digits, so these slices cannot fail to parse.
    let raw_day: u32 = input[6..8].parse().unwrap_or(0);
    let month: u32 = input[8..10].parse().unwrap_or(0);
    let year_field: u32 = input[10..12].parse().unwrap_or(0);

    let gender = Gender::from_raw_day(raw_day);
    let day = match gender {
        Gender::Female => raw_day - FEMALE_DAY_OFFSET,
        Gender::Male => raw_day,
    };

    let year = resolve_year(year_field);

    // Gregorian validity check; day 0 (raw day 40 for a female slot) and
    // out-of-range months fall out of from_ymd_opt naturally.
    let birth_date = NaiveDate::from_ymd_opt(year, month, day);

    Ok(NikRecord {
        nik: Nik(input.to_string()),
        region_code: region_code.to_string(),
        district_code: district_code.to_string(),
        subdistrict_code: subdistrict_code.to_string(),
        district_name: LocationName::resolve(districts, district_code),
        subdistrict_name: LocationName::resolve(subdistricts, subdistrict_code),
        raw_day,
        day,
        month,
        year_field,
        year,
        gender,
        sequence: sequence.to_string(),
        birth_date,
    })
}

/// Resolve a two-digit year field to a full year
///
/// Year fields above the pivot are windowed into the 1900s, the rest into
/// the 2000s. This is the fixed national heuristic, not calendar-exact.
fn resolve_year(year_field: u32) -> i32 {
    if year_field > YEAR_PIVOT {
        1900 + year_field as i32
    } else {
        2000 + year_field as i32
    }
}
