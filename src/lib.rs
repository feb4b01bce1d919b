/*!
 * # Surabaya NIK Library
 *
 * A Rust library for validating and decoding Surabaya NIK (Nomor Induk
 * Kependudukan, the 16-digit Indonesian national identity number).
 *
 * A NIK encodes the registrant's region, district, and sub-district, a
 * gender-encoded birth date, and a sequence number. This crate checks a
 * candidate number against the fixed Surabaya region code, decomposes the
 * embedded fields, and resolves the district and sub-district codes to
 * names via injected registry mappings.
 *
 * ## Quick Start
 *
 * ```no_run
 * use nik_surabaya::prelude::*;
 *
 * # fn main() -> Result<()> {
 * // Load the standard reference data layout
 * let dataset = NikDataset::load_standard("./data")?;
 *
 * let record = dataset.decode("3578126505990001")?;
 * println!("{} ({})", record.district_name, record.district_code);
 * println!("Born {} ({})", record.formatted_birth_date(), record.gender);
 * # Ok(())
 * # }
 * ```
 *
 * ## Decoding without files
 *
 * The decoder is a pure function over its inputs; supply the mappings
 * yourself and no filesystem access happens at all:
 *
 * ```
 * use std::collections::HashMap;
 * use nik_surabaya::decoder;
 *
 * let districts: HashMap<String, String> = HashMap::new();
 * let subdistricts: HashMap<String, String> = HashMap::new();
 *
 * let record = decoder::decode("3578126505990001", &districts, &subdistricts).unwrap();
 * assert_eq!(record.year, 1999);
 * assert!(record.is_birth_date_valid());
 * ```
 *
 * ## Error handling
 *
 * Only two conditions fail a decode: a malformed input
 * ([`NikError::Format`]) and a non-Surabaya region code
 * ([`NikError::RegionMismatch`]). An impossible calendar date or a
 * registry lookup miss is surfaced on the returned record as data.
 *
 * ## Reference data
 *
 * Registry documents are JSON objects keyed `"kecamatan"` (districts) and
 * `"kelurahan"` (sub-districts), mapping code strings to names. Multiple
 * sub-district files are merged by key union with later files winning.
 */

// Re-export error types from root
pub use error::{NikError, Result};

// Public modules
pub mod config;
pub mod data_types;
pub mod dataset;
pub mod decoder;
pub mod error;
pub mod reader;

/// Prelude module for convenient imports
///
/// Import everything you need with:
/// ```
/// use nik_surabaya::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigBuilder, NikConfig};
    pub use crate::data_types::{Gender, LocationName, Nik, NikRecord};
    pub use crate::dataset::{NikDataset, NikDatasetBuilder};
    pub use crate::decoder::NikDecoder;
    pub use crate::error::{NikError, Result};
    pub use crate::reader::{RegistryReader, RegistryStats};
}

/// NIK encoding constants
///
/// The day offset and year pivot are fixed national conventions; they are
/// named here rather than configurable.
pub mod constants {
    /// Length of a well-formed NIK
    pub const NIK_LENGTH: usize = 16;

    /// Region (province + city) code for Surabaya
    pub const SURABAYA_REGION_CODE: &str = "3578";

    /// Width of the region code prefix
    pub const REGION_CODE_LEN: usize = 4;

    /// Width of the district code prefix (region + 2-digit district index)
    pub const DISTRICT_CODE_LEN: usize = 6;

    /// Width of the sub-district code prefix (district + 4-digit index)
    pub const SUBDISTRICT_CODE_LEN: usize = 10;

    /// Offset added to the day-of-month field for female registrants
    pub const FEMALE_DAY_OFFSET: u32 = 40;

    /// Two-digit year fields above this pivot resolve to the 1900s
    pub const YEAR_PIVOT: u32 = 30;
}

#[cfg(test)]
mod tests {
    use crate::data_types::{Gender, Nik};

    #[test]
    fn test_nik_validation() {
        assert!(Nik::new("3578126505990001".to_string()).is_ok());
        assert!(Nik::new("123".to_string()).is_err());
        assert!(Nik::new("35781265059900AB".to_string()).is_err());
    }

    #[test]
    fn test_gender_encoding() {
        assert_eq!(Gender::from_raw_day(25), Gender::Male);
        assert_eq!(Gender::from_raw_day(65), Gender::Female);
    }
}
