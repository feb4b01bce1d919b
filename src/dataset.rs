/*!
 * Unified dataset API for Surabaya NIK reference data
 *
 * Provides a builder pattern for loading the district and sub-district
 * registries together, plus the standard on-disk layout used by the
 * reference data distribution.
 */

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::data_types::NikRecord;
use crate::decoder::NikDecoder;
use crate::reader::{RegistryReader, RegistryStats};
use crate::Result;

/// Builder for loading a complete NIK reference dataset
///
/// # Example
/// ```no_run
/// # use nik_surabaya::dataset::NikDatasetBuilder;
/// let dataset = NikDatasetBuilder::new()
///     .district_file("data/kecamatan/surabaya_kecamatan.json")
///     .subdistrict_file("data/kelurahan/surabaya_kelurahan.json")
///     .subdistrict_file("data/kelurahan/surabaya_kelurahan2.json")
///     .build()?;
/// # Ok::<(), nik_surabaya::NikError>(())
/// ```
pub struct NikDatasetBuilder {
    district_path: Option<PathBuf>,
    subdistrict_paths: Vec<PathBuf>,
    tolerate_missing_files: bool,
}

impl Default for NikDatasetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NikDatasetBuilder {
    /// Create a new dataset builder
    pub fn new() -> Self {
        Self {
            district_path: None,
            subdistrict_paths: Vec::new(),
            tolerate_missing_files: false,
        }
    }

    /// Set the path to the district (kecamatan) registry file
    pub fn district_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.district_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Add a sub-district (kelurahan) registry file
    ///
    /// May be called multiple times; files are merged by key union with
    /// later files winning on collision.
    pub fn subdistrict_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.subdistrict_paths.push(path.as_ref().to_path_buf());
        self
    }

    /// Treat missing registry files as empty registries instead of failing
    pub fn tolerate_missing_files(mut self, tolerate: bool) -> Self {
        self.tolerate_missing_files = tolerate;
        self
    }

    /// Build the dataset, loading all specified files
    pub fn build(self) -> Result<NikDataset> {
        let reader = RegistryReader::new().with_optional_files(self.tolerate_missing_files);

        let districts = match &self.district_path {
            Some(path) => reader.load_districts(path)?,
            None => HashMap::new(),
        };
        let subdistricts = reader.load_subdistricts(&self.subdistrict_paths)?;

        Ok(NikDataset {
            districts,
            subdistricts,
            district_path: self.district_path,
            subdistrict_paths: self.subdistrict_paths,
        })
    }
}

/// Loaded reference dataset: the two code-to-name registries
///
/// Loaded once per process and immutable afterwards; decode calls borrow
/// the maps and never mutate them.
pub struct NikDataset {
    districts: HashMap<String, String>,
    subdistricts: HashMap<String, String>,
    district_path: Option<PathBuf>,
    subdistrict_paths: Vec<PathBuf>,
}

impl NikDataset {
    /// Load the standard reference data layout under `data_dir`
    ///
    /// Expects `kecamatan/surabaya_kecamatan.json` plus
    /// `kelurahan/surabaya_kelurahan.json` and
    /// `kelurahan/surabaya_kelurahan2.json`. Missing files load as empty
    /// registries, matching the original tool's behavior.
    pub fn load_standard<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();

        NikDatasetBuilder::new()
            .district_file(data_dir.join("kecamatan").join("surabaya_kecamatan.json"))
            .subdistrict_file(data_dir.join("kelurahan").join("surabaya_kelurahan.json"))
            .subdistrict_file(data_dir.join("kelurahan").join("surabaya_kelurahan2.json"))
            .tolerate_missing_files(true)
            .build()
    }

    /// Get a decoder borrowing this dataset's registries
    pub fn decoder(&self) -> NikDecoder<'_> {
        NikDecoder::new(&self.districts, &self.subdistricts)
    }

    /// Validate and decode a candidate NIK against this dataset
    pub fn decode(&self, input: &str) -> Result<NikRecord> {
        self.decoder().decode(input)
    }

    /// Look up a district name by its 6-digit code
    pub fn district_name(&self, code: &str) -> Option<&str> {
        self.districts.get(code).map(String::as_str)
    }

    /// Look up a sub-district name by its 10-digit code
    pub fn subdistrict_name(&self, code: &str) -> Option<&str> {
        self.subdistricts.get(code).map(String::as_str)
    }

    /// Number of registered districts
    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    /// Number of registered sub-districts after merging
    pub fn subdistrict_count(&self) -> usize {
        self.subdistricts.len()
    }

    /// Re-read the source files and report per-file statistics
    pub fn stats(&self) -> Result<RegistryStats> {
        let reader = RegistryReader::new().with_optional_files(true);
        let district_path = self
            .district_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(""));
        reader.stats(district_path, &self.subdistrict_paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn standard_layout() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("kecamatan")).unwrap();
        fs::create_dir_all(dir.path().join("kelurahan")).unwrap();

        fs::write(
            dir.path().join("kecamatan").join("surabaya_kecamatan.json"),
            r#"{"kecamatan": {"357812": "GUBENG"}}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("kelurahan").join("surabaya_kelurahan.json"),
            r#"{"kelurahan": {"3578126505": "AIRLANGGA"}}"#,
        )
        .unwrap();

        dir
    }

    #[test]
    fn test_load_standard_tolerates_missing_second_file() {
        let dir = standard_layout();
        let dataset = NikDataset::load_standard(dir.path()).unwrap();

        assert_eq!(dataset.district_count(), 1);
        assert_eq!(dataset.subdistrict_count(), 1);
        assert_eq!(dataset.district_name("357812"), Some("GUBENG"));
    }

    #[test]
    fn test_dataset_decode_resolves_names() {
        let dir = standard_layout();
        let dataset = NikDataset::load_standard(dir.path()).unwrap();

        let record = dataset.decode("3578126505990001").unwrap();
        assert_eq!(record.district_name.to_string(), "GUBENG");
        assert_eq!(record.subdistrict_name.to_string(), "AIRLANGGA");
    }

    #[test]
    fn test_empty_builder_yields_empty_dataset() {
        let dataset = NikDatasetBuilder::new().build().unwrap();
        assert_eq!(dataset.district_count(), 0);
        assert_eq!(dataset.subdistrict_count(), 0);

        // decoding still works, names fall back to the sentinel
        let record = dataset.decode("3578126505990001").unwrap();
        assert!(!record.district_name.is_registered());
    }

    #[test]
    fn test_missing_required_file_fails_build() {
        let result = NikDatasetBuilder::new()
            .district_file("nope/kecamatan.json")
            .build();
        assert!(result.is_err());
    }
}
