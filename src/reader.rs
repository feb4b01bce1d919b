/*!
 * Registry reader for Surabaya district and sub-district reference data
 *
 * This module loads the JSON registry documents that map district
 * (kecamatan) and sub-district (kelurahan) codes to names. The decoder
 * itself never touches the filesystem; everything here runs once at
 * startup and hands immutable maps to the caller.
 */

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{NikError, Result};

/// District registry document: `{"kecamatan": {"357801": "TEGALSARI", ...}}`
#[derive(Debug, Deserialize)]
struct DistrictDocument {
    #[serde(default)]
    kecamatan: HashMap<String, String>,
}

/// Sub-district registry document: `{"kelurahan": {"3578011001": "...", ...}}`
#[derive(Debug, Deserialize)]
struct SubdistrictDocument {
    #[serde(default)]
    kelurahan: HashMap<String, String>,
}

/// Per-file registry statistics, used by the CLI info command
#[derive(Debug, Clone)]
pub struct RegistryStats {
    /// Number of districts in the district file
    pub district_count: usize,
    /// Entry count per sub-district file, in load order
    pub subdistrict_counts: Vec<usize>,
}

impl RegistryStats {
    /// Total sub-district entries across all files, before key union
    pub fn total_subdistricts(&self) -> usize {
        self.subdistrict_counts.iter().sum()
    }
}

/// Reader for registry JSON files
pub struct RegistryReader {
    /// Whether a missing file is an error (true) or an empty map (false)
    require_files: bool,
}

impl Default for RegistryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryReader {
    /// Create a new registry reader with default settings
    pub fn new() -> Self {
        Self {
            require_files: true,
        }
    }

    /// Treat missing files as empty registries instead of failing
    pub fn with_optional_files(mut self, optional: bool) -> Self {
        self.require_files = !optional;
        self
    }

    /// Load the district (kecamatan) mapping from a JSON document
    pub fn load_districts<P: AsRef<Path>>(&self, path: P) -> Result<HashMap<String, String>> {
        let path = path.as_ref();

        if !path.exists() {
            if self.require_files {
                return Err(NikError::file_not_found_with_suggestion(path.to_path_buf()));
            }
            return Ok(HashMap::new());
        }

        let contents = read_file(path)?;
        let document: DistrictDocument = parse_document(&contents, path)?;
        Ok(document.kecamatan)
    }

    /// Load and merge sub-district (kelurahan) mappings from JSON documents
    ///
    /// Documents are merged by key union; on a key collision the later file
    /// wins.
    pub fn load_subdistricts<P: AsRef<Path>>(&self, paths: &[P]) -> Result<HashMap<String, String>> {
        let mut merged = HashMap::new();

        for path in paths {
            let path = path.as_ref();

            if !path.exists() {
                if self.require_files {
                    return Err(NikError::file_not_found_with_suggestion(path.to_path_buf()));
                }
                continue;
            }

            let contents = read_file(path)?;
            let document: SubdistrictDocument = parse_document(&contents, path)?;
            merged.extend(document.kelurahan);
        }

        Ok(merged)
    }

    /// Gather per-file statistics without retaining the mappings
    pub fn stats<P: AsRef<Path>>(
        &self,
        district_path: P,
        subdistrict_paths: &[P],
    ) -> Result<RegistryStats> {
        let district_count = self.load_districts(&district_path)?.len();

        let mut subdistrict_counts = Vec::with_capacity(subdistrict_paths.len());
        for path in subdistrict_paths {
            let count = self.load_subdistricts(std::slice::from_ref(path))?.len();
            subdistrict_counts.push(count);
        }

        Ok(RegistryStats {
            district_count,
            subdistrict_counts,
        })
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| NikError::Io {
        message: format!("failed to read '{}': {}", path.display(), err),
        source: err,
        path: Some(path.to_path_buf()),
    })
}

fn parse_document<'de, T: Deserialize<'de>>(contents: &'de str, path: &Path) -> Result<T> {
    serde_json::from_str(contents).map_err(|err| NikError::RegistryParse {
        message: format!("'{}': {}", path.display(), err),
        path: Some(path.to_path_buf()),
    })
}
