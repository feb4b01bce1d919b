/*!
 * Integration tests for registry loading and end-to-end NIK decoding
 *
 * These tests exercise the full path the CLI takes: registry JSON files on
 * disk, the standard layout loader, and the decoder over the loaded maps.
 */

use std::fs;
use std::path::Path;

use nik_surabaya::prelude::*;
use tempfile::TempDir;

fn write_standard_layout(dir: &Path) {
    fs::create_dir_all(dir.join("kecamatan")).unwrap();
    fs::create_dir_all(dir.join("kelurahan")).unwrap();

    fs::write(
        dir.join("kecamatan").join("surabaya_kecamatan.json"),
        r#"{
            "kecamatan": {
                "357801": "TEGALSARI",
                "357812": "GUBENG"
            }
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("kelurahan").join("surabaya_kelurahan.json"),
        r#"{
            "kelurahan": {
                "3578126505": "AIRLANGGA",
                "3578011001": "KEPUTRAN"
            }
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("kelurahan").join("surabaya_kelurahan2.json"),
        r#"{
            "kelurahan": {
                "3578011001": "KEPUTRAN (REVISI)",
                "3578011002": "DR. SOETOMO"
            }
        }"#,
    )
    .unwrap();
}

#[test]
fn test_load_standard_and_decode() {
    let dir = TempDir::new().unwrap();
    write_standard_layout(dir.path());

    let dataset = NikDataset::load_standard(dir.path()).unwrap();
    assert_eq!(dataset.district_count(), 2);
    // 3 unique keys after key-union merge of the two kelurahan files
    assert_eq!(dataset.subdistrict_count(), 3);

    let record = dataset.decode("3578126505990001").unwrap();
    assert_eq!(record.district_name, LocationName::Registered("GUBENG".to_string()));
    assert_eq!(
        record.subdistrict_name,
        LocationName::Registered("AIRLANGGA".to_string())
    );
    assert_eq!(record.gender, Gender::Female);
    assert_eq!(record.formatted_birth_date(), "25-05-1999");
    assert!(record.is_birth_date_valid());
}

#[test]
fn test_later_subdistrict_file_wins_on_collision() {
    let dir = TempDir::new().unwrap();
    write_standard_layout(dir.path());

    let dataset = NikDataset::load_standard(dir.path()).unwrap();
    assert_eq!(dataset.subdistrict_name("3578011001"), Some("KEPUTRAN (REVISI)"));
}

#[test]
fn test_unknown_codes_decode_with_sentinel() {
    let dir = TempDir::new().unwrap();
    write_standard_layout(dir.path());

    let dataset = NikDataset::load_standard(dir.path()).unwrap();
    // district 99 and its sub-district are not in the registry
    let record = dataset.decode("3578990101900001").unwrap();

    assert_eq!(record.district_name, LocationName::Unregistered);
    assert_eq!(record.subdistrict_name, LocationName::Unregistered);
    assert_eq!(record.district_name.to_string(), "TIDAK TERDAFTAR");
    // the rest of the record is still populated
    assert_eq!(record.year, 1990);
    assert_eq!(record.sequence, "0001");
}

#[test]
fn test_missing_registry_files_load_as_empty() {
    let dir = TempDir::new().unwrap();

    let dataset = NikDataset::load_standard(dir.path()).unwrap();
    assert_eq!(dataset.district_count(), 0);
    assert_eq!(dataset.subdistrict_count(), 0);

    let record = dataset.decode("3578126505990001").unwrap();
    assert!(!record.district_name.is_registered());
}

#[test]
fn test_decode_failures_end_to_end() {
    let dir = TempDir::new().unwrap();
    write_standard_layout(dir.path());
    let dataset = NikDataset::load_standard(dir.path()).unwrap();

    match dataset.decode("357812340199") {
        Err(NikError::Format { .. }) => {}
        other => panic!("expected Format error, got {other:?}"),
    }

    match dataset.decode("1234567890123456") {
        Err(NikError::RegionMismatch { code }) => assert_eq!(code, "1234"),
        other => panic!("expected RegionMismatch, got {other:?}"),
    }
}

#[test]
fn test_registry_stats_per_file() {
    let dir = TempDir::new().unwrap();
    write_standard_layout(dir.path());

    let dataset = NikDataset::load_standard(dir.path()).unwrap();
    let stats = dataset.stats().unwrap();

    assert_eq!(stats.district_count, 2);
    assert_eq!(stats.subdistrict_counts, vec![2, 2]);
    assert_eq!(stats.total_subdistricts(), 4);
}
