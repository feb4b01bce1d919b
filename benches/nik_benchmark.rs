use std::collections::HashMap;
use std::sync::OnceLock;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nik_surabaya::decoder::NikDecoder;
use nik_surabaya::prelude::*;

// Static registries so the maps are built once, not per iteration
static REGISTRIES: OnceLock<(HashMap<String, String>, HashMap<String, String>)> = OnceLock::new();

fn get_registries() -> &'static (HashMap<String, String>, HashMap<String, String>) {
    REGISTRIES.get_or_init(|| {
        let mut districts = HashMap::new();
        let mut subdistricts = HashMap::new();

        // 31 districts and a few sub-districts each, roughly the real
        // Surabaya registry size
        for d in 1..=31u32 {
            let district_code = format!("3578{:02}", d);
            districts.insert(district_code.clone(), format!("KECAMATAN {:02}", d));
            for s in 1..=5u32 {
                subdistricts.insert(
                    format!("{}{:04}", district_code, 1000 + s),
                    format!("KELURAHAN {:02}-{:02}", d, s),
                );
            }
        }

        (districts, subdistricts)
    })
}

fn benchmark_nik_validation(c: &mut Criterion) {
    c.bench_function("nik_validation_valid", |b| {
        b.iter(|| {
            let result = Nik::new(black_box("3578126505990001".to_string()));
            assert!(result.is_ok());
        })
    });

    c.bench_function("nik_validation_invalid", |b| {
        b.iter(|| {
            let result = Nik::new(black_box("357812".to_string()));
            assert!(result.is_err());
        })
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let (districts, subdistricts) = get_registries();
    let decoder = NikDecoder::new(districts, subdistricts);

    c.bench_function("decode_registered", |b| {
        b.iter(|| {
            let record = decoder.decode(black_box("3578121001990001")).unwrap();
            assert!(record.district_name.is_registered());
        })
    });

    c.bench_function("decode_unregistered", |b| {
        b.iter(|| {
            let record = decoder.decode(black_box("3578996505990001")).unwrap();
            assert!(!record.district_name.is_registered());
        })
    });

    c.bench_function("decode_region_mismatch", |b| {
        b.iter(|| {
            let result = decoder.decode(black_box("1234567890123456"));
            assert!(result.is_err());
        })
    });
}

criterion_group!(benches, benchmark_nik_validation, benchmark_decode);
criterion_main!(benches);
