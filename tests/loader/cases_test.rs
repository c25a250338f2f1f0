use std::collections::BTreeMap;

use arrow::array::{Array, Int64Array, StringArray};
use fips_enrich::loader::load_cases_from_reader;
use fips_enrich::{PipelineConfig, derive_daily, mark_boundaries};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utils::{CASES_HEADER, cases_utf8};

fn ints(batch: &fips_enrich::RecordBatch, name: &str) -> Vec<i64> {
    batch
        .column_by_name(name)
        .unwrap()
        .as_any()
        .downcast_ref::<Int64Array>()
        .unwrap()
        .values()
        .to_vec()
}

fn strings(batch: &fips_enrich::RecordBatch, name: &str) -> Vec<String> {
    batch
        .column_by_name(name)
        .unwrap()
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap()
        .iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

#[test]
fn fixture_is_sorted_and_differenced() {
    let batch =
        load_cases_from_reader(cases_utf8().as_bytes(), false, &PipelineConfig::default()).unwrap();

    // The row without a FIPS code is gone, the unknown code is still here.
    assert_eq!(batch.num_rows(), 9);
    assert_eq!(
        strings(&batch, "fips"),
        vec!["01001", "01001", "01001", "01003", "01003", "01003", "35013", "35013", "99999"]
    );
    assert_eq!(ints(&batch, "cases"), vec![1, 4, 6, 2, 3, 2, 90, 100, 5]);
    assert_eq!(ints(&batch, "daily_cases"), vec![1, 3, 2, 2, 1, -1, 90, 10, 5]);
    assert_eq!(ints(&batch, "daily_deaths"), vec![0, 0, 0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(strings(&batch, "county")[6], "Doña Ana");
}

#[test]
fn raw_mode_keeps_null_codes_and_source_order() {
    let batch =
        load_cases_from_reader(cases_utf8().as_bytes(), true, &PipelineConfig::default()).unwrap();
    assert_eq!(batch.num_rows(), 10);
    let fips = batch.column_by_name("fips").unwrap();
    assert!(fips.is_null(9));
    assert_eq!(strings(&batch, "date")[3], "2020-03-25");
}

#[test]
fn daily_values_sum_back_to_the_cumulative_total() {
    let mut rng = StdRng::seed_from_u64(2020);
    let mut expected_last: BTreeMap<String, i64> = BTreeMap::new();
    let mut data = CASES_HEADER.to_string();

    for county in 0..20 {
        let fips = format!("{:02}{:03}", county % 3 + 1, county);
        let mut total: i64 = 0;
        for day in 1..=28 {
            // Mostly increasing, with the occasional downward revision
            total = (total + rng.random_range(-3..=25)).max(0);
            data.push_str(&format!("2021-02-{day:02},C{county},S,{fips},{total},0\n"));
        }
        expected_last.insert(fips, total);
    }

    let batch =
        load_cases_from_reader(data.as_bytes(), false, &PipelineConfig::default()).unwrap();
    let fips = strings(&batch, "fips");
    let daily = ints(&batch, "daily_cases");

    let mut sums: BTreeMap<String, i64> = BTreeMap::new();
    for (code, value) in fips.iter().zip(&daily) {
        *sums.entry(code.clone()).or_default() += value;
    }
    assert_eq!(sums, expected_last);
}

#[test]
fn pure_helpers_agree_with_the_loader() {
    let codes = ["01001", "01001", "01001", "02013"];
    let cumulative = [10, 15, 12, 7];
    let boundaries = mark_boundaries(&codes);
    assert_eq!(derive_daily(&boundaries, &cumulative).unwrap(), vec![10, 5, -3, 7]);
}
