use arrow::array::{Array, StringArray};
use fips_enrich::loader::population::fips_codes;
use fips_enrich::{PipelineConfig, PipelineError, load_population};

use crate::utils::{POPULATION_HEADER, population_latin1, scratch_dir};

fn column(batch: &fips_enrich::RecordBatch, name: &str) -> StringArray {
    batch
        .column_by_name(name)
        .unwrap()
        .as_any()
        .downcast_ref::<StringArray>()
        .unwrap()
        .clone()
}

#[test]
fn latin1_county_names_survive() {
    let dir = scratch_dir("pop-latin1");
    let path = dir.join("pop.csv");
    std::fs::write(&path, population_latin1()).unwrap();

    let batch = load_population(&path, false, &PipelineConfig::default()).unwrap();
    assert_eq!(batch.num_rows(), 3);
    let names = column(&batch, "CTYNAME");
    assert_eq!(names.value(2), "Doña Ana County");
    assert_eq!(fips_codes(&batch).unwrap().value(2), "35013");
}

#[test]
fn raw_mode_is_untouched() {
    let dir = scratch_dir("pop-raw");
    let path = dir.join("pop.csv");
    std::fs::write(&path, population_latin1()).unwrap();

    let batch = load_population(&path, true, &PipelineConfig::default()).unwrap();
    assert_eq!(batch.num_rows(), 4);
    assert_eq!(batch.num_columns(), 10);
    assert_eq!(column(&batch, "SUMLEV").value(0), "040");
    assert!(batch.column_by_name("FIPS_CODE").is_none());
}

#[test]
fn fips_is_literal_concatenation_for_every_code_pair() {
    let mut data = POPULATION_HEADER.to_string();
    let states = ["01", "02", "06", "10", "56", "72"];
    for state in states {
        for county in [1, 3, 13, 99, 100, 510, 840] {
            data.push_str(&format!(
                "050,1,1,{state},{county:03},State {state},County {county},1,1,1\n"
            ));
        }
    }

    let batch = fips_enrich::loader::load_population_from_reader(
        data.as_bytes(),
        false,
        &PipelineConfig::default(),
    )
    .unwrap();
    let state = column(&batch, "STATE");
    let county = column(&batch, "COUNTY");
    let fips = fips_codes(&batch).unwrap();

    assert_eq!(fips.len(), 42);
    for row in 0..fips.len() {
        assert_eq!(fips.value(row).len(), 5);
        assert_eq!(
            fips.value(row),
            format!("{}{}", state.value(row), county.value(row))
        );
    }
    assert_eq!(fips.value(0), "01001");
}

#[test]
fn missing_file_is_an_error() {
    let dir = scratch_dir("pop-missing");
    let err = load_population(&dir.join("absent.csv"), false, &PipelineConfig::default())
        .unwrap_err();
    assert!(err.downcast_ref::<PipelineError>().is_none());
    assert!(err.to_string().contains("File not found"));
}
