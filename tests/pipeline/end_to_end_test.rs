use chrono::NaiveDate;
use fips_enrich::models::records_from_batch;
use fips_enrich::schema::OUTPUT_COLUMNS;
use fips_enrich::{FieldValue, PipelineError, fips_lookup, read_parquet, run};

use crate::utils::{POPULATION_HEADER, cases_utf8, fixture_config, population_latin1, scratch_dir};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, day).unwrap()
}

#[test]
fn run_writes_the_enriched_table() {
    let dir = scratch_dir("e2e-run");
    let config = fixture_config(&dir, &population_latin1(), cases_utf8().as_bytes());

    let summary = run(&config).unwrap();
    assert_eq!(summary.counties, 3);
    assert_eq!(summary.observations, 9);
    assert_eq!(summary.enriched_rows, 8);

    let table = read_parquet(&config.output_path).unwrap();
    assert_eq!(table.num_rows(), 8);

    let schema = table.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names, OUTPUT_COLUMNS);

    let records = records_from_batch(&table).unwrap();
    assert!(records.iter().all(|r| r.geo_code != "99999"));
    assert!(records.iter().all(|r| r.geo_code.len() == 5));
    assert_eq!(records[0].geo_code, "01001");
    assert_eq!(records[0].date, date(24));
    assert_eq!(records[0].population_estimate, 55869);
}

#[test]
fn lookup_reads_back_known_values() {
    let dir = scratch_dir("e2e-lookup");
    let config = fixture_config(&dir, &population_latin1(), cases_utf8().as_bytes());
    run(&config).unwrap();
    let table = read_parquet(&config.output_path).unwrap();

    let row = fips_lookup("35013", date(27), &table).unwrap();
    assert_eq!(row["cumulative_cases"].as_int(), Some(100));
    assert_eq!(row["daily_cases"].as_int(), Some(10));
    assert_eq!(row["population_estimate"].as_int(), Some(218_195));
    assert_eq!(row["geo_code"], FieldValue::Text("35013".to_string()));
    assert_eq!(row.len(), OUTPUT_COLUMNS.len());

    assert!(fips_lookup("35013", date(1), &table).unwrap().is_empty());
    assert!(fips_lookup("99999", date(26), &table).unwrap().is_empty());
}

#[test]
fn duplicate_population_aborts_without_output() {
    let dir = scratch_dir("e2e-dup");
    let mut population = POPULATION_HEADER.as_bytes().to_vec();
    population.extend_from_slice(b"050,3,6,01,001,Alabama,Autauga County,1,2,3\n");
    population.extend_from_slice(b"050,3,6,01,001,Alabama,Autauga County,1,2,3\n");
    let config = fixture_config(&dir, &population, cases_utf8().as_bytes());

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::DuplicatePopulation { rows: 2, unique: 1 })
    ));
    assert!(!config.output_path.exists());
}

#[test]
fn duplicate_observation_aborts_without_output() {
    let dir = scratch_dir("e2e-dup-obs");
    let cases = format!("{}2020-03-24,Autauga,Alabama,01001,9,0\n", cases_utf8());
    let config = fixture_config(&dir, &population_latin1(), cases.as_bytes());

    let err = run(&config).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PipelineError>(),
        Some(PipelineError::DuplicateObservation { rows: 10, unique: 9 })
    ));
    assert!(!config.output_path.exists());
}
