use std::fs;
use std::path::{Path, PathBuf};

use fips_enrich::PipelineConfig;

/// Census header with more columns than the loader keeps
pub const POPULATION_HEADER: &str =
    "SUMLEV,REGION,DIVISION,STATE,COUNTY,STNAME,CTYNAME,CENSUS2010POP,POPESTIMATE2018,POPESTIMATE2019\n";

/// NYT counties header
pub const CASES_HEADER: &str = "date,county,state,fips,cases,deaths\n";

/// A small census extract, Latin-1 encoded, with a state row and an accented county
#[must_use]
pub fn population_latin1() -> Vec<u8> {
    let mut data = POPULATION_HEADER.as_bytes().to_vec();
    data.extend_from_slice(b"040,3,6,01,000,Alabama,Alabama,4779736,4887681,4903185\n");
    data.extend_from_slice(b"050,3,6,01,001,Alabama,Autauga County,54571,55533,55869\n");
    data.extend_from_slice(b"050,3,6,01,003,Alabama,Baldwin County,182265,218071,223234\n");
    data.extend_from_slice(b"050,4,8,35,013,New Mexico,Do\xf1a Ana County,209233,217522,218195\n");
    data
}

/// Cumulative counts for two known counties, one unknown code and one row without a code
#[must_use]
pub fn cases_utf8() -> String {
    format!(
        "{CASES_HEADER}\
         2020-03-24,Autauga,Alabama,01001,1,0\n\
         2020-03-25,Autauga,Alabama,01001,4,0\n\
         2020-03-26,Autauga,Alabama,01001,6,0\n\
         2020-03-25,Baldwin,Alabama,01003,3,0\n\
         2020-03-24,Baldwin,Alabama,01003,2,0\n\
         2020-03-26,Baldwin,Alabama,01003,2,1\n\
         2020-03-26,Doña Ana,New Mexico,35013,90,0\n\
         2020-03-27,Doña Ana,New Mexico,35013,100,0\n\
         2020-03-26,Nowhere,Nowhere,99999,5,0\n\
         2020-03-26,New York City,New York,,500,7\n"
    )
}

/// A fresh scratch directory under the system temp dir
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("fips-enrich-{name}-{}", std::process::id()));
    if dir.exists() {
        fs::remove_dir_all(&dir).ok();
    }
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Write both fixtures into `dir` and return a config pointing at them
#[must_use]
pub fn fixture_config(dir: &Path, population: &[u8], cases: &[u8]) -> PipelineConfig {
    let population_path = dir.join("co-est2019-alldata.csv");
    let cases_path = dir.join("us-counties.csv");
    fs::write(&population_path, population).expect("write population fixture");
    fs::write(&cases_path, cases).expect("write cases fixture");

    PipelineConfig {
        population_path,
        cases_path,
        output_path: dir.join("out").join("nyt_enriched.parquet"),
        ..Default::default()
    }
}
