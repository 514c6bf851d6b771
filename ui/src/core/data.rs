//! Loading and decoding the static election data files.
//!
//! The same CSV decoding serves both platforms; only the byte transport
//! differs. Web builds fetch the bundled asset over HTTP, native builds read
//! it from the data directory (override with `TALLYVIEW_DATA_DIR` when the
//! files are bundled elsewhere).

use serde::Deserialize;
use thiserror::Error;

use crate::core::party::Party;
use crate::core::results::StateRow;

pub const YEAR_INDEX_FILE: &str = "yearwise-winner.csv";

pub fn results_file(year: u16) -> String {
    format!("election-results-{year}.csv")
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not load {file}: {message}")]
    Fetch { file: String, message: String },
    #[error("could not decode {file}: {source}")]
    Decode {
        file: String,
        #[source]
        source: csv::Error,
    },
    #[error("{file} contains no rows")]
    Empty { file: String },
}

/// One row of the year index: the election year and the party that carried
/// it nationally. Only the timeline reads this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct YearEntry {
    #[serde(rename = "YEAR")]
    pub year: u16,
    #[serde(rename = "PARTY")]
    party: String,
}

impl YearEntry {
    pub fn winner(&self) -> Option<Party> {
        Party::from_tag(&self.party)
    }
}

/// Decode a per-year results file. An empty file is an error: the caller
/// must never push a half-formed year at the charts.
pub fn parse_results_csv(file: &str, contents: &str) -> Result<Vec<StateRow>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<StateRow>, csv::Error>>()
        .map_err(|source| DataError::Decode {
            file: file.to_string(),
            source,
        })?;
    if rows.is_empty() {
        return Err(DataError::Empty {
            file: file.to_string(),
        });
    }
    Ok(rows)
}

pub fn parse_year_index(file: &str, contents: &str) -> Result<Vec<YearEntry>, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());
    let mut years = reader
        .deserialize()
        .collect::<Result<Vec<YearEntry>, csv::Error>>()
        .map_err(|source| DataError::Decode {
            file: file.to_string(),
            source,
        })?;
    if years.is_empty() {
        return Err(DataError::Empty {
            file: file.to_string(),
        });
    }
    years.sort_by_key(|entry| entry.year);
    Ok(years)
}

/// Fetch and decode one year's results.
pub async fn load_year(year: u16) -> Result<Vec<StateRow>, DataError> {
    let file = results_file(year);
    let contents = fetch_text(&file).await?;
    parse_results_csv(&file, &contents)
}

/// Fetch and decode the year index.
pub async fn load_year_index() -> Result<Vec<YearEntry>, DataError> {
    let contents = fetch_text(YEAR_INDEX_FILE).await?;
    parse_year_index(YEAR_INDEX_FILE, &contents)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(file: &str) -> Result<String, DataError> {
    use dioxus::prelude::{asset, Asset};

    const DATA_DIR: Asset = asset!("/assets/data");

    let url = format!("{DATA_DIR}/{file}");
    let fetch_err = |message: String| DataError::Fetch {
        file: file.to_string(),
        message,
    };

    let response = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|err| fetch_err(err.to_string()))?;
    if !response.ok() {
        return Err(fetch_err(format!("HTTP {}", response.status())));
    }
    response
        .text()
        .await
        .map_err(|err| fetch_err(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(file: &str) -> Result<String, DataError> {
    let path = data_dir().join(file);
    tokio::fs::read_to_string(&path)
        .await
        .map_err(|err| DataError::Fetch {
            file: file.to_string(),
            message: format!("{}: {err}", path.display()),
        })
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    std::env::var_os("TALLYVIEW_DATA_DIR")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| {
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Abbreviation,State,Total_EV,Space,Row,D_Nominee,D_Votes,D_Percentage,R_Nominee,R_Votes,R_Percentage,I_Nominee,I_Votes,I_Percentage
CA,California,55,1,4,Dee,1000,60.0,Arr,600,36.0,Eye,66,4.0
TX,Texas,38,4,7,Dee,700,42.0,Arr,900,54.0,Eye,66,4.0
";

    #[test]
    fn decodes_result_rows() {
        let rows = parse_results_csv("sample.csv", SAMPLE).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].abbreviation, "CA");
        assert_eq!(rows[1].r_percentage, "54.0");
    }

    #[test]
    fn empty_results_are_rejected() {
        let header_only = SAMPLE.lines().next().unwrap();
        assert!(matches!(
            parse_results_csv("sample.csv", header_only),
            Err(DataError::Empty { .. })
        ));
    }

    #[test]
    fn year_index_sorts_by_year() {
        let contents = "YEAR,PARTY\n2016,R\n1968,R\n1992,D\n";
        let years = parse_year_index("index.csv", contents).unwrap();
        let order: Vec<u16> = years.iter().map(|y| y.year).collect();
        assert_eq!(order, vec![1968, 1992, 2016]);
        assert_eq!(years[1].winner(), Some(Party::Democrat));
    }

    #[test]
    fn file_names_follow_the_year() {
        assert_eq!(results_file(2004), "election-results-2004.csv");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn shipped_data_files_decode() {
        for file in std::fs::read_dir(data_dir()).expect("data directory present") {
            let path = file.unwrap().path();
            let name = path.file_name().unwrap().to_string_lossy().to_string();
            let contents = std::fs::read_to_string(&path).unwrap();
            if name == YEAR_INDEX_FILE {
                parse_year_index(&name, &contents).unwrap();
            } else {
                let rows = parse_results_csv(&name, &contents).unwrap();
                assert_eq!(rows.len(), 51, "{name} should cover 50 states plus DC");
            }
        }
    }
}
