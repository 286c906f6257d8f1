//! Row-level CSV reading.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Deserializes every row of a headed CSV file into `T`.
///
/// Cells are trimmed and short rows are tolerated; columns absent from a
/// row take the record's defaults. A file that does not exist yields no
/// rows.
pub fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "domain file absent");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_model::{Allergy, AllergyType, StatementPolarity, VitalSet};
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().expect("temp dir");
        let rows: Vec<Allergy> = read_rows(&dir.path().join("allergies.csv")).expect("read");
        assert!(rows.is_empty());
    }

    #[test]
    fn cells_are_trimmed_and_blank_type_is_none() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(
            &dir,
            "allergies.csv",
            "patient_id,statement,allergy_type,allergen\n\
             1 , negative ,,\n\
             2,positive, food , Peanut\n",
        );
        let rows: Vec<Allergy> = read_rows(&path).expect("read");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].patient_id, "1");
        assert_eq!(rows[0].statement, StatementPolarity::Negative);
        assert_eq!(rows[0].allergy_type, None);
        assert_eq!(rows[1].allergy_type, Some(AllergyType::Food));
        assert_eq!(rows[1].allergen, "Peanut");
    }

    #[test]
    fn empty_vital_cells_are_absent() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(
            &dir,
            "vitals.csv",
            "patient_id,timestamp,height,weight\n7,2010-05-12T04:00:00Z,,70.2\n",
        );
        let rows: Vec<VitalSet> = read_rows(&path).expect("read");
        assert_eq!(rows[0].height, None);
        assert_eq!(rows[0].weight.as_deref(), Some("70.2"));
    }

    #[test]
    fn unknown_allergy_type_reports_the_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = write(
            &dir,
            "allergies.csv",
            "patient_id,allergy_type\n1,pollen\n",
        );
        let error = read_rows::<Allergy>(&path).expect_err("bad type");
        assert!(matches!(error, IngestError::CsvParse { .. }));
        assert!(error.to_string().contains("allergies.csv"));
    }
}
