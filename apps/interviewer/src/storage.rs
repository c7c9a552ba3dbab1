//! Persistence sinks for completed candidate records.
//!
//! Two independent append targets over the same record: a CSV file for
//! spreadsheet use and a JSON array for downstream tooling. The JSON sink
//! rewrites the array through a temp file in the same directory and renames
//! it over the target, so a crash mid-write cannot tear the file.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::errors::AppError;
use crate::models::CandidateRecord;

pub const CSV_FILE: &str = "candidates_data.csv";
pub const JSON_FILE: &str = "candidates_data.json";

/// Append-only tabular sink. Column order is the `CandidateRecord` field
/// order; the header row is written only when the file is created.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn append(&self, record: &CandidateRecord) -> Result<(), AppError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AppError::storage(&self.path, e))?;
        // a pre-existing but empty file still needs the header row
        let write_header = file
            .metadata()
            .map_err(|e| AppError::storage(&self.path, e))?
            .len()
            == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(write_header)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| AppError::storage(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| AppError::storage(&self.path, e))?;

        info!(
            "Appended {} to {}",
            record.candidate_id,
            self.path.display()
        );
        Ok(())
    }
}

/// Whole-array document sink. Each append re-reads the array, pushes the new
/// record, and atomically replaces the file.
pub struct JsonSink {
    path: PathBuf,
}

impl JsonSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the full array, or an empty one when the file does not exist.
    pub fn read_all(&self) -> Result<Vec<CandidateRecord>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(|e| AppError::storage(&self.path, e))?;
        serde_json::from_reader(file).map_err(|e| AppError::storage(&self.path, e))
    }

    pub fn append(&self, record: &CandidateRecord) -> Result<(), AppError> {
        let mut records = self.read_all()?;
        records.push(record.clone());

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut tmp = tempfile::NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
            .map_err(|e| AppError::storage(&self.path, e))?;
        serde_json::to_writer_pretty(&mut tmp, &records)
            .map_err(|e| AppError::storage(&self.path, e))?;
        tmp.flush().map_err(|e| AppError::storage(&self.path, e))?;
        tmp.persist(&self.path)
            .map_err(|e| AppError::storage(&self.path, e.error))?;

        info!(
            "Appended {} to {} ({} total)",
            record.candidate_id,
            self.path.display(),
            records.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::QUESTION_COUNT;
    use crate::models::CandidateProfile;

    fn completed_record(skills: &str) -> CandidateRecord {
        let mut record = CandidateRecord::new(CandidateProfile {
            full_name: "Grace Hopper".to_string(),
            email_address: "grace@example.com".to_string(),
            phone_number: "555-0199".to_string(),
            years_of_experience: 12,
            desired_position: "Staff Engineer".to_string(),
            current_location: "Arlington".to_string(),
            technical_skills: skills.to_string(),
        });
        record.complete(
            std::array::from_fn::<_, QUESTION_COUNT, _>(|i| format!("answer {}", i + 1)),
            "Positive. Advanced. Yes. Clear and precise answers.".to_string(),
        );
        record
    }

    #[test]
    fn test_csv_header_written_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join(CSV_FILE));

        sink.append(&completed_record("Python")).unwrap();
        sink.append(&completed_record("SQL")).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(CSV_FILE)).unwrap();
        assert_eq!(contents.matches("Candidate_ID").count(), 1);
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with("Candidate_ID,Full_Name,Email_Address,Phone_Number"));
    }

    #[test]
    fn test_csv_column_order_matches_record_fields() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join(CSV_FILE));
        sink.append(&completed_record("Rust")).unwrap();

        let contents = std::fs::read_to_string(dir.path().join(CSV_FILE)).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(
            header,
            "Candidate_ID,Full_Name,Email_Address,Phone_Number,Years_of_Experience,\
             Desired_Position,Current_Location,Technical_Skills,Timestamp,\
             Technical_Answer_1,Technical_Answer_2,Technical_Answer_3,\
             Technical_Answer_4,Technical_Answer_5,AI_Evaluation"
        );
    }

    #[test]
    fn test_csv_header_written_to_preexisting_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CSV_FILE);
        std::fs::File::create(&path).unwrap();

        CsvSink::new(&path)
            .append(&completed_record("Python"))
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Candidate_ID,"));
        assert_eq!(contents.matches("Candidate_ID").count(), 1);
    }

    #[test]
    fn test_csv_multiline_evaluation_stays_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join(CSV_FILE));

        let mut record = completed_record("Python");
        record.ai_evaluation = "Sentiment: Positive\nLevel: Advanced".to_string();
        sink.append(&record).unwrap();

        let mut reader = csv::Reader::from_path(dir.path().join(CSV_FILE)).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].iter().last().unwrap(),
            "Sentiment: Positive\nLevel: Advanced"
        );
    }

    #[test]
    fn test_json_round_trip_last_element_equals_appended() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::new(dir.path().join(JSON_FILE));

        let record = completed_record("Python, SQL");
        sink.append(&record).unwrap();

        let records = sink.read_all().unwrap();
        assert_eq!(records.last().unwrap(), &record);
    }

    #[test]
    fn test_json_append_grows_existing_array() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::new(dir.path().join(JSON_FILE));

        let first = completed_record("Go");
        let second = completed_record("Kubernetes");
        sink.append(&first).unwrap();
        sink.append(&second).unwrap();

        let records = sink.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].technical_skills, "Go");
        assert_eq!(records[1].technical_skills, "Kubernetes");
    }

    #[test]
    fn test_json_read_all_empty_when_file_absent() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::new(dir.path().join(JSON_FILE));
        assert!(sink.read_all().unwrap().is_empty());
    }
}
