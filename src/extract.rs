use crate::error::{PipelineError, Result};
use crate::structs::RawTables;
use csv::{Reader, StringRecord};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::path::Path;

/// Filenames of the four input CSVs, resolved relative to the input
/// directory. Defaults are the names the source dataset ships with.
#[derive(Debug, Clone)]
pub struct InputFiles {
    pub departments: String,
    pub students: String,
    pub performance: String,
    pub employees: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            departments: "Department_Information.csv".to_string(),
            students: "Student_Counceling_Information.csv".to_string(),
            performance: "Student_Performance_Data.csv".to_string(),
            employees: "Employee_Information.csv".to_string(),
        }
    }
}

const DEPARTMENT_HEADERS: &[&str] = &["Department_ID", "Department_Name"];
const STUDENT_HEADERS: &[&str] = &["Student_ID", "Department_Admission"];
const PERFORMANCE_HEADERS: &[&str] = &[
    "Student_ID",
    "Semster_Name",
    "Paper_ID",
    "Paper_Name",
    "Marks",
    "Effort_Hours",
];
const EMPLOYEE_HEADERS: &[&str] = &["Employee_ID", "Department_ID"];

/// Reads the four input CSVs into raw in-memory tables.
///
/// # Arguments
/// * `input_dir` - Directory containing the input files
/// * `files` - The four filenames to read
///
/// # Returns
/// Returns the loaded [`RawTables`] on success.
///
/// # Errors
/// Returns `PipelineError::MissingFile` if any input file is absent,
/// `PipelineError::Csv` on malformed CSV (ragged rows, invalid UTF-8), and
/// `PipelineError::Data` if a key column is missing from a file's header.
pub fn load_tables(input_dir: &Path, files: &InputFiles) -> Result<RawTables> {
    let tables = RawTables {
        departments: read_csv(&input_dir.join(&files.departments), DEPARTMENT_HEADERS)?,
        students: read_csv(&input_dir.join(&files.students), STUDENT_HEADERS)?,
        performance: read_csv(&input_dir.join(&files.performance), PERFORMANCE_HEADERS)?,
        employees: read_csv(&input_dir.join(&files.employees), EMPLOYEE_HEADERS)?,
    };
    debug!(
        "Loaded {} departments, {} students, {} performance rows, {} employees",
        tables.departments.len(),
        tables.students.len(),
        tables.performance.len(),
        tables.employees.len()
    );
    Ok(tables)
}

/// Reads one CSV file into typed raw rows after checking that the key
/// columns are present. Header names are trimmed before matching since the
/// source files occasionally pad them with whitespace.
fn read_csv<T: DeserializeOwned>(path: &Path, required_headers: &[&str]) -> Result<Vec<T>> {
    if !path.is_file() {
        return Err(PipelineError::MissingFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut reader = Reader::from_reader(file);

    let headers: StringRecord = reader.headers()?.iter().map(str::trim).collect();
    for name in required_headers {
        if !headers.iter().any(|h| h == *name) {
            return Err(PipelineError::Data(format!(
                "Column not found in {}: {}",
                path.display(),
                name
            )));
        }
    }
    reader.set_headers(headers);

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
