use chrono::NaiveDate;
use log::{Log, Metadata, Record as LogRecord};
use serde::Deserialize;

/// Date format used across all four source files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Simple logger implementation
pub struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &LogRecord) {
        println!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

/// Department master row as read from disk, all cells untyped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDepartment {
    #[serde(rename = "Department_ID")]
    pub department_id: Option<String>,
    #[serde(rename = "Department_Name")]
    pub department_name: Option<String>,
    #[serde(rename = "DOE")]
    pub established: Option<String>,
}

/// Student counseling row as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStudent {
    #[serde(rename = "Student_ID")]
    pub student_id: Option<String>,
    #[serde(rename = "DOA")]
    pub date_of_admission: Option<String>,
    #[serde(rename = "DOB")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "Department_Choices")]
    pub department_choices: Option<String>,
    #[serde(rename = "Department_Admission")]
    pub department_admission: Option<String>,
}

/// Performance row as read from disk. The `Semster_Name` header is a typo
/// carried by the source data itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPerformance {
    #[serde(rename = "Student_ID")]
    pub student_id: Option<String>,
    #[serde(rename = "Semster_Name")]
    pub semester_name: Option<String>,
    #[serde(rename = "Paper_ID")]
    pub paper_id: Option<String>,
    #[serde(rename = "Paper_Name")]
    pub paper_name: Option<String>,
    #[serde(rename = "Marks")]
    pub marks: Option<String>,
    #[serde(rename = "Effort_Hours")]
    pub effort_hours: Option<String>,
}

/// Employee row as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEmployee {
    #[serde(rename = "Employee_ID")]
    pub employee_id: Option<String>,
    #[serde(rename = "DOB")]
    pub date_of_birth: Option<String>,
    #[serde(rename = "DOJ")]
    pub date_of_joining: Option<String>,
    #[serde(rename = "Department_ID")]
    pub department_id: Option<String>,
}

/// The four input tables exactly as loaded, before any validation.
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    pub departments: Vec<RawDepartment>,
    pub students: Vec<RawStudent>,
    pub performance: Vec<RawPerformance>,
    pub employees: Vec<RawEmployee>,
}

/// Validated department record.
#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentRecord {
    pub department_id: String,
    pub department_name: String,
    pub established: Option<NaiveDate>,
}

/// Validated student counseling record.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub student_id: String,
    pub date_of_admission: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
    pub department_choices: Option<String>,
    pub department_admission: String,
}

/// Validated performance record, one exam paper taken by one student.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub student_id: String,
    pub semester_name: String,
    pub paper_id: String,
    pub paper_name: String,
    pub marks: f64,
    pub effort_hours: u32,
}

/// Validated employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_joining: Option<NaiveDate>,
    pub department_id: String,
}

/// One row of the analysis-ready fact table: a performance record joined to
/// its student and, through the student's admission, to the department.
/// Joined fields stay `None` when the referenced row does not exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedRecord {
    pub student_id: String,
    pub semester_name: String,
    pub paper_id: String,
    pub paper_name: String,
    pub marks: f64,
    pub effort_hours: u32,
    pub date_of_admission: Option<NaiveDate>,
    pub student_date_of_birth: Option<NaiveDate>,
    pub department_choices: Option<String>,
    pub department_admission: Option<String>,
    pub department_name: Option<String>,
    pub department_established: Option<NaiveDate>,
}

/// Which source file a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SourceTable {
    Departments,
    Students,
    Performance,
    Employees,
}

impl SourceTable {
    pub const ALL: [SourceTable; 4] = [
        SourceTable::Departments,
        SourceTable::Students,
        SourceTable::Performance,
        SourceTable::Employees,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceTable::Departments => "departments",
            SourceTable::Students => "students",
            SourceTable::Performance => "performance",
            SourceTable::Employees => "employees",
        }
    }
}

/// Why a row was excluded from the clean tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionReason {
    MissingField,
    InvalidType,
    OutOfRange,
    DuplicateKey,
}

impl ExceptionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            ExceptionReason::MissingField => "missing field",
            ExceptionReason::InvalidType => "invalid type",
            ExceptionReason::OutOfRange => "out of range",
            ExceptionReason::DuplicateKey => "duplicate key",
        }
    }
}

/// An input row excluded from the transform. `row_index` is the 0-based data
/// row position within the source file, header excluded.
#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionRecord {
    pub table: SourceTable,
    pub row_index: usize,
    pub column: String,
    pub reason: ExceptionReason,
    pub details: String,
}

/// The cleaned per-table row sets that survived validation.
#[derive(Debug, Clone, Default)]
pub struct CleanTables {
    pub departments: Vec<DepartmentRecord>,
    pub students: Vec<StudentRecord>,
    pub performance: Vec<PerformanceRecord>,
    pub employees: Vec<EmployeeRecord>,
}

/// Everything one pipeline run produces in memory.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    pub clean: CleanTables,
    pub transformed: Vec<TransformedRecord>,
    pub exceptions: Vec<ExceptionRecord>,
}
