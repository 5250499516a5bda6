use crate::error::Result;
use crate::structs::{
    ExceptionRecord, SourceTable, TransformOutput, TransformedRecord, DATE_FORMAT,
};
use chrono::NaiveDate;
use csv::Writer;
use log::debug;
use rusqlite::{params, Connection};
use std::fs::{self, File};
use std::path::Path;

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Writes a CSV through a sibling temp file and a rename, so an aborted run
/// never leaves a half-written file at the output path.
fn write_csv_atomic<F>(output_path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut Writer<File>) -> Result<()>,
{
    let tmp_path = output_path.with_extension("csv.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = Writer::from_writer(file);
    write(&mut writer)?;
    writer.flush()?;
    fs::rename(&tmp_path, output_path)?;
    Ok(())
}

/// Writes the transformed fact table to a CSV file, overwriting any prior
/// file of the same name.
///
/// # Arguments
/// * `records` - The joined records, already sorted
/// * `output_path` - Path where the CSV file will be created
///
/// # Errors
/// Returns error if the file cannot be created or written to.
pub fn write_transformed_csv(records: &[TransformedRecord], output_path: &Path) -> Result<()> {
    write_csv_atomic(output_path, |writer| {
        writer.write_record([
            "Student_ID",
            "Semster_Name",
            "Paper_ID",
            "Paper_Name",
            "Marks",
            "Effort_Hours",
            "DOA",
            "DOB",
            "Department_Choices",
            "Department_Admission",
            "Department_Name",
            "DOE",
        ])?;

        for rec in records {
            writer.write_record(&[
                rec.student_id.clone(),
                rec.semester_name.clone(),
                rec.paper_id.clone(),
                rec.paper_name.clone(),
                format!("{:.2}", rec.marks),
                rec.effort_hours.to_string(),
                format_date(rec.date_of_admission),
                format_date(rec.student_date_of_birth),
                rec.department_choices.clone().unwrap_or_default(),
                rec.department_admission.clone().unwrap_or_default(),
                rec.department_name.clone().unwrap_or_default(),
                format_date(rec.department_established),
            ])?;
        }
        Ok(())
    })
}

/// Writes the exception report: one row per excluded input row.
///
/// # Arguments
/// * `exceptions` - The exception records, already sorted
/// * `output_path` - Path where the report will be created
///
/// # Errors
/// Returns error if the file cannot be created or written to.
pub fn write_exceptions_csv(exceptions: &[ExceptionRecord], output_path: &Path) -> Result<()> {
    write_csv_atomic(output_path, |writer| {
        writer.write_record(["Table", "Row_Index", "Column", "Reason", "Details"])?;
        for ex in exceptions {
            writer.write_record(&[
                ex.table.as_str().to_string(),
                ex.row_index.to_string(),
                ex.column.clone(),
                ex.reason.as_str().to_string(),
                ex.details.clone(),
            ])?;
        }
        Ok(())
    })
}

/// Writes the per-table exception counts next to the full report.
pub fn write_summary_csv(exceptions: &[ExceptionRecord], output_path: &Path) -> Result<()> {
    write_csv_atomic(output_path, |writer| {
        writer.write_record(["Dataset", "Exceptions"])?;
        for table in SourceTable::ALL {
            let count = exceptions.iter().filter(|e| e.table == table).count();
            writer.write_record(&[table.as_str().to_string(), count.to_string()])?;
        }
        Ok(())
    })
}

const SCHEMA: &str = r#"
DROP TABLE IF EXISTS fact_performance;
DROP TABLE IF EXISTS performance;
DROP TABLE IF EXISTS employees;
DROP TABLE IF EXISTS students;
DROP TABLE IF EXISTS departments;

CREATE TABLE departments (
    department_id   TEXT PRIMARY KEY,
    department_name TEXT NOT NULL UNIQUE,
    established     TEXT
);

CREATE TABLE students (
    student_id           TEXT PRIMARY KEY,
    date_of_admission    TEXT,
    date_of_birth        TEXT,
    department_choices   TEXT,
    department_admission TEXT NOT NULL
);

CREATE TABLE employees (
    employee_id     TEXT PRIMARY KEY,
    date_of_birth   TEXT,
    date_of_joining TEXT,
    department_id   TEXT NOT NULL
);

CREATE TABLE performance (
    student_id    TEXT NOT NULL,
    semester_name TEXT NOT NULL,
    paper_id      TEXT NOT NULL,
    paper_name    TEXT NOT NULL,
    marks         REAL NOT NULL,
    effort_hours  INTEGER NOT NULL,
    PRIMARY KEY (student_id, paper_id)
);

CREATE TABLE fact_performance (
    student_id             TEXT NOT NULL,
    semester_name          TEXT NOT NULL,
    paper_id               TEXT NOT NULL,
    paper_name             TEXT NOT NULL,
    marks                  REAL NOT NULL,
    effort_hours           INTEGER NOT NULL,
    date_of_admission      TEXT,
    student_date_of_birth  TEXT,
    department_choices     TEXT,
    department_admission   TEXT,
    department_name        TEXT,
    department_established TEXT
);
"#;

fn sql_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DATE_FORMAT).to_string())
}

/// Replaces the pipeline's tables in the SQLite database file.
///
/// Drops and recreates the four clean source tables and `fact_performance`,
/// then inserts every row, all inside one transaction. A failed run leaves
/// whatever the previous run committed.
///
/// # Arguments
/// * `db_path` - SQLite database file, created if absent
/// * `output` - The clean tables and transformed rows to store
///
/// # Errors
/// Returns error if the database cannot be opened or any statement fails.
pub fn write_database(db_path: &Path, output: &TransformOutput) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut conn = Connection::open(db_path)?;
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO departments (department_id, department_name, established)
             VALUES (?1, ?2, ?3)",
        )?;
        for d in &output.clean.departments {
            stmt.execute(params![
                d.department_id,
                d.department_name,
                sql_date(d.established)
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO students
                 (student_id, date_of_admission, date_of_birth,
                  department_choices, department_admission)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        for s in &output.clean.students {
            stmt.execute(params![
                s.student_id,
                sql_date(s.date_of_admission),
                sql_date(s.date_of_birth),
                s.department_choices,
                s.department_admission
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO employees
                 (employee_id, date_of_birth, date_of_joining, department_id)
             VALUES (?1, ?2, ?3, ?4)",
        )?;
        for e in &output.clean.employees {
            stmt.execute(params![
                e.employee_id,
                sql_date(e.date_of_birth),
                sql_date(e.date_of_joining),
                e.department_id
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO performance
                 (student_id, semester_name, paper_id, paper_name, marks, effort_hours)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        for p in &output.clean.performance {
            stmt.execute(params![
                p.student_id,
                p.semester_name,
                p.paper_id,
                p.paper_name,
                p.marks,
                p.effort_hours
            ])?;
        }

        let mut stmt = tx.prepare(
            "INSERT INTO fact_performance
                 (student_id, semester_name, paper_id, paper_name, marks, effort_hours,
                  date_of_admission, student_date_of_birth, department_choices,
                  department_admission, department_name, department_established)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        )?;
        for r in &output.transformed {
            stmt.execute(params![
                r.student_id,
                r.semester_name,
                r.paper_id,
                r.paper_name,
                r.marks,
                r.effort_hours,
                sql_date(r.date_of_admission),
                sql_date(r.student_date_of_birth),
                r.department_choices,
                r.department_admission,
                r.department_name,
                sql_date(r.department_established)
            ])?;
        }
    }

    tx.commit()?;
    debug!(
        "Database refreshed: {} departments, {} students, {} employees, {} performance, {} fact rows",
        output.clean.departments.len(),
        output.clean.students.len(),
        output.clean.employees.len(),
        output.clean.performance.len(),
        output.transformed.len()
    );
    Ok(())
}
