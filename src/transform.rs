use crate::structs::{
    CleanTables, DepartmentRecord, EmployeeRecord, ExceptionReason, ExceptionRecord,
    PerformanceRecord, RawDepartment, RawEmployee, RawPerformance, RawStudent, RawTables,
    SourceTable, StudentRecord, TransformOutput, TransformedRecord, DATE_FORMAT,
};
use chrono::{Datelike, NaiveDate};
use log::debug;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Departments must have been established in the modern era; earlier values
/// are data-entry noise in the source files.
const MIN_ESTABLISHED_YEAR: i32 = 1900;

/// Cleans the four raw tables and joins them into the fact table.
///
/// Every input row lands in exactly one of two places: its table's clean set
/// or the exception set (one exception record per excluded row, first failing
/// check wins). Clean performance rows are then left-joined to students on
/// `Student_ID` and through `Department_Admission` to departments; rows whose
/// foreign keys have no match are retained with empty joined fields, never
/// dropped.
///
/// The result is a pure function of the input row multiset: duplicate-key
/// handling excludes every copy rather than keeping a positional "first",
/// and both output sets are sorted, so reordering input rows cannot change
/// what comes out.
///
/// # Arguments
/// * `raw` - The four tables as loaded from disk
///
/// # Returns
/// Returns a [`TransformOutput`] with the clean tables, the sorted
/// transformed rows, and the sorted exception records.
pub fn process_data(raw: &RawTables) -> TransformOutput {
    let mut exceptions = Vec::new();

    debug!("Cleaning {} department rows", raw.departments.len());
    let departments = clean_departments(&raw.departments, &mut exceptions);
    debug!("Cleaning {} student rows", raw.students.len());
    let students = clean_students(&raw.students, &mut exceptions);
    debug!("Cleaning {} performance rows", raw.performance.len());
    let performance = clean_performance(&raw.performance, &mut exceptions);
    debug!("Cleaning {} employee rows", raw.employees.len());
    let employees = clean_employees(&raw.employees, &mut exceptions);

    let total_in = raw.departments.len() + raw.students.len() + raw.performance.len()
        + raw.employees.len();
    println!(
        "Validated {} rows across 4 tables, {} routed to exceptions",
        total_in,
        exceptions.len()
    );

    let mut transformed = join_performance(&performance, &students, &departments);

    transformed.sort_by(|a, b| {
        a.student_id
            .cmp(&b.student_id)
            .then_with(|| a.paper_id.cmp(&b.paper_id))
    });
    exceptions.sort_by(|a, b| {
        a.table
            .cmp(&b.table)
            .then_with(|| a.row_index.cmp(&b.row_index))
    });

    TransformOutput {
        clean: CleanTables {
            departments,
            students,
            performance,
            employees,
        },
        transformed,
        exceptions,
    }
}

/// A single validation failure for one row. Converted into an
/// [`ExceptionRecord`] once the table and row position are known.
struct RowIssue {
    column: &'static str,
    reason: ExceptionReason,
    details: String,
}

impl RowIssue {
    fn missing(column: &'static str) -> Self {
        Self {
            column,
            reason: ExceptionReason::MissingField,
            details: format!("{column} is required"),
        }
    }

    fn invalid(column: &'static str, details: String) -> Self {
        Self {
            column,
            reason: ExceptionReason::InvalidType,
            details,
        }
    }

    fn out_of_range(column: &'static str, details: String) -> Self {
        Self {
            column,
            reason: ExceptionReason::OutOfRange,
            details,
        }
    }

    fn into_record(self, table: SourceTable, row_index: usize) -> ExceptionRecord {
        ExceptionRecord {
            table,
            row_index,
            column: self.column.to_string(),
            reason: self.reason,
            details: self.details,
        }
    }
}

/// Trims a raw cell and rejects empty/whitespace-only values.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Trims an optional cell, mapping empty to `None`.
fn optional(value: &Option<String>) -> Option<String> {
    required(value).map(str::to_string)
}

/// Parses an optional date cell. Absent cells are fine; present cells must
/// parse with [`DATE_FORMAT`].
fn parse_date(
    column: &'static str,
    value: &Option<String>,
) -> std::result::Result<Option<NaiveDate>, RowIssue> {
    match required(value) {
        None => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                RowIssue::invalid(column, format!("{column}={s} is not a {DATE_FORMAT} date"))
            }),
    }
}

/// Keys that occur more than once among the locally valid rows of a table.
fn duplicate_keys<K: Eq + Hash>(keys: impl Iterator<Item = K>) -> HashSet<K> {
    let mut counts: HashMap<K, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key)
        .collect()
}

fn coerce_department(row: &RawDepartment) -> std::result::Result<DepartmentRecord, RowIssue> {
    let department_id = required(&row.department_id)
        .ok_or_else(|| RowIssue::missing("Department_ID"))?
        .to_string();
    let department_name = required(&row.department_name)
        .ok_or_else(|| RowIssue::missing("Department_Name"))?
        .to_string();
    let established = parse_date("DOE", &row.established)?;
    if let Some(date) = established {
        if date.year() < MIN_ESTABLISHED_YEAR {
            return Err(RowIssue::out_of_range(
                "DOE",
                format!("DOE={date} (must be >={MIN_ESTABLISHED_YEAR})"),
            ));
        }
    }
    Ok(DepartmentRecord {
        department_id,
        department_name,
        established,
    })
}

/// Department IDs and names must both be unique; every row participating in
/// a collision is excluded.
fn clean_departments(
    rows: &[RawDepartment],
    exceptions: &mut Vec<ExceptionRecord>,
) -> Vec<DepartmentRecord> {
    let mut candidates = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match coerce_department(row) {
            Ok(rec) => candidates.push((idx, rec)),
            Err(issue) => exceptions.push(issue.into_record(SourceTable::Departments, idx)),
        }
    }

    let dup_ids = duplicate_keys(candidates.iter().map(|(_, r)| r.department_id.clone()));
    let dup_names = duplicate_keys(candidates.iter().map(|(_, r)| r.department_name.clone()));

    let mut clean = Vec::new();
    for (idx, rec) in candidates {
        if dup_ids.contains(&rec.department_id) {
            exceptions.push(ExceptionRecord {
                table: SourceTable::Departments,
                row_index: idx,
                column: "Department_ID".to_string(),
                reason: ExceptionReason::DuplicateKey,
                details: format!("Department_ID={} appears more than once", rec.department_id),
            });
        } else if dup_names.contains(&rec.department_name) {
            exceptions.push(ExceptionRecord {
                table: SourceTable::Departments,
                row_index: idx,
                column: "Department_Name".to_string(),
                reason: ExceptionReason::DuplicateKey,
                details: format!(
                    "Department_Name={} appears more than once",
                    rec.department_name
                ),
            });
        } else {
            clean.push(rec);
        }
    }
    clean
}

fn coerce_student(row: &RawStudent) -> std::result::Result<StudentRecord, RowIssue> {
    let student_id = required(&row.student_id)
        .ok_or_else(|| RowIssue::missing("Student_ID"))?
        .to_string();
    let department_admission = required(&row.department_admission)
        .ok_or_else(|| RowIssue::missing("Department_Admission"))?
        .to_string();
    let date_of_admission = parse_date("DOA", &row.date_of_admission)?;
    let date_of_birth = parse_date("DOB", &row.date_of_birth)?;
    Ok(StudentRecord {
        student_id,
        date_of_admission,
        date_of_birth,
        department_choices: optional(&row.department_choices),
        department_admission,
    })
}

fn clean_students(
    rows: &[RawStudent],
    exceptions: &mut Vec<ExceptionRecord>,
) -> Vec<StudentRecord> {
    let mut candidates = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match coerce_student(row) {
            Ok(rec) => candidates.push((idx, rec)),
            Err(issue) => exceptions.push(issue.into_record(SourceTable::Students, idx)),
        }
    }

    let dup_ids = duplicate_keys(candidates.iter().map(|(_, r)| r.student_id.clone()));

    let mut clean = Vec::new();
    for (idx, rec) in candidates {
        if dup_ids.contains(&rec.student_id) {
            exceptions.push(ExceptionRecord {
                table: SourceTable::Students,
                row_index: idx,
                column: "Student_ID".to_string(),
                reason: ExceptionReason::DuplicateKey,
                details: format!("Student_ID={} appears more than once", rec.student_id),
            });
        } else {
            clean.push(rec);
        }
    }
    clean
}

fn coerce_performance(row: &RawPerformance) -> std::result::Result<PerformanceRecord, RowIssue> {
    let student_id = required(&row.student_id)
        .ok_or_else(|| RowIssue::missing("Student_ID"))?
        .to_string();
    let semester_name = required(&row.semester_name)
        .ok_or_else(|| RowIssue::missing("Semster_Name"))?
        .to_string();
    let paper_id = required(&row.paper_id)
        .ok_or_else(|| RowIssue::missing("Paper_ID"))?
        .to_string();
    let paper_name = required(&row.paper_name)
        .ok_or_else(|| RowIssue::missing("Paper_Name"))?
        .to_string();

    let marks_raw = required(&row.marks).ok_or_else(|| RowIssue::missing("Marks"))?;
    let marks: f64 = marks_raw
        .parse()
        .map_err(|_| RowIssue::invalid("Marks", format!("Marks={marks_raw} not numeric")))?;
    if !(0.0..=100.0).contains(&marks) {
        return Err(RowIssue::out_of_range(
            "Marks",
            format!("Marks={marks_raw} not in [0,100]"),
        ));
    }

    let hours_raw =
        required(&row.effort_hours).ok_or_else(|| RowIssue::missing("Effort_Hours"))?;
    let hours: i64 = hours_raw.parse().map_err(|_| {
        RowIssue::invalid(
            "Effort_Hours",
            format!("Effort_Hours={hours_raw} not an integer"),
        )
    })?;
    if hours < 0 {
        return Err(RowIssue::out_of_range(
            "Effort_Hours",
            format!("Effort_Hours={hours_raw} must be >= 0"),
        ));
    }

    Ok(PerformanceRecord {
        student_id,
        semester_name,
        paper_id,
        paper_name,
        marks,
        effort_hours: hours as u32,
    })
}

fn clean_performance(
    rows: &[RawPerformance],
    exceptions: &mut Vec<ExceptionRecord>,
) -> Vec<PerformanceRecord> {
    let mut candidates = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match coerce_performance(row) {
            Ok(rec) => candidates.push((idx, rec)),
            Err(issue) => exceptions.push(issue.into_record(SourceTable::Performance, idx)),
        }
    }

    let dup_pairs = duplicate_keys(
        candidates
            .iter()
            .map(|(_, r)| (r.student_id.clone(), r.paper_id.clone())),
    );

    let mut clean = Vec::new();
    for (idx, rec) in candidates {
        if dup_pairs.contains(&(rec.student_id.clone(), rec.paper_id.clone())) {
            exceptions.push(ExceptionRecord {
                table: SourceTable::Performance,
                row_index: idx,
                column: "Student_ID,Paper_ID".to_string(),
                reason: ExceptionReason::DuplicateKey,
                details: format!(
                    "({}, {}) appears more than once",
                    rec.student_id, rec.paper_id
                ),
            });
        } else {
            clean.push(rec);
        }
    }
    clean
}

fn coerce_employee(row: &RawEmployee) -> std::result::Result<EmployeeRecord, RowIssue> {
    let employee_id = required(&row.employee_id)
        .ok_or_else(|| RowIssue::missing("Employee_ID"))?
        .to_string();
    let department_id = required(&row.department_id)
        .ok_or_else(|| RowIssue::missing("Department_ID"))?
        .to_string();
    let date_of_birth = parse_date("DOB", &row.date_of_birth)?;
    let date_of_joining = parse_date("DOJ", &row.date_of_joining)?;
    Ok(EmployeeRecord {
        employee_id,
        date_of_birth,
        date_of_joining,
        department_id,
    })
}

fn clean_employees(
    rows: &[RawEmployee],
    exceptions: &mut Vec<ExceptionRecord>,
) -> Vec<EmployeeRecord> {
    let mut candidates = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match coerce_employee(row) {
            Ok(rec) => candidates.push((idx, rec)),
            Err(issue) => exceptions.push(issue.into_record(SourceTable::Employees, idx)),
        }
    }

    let dup_ids = duplicate_keys(candidates.iter().map(|(_, r)| r.employee_id.clone()));

    let mut clean = Vec::new();
    for (idx, rec) in candidates {
        if dup_ids.contains(&rec.employee_id) {
            exceptions.push(ExceptionRecord {
                table: SourceTable::Employees,
                row_index: idx,
                column: "Employee_ID".to_string(),
                reason: ExceptionReason::DuplicateKey,
                details: format!("Employee_ID={} appears more than once", rec.employee_id),
            });
        } else {
            clean.push(rec);
        }
    }
    clean
}

/// Left-joins clean performance rows to students and departments. Employees
/// are loaded to the store as their own table; joining them here would fan
/// one performance row out into one per department employee.
fn join_performance(
    performance: &[PerformanceRecord],
    students: &[StudentRecord],
    departments: &[DepartmentRecord],
) -> Vec<TransformedRecord> {
    let students_by_id: HashMap<&str, &StudentRecord> = students
        .iter()
        .map(|s| (s.student_id.as_str(), s))
        .collect();
    let departments_by_id: HashMap<&str, &DepartmentRecord> = departments
        .iter()
        .map(|d| (d.department_id.as_str(), d))
        .collect();

    let mut unmatched_students = 0usize;
    let mut unmatched_departments = 0usize;

    let transformed = performance
        .iter()
        .map(|perf| {
            let student = students_by_id.get(perf.student_id.as_str()).copied();
            if student.is_none() {
                unmatched_students += 1;
            }
            let department = student
                .and_then(|s| departments_by_id.get(s.department_admission.as_str()).copied());
            if student.is_some() && department.is_none() {
                unmatched_departments += 1;
            }
            TransformedRecord {
                student_id: perf.student_id.clone(),
                semester_name: perf.semester_name.clone(),
                paper_id: perf.paper_id.clone(),
                paper_name: perf.paper_name.clone(),
                marks: perf.marks,
                effort_hours: perf.effort_hours,
                date_of_admission: student.and_then(|s| s.date_of_admission),
                student_date_of_birth: student.and_then(|s| s.date_of_birth),
                department_choices: student.and_then(|s| s.department_choices.clone()),
                department_admission: student.map(|s| s.department_admission.clone()),
                department_name: department.map(|d| d.department_name.clone()),
                department_established: department.and_then(|d| d.established),
            }
        })
        .collect();

    if unmatched_students > 0 || unmatched_departments > 0 {
        debug!(
            "Left join kept {} rows without a matching student and {} without a matching department",
            unmatched_students, unmatched_departments
        );
    }

    transformed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        if s.is_empty() {
            None
        } else {
            Some(s.to_string())
        }
    }

    fn dept(id: &str, name: &str, doe: &str) -> RawDepartment {
        RawDepartment {
            department_id: cell(id),
            department_name: cell(name),
            established: cell(doe),
        }
    }

    fn student(id: &str, admission: &str) -> RawStudent {
        RawStudent {
            student_id: cell(id),
            date_of_admission: cell("2014-07-01"),
            date_of_birth: cell("1996-02-12"),
            department_choices: cell(admission),
            department_admission: cell(admission),
        }
    }

    fn perf(student_id: &str, paper_id: &str, marks: &str, hours: &str) -> RawPerformance {
        RawPerformance {
            student_id: cell(student_id),
            semester_name: cell("Sem_1"),
            paper_id: cell(paper_id),
            paper_name: cell("Algorithms"),
            marks: cell(marks),
            effort_hours: cell(hours),
        }
    }

    fn employee(id: &str, department_id: &str) -> RawEmployee {
        RawEmployee {
            employee_id: cell(id),
            date_of_birth: cell("1980-01-01"),
            date_of_joining: cell("2005-09-15"),
            department_id: cell(department_id),
        }
    }

    fn tables(
        departments: Vec<RawDepartment>,
        students: Vec<RawStudent>,
        performance: Vec<RawPerformance>,
        employees: Vec<RawEmployee>,
    ) -> RawTables {
        RawTables {
            departments,
            students,
            performance,
            employees,
        }
    }

    #[test]
    fn single_row_joins_all_three_tables() {
        let raw = tables(
            vec![dept("IDEPT1", "Computer Science", "1990-04-01")],
            vec![student("SID10", "IDEPT1")],
            vec![perf("SID10", "PID1", "85", "4")],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.exceptions.is_empty());
        assert_eq!(out.transformed.len(), 1);
        let row = &out.transformed[0];
        assert_eq!(row.student_id, "SID10");
        assert_eq!(row.marks, 85.0);
        assert_eq!(row.department_admission.as_deref(), Some("IDEPT1"));
        assert_eq!(row.department_name.as_deref(), Some("Computer Science"));
        assert_eq!(
            row.department_established,
            NaiveDate::from_ymd_opt(1990, 4, 1)
        );
    }

    #[test]
    fn unmatched_student_is_retained_with_empty_join_fields() {
        let raw = tables(
            vec![dept("IDEPT1", "Computer Science", "")],
            vec![student("SID10", "IDEPT1")],
            vec![perf("SID99", "PID1", "70", "3")],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.exceptions.is_empty());
        assert_eq!(out.transformed.len(), 1);
        let row = &out.transformed[0];
        assert_eq!(row.student_id, "SID99");
        assert_eq!(row.department_admission, None);
        assert_eq!(row.department_name, None);
        assert_eq!(row.date_of_admission, None);
    }

    #[test]
    fn unmatched_department_nulls_only_department_fields() {
        let raw = tables(
            vec![],
            vec![student("SID10", "IDEPT404")],
            vec![perf("SID10", "PID1", "70", "3")],
            vec![],
        );
        let out = process_data(&raw);

        let row = &out.transformed[0];
        assert_eq!(row.department_admission.as_deref(), Some("IDEPT404"));
        assert_eq!(row.department_name, None);
        assert_eq!(
            row.date_of_admission,
            NaiveDate::from_ymd_opt(2014, 7, 1)
        );
    }

    #[test]
    fn missing_required_field_is_excluded_with_reason() {
        let raw = tables(
            vec![dept("IDEPT1", "Computer Science", "")],
            vec![RawStudent {
                student_id: cell("SID10"),
                department_admission: None,
                ..Default::default()
            }],
            vec![],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.clean.students.is_empty());
        assert_eq!(out.exceptions.len(), 1);
        let ex = &out.exceptions[0];
        assert_eq!(ex.table, SourceTable::Students);
        assert_eq!(ex.column, "Department_Admission");
        assert_eq!(ex.reason, ExceptionReason::MissingField);
        assert!(!ex.reason.as_str().is_empty());
    }

    #[test]
    fn clean_plus_exceptions_partitions_every_table() {
        let raw = tables(
            vec![
                dept("IDEPT1", "Computer Science", "1990-04-01"),
                dept("IDEPT1", "Chemistry", ""),
                dept("", "Physics", ""),
            ],
            vec![student("SID10", "IDEPT1"), student("SID10", "IDEPT1")],
            vec![
                perf("SID10", "PID1", "85", "4"),
                perf("SID10", "PID2", "150", "4"),
                perf("SID11", "PID1", "60", "oops"),
            ],
            vec![employee("EID1", "IDEPT1"), employee("EID1", "IDEPT1")],
        );
        let out = process_data(&raw);

        let per_table = |table: SourceTable| {
            out.exceptions.iter().filter(|e| e.table == table).count()
        };
        assert_eq!(out.clean.departments.len() + per_table(SourceTable::Departments), 3);
        assert_eq!(out.clean.students.len() + per_table(SourceTable::Students), 2);
        assert_eq!(out.clean.performance.len() + per_table(SourceTable::Performance), 3);
        assert_eq!(out.clean.employees.len() + per_table(SourceTable::Employees), 2);
    }

    #[test]
    fn duplicate_keys_exclude_every_copy() {
        let raw = tables(
            vec![
                dept("IDEPT1", "Computer Science", ""),
                dept("IDEPT1", "Chemistry", ""),
            ],
            vec![],
            vec![],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.clean.departments.is_empty());
        assert_eq!(out.exceptions.len(), 2);
        assert!(out
            .exceptions
            .iter()
            .all(|e| e.reason == ExceptionReason::DuplicateKey));
    }

    #[test]
    fn duplicate_department_name_is_also_a_key_violation() {
        let raw = tables(
            vec![
                dept("IDEPT1", "Computer Science", ""),
                dept("IDEPT2", "Computer Science", ""),
            ],
            vec![],
            vec![],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.clean.departments.is_empty());
        assert!(out
            .exceptions
            .iter()
            .all(|e| e.column == "Department_Name"));
    }

    #[test]
    fn marks_and_effort_hours_are_range_checked() {
        let raw = tables(
            vec![],
            vec![],
            vec![
                perf("SID10", "PID1", "101", "4"),
                perf("SID10", "PID2", "abc", "4"),
                perf("SID10", "PID3", "50", "-2"),
                perf("SID10", "PID4", "50", "3.5"),
            ],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.clean.performance.is_empty());
        let reasons: Vec<ExceptionReason> =
            out.exceptions.iter().map(|e| e.reason).collect();
        assert_eq!(
            reasons,
            vec![
                ExceptionReason::OutOfRange,
                ExceptionReason::InvalidType,
                ExceptionReason::OutOfRange,
                ExceptionReason::InvalidType,
            ]
        );
    }

    #[test]
    fn early_established_date_is_out_of_range() {
        let raw = tables(
            vec![
                dept("IDEPT1", "Computer Science", "1825-06-01"),
                dept("IDEPT2", "Chemistry", "1980-13-01"),
            ],
            vec![],
            vec![],
            vec![],
        );
        let out = process_data(&raw);

        assert!(out.clean.departments.is_empty());
        assert_eq!(out.exceptions[0].reason, ExceptionReason::OutOfRange);
        assert_eq!(out.exceptions[1].reason, ExceptionReason::InvalidType);
    }

    #[test]
    fn output_sets_do_not_depend_on_input_row_order() {
        let departments = vec![
            dept("IDEPT1", "Computer Science", "1990-04-01"),
            dept("IDEPT2", "Chemistry", "1971-10-20"),
        ];
        let students = vec![student("SID10", "IDEPT1"), student("SID11", "IDEPT2")];
        let performance = vec![
            perf("SID10", "PID1", "85", "4"),
            perf("SID11", "PID1", "62", "6"),
            perf("SID11", "PID2", "oops", "6"),
        ];

        let forward = process_data(&tables(
            departments.clone(),
            students.clone(),
            performance.clone(),
            vec![],
        ));
        let reversed = process_data(&tables(
            departments.into_iter().rev().collect(),
            students.into_iter().rev().collect(),
            performance.into_iter().rev().collect(),
            vec![],
        ));

        assert_eq!(forward.transformed, reversed.transformed);

        // Row positions shift with the reorder; the excluded rows and their
        // reasons must not.
        let strip = |out: &TransformOutput| {
            out.exceptions
                .iter()
                .map(|e| (e.table, e.column.clone(), e.reason, e.details.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(&forward), strip(&reversed));
    }

    #[test]
    fn transformed_rows_are_sorted_by_student_then_paper() {
        let raw = tables(
            vec![],
            vec![],
            vec![
                perf("SID11", "PID2", "50", "1"),
                perf("SID10", "PID9", "50", "1"),
                perf("SID11", "PID1", "50", "1"),
            ],
            vec![],
        );
        let out = process_data(&raw);

        let order: Vec<(&str, &str)> = out
            .transformed
            .iter()
            .map(|r| (r.student_id.as_str(), r.paper_id.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![("SID10", "PID9"), ("SID11", "PID1"), ("SID11", "PID2")]
        );
    }
}
