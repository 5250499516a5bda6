//! One-shot ETL for student records: four CSVs in, a cleaned and joined
//! fact table, exception reports, and a refreshed SQLite file out.
//!
//! A run is strictly sequential and owns its output paths for its whole
//! duration; do not point two concurrent invocations at the same output
//! directory or database file.

pub mod error;
pub mod extract;
pub mod load;
pub mod structs;
pub mod transform;

// Re-export public API
pub use error::{PipelineError, Result};
pub use extract::{load_tables, InputFiles};
pub use load::{write_database, write_exceptions_csv, write_summary_csv, write_transformed_csv};
pub use structs::{
    CleanTables, DepartmentRecord, EmployeeRecord, ExceptionReason, ExceptionRecord,
    PerformanceRecord, RawTables, SimpleLogger, SourceTable, StudentRecord, TransformOutput,
    TransformedRecord,
};
pub use transform::process_data;
