use clap::Parser;
use lib::{
    load_tables, process_data, write_database, write_exceptions_csv, write_summary_csv,
    write_transformed_csv, InputFiles, PipelineError, SimpleLogger,
};
use log::debug;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

static LOGGER: SimpleLogger = SimpleLogger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing the four input CSV files
    #[arg(short, long, default_value = "data")]
    input_dir: PathBuf,

    /// Directory for the transformed CSV and the exception reports
    #[arg(short, long, default_value = "outputs")]
    output_dir: PathBuf,

    /// SQLite database file to create or refresh
    #[arg(short, long, default_value = "edu.db")]
    database: PathBuf,

    /// Department master CSV filename (inside the input directory)
    #[arg(long, default_value = "Department_Information.csv")]
    departments_csv: String,

    /// Student counseling CSV filename
    #[arg(long, default_value = "Student_Counceling_Information.csv")]
    students_csv: String,

    /// Student performance CSV filename
    #[arg(long, default_value = "Student_Performance_Data.csv")]
    performance_csv: String,

    /// Employee master CSV filename
    #[arg(long, default_value = "Employee_Information.csv")]
    employees_csv: String,

    /// Log level for output
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), PipelineError> {
    // Initialize timer and logger
    let total_start = Instant::now();
    log::set_logger(&LOGGER).unwrap();

    // Acquire CLI args
    let args = Args::parse();
    if args.debug {
        log::set_max_level(log::LevelFilter::Debug);
    } else {
        log::set_max_level(log::LevelFilter::Info);
    }

    // UI
    println!("edu_etl! Student records ETL pipeline");
    debug!(
        "Input dir: {} | Output dir: {} | Database: {}",
        args.input_dir.display(),
        args.output_dir.display(),
        args.database.display()
    );

    let files = InputFiles {
        departments: args.departments_csv,
        students: args.students_csv,
        performance: args.performance_csv,
        employees: args.employees_csv,
    };

    // Extract
    println!("Loading input tables...");
    let extract_start = Instant::now();
    let raw = load_tables(&args.input_dir, &files)?;
    println!(
        "Loaded {} departments, {} students, {} performance rows, {} employees in {:.2?}",
        raw.departments.len(),
        raw.students.len(),
        raw.performance.len(),
        raw.employees.len(),
        extract_start.elapsed()
    );

    // Transform
    println!("Starting data cleaning and join...");
    let transform_start = Instant::now();
    let output = process_data(&raw);
    let transform_time = transform_start.elapsed();
    println!(
        "Transform completed in {:.2?} | {} transformed rows, {} exceptions",
        transform_time,
        output.transformed.len(),
        output.exceptions.len()
    );

    // Load
    fs::create_dir_all(&args.output_dir)?;
    println!(
        "Created output directory: {} | Writing output files...",
        args.output_dir.display()
    );
    let io_start = Instant::now();

    let transformed_path = args.output_dir.join("transformed.csv");
    let exceptions_path = args.output_dir.join("exceptions.csv");
    let summary_path = args.output_dir.join("exception_summary.csv");

    let csv_start = Instant::now();
    write_transformed_csv(&output.transformed, &transformed_path)?;
    println!("Transformed CSV write took {:.2?}", csv_start.elapsed());

    let report_start = Instant::now();
    write_exceptions_csv(&output.exceptions, &exceptions_path)?;
    write_summary_csv(&output.exceptions, &summary_path)?;
    println!("Exception reports took {:.2?}", report_start.elapsed());

    let db_start = Instant::now();
    write_database(&args.database, &output)?;
    println!("Database refresh took {:.2?}", db_start.elapsed());

    let io_time = io_start.elapsed();
    println!("All outputs took {:.2?}", io_time);
    println!("\nWrote files to directory: {}", args.output_dir.display());
    debug!("  - {}", transformed_path.display());
    debug!("  - {}", exceptions_path.display());
    debug!("  - {}", summary_path.display());
    debug!("  - {}", args.database.display());

    // Show summary
    println!("\nProcessed {} fact rows", output.transformed.len());
    if let Some(first) = output.transformed.first() {
        debug!(
            "Sample: {} {} paper={} marks={:.1} hours={}",
            first.student_id, first.semester_name, first.paper_id, first.marks, first.effort_hours
        );
    }

    let total_time = total_start.elapsed();
    println!("Pipeline completed successfully in {:.2?}", total_time);
    debug!(
        "Performance breakdown: Transform={:.1}%, IO={:.1}%",
        (transform_time.as_secs_f64() / total_time.as_secs_f64()) * 100.0,
        (io_time.as_secs_f64() / total_time.as_secs_f64()) * 100.0
    );

    println!("\nTotal runtime: {:.2?}", total_time);
    Ok(())
}
