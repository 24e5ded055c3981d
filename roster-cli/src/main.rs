use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use libroster::logging::{config_from_env, LogFormat};
use libroster::validation::{check_field, validate_class, validate_student, FieldKind};
use libroster::{Config, Database, RosterError, State};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about = "Manage students, classes and class assignments")]
#[command(long_about = r#"Manage students, classes and class assignments from the command line.

EXAMPLES:
    # Add a student and a class
    roster add-student Anna Berzina
    roster add-class 10 b

    # Assign class 10b to student 1
    roster assign 1 10 b

    # List everything
    roster students
    roster classes
    roster groups --format json | jq '.[] | select(.year == null)'

    # Use a different database
    roster --db ./school.db students

EXIT CODES:
    0 - Success
    1 - Error (database or configuration problem)
    3 - Invalid input (rejected by validation)
"#)]
struct Cli {
    /// Database file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH", env = "ROSTER_DB")]
    db: Option<String>,

    /// Config file (default: ~/.config/roster/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log format: text, json or pretty (default: $ROSTER_LOG_FORMAT or text)
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<LogFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a student
    AddStudent { name: String, surname: String },

    /// Add a class
    AddClass { year: String, modifier: String },

    /// Assign a class to a student
    Assign {
        student_id: i64,
        year: String,
        modifier: String,
    },

    /// List students
    Students {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List classes
    Classes {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List class assignments, one row per student
    Groups {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut logging = config_from_env(cli.verbose);
    if let Some(format) = cli.log_format {
        logging.format = format;
    }
    logging.init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit code for a failed run: the library's code when it has one, else 1
fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .downcast_ref::<RosterError>()
        .map_or(1, RosterError::exit_code)
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .with_database_path(cli.db);

    // Reject bad input before touching the database
    validate(&cli.command)?;

    let db = Database::new(&config.database.path)
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))?;
    let state = State::new(db);
    let result = execute(&state, cli.command).await;
    state.close().await;
    result
}

fn validate(command: &Command) -> libroster::Result<()> {
    match command {
        Command::AddStudent { name, surname } => validate_student(name, surname).into_result(),
        Command::AddClass { year, modifier } | Command::Assign { year, modifier, .. } => {
            validate_class(year, modifier).into_result()
        }
        _ => Ok(()),
    }
}

fn trimmed(kind: FieldKind, raw: &str) -> libroster::Result<&str> {
    check_field(kind, raw).map_err(RosterError::InvalidInput)
}

async fn execute(state: &State, command: Command) -> Result<()> {
    match command {
        Command::AddStudent { name, surname } => {
            let name = trimmed(FieldKind::Name, &name)?;
            let surname = trimmed(FieldKind::Surname, &surname)?;
            let student = state.add_student(name, surname).await?;
            tracing::info!(student_id = student.id, "Added student");
            println!("{}", student.id);
        }
        Command::AddClass { year, modifier } => {
            let year = trimmed(FieldKind::Year, &year)?;
            let modifier = trimmed(FieldKind::Modifier, &modifier)?;
            let class = state.add_class(year, modifier).await?;
            println!("{}", class.id);
        }
        Command::Assign {
            student_id,
            year,
            modifier,
        } => {
            state
                .assign_class_to_student(
                    trimmed(FieldKind::Year, &year)?,
                    trimmed(FieldKind::Modifier, &modifier)?,
                    student_id,
                )
                .await?;
        }
        Command::Students { format } => {
            let students = state.students().await?;
            match format {
                OutputFormat::Json => print_json(&students)?,
                OutputFormat::Text => students.iter().for_each(|s| println!("{}", s)),
            }
        }
        Command::Classes { format } => {
            let classes = state.classes().await?;
            match format {
                OutputFormat::Json => print_json(&classes)?,
                OutputFormat::Text => classes.iter().for_each(|c| println!("{}", c)),
            }
        }
        Command::Groups { format } => {
            let groups = state.groups().await?;
            match format {
                OutputFormat::Json => print_json(&groups)?,
                OutputFormat::Text => groups
                    .iter()
                    .for_each(|g| println!("{} {}", g.student_id, g)),
            }
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(rows: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(rows).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
