use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use timetable_engine::config::Config;
use timetable_engine::parser::{load_store_or_default, save_store, validate_store};
use timetable_engine::reporter::{
    generate_reports, generate_teacher_schedule, print_summary, OutputFormat,
};
use timetable_engine::types::{Day, SchoolId, SessionId, Store, TeacherId};

#[derive(Parser)]
#[command(name = "timetable-engine")]
#[command(about = "Constraint-based multi-school timetable generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run with sample demo data, creating it if missing
    Demo {
        /// Path to the store document
        #[arg(short, long, default_value = "data/demo/store.json")]
        store: PathBuf,

        /// Output directory for reports
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,
    },

    /// Generate timetables for every school in a store document
    Generate {
        /// Path to the store document
        #[arg(short, long)]
        store: PathBuf,

        /// Optional run configuration TOML
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output directory for reports
        #[arg(short, long, default_value = "./output")]
        output: PathBuf,

        /// Output format(s): json, markdown, text, or all
        #[arg(short, long, default_value = "all")]
        format: String,

        /// Suppress progress output, print JSON summary only
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a school's timetable grid
    Show {
        /// Path to the store document
        #[arg(short, long)]
        store: PathBuf,

        /// School id; defaults to the store's active school
        #[arg(long)]
        school: Option<String>,

        /// Output format: json, markdown, or text
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Print one teacher's schedule instead of the whole grid
        #[arg(long)]
        teacher: Option<String>,
    },

    /// Move a session on a school's board by hand
    Move {
        /// Path to the store document
        #[arg(short, long)]
        store: PathBuf,

        #[arg(long)]
        school: String,

        #[arg(long)]
        session: String,

        #[arg(long = "from-day")]
        from_day: String,

        #[arg(long = "from-period")]
        from_period: u32,

        #[arg(long = "to-day")]
        to_day: String,

        #[arg(long = "to-period")]
        to_period: u32,
    },

    /// Report a school's currently known conflicts (as last left by
    /// `generate` or `move`)
    Check {
        /// Path to the store document
        #[arg(short, long)]
        store: PathBuf,

        /// School id; defaults to the store's active school
        #[arg(long)]
        school: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { store, output } => run_demo(&store, &output),
        Commands::Generate { store, config, output, format, quiet } => {
            run_generate(&store, config.as_deref(), &output, &format, quiet)
        }
        Commands::Show { store, school, format, teacher } => {
            run_show(&store, school, &format, teacher)
        }
        Commands::Move { store, school, session, from_day, from_period, to_day, to_period } => {
            run_move(&store, &school, &session, &from_day, from_period, &to_day, to_period)
        }
        Commands::Check { store, school } => run_check(&store, school),
    }
}

fn resolve_school_id(store: &Store, requested: Option<String>) -> Result<SchoolId> {
    if let Some(id) = requested {
        return Ok(SchoolId::from(id));
    }
    store
        .active_school_id
        .clone()
        .context("no school id given and the store has no active_school_id")
}

fn run_demo(store_path: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("{}", "Timetable Engine Demo".bold().cyan());
    println!("{}", "─".repeat(40));

    let mut store = load_store_or_default(store_path).context("failed to load demo store")?;
    if store.schools.is_empty() {
        println!("{}", "No demo data found. Creating sample data...".yellow());
        store = create_demo_store();
        save_store(&store, store_path)?;
    }

    validate_store(&store)?;
    println!(
        "Loaded {} schools, {} teachers",
        store.schools.len(),
        store.all_teachers.len()
    );

    println!("\nGenerating timetables...\n");
    let config = Config::default();
    store.generate(&config)?;

    for school in &store.schools {
        print_summary(school);
    }

    generate_reports(
        store.schools.first().expect("demo store always has a school"),
        output,
        &[OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text],
    )?;
    save_store(&store, store_path)?;

    println!("Reports written to: {}", output.display().to_string().green());
    Ok(())
}

fn run_generate(
    store_path: &PathBuf,
    config_path: Option<&std::path::Path>,
    output: &PathBuf,
    format: &str,
    quiet: bool,
) -> Result<()> {
    let mut store = load_store_or_default(store_path).context("failed to load store")?;
    validate_store(&store)?;

    let config = match config_path {
        Some(path) => Config::load_or_default(path)?,
        None => Config::default(),
    };

    if !quiet {
        println!(
            "Loaded {} schools, {} teachers",
            store.schools.len(),
            store.all_teachers.len()
        );
    }

    store.generate(&config)?;

    let formats = parse_formats(format);
    for school in &store.schools {
        generate_reports(school, &output.join(school.id.to_string()), &formats)?;
    }
    save_store(&store, store_path)?;

    if quiet {
        for school in &store.schools {
            let summary = timetable_engine::reporter::generate_json_summary(school)?;
            println!("{summary}");
        }
    } else {
        for school in &store.schools {
            print_summary(school);
        }
        println!("Reports written to: {}", output.display().to_string().green());
    }

    Ok(())
}

fn run_show(
    store_path: &PathBuf,
    school: Option<String>,
    format: &str,
    teacher: Option<String>,
) -> Result<()> {
    let store = load_store_or_default(store_path).context("failed to load store")?;
    let school_id = resolve_school_id(&store, school)?;
    let school = store.school(&school_id).context("unknown school id")?;

    if let Some(teacher_id) = teacher {
        match generate_teacher_schedule(school, &TeacherId::from(teacher_id)) {
            Some(report) => println!("{report}"),
            None => println!("Teacher has no sessions at this school"),
        }
        return Ok(());
    }

    match format.to_lowercase().as_str() {
        "json" => println!("{}", timetable_engine::reporter::generate_json_report(school)?),
        "markdown" | "md" => println!("{}", timetable_engine::reporter::generate_markdown_report(school)),
        _ => println!("{}", timetable_engine::reporter::generate_text_report(school)),
    }
    Ok(())
}

fn run_move(
    store_path: &PathBuf,
    school: &str,
    session: &str,
    from_day: &str,
    from_period: u32,
    to_day: &str,
    to_period: u32,
) -> Result<()> {
    let mut store = load_store_or_default(store_path).context("failed to load store")?;
    let school_id = SchoolId::from(school);
    // `Store::move_session` re-runs the Conflict Detector itself, so the
    // school's `conflicts` list already reflects the move below.
    store.move_session(
        &school_id,
        &SessionId::from(session),
        (Day::from(from_day), from_period),
        (Day::from(to_day), to_period),
    );
    save_store(&store, store_path)?;

    if let Some(school) = store.school(&school_id) {
        if school.conflicts.is_empty() {
            println!("{}", "Moved, no conflicts".green().bold());
        } else {
            println!(
                "{}",
                format!("Moved, {} conflicts now present", school.conflicts.len()).yellow().bold()
            );
        }
    }
    Ok(())
}

fn run_check(store_path: &PathBuf, school: Option<String>) -> Result<()> {
    let store = load_store_or_default(store_path).context("failed to load store")?;
    let school_id = resolve_school_id(&store, school)?;

    let school = store.school(&school_id).context("unknown school id")?;
    if school.conflicts.is_empty() {
        println!("{}", "✓ No conflicts".green().bold());
    } else {
        println!("{}", format!("✗ {} conflicts", school.conflicts.len()).red().bold());
        for conflict in &school.conflicts {
            println!("  - {} ({:?}): {}", conflict.session_id, conflict.kind, conflict.message);
        }
    }
    Ok(())
}

fn parse_formats(format: &str) -> Vec<OutputFormat> {
    if format == "all" {
        return vec![OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Text];
    }

    format
        .split(',')
        .filter_map(|f| match f.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            "text" | "txt" => Some(OutputFormat::Text),
            _ => None,
        })
        .collect()
}

fn create_demo_store() -> Store {
    use timetable_engine::types::{Assignment, AssignmentId, Teacher, TeacherId, TimeSlot, TimeSlotId};

    let mut store = Store::default();
    let school_id = store.add_school("Lakeside Secondary School");
    {
        let school = store.school_mut(&school_id).unwrap();
        school.days = vec![
            Day::from("Monday"),
            Day::from("Tuesday"),
            Day::from("Wednesday"),
            Day::from("Thursday"),
            Day::from("Friday"),
        ];
        school.time_slots = vec![
            TimeSlot {
                id: TimeSlotId::from("p1"),
                period: None,
                time_range: "08:00-08:40".into(),
                is_break: false,
                label: Some("Period 1".into()),
                days: None,
            },
            TimeSlot {
                id: TimeSlotId::from("p2"),
                period: None,
                time_range: "08:40-09:20".into(),
                is_break: false,
                label: Some("Period 2".into()),
                days: None,
            },
            TimeSlot {
                id: TimeSlotId::from("break"),
                period: None,
                time_range: "09:20-09:40".into(),
                is_break: true,
                label: Some("Break".into()),
                days: None,
            },
            TimeSlot {
                id: TimeSlotId::from("p3"),
                period: None,
                time_range: "09:40-10:20".into(),
                is_break: false,
                label: Some("Period 3".into()),
                days: None,
            },
        ];
        school.renumber_time_slots();
    }

    store.active_school_id = Some(school_id.clone());
    store.add_teacher(Teacher {
        id: TeacherId::from(""),
        name: "Ms. Anderson".into(),
        assignments: vec![Assignment {
            id: AssignmentId::from("a1"),
            school_id: school_id.clone(),
            subject: "Math".into(),
            grades: vec!["Grade 10".into()],
            arms: vec!["A".into()],
            periods_per_week: 3,
            option_group: None,
            allowed_days: None,
        }],
    });
    store.add_teacher(Teacher {
        id: TeacherId::from(""),
        name: "Mr. Baker".into(),
        assignments: vec![Assignment {
            id: AssignmentId::from("a2"),
            school_id,
            subject: "English".into(),
            grades: vec!["Grade 10".into()],
            arms: vec!["A".into()],
            periods_per_week: 2,
            option_group: None,
            allowed_days: None,
        }],
    });

    store
}
