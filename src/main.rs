use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "ol")]
#[command(about = "Orgledger - a lightweight org hierarchy and vacation ledger")]
#[command(version)]
struct Cli {
    /// Path to the orgledger directory (default: .orgledger in current dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Output as JSON for machine consumption
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new orgledger in the current directory
    Init,

    /// Add an employee to the roster
    Hire {
        /// Employee display name
        name: String,

        /// Employee id (auto-generated if not provided)
        #[arg(long)]
        id: Option<u32>,

        /// Team id
        #[arg(long)]
        team: Option<u32>,

        /// Vacation package id
        #[arg(long)]
        package: Option<u32>,

        /// Direct superior's employee id
        #[arg(long)]
        superior: Option<u32>,
    },

    /// Add a team
    Team {
        /// Team display name
        name: String,

        /// Team id (auto-generated if not provided)
        #[arg(long)]
        id: Option<u32>,
    },

    /// Add a vacation package
    Package {
        /// Package display name
        name: String,

        /// Calendar year the package applies to
        #[arg(long)]
        year: i32,

        /// Days granted for the year
        #[arg(long)]
        days: u32,

        /// Package id (auto-generated if not provided)
        #[arg(long)]
        id: Option<u32>,
    },

    /// Record a vacation for an employee
    Vacation {
        /// Employee id
        employee: u32,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        since: String,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        until: String,

        /// Partial-day vacation measured in hours
        #[arg(long)]
        hours: Option<u32>,

        /// Vacation id (auto-generated if not provided)
        #[arg(long)]
        id: Option<u32>,
    },

    /// List employees
    List {
        /// Only members of this team (by name)
        #[arg(long)]
        team: Option<String>,

        /// Only employees with a vacation starting in this year
        #[arg(long)]
        vacation_year: Option<i32>,
    },

    /// Show one employee with superiors, team, package, and vacations
    Show {
        /// Employee id
        id: u32,
    },

    /// Resolve the reporting hierarchy and print every derived entry
    Structure,

    /// Distance between an employee and a superior in the reporting chain
    Row {
        /// Employee id
        employee: u32,

        /// Superior's employee id
        superior: u32,
    },

    /// Check the roster for structural issues
    Check,

    /// Free vacation days for an employee
    FreeDays {
        /// Employee id
        id: u32,

        /// Evaluation date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Whether an employee can request another vacation
    Request {
        /// Employee id
        id: u32,

        /// Evaluation date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Used vacation days per employee for a year
    Report {
        /// Year to report on (default: year of the evaluation date)
        #[arg(long)]
        year: Option<i32>,

        /// Evaluation date (YYYY-MM-DD, default today)
        #[arg(long)]
        as_of: Option<String>,
    },

    /// Teams with no vacations starting in a year
    IdleTeams {
        /// Year to inspect
        #[arg(long)]
        year: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ledger_dir = cli.dir.unwrap_or_else(|| PathBuf::from(".orgledger"));

    match cli.command {
        Commands::Init => commands::init::run(&ledger_dir),
        Commands::Hire {
            name,
            id,
            team,
            package,
            superior,
        } => commands::hire::run(&ledger_dir, &name, id, team, package, superior),
        Commands::Team { name, id } => commands::team::run(&ledger_dir, &name, id),
        Commands::Package {
            name,
            year,
            days,
            id,
        } => commands::package::run(&ledger_dir, &name, year, days, id),
        Commands::Vacation {
            employee,
            since,
            until,
            hours,
            id,
        } => commands::vacation::run(&ledger_dir, employee, &since, &until, hours, id),
        Commands::List {
            team,
            vacation_year,
        } => commands::list::run(&ledger_dir, team.as_deref(), vacation_year, cli.json),
        Commands::Show { id } => commands::show::run(&ledger_dir, id, cli.json),
        Commands::Structure => commands::structure::run(&ledger_dir, cli.json),
        Commands::Row { employee, superior } => {
            commands::row::run(&ledger_dir, employee, superior, cli.json)
        }
        Commands::Check => commands::check::run(&ledger_dir, cli.json),
        Commands::FreeDays { id, as_of } => {
            commands::free_days::run(&ledger_dir, id, as_of.as_deref(), cli.json)
        }
        Commands::Request { id, as_of } => {
            commands::request::run(&ledger_dir, id, as_of.as_deref(), cli.json)
        }
        Commands::Report { year, as_of } => {
            commands::report::run(&ledger_dir, year, as_of.as_deref(), cli.json)
        }
        Commands::IdleTeams { year } => commands::idle_teams::run(&ledger_dir, year, cli.json),
    }
}
