/// Typerace Users CLI - inspect and check user records
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use typerace_users::{RecordKind, Settings};

mod commands;

#[derive(Parser)]
#[command(name = "typerace-users")]
#[command(about = "Inspect and check Typerace user records", long_about = None)]
struct Cli {
    /// Settings file path
    #[arg(short, long, global = true, env = "TYPERACE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a record and print it in canonical form
    Canonical {
        /// Record kind (create-user, header, user, update-user)
        kind: RecordKind,
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List the wire keys of a record kind
    Keys {
        /// Record kind (create-user, header, user, update-user)
        kind: RecordKind,
    },
    /// Check whether a request header has expired
    CheckHeader {
        /// Input file (stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Evaluate at this exact epoch timestamp instead of the wall clock (no leeway)
        #[arg(long)]
        now: Option<i64>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "typerace_users=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Canonical { kind, file } => {
            let input = commands::read_input(file.as_deref())?;
            println!("{}", commands::canonical(kind, &input)?);
        }
        Commands::Keys { kind } => {
            print!("{}", commands::keys(kind));
        }
        Commands::CheckHeader { file, now } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let input = commands::read_input(file.as_deref())?;
            let report = commands::check_header(&input, now, &settings)?;
            println!("{}", report);
            if report.expired {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
