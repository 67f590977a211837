use anyhow::{Context, Result};
use chrono::NaiveDate;
use churn::areas::repository::Repository;
use churn::commands::log::LogOptions;
use churn::commands::resolve;
use churn::commands::trend::TrendOptions;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "churn",
    version = "0.1.0",
    about = "Mines change history out of a Git repository",
    long_about = "churn rewrites a repository's numstat log so that every \
    historical name of a file resolves to its current one, and derives \
    whitespace-complexity trends over revision ranges.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "resolve",
        about = "Collapse rename chains in a numstat log read from stdin",
        long_about = "This command reads a numstat log from stdin, newest commit first, \
        and writes it back to stdout with every rename chain collapsed. \
        Lines that are not numstat records pass through unchanged."
    )]
    Resolve,
    #[command(
        name = "log",
        about = "Emit the rename-resolved numstat log for a folder",
        long_about = "This command produces the numstat log of the repository in the \
        current directory, restricted to the given folder, with every rename \
        chain collapsed."
    )]
    Log {
        #[arg(index = 1, help = "The folder to restrict the log to")]
        folder: String,
        #[arg(long, help = "Only include commits after this date (YYYY-MM-DD)")]
        since: Option<String>,
    },
    #[command(
        name = "trend",
        about = "Calculate the whitespace-complexity trend of a file",
        long_about = "This command calculates the whitespace-complexity trend of a file \
        over a revision range in the repository in the current directory, \
        emitting one CSV row per revision."
    )]
    Trend {
        #[arg(long, help = "The first revision of the range (excluded)")]
        start: String,
        #[arg(long, help = "The last revision of the range")]
        end: String,
        #[arg(long, help = "The file to calculate the trend for")]
        file: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Resolve => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();

            resolve::run(stdin.lock(), &mut stdout)?
        }
        Commands::Log { folder, since } => {
            let since = since
                .as_deref()
                .map(|date| {
                    NaiveDate::parse_from_str(date, "%Y-%m-%d")
                        .with_context(|| format!("invalid --since date: {date}"))
                })
                .transpose()?;

            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.resolved_log(&LogOptions {
                folder: folder.clone(),
                since,
            })?
        }
        Commands::Trend { start, end, file } => {
            let pwd = std::env::current_dir()?;
            let repository =
                Repository::new(&pwd.to_string_lossy(), Box::new(std::io::stdout()))?;

            repository.complexity_trend(&TrendOptions {
                start: start.clone(),
                end: end.clone(),
                file: file.clone(),
            })?
        }
    }

    Ok(())
}
