use clap::{CommandFactory, Parser, Subcommand};
use colored::Colorize;
use exoscan::display::DEFAULT_LIMIT;
use exoscan::report::DEFAULT_REPORT_FILE;
use exoscan::{
    ArchiveApi, ArchiveClient, Config, Console, Session, SessionOptions, SortKey, colors,
    progress,
};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "exo")]
#[command(author, version, about = "Browse NASA Exoplanet Archive results from the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Archive API contract to query
    #[arg(long, value_enum, default_value_t = ArchiveApi::Transiting)]
    api: ArchiveApi,

    /// Keep planets whose name or host star contains this text
    #[arg(short, long)]
    search: Option<String>,

    /// Sort order (archive order if omitted)
    #[arg(long, value_enum)]
    sort: Option<SortKey>,

    /// Maximum number of rows to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,

    /// Write the full result list to the report file
    #[arg(long)]
    save: bool,

    /// Report file path
    #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
    output: PathBuf,

    /// Ask for search, sort order and saving on the terminal
    #[arg(short, long)]
    interactive: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("exoscan=debug,exo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn explore(cli: Cli, color: bool) -> exoscan::Result<()> {
    let config = Config::from_env()?;
    let client = ArchiveClient::new(config)?;

    let spinner = progress::spinner(format!(
        "Fetching data from NASA ({} archive)...",
        cli.api.name()
    ));
    let fetched = client.fetch_planets(cli.api).await;
    spinner.finish_and_clear();
    let records = fetched?;

    let options = SessionOptions {
        search: cli.search,
        sort: cli.sort,
        limit: cli.limit,
        save: cli.save,
        output: cli.output,
        interactive: cli.interactive,
        color,
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(Console::new(stdin.lock(), stdout.lock()), options);
    let outcome = session.run(records)?;
    tracing::debug!(?outcome, "session finished");

    Ok(())
}

/// Print the banner; fails only when stdout is gone.
fn banner() -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out, "{}", "🌌 NASA Exoplanet Explorer 🪐".bold())?;
    writeln!(out, "{}", "=".repeat(50))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut script = Vec::new();
        clap_complete::generate(*shell, &mut Cli::command(), "exo", &mut script);
        if let Err(e) = std::io::stdout().lock().write_all(&script) {
            tracing::debug!(error = %e, "could not write completions");
        }
        return Ok(());
    }

    let color = colors::init_colors(cli.no_color);

    if let Err(e) = banner() {
        tracing::debug!(error = %e, "stdout closed before the banner");
        return Ok(());
    }

    // Runtime failures are reported, not turned into a failing exit status
    match explore(cli, color).await {
        Ok(()) => {}
        Err(e) if e.is_broken_pipe() => tracing::debug!("stdout closed, stopping"),
        Err(e) => {
            tracing::debug!(error = ?e, "run aborted");
            if let Err(write_err) = writeln!(std::io::stdout().lock(), "{} {}", "✗".red(), e) {
                tracing::debug!(error = %write_err, "could not report failure");
            }
        }
    }

    Ok(())
}
