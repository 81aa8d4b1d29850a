mod app;
mod echo;
mod input;
mod logging;
mod styles;
mod terminal;
mod view;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use glimpse_core::{Browser, FetchConfig, extract, fetch_file, fetch_stdin, fetch_url, has_scheme, normalize_url};
use tokio::runtime::Runtime;
use tracing::info;

use crate::app::App;
use crate::logging::LogConfig;
use crate::terminal::TerminalSession;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// View the title, headings and paragraphs of a web page in the terminal
#[derive(Parser, Debug)]
#[command(name = "glimpse")]
#[command(version)]
#[command(about = "View the text of a web page in the terminal", long_about = None)]
struct Args {
    /// URL to open; with --dump also a local HTML file or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Print the extracted page to stdout instead of starting the viewer
    #[arg(long, requires = "input")]
    dump: bool,

    /// Leave out ANSI styling (with --dump)
    #[arg(long, requires = "dump")]
    plain: bool,

    /// HTTP timeout in seconds (default: none)
    #[arg(long, value_name = "SECS", env = "GLIMPSE_TIMEOUT")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA", env = "GLIMPSE_USER_AGENT")]
    user_agent: Option<String>,

    /// Directory for the log file
    #[arg(long, value_name = "DIR", env = "GLIMPSE_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            echo::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Logging is best-effort; the viewer runs without a subscriber.
    let _guard = match logging::init_logging(&LogConfig::new(args.log_dir.clone(), args.verbose)) {
        Ok((log_path, guard)) => {
            info!(version = VERSION, log = %log_path.display(), "starting");
            Some(guard)
        }
        Err(err) => {
            echo::print_warning(&format!("Logging disabled: {err:#}"));
            None
        }
    };

    let config = FetchConfig { timeout: args.timeout, user_agent: args.user_agent.clone() };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if args.dump {
        return dump(&args, &runtime, &config);
    }

    let mut app = App::new(Browser::new(config), runtime);
    if let Some(url) = &args.input {
        app.open_on_start(url);
    }

    let mut session = TerminalSession::start().context("Failed to initialize terminal")?;
    let result = app.run(session.terminal());
    drop(session);

    info!("exiting");
    result
}

/// Non-interactive mode: extract one input and print it.
fn dump(args: &Args, runtime: &Runtime, config: &FetchConfig) -> anyhow::Result<()> {
    let input = args.input.as_deref().context("--dump needs an INPUT")?;

    if args.verbose {
        echo::print_banner();
    }

    let html = if input == "-" {
        if args.verbose {
            echo::print_step(1, 2, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else if !has_scheme(input) && Path::new(input).exists() {
        if args.verbose {
            echo::print_step(1, 2, &format!("Reading from file {input}"));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {input}"))?
    } else {
        let url = normalize_url(input);
        if args.verbose {
            echo::print_step(1, 2, &format!("Fetching {url}"));
        }
        runtime
            .block_on(fetch_url(&url, config))
            .with_context(|| format!("Failed to fetch {url}"))?
    };

    if args.verbose {
        echo::print_info(&format!("Size: {}", echo::format_size(html.len())));
        echo::print_step(2, 2, "Extracting page");
    }

    let page = extract(&html).context("Failed to parse HTML")?;

    if args.verbose {
        echo::print_info(&format!("Blocks: {}", page.blocks.len()));
        eprintln!();
    }

    let output = if args.plain { page.to_plain() } else { page.to_display() };
    print!("{output}");

    Ok(())
}
