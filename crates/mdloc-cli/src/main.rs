#[macro_use]
mod ui;
mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser)]
#[command(
    name = "mdloc",
    version,
    about = "Markdown documentation quality and translation coverage audit"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every classified file and per-language counts
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Also write a daily-rolling debug log into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Config file; created with defaults when missing
    #[arg(long, global = true, default_value = mdloc_config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check every Markdown file for quality issues and missing translations
    Check {
        #[arg(short = 'd', long = "docs-dir", alias = "docs_dir", default_value = "docs")]
        docs_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the translation coverage of a docs tree
    TranslationStatus {
        #[arg(short = 'd', long = "docs-dir", alias = "docs_dir", default_value = "docs")]
        docs_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Write JSON schemas of the machine-readable outputs
    Schema {
        #[arg(long, default_value = "schemas")]
        out_dir: PathBuf,
    },
}

struct Ctx {
    config: PathBuf,
    use_color: bool,
}

trait Runnable {
    fn run(self, ctx: &Ctx) -> Result<()>;
}

impl Runnable for Commands {
    fn run(self, ctx: &Ctx) -> Result<()> {
        let cmd_name = format!("{:?}", self);
        info!(event = "command_start", cmd = %cmd_name);

        let result = match self {
            Commands::Check { docs_dir, format } => {
                debug!(event = "check_args", docs_dir = ?docs_dir, format = ?format);
                commands::check::run_check(&docs_dir, &ctx.config, format, ctx.use_color)
            }
            Commands::TranslationStatus { docs_dir, format } => {
                debug!(event = "translation_status_args", docs_dir = ?docs_dir, format = ?format);
                commands::translation_status::run_translation_status(
                    &docs_dir,
                    &ctx.config,
                    format,
                    ctx.use_color,
                )
            }
            Commands::Schema { out_dir } => commands::schema::run_schema(&out_dir),
        };

        match &result {
            Ok(_) => info!(event = "command_done", cmd = %cmd_name),
            Err(e) => error!(event = "command_failed", cmd = %cmd_name, error = %e),
        }

        result
    }
}

fn init_tracing(quiet: bool, verbose: bool, log_dir: Option<&PathBuf>) -> Option<WorkerGuard> {
    let console_filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let console_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "mdloc.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    guard
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _guard = init_tracing(cli.quiet, cli.verbose, cli.log_dir.as_ref());

    let use_color = !cli.no_color
        && std::io::stdout().is_terminal()
        && std::env::var_os("NO_COLOR").is_none();

    let ctx = Ctx {
        config: cli.config,
        use_color,
    };
    cli.cmd.run(&ctx)
}
