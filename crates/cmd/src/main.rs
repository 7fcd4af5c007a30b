use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use cmd::commands::build::BuildArgs;
use cmd::commands::{build_command, check_command, topics_command};
use cmd::common::{self, SiteContext};

#[derive(Parser)]
#[command(author, version, about = "DevConf static site builder", long_about = None)]
#[command(name = "devconf")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Log per-page and per-section detail
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the whole site into the output directory
    Build(BuildCli),
    /// Print the topics timeline fragment
    Topics(ConfigArg),
    /// Validate the site configuration and list its pages
    Check {
        #[command(flatten)]
        config: ConfigArg,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
struct ConfigArg {
    /// Site configuration (defaults to $DEVCONF_CONFIG, then ./site.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct BuildCli {
    #[command(flatten)]
    config: ConfigArg,
    /// Output directory
    #[arg(short, long, default_value = "build")]
    output: PathBuf,
    /// Branch name recorded in the generated pages
    #[arg(short, long, default_value = sitegen::DEFAULT_BRANCH)]
    branch: String,
    /// Remove the output directory before building
    #[arg(long)]
    clean: bool,
    /// Rewrite absolute URLs to file:// paths for previewing from disk
    #[arg(long)]
    local: bool,
}

fn load(config: &ConfigArg) -> Result<SiteContext> {
    SiteContext::load(&common::config_path_with_override(config.config.clone()))
}

#[allow(clippy::print_stdout)]
fn print_line(line: String) {
    println!("{}", line);
}

#[allow(clippy::print_stderr)]
fn print_error(e: &anyhow::Error) {
    eprintln!("Error: {:#}", e);
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build(args) => {
            let site = load(&args.config)?;
            let build_args = BuildArgs {
                output: args.output,
                branch: args.branch,
                clean: args.clean,
                local: args.local,
            };
            build_command(&site, &build_args, print_line).map(|_| ())
        }
        Commands::Topics(config) => topics_command(&load(&config)?, print_line),
        Commands::Check { config, json } => check_command(&load(&config)?, json, print_line),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (level, unknown) = common::log_level(cli.quiet, cli.debug);
    diagnostics::init_with_level(level);
    if let Some(val) = unknown {
        diagnostics::warn!("Unknown {var} value {val}, using info", var: diagnostics::LOG_ENV, val: val.as_str());
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}
