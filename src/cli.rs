//! CLI definitions and entry point

use std::io::IsTerminal;

use clap::Parser;

use preflight::logging;
use preflight::requirements::{self, REQUIREMENTS};

/// preflight - Verify required programs, then get to work
#[derive(Parser, Debug)]
#[command(
    name = "preflight",
    version,
    about = "Verify required programs, then get to work",
    long_about = "Checks that every external program this tool depends on can be found \
                  on PATH before any real work starts.\n\n\
                  Each missing program is reported with a link explaining how to install it."
)]
pub struct Cli {
    /// Enable verbose output (same as --log-level info)
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimum level to log: debug, info, warn (anything else means warn)
    #[arg(short = 'l', long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Level name handed to the logger; an explicit level beats --verbose
    pub fn level_spec(&self) -> Option<&str> {
        self.log_level
            .as_deref()
            .or_else(|| self.verbose.then_some("info"))
    }

    /// Color is on unless disabled, and only when stderr is a terminal
    pub fn color_enabled(&self) -> bool {
        !self.no_color && std::io::stderr().is_terminal()
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let logger = logging::initialize(cli.level_spec(), cli.color_enabled())?;
    log::debug!("Logging at {} and above", logger.config().threshold);

    requirements::check(REQUIREMENTS, logger).into_result()?;
    log::info!("All {} required program(s) found", REQUIREMENTS.len());

    Ok(())
}
