//! Regex-driven lint fixer.
//!
//! Rewrites `.ts`/`.tsx` files under a root directory so they satisfy a small
//! set of lint rules, printing one line per rewritten file and a summary.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lintfix::core::rules::CATALOGUE;
use lintfix::core::summary::RunSummary;
use lintfix::exit_codes;
use lintfix::fix::{Mode, run_fix};
use lintfix::io::config::{DEFAULT_CONFIG_FILE, ErrorPolicy, FixerConfig, load_config};

#[derive(Parser)]
#[command(
    name = "lintfix",
    version,
    about = "Apply regex lint fixes to a TypeScript source tree"
)]
struct Cli {
    /// Config file; defaults apply when it does not exist.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite matching files in place.
    Fix(TargetArgs),
    /// Report files that would be rewritten; exits 2 if any.
    Check(TargetArgs),
    /// List known rules.
    Rules,
}

#[derive(Args, Debug, Default)]
struct TargetArgs {
    /// Directory to traverse (overrides config `root`).
    #[arg(long)]
    root: Option<PathBuf>,

    /// File extension to visit; repeatable (overrides config `extensions`).
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Report unreadable or unwritable files and keep going.
    #[arg(long)]
    keep_going: bool,
}

impl TargetArgs {
    fn apply(self, mut config: FixerConfig) -> FixerConfig {
        if let Some(root) = self.root {
            config.root = root;
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions;
        }
        if self.keep_going {
            config.on_error = ErrorPolicy::Continue;
        }
        config
    }
}

fn main() {
    lintfix::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Fix(args) => cmd_run(&cli.config, args, Mode::Write),
        Command::Check(args) => cmd_run(&cli.config, args, Mode::Check),
        Command::Rules => cmd_rules(),
    }
}

fn cmd_run(config_path: &Path, args: TargetArgs, mode: Mode) -> Result<i32> {
    let config = args.apply(load_config(config_path)?);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_fix(&config, mode, &mut out)?;
    out.flush().context("flush stdout")?;
    report_failures(&summary);
    Ok(exit_code(&summary, mode))
}

fn cmd_rules() -> Result<i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for rule in CATALOGUE {
        writeln!(out, "{}  {}", rule.id, rule.summary).context("write rule list")?;
    }
    Ok(exit_codes::OK)
}

fn report_failures(summary: &RunSummary) {
    for failure in &summary.failures {
        match &failure.path {
            Some(path) => eprintln!("Failed: {}: {}", path.display(), failure.message),
            None => eprintln!("Failed: {}", failure.message),
        }
    }
}

fn exit_code(summary: &RunSummary, mode: Mode) -> i32 {
    if summary.has_failures() {
        exit_codes::INVALID
    } else if mode == Mode::Check && summary.files_modified > 0 {
        exit_codes::PENDING
    } else {
        exit_codes::OK
    }
}
