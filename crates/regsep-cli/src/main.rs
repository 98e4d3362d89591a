use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use regsep_core::{
    get_separator, partition_path, read_categories, Config, RegressionSuite, RegsepError, Result,
    StrategyType, SuiteFormat,
};

mod args;
mod logging;
use args::{Cli, Commands, ConfigAction, FormatArg, Shell, StrategyArg};

/// Options of the `separate` command after flag parsing
struct SeparateOptions {
    categories: PathBuf,
    suite: PathBuf,
    prefix: String,
    strategy: Option<StrategyArg>,
    overwrite: Option<bool>,
    format: Option<FormatArg>,
    dry_run: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    let quiet = cli.quiet;

    let result = match cli.command {
        Some(Commands::Separate {
            categories,
            suite,
            prefix,
            strategy,
            overwrite,
            format,
            dry_run,
        }) => handle_separate(
            &base_dir,
            SeparateOptions {
                categories,
                suite,
                prefix,
                strategy,
                overwrite,
                format,
                dry_run,
            },
            quiet,
        ),
        Some(Commands::Categories { file }) => handle_categories(&file),
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "regsep", &mut io::stdout());
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("REGSEP_BASE") {
        return PathBuf::from(base);
    }

    Config::default_base_dir().unwrap_or_else(|_| PathBuf::from(".regsep"))
}

fn handle_separate(base_dir: &Path, opts: SeparateOptions, quiet: bool) -> Result<()> {
    let config = Config::load(base_dir)?;

    let strategy = match opts.strategy {
        Some(StrategyArg::First) => StrategyType::First,
        Some(StrategyArg::All) => StrategyType::All,
        None => config.strategy()?,
    };
    let overwrite = resolve_overwrite(opts.overwrite, &config);
    let format = match opts.format {
        Some(FormatArg::Toml) => SuiteFormat::Toml,
        Some(FormatArg::Json) => SuiteFormat::Json,
        None => config
            .output_format()?
            .unwrap_or_else(|| SuiteFormat::from_path(&opts.suite)),
    };

    let categories = read_categories(&opts.categories)?;
    let suite = RegressionSuite::from_file(&opts.suite)?;
    let mut separator = get_separator(categories, strategy);
    let partition = separator.separate(&suite)?;

    if !quiet {
        println!();
        println!(
            "{} {} cases, {} categories, strategy {}",
            "Separated:".green(),
            suite.len(),
            separator.categories().len(),
            strategy.to_string().cyan()
        );
        for (category, cases) in partition.iter() {
            println!("  {:<24} {}", category.name().cyan(), cases.len());
        }
        if !partition.unmatched().is_empty() {
            println!(
                "  {:<24} {}",
                "(unmatched)".yellow(),
                partition.unmatched().len()
            );
        }
        println!();
    }

    if opts.dry_run {
        if partition.is_empty() {
            return Err(RegsepError::NothingSeparated);
        }
        for (category, _) in partition.iter() {
            let path = partition_path(&opts.prefix, category.name(), format);
            let marker = if path.exists() && !overwrite {
                "[EXISTS]".red()
            } else {
                "[WRITE]".green()
            };
            println!("{} {}", marker, path.display());
        }
        return Ok(());
    }

    let report = separator.save_as(&opts.prefix, &suite.metadata, overwrite, format)?;
    if !quiet {
        for file in &report.files {
            println!(
                "{} {} ({} cases, {})",
                "Written:".green(),
                file.path.display(),
                file.cases,
                file.digest.dimmed()
            );
        }
    }

    Ok(())
}

/// Command-line flag wins over the configured default
fn resolve_overwrite(flag: Option<bool>, config: &Config) -> bool {
    flag.unwrap_or(config.separate.overwrite)
}

fn handle_categories(file: &Path) -> Result<()> {
    let categories = read_categories(file)?;

    println!();
    for category in &categories {
        let descr = category.description();
        println!(
            "{:<24} {:<4} cuis={} names={} tuis={}",
            category.name().cyan(),
            category.kind().as_str(),
            descr.target_cuis.len(),
            descr.target_names.len(),
            descr.target_tuis.len()
        );
        if descr.is_empty() {
            println!("  {} no targets; nothing will fit", "[WARN]".yellow());
        }
    }
    println!();
    println!("{} categories", categories.len());

    Ok(())
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(RegsepError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}
