use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::info;
use similar::TextDiff;

use refunc::codemod::{discover_files, process_file};
use refunc::rename::FuncRenamer;

#[derive(Parser, Debug)]
#[command(
    name = "refunc",
    version,
    about = "Rename a Python function across call sites and imports"
)]
struct Cli {
    /// Fully qualified name to rename from, e.g. `pkg.utils.old_func`
    #[arg(long = "from", value_name = "QUALIFIED_NAME")]
    rename_from: String,

    /// Fully qualified name to rename to, e.g. `pkg.utils.new_func`
    #[arg(long = "to", value_name = "QUALIFIED_NAME")]
    rename_to: String,

    /// Files or directories to rewrite
    #[arg(required = true, value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Write changes back to disk instead of printing a diff
    #[arg(long)]
    write: bool,

    /// Exit with status 1 if any file would change
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let rule = FuncRenamer::new(&cli.rename_from, &cli.rename_to)?;
    let files = discover_files(&cli.paths)?;
    info!("Processing {} file(s)", files.len());

    let mut changed_files = 0usize;
    for path in &files {
        let result = process_file(path, &rule, cli.write)?;
        let Some(new_source) = &result.new_source else {
            continue;
        };
        changed_files += 1;

        if cli.write {
            info!("Rewrote {} ({} node(s))", path.display(), result.rewrites);
        } else {
            let diff = TextDiff::from_lines(result.old_source.as_str(), new_source.as_str());
            print!(
                "{}",
                diff.unified_diff().context_radius(3).header(
                    &format!("a/{}", path.display()),
                    &format!("b/{}", path.display())
                )
            );
        }
    }

    if cli.write {
        println!("{changed_files} file(s) rewritten");
    } else {
        println!("{changed_files} file(s) would be rewritten");
    }

    if cli.check && changed_files > 0 {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}
