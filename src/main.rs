use std::path::PathBuf;

use env_logger::Builder;
use log::{debug, error, info, LevelFilter};
use structopt::StructOpt;

use crate::config::Substitution;
use crate::exceptions::RelabelError;
use crate::fs::{DryRunFileSystem, RealFileSystem};

mod config;
mod exceptions;
mod fs;
mod replace;
mod replacer;

#[derive(Debug, StructOpt)]
#[structopt(name = "relabel")]
struct Opt {
    #[structopt(
        short = "f",
        long = "file",
        help = "Path to the text file to rewrite in place",
        value_name = "FILE"
    )]
    file: PathBuf,

    #[structopt(
        short = "r",
        long = "replace",
        help = "Literal substitution, applied in the order given. Splits on the first '='; \\n, \\t, \\r, \\\\ and \\= are unescaped. Defaults to the USER and Poe transcript markers",
        value_name = "OLD=NEW",
        number_of_values = 1,
        parse(try_from_str = config::parse_substitution)
    )]
    substitutions: Vec<Substitution>,

    #[structopt(short = "v", long = "verbose", help = "Print debug information")]
    verbose: bool,

    #[structopt(
        short = "d",
        long = "dry-run",
        help = "Only print the output, do not write to file"
    )]
    dry_run: bool,
}

fn main() -> Result<(), RelabelError> {
    let opt = Opt::from_args();

    let config = config::Config {
        file: opt.file,
        substitutions: if opt.substitutions.is_empty() {
            Substitution::defaults()
        } else {
            opt.substitutions
        },
        verbose: opt.verbose,
        dry_run: opt.dry_run,
    };
    if config.verbose {
        Builder::new().filter(None, LevelFilter::Debug).init();
    } else {
        Builder::new().filter(None, LevelFilter::Info).init();
    }

    debug!("Target: {}", config.file.display());
    for substitution in &config.substitutions {
        debug!("Substitution: {}", substitution);
    }

    let result = if config.dry_run {
        let mut dry = DryRunFileSystem::new(RealFileSystem);
        replacer::apply_all(&mut dry, &config.file, &config.substitutions).map(|outcomes| {
            if let Some(content) = dry.pending(&config.file) {
                print!("{}", content);
            }
            outcomes
        })
    } else {
        replacer::apply_all(&mut RealFileSystem, &config.file, &config.substitutions)
    };

    match result {
        Ok(outcomes) => {
            info!("Applied {} substitution(s)", outcomes.len());
        }
        Err(e) => {
            error!("Error Encountered:\n{}\n\nExiting.", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
