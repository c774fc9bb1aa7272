use std::io;
use std::path::Path;

use log::{debug, info, warn};

use crate::config::Substitution;
use crate::exceptions::RelabelError;
use crate::fs::FileSystem;
use crate::replace::replace_all;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Replaced { count: usize },
    NotFound,
}

/// The line printed to stdout for one substitution.
pub fn report(path: &Path, substitution: &Substitution, outcome: Outcome) -> String {
    match outcome {
        Outcome::Replaced { .. } => format!(
            "Successfully replaced \"{}\" with \"{}\" in {}.",
            substitution.old,
            substitution.new,
            path.display()
        ),
        Outcome::NotFound => format!("File \"{}\" not found.", path.display()),
    }
}

/// Rewrites `path` with every occurrence of `substitution.old` replaced.
///
/// The file is written back even when nothing matched. A file missing at
/// read or write time is reported and yields `Outcome::NotFound`; it is never
/// created. Every other I/O failure is returned to the caller.
pub fn replace_string_in_file<F: FileSystem>(
    fs: &mut F,
    path: &Path,
    substitution: &Substitution,
) -> Result<Outcome, RelabelError> {
    if substitution.old.is_empty() {
        warn!("Empty search string: {:?} will be inserted at every position", substitution.new);
    }

    let original = match fs.read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(not_found(path, substitution)),
        Err(e) => return Err(e.into()),
    };

    let replaced = replace_all(&original, &substitution.old, &substitution.new);
    debug!(
        "{}: {} occurrence(s) of {:?}",
        path.display(),
        replaced.count,
        substitution.old
    );
    match fs.write(path, &replaced.content) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(not_found(path, substitution)),
        Err(e) => return Err(e.into()),
    }

    let outcome = Outcome::Replaced {
        count: replaced.count,
    };
    println!("{}", report(path, substitution, outcome));
    Ok(outcome)
}

fn not_found(path: &Path, substitution: &Substitution) -> Outcome {
    println!("{}", report(path, substitution, Outcome::NotFound));
    Outcome::NotFound
}

/// Applies each substitution to `path` in order.
///
/// A missing file does not stop the sequence. Any other error does, and the
/// remaining substitutions are skipped.
pub fn apply_all<F: FileSystem>(
    fs: &mut F,
    path: &Path,
    substitutions: &[Substitution],
) -> Result<Vec<Outcome>, RelabelError> {
    let mut outcomes = Vec::with_capacity(substitutions.len());
    for substitution in substitutions {
        info!("Applying {}", substitution);
        outcomes.push(replace_string_in_file(fs, path, substitution)?);
    }
    Ok(outcomes)
}
