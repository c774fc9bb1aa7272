use std::fmt::Display;
use std::path::PathBuf;

use crate::exceptions::RelabelError;

/// Role markers rewritten when no `--replace` is given.
pub const DEFAULT_SUBSTITUTIONS: [(&str, &str); 2] = [
    ("USER", "Daniel Dominko: \n---\n"),
    ("Poe", "Claude: \n---\n"),
];

pub struct Config {
    pub file: PathBuf,
    pub substitutions: Vec<Substitution>,
    pub verbose: bool,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub old: String,
    pub new: String,
}

impl Substitution {
    pub fn new(old: &str, new: &str) -> Substitution {
        Substitution {
            old: old.to_string(),
            new: new.to_string(),
        }
    }

    pub fn defaults() -> Vec<Substitution> {
        DEFAULT_SUBSTITUTIONS
            .iter()
            .map(|(old, new)| Substitution::new(old, new))
            .collect()
    }
}

impl Display for Substitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {:?}", self.old, self.new)
    }
}

/// Parses `OLD=NEW`, splitting on the first unescaped `=`.
///
/// Both halves understand `\n`, `\t`, `\r`, `\\` and `\=`. Any other escape is
/// kept as written.
pub fn parse_substitution(value: &str) -> Result<Substitution, RelabelError> {
    let mut old = String::new();
    let mut new = String::new();
    let mut seen_separator = false;

    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        let target = if seen_separator { &mut new } else { &mut old };
        match c {
            '\\' => match chars.next() {
                Some('n') => target.push('\n'),
                Some('t') => target.push('\t'),
                Some('r') => target.push('\r'),
                Some('\\') => target.push('\\'),
                Some('=') => target.push('='),
                Some(other) => {
                    target.push('\\');
                    target.push(other);
                }
                None => target.push('\\'),
            },
            '=' if !seen_separator => seen_separator = true,
            _ => target.push(c),
        }
    }

    if !seen_separator {
        return Err(RelabelError::InvalidSubstitution(
            value.to_string(),
            "expected OLD=NEW".to_string(),
        ));
    }
    Ok(Substitution { old, new })
}
