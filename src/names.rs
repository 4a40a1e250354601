use anyhow::{anyhow, Context, Result};
use bumpalo::Bump;
use log::debug;
use regex::Regex;
use std::{fs::File, io::Read, path::Path};

/*
 * Read a names file and split it into tokens.
 * See <parse>.
 */
pub fn load<'a, P: AsRef<Path>>(path: P, bump: &'a Bump) -> Result<Vec<&'a str>> {
    let path = path.as_ref();
    let mut f = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut input = String::new();
    f.read_to_string(&mut input)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let names = parse(&input, bump)?;
    debug!("loaded {} names from {}", names.len(), path.display());
    Ok(names)
}

/*
 * Split <input> on whitespace. Every name is copied into <bump>
 * so all of them share the arena lifetime.
 */
pub fn parse<'a>(input: &str, bump: &'a Bump) -> Result<Vec<&'a str>> {
    let re = Regex::new(r"\S+")?;
    Ok(re
        .find_iter(input)
        .map(|m| &*bump.alloc_str(m.as_str()))
        .collect())
}

/*
 * The first <count> names, or an error if there are fewer.
 */
pub fn take<'n, 'a>(names: &'n [&'a str], count: usize) -> Result<&'n [&'a str]> {
    names.get(..count).ok_or(anyhow!(
        "Expected {} names, input only holds {}",
        count,
        names.len()
    ))
}
