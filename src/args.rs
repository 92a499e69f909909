use ccsm::Result;

use std::{env, fs, path::PathBuf};

use anyhow::Context;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputArgsError {
    #[error("Couldn't parse input arguments: {0}")]
    Parse(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

/// Parses the input arguments, requiring the first and only argument to be a valid filepath
pub fn parse_input_arg() -> Result<PathBuf> {
    let mut args = env::args().skip(1);

    let filename = args.next().ok_or_else(|| {
        InputArgsError::Parse("First argument must be the operations file.".to_string())
    })?;

    if let Some(extra) = args.next() {
        Err(InputArgsError::Parse(format!("Unexpected argument: {extra}")))?
    }

    let path = fs::canonicalize(filename.clone())
        .with_context(|| InputArgsError::FileNotFound(filename))?;

    Ok(path)
}
