//! Tokens command - print the token log of a source file

use super::{print_diagnostics, read_source, Reported};
use anyhow::Result;
use cesserract_runtime::Cesserract;

/// Print one descriptive line per token
pub fn run(file_path: &str, json: bool) -> Result<()> {
    let source = read_source(file_path)?;

    let tokens = Cesserract::new().tokenize(&source).map_err(|diagnostics| {
        print_diagnostics(&diagnostics, file_path, json);
        Reported
    })?;

    for token in &tokens {
        println!("{}", token.describe());
    }
    Ok(())
}
