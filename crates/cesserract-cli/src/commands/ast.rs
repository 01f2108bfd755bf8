//! AST dump command - output the AST as JSON or as an indented tree

use super::{print_diagnostics, read_source, Reported};
use anyhow::Result;
use cesserract_runtime::{Cesserract, VersionedProgram};

/// Dump the AST of a source file to stdout
pub fn run(file_path: &str, tree: bool) -> Result<()> {
    let source = read_source(file_path)?;

    let program = Cesserract::new().parse(&source).map_err(|diagnostics| {
        print_diagnostics(&diagnostics, file_path, true);
        Reported
    })?;

    if tree {
        print!("{}", program.to_tree_string());
    } else {
        println!("{}", VersionedProgram::new(program).to_json()?);
    }
    Ok(())
}
