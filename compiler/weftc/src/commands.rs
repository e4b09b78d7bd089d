//! The `check` and `dump` commands.
//!
//! Both load and bind the specification named by an [`Invocation`]. They
//! return the text to print rather than printing it.

use std::path::PathBuf;

use weft_types::{bind_spec_with_options, BindError, BoundSpec};

use crate::{load_spec, DumpView, Invocation, LoadError};

/// A command failed after its arguments were accepted.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{}: {source}", path.display())]
    Bind {
        path: PathBuf,
        #[source]
        source: BindError,
    },
}

fn load_and_bind(invocation: &Invocation) -> Result<BoundSpec, CommandError> {
    let spec = load_spec(&invocation.path)?;
    bind_spec_with_options(&spec, &invocation.options).map_err(|source| CommandError::Bind {
        path: invocation.path.clone(),
        source,
    })
}

/// Bind the specification and summarize it in one line.
pub fn check(invocation: &Invocation) -> Result<String, CommandError> {
    let bound = load_and_bind(invocation)?;
    Ok(format!(
        "OK: {} ({})\n",
        invocation.path.display(),
        bound.stats()
    ))
}

/// Bind the specification and render every entity.
pub fn dump(invocation: &Invocation) -> Result<String, CommandError> {
    let bound = load_and_bind(invocation)?;
    Ok(DumpView(&bound).to_string())
}
