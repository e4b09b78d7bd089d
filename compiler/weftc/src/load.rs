//! Reading specification trees from disk.

use std::path::{Path, PathBuf};

use weft_ir::SpecInput;

/// Why a specification file could not be turned into a `SpecInput`.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },

    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a valid specification: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize the specification at `path`.
#[tracing::instrument(level = "debug")]
pub fn load_spec(path: &Path) -> Result<SpecInput, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_owned(),
        },
        _ => LoadError::Io {
            path: path.to_owned(),
            source,
        },
    })?;
    parse_spec(&text, path)
}

/// Deserialize specification text. `path` is only used for messages.
pub fn parse_spec(text: &str, path: &Path) -> Result<SpecInput, LoadError> {
    let spec: SpecInput = serde_json::from_str(text).map_err(|source| LoadError::Json {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(
        primitives = spec.primitives.len(),
        classes = spec.classes.len(),
        interfaces = spec.interfaces.len(),
        structs = spec.structs.len(),
        "loaded specification"
    );
    Ok(spec)
}
