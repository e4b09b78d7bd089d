//! Argument parsing for `check` and `dump`.

use std::path::PathBuf;

use weft_types::BindOptions;

/// A parsed `weft <command>` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
    pub options: BindOptions,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing specification path")]
    MissingPath,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("option '{0}' needs a non-empty value")]
    EmptyValue(String),
}

/// Parse the arguments following the command name.
///
/// Accepts exactly one path plus `--shared-template=<name>` and
/// `--void=<name>` in any order.
pub fn parse_args(args: &[String]) -> Result<Invocation, ArgsError> {
    let mut path = None;
    let mut options = BindOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--shared-template=") {
            options.shared_template = non_empty("--shared-template", value)?;
        } else if let Some(value) = arg.strip_prefix("--void=") {
            options.void_type = non_empty("--void", value)?;
        } else if arg.starts_with('-') {
            return Err(ArgsError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(ArgsError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(ArgsError::MissingPath)?;
    Ok(Invocation { path, options })
}

fn non_empty(option: &str, value: &str) -> Result<String, ArgsError> {
    if value.is_empty() {
        return Err(ArgsError::EmptyValue(option.to_owned()));
    }
    Ok(value.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn path_only_uses_default_options() {
        let inv = parse_args(&args(&["spec.json"])).unwrap();
        assert_eq!(inv.path, PathBuf::from("spec.json"));
        assert_eq!(inv.options, BindOptions::default());
    }

    #[test]
    fn options_may_precede_the_path() {
        let inv = parse_args(&args(&["--void=unit", "spec.json", "--shared-template=Rc"])).unwrap();
        assert_eq!(inv.options.void_type, "unit");
        assert_eq!(inv.options.shared_template, "Rc");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(parse_args(&[]), Err(ArgsError::MissingPath));
        assert_eq!(
            parse_args(&args(&["a.json", "b.json"])),
            Err(ArgsError::UnexpectedArgument("b.json".to_owned()))
        );
        assert_eq!(
            parse_args(&args(&["--verbose", "a.json"])),
            Err(ArgsError::UnknownOption("--verbose".to_owned()))
        );
        assert_eq!(
            parse_args(&args(&["a.json", "--void="])),
            Err(ArgsError::EmptyValue("--void".to_owned()))
        );
    }
}
