//! Core logic behind the `property-path` binary.
//!
//! Reads a JSON document, resolves a property path against it and renders
//! the result back as JSON.

use serde_json::Value;
use thiserror::Error;

use crate::error::{ErrorKind, PathError};
use crate::eval::{Comparison, ResolveOptions, Resolver};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Path(#[from] PathError),
    #[error("{0}")]
    Usage(String),
}

impl CliError {
    /// User-facing message. Paths that do not resolve and paths that are
    /// invalid for the document are reported differently.
    pub fn message(&self) -> String {
        match self {
            CliError::Path(err) => match err.kind() {
                ErrorKind::PropertyNotFound | ErrorKind::KeyNotFound => {
                    format!("Path does not resolve: {err}")
                }
                ErrorKind::InvalidPath => format!("Path is invalid for this document: {err}"),
                _ => err.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Command-line arguments of the `property-path` binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub path: String,
    pub options: ResolveOptions,
    pub pretty: bool,
}

impl Args {
    /// Parse arguments, without the program name.
    pub fn parse<I, S>(args: I) -> Result<Args, CliError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = None;
        let mut options = ResolveOptions::default();
        let mut pretty = false;

        for arg in args {
            let arg: String = arg.into();
            if arg == "--typed" {
                options.comparison = Comparison::Typed;
            } else if arg == "--pretty" {
                pretty = true;
            } else if arg.starts_with("--") {
                return Err(CliError::Usage(format!("Unknown flag: {arg}")));
            } else if path.is_none() {
                path = Some(arg);
            } else {
                return Err(CliError::Usage("Only one path may be given.".into()));
            }
        }

        let path =
            path.ok_or_else(|| CliError::Usage("First argument must be a property path.".into()))?;
        Ok(Args {
            path,
            options,
            pretty,
        })
    }
}

fn lookup_value(json: &str, path: &str, options: ResolveOptions) -> Result<Value, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    let resolved = Resolver::new(options).resolve(&doc, path)?;
    Ok(resolved.map_or(Value::Null, |r| r.to_json()))
}

/// Resolve `path` in the JSON document `json` and return the result as JSON
/// text. An absent result renders as `null`.
pub fn lookup_path(json: &str, path: &str, options: ResolveOptions) -> Result<String, CliError> {
    let value = lookup_value(json, path, options)?;
    Ok(serde_json::to_string(&value)?)
}

/// Run a parsed command line against a JSON document.
pub fn run(args: &Args, json: &str) -> Result<String, CliError> {
    let value = lookup_value(json, &args.path, args.options)?;
    let out = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(out)
}
