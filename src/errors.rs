use std::path::PathBuf;
use thiserror::Error;

/// Problems reading the input tree. Nothing is written when one of these occurs.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Input file not found: {}", file.display())]
    NotFound { file: PathBuf },

    #[error("Could not read input file {}: {source}", file.display())]
    Read { file: PathBuf, source: std::io::Error },

    #[error("Could not decode JSON from {}: {source}", file.display())]
    Decode { file: PathBuf, source: serde_json::Error },

    #[error("Input JSON must be a list of objects. Found: {found}")]
    NotAList { found: &'static str },
}

/// Structural problems with a node list.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Node {node} references parent {parent} which is not part of the block.")]
    UnresolvedParent { node: String, parent: String },

    #[error("No leaf nodes found in iteration {iteration}. Cannot attach new tree.")]
    NoLeaves { iteration: usize },
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("Could not create output file {}: {source}", file.display())]
    Create { file: PathBuf, source: std::io::Error },

    #[error("Could not write to output file {}: {source}", file.display())]
    Write { file: PathBuf, source: std::io::Error },

    #[error("JSON encode error for {}: {source}", file.display())]
    Encode { file: PathBuf, source: serde_json::Error },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", file.display())]
    Read { file: PathBuf, source: std::io::Error },

    #[error("Invalid config file {}: {source}", file.display())]
    Parse { file: PathBuf, source: toml::de::Error },
}

/// Human readable name of a JSON value's type, used in error messages.
#[must_use]
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
