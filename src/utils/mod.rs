// File helpers around the tree algorithms
pub mod json_file {
    use serde_json::Value;
    use std::fs::File;
    use std::io::{BufReader, BufWriter, ErrorKind, Write};
    use std::path::Path;

    use crate::errors::{json_type_name, LoadError, SaveError};

    /// Read a JSON array of nodes from `path`.
    ///
    /// # Errors
    /// A distinct [`LoadError`] for a missing file, an unreadable file,
    /// malformed JSON and a top-level value that is not an array.
    pub fn load_nodes(path: &Path) -> Result<Vec<Value>, LoadError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                LoadError::NotFound { file: path.to_path_buf() }
            } else {
                LoadError::Read { file: path.to_path_buf(), source: e }
            }
        })?;
        let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                LoadError::Read { file: path.to_path_buf(), source: e.into() }
            } else {
                LoadError::Decode { file: path.to_path_buf(), source: e }
            }
        })?;
        match value {
            Value::Array(nodes) => Ok(nodes),
            other => Err(LoadError::NotAList { found: json_type_name(&other) }),
        }
    }

    /// Write `nodes` to `path` as one compact JSON array.
    ///
    /// # Errors
    /// [`SaveError`] when the file cannot be created or written.
    pub fn save_nodes(path: &Path, nodes: &[Value]) -> Result<(), SaveError> {
        let file = File::create(path)
            .map_err(|e| SaveError::Create { file: path.to_path_buf(), source: e })?;
        let mut out = BufWriter::new(file);
        serde_json::to_writer(&mut out, nodes).map_err(|e| {
            if e.is_io() {
                SaveError::Write { file: path.to_path_buf(), source: e.into() }
            } else {
                SaveError::Encode { file: path.to_path_buf(), source: e }
            }
        })?;
        out.flush().map_err(|e| SaveError::Write { file: path.to_path_buf(), source: e })
    }
}

pub mod config {
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    use crate::errors::ConfigError;
    use crate::tree::remap::UnresolvedParentPolicy;

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct GrowConfig {
        pub iterations: Option<i64>,
        pub seed: Option<u64>,
        pub unresolved_parent: Option<UnresolvedParentPolicy>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    pub struct Config {
        pub grow: Option<GrowConfig>,
    }

    /// Load a TOML config file.
    ///
    /// # Errors
    /// [`ConfigError`] when the file is unreadable or not valid config.
    pub fn load_config_at(path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read { file: path.to_path_buf(), source: e })?;
        toml::from_str::<Config>(&data)
            .map_err(|e| ConfigError::Parse { file: path.to_path_buf(), source: e })
    }
}
