use semver::Version;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScriptError};

/// A JSON manifest as read from disk
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    content: String,
    json: Value,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(path, content)
    }

    pub fn parse(path: &Path, content: String) -> Result<Self> {
        let json = serde_json::from_str(&content).map_err(|source| ScriptError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Manifest { path: path.to_path_buf(), content, json })
    }

    /// The `version` field, unless it is missing or falsy (`null`, `false`, `0`, `""`).
    pub fn version(&self) -> Option<&Value> {
        match self.json.get("version") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => None,
            Some(Value::String(s)) if s.is_empty() => None,
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
            Some(value) => Some(value),
        }
    }

    /// Serialized manifest with `version` replaced, keeping key order and the trailing newline.
    pub fn render_with_version(&self, version: &Version) -> Result<String> {
        let mut json = self.json.clone();
        if let Some(object) = json.as_object_mut() {
            object.insert("version".to_string(), Value::String(version.to_string()));
        }

        let mut rendered = serde_json::to_string_pretty(&json)?;
        if self.content.ends_with('\n') {
            rendered.push('\n');
        }
        Ok(rendered)
    }

    pub fn write_version(&self, version: &Version) -> Result<()> {
        let rendered = self.render_with_version(version)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}
