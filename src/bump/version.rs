use semver::{BuildMetadata, Prerelease, Version};
use serde_json::Value;
use std::fmt;
use std::path::Path;

use crate::error::{Result, ScriptError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Patch,
    Minor,
    Major,
}

impl Bump {
    pub const ALL: [Bump; 3] = [Bump::Patch, Bump::Minor, Bump::Major];
}

impl fmt::Display for Bump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bump::Patch => "Patch",
            Bump::Minor => "Minor",
            Bump::Major => "Major",
        };
        f.write_str(label)
    }
}

/// Validate the raw `version` value of a manifest.
pub fn parse_version(path: &Path, raw: &Value) -> Result<Version> {
    let invalid = || ScriptError::InvalidVersion {
        path: path.to_path_buf(),
        version: match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    };

    let text = raw.as_str().ok_or_else(invalid)?;
    let text = text.trim();
    let text = text.strip_prefix(|c: char| c == 'v' || c == '=').unwrap_or(text).trim_start();
    Version::parse(text).map_err(|_| invalid())
}

/// Increment following semver precedence: a pre-release of the target version is released
/// instead of skipping past it.
pub fn increment(current: &Version, bump: Bump) -> Version {
    let mut next = current.clone();
    let pre_release = !current.pre.is_empty();
    next.pre = Prerelease::EMPTY;
    next.build = BuildMetadata::EMPTY;

    match bump {
        Bump::Patch => {
            if !pre_release {
                next.patch += 1;
            }
        }
        Bump::Minor => {
            if !(pre_release && current.patch == 0) {
                next.minor += 1;
            }
            next.patch = 0;
        }
        Bump::Major => {
            if !(pre_release && current.minor == 0 && current.patch == 0) {
                next.major += 1;
            }
            next.minor = 0;
            next.patch = 0;
        }
    }

    next
}

/// Patch, minor and major candidates for `current`, in menu order.
pub fn candidates(current: &Version) -> Vec<(Bump, Version)> {
    Bump::ALL.iter().map(|&bump| (bump, increment(current, bump))).collect()
}
