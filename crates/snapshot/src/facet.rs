use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel substituted for any string facet that could not be read.
pub const UNKNOWN: &str = "unknown";

/// A single named attribute of a snapshot.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
    Hostname,
    OsName,
    OsVersion,
    Architecture,
    WorkingDirectory,
    ProcessId,
    EnvironmentVariables,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hostname => "hostname",
            Self::OsName => "os_name",
            Self::OsVersion => "os_version",
            Self::Architecture => "architecture",
            Self::WorkingDirectory => "working_directory",
            Self::ProcessId => "process_id",
            Self::EnvironmentVariables => "environment_variables",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
