use crate::error::SnapshotError;
use crate::facet::{Facet, UNKNOWN};
use crate::probe::{HostProbe, NativeProbe};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Flat, serializable form of a [`SystemSnapshot`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SnapshotRecord {
    pub hostname: String,
    pub os_name: String,
    pub os_version: String,
    pub architecture: String,
    pub working_directory: String,
    pub process_id: u32,
    pub timestamp_ns: u64,
    pub environment_variables: BTreeMap<String, String>,
}

impl SnapshotRecord {
    /// Convert to a JSON object value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Convert to a pretty printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// An immutable point-in-time capture of host and process facts.
///
/// All facts are read once while capturing. Accessors only ever return
/// the captured values, so later changes to the process (its environment,
/// its working directory) are never observed through a snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SystemSnapshot {
    hostname: String,
    os_name: String,
    os_version: String,
    architecture: String,
    working_directory: String,
    process_id: u32,
    timestamp_ns: u64,
    environment_variables: BTreeMap<String, String>,
    degraded: Vec<Facet>,
}

impl SystemSnapshot {
    /// Capture a snapshot of the current process and host.
    pub fn capture() -> Result<Self, SnapshotError> {
        Self::capture_with(&NativeProbe)
    }

    /// Capture a snapshot using the provided probe. Facets the probe fails
    /// to read are replaced with a sentinel, and only an unreadable clock
    /// fails the capture.
    #[instrument(name = "capture_snapshot", skip_all)]
    pub fn capture_with(probe: &impl HostProbe) -> Result<Self, SnapshotError> {
        let timestamp_ns = probe.timestamp_ns()?;
        let mut degraded = vec![];

        let hostname = read_string(Facet::Hostname, probe.hostname(), &mut degraded);
        let os_name = read_string(Facet::OsName, probe.os_name(), &mut degraded);
        let os_version = read_string(Facet::OsVersion, probe.os_version(), &mut degraded);
        let architecture = read_string(Facet::Architecture, probe.architecture(), &mut degraded);
        let working_directory = read_string(
            Facet::WorkingDirectory,
            probe.working_directory(),
            &mut degraded,
        );

        let process_id = probe.process_id().unwrap_or_else(|error| {
            absorb(Facet::ProcessId, &error, &mut degraded);
            0
        });

        let environment_variables = probe.environment_variables().unwrap_or_else(|error| {
            absorb(Facet::EnvironmentVariables, &error, &mut degraded);
            BTreeMap::new()
        });

        debug!(
            hostname = &hostname,
            pid = process_id,
            timestamp_ns,
            vars = environment_variables.len(),
            degraded = ?degraded,
            "Captured system snapshot"
        );

        Ok(Self {
            hostname,
            os_name,
            os_version,
            architecture,
            working_directory,
            process_id,
            timestamp_ns,
            environment_variables,
            degraded,
        })
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn os_name(&self) -> &str {
        &self.os_name
    }

    pub fn os_version(&self) -> &str {
        &self.os_version
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn process_id(&self) -> u32 {
        self.process_id
    }

    /// Nanoseconds since the Unix epoch at the moment of capture.
    pub fn timestamp_ns(&self) -> u64 {
        self.timestamp_ns
    }

    /// Return the captured value of an environment variable. The live
    /// process environment is never consulted.
    pub fn get_variable(&self, name: &str) -> Option<&str> {
        self.environment_variables.get(name).map(String::as_str)
    }

    /// Return all captured environment variables, sorted by name.
    pub fn get_all_variables(&self) -> &BTreeMap<String, String> {
        &self.environment_variables
    }

    pub fn variable_count(&self) -> usize {
        self.environment_variables.len()
    }

    /// Facets that could not be read and were replaced with a sentinel.
    pub fn degraded_facets(&self) -> &[Facet] {
        &self.degraded
    }

    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    /// Combine every fact, including a copy of the variables,
    /// into a single serializable record.
    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            hostname: self.hostname.clone(),
            os_name: self.os_name.clone(),
            os_version: self.os_version.clone(),
            architecture: self.architecture.clone(),
            working_directory: self.working_directory.clone(),
            process_id: self.process_id,
            timestamp_ns: self.timestamp_ns,
            environment_variables: self.environment_variables.clone(),
        }
    }
}

impl From<&SystemSnapshot> for SnapshotRecord {
    fn from(snapshot: &SystemSnapshot) -> Self {
        snapshot.to_record()
    }
}

fn absorb(facet: Facet, error: &SnapshotError, degraded: &mut Vec<Facet>) {
    warn!(facet = facet.as_str(), "{error}");

    degraded.push(facet);
}

fn read_string(
    facet: Facet,
    result: Result<String, SnapshotError>,
    degraded: &mut Vec<Facet>,
) -> String {
    match result {
        Ok(value) if !value.trim().is_empty() => value,
        Ok(_) => {
            absorb(
                facet,
                &SnapshotError::degraded(facet, "empty value reported"),
                degraded,
            );

            UNKNOWN.to_owned()
        }
        Err(error) => {
            absorb(facet, &error, degraded);

            UNKNOWN.to_owned()
        }
    }
}
