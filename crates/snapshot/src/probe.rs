use crate::env::{SystemArch, SystemOS};
use crate::error::SnapshotError;
use crate::facet::Facet;
use std::collections::BTreeMap;
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};
use sysinfo::System;

/// Source of the raw host and process facts that make up a snapshot.
///
/// Every method is queried exactly once per capture. A failing facet is
/// reported as [`SnapshotError::CaptureDegraded`] and replaced with its
/// sentinel by the snapshot, while a failing clock is reported as
/// [`SnapshotError::SystemClockUnavailable`] and aborts the capture.
pub trait HostProbe {
    fn hostname(&self) -> Result<String, SnapshotError>;

    fn os_name(&self) -> Result<String, SnapshotError>;

    fn os_version(&self) -> Result<String, SnapshotError>;

    fn architecture(&self) -> Result<String, SnapshotError>;

    fn working_directory(&self) -> Result<String, SnapshotError>;

    fn process_id(&self) -> Result<u32, SnapshotError>;

    fn timestamp_ns(&self) -> Result<u64, SnapshotError>;

    fn environment_variables(&self) -> Result<BTreeMap<String, String>, SnapshotError>;
}

/// Reads facts directly from the operating system of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeProbe;

impl HostProbe for NativeProbe {
    fn hostname(&self) -> Result<String, SnapshotError> {
        System::host_name()
            .ok_or_else(|| SnapshotError::degraded(Facet::Hostname, "host name not reported"))
    }

    fn os_name(&self) -> Result<String, SnapshotError> {
        SystemOS::try_from_env()
            .map(|os| os.to_string())
            .ok_or_else(|| {
                SnapshotError::degraded(
                    Facet::OsName,
                    format!("unrecognized operating system {}", env::consts::OS),
                )
            })
    }

    fn os_version(&self) -> Result<String, SnapshotError> {
        System::kernel_version()
            .ok_or_else(|| SnapshotError::degraded(Facet::OsVersion, "kernel release not reported"))
    }

    fn architecture(&self) -> Result<String, SnapshotError> {
        let machine = System::cpu_arch();

        if !machine.trim().is_empty() {
            return Ok(machine);
        }

        // Fall back to the architecture this binary was compiled for
        SystemArch::try_from_env()
            .map(|arch| arch.to_rust_arch())
            .ok_or_else(|| {
                SnapshotError::degraded(
                    Facet::Architecture,
                    format!("unrecognized architecture {}", env::consts::ARCH),
                )
            })
    }

    fn working_directory(&self) -> Result<String, SnapshotError> {
        let cwd = env::current_dir()
            .map_err(|error| SnapshotError::degraded(Facet::WorkingDirectory, error))?;

        Ok(cwd.to_string_lossy().into_owned())
    }

    fn process_id(&self) -> Result<u32, SnapshotError> {
        Ok(std::process::id())
    }

    fn timestamp_ns(&self) -> Result<u64, SnapshotError> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|error| {
            SnapshotError::SystemClockUnavailable {
                reason: error.to_string(),
            }
        })?;

        u64::try_from(elapsed.as_nanos()).map_err(|_| SnapshotError::SystemClockUnavailable {
            reason: "timestamp does not fit in 64 bits of nanoseconds".into(),
        })
    }

    fn environment_variables(&self) -> Result<BTreeMap<String, String>, SnapshotError> {
        let mut vars = BTreeMap::new();

        for (key, value) in env::vars_os() {
            if key.is_empty() {
                continue;
            }

            // Non-unicode entries are kept, just lossily decoded
            vars.insert(
                key.to_string_lossy().into_owned(),
                value.to_string_lossy().into_owned(),
            );
        }

        Ok(vars)
    }
}
