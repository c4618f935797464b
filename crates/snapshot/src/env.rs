use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env::consts;
use std::fmt;

/// Architecture of the machine the process is running on.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemArch {
    X86,
    #[serde(alias = "x86_64")]
    X64,
    Arm,
    #[serde(alias = "aarch64")]
    Arm64,
    #[serde(alias = "loongarch64")]
    LongArm64,
    M68k,
    Mips,
    Mips64,
    Powerpc,
    Powerpc64,
    Riscv64,
    S390x,
    Sparc64,
}

impl SystemArch {
    /// Return an instance derived from [`std::env::consts::ARCH`],
    /// or `None` if the architecture is not recognized.
    pub fn try_from_env() -> Option<SystemArch> {
        Self::parse(consts::ARCH)
    }

    /// Parse a machine identifier, accepting both the lowercase
    /// variant names and the Rust target names (`x86_64`, `aarch64`, ...).
    pub fn parse(value: impl AsRef<str>) -> Option<SystemArch> {
        serde_json::from_value(Value::String(value.as_ref().to_owned())).ok()
    }

    /// Convert to the machine hardware identifier, which matches
    /// [`std::env::consts::ARCH`].
    pub fn to_rust_arch(&self) -> String {
        match self {
            Self::X64 => "x86_64".into(),
            Self::Arm64 => "aarch64".into(),
            Self::LongArm64 => "loongarch64".into(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for SystemArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// Operating system family of the current environment.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemOS {
    Android,
    Dragonfly,
    FreeBSD,
    IOS,
    Linux,
    #[serde(alias = "mac", alias = "darwin")]
    MacOS,
    NetBSD,
    OpenBSD,
    Solaris,
    Windows,
}

impl SystemOS {
    /// Return an instance derived from [`std::env::consts::OS`],
    /// or `None` if the operating system is not recognized.
    pub fn try_from_env() -> Option<SystemOS> {
        Self::parse(consts::OS)
    }

    /// Parse a platform family name, case-sensitively in lowercase.
    pub fn parse(value: impl AsRef<str>) -> Option<SystemOS> {
        serde_json::from_value(Value::String(value.as_ref().to_owned())).ok()
    }
}

impl fmt::Display for SystemOS {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}
