//! Names for the three generators, for front ends that pick one at runtime.

use std::str::FromStr;

use argsgen_flags::{FlagGroup, FlagSet};

use crate::{fast, fingerprint, ungoogled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Profile {
    /// Fastest build; drops most optional subsystems.
    Fast,
    /// Keeps every subsystem fingerprinting protection depends on.
    Fingerprint,
    /// Privacy groups plus build-time cuts, in seven named groups.
    UngoogledOptimized,
}

impl Profile {
    pub const ALL: [Profile; 3] = [
        Profile::Fast,
        Profile::Fingerprint,
        Profile::UngoogledOptimized,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Profile::Fast => "fast",
            Profile::Fingerprint => "fingerprint",
            Profile::UngoogledOptimized => "ungoogled-optimized",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Profile::Fast => fast::TITLE,
            Profile::Fingerprint => fingerprint::TITLE,
            Profile::UngoogledOptimized => ungoogled::TITLE,
        }
    }

    pub fn separator_width(self) -> usize {
        match self {
            Profile::Fast => fast::SEPARATOR_WIDTH,
            Profile::Fingerprint => fingerprint::SEPARATOR_WIDTH,
            Profile::UngoogledOptimized => ungoogled::SEPARATOR_WIDTH,
        }
    }

    /// Lines printed after the closing separator.
    pub fn summary(self) -> &'static [&'static str] {
        match self {
            Profile::Fast => fast::SUMMARY,
            Profile::Fingerprint => fingerprint::SUMMARY,
            Profile::UngoogledOptimized => ungoogled::SUMMARY,
        }
    }

    pub fn groups(self) -> &'static [FlagGroup] {
        match self {
            Profile::Fast => fast::GROUPS,
            Profile::Fingerprint => fingerprint::GROUPS,
            Profile::UngoogledOptimized => ungoogled::GROUPS,
        }
    }

    pub fn flag_set(self) -> FlagSet {
        FlagSet::from_groups(self.groups())
    }

    pub fn generate(self) -> String {
        match self {
            Profile::Fast => fast::generate(),
            Profile::Fingerprint => fingerprint::generate(),
            Profile::UngoogledOptimized => ungoogled::generate(),
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProfile(pub String);

impl std::fmt::Display for UnknownProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown profile '{}' (expected fast, fingerprint or ungoogled-optimized)",
            self.0
        )
    }
}

impl std::error::Error for UnknownProfile {}

impl FromStr for Profile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| UnknownProfile(s.to_string()))
    }
}
