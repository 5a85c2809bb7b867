use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::TopologyError;

/// Which member roles a read may be routed to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReadPrefMode {
    Primary,
    PrimaryPreferred,
    Secondary,
    SecondaryPreferred,
    Nearest,
}

impl fmt::Display for ReadPrefMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReadPrefMode::Primary => "primary",
            ReadPrefMode::PrimaryPreferred => "primaryPreferred",
            ReadPrefMode::Secondary => "secondary",
            ReadPrefMode::SecondaryPreferred => "secondaryPreferred",
            ReadPrefMode::Nearest => "nearest",
        };
        f.write_str(name)
    }
}

impl FromStr for ReadPrefMode {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(ReadPrefMode::Primary),
            "primarypreferred" => Ok(ReadPrefMode::PrimaryPreferred),
            "secondary" => Ok(ReadPrefMode::Secondary),
            "secondarypreferred" => Ok(ReadPrefMode::SecondaryPreferred),
            "nearest" => Ok(ReadPrefMode::Nearest),
            _ => Err(TopologyError::UnknownReadPrefMode(s.to_string())),
        }
    }
}

/// A read preference as handed in by the operation layer.
///
/// Only the mode and the validity verdict matter here; tag sets, staleness bounds
/// and the rules tying them together belong to whoever implements this trait.
pub trait ReadPreference {
    /// The requested mode, or `None` when it is unspecified or unrecognized.
    fn mode(&self) -> Option<ReadPrefMode>;

    fn is_valid(&self) -> bool {
        self.mode().is_some()
    }
}

impl ReadPreference for ReadPrefMode {
    fn mode(&self) -> Option<ReadPrefMode> {
        Some(*self)
    }
}

impl ReadPreference for Option<ReadPrefMode> {
    fn mode(&self) -> Option<ReadPrefMode> {
        *self
    }
}

#[cfg(test)]
mod tests {
    use crate::{ReadPrefMode, ReadPreference, TopologyError};

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("Primary".parse::<ReadPrefMode>().unwrap(), ReadPrefMode::Primary);
        assert_eq!(
            "SECONDARYPREFERRED".parse::<ReadPrefMode>().unwrap(),
            ReadPrefMode::SecondaryPreferred
        );
        assert_eq!(
            "primaryPreferred".parse::<ReadPrefMode>().unwrap(),
            ReadPrefMode::PrimaryPreferred
        );
    }

    #[test]
    fn from_str_rejects_unknown_modes() {
        let result = "fastest".parse::<ReadPrefMode>();

        assert!(matches!(result, Err(TopologyError::UnknownReadPrefMode(m)) if m == "fastest"));
    }

    #[test]
    fn display_matches_the_camel_case_wire_names() {
        for mode in [
            ReadPrefMode::Primary,
            ReadPrefMode::PrimaryPreferred,
            ReadPrefMode::Secondary,
            ReadPrefMode::SecondaryPreferred,
            ReadPrefMode::Nearest,
        ] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
            assert_eq!(mode.to_string().parse::<ReadPrefMode>().unwrap(), mode);
        }
    }

    #[test]
    fn only_a_known_mode_is_valid_by_default() {
        assert!(ReadPrefMode::Nearest.is_valid());
        assert!(Some(ReadPrefMode::Secondary).is_valid());
        assert!(!None::<ReadPrefMode>.is_valid());
    }
}
