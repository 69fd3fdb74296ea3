//! Routing preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid preference {value:?}: expected hops, time, distance or transfers (0-3)")]
pub struct InvalidPreference {
    value: String,
}

/// What a route should minimise.
///
/// Selects both the cost accumulated along a path and the matching
/// heuristic used by A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preference {
    /// Number of edges travelled.
    #[serde(rename = "hops")]
    ByHops,
    /// Sum of edge travel times.
    #[serde(rename = "time")]
    ByTime,
    /// Physical distance travelled; transfers within a site are free.
    #[serde(rename = "distance")]
    ByDistance,
    /// Number of line changes.
    #[serde(rename = "transfers")]
    ByTransfers,
}

impl Preference {
    pub const ALL: [Preference; 4] = [
        Preference::ByHops,
        Preference::ByTime,
        Preference::ByDistance,
        Preference::ByTransfers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preference::ByHops => "hops",
            Preference::ByTime => "time",
            Preference::ByDistance => "distance",
            Preference::ByTransfers => "transfers",
        }
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legacy numeric codes: 0 hops, 1 time, 2 distance, 3 transfers.
impl TryFrom<u8> for Preference {
    type Error = InvalidPreference;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Preference::ByHops),
            1 => Ok(Preference::ByTime),
            2 => Ok(Preference::ByDistance),
            3 => Ok(Preference::ByTransfers),
            other => Err(InvalidPreference {
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Preference {
    type Err = InvalidPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hops" => Ok(Preference::ByHops),
            "time" => Ok(Preference::ByTime),
            "distance" => Ok(Preference::ByDistance),
            "transfers" => Ok(Preference::ByTransfers),
            other => match other.parse::<u8>() {
                Ok(code) => Preference::try_from(code),
                Err(_) => Err(InvalidPreference {
                    value: s.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("hops".parse::<Preference>().unwrap(), Preference::ByHops);
        assert_eq!("Time".parse::<Preference>().unwrap(), Preference::ByTime);
        assert_eq!(
            " distance ".parse::<Preference>().unwrap(),
            Preference::ByDistance
        );
        assert_eq!(
            "transfers".parse::<Preference>().unwrap(),
            Preference::ByTransfers
        );
    }

    #[test]
    fn parse_legacy_codes() {
        for (code, expected) in Preference::ALL.iter().enumerate() {
            assert_eq!(Preference::try_from(code as u8).unwrap(), *expected);
            assert_eq!(code.to_string().parse::<Preference>().unwrap(), *expected);
        }
    }

    #[test]
    fn reject_unknown() {
        assert!("fastest".parse::<Preference>().is_err());
        assert!("4".parse::<Preference>().is_err());
        assert!(Preference::try_from(7).is_err());

        let err = "walk".parse::<Preference>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid preference \"walk\": expected hops, time, distance or transfers (0-3)"
        );
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for preference in Preference::ALL {
            assert_eq!(preference.to_string().parse::<Preference>().unwrap(), preference);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Preference::ByTransfers).unwrap();
        assert_eq!(json, "\"transfers\"");
        let parsed: Preference = serde_json::from_str("\"distance\"").unwrap();
        assert_eq!(parsed, Preference::ByDistance);
    }
}
