//! Broker API protocol revisions.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error as ThisError;

/// A revision of the broker API protocol.
///
/// Opaque label plus a total order for "is this operation supported at
/// this version" decisions. Only the known revisions can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiVersion {
    label: &'static str,
    order: u8,
}

impl ApiVersion {
    pub const V2_11: ApiVersion = ApiVersion {
        label: "2.11",
        order: 0,
    };
    pub const V2_12: ApiVersion = ApiVersion {
        label: "2.12",
        order: 1,
    };
    pub const V2_13: ApiVersion = ApiVersion {
        label: "2.13",
        order: 2,
    };
    pub const V2_14: ApiVersion = ApiVersion {
        label: "2.14",
        order: 3,
    };

    /// The most recent revision this client understands.
    pub const LATEST: ApiVersion = Self::V2_14;

    /// Whether this revision is `other` or newer.
    pub const fn at_least(self, other: ApiVersion) -> bool {
        self.order >= other.order
    }

    /// The wire label, e.g. `"2.14"`. Also the `X-Broker-API-Version` value.
    pub const fn label(self) -> &'static str {
        self.label
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("unknown broker API version: {0}")]
pub struct UnknownApiVersionError(pub String);

impl FromStr for ApiVersion {
    type Err = UnknownApiVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2.11" => Ok(Self::V2_11),
            "2.12" => Ok(Self::V2_12),
            "2.13" => Ok(Self::V2_13),
            "2.14" => Ok(Self::V2_14),
            other => Err(UnknownApiVersionError(other.to_string())),
        }
    }
}

impl Serialize for ApiVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label)
    }
}

impl<'de> Deserialize<'de> for ApiVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(D::Error::custom)
    }
}
