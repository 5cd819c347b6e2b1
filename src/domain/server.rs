//! Server metadata types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response of `banner`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    /// Free-form text configured by the server operator.
    pub banner: String,
}

/// Response of `features`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Server software and version.
    pub server_version: String,
    /// Highest protocol version supported.
    pub protocol_max: String,
    /// Lowest protocol version supported.
    pub protocol_min: String,
    /// Other advertised features (genesis hash, hosts, pruning, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Features {
    /// Whether `protocol` falls within the advertised range.
    ///
    /// Versions compare numerically component by component, so `1.10` is
    /// newer than `1.4`.
    #[must_use]
    pub fn supports_protocol(&self, protocol: &str) -> bool {
        let (Some(wanted), Some(min), Some(max)) = (
            parse_protocol(protocol),
            parse_protocol(&self.protocol_min),
            parse_protocol(&self.protocol_max),
        ) else {
            return false;
        };
        min <= wanted && wanted <= max
    }
}

fn parse_protocol(version: &str) -> Option<Vec<u32>> {
    version
        .split('.')
        .map(|part| part.trim().parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::JsonMother;

    #[test]
    fn test_features_parsing() {
        let features: Features = serde_json::from_value(JsonMother::features()).unwrap();
        assert_eq!(features.protocol_min, "1.4");
        assert!(features.extra.contains_key("genesis_hash"));
    }

    #[test]
    fn test_supports_protocol() {
        let features: Features = serde_json::from_value(JsonMother::features()).unwrap();
        assert!(features.supports_protocol("1.4"));
        assert!(features.supports_protocol("1.10"));
        assert!(!features.supports_protocol("1.3"));
        assert!(!features.supports_protocol("2.0"));
        assert!(!features.supports_protocol("one"));
    }
}
