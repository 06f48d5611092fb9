use std::fmt;
use std::str::FromStr;

use crate::errors::*;

/// Two-byte X-address marker for the production network.
pub const MAIN_XADDRESS_PREFIX: [u8; 2] = [0x05, 0x44];
/// Two-byte X-address marker for the test network.
pub const TEST_XADDRESS_PREFIX: [u8; 2] = [0x04, 0x93];

#[derive(Debug, Copy, Clone, PartialEq, Hash, Serialize, Deserialize, Ord, PartialOrd, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Main,
    Test,
}

impl NetworkKind {
    pub fn xaddress_prefix(self) -> [u8; 2] {
        match self {
            NetworkKind::Main => MAIN_XADDRESS_PREFIX,
            NetworkKind::Test => TEST_XADDRESS_PREFIX,
        }
    }

    /// Classifies a payload by its leading marker. Anything but an exact
    /// match of one of the two known prefixes is rejected.
    pub fn from_xaddress_prefix(prefix: &[u8]) -> Option<NetworkKind> {
        if prefix == MAIN_XADDRESS_PREFIX {
            Some(NetworkKind::Main)
        } else if prefix == TEST_XADDRESS_PREFIX {
            Some(NetworkKind::Test)
        } else {
            None
        }
    }

    pub fn is_test(self) -> bool {
        match self {
            NetworkKind::Test => true,
            NetworkKind::Main => false,
        }
    }

    pub fn names() -> Vec<String> {
        vec!["main".to_string(), "test".to_string()]
    }
}

impl Default for NetworkKind {
    fn default() -> Self {
        NetworkKind::Main
    }
}

impl From<bool> for NetworkKind {
    fn from(is_test: bool) -> Self {
        if is_test {
            NetworkKind::Test
        } else {
            NetworkKind::Main
        }
    }
}

impl FromStr for NetworkKind {
    type Err = Error;

    fn from_str(network_name: &str) -> Result<Self> {
        match network_name {
            "main" | "mainnet" => Ok(NetworkKind::Main),
            "test" | "testnet" => Ok(NetworkKind::Test),
            _ => bail!(
                "unsupported network: {:?} (expected one of {})",
                network_name,
                NetworkKind::names().join(", ")
            ),
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NetworkKind::Main => f.write_str("main"),
            NetworkKind::Test => f.write_str("test"),
        }
    }
}
