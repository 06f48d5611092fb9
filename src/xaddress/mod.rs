pub mod payload;

use std::fmt;
use std::str::FromStr;

use crate::chain::NetworkKind;
use crate::codec::account;
use crate::codec::base58;
use crate::errors::*;

pub use self::payload::{DecodedPayload, Payload, PAYLOAD_LEN};

/// A classic address together with its destination tag and network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XAddress {
    pub classic_address: String,
    pub tag: Option<u32>,
    pub network: NetworkKind,
}

impl XAddress {
    pub fn is_test(&self) -> bool {
        self.network.is_test()
    }

    pub fn encode(&self) -> Result<String> {
        encode_x_address(&self.classic_address, self.tag, self.network.is_test())
    }
}

impl fmt::Display for XAddress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.encode().map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl FromStr for XAddress {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        decode_x_address(text)
    }
}

/// Builds an X-address from a classic address, an optional tag and the
/// network flag.
pub fn encode_x_address(classic: &str, tag: Option<u32>, is_test: bool) -> Result<String> {
    let account = account::decode_classic_address(classic)?;
    let network = NetworkKind::from(is_test);
    let payload = Payload::encode(account.as_bytes(), tag, network)?;
    debug!(
        "encoded {} (tag={:?}, network={}) as {:?}",
        classic, tag, network, payload
    );
    Ok(base58::check_encode(payload.as_ref()))
}

/// Recovers the raw payload of an X-address without interpreting it.
pub fn decode_raw(xaddr: &str) -> Result<Vec<u8>> {
    base58::check_decode(xaddr)
}

pub fn decode_payload(xaddr: &str) -> Result<DecodedPayload> {
    let raw = decode_raw(xaddr)?;
    payload::decode(&raw)
}

/// Splits an X-address back into classic address, optional tag and network.
pub fn decode_x_address(xaddr: &str) -> Result<XAddress> {
    let decoded = decode_payload(xaddr)?;
    let classic_address = account::encode_account_id(&decoded.account.as_bytes()[..])
        .chain_err(|| ErrorKind::AccountIdentifierEncodingFailed(decoded.account.to_hex()))?;
    trace!("decoded {} into {:?}", xaddr, decoded);
    Ok(XAddress {
        classic_address,
        tag: decoded.tag,
        network: decoded.network,
    })
}

pub fn is_valid_x_address(xaddr: &str) -> bool {
    decode_payload(xaddr).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = "rng5ZxeWue9pggAPuGHZKXkYQQBmspKTdZ";
    const XADDR: &str = "X75FD6PAsxLqhNCnHEUpYxWmfBE84hGXM4CriEbwFxxhrww";

    #[test]
    fn encode_reference_vector() {
        assert_eq!(encode_x_address(CLASSIC, Some(2282235929), false).unwrap(), XADDR);
    }

    #[test]
    fn decode_reference_vector() {
        let decoded = decode_x_address(XADDR).unwrap();
        assert_eq!(decoded.classic_address, CLASSIC);
        assert_eq!(decoded.tag, Some(2282235929));
        assert_eq!(decoded.network, NetworkKind::Main);
        assert!(!decoded.is_test());
    }

    #[test]
    fn parse_and_re_encode() {
        let parsed: XAddress = XADDR.parse().unwrap();
        assert_eq!(parsed.encode().unwrap(), XADDR);
    }

    #[test]
    fn display_renders_x_address_text() {
        let parsed: XAddress = XADDR.parse().unwrap();
        assert_eq!(parsed.to_string(), XADDR);
        assert_eq!(format!("{}", parsed), XADDR);

        let untagged = XAddress {
            classic_address: CLASSIC.to_string(),
            tag: None,
            network: NetworkKind::Test,
        };
        let rendered = untagged.to_string();
        assert!(rendered.starts_with('T'));
        assert_eq!(rendered.parse::<XAddress>().unwrap(), untagged);
    }

    #[test]
    fn leading_character_follows_network() {
        let main = encode_x_address(CLASSIC, None, false).unwrap();
        let test = encode_x_address(CLASSIC, Some(12345), true).unwrap();
        assert!(main.starts_with('X'));
        assert!(test.starts_with('T'));
    }

    #[test]
    fn raw_payload_matches_layout() {
        let account = account::decode_classic_address(CLASSIC).unwrap();
        let expected = Payload::encode(account.as_bytes(), Some(2282235929), NetworkKind::Main)
            .unwrap();
        let raw = decode_raw(XADDR).unwrap();
        assert_eq!(raw.len(), PAYLOAD_LEN);
        assert_eq!(&raw[..], &expected.as_bytes()[..]);
        assert_eq!(decode_payload(XADDR).unwrap().account, account);
    }

    #[test]
    fn classic_address_is_not_an_x_address() {
        // checksums fine, but carries 21 bytes
        let err = decode_x_address(CLASSIC).unwrap_err();
        match err.kind() {
            ErrorKind::InvalidLength(21) => (),
            other => panic!("unexpected error: {}", other),
        }
        assert!(!is_valid_x_address(CLASSIC));
        assert!(is_valid_x_address(XADDR));
    }

    #[test]
    fn bad_classic_address_on_encode() {
        assert!(encode_x_address("rng5ZxeWue9pggAPuGHZKXkYQQBmspKTdz", None, false).is_err());
        assert!(encode_x_address("", None, false).is_err());
    }
}
