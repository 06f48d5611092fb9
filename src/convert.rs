//! Text-in, text-out conversions with the tag carried as decimal text.

use crate::errors::*;
use crate::xaddress;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedAddressResponse {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedAddressResponse {
    /// classic r-address
    pub account: String,
    /// destination tag, empty if none
    pub tag: String,
    pub test: bool,
}

/// Parses a decimal destination tag. The empty string means no tag.
pub fn parse_tag(tag: &str) -> Result<Option<u32>> {
    if tag.is_empty() {
        return Ok(None);
    }
    if !tag.bytes().all(|b| b.is_ascii_digit()) {
        bail!(ErrorKind::InvalidTag(tag.to_string()));
    }
    tag.parse::<u32>()
        .map(Some)
        .chain_err(|| ErrorKind::InvalidTag(tag.to_string()))
}

pub fn format_tag(tag: Option<u32>) -> String {
    tag.map(|t| t.to_string()).unwrap_or_default()
}

pub fn encode_address_to_x_address(
    address: &str,
    tag: &str,
    is_testnet: bool,
) -> Result<EncodedAddressResponse> {
    let tag = parse_tag(tag)?;
    let address = xaddress::encode_x_address(address, tag, is_testnet)?;
    Ok(EncodedAddressResponse { address })
}

pub fn decode_x_address_to_address(x_address: &str) -> Result<DecodedAddressResponse> {
    let decoded = xaddress::decode_x_address(x_address)?;
    Ok(DecodedAddressResponse {
        test: decoded.is_test(),
        tag: format_tag(decoded.tag),
        account: decoded.classic_address,
    })
}
