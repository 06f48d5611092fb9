//! Binary layout of an X-address before text rendering.
//!
//! ```text
//! offset  len  field
//!      0    2  network prefix
//!      2   20  account identifier
//!     22    1  tag flag (0 = none, 1 = 32-bit tag)
//!     23    4  tag, little-endian
//!     27    4  reserved, zero
//! ```
//!
//! Other implementations consume this layout bit-exact.

use std::convert::TryInto;
use std::fmt;

use crate::chain::NetworkKind;
use crate::codec::account::{AccountId, ACCOUNT_ID_LEN};
use crate::errors::*;

pub const PREFIX_LEN: usize = 2;
pub const ACCOUNT_OFFSET: usize = PREFIX_LEN;
pub const FLAG_OFFSET: usize = ACCOUNT_OFFSET + ACCOUNT_ID_LEN;
pub const TAG_OFFSET: usize = FLAG_OFFSET + 1;
pub const TAG_LEN: usize = 4;
pub const RESERVED_OFFSET: usize = TAG_OFFSET + TAG_LEN;
pub const RESERVED_LEN: usize = 4;

/// Fixed protocol constant, not derived from the fields above.
pub const PAYLOAD_LEN: usize = 31;

pub const FLAG_NO_TAG: u8 = 0;
pub const FLAG_TAG_32: u8 = 1;

/// The raw 31-byte payload.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Payload([u8; PAYLOAD_LEN]);

/// Fields recovered from a validated payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DecodedPayload {
    pub account: AccountId,
    pub tag: Option<u32>,
    pub network: NetworkKind,
}

impl Payload {
    /// Packs `prefix || account || flag || tag || reserved`.
    pub fn encode(account: &[u8], tag: Option<u32>, network: NetworkKind) -> Result<Payload> {
        if account.len() != ACCOUNT_ID_LEN {
            bail!(ErrorKind::InvalidAccountIdentifier(account.len()));
        }

        let mut buf = [0u8; PAYLOAD_LEN];
        buf[..PREFIX_LEN].copy_from_slice(&network.xaddress_prefix());
        buf[ACCOUNT_OFFSET..FLAG_OFFSET].copy_from_slice(account);
        match tag {
            Some(tag) => {
                buf[FLAG_OFFSET] = FLAG_TAG_32;
                buf[TAG_OFFSET..RESERVED_OFFSET].copy_from_slice(&tag.to_le_bytes());
            }
            None => buf[FLAG_OFFSET] = FLAG_NO_TAG,
        }
        // reserved bytes stay zero

        Ok(Payload(buf))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Payload> {
        let buf: [u8; PAYLOAD_LEN] = bytes
            .try_into()
            .map_err(|_| Error::from(ErrorKind::InvalidLength(bytes.len())))?;
        Ok(Payload(buf))
    }

    pub fn as_bytes(&self) -> &[u8; PAYLOAD_LEN] {
        &self.0
    }

    pub fn decode(&self) -> Result<DecodedPayload> {
        decode(&self.0)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Payload({})", hex::encode(self.0))
    }
}

/// Validates and unpacks a payload.
///
/// Checks run in a fixed order: length, network prefix, flag, then the
/// zeroed tail when no tag is present.
pub fn decode(payload: &[u8]) -> Result<DecodedPayload> {
    if payload.len() != PAYLOAD_LEN {
        bail!(ErrorKind::InvalidLength(payload.len()));
    }

    let prefix = &payload[..PREFIX_LEN];
    let network = match NetworkKind::from_xaddress_prefix(prefix) {
        Some(network) => network,
        None => bail!(ErrorKind::InvalidPrefix([prefix[0], prefix[1]])),
    };

    let account = AccountId::from_slice(&payload[ACCOUNT_OFFSET..FLAG_OFFSET])?;

    let tag = match payload[FLAG_OFFSET] {
        FLAG_NO_TAG => {
            if payload[TAG_OFFSET..].iter().any(|b| *b != 0) {
                bail!(ErrorKind::NonZeroReservedBytes);
            }
            None
        }
        FLAG_TAG_32 => {
            // Reserved bytes are not checked here. Existing encoders are
            // accepted as-is, so this must stay lenient.
            let mut tag = [0u8; TAG_LEN];
            tag.copy_from_slice(&payload[TAG_OFFSET..RESERVED_OFFSET]);
            Some(u32::from_le_bytes(tag))
        }
        flag => bail!(ErrorKind::UnsupportedTagWidth(flag)),
    };

    Ok(DecodedPayload {
        account,
        tag,
        network,
    })
}
