use std::convert::TryFrom;
use std::fmt;

use crate::codec::base58;
use crate::errors::*;

/// Length in bytes of a ledger account identifier.
pub const ACCOUNT_ID_LEN: usize = 20;

/// Type prefix prepended to an account identifier in its classic text form.
pub const ACCOUNT_ADDRESS_PREFIX: u8 = 0x00;

/// A decoded ledger account identifier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId([u8; ACCOUNT_ID_LEN]);

impl AccountId {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ACCOUNT_ID_LEN {
            bail!(ErrorKind::InvalidAccountIdentifier(bytes.len()));
        }
        let mut id = [0u8; ACCOUNT_ID_LEN];
        id.copy_from_slice(bytes);
        Ok(AccountId(id))
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn to_classic_address(&self) -> String {
        encode_classic_address(self)
    }
}

impl From<[u8; ACCOUNT_ID_LEN]> for AccountId {
    fn from(bytes: [u8; ACCOUNT_ID_LEN]) -> Self {
        AccountId(bytes)
    }
}

impl TryFrom<&[u8]> for AccountId {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        AccountId::from_slice(bytes)
    }
}

impl AsRef<[u8]> for AccountId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AccountId({})", self.to_hex())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Decodes a classic `r...` address into its account identifier.
pub fn decode_classic_address(classic: &str) -> Result<AccountId> {
    let decoded = base58::check_decode(classic)?;
    let (prefix, body) = match decoded.split_first() {
        Some((prefix, body)) => (*prefix, body),
        None => bail!(ErrorKind::InvalidClassicAddress("empty payload".to_string())),
    };
    if prefix != ACCOUNT_ADDRESS_PREFIX {
        bail!(ErrorKind::InvalidClassicAddress(format!(
            "type prefix {:#04x} is not an account address",
            prefix
        )));
    }
    if body.len() != ACCOUNT_ID_LEN {
        bail!(ErrorKind::InvalidClassicAddress(format!(
            "unexpected account length: got {}, want {}",
            body.len(),
            ACCOUNT_ID_LEN
        )));
    }
    AccountId::from_slice(body)
}

/// Renders raw identifier bytes as a classic address.
pub fn encode_account_id(bytes: &[u8]) -> Result<String> {
    let account = AccountId::from_slice(bytes)?;
    Ok(encode_classic_address(&account))
}

pub fn encode_classic_address(account: &AccountId) -> String {
    let mut buf = Vec::with_capacity(1 + ACCOUNT_ID_LEN);
    buf.push(ACCOUNT_ADDRESS_PREFIX);
    buf.extend_from_slice(account.as_bytes());
    base58::check_encode(&buf)
}

pub fn is_valid_classic_address(classic: &str) -> bool {
    decode_classic_address(classic).is_ok()
}
