pub mod account;
pub mod base58;

pub use self::account::{
    decode_classic_address, encode_classic_address, AccountId, ACCOUNT_ADDRESS_PREFIX,
    ACCOUNT_ID_LEN,
};
pub use self::base58::{check_decode, check_encode};
