//! Conversion between classic ledger addresses (account plus separate
//! destination tag) and X-addresses, which pack the account, an optional
//! tag and the network into one checksummed string.
//!
//! Every function in this crate is pure: no shared state, no I/O, safe to
//! call concurrently from any number of threads.

#![recursion_limit = "1024"]

#[macro_use]
extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod chain;
pub mod codec;
pub mod config;
pub mod convert;
pub mod errors;
pub mod xaddress;

pub use crate::chain::NetworkKind;
pub use crate::codec::account::AccountId;
pub use crate::convert::{
    decode_x_address_to_address, encode_address_to_x_address, DecodedAddressResponse,
    EncodedAddressResponse,
};
pub use crate::xaddress::{decode_x_address, encode_x_address, is_valid_x_address, XAddress};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_send<T: Send>() {}

    #[test]
    fn public_types_are_thread_safe() {
        assert_send_sync::<NetworkKind>();
        assert_send_sync::<AccountId>();
        assert_send_sync::<XAddress>();
        assert_send_sync::<xaddress::Payload>();
        assert_send_sync::<xaddress::DecodedPayload>();
        assert_send::<errors::Error>();
        assert_send_sync::<DecodedAddressResponse>();
    }
}
