error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        InvalidAccountIdentifier(len: usize) {
            description("invalid account identifier")
            display("account identifier must be {} bytes, got {}", crate::codec::account::ACCOUNT_ID_LEN, len)
        }

        InvalidLength(len: usize) {
            description("unexpected payload length")
            display("unexpected payload length: got {}, want {}", len, crate::xaddress::payload::PAYLOAD_LEN)
        }

        InvalidPrefix(prefix: [u8; 2]) {
            description("invalid X-address prefix")
            display("invalid X-address: bad prefix {:02x}{:02x}", prefix[0], prefix[1])
        }

        NonZeroReservedBytes {
            description("remaining bytes must be zero")
            display("invalid X-address: remaining bytes must be zero when no tag is present")
        }

        UnsupportedTagWidth(flag: u8) {
            description("unsupported X-address flag")
            display("unsupported X-address flag {} (64-bit tags not supported)", flag)
        }

        InvalidTag(tag: String) {
            description("invalid tag")
            display("invalid tag: {:?} is not a 32-bit unsigned decimal", tag)
        }

        Checksum(reason: String) {
            description("checksummed base58 decoding failed")
            display("checksum error: {}", reason)
        }

        InvalidClassicAddress(reason: String) {
            description("invalid classic address")
            display("invalid classic address: {}", reason)
        }

        AccountIdentifierEncodingFailed(reason: String) {
            description("failed to encode classic address")
            display("failed to encode classic address: {}", reason)
        }
    }
}

