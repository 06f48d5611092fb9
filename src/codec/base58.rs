//! Checksummed base58 text encoding using the ledger's dictionary.
//!
//! A rendered string is `base58(data || checksum)` where the checksum is the
//! first four bytes of a double SHA-256 over `data`.

use bs58::decode::Error as Bs58Error;

use crate::errors::*;

fn alphabet() -> &'static bs58::Alphabet {
    bs58::Alphabet::RIPPLE
}

pub fn check_encode(data: &[u8]) -> String {
    bs58::encode(data)
        .with_alphabet(alphabet())
        .with_check()
        .into_string()
}

pub fn check_decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .with_alphabet(alphabet())
        .with_check(None)
        .into_vec()
        .map_err(|e| {
            trace!("rejected {:?}: {}", text, e);
            let reason = match e {
                Bs58Error::InvalidChecksum { .. } => "checksum mismatch".to_string(),
                Bs58Error::NoChecksum => "too short to carry a checksum".to_string(),
                _ => format!("{:?} is not valid base58", text),
            };
            Error::with_chain(e, ErrorKind::Checksum(reason))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_bytes_render_as_first_symbol() {
        let text = check_encode(&[0, 0, 1, 2, 3]);
        assert!(text.starts_with("rr"));
        assert_eq!(check_decode(&text).unwrap(), vec![0, 0, 1, 2, 3]);
    }

    #[test]
    fn decode_known_classic_address() {
        let raw = check_decode("rrrrrrrrrrrrrrrrrrrrrhoLvTp").unwrap();
        assert_eq!(raw, vec![0u8; 21]);
        let raw = check_decode("rrrrrrrrrrrrrrrrrrrrBZbvji").unwrap();
        assert_eq!(raw.len(), 21);
        assert_eq!(raw[20], 1);
    }

    #[test]
    fn corrupted_text_fails_checksum() {
        let text = check_encode(b"payment destination");
        let mut chars: Vec<char> = text.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'r' { 'p' } else { 'r' };
        let corrupted: String = chars.into_iter().collect();

        let err = check_decode(&corrupted).unwrap_err();
        match err.kind() {
            ErrorKind::Checksum(reason) => assert_eq!(reason, "checksum mismatch"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn characters_outside_dictionary_are_rejected() {
        // '0', 'O', 'I' and 'l' are not part of the dictionary
        for text in &["r0rrr", "OOOO", "Il", "InvalidXAddress123"] {
            match check_decode(text).unwrap_err().kind() {
                ErrorKind::Checksum(_) => (),
                other => panic!("unexpected error for {}: {}", text, other),
            }
        }
    }

    #[test]
    fn too_short_input_is_rejected() {
        for text in &["", "rpsh"] {
            match check_decode(text).unwrap_err().kind() {
                ErrorKind::Checksum(reason) => assert!(reason.contains("too short"), "{}", reason),
                other => panic!("unexpected error for {:?}: {}", text, other),
            }
        }
    }

    #[test]
    fn checksum_matches_reference_rendering() {
        // 0x00 type prefix followed by a zero account identifier
        assert_eq!(check_encode(&[0u8; 21]), "rrrrrrrrrrrrrrrrrrrrrhoLvTp");
    }
}
