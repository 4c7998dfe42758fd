//! Content fingerprints for runnable code fragments.
//!
//! Clients compare fingerprints to decide whether a code file they already
//! hold is still current, so the token must depend on nothing but the raw
//! bytes of the fragment.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::{Digest, Sha256};
use std::fmt;

/// A 256-bit SHA-256 digest of a code fragment's raw bytes.
///
/// Displayed as a 43-character unpadded URL-safe base64 token, which needs
/// no escaping inside JSON strings or URLs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Computes the fingerprint of a byte slice.
    pub fn from_bytes(data: &[u8]) -> Self {
        let digest: [u8; 32] = Sha256::digest(data).into();
        Self(digest)
    }

    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the printable token form of this fingerprint.
    pub fn to_token(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_token())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:02x}{:02x}..)", self.0[0], self.0[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = Fingerprint::from_bytes(b"package main");
        let b = Fingerprint::from_bytes(b"package main");
        assert_eq!(a, b);
        assert_eq!(a.to_token(), b.to_token());
    }

    #[test]
    fn different_inputs_differ() {
        let corpus: [&[u8]; 6] = [
            b"",
            b"package main",
            b"package main\n",
            b"package Main",
            b"func main() {}",
            b"\x00\xff",
        ];
        for (i, a) in corpus.iter().enumerate() {
            for (j, b) in corpus.iter().enumerate() {
                let same = Fingerprint::from_bytes(a) == Fingerprint::from_bytes(b);
                assert_eq!(same, i == j, "inputs {i} and {j}");
            }
        }
    }

    #[test]
    fn known_digest() {
        // SHA-256("abc")
        let h = Fingerprint::from_bytes(b"abc");
        assert_eq!(h.as_bytes()[0], 0xba);
        assert_eq!(h.as_bytes()[31], 0xad);
        assert_eq!(h.to_token(), "ungWv48Bz-pBQUDeXa4iI7ADYaOWF3qctBD_YfIAFa0");
    }

    #[test]
    fn token_is_url_and_json_safe() {
        let token = Fingerprint::from_bytes(b"fmt.Println(\"hi\")").to_token();
        assert_eq!(token.len(), 43);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn display_is_token() {
        let h = Fingerprint::from_bytes(b"package main");
        assert_eq!(h.to_string(), h.to_token());
        assert_eq!(h.to_string(), "UShDhV_MkqUcgQsbWOBzHAHqyaaiPBV7-gKq1x7f--c");
    }

    #[test]
    fn debug_abbreviated() {
        let s = format!("{:?}", Fingerprint::from_bytes(b"test"));
        assert!(s.starts_with("Fingerprint("));
        assert!(s.ends_with("..)"));
    }
}
