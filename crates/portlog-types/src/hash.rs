use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Opaque 32-byte identifier under which one timestamp record and/or one
/// transaction header may be stored.
///
/// A `HashKey` is produced off-process by hashing the underlying document;
/// the tracker treats it as opaque. [`HashKey::of`] derives one from raw
/// content with BLAKE3 for callers that hold the document themselves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HashKey {
    hash: [u8; 32],
}

impl HashKey {
    /// Derive a key from raw content bytes.
    pub fn of(content: &[u8]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(b"portlog-content-v1:");
        hasher.update(content);
        Self {
            hash: *hasher.finalize().as_bytes(),
        }
    }

    /// A random key for tests and demos.
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::Rng::fill(&mut rand::thread_rng(), &mut bytes);
        Self { hash: bytes }
    }

    /// The raw 32-byte hash.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.hash
    }

    /// Full hex-encoded string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// Short identifier (first 8 hex characters).
    pub fn short_id(&self) -> String {
        format!("hk:{}", hex::encode(&self.hash[..4]))
    }

    /// Parse from a hex string (64 hex characters, optional `0x` prefix).
    ///
    /// Upstream systems hand keys around as `0x`-prefixed hex ids, so the
    /// prefix is accepted and stripped here.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        if bytes.len() != 32 {
            return Err(TypeError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self { hash: arr })
    }

    /// Create from a raw 32-byte hash.
    pub fn from_raw(hash: [u8; 32]) -> Self {
        Self { hash }
    }
}

impl fmt::Debug for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashKey({})", self.short_id())
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn of_is_deterministic() {
        let k1 = HashKey::of(b"bill of lading 77");
        let k2 = HashKey::of(b"bill of lading 77");
        assert_eq!(k1, k2);
    }

    #[test]
    fn different_content_produces_different_keys() {
        assert_ne!(HashKey::of(b"a"), HashKey::of(b"b"));
    }

    #[test]
    fn random_keys_are_unique() {
        assert_ne!(HashKey::random(), HashKey::random());
    }

    #[test]
    fn hex_roundtrip() {
        let key = HashKey::of(b"manifest");
        let parsed = HashKey::from_hex(&key.to_hex()).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn hex_accepts_0x_prefix() {
        let key = HashKey::from_raw([0x24; 32]);
        let prefixed = format!("0x{}", key.to_hex());
        assert_eq!(HashKey::from_hex(&prefixed).unwrap(), key);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = HashKey::from_hex("24dd327f").unwrap_err();
        assert_eq!(
            err,
            TypeError::InvalidLength {
                expected: 32,
                actual: 4
            }
        );
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(matches!(
            HashKey::from_hex("zz"),
            Err(TypeError::InvalidHex(_))
        ));
    }

    #[test]
    fn short_id_format() {
        let short = HashKey::from_raw([0; 32]).short_id();
        assert!(short.starts_with("hk:"));
        assert_eq!(short.len(), 11); // "hk:" + 8 hex chars
    }

    #[test]
    fn serde_roundtrip() {
        let key = HashKey::of(b"cargo receipt");
        let json = serde_json::to_string(&key).unwrap();
        let parsed: HashKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, parsed);
    }

    proptest! {
        #[test]
        fn hex_roundtrip_any_key(bytes in prop::array::uniform32(any::<u8>())) {
            let key = HashKey::from_raw(bytes);
            prop_assert_eq!(HashKey::from_hex(&key.to_hex()).unwrap(), key);
        }

        #[test]
        fn short_hex_never_parses(len in 0usize..32, byte in any::<u8>()) {
            let hex = hex::encode(vec![byte; len]);
            prop_assert!(HashKey::from_hex(&hex).is_err());
        }
    }
}
