use sha2::{Digest, Sha256};
use signed_values::{
    AuthError, AuthResult, HashFactory, HmacSha256, HmacSha512, MacAccumulator, SignedValueStore,
};

/// Caller-defined strategy: SHA-256 over `len(key) || key || message`.
/// Not a recommended construction, only a stand-in for a custom algorithm.
#[derive(Debug, Clone, Copy)]
struct PrefixSha256;

#[derive(Clone)]
struct PrefixState(Sha256);

impl MacAccumulator for PrefixState {
    fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.0, bytes);
    }

    fn finalize(self) -> Vec<u8> {
        self.0.finalize().to_vec()
    }
}

impl HashFactory for PrefixSha256 {
    type Accumulator = PrefixState;

    fn algorithm(&self) -> &'static str {
        "prefix-sha256"
    }

    fn tag_len(&self) -> usize {
        32
    }

    fn keyed(&self, key: &[u8]) -> AuthResult<Self::Accumulator> {
        let len = u32::try_from(key.len())
            .map_err(|_| AuthError::invalid_key().with_context("key longer than u32::MAX"))?;
        let mut state = Sha256::new();
        Digest::update(&mut state, len.to_be_bytes());
        Digest::update(&mut state, key);
        Ok(PrefixState(state))
    }
}

/// Strategy that refuses short keys.
#[derive(Debug, Clone, Copy)]
struct MinLength;

impl HashFactory for MinLength {
    type Accumulator = <HmacSha256 as HashFactory>::Accumulator;

    fn algorithm(&self) -> &'static str {
        "HMAC-SHA-256 (min 16 byte key)"
    }

    fn tag_len(&self) -> usize {
        HmacSha256.tag_len()
    }

    fn keyed(&self, key: &[u8]) -> AuthResult<Self::Accumulator> {
        if key.len() < 16 {
            return Err(AuthError::invalid_key().with_context("key shorter than 16 bytes"));
        }
        HmacSha256.keyed(key)
    }
}

#[test]
fn custom_factory_round_trips() {
    let mut sender = SignedValueStore::new("k1", PrefixSha256).expect("key");
    assert_eq!(sender.algorithm(), "prefix-sha256");
    sender.set("user", "42");
    let signed = sender.encode();

    let mut receiver = SignedValueStore::new("k1", PrefixSha256).expect("key");
    receiver
        .decode(signed.tag(), signed.payload())
        .expect("verifies");
    assert_eq!(receiver.get("user"), "42");
}

#[test]
fn custom_factory_is_not_interchangeable_with_hmac() {
    let mut sender = SignedValueStore::new("k1", PrefixSha256).expect("key");
    sender.set("user", "42");
    let signed = sender.encode();

    let mut receiver = SignedValueStore::new("k1", HmacSha256).expect("key");
    let err = receiver
        .decode(signed.tag(), signed.payload())
        .expect_err("different algorithm");
    assert!(err.is_authentication_failure());
}

#[test]
fn factory_can_reject_keys() {
    let err = SignedValueStore::new("short", MinLength).expect_err("too short");
    assert!(err.is_invalid_key());
    assert!(SignedValueStore::new("sixteen-byte-key", MinLength).is_ok());
}

#[test]
fn sha512_factory_round_trips() {
    let mut sender = SignedValueStore::new("k1", HmacSha512).expect("key");
    sender.add("scope", "read");
    sender.add("scope", "write");
    let signed = sender.encode();

    let mut receiver = SignedValueStore::new("k1", HmacSha512).expect("key");
    receiver
        .decode(signed.tag(), signed.payload())
        .expect("verifies");
    assert_eq!(receiver.get_all("scope"), ["read", "write"]);
}

/// Strategy whose declared tag length disagrees with its output.
#[derive(Debug, Clone, Copy)]
struct MisreportedLength;

impl HashFactory for MisreportedLength {
    type Accumulator = <HmacSha256 as HashFactory>::Accumulator;

    fn algorithm(&self) -> &'static str {
        "misreported"
    }

    fn tag_len(&self) -> usize {
        16
    }

    fn keyed(&self, key: &[u8]) -> AuthResult<Self::Accumulator> {
        HmacSha256.keyed(key)
    }
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "unexpected length")]
fn declared_tag_length_is_enforced() {
    let store = SignedValueStore::new("k1", MisreportedLength).expect("key");
    let _ = store.encode();
}

#[test]
fn builtin_factories_declare_their_output_length() {
    let narrow = SignedValueStore::new("k1", HmacSha256).expect("key").encode();
    let wide = SignedValueStore::new("k1", HmacSha512).expect("key").encode();
    for (len, signed) in [(HmacSha256.tag_len(), narrow), (HmacSha512.tag_len(), wide)] {
        let tag = signed_values::codec::transport::decode(signed.tag()).expect("base64");
        assert_eq!(tag.len(), len);
    }
}
