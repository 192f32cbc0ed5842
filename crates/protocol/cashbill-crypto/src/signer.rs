//! SHA-1 request signing.

use sha1::digest::Output;
use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

use crate::Token;

/// Length of a hex-encoded SHA-1 signature.
pub const SIGNATURE_HEX_LEN: usize = 40;

/// Signs payloads with the shop token.
///
/// Signing is a pure function of the payload and the token. There is no
/// timestamp or nonce, so identical payloads always produce identical
/// signatures.
#[derive(Clone, Debug)]
pub struct Signer {
    token: Token,
}

impl Signer {
    /// Create a signer for the given token.
    pub fn new(token: impl Into<Token>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Sign a single string payload.
    ///
    /// # Example
    /// ```
    /// use cashbill_crypto::Signer;
    ///
    /// let signer = Signer::new("secret");
    /// assert_eq!(signer.sign("abc123"), signer.sign_parts(["abc123"]));
    /// ```
    pub fn sign(&self, payload: &str) -> String {
        self.sign_parts([payload])
    }

    /// Sign an ordered list of values.
    ///
    /// Values are concatenated in the order given, with no separator.
    pub fn sign_parts<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        hex::encode(self.digest(parts))
    }

    /// Verify a signature over a single string payload.
    pub fn verify(&self, payload: &str, signature: &str) -> bool {
        self.verify_parts([payload], signature)
    }

    /// Verify a signature over an ordered list of values.
    ///
    /// Hex of either case is accepted. The digests are compared in
    /// constant time.
    ///
    /// # Returns
    /// `true` if `signature` decodes to the recomputed digest.
    pub fn verify_parts<I, S>(&self, parts: I, signature: &str) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Ok(provided) = hex::decode(signature) else {
            return false;
        };

        let expected = self.digest(parts);
        expected.as_slice().ct_eq(provided.as_slice()).into()
    }

    fn digest<I, S>(&self, parts: I) -> Output<Sha1>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hasher = Sha1::new();

        for part in parts {
            hasher.update(part.as_ref().as_bytes());
        }

        hasher.update(self.token.expose().as_bytes());

        hasher.finalize()
    }
}
