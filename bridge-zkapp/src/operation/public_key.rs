use std::fmt::{Display, Formatter};

use crate::error::ZkappError;

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// A public key in its base58 text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublicKey(String);

impl PublicKey {
    pub fn from_base58(encoded: &str) -> Result<PublicKey, ZkappError> {
        if encoded.is_empty() || !encoded.chars().all(|character| BASE58_ALPHABET.contains(character)) {
            return Err(ZkappError::InvalidPublicKey(encoded.to_string()));
        }
        return Ok(PublicKey(encoded.to_string()));
    }

    pub fn to_base58(&self) -> String {
        return self.0.clone();
    }
}

impl Display for PublicKey {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
