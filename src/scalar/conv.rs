//! Conversions between `Scalar` and bytes, integers and text.
//!
//! Text encodings are meant for diagnostics and test vectors. They are not
//! constant-time and must not be used on secret scalars.

use super::core::Scalar;
use crate::error::ScalarError;

use std::fmt::{self, Debug, Display, Formatter, LowerHex};
use std::str::FromStr;

impl Scalar {
    /// Returns the 64-character lowercase hexadecimal encoding of the raw
    /// little-endian bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses the encoding produced by [`Scalar::to_hex`].
    ///
    /// The value is taken as is: it is neither reduced nor checked
    /// against ℓ. Both upper and lower case digits are accepted.
    pub fn from_hex(text: &str) -> Result<Scalar, ScalarError> {
        let mut out = [0u8; 32];

        hex::decode_to_slice(text, &mut out).map_err(|err| {
            tracing::debug!(len = text.len(), "rejected hexadecimal scalar");
            ScalarError::from(err)
        })?;

        Ok(Scalar(out))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::from_u64(value)
    }
}

impl From<[u8; 32]> for Scalar {
    fn from(value: [u8; 32]) -> Self {
        Scalar(value)
    }
}

impl From<Scalar> for [u8; 32] {
    fn from(value: Scalar) -> Self {
        value.0
    }
}

/// Fallible counterpart of [`Scalar::from_slice`].
impl TryFrom<&[u8]> for Scalar {
    type Error = ScalarError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = value.try_into().map_err(|_| {
            tracing::debug!(len = value.len(), "rejected scalar slice");
            ScalarError::InvalidLength {
                expected: 32,
                actual: value.len(),
            }
        })?;

        Ok(Scalar(bytes))
    }
}

impl AsRef<[u8]> for Scalar {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Scalar {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scalar::from_hex(s)
    }
}

impl LowerHex for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({:x})", self)
    }
}
