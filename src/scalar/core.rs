//! The `Scalar` value type, its constants and its constructors.

use super::limbs;
use crate::ct::ConstantTimeEq;
use crate::error::ScalarError;

/// A 256-bit little-endian integer, canonical when reduced modulo ℓ.
///
/// The same representation carries two kinds of values:
///
/// - reduced scalars in `[0, ℓ)`, produced by every arithmetic operation
///   and by the reduction functions
/// - unreduced 256-bit values, such as a freshly clamped secret seed
///
/// Nothing is normalized implicitly. The arithmetic operations accept any
/// 256-bit operand and always return a reduced scalar.
#[derive(Clone, Copy)]
pub struct Scalar(pub(crate) [u8; 32]);

/// The number 0.
pub const ZERO: Scalar = Scalar([0u8; 32]);

/// The number 1.
pub const ONE: Scalar = Scalar([
    1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
]);

/// The curve cofactor, 8.
pub const COFACTOR: Scalar = Scalar([
    8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
]);

/// The number −1 mod ℓ, that is `ℓ − 1`.
pub const NEG_ONE: Scalar = Scalar([
    0xec, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
]);

/// The prime subgroup order:
///
/// ```text
/// ℓ = 2^252 + 27742317777372353535851937790883648493
/// ```
pub const L: Scalar = Scalar([
    0xed, 0xd3, 0xf5, 0x5c, 0x1a, 0x63, 0x12, 0x58, 0xd6, 0x9c, 0xf7, 0xa2, 0xde, 0xf9, 0xde, 0x14,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10,
]);

impl Scalar {
    pub const ZERO: Self = ZERO;
    pub const ONE: Self = ONE;
    pub const NEG_ONE: Self = NEG_ONE;
    pub const COFACTOR: Self = COFACTOR;
    pub const L: Self = L;

    /// Wraps 32 little-endian bytes without reducing them.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Scalar(bytes)
    }

    /// Constructs a scalar from a 32-byte little-endian slice, unreduced.
    ///
    /// # Panics
    ///
    /// Panics if `bytes` is not exactly 32 bytes long. A secret of the
    /// wrong width is never truncated or padded; use `Scalar::try_from`
    /// when the length is not already guaranteed by the caller.
    pub fn from_slice(bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), 32, "scalar input must be exactly 32 bytes");

        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);

        Scalar(out)
    }

    /// Encodes `n` in the low eight bytes. Always canonical, since ℓ > 2^64.
    pub const fn from_u64(n: u64) -> Self {
        let le = n.to_le_bytes();
        let mut out = [0u8; 32];

        let mut i = 0;
        while i < 8 {
            out[i] = le[i];
            i += 1;
        }

        Scalar(out)
    }

    /// Encodes the **magnitude** of `n`.
    ///
    /// For `n < 0` the result is `|n|`, not `ℓ + n`: `from_i64(-5)` equals
    /// `from_u64(5)`. Callers that need the modular negative must negate
    /// explicitly, e.g. `-Scalar::from_i64(n)`. `i64::MIN` encodes `2^63`.
    pub const fn from_i64(n: i64) -> Self {
        Self::from_u64(n.unsigned_abs())
    }

    /// Returns the 32-byte little-endian encoding.
    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Borrows the 32-byte little-endian encoding.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Computes `a * b + c (mod ℓ)`.
    ///
    /// This is the single arithmetic primitive of the crate: addition,
    /// subtraction, multiplication and negation are all expressed through
    /// it (see the operator implementations). Operands may be unreduced;
    /// the result is always canonical.
    ///
    /// Constant-time with respect to all three operands.
    pub fn mul_add(a: &Scalar, b: &Scalar, c: &Scalar) -> Scalar {
        Scalar(limbs::mul_add(&a.0, &b.0, &c.0))
    }

    /// Reduces a 512-bit little-endian integer modulo ℓ.
    ///
    /// This is the step that turns a SHA-512 digest into a nonce, a
    /// challenge or a secret scalar, so it is constant-time.
    pub fn reduce_wide(wide: &[u8; 64]) -> Scalar {
        Scalar(limbs::reduce_wide(wide))
    }

    /// Reduces a 64-byte little-endian slice modulo ℓ.
    ///
    /// # Panics
    ///
    /// Panics if `wide` is not exactly 64 bytes long.
    pub fn reduce_wide_slice(wide: &[u8]) -> Scalar {
        assert_eq!(wide.len(), 64, "wide reduction input must be exactly 64 bytes");

        let mut buf = [0u8; 64];
        buf.copy_from_slice(wide);

        Self::reduce_wide(&buf)
    }

    /// Reduces a 256-bit little-endian integer modulo ℓ.
    pub fn from_bytes_mod_order(bytes: [u8; 32]) -> Scalar {
        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(&bytes);

        Self::reduce_wide(&wide)
    }

    /// Returns the canonical representative of `self`.
    pub fn reduce(&self) -> Scalar {
        Self::from_bytes_mod_order(self.0)
    }

    /// Returns `true` if the encoded value is strictly below ℓ.
    ///
    /// Runs the full-width subtraction regardless of input.
    pub fn is_canonical(&self) -> bool {
        let (_, borrow) = limbs::sub_order(&self.0);
        borrow == 1
    }

    /// Accepts `bytes` only if it is already the canonical encoding of a
    /// value in `[0, ℓ)`.
    pub fn from_canonical_bytes(bytes: [u8; 32]) -> Result<Scalar, ScalarError> {
        let candidate = Scalar(bytes);

        if !candidate.is_canonical() {
            tracing::debug!("rejected scalar encoding not below the group order");
            return Err(ScalarError::NonCanonical);
        }

        Ok(candidate)
    }

    /// Applies RFC 8032 clamping in place.
    ///
    /// See [`prune`].
    pub fn prune(&mut self) {
        prune(&mut self.0);
    }

    /// Returns a clamped copy of `self`.
    pub fn clamped(mut self) -> Scalar {
        self.prune();
        self
    }
}

/// Clamps a raw 32-byte secret as RFC 8032 requires:
///
/// - the three low bits are cleared, making the value a multiple of the
///   cofactor
/// - bit 255 is cleared and bit 254 is set, fixing the bit length at 255
///
/// The result is used directly as an exponent for point multiplication and
/// is **not** reduced modulo ℓ.
pub fn prune(bytes: &mut [u8; 32]) {
    bytes[0] &= 248;
    bytes[31] &= 127;
    bytes[31] |= 64;
}

impl Default for Scalar {
    fn default() -> Self {
        ZERO
    }
}

impl ConstantTimeEq for Scalar {
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for Scalar {}
