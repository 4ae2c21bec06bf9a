//! Constant-time comparison utilities.
//!
//! Equality on secret values must not reveal, through timing, whether or
//! where two values differ. Implementations here visit every byte and
//! reduce the differences with bitwise operations only.

/// Constant-time equality.
pub trait ConstantTimeEq {
    /// Returns `true` if `self == other`, in constant time.
    ///
    /// Implementations must not introduce data-dependent branches or early
    /// exits.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl ConstantTimeEq for [u8; 32] {
    /// All bytes are XORed and accumulated before the single final test, so
    /// the running time does not depend on where the first difference is.
    #[inline(always)]
    fn ct_eq(&self, other: &Self) -> bool {
        let diff = self
            .iter()
            .zip(other)
            .map(|(a, b)| a ^ b)
            .fold(0u8, |acc, v| acc | v);

        // Collapse to a single bit without branching on `diff`.
        let nonzero = ((diff as u16).wrapping_neg() >> 8) & 1;
        std::hint::black_box(nonzero) == 0
    }
}
