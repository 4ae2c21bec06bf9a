//! Radix-2²¹ limb arithmetic modulo ℓ.
//!
//! A 256-bit operand is split into twelve signed 21-bit limbs and a 512-bit
//! one into twenty-four, so that limb products and their sums stay well
//! inside `i64`. Reduction never divides: it relies on
//!
//! ```text
//! 2^252 ≡ −27742317777372353535851937790883648493 (mod ℓ)
//! ```
//!
//! so a limb sitting at or above bit 252 is folded twelve limbs down after
//! multiplication by the six signed digits of that residue.
//!
//! Every loop bound and index below depends only on limb positions, never on
//! limb values. The only clients are the public operations in `super::core`.

use super::core::L;

const MASK: i64 = 0x1f_ffff;

/// Signed radix-2²¹ digits of `2^252 mod ℓ`.
const FOLD: [i64; 6] = [666643, 470296, 654183, -997805, 136657, -683901];

/// Splits a little-endian integer into `N` limbs of 21 bits each.
///
/// The last limb is left unmasked and absorbs every remaining high bit.
fn load_limbs<const N: usize>(bytes: &[u8]) -> [i64; N] {
    std::array::from_fn(|index| {
        let bit = 21 * index;
        let start = bit / 8;
        let end = (start + 4).min(bytes.len());

        let word = bytes[start..end]
            .iter()
            .rev()
            .fold(0i64, |acc, &byte| (acc << 8) | byte as i64);
        let limb = word >> (bit % 8);

        if index + 1 < N { limb & MASK } else { limb }
    })
}

/// Adds `s[index] * 2^(21 * index)` back into the limbs twelve positions
/// lower, clearing `s[index]`.
#[inline(always)]
fn fold(s: &mut [i64; 24], index: usize) {
    let limb = s[index];
    s[index] = 0;

    for (offset, coeff) in FOLD.iter().enumerate() {
        s[index - 12 + offset] += limb * coeff;
    }
}

/// Moves the rounded excess of `s[index]` into the next limb, leaving
/// `s[index]` in `[-2^20, 2^20)`.
#[inline(always)]
fn carry_signed(s: &mut [i64; 24], index: usize) {
    let carry = (s[index] + (1 << 20)) >> 21;

    s[index + 1] += carry;
    s[index] -= carry << 21;
}

/// Moves everything above bit 21 of `s[index]` into the next limb, leaving
/// `s[index]` in `[0, 2^21)`.
#[inline(always)]
fn carry_unsigned(s: &mut [i64; 24], index: usize) {
    let carry = s[index] >> 21;

    s[index + 1] += carry;
    s[index] -= carry << 21;
}

/// Serializes the twelve low limbs back into 32 little-endian bytes.
fn pack(s: &[i64; 24]) -> [u8; 32] {
    let mut out = [0u8; 32];
    let mut acc = 0u64;
    let mut bits = 0;
    let mut pos = 0;

    for &limb in &s[..12] {
        acc |= (limb as u64) << bits;
        bits += 21;

        while bits >= 8 {
            out[pos] = acc as u8;
            pos += 1;
            acc >>= 8;
            bits -= 8;
        }
    }
    out[pos] = acc as u8;

    out
}

/// Computes `bytes − ℓ` and the final borrow.
///
/// The borrow is `1` exactly when `bytes < ℓ`.
pub(super) fn sub_order(bytes: &[u8; 32]) -> ([u8; 32], u8) {
    let mut diff = [0u8; 32];
    let mut borrow = 0u16;

    for ((d, &x), &l) in diff.iter_mut().zip(bytes).zip(&L.0) {
        let t = (x as u16).wrapping_sub(l as u16).wrapping_sub(borrow);

        *d = t as u8;
        borrow = (t >> 15) & 1;
    }

    (diff, borrow as u8)
}

/// Subtracts ℓ once if `bytes ≥ ℓ`, selecting the result with a mask.
///
/// Valid for any input below `2ℓ`, which covers every packed output of
/// [`reduce_limbs`].
fn canonicalize(bytes: [u8; 32]) -> [u8; 32] {
    let (diff, borrow) = sub_order(&bytes);
    let keep = 0u8.wrapping_sub(borrow);

    let mut out = [0u8; 32];
    for ((o, &x), &d) in out.iter_mut().zip(&bytes).zip(&diff) {
        *o = (x & keep) | (d & !keep);
    }

    out
}

/// Reduces a 24-limb integer modulo ℓ.
///
/// Limbs must be within the bounds produced by [`load_limbs`] or by the
/// carried product in [`mul_add`].
fn reduce_limbs(mut s: [i64; 24]) -> [u8; 32] {
    for index in (18..24).rev() {
        fold(&mut s, index);
    }

    for index in (6..=16).step_by(2) {
        carry_signed(&mut s, index);
    }
    for index in (7..=15).step_by(2) {
        carry_signed(&mut s, index);
    }

    for index in (12..18).rev() {
        fold(&mut s, index);
    }

    for index in (0..=10).step_by(2) {
        carry_signed(&mut s, index);
    }
    for index in (1..=11).step_by(2) {
        carry_signed(&mut s, index);
    }

    // Limb 12 now only holds the carry out of limb 11; two more rounds of
    // folding and unsigned carrying bring every limb into [0, 2^21).
    fold(&mut s, 12);
    for index in 0..12 {
        carry_unsigned(&mut s, index);
    }

    fold(&mut s, 12);
    for index in 0..11 {
        carry_unsigned(&mut s, index);
    }

    canonicalize(pack(&s))
}

/// Reduces a 512-bit little-endian integer modulo ℓ.
pub(super) fn reduce_wide(wide: &[u8; 64]) -> [u8; 32] {
    reduce_limbs(load_limbs::<24>(wide))
}

/// Computes `a * b + c mod ℓ` for arbitrary 256-bit operands.
pub(super) fn mul_add(a: &[u8; 32], b: &[u8; 32], c: &[u8; 32]) -> [u8; 32] {
    let a = load_limbs::<12>(a);
    let b = load_limbs::<12>(b);
    let c = load_limbs::<12>(c);

    let mut s = [0i64; 24];
    s[..12].copy_from_slice(&c);

    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            s[i + j] += ai * bj;
        }
    }

    for index in (0..=22).step_by(2) {
        carry_signed(&mut s, index);
    }
    for index in (1..=21).step_by(2) {
        carry_signed(&mut s, index);
    }

    reduce_limbs(s)
}
