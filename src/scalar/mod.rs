//! Ed25519 scalar arithmetic.
//!
//! Scalars are integers modulo the Ed25519 group order ℓ:
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! ## Role of scalars
//!
//! Signing and verification use scalars for:
//!
//! - secret keys (after clamping)
//! - deterministic nonces derived from hashes
//! - challenges computed from the signed message
//! - the exponents of curve point multiplication
//!
//! This module provides the arithmetic those steps are built from. Point
//! arithmetic, hashing and signature encoding live in the layers above.
//!
//! ## Representation
//!
//! A [`Scalar`] is a `[u8; 32]` little-endian integer. The representation
//! does **not** enforce reduction:
//!
//! - values built with [`Scalar::from_bytes`] or clamped with
//!   [`Scalar::prune`] may be ≥ ℓ
//! - every arithmetic result, and the output of [`Scalar::reduce_wide`],
//!   lies in `[0, ℓ)`
//!
//! ## Operations
//!
//! - [`Scalar::mul_add`] computes `a * b + c mod ℓ`; `+`, `-`, `*` and unary
//!   `-` are all defined in terms of it
//! - [`Scalar::reduce_wide`] reduces a 512-bit hash output
//! - [`prune`] applies RFC 8032 clamping
//! - [`ConstantTimeEq`](crate::ct::ConstantTimeEq) compares scalars without
//!   early exit
//!
//! ## Security properties
//!
//! - Arithmetic, reduction, clamping and equality are constant-time with
//!   respect to scalar values
//! - No secret-dependent branches or memory accesses
//! - No heap allocation outside the hexadecimal encoding
//!
//! Operations take `Copy` values and build their result in a local before
//! writing it out, so `x += x` and similar aliasing forms are well defined.

mod conv;
mod core;
mod limbs;
mod ops;

pub use self::core::{COFACTOR, L, NEG_ONE, ONE, Scalar, ZERO, prune};
