//! Scalar arithmetic modulo the Ed25519 group order
//!
//! This crate provides the scalar core that Ed25519 signing, key
//! derivation and verification are built on: a fixed-width 256-bit
//! little-endian [`Scalar`] and the modular operations over
//!
//! ```text
//! ℓ = 2^252 + 27742317777372353535851937790883648493
//! ```
//!
//! The focus is on **clarity, predictability, and auditability**. The whole
//! arithmetic surface reduces to two constant-time routines, a fused
//! multiply-add and a wide reduction, which share one limb-folding core.
//!
//! # Module overview
//!
//! - `scalar`
//!   The `Scalar` type, the constants `ZERO`, `ONE`, `NEG_ONE`, `COFACTOR`
//!   and `L`, constructors, modular arithmetic operators, wide reduction and
//!   RFC 8032 clamping.
//!
//! - `ct`
//!   Constant-time comparison. `Scalar` equality goes through it.
//!
//! - `error`
//!   The error type returned when decoding untrusted bytes or text.
//!
//! Point arithmetic, hashing, signature encoding and key generation are out
//! of scope. Callers hand this crate 64-byte digests to reduce and 32-byte
//! seeds to clamp, and receive canonical scalars back.
//!
//! # Example
//!
//! ```
//! use scalar25519::{Scalar, NEG_ONE, ONE, ZERO};
//!
//! let a = Scalar::from_u64(5);
//! let b = Scalar::from_u64(7);
//!
//! assert_eq!(a + b, Scalar::from_u64(12));
//! assert_eq!(NEG_ONE + ONE, ZERO);
//! ```
//!
//! # Design goals
//!
//! - No heap allocations in the arithmetic path
//! - Constant-time handling of every scalar value
//! - Input widths enforced by the type system, panics only on documented
//!   fixed-width slice preconditions

pub mod ct;
mod error;
pub mod scalar;

pub use error::ScalarError;
pub use scalar::{COFACTOR, L, NEG_ONE, ONE, Scalar, ZERO, prune};
