//! Fractional FFT kernel: the discrete Fourier transform generalized to an
//! arbitrary real scaling exponent alpha.
//!
//! The forward transform computed here is
//! `H[n] = sum_k h[k] * exp(-2*pi*i * k * n * alpha)`; `alpha = 1/N` recovers
//! the ordinary DFT. The engine evaluates it through the chirp-z (Bluestein)
//! decomposition: chirp-weight the input, zero-pad to length 2N, run one
//! ordinary forward FFT, multiply by a precomputed transformed chirp vector,
//! run one ordinary inverse FFT, and chirp-correct the first N entries. The
//! cost for arbitrary alpha is two length-2N FFTs plus O(N) scalar work, and
//! N is not required to be a power of two.
//!
//! References: Bluestein (1970) for the chirp-z identity, Bailey and
//! Swarztrauber (1991) for the fractional Fourier transform, Chourdakis
//! (2005) for its use on option-pricing strike grids.
//!
//! Numerical considerations:
//! - Chirp arguments grow like `pi * j^2 * alpha`; argument reduction inside
//!   `sin_cos` keeps the tables accurate for the lengths this crate targets.
//! - Both ordinary FFT directions are unnormalized; the engine applies the
//!   single explicit `1/(2N)` factor itself, and the backward transform adds
//!   no `1/N` of its own (pass `scale = 1/N` for a true inverse).
//! - Non-finite alpha is not rejected; it produces NaN tables and NaN
//!   outputs, in line with trusting numeric inputs everywhere else.
//!
//! When to use: reach for [`FrftEngine`] when many same-length transforms
//! share an alpha (tables and scratch buffers amortize across calls and
//! threads); reach for the one-shot [`frft`] helper for a single vector.
//!
//! # Quick Start
//!
//! A Kronecker delta maps to the all-ones vector for any alpha:
//!
//! ```rust
//! use frft::FrftEngine;
//! use num_complex::Complex;
//!
//! let engine = FrftEngine::new(4, 0.25).unwrap();
//! let mut delta = vec![Complex::new(0.0, 0.0); 4];
//! delta[0] = Complex::new(1.0, 0.0);
//!
//! let mut out = vec![Complex::new(0.0, 0.0); 4];
//! engine.forward(&delta, &mut out, 1.0).unwrap();
//! for value in &out {
//!     assert!((*value - Complex::new(1.0, 0.0)).norm() < 1e-9);
//! }
//! ```
//!
//! At `alpha = 1/N` the one-shot helper is an ordinary DFT:
//!
//! ```rust
//! use frft::frft;
//! use num_complex::Complex;
//!
//! let x = vec![Complex::new(1.0, 0.0), Complex::new(0.0, -2.0)];
//! let y = frft(&x, 0.5);
//! assert!((y[0] - (x[0] + x[1])).norm() < 1e-12);
//! assert!((y[1] - (x[0] - x[1])).norm() < 1e-12);
//! ```

mod chirp;
mod pool;

pub mod engine;
pub mod fft;

pub use engine::{FrftEngine, frft};
pub use fft::{OrdinaryFft, PlannedFft};

/// Errors surfaced by engine construction and transform entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrftError {
    /// Construction-time validation error.
    InvalidInput(String),
    /// Caller-supplied buffer violates the documented length contract.
    PreconditionViolation(String),
}

impl std::fmt::Display for FrftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::PreconditionViolation(msg) => write!(f, "precondition violation: {msg}"),
        }
    }
}

impl std::error::Error for FrftError {}
