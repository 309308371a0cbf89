//! Module `engine`.
//!
//! Implements the fractional transform engine with concrete entry points
//! `forward`, `backward`, their in-place overloads, and the one-shot `frft`
//! helper.
//!
//! References: Bluestein (1970), Bailey and Swarztrauber (1991), Chourdakis
//! (2005).
//!
//! Primary API surface: [`FrftEngine`] plus the free function [`frft`].
//!
//! Numerical considerations: the chirp-z route costs two length-2N ordinary
//! FFTs plus O(N) scalar work per call, independent of whether N is a power
//! of two; direct summation is O(N^2) and only competitive for tiny N.
//!
//! When to use: hold one engine per (length, alpha) pair and share it across
//! threads; transforms are safe to run concurrently because each call only
//! reads the chirp tables and privately owns one pooled scratch buffer.

use std::fmt;
use std::sync::Arc;

use num_complex::Complex;

use crate::FrftError;
use crate::chirp::ChirpTable;
use crate::fft::{OrdinaryFft, PlannedFft};
use crate::pool::ScratchPool;

/// Thread-safe engine computing the length-N fractional Fourier transform
/// for a configurable scaling exponent alpha.
///
/// The forward transform is
/// `H[n] = scale * sum_k h[k] * exp(-2*pi*i*k*n*alpha)`; the backward
/// transform flips the kernel sign and applies no `1/N` normalization of its
/// own, so a caller wanting a true inverse at `alpha = 1/N` passes
/// `scale = 1/N`.
///
/// `forward` and `backward` may run concurrently from any number of threads
/// on a shared engine. Changing alpha requires `&mut self`, so the rebuild
/// can never race an in-flight transform.
pub struct FrftEngine {
    len: usize,
    alpha: f64,
    fft: Arc<dyn OrdinaryFft>,
    chirp: ChirpTable,
    pool: ScratchPool,
}

impl FrftEngine {
    /// Creates an engine for length-`len` transforms backed by planned
    /// `rustfft` transforms of length `2 * len`.
    pub fn new(len: usize, alpha: f64) -> Result<Self, FrftError> {
        Self::with_fft(len, alpha, |padded| {
            Arc::new(PlannedFft::new(padded)) as Arc<dyn OrdinaryFft>
        })
    }

    /// Creates an engine whose ordinary FFT comes from `factory`.
    ///
    /// The factory is handed the padded transform length `2 * len` and must
    /// produce a transform of exactly that length.
    pub fn with_fft<F>(len: usize, alpha: f64, factory: F) -> Result<Self, FrftError>
    where
        F: FnOnce(usize) -> Arc<dyn OrdinaryFft>,
    {
        if len == 0 {
            return Err(FrftError::InvalidInput(
                "transform length must be > 0".to_string(),
            ));
        }

        let padded = 2 * len;
        let fft = factory(padded);
        if fft.len() != padded {
            return Err(FrftError::InvalidInput(format!(
                "ordinary FFT length {} does not match padded length {padded}",
                fft.len()
            )));
        }

        let mut chirp = ChirpTable::new(len);
        chirp.rebuild(alpha, fft.as_ref());

        Ok(Self {
            len,
            alpha,
            fft,
            chirp,
            pool: ScratchPool::new(padded),
        })
    }

    /// Number of logical Fourier coefficients per transform.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; zero-length engines are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current scaling exponent.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Replaces alpha and rebuilds the chirp tables synchronously.
    ///
    /// Exclusive access is required, so no transform can observe a
    /// half-rebuilt table.
    pub fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha;
        self.chirp.rebuild(alpha, self.fft.as_ref());
    }

    /// Writes the forward fractional transform of `input` into `output`,
    /// multiplied by `scale`.
    ///
    /// `input` and `output` must each hold at least `len` entries; only the
    /// first `len` are read and written.
    pub fn forward(
        &self,
        input: &[Complex<f64>],
        output: &mut [Complex<f64>],
        scale: f64,
    ) -> Result<(), FrftError> {
        self.check_len("input", input.len())?;
        self.check_len("output", output.len())?;

        let buffer = self.convolve(&self.chirp.forward_pre, &self.chirp.forward_z, input, scale);
        self.unpack(&self.chirp.forward_pre, &buffer, output);
        self.pool.release(buffer);
        Ok(())
    }

    /// Forward transform with `buffer` serving as both input and output.
    pub fn forward_in_place(
        &self,
        buffer: &mut [Complex<f64>],
        scale: f64,
    ) -> Result<(), FrftError> {
        self.check_len("buffer", buffer.len())?;

        let scratch = self.convolve(&self.chirp.forward_pre, &self.chirp.forward_z, buffer, scale);
        self.unpack(&self.chirp.forward_pre, &scratch, buffer);
        self.pool.release(scratch);
        Ok(())
    }

    /// Writes the backward fractional transform of `input` into `output`,
    /// multiplied by `scale`.
    ///
    /// Uses the `exp(+2*pi*i*k*n*alpha)` kernel. No `1/N` factor is applied;
    /// pass `scale = 1/N` to invert a forward transform taken at
    /// `alpha = 1/N`.
    pub fn backward(
        &self,
        input: &[Complex<f64>],
        output: &mut [Complex<f64>],
        scale: f64,
    ) -> Result<(), FrftError> {
        self.check_len("input", input.len())?;
        self.check_len("output", output.len())?;

        let buffer = self.convolve(&self.chirp.backward_pre, &self.chirp.backward_z, input, scale);
        self.unpack(&self.chirp.backward_pre, &buffer, output);
        self.pool.release(buffer);
        Ok(())
    }

    /// Backward transform with `buffer` serving as both input and output.
    pub fn backward_in_place(
        &self,
        buffer: &mut [Complex<f64>],
        scale: f64,
    ) -> Result<(), FrftError> {
        self.check_len("buffer", buffer.len())?;

        let scratch = self.convolve(&self.chirp.backward_pre, &self.chirp.backward_z, buffer, scale);
        self.unpack(&self.chirp.backward_pre, &scratch, buffer);
        self.pool.release(scratch);
        Ok(())
    }

    fn check_len(&self, name: &'static str, actual: usize) -> Result<(), FrftError> {
        if actual < self.len {
            return Err(FrftError::PreconditionViolation(format!(
                "{name} holds {actual} entries but the transform needs {}",
                self.len
            )));
        }
        Ok(())
    }

    /// Runs the chirp-weighted, zero-padded convolution and returns the
    /// pooled buffer holding the unnormalized result in its first N entries.
    fn convolve(
        &self,
        pre: &[Complex<f64>],
        z: &[Complex<f64>],
        input: &[Complex<f64>],
        scale: f64,
    ) -> Vec<Complex<f64>> {
        let n = self.len;
        let mut buffer = self.pool.acquire();

        for j in 0..n {
            buffer[j] = pre[j] * input[j];
        }
        for slot in &mut buffer[n..] {
            *slot = Complex::new(0.0, 0.0);
        }

        self.fft.forward(&mut buffer);
        for (slot, zk) in buffer.iter_mut().zip(z) {
            *slot *= *zk * scale;
        }
        self.fft.inverse(&mut buffer);

        buffer
    }

    /// Chirp-corrects the first N convolution entries into `output`,
    /// folding in the `1/(2N)` forward-plus-inverse FFT normalization.
    fn unpack(&self, pre: &[Complex<f64>], buffer: &[Complex<f64>], output: &mut [Complex<f64>]) {
        let norm = 1.0 / (2 * self.len) as f64;
        for j in 0..self.len {
            output[j] = pre[j] * buffer[j] * norm;
        }
    }
}

impl fmt::Display for FrftEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fractional FFT engine (len = {}, alpha = {})",
            self.len, self.alpha
        )
    }
}

/// One-shot fractional transform of `input` with exponent `alpha`.
///
/// Builds a throwaway engine per call; prefer [`FrftEngine`] when
/// transforming many vectors of the same length.
pub fn frft(input: &[Complex<f64>], alpha: f64) -> Vec<Complex<f64>> {
    if input.is_empty() {
        return Vec::new();
    }

    let engine = FrftEngine::new(input.len(), alpha).expect("length is nonzero");
    let mut out = vec![Complex::new(0.0, 0.0); input.len()];
    engine
        .forward(input, &mut out, 1.0)
        .expect("buffers sized to engine length");
    out
}
