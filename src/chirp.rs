//! Precomputed chirp factors for the chirp-z decomposition of the
//! fractional transform.

use std::f64::consts::PI;

use num_complex::Complex;

use crate::fft::OrdinaryFft;

/// Chirp multipliers derived from a transform length and alpha.
///
/// `forward_pre[j] = exp(-i*pi*j^2*alpha)` weighs input and output of the
/// forward pass; `backward_pre` is its conjugate and plays the same role for
/// the backward pass. `forward_z` and `backward_z` hold the length-2N chirp
/// convolution kernels, already passed through the ordinary forward FFT so
/// each transform call only needs a pointwise multiply.
pub(crate) struct ChirpTable {
    pub(crate) forward_pre: Vec<Complex<f64>>,
    pub(crate) backward_pre: Vec<Complex<f64>>,
    pub(crate) forward_z: Vec<Complex<f64>>,
    pub(crate) backward_z: Vec<Complex<f64>>,
}

impl ChirpTable {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            forward_pre: vec![Complex::new(0.0, 0.0); len],
            backward_pre: vec![Complex::new(0.0, 0.0); len],
            forward_z: vec![Complex::new(0.0, 0.0); 2 * len],
            backward_z: vec![Complex::new(0.0, 0.0); 2 * len],
        }
    }

    /// Recomputes all four tables for `alpha`, reusing the existing storage.
    ///
    /// `fft` must be the engine's length-2N ordinary transform; it is applied
    /// once to each z-vector here so the hot path never transforms them
    /// again.
    pub(crate) fn rebuild(&mut self, alpha: f64, fft: &dyn OrdinaryFft) {
        let n = self.forward_pre.len();

        for j in 0..n {
            let arg = (j * j) as f64 * PI * alpha;
            let (sin, cos) = arg.sin_cos();
            self.forward_pre[j] = Complex::new(cos, -sin);
            self.backward_pre[j] = Complex::new(cos, sin);
        }

        // Each z-vector is seeded with the opposite direction's pre-factor:
        // the forward pass convolves exp(-i*pi*j^2*alpha)-weighted input
        // against the exp(+i*pi*j^2*alpha) chirp, and vice versa.
        for j in 0..n {
            self.forward_z[j] = self.backward_pre[j];
            self.backward_z[j] = self.forward_pre[j];
        }

        // Mirrored tail: entry n + m carries the chirp at lag m - n, so the
        // circular convolution sees exp(i*pi*d^2*alpha) for every lag d in
        // -(n-1)..=n-1. Entry n itself is never reached by a valid lag.
        for m in 0..n {
            let arg = ((n - m) * (n - m)) as f64 * PI * alpha;
            let (sin, cos) = arg.sin_cos();
            self.forward_z[n + m] = Complex::new(cos, sin);
            self.backward_z[n + m] = Complex::new(cos, -sin);
        }

        fft.forward(&mut self.forward_z);
        fft.forward(&mut self.backward_z);
    }
}
