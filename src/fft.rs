//! Ordinary (integer-order) FFT collaborator used by the fractional engine.
//!
//! The fractional transform does not care how the underlying length-2N DFT is
//! computed; it relies only on the contract captured by [`OrdinaryFft`]:
//! in-place complex transforms of a fixed length, unnormalized in both
//! directions, so a forward/inverse pair scales every entry by the transform
//! length.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use num_complex::Complex;
use rustfft::{Fft, FftPlanner};

/// In-place complex DFT of a fixed length.
///
/// Implementations must be safe to invoke from any number of threads at once;
/// the engine calls them concurrently on distinct buffers.
pub trait OrdinaryFft: Send + Sync {
    /// Transform length. `forward` and `inverse` accept exactly this many
    /// entries.
    fn len(&self) -> usize;

    /// In-place forward DFT with the `exp(-2*pi*i*k*n/len)` kernel.
    fn forward(&self, buffer: &mut [Complex<f64>]);

    /// In-place inverse DFT with the `exp(+2*pi*i*k*n/len)` kernel, with no
    /// `1/len` normalization applied.
    fn inverse(&self, buffer: &mut [Complex<f64>]);
}

thread_local! {
    static FFT_SCRATCH: RefCell<HashMap<usize, Vec<Complex<f64>>>> =
        RefCell::new(HashMap::new());
}

/// [`OrdinaryFft`] backed by planned `rustfft` transforms.
///
/// Plans are built once at construction. Per-call scratch comes from a
/// thread-local cache keyed by scratch length, so concurrent callers never
/// contend on it.
pub struct PlannedFft {
    len: usize,
    forward: Arc<dyn Fft<f64>>,
    inverse: Arc<dyn Fft<f64>>,
}

impl PlannedFft {
    /// Plans forward and inverse transforms of length `len`. Any length is
    /// accepted, not just powers of two.
    pub fn new(len: usize) -> Self {
        let mut planner = FftPlanner::<f64>::new();
        Self {
            len,
            forward: planner.plan_fft_forward(len),
            inverse: planner.plan_fft_inverse(len),
        }
    }

    fn process(&self, fft: &Arc<dyn Fft<f64>>, buffer: &mut [Complex<f64>]) {
        debug_assert_eq!(buffer.len(), self.len, "buffer length must match plan");
        let scratch_len = fft.get_inplace_scratch_len();
        FFT_SCRATCH.with(|cache| {
            let mut cache = cache.borrow_mut();
            let scratch = cache.entry(scratch_len).or_default();
            if scratch.len() < scratch_len {
                scratch.resize(scratch_len, Complex::new(0.0, 0.0));
            }
            fft.process_with_scratch(buffer, &mut scratch[..scratch_len]);
        });
    }
}

impl OrdinaryFft for PlannedFft {
    fn len(&self) -> usize {
        self.len
    }

    fn forward(&self, buffer: &mut [Complex<f64>]) {
        self.process(&self.forward, buffer);
    }

    fn inverse(&self, buffer: &mut [Complex<f64>]) {
        self.process(&self.inverse, buffer);
    }
}
