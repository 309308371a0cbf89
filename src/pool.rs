//! Scratch-buffer pool shared by concurrent transform calls.

use std::sync::Mutex;

use num_complex::Complex;

/// Grow-only pool of fixed-length complex scratch buffers.
///
/// `acquire` hands out an idle buffer, allocating a fresh one when the free
/// list is empty; `release` returns it for reuse. The pool never shrinks, so
/// the number of live buffers settles at the peak number of concurrent
/// holders. The free list is the engine's only shared-mutable state.
#[derive(Debug)]
pub(crate) struct ScratchPool {
    buffer_len: usize,
    idle: Mutex<Vec<Vec<Complex<f64>>>>,
}

impl ScratchPool {
    pub(crate) fn new(buffer_len: usize) -> Self {
        Self {
            buffer_len,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Takes ownership of an idle buffer, or allocates when none is free.
    pub(crate) fn acquire(&self) -> Vec<Complex<f64>> {
        let reused = self.idle.lock().expect("scratch pool lock poisoned").pop();
        reused.unwrap_or_else(|| vec![Complex::new(0.0, 0.0); self.buffer_len])
    }

    /// Returns a buffer to the free list. Callers must not touch it after
    /// this call.
    pub(crate) fn release(&self, buffer: Vec<Complex<f64>>) {
        debug_assert_eq!(buffer.len(), self.buffer_len);
        self.idle
            .lock()
            .expect("scratch pool lock poisoned")
            .push(buffer);
    }

    #[cfg(test)]
    fn idle_count(&self) -> usize {
        self.idle.lock().expect("scratch pool lock poisoned").len()
    }
}
