use std::f64::consts::PI;

use approx::assert_relative_eq;
use frft::{FrftEngine, FrftError, OrdinaryFft, PlannedFft, frft};
use num_complex::Complex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_vector(len: usize, seed: u64) -> Vec<Complex<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            Complex::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
        .collect()
}

/// Definitional sum `H[n] = sum_k h[k] * exp(sign * 2*pi*i*k*n*alpha)`.
fn direct_frft(input: &[Complex<f64>], alpha: f64, sign: f64) -> Vec<Complex<f64>> {
    let n = input.len();
    (0..n)
        .map(|m| {
            let mut sum = Complex::new(0.0, 0.0);
            for (k, xk) in input.iter().enumerate() {
                let angle = sign * 2.0 * PI * (k * m) as f64 * alpha;
                sum += *xk * Complex::new(0.0, angle).exp();
            }
            sum
        })
        .collect()
}

fn zeros(len: usize) -> Vec<Complex<f64>> {
    vec![Complex::new(0.0, 0.0); len]
}

#[test]
fn alpha_one_over_n_reproduces_the_ordinary_dft() {
    for n in [4usize, 7, 16, 33, 64] {
        let alpha = 1.0 / n as f64;
        let engine = FrftEngine::new(n, alpha).unwrap();
        let x = random_vector(n, 42 + n as u64);

        let mut got = zeros(n);
        engine.forward(&x, &mut got, 1.0).unwrap();

        let want = direct_frft(&x, alpha, -1.0);
        for (g, w) in got.iter().zip(want.iter()) {
            assert!(
                (*g - *w).norm() < 1e-9 * (1.0 + w.norm()),
                "N={n} mismatch: got {g} want {w}"
            );
        }
    }
}

#[test]
fn kronecker_delta_maps_to_all_ones() {
    let engine = FrftEngine::new(4, 0.25).unwrap();
    let mut delta = zeros(4);
    delta[0] = Complex::new(1.0, 0.0);

    let mut out = zeros(4);
    engine.forward(&delta, &mut out, 1.0).unwrap();

    for value in &out {
        assert_relative_eq!(value.re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(value.im, 0.0, epsilon = 1e-9);
    }
}

#[test]
fn backward_uses_the_positive_frequency_kernel() {
    let n = 5;
    let alpha = 0.37;
    let engine = FrftEngine::new(n, alpha).unwrap();
    let x = random_vector(n, 11);

    let mut got = zeros(n);
    engine.backward(&x, &mut got, 1.0).unwrap();

    let want = direct_frft(&x, alpha, 1.0);
    for (g, w) in got.iter().zip(want.iter()) {
        assert!((*g - *w).norm() < 1e-9 * (1.0 + w.norm()));
    }
}

#[test]
fn backward_inverts_forward_at_the_dft_point() {
    // Forward and backward share the engine's alpha; with alpha = 1/N the
    // pair is the DFT and its unnormalized inverse, so scale = 1/N makes the
    // round trip exact.
    let n = 8;
    let engine = FrftEngine::new(n, 1.0 / n as f64).unwrap();
    let x = random_vector(n, 3);

    let mut spectrum = zeros(n);
    engine.forward(&x, &mut spectrum, 1.0).unwrap();

    let mut recovered = zeros(n);
    engine
        .backward(&spectrum, &mut recovered, 1.0 / n as f64)
        .unwrap();

    for (r, original) in recovered.iter().zip(x.iter()) {
        assert!((*r - *original).norm() < 1e-9);
    }
}

#[test]
fn forward_is_linear() {
    let n = 16;
    let alpha = 0.31;
    let engine = FrftEngine::new(n, alpha).unwrap();

    let x = random_vector(n, 21);
    let y = random_vector(n, 22);
    let (a, b) = (2.5, -1.25);

    let combined: Vec<Complex<f64>> = x
        .iter()
        .zip(y.iter())
        .map(|(xk, yk)| *xk * a + *yk * b)
        .collect();

    let mut fx = zeros(n);
    let mut fy = zeros(n);
    let mut fc = zeros(n);
    engine.forward(&x, &mut fx, 1.0).unwrap();
    engine.forward(&y, &mut fy, 1.0).unwrap();
    engine.forward(&combined, &mut fc, 1.0).unwrap();

    for j in 0..n {
        let want = fx[j] * a + fy[j] * b;
        assert!((fc[j] - want).norm() < 1e-9 * (1.0 + want.norm()));
    }
}

#[test]
fn zero_alpha_matches_the_plain_zero_padded_fft_pipeline() {
    let n = 12;
    let x = random_vector(n, 7);
    let engine = FrftEngine::new(n, 0.0).unwrap();

    let mut got = zeros(n);
    engine.forward(&x, &mut got, 1.0).unwrap();

    // Drive the ordinary FFT by hand: zero-padded unweighted input convolved
    // against the transform of an all-ones chirp.
    let fft = PlannedFft::new(2 * n);
    let mut padded = x.clone();
    padded.resize(2 * n, Complex::new(0.0, 0.0));
    fft.forward(&mut padded);

    let mut ones = vec![Complex::new(1.0, 0.0); 2 * n];
    fft.forward(&mut ones);

    for (slot, z) in padded.iter_mut().zip(ones.iter()) {
        *slot *= *z;
    }
    fft.inverse(&mut padded);

    let norm = 1.0 / (2 * n) as f64;
    for j in 0..n {
        let want = padded[j] * norm;
        assert!((got[j] - want).norm() < 1e-9);
    }

    // Analytically, every output degenerates to the input sum.
    let sum: Complex<f64> = x.iter().sum();
    for value in &got {
        assert!((*value - sum).norm() < 1e-9);
    }
}

#[test]
fn scale_factor_multiplies_the_result() {
    let n = 10;
    let engine = FrftEngine::new(n, 0.19).unwrap();
    let x = random_vector(n, 5);

    let mut unit = zeros(n);
    let mut scaled = zeros(n);
    engine.forward(&x, &mut unit, 1.0).unwrap();
    engine.forward(&x, &mut scaled, 2.5).unwrap();

    for (s, u) in scaled.iter().zip(unit.iter()) {
        assert!((*s - *u * 2.5).norm() < 1e-12 * (1.0 + u.norm()));
    }
}

#[test]
fn in_place_overloads_match_out_of_place() {
    let n = 9;
    let engine = FrftEngine::new(n, 0.23).unwrap();
    let x = random_vector(n, 17);

    let mut expected = zeros(n);
    engine.forward(&x, &mut expected, 1.0).unwrap();

    let mut data = x.clone();
    engine.forward_in_place(&mut data, 1.0).unwrap();
    assert_eq!(data, expected);

    engine.backward(&x, &mut expected, 0.5).unwrap();
    let mut data = x.clone();
    engine.backward_in_place(&mut data, 0.5).unwrap();
    assert_eq!(data, expected);
}

#[test]
fn set_alpha_matches_a_freshly_built_engine() {
    let n = 14;
    let target = 1.0 / n as f64;

    let mut reconfigured = FrftEngine::new(n, 0.9).unwrap();
    reconfigured.set_alpha(target);
    let fresh = FrftEngine::new(n, target).unwrap();

    let x = random_vector(n, 29);
    let mut from_reconfigured = zeros(n);
    let mut from_fresh = zeros(n);
    reconfigured
        .forward(&x, &mut from_reconfigured, 1.0)
        .unwrap();
    fresh.forward(&x, &mut from_fresh, 1.0).unwrap();

    assert_eq!(from_reconfigured, from_fresh);
}

#[test]
fn one_shot_helper_agrees_with_the_engine() {
    let n = 6;
    let alpha = 0.41;
    let x = random_vector(n, 13);

    let engine = FrftEngine::new(n, alpha).unwrap();
    let mut want = zeros(n);
    engine.forward(&x, &mut want, 1.0).unwrap();

    assert_eq!(frft(&x, alpha), want);
}

#[test]
fn custom_fft_factory_receives_the_padded_length() {
    let n = 6;
    let engine = FrftEngine::with_fft(n, 0.25, |padded| {
        assert_eq!(padded, 2 * n);
        std::sync::Arc::new(PlannedFft::new(padded)) as std::sync::Arc<dyn OrdinaryFft>
    })
    .unwrap();

    let x = random_vector(n, 31);
    let mut via_factory = zeros(n);
    engine.forward(&x, &mut via_factory, 1.0).unwrap();

    assert_eq!(via_factory, frft(&x, 0.25));
}

#[test]
fn short_slices_fail_with_precondition_violation() {
    let engine = FrftEngine::new(8, 0.1).unwrap();
    let short = zeros(4);
    let mut out = zeros(8);

    assert!(matches!(
        engine.forward(&short, &mut out, 1.0),
        Err(FrftError::PreconditionViolation(_))
    ));
    assert!(matches!(
        engine.backward(&short, &mut out, 1.0),
        Err(FrftError::PreconditionViolation(_))
    ));
    assert!(matches!(
        engine.forward_in_place(&mut zeros(4), 1.0),
        Err(FrftError::PreconditionViolation(_))
    ));
}
