//! Synthetic ECG waveform generation
//!
//! Produces a coarse caricature of a cardiac cycle: single-sample spikes for
//! the P, Q, R, S and T features repeating every [`CYCLE_LENGTH`] samples,
//! with uniform baseline noise added to every sample. The shape is fixed;
//! only the noise varies between calls.
//!
//! # Cycle layout
//!
//! | Phase | Feature | Amplitude |
//! |-------|---------|-----------|
//! | 10 | P wave (Gaussian, width 3) | 0.3 |
//! | 25 | Q wave | -0.2 |
//! | 27 | R wave | 1.5 |
//! | 29 | S wave | -0.4 |
//! | 40 | T wave (Gaussian, width 4) | 0.4 |
//!
//! A requested length that is not a multiple of the cycle length simply ends
//! with a truncated cycle.

pub mod export;

use rand::Rng;

/// Number of samples in one synthetic cardiac cycle
pub const CYCLE_LENGTH: usize = 50;

/// Sample count used by the regenerate trigger
pub const DEFAULT_LENGTH: usize = 200;

/// Half-width of the uniform baseline noise
pub const NOISE_AMPLITUDE: f64 = 0.05;

const P_WAVE_PHASE: usize = 10;
const P_WAVE_PEAK: f64 = 0.3;
const P_WAVE_WIDTH: f64 = 3.0;

const Q_WAVE_PHASE: usize = 25;
const Q_WAVE_AMPLITUDE: f64 = -0.2;

const R_WAVE_PHASE: usize = 27;
const R_WAVE_AMPLITUDE: f64 = 1.5;

const S_WAVE_PHASE: usize = 29;
const S_WAVE_AMPLITUDE: f64 = -0.4;

const T_WAVE_PHASE: usize = 40;
const T_WAVE_PEAK: f64 = 0.4;
const T_WAVE_WIDTH: f64 = 4.0;

/// A generated sample sequence. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Waveform {
    samples: Vec<f64>,
}

impl Waveform {
    pub fn from_samples(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample points as `[time, amplitude]` pairs for plotting
    pub fn as_plot_points(&self, start_time: f64, seconds_per_sample: f64) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, &v)| [start_time + i as f64 * seconds_per_sample, v])
            .collect()
    }
}

/// Gaussian-shaped bump `peak * exp(-((x - center) / width)^2)`
fn gaussian(x: f64, center: f64, width: f64, peak: f64) -> f64 {
    peak * (-((x - center) / width).powi(2)).exp()
}

/// Noise-free amplitude at sample index `i`
pub fn baseline_at(i: usize) -> f64 {
    let phase = i % CYCLE_LENGTH;
    let x = phase as f64;
    let mut value = 0.0;

    if phase == P_WAVE_PHASE {
        value += gaussian(x, P_WAVE_PHASE as f64, P_WAVE_WIDTH, P_WAVE_PEAK);
    }

    match phase {
        Q_WAVE_PHASE => value += Q_WAVE_AMPLITUDE,
        R_WAVE_PHASE => value += R_WAVE_AMPLITUDE,
        S_WAVE_PHASE => value += S_WAVE_AMPLITUDE,
        _ => {}
    }

    if phase == T_WAVE_PHASE {
        value += gaussian(x, T_WAVE_PHASE as f64, T_WAVE_WIDTH, T_WAVE_PEAK);
    }

    value
}

/// Stateless generator for synthetic ECG segments
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveformGenerator;

impl WaveformGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate `length` samples using the thread-local RNG for noise
    pub fn generate(&self, length: usize) -> Waveform {
        self.generate_with_rng(length, &mut rand::thread_rng())
    }

    /// Generate `length` samples drawing noise from `rng`
    pub fn generate_with_rng<R: Rng>(&self, length: usize, rng: &mut R) -> Waveform {
        let samples = (0..length)
            .map(|i| baseline_at(i) + rng.gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE))
            .collect();
        tracing::debug!("Generated waveform with {} samples", length);
        Waveform { samples }
    }

    /// The deterministic component of a waveform of `length` samples
    pub fn baseline(&self, length: usize) -> Waveform {
        Waveform {
            samples: (0..length).map(baseline_at).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_length() {
        let generator = WaveformGenerator::new();
        assert_eq!(generator.generate(DEFAULT_LENGTH).len(), 200);
        assert_eq!(generator.generate(73).len(), 73);
        assert!(generator.generate(0).is_empty());
    }

    #[test]
    fn test_baseline_features() {
        assert_eq!(baseline_at(10), 0.3);
        assert_eq!(baseline_at(25), -0.2);
        assert_eq!(baseline_at(27), 1.5);
        assert_eq!(baseline_at(29), -0.4);
        assert_eq!(baseline_at(40), 0.4);
        assert_eq!(baseline_at(0), 0.0);
        assert_eq!(baseline_at(26), 0.0);
        assert_eq!(baseline_at(39), 0.0);
    }

    #[test]
    fn test_baseline_repeats_every_cycle() {
        for i in 0..CYCLE_LENGTH {
            assert_eq!(baseline_at(i), baseline_at(i + CYCLE_LENGTH));
            assert_eq!(baseline_at(i), baseline_at(i + 3 * CYCLE_LENGTH));
        }
    }

    #[test]
    fn test_noise_within_bounds() {
        let generator = WaveformGenerator::new();
        let mut rng = StdRng::seed_from_u64(42);
        let wave = generator.generate_with_rng(500, &mut rng);
        for (i, v) in wave.samples().iter().enumerate() {
            let noise = v - baseline_at(i);
            assert!(noise.abs() <= NOISE_AMPLITUDE + 1e-12, "sample {} noise {}", i, noise);
        }
    }

    #[test]
    fn test_r_peaks_near_1_5() {
        let wave = WaveformGenerator::new().generate(200);
        for i in [27, 77, 127, 177] {
            assert!((wave.samples()[i] - 1.5).abs() <= NOISE_AMPLITUDE + 1e-12);
        }
        assert!(wave.samples()[0].abs() <= NOISE_AMPLITUDE + 1e-12);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let generator = WaveformGenerator::new();
        let a = generator.generate_with_rng(120, &mut StdRng::seed_from_u64(7));
        let b = generator.generate_with_rng(120, &mut StdRng::seed_from_u64(7));
        let c = generator.generate_with_rng(120, &mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_truncated_final_cycle() {
        let wave = WaveformGenerator::new().baseline(128);
        assert_eq!(wave.len(), 128);
        assert_eq!(wave.samples()[127], 1.5);
    }

    #[test]
    fn test_plot_points_time_axis() {
        let wave = Waveform::from_samples(vec![0.0, 1.0, 2.0]);
        let points = wave.as_plot_points(12.0, 0.5);
        assert_eq!(points, vec![[12.0, 0.0], [12.5, 1.0], [13.0, 2.0]]);
    }
}
