//! Best-of-R wall-clock timing.
//!
//! Each trial clones the input outside the timed region, runs the algorithm
//! once and passes its output through `black_box`. The shortest trial wins.

use std::hint::black_box;
use std::time::{Duration, Instant};

use super::cpu_affinity::CpuPinGuard;
use crate::config::DEFAULT_REPEATS;

// ============================================================================
// Configuration
// ============================================================================

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Let the scheduler move the thread freely
    #[default]
    Off,
    /// Pin once for all trials of one measurement
    Global,
    /// Pin/unpin around each trial
    PerTrial,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of trials per measurement (default: 3)
    pub repeats: usize,
    /// CPU pinning strategy (default: Off)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            pin_strategy: PinStrategy::default(),
        }
    }
}

// ============================================================================
// Measurement
// ============================================================================

/// Time a single call of `algorithm` on a fresh copy of `input`.
#[inline(never)]
pub fn time_once<I, O, F>(algorithm: &F, input: &I) -> Duration
where
    I: Clone,
    F: Fn(I) -> O,
{
    let data = input.clone();
    let start = Instant::now();
    let output = algorithm(black_box(data));
    let elapsed = start.elapsed();
    drop(black_box(output));
    elapsed
}

/// Run `algorithm(input)` `config.repeats` times and return the minimum
/// elapsed wall-clock time.
///
/// A `repeats` of zero is treated as one trial. There is no timeout: a
/// pathological input blocks until the algorithm returns.
pub fn measure<I, O, F>(algorithm: F, input: &I, config: &TimingConfig) -> Duration
where
    I: Clone,
    F: Fn(I) -> O,
{
    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    let mut best: Option<Duration> = None;
    for trial in 0..config.repeats.max(1) {
        let _trial_pin = (config.pin_strategy == PinStrategy::PerTrial).then(CpuPinGuard::new);
        let elapsed = time_once(&algorithm, input);
        tracing::debug!(trial, nanos = elapsed.as_nanos() as u64, "trial finished");

        best = Some(match best {
            Some(current) if current <= elapsed => current,
            _ => elapsed,
        });
    }

    best.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_measure_runs_each_trial() {
        let calls = Cell::new(0);
        let config = TimingConfig {
            repeats: 5,
            pin_strategy: PinStrategy::Off,
        };

        let elapsed = measure(
            |n: u64| {
                calls.set(calls.get() + 1);
                n * 2
            },
            &21,
            &config,
        );

        assert_eq!(calls.get(), 5);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_measure_zero_repeats_runs_once() {
        let calls = Cell::new(0);
        let config = TimingConfig {
            repeats: 0,
            pin_strategy: PinStrategy::Off,
        };

        measure(|_: u8| calls.set(calls.get() + 1), &0, &config);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_measure_gives_each_trial_a_fresh_copy() {
        let input = vec![3u64, 1, 2];
        let config = TimingConfig {
            repeats: 3,
            pin_strategy: PinStrategy::PerTrial,
        };

        measure(
            |mut data: Vec<u64>| {
                assert_eq!(data, vec![3, 1, 2], "trial saw a mutated input");
                data.sort_unstable();
                data
            },
            &input,
            &config,
        );

        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn test_measure_keeps_minimum() {
        let sleeps = [8u64, 1, 4];
        let trial = Cell::new(0usize);
        let config = TimingConfig {
            repeats: 3,
            pin_strategy: PinStrategy::Global,
        };

        let best = measure(
            |_: ()| {
                let ms = sleeps[trial.get()];
                trial.set(trial.get() + 1);
                std::thread::sleep(Duration::from_millis(ms));
            },
            &(),
            &config,
        );

        assert!(best >= Duration::from_millis(1));
        assert!(best < Duration::from_millis(8));
    }
}
