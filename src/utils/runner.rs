//! The measurement pass: every algorithm of a lab over every input size.

use std::time::Duration;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::registry::Lab;

/// Best-of-R time for one (algorithm, size) pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimingSample {
    pub size: usize,
    pub elapsed: Duration,
}

impl TimingSample {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// All samples of one algorithm, in input-size order
#[derive(Clone, Debug)]
pub struct ResultSet {
    pub key: &'static str,
    pub title: &'static str,
    pub samples: Vec<TimingSample>,
}

impl ResultSet {
    /// `(n, seconds)` pairs, ready for tables and charts
    pub fn rows(&self) -> Vec<(usize, f64)> {
        self.samples.iter().map(|s| (s.size, s.seconds())).collect()
    }
}

/// One result set per algorithm, in registration order
#[derive(Clone, Debug, Default)]
pub struct ResultCollection {
    sets: Vec<ResultSet>,
}

impl ResultCollection {
    pub fn push(&mut self, set: ResultSet) {
        self.sets.push(set);
    }

    /// Find a result set by algorithm key
    pub fn get(&self, key: &str) -> Option<&ResultSet> {
        self.sets.iter().find(|s| s.key == key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultSet> {
        self.sets.iter()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn as_slice(&self) -> &[ResultSet] {
        &self.sets
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a ResultSet;
    type IntoIter = std::slice::Iter<'a, ResultSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sets.iter()
    }
}

/// Measure every algorithm of `lab` at every size of `config`, calling
/// `on_result` as soon as an algorithm has gone through all sizes.
///
/// The first error, from a measurement or from the callback, stops the run.
pub fn run_all_with<F>(lab: &dyn Lab, config: &BenchConfig, mut on_result: F) -> Result<ResultCollection>
where
    F: FnMut(&ResultSet) -> Result<()>,
{
    config.validate()?;

    let mut closures = lab.get_algorithm_closures(&config.sizes, config.seed, &config.timing);
    let mut collection = ResultCollection::default();

    for closure in closures.iter_mut() {
        let mut samples = Vec::with_capacity(config.sizes.len());
        for &size in &config.sizes {
            let elapsed = (closure.run)(size)?;
            tracing::info!(
                algorithm = closure.key,
                n = size,
                seconds = elapsed.as_secs_f64(),
                "measured"
            );
            samples.push(TimingSample { size, elapsed });
        }

        let set = ResultSet {
            key: closure.key,
            title: closure.title,
            samples,
        };
        on_result(&set)?;
        collection.push(set);
    }

    Ok(collection)
}

/// Measure everything without side effects beyond CPU time
pub fn run_all(lab: &dyn Lab, config: &BenchConfig) -> Result<ResultCollection> {
    run_all_with(lab, config, |_| Ok(()))
}
