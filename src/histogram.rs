//! Reservoir-sampling histogram with quantile estimation.
//!
//! Keeps at most [`MAX_SAMPLES`] values; once full, each new value replaces a
//! uniformly chosen slot so the reservoir stays an unbiased sample of the
//! whole stream. Quantiles are nearest-rank over the sorted reservoir.

use alloc::vec::Vec;

const MAX_SAMPLES: usize = 1000;

pub struct Histogram {
    max: f64,
    min: f64,
    count: u64,
    vals: Vec<f64>,
    tmp: Vec<f64>,
    rng: fastrand::Rng,
}

impl Histogram {
    pub fn new() -> Histogram {
        let mut h = Histogram {
            max: f64::NEG_INFINITY,
            min: f64::INFINITY,
            count: 0,
            vals: Vec::new(),
            tmp: Vec::new(),
            rng: fastrand::Rng::with_seed(1),
        };
        h.reset();
        h
    }

    pub fn reset(&mut self) {
        self.max = f64::NEG_INFINITY;
        self.min = f64::INFINITY;
        self.count = 0;

        if !self.vals.is_empty() {
            self.vals.clear();
            self.tmp.clear();
        } else {
            // Free the buffers of an unused histogram.
            self.vals = Vec::new();
            self.tmp = Vec::new();
        }

        // Reseed so the same update sequence always yields the same
        // quantiles.
        self.rng = fastrand::Rng::with_seed(1);
    }

    /// Records `v` in the stream.
    pub fn update(&mut self, v: f64) {
        if v > self.max {
            self.max = v;
        }
        if v < self.min {
            self.min = v;
        }

        self.count += 1;
        if self.vals.len() < MAX_SAMPLES {
            self.vals.push(v);
        } else {
            // Draw from the full u64 count; truncating it would leave an
            // empty range every 2^32 updates.
            let n = self.rng.u64(0..self.count) as usize;
            if n < self.vals.len() {
                self.vals[n] = v;
            }
        }
    }

    /// Estimated quantile for `phi` in `[0, 1]`.
    pub fn quantile(&mut self, phi: f64) -> f64 {
        self.sort_samples();
        self.sorted_quantile(phi)
    }

    /// Appends the estimated quantile for each `phi` to `dst`, sorting the
    /// reservoir once. Appending lets callers reuse one buffer across calls.
    pub fn quantiles(&mut self, dst: &mut Vec<f64>, phis: &[f64]) {
        self.sort_samples();
        for &phi in phis {
            dst.push(self.sorted_quantile(phi));
        }
    }

    fn sort_samples(&mut self) {
        self.tmp.clear();
        self.tmp.extend_from_slice(&self.vals);
        self.tmp.sort_unstable_by(f64::total_cmp);
    }

    fn sorted_quantile(&self, phi: f64) -> f64 {
        if self.tmp.is_empty() || phi.is_nan() {
            return f64::NAN;
        }
        if phi <= 0.0 {
            return self.min;
        }
        if phi >= 1.0 {
            return self.max;
        }
        let idx = (phi * (self.tmp.len() - 1) as f64 + 0.5) as usize;
        self.tmp[idx.min(self.tmp.len() - 1)]
    }

    /// Folds the given histograms into one, concatenating their reservoirs.
    pub fn merge(hs: &[Histogram]) -> Histogram {
        let n = hs.iter().map(|h| h.vals.len()).sum();

        let mut t = Histogram::new();
        t.vals = Vec::with_capacity(n);

        for h in hs {
            t.vals.extend_from_slice(&h.vals);
            t.count += h.count;
            if t.max < h.max {
                t.max = h.max;
            }
            if t.min > h.min {
                t.min = h.min;
            }
        }
        t
    }
}

impl Default for Histogram {
    fn default() -> Histogram {
        Histogram::new()
    }
}
