//! Five-sample bracket used by the closest-point search.

/// Five `(time, squared distance)` samples, ascending in time.
///
/// Slot 2 is the best interior sample, slots 0 and 4 bound the bracket and
/// slots 1 and 3 are the midpoints refilled every round.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bracket {
    times: [f64; 5],
    distances: [f64; 5],
}

impl Bracket {
    /// Bracket spanning `[0, 1]` from the distances sampled at `t = 0, 0.5, 1`.
    ///
    /// The midpoint slots start at infinity so a search with zero rounds only
    /// ever reports one of the three seeds.
    pub(crate) fn seed(d_start: f64, d_mid: f64, d_end: f64) -> Self {
        Self {
            times: [0.0, 0.25, 0.5, 0.75, 1.0],
            distances: [d_start, f64::INFINITY, d_mid, f64::INFINITY, d_end],
        }
    }

    /// Sample the midpoints of `[t0, t2]` and `[t2, t4]` into slots 1 and 3.
    pub(crate) fn fill_midpoints(&mut self, sample: impl Fn(f64) -> f64) {
        self.times[1] = (self.times[0] + self.times[2]) * 0.5;
        self.times[3] = (self.times[2] + self.times[4]) * 0.5;
        self.distances[1] = sample(self.times[1]);
        self.distances[3] = sample(self.times[3]);
    }

    /// Re-center on the best interior sample and its two neighbours.
    ///
    /// Slots 1 and 3 keep their previous (still valid) samples until the next
    /// [`Bracket::fill_midpoints`].
    pub(crate) fn zoom(&mut self) {
        let m = self.min_index().clamp(1, 3);
        let lo = (self.times[m - 1], self.distances[m - 1]);
        let mid = (self.times[m], self.distances[m]);
        let hi = (self.times[m + 1], self.distances[m + 1]);
        (self.times[0], self.distances[0]) = lo;
        (self.times[2], self.distances[2]) = mid;
        (self.times[4], self.distances[4]) = hi;
    }

    /// Index of the smallest distance.
    ///
    /// Starts from slot 2 and scans 0, 1, 3, 4; a slot only takes over on a
    /// strictly smaller distance, so ties keep the earlier candidate.
    pub(crate) fn min_index(&self) -> usize {
        let mut best = 2;
        for i in [0, 1, 3, 4] {
            if self.distances[i] < self.distances[best] {
                best = i;
            }
        }
        best
    }

    /// `(time, squared distance)` of the best stored sample.
    pub(crate) fn best(&self) -> (f64, f64) {
        let i = self.min_index();
        (self.times[i], self.distances[i])
    }

    /// Width of the parameter interval `[t0, t4]`.
    pub(crate) fn width(&self) -> f64 {
        self.times[4] - self.times[0]
    }

    #[cfg(test)]
    fn from_samples(times: [f64; 5], distances: [f64; 5]) -> Self {
        Self { times, distances }
    }
}
