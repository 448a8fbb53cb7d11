//! Staleness tracking for inactive cutting planes

/// Counts, for every live plane, the consecutive rounds in which its dual
/// variable stayed negligible.
pub struct IcpTracker {
    counter: Vec<usize>,
    clean_after: usize,
    beta_eps: f64,
}

impl IcpTracker {
    pub fn new(buf_size: usize, clean_after: usize, beta_eps: f64) -> IcpTracker {
        IcpTracker {
            counter: Vec::with_capacity(buf_size),
            clean_after,
            beta_eps,
        }
    }

    /// Registers a freshly appended plane.
    pub fn push(&mut self) {
        self.counter.push(0);
    }

    /// Updates the counters from the current dual variables and returns
    /// the number of non-negligible entries.
    pub fn observe(&mut self, beta: &[f64]) -> usize {
        let mut nza = 0;
        for (cnt, &bi) in self.counter.iter_mut().zip(beta.iter()) {
            if bi > self.beta_eps {
                nza += 1;
                *cnt = 0;
            } else {
                *cnt += 1;
            }
        }
        nza
    }

    /// Returns the indices of planes that have not gone stale, in order.
    pub fn survivors(&self) -> Vec<usize> {
        (0..self.counter.len())
            .filter(|&i| self.counter[i] < self.clean_after)
            .collect()
    }

    /// Drops the counters of removed planes, in lock-step with the store.
    pub fn compact(&mut self, keep: &[usize]) {
        for (ni, &oi) in keep.iter().enumerate() {
            self.counter[ni] = self.counter[oi];
        }
        self.counter.truncate(keep.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_reset_on_active_planes() {
        let mut icp = IcpTracker::new(4, 2, 0.0);
        icp.push();
        icp.push();
        assert_eq!(icp.observe(&[0.5, 0.0]), 1);
        assert_eq!(icp.observe(&[0.0, 0.5]), 1);
        // plane 0 inactive for one round only, both still survive
        assert_eq!(icp.survivors(), vec![0, 1]);
        assert_eq!(icp.observe(&[0.0, 0.5]), 1);
        assert_eq!(icp.survivors(), vec![1]);
    }

    #[test]
    fn negligibility_threshold_is_respected() {
        let mut icp = IcpTracker::new(2, 1, 1e-6);
        icp.push();
        icp.push();
        assert_eq!(icp.observe(&[1e-9, 1e-3]), 1);
        assert_eq!(icp.survivors(), vec![1]);
    }

    #[test]
    fn compact_keeps_counters_aligned() {
        let mut icp = IcpTracker::new(3, 3, 0.0);
        for _ in 0..3 {
            icp.push();
        }
        icp.observe(&[0.0, 1.0, 0.0]);
        icp.compact(&[1, 2]);
        icp.observe(&[1.0, 0.0]);
        icp.observe(&[1.0, 0.0]);
        // old plane 2 carried one stale round across the compaction
        assert_eq!(icp.survivors(), vec![0]);
    }
}
