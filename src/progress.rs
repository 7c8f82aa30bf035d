// ---------------------------------------------------------------------------
// Progress reporter – completion fraction for row ingestion
// ---------------------------------------------------------------------------

/// Tracks rows ingested out of the total, exposed as a percentage in
/// `[0, 100]` rounded to one decimal place.
///
/// The fraction is monotonically non-decreasing within one run and reaches
/// exactly 100 only upon completion; consumers treat any value below 100 as
/// "still running" and a fresh 0 as a new run starting.
#[derive(Debug)]
pub struct ProgressReporter {
    total: usize,
    done: usize,
}

impl ProgressReporter {
    pub fn new(total: usize) -> Self {
        ProgressReporter { total, done: 0 }
    }

    /// Record one more ingested row. Saturates at `total`.
    pub fn advance(&mut self) {
        if self.done < self.total {
            self.done += 1;
        }
    }

    /// Current completion percentage, one decimal place.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        (self.done as f64 / self.total as f64 * 1000.0).round() / 10.0
    }

    pub fn is_complete(&self) -> bool {
        self.done == self.total
    }
}
