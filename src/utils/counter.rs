//! A simple counter for tracking generation results.

/// Totals of a generation run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    written: usize,
    entries: usize,
    failed: usize,
}

impl Counter {
    /// Creates a new Counter instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a written file holding `entries` dictionary entries.
    pub fn inc_written(&mut self, entries: usize) {
        self.written += 1;
        self.entries += entries;
    }

    /// Increments the count of failed units.
    pub fn inc_failed(&mut self) {
        self.failed += 1;
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    pub fn failed(&self) -> usize {
        self.failed
    }
}

impl std::fmt::Display for Counter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Written: {}, Entries: {}, Failed: {}",
            self.written, self.entries, self.failed,
        )
    }
}
