use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// `(completed, total)` pair for one phase.
///
/// Invariant: `completed <= total`. Deserialized values are clamped the
/// same way as [`ProgressScore::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawScore")]
pub struct ProgressScore {
    completed: u32,
    total: u32,
}

#[derive(Deserialize)]
struct RawScore {
    completed: u32,
    total: u32,
}

impl From<RawScore> for ProgressScore {
    fn from(raw: RawScore) -> Self {
        Self::new(raw.completed, raw.total)
    }
}

impl ProgressScore {
    /// Build a score, clamping `completed` to `total`.
    #[must_use]
    pub fn new(completed: u32, total: u32) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    #[must_use]
    pub const fn completed(&self) -> u32 {
        self.completed
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// A phase with nothing to do is not considered complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// Whole-number percentage, 0 when there is nothing to do.
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.completed * 100 / self.total
        }
    }

    /// Record one evaluated task.
    pub fn record(&mut self, done: bool) {
        self.total += 1;
        if done {
            self.completed += 1;
        }
    }
}

impl Add for ProgressScore {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            completed: self.completed + rhs.completed,
            total: self.total + rhs.total,
        }
    }
}

impl AddAssign for ProgressScore {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::fmt::Display for ProgressScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}
