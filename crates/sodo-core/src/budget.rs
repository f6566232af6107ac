//! Monotonic budgets gating mistakes and hints.

/// Mistakes allowed before the solution view is offered.
pub const MISTAKE_CEILING: u32 = 5;

/// Hints available per game.
pub const HINT_CEILING: u32 = 3;

/// A counter with a fixed ceiling.
///
/// The count only ever grows within a game. Reaching the ceiling is reported
/// exactly once, by the [`record`](Self::record) call that reaches it; later
/// calls keep counting but report [`BudgetEvent::Counted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    count: u32,
    ceiling: u32,
}

/// Result of recording one use against a [`Budget`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum BudgetEvent {
    /// The count grew but did not just reach the ceiling.
    Counted,
    /// This use brought the count to exactly the ceiling.
    ReachedCeiling,
}

impl Budget {
    /// Creates an empty budget with the given ceiling.
    #[must_use]
    pub const fn new(ceiling: u32) -> Self {
        Self { count: 0, ceiling }
    }

    /// Budget for wrong entries.
    #[must_use]
    pub const fn mistakes() -> Self {
        Self::new(MISTAKE_CEILING)
    }

    /// Budget for hint requests.
    #[must_use]
    pub const fn hints() -> Self {
        Self::new(HINT_CEILING)
    }

    /// Uses recorded so far.
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The fixed ceiling.
    #[must_use]
    pub const fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Uses left before the ceiling; zero once exhausted.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.ceiling.saturating_sub(self.count)
    }

    /// Whether the ceiling has been reached.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.count >= self.ceiling
    }

    /// Records one use.
    pub fn record(&mut self) -> BudgetEvent {
        self.count = self.count.saturating_add(1);
        if self.count == self.ceiling {
            BudgetEvent::ReachedCeiling
        } else {
            BudgetEvent::Counted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaching_ceiling_is_reported_once() {
        let mut budget = Budget::mistakes();
        for _ in 0..4 {
            assert_eq!(budget.record(), BudgetEvent::Counted);
        }
        assert!(!budget.is_exhausted());
        assert_eq!(budget.remaining(), 1);

        assert_eq!(budget.record(), BudgetEvent::ReachedCeiling);
        assert!(budget.is_exhausted());

        assert_eq!(budget.record(), BudgetEvent::Counted);
        assert_eq!(budget.count(), 6);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn hint_budget_is_exhausted_after_three() {
        let mut budget = Budget::hints();
        budget.record();
        budget.record();
        assert!(!budget.is_exhausted());
        budget.record();
        assert!(budget.is_exhausted());
    }
}
