//! Letter budgets
//!
//! A `LetterBudget` caps how many times each letter may appear in an
//! accepted word. Letters absent from the puzzle have budget 0, so any
//! out-of-alphabet letter rejects the word.

/// Sentinel budget for letters that may be reused without limit
const UNLIMITED: u8 = u8::MAX;

/// Letter-reuse policy for a puzzle
///
/// Game variants disagree on this rule, so it is explicit configuration
/// rather than a fixed behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BudgetPolicy {
    /// Each letter may be used at most as many times as it appears in the
    /// base word
    #[default]
    BoundedByOccurrence,
    /// Any puzzle letter may be reused freely (the classic rule)
    UnlimitedReuse,
}

impl BudgetPolicy {
    /// Create a policy from a name string
    ///
    /// Supported names: "bounded", "bounded-by-occurrence", "unlimited",
    /// "unlimited-reuse". Defaults to bounded if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "unlimited" | "unlimited-reuse" => Self::UnlimitedReuse,
            _ => Self::BoundedByOccurrence,
        }
    }
}

/// Per-letter usage caps derived from a puzzle's letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBudget {
    limits: [u8; 26],
}

impl LetterBudget {
    /// Derive the budget for a set of puzzle letters under a policy
    pub fn new(letters: &[u8], policy: BudgetPolicy) -> Self {
        let mut limits = [0u8; 26];
        for &letter in letters {
            debug_assert!(letter.is_ascii_lowercase());
            let idx = usize::from(letter - b'a');
            limits[idx] = match policy {
                BudgetPolicy::BoundedByOccurrence => limits[idx].saturating_add(1),
                BudgetPolicy::UnlimitedReuse => UNLIMITED,
            };
        }
        Self { limits }
    }

    /// Maximum number of times `letter` may appear in an accepted word
    ///
    /// Returns 0 for anything that is not a lowercase ASCII letter.
    #[inline]
    #[must_use]
    pub fn limit(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.limits[usize::from(letter - b'a')]
        } else {
            0
        }
    }

    /// Check that every letter of `word` stays within budget
    #[must_use]
    pub fn allows(&self, word: &str) -> bool {
        let mut used = [0u8; 26];
        for byte in word.bytes() {
            if !byte.is_ascii_lowercase() {
                return false;
            }
            let idx = usize::from(byte - b'a');
            used[idx] = used[idx].saturating_add(1);
            if used[idx] > self.limits[idx] {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_budget_counts_occurrences() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::BoundedByOccurrence);
        assert_eq!(budget.limit(b'd'), 1);
        assert_eq!(budget.limit(b'a'), 1);
        assert_eq!(budget.limit(b'z'), 0);
    }

    #[test]
    fn bounded_budget_stacks_duplicates() {
        let budget = LetterBudget::new(b"letter", BudgetPolicy::BoundedByOccurrence);
        assert_eq!(budget.limit(b't'), 2);
        assert_eq!(budget.limit(b'e'), 2);
        assert_eq!(budget.limit(b'l'), 1);
    }

    #[test]
    fn unlimited_budget_uses_sentinel() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::UnlimitedReuse);
        assert_eq!(budget.limit(b'd'), u8::MAX);
        assert_eq!(budget.limit(b'z'), 0); // still 0 for absent letters
    }

    #[test]
    fn allows_within_budget() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::BoundedByOccurrence);
        assert!(budget.allows("garden"));
        assert!(budget.allows("sound"));
    }

    #[test]
    fn allows_rejects_overused_letter() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::BoundedByOccurrence);
        // Two 'n's, but "dangerous" has only one
        assert!(!budget.allows("announce"));
    }

    #[test]
    fn allows_rejects_out_of_alphabet_letter() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::BoundedByOccurrence);
        assert!(!budget.allows("grapes")); // 'p' is not a puzzle letter
    }

    #[test]
    fn allows_rejects_non_letter_bytes() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::UnlimitedReuse);
        assert!(!budget.allows("gr4nd"));
        assert!(!budget.allows("gra nd"));
    }

    #[test]
    fn unlimited_allows_heavy_reuse() {
        let budget = LetterBudget::new(b"dangerous", BudgetPolicy::UnlimitedReuse);
        assert!(budget.allows("nanosand")); // reuses n, a, s freely
    }

    #[test]
    fn policy_from_name() {
        assert_eq!(
            BudgetPolicy::from_name("unlimited"),
            BudgetPolicy::UnlimitedReuse
        );
        assert_eq!(
            BudgetPolicy::from_name("bounded"),
            BudgetPolicy::BoundedByOccurrence
        );
        assert_eq!(
            BudgetPolicy::from_name("anything-else"),
            BudgetPolicy::BoundedByOccurrence
        );
    }
}
