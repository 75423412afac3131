//! Dual-handle salary range, in thousands per year.

/// Lowest value either handle can take.
pub const SALARY_FLOOR: u32 = 30;
/// Highest value either handle can take.
pub const SALARY_CEILING: u32 = 250;
/// Separation applied when one handle is dragged onto or past the other.
pub const MIN_SALARY_GAP: u32 = 10;
pub const DEFAULT_MIN_SALARY: u32 = 50;
pub const DEFAULT_MAX_SALARY: u32 = 150;

/// Two linked bounds. `floor <= min < max <= ceiling` holds after every edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    min: u32,
    max: u32,
}

impl Default for SalaryRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SALARY,
            max: DEFAULT_MAX_SALARY,
        }
    }
}

impl SalaryRange {
    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Moves the lower handle. A value at or above `max` lands `MIN_SALARY_GAP` below it.
    pub fn set_min(&mut self, value: u32) {
        let value = value.clamp(SALARY_FLOOR, SALARY_CEILING);
        self.min = if value < self.max {
            value
        } else {
            self.max.saturating_sub(MIN_SALARY_GAP).max(SALARY_FLOOR)
        };
    }

    /// Moves the upper handle. A value at or below `min` lands `MIN_SALARY_GAP` above it.
    pub fn set_max(&mut self, value: u32) {
        let value = value.clamp(SALARY_FLOOR, SALARY_CEILING);
        self.max = if value > self.min {
            value
        } else {
            (self.min + MIN_SALARY_GAP).min(SALARY_CEILING)
        };
    }

    /// `$<min>k-$<max>k`
    pub fn label(&self) -> String {
        format!("${}k-${}k", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordered(range: &SalaryRange) {
        assert!(range.min() < range.max(), "{range:?}");
        assert!(range.min() >= SALARY_FLOOR, "{range:?}");
        assert!(range.max() <= SALARY_CEILING, "{range:?}");
    }

    #[test]
    fn test_set_min_below_max_is_taken() {
        let mut range = SalaryRange::default();
        range.set_min(80);
        assert_eq!(range.min(), 80);
        assert_eq!(range.max(), 150);
    }

    #[test]
    fn test_set_min_at_max_clamps_below() {
        let mut range = SalaryRange::default();
        range.set_min(150);
        assert_eq!(range.min(), 140);
    }

    #[test]
    fn test_set_min_past_max_clamps_below() {
        let mut range = SalaryRange::default();
        range.set_min(200);
        assert_eq!(range.min(), 140);
        assert_eq!(range.max(), 150);
    }

    #[test]
    fn test_set_max_above_min_is_taken() {
        let mut range = SalaryRange::default();
        range.set_max(220);
        assert_eq!(range.max(), 220);
    }

    #[test]
    fn test_set_max_at_or_below_min_clamps_above() {
        let mut range = SalaryRange::default();
        range.set_max(50);
        assert_eq!(range.max(), 60);
        range.set_max(30);
        assert_eq!(range.max(), 60);
    }

    #[test]
    fn test_out_of_domain_values_are_clamped() {
        let mut range = SalaryRange::default();
        range.set_max(10_000);
        assert_eq!(range.max(), SALARY_CEILING);
        range.set_min(0);
        assert_eq!(range.min(), SALARY_FLOOR);
    }

    #[test]
    fn test_gap_clamp_never_leaves_domain() {
        let mut range = SalaryRange::default();
        range.set_min(SALARY_FLOOR);
        range.set_max(35);
        range.set_min(40);
        assert_eq!(range.min(), SALARY_FLOOR);
        assert_ordered(&range);

        range.set_max(SALARY_CEILING);
        range.set_min(245);
        range.set_max(0);
        assert_eq!(range.max(), SALARY_CEILING);
        assert_ordered(&range);
    }

    #[test]
    fn test_any_edit_sequence_keeps_min_below_max() {
        let mut range = SalaryRange::default();
        // Deterministic sweep over the domain and slightly beyond it.
        for step in 0..2_000u32 {
            let value = (step * 37 + 11) % 280;
            if step % 3 == 0 {
                range.set_max(value);
            } else {
                range.set_min(value);
            }
            assert_ordered(&range);
        }
    }

    #[test]
    fn test_label_format() {
        let mut range = SalaryRange::default();
        assert_eq!(range.label(), "$50k-$150k");
        range.set_max(200);
        range.set_min(90);
        assert_eq!(range.label(), "$90k-$200k");
    }
}
