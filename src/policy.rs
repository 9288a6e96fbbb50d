// src/policy.rs

use crate::error::ConfigError;

/// The (M, N) periodic-review policy: every `review_period` days, if the
/// ending inventory is below `order_up_to`, order enough to bring it back
/// up to `order_up_to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MnPolicy {
    /// Order-up-to level M: target inventory after placing an order.
    pub order_up_to: u32,
    /// Review period N, in days. Must be at least 1.
    pub review_period: u32,
}

impl MnPolicy {
    pub fn new(order_up_to: u32, review_period: u32) -> Result<Self, ConfigError> {
        if review_period == 0 {
            return Err(ConfigError::ZeroReviewPeriod);
        }
        Ok(Self {
            order_up_to,
            review_period,
        })
    }

    /// Days are 1-indexed; day N, 2N, 3N, ... are review days.
    pub fn is_review_day(&self, day: u32) -> bool {
        day % self.review_period == 0
    }

    /// The 1-indexed review cycle a given day belongs to.
    pub fn cycle_of(&self, day: u32) -> u32 {
        (day - 1) / self.review_period + 1
    }

    /// Quantity needed to bring `ending_inventory` back up to M, or 0 when
    /// the inventory is already at or above the target.
    pub fn order_quantity(&self, ending_inventory: u32) -> u32 {
        self.order_up_to.saturating_sub(ending_inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_review_period_is_rejected() {
        assert!(matches!(
            MnPolicy::new(11, 0),
            Err(ConfigError::ZeroReviewPeriod)
        ));
    }

    #[test]
    fn review_days_fall_on_multiples_of_n() {
        let policy = MnPolicy::new(11, 5).unwrap();
        assert!(!policy.is_review_day(1));
        assert!(!policy.is_review_day(4));
        assert!(policy.is_review_day(5));
        assert!(!policy.is_review_day(6));
        assert!(policy.is_review_day(10));
    }

    #[test]
    fn every_day_is_a_review_day_when_n_is_one() {
        let policy = MnPolicy::new(5, 1).unwrap();
        for day in 1..=20 {
            assert!(policy.is_review_day(day));
        }
    }

    #[test]
    fn cycles_are_one_indexed_blocks_of_n_days() {
        let policy = MnPolicy::new(11, 5).unwrap();
        assert_eq!(policy.cycle_of(1), 1);
        assert_eq!(policy.cycle_of(5), 1);
        assert_eq!(policy.cycle_of(6), 2);
        assert_eq!(policy.cycle_of(10), 2);
        assert_eq!(policy.cycle_of(11), 3);
    }

    #[test]
    fn order_quantity_tops_up_to_m() {
        let policy = MnPolicy::new(11, 5).unwrap();
        assert_eq!(policy.order_quantity(3), 8);
        assert_eq!(policy.order_quantity(11), 0);
        assert_eq!(policy.order_quantity(15), 0);
    }
}
