use serde::{Deserialize, Serialize};

/// Running count of defeated enemies.
///
/// One tally is shared by every enemy in a game: each call to
/// [`Character::get_defeated`](crate::Character::get_defeated) adds one,
/// whichever enemy it is called on. The count never decreases and has no
/// reset. Not synchronized; wrap it in a `Mutex` to share it across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VictoryTally {
    count: u64,
}

impl VictoryTally {
    /// A tally starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one defeat and return the new total.
    pub fn record(&mut self) -> u64 {
        self.count += 1;
        self.count
    }

    /// Defeats recorded so far.
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(VictoryTally::new().count(), 0);
    }

    #[test]
    fn record_returns_new_total() {
        let mut tally = VictoryTally::new();
        assert_eq!(tally.record(), 1);
        assert_eq!(tally.record(), 2);
        assert_eq!(tally.count(), 2);
    }

    #[test]
    fn separate_tallies_are_isolated() {
        let mut a = VictoryTally::new();
        let b = VictoryTally::new();
        a.record();
        assert_eq!(a.count(), 1);
        assert_eq!(b.count(), 0);
    }
}
