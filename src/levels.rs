use serde::Deserialize;

use crate::State;

/// Upper bound levels. A value strictly greater than a level triggers its state, critical wins.
///
/// ```rust
/// # use mikrotik_traffic::{Levels, State};
/// let levels = Levels::new(15, 30);
/// assert_eq!(levels.evaluate(&15), State::Ok);
/// assert_eq!(levels.evaluate(&16), State::Warning);
/// assert_eq!(levels.evaluate(&31), State::Critical);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(T, T)")]
pub struct Levels<T> {
    pub warning: T,
    pub critical: T,
}

impl<T> Levels<T>
where
    T: PartialOrd,
{
    pub fn new(warning: T, critical: T) -> Self {
        Levels { warning, critical }
    }

    pub fn evaluate(&self, value: &T) -> State {
        if value > &self.critical {
            State::Critical
        } else if value > &self.warning {
            State::Warning
        } else {
            State::Ok
        }
    }
}

impl<T> From<(T, T)> for Levels<T> {
    fn from((warning, critical): (T, T)) -> Self {
        Levels { warning, critical }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_boundaries() {
        let levels = Levels::new(10_000_000u64, 20_000_000);

        assert_eq!(levels.evaluate(&0), State::Ok);
        assert_eq!(levels.evaluate(&10_000_000), State::Ok);
        assert_eq!(levels.evaluate(&10_000_001), State::Warning);
        assert_eq!(levels.evaluate(&12_000_000), State::Warning);
        assert_eq!(levels.evaluate(&20_000_000), State::Warning);
        assert_eq!(levels.evaluate(&20_000_001), State::Critical);
        assert_eq!(levels.evaluate(&u64::MAX), State::Critical);
    }

    #[test]
    fn test_levels_critical_checked_first() {
        // inverted levels still report critical above the critical level
        let levels = Levels::new(30u64, 15);
        assert_eq!(levels.evaluate(&20), State::Critical);
        assert_eq!(levels.evaluate(&10), State::Ok);
    }

    #[test]
    fn test_levels_from_tuple() {
        assert_eq!(Levels::from((1u64, 2u64)), Levels::new(1, 2));
    }
}
