//! Construction-time settings for an [`IndexedList`].
//!
//! [`IndexedList`]: crate::IndexedList

/// The order in which a list's default iterator walks its nodes.
///
/// # Examples
///
/// ```
/// use indexed_list::Direction;
///
/// assert_eq!(Direction::default(), Direction::Forward);
/// assert_eq!(Direction::Forward.reversed(), Direction::Backward);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// Start at the first node and follow `next` links.
    #[default]
    Forward,
    /// Start at the last node and follow `prev` links.
    Backward,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Settings applied when a list is created.
///
/// # Examples
///
/// ```
/// use indexed_list::{Direction, IndexedList, ListConfig};
///
/// let config = ListConfig {
///     direction: Direction::Backward,
///     ..ListConfig::default()
/// };
/// let mut list = IndexedList::with_config(config);
/// list.append(1);
/// list.append(2);
///
/// assert_eq!(list.values().copied().collect::<Vec<_>>(), [2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ListConfig {
    /// Iteration order used by `iter`, `values`, `Display` and `into_iter`.
    pub direction: Direction,
    /// Number of nodes to reserve space for up front.
    pub capacity: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_reversed_round_trip() {
        for direction in [Direction::Forward, Direction::Backward] {
            assert_ne!(direction.reversed(), direction);
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn test_default_config() {
        let config = ListConfig::default();
        assert_eq!(config.direction, Direction::Forward);
        assert_eq!(config.capacity, 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_direction_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&Direction::Backward).unwrap(),
            "\"backward\""
        );
        assert_eq!(
            serde_json::from_str::<Direction>("\"forward\"").unwrap(),
            Direction::Forward
        );
        assert!(serde_json::from_str::<Direction>("\"Backward\"").is_err());
    }

    #[test]
    fn test_config_missing_fields_fall_back_to_defaults() {
        let config: ListConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ListConfig::default());

        let config: ListConfig = serde_json::from_str(r#"{"direction": "backward"}"#).unwrap();
        assert_eq!(config.direction, Direction::Backward);
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_config_round_trip() {
        let config = ListConfig {
            direction: Direction::Backward,
            capacity: 16,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"direction":"backward","capacity":16}"#);
        assert_eq!(serde_json::from_str::<ListConfig>(&json).unwrap(), config);
    }
}
