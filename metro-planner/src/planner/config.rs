//! Search configuration for the route planner.

/// Default walking speed, in network distance units per time unit.
const DEFAULT_WALKING_SPEED: f64 = 5.0;

/// Configuration parameters for route search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Speed used to turn the walk between an arbitrary coordinate and
    /// its nearest station into a time.
    pub walking_speed: f64,
}

impl SearchConfig {
    /// Create a new configuration with the given walking speed.
    pub fn new(walking_speed: f64) -> Self {
        Self { walking_speed }
    }

    /// Set a custom walking speed.
    pub fn with_walking_speed(mut self, walking_speed: f64) -> Self {
        self.walking_speed = walking_speed;
        self
    }

    /// Time needed to walk `distance`.
    pub fn walk_time(&self, distance: f64) -> f64 {
        distance / self.walking_speed
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WALKING_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.walking_speed, 5.0);
    }

    #[test]
    fn custom_config() {
        let config = SearchConfig::default().with_walking_speed(4.0);
        assert_eq!(config.walking_speed, 4.0);
        assert_eq!(SearchConfig::new(2.0).walking_speed, 2.0);
    }

    #[test]
    fn walk_time() {
        let config = SearchConfig::new(4.0);
        assert_eq!(config.walk_time(10.0), 2.5);
        assert_eq!(config.walk_time(0.0), 0.0);
    }
}
