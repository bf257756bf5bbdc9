use std::time::Duration;

/// How long a completed level stays on screen before the next one replaces it.
pub const DEFAULT_TRANSITION_PAUSE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub transition_pause: Duration,
}

impl Config {
    pub fn with_pause_ms(ms: u64) -> Self {
        Config {
            transition_pause: Duration::from_millis(ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            transition_pause: DEFAULT_TRANSITION_PAUSE,
        }
    }
}
