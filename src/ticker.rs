use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration, falling back to the default for a zero interval
pub fn tick_duration(tick_ms: u64) -> Duration {
    if tick_ms == 0 {
        Duration::from_millis(DEFAULT_TICK_MS)
    } else {
        Duration::from_millis(tick_ms)
    }
}
