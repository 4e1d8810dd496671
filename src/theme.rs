//! Ambient theme preference.
//!
//! The terminal has no standard "prefers dark" query. `COLORFGBG`, set by
//! rxvt, Konsole and a few others as `"<fg>;<bg>"`, is the closest thing, so
//! that is what [`TerminalAmbient`] reads.

/// Host environment's default theme, consulted only when nothing is stored
pub trait AmbientPreference {
    fn prefers_dark(&self) -> bool;
}

/// Reads the terminal background colour from `COLORFGBG`
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalAmbient;

impl AmbientPreference for TerminalAmbient {
    fn prefers_dark(&self) -> bool {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| background_is_dark(&v))
            .unwrap_or(false)
    }
}

/// A fixed answer, for config overrides and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedAmbient(pub bool);

impl AmbientPreference for FixedAmbient {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Parse a `COLORFGBG` value; the last field is the background colour index.
fn background_is_dark(value: &str) -> Option<bool> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    // Indices 0-6 and 8 are the dark half of the 16-colour palette
    Some(matches!(bg, 0..=6 | 8))
}
