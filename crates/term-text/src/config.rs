//! Process-wide measurement policy.
//!
//! East-Asian "ambiguous" code points (ellipsis, arrows, some box drawing)
//! render as one cell in most western terminals and as two in CJK locales.
//! The policy is decided once per process: either explicitly through
//! [`set_ambiguous_width`], or lazily from the environment on the first
//! width computation. It never changes afterwards, so every measurement in a
//! process agrees with every other.

use std::sync::OnceLock;

use thiserror::Error;

/// Environment variable that opts in to double-width ambiguous glyphs.
pub const ENV_CJK_WIDTH: &str = "TERM_TEXT_CJK_WIDTH";

static AMBIGUOUS_WIDTH: OnceLock<AmbiguousWidth> = OnceLock::new();

/// How East-Asian ambiguous-width code points are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousWidth {
    /// One cell. Keeps `…`, `→` and friends predictable.
    #[default]
    Narrow,
    /// Two cells, as rendered by terminals running in a CJK locale.
    Wide,
}

impl AmbiguousWidth {
    /// Resolve the policy using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match get_env(ENV_CJK_WIDTH).as_deref().and_then(parse_bool) {
            Some(true) => Self::Wide,
            _ => Self::Narrow,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl std::fmt::Display for AmbiguousWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ambiguous width already fixed to {current} for this process, cannot switch to {requested}")]
    AlreadyInitialized {
        current: AmbiguousWidth,
        requested: AmbiguousWidth,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// The ambiguous-width policy in effect for this process.
///
/// The first call fixes the policy from [`ENV_CJK_WIDTH`] unless
/// [`set_ambiguous_width`] ran before.
#[must_use]
pub fn ambiguous_width() -> AmbiguousWidth {
    *AMBIGUOUS_WIDTH.get_or_init(|| AmbiguousWidth::from_env_with(|key| std::env::var(key).ok()))
}

/// Fix the ambiguous-width policy for the rest of the process.
///
/// Call this at startup, before anything is measured. Asking again for the
/// policy already in effect succeeds.
///
/// # Errors
/// Returns [`ConfigError::AlreadyInitialized`] if a different policy was
/// already fixed, explicitly or by a previous measurement.
pub fn set_ambiguous_width(requested: AmbiguousWidth) -> Result<()> {
    if AMBIGUOUS_WIDTH.set(requested).is_ok() {
        tracing::debug!(policy = requested.as_str(), "ambiguous width policy set");
        return Ok(());
    }
    let current = ambiguous_width();
    if current == requested {
        Ok(())
    } else {
        Err(ConfigError::AlreadyInitialized { current, requested })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
