//! Derived configuration cached per project

use crate::config::ConfigEntry;
use crate::environment::{EcmaLevel, EnvironmentGuess};

/// Configuration derived from project files, kept until a change handler
/// invalidates it.
///
/// The outer `Option` of `lint` and `formatting` tracks whether a lookup
/// has happened at all, so a project without lint configuration is not
/// probed again on every request.
#[derive(Debug, Clone, Default)]
pub struct ConfigCache {
    pub lint: Option<Option<ConfigEntry>>,
    pub formatting: Option<Option<ConfigEntry>>,
    pub env: Option<EnvironmentGuess>,
    pub ecma: Option<EcmaLevel>,
}

impl ConfigCache {
    pub fn invalidate_lint(&mut self) {
        self.lint = None;
    }

    pub fn invalidate_formatting(&mut self) {
        self.formatting = None;
    }

    pub fn invalidate_env(&mut self) {
        self.env = None;
    }

    pub fn invalidate_ecma(&mut self) {
        self.ecma = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_absence_is_dropped() {
        let mut cache = ConfigCache {
            lint: Some(None),
            ..Default::default()
        };

        cache.invalidate_lint();
        assert!(cache.lint.is_none());
    }

    #[test]
    fn test_invalidation_is_per_entry() {
        let mut cache = ConfigCache {
            ecma: Some(EcmaLevel::DEFAULT),
            env: Some(EnvironmentGuess::seeded()),
            ..Default::default()
        };

        cache.invalidate_env();
        assert!(cache.env.is_none());
        assert_eq!(cache.ecma, Some(EcmaLevel::DEFAULT));
    }
}
