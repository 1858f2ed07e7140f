//! App construction from config and environment.

use std::env;

use tracing::warn;

use circles_types::MAX_POINT_COUNT;
use circles_types::ui::{PointsDraft, UiOptions};

use crate::config::{CirclesConfig, ConfigError};
use crate::game::RandomSampler;
use crate::App;

const CIRCLES_ASCII: &str = "CIRCLES_ASCII";
const CIRCLES_HIGH_CONTRAST: &str = "CIRCLES_HIGH_CONTRAST";
const CIRCLES_REDUCED_MOTION: &str = "CIRCLES_REDUCED_MOTION";

impl App {
    /// Build the application shell from loaded config (if any), applying
    /// environment overrides on top.
    #[must_use]
    pub fn new(config: Option<&CirclesConfig>) -> Self {
        let ui_options = apply_env_overrides(Self::ui_options_from_config(config), |key| {
            env::var(key).ok()
        });
        let mut app = Self::with_sampler(ui_options, Box::new(RandomSampler));
        if let Some(points) = config.and_then(CirclesConfig::default_points) {
            app.prefill_points(points);
        }
        app
    }

    /// Like [`App::new`], but takes the raw load result so a broken config
    /// file degrades to defaults with a visible notice.
    #[must_use]
    pub fn from_load_result(result: Result<Option<CirclesConfig>, ConfigError>) -> Self {
        match result {
            Ok(config) => Self::new(config.as_ref()),
            Err(err) => {
                let path = err.path().display().to_string();
                let message = match &err {
                    // The full error, snippet included, is already in the log.
                    ConfigError::Parse { source, .. } => {
                        let reason = source.message().lines().next().unwrap_or_default();
                        format!("Couldn't parse {path} ({reason}). Using defaults.")
                    }
                    ConfigError::Read { source, .. } => {
                        format!("Couldn't read {path} ({source}). Using defaults.")
                    }
                };
                let mut app = Self::new(None);
                app.set_notice(message);
                app
            }
        }
    }

    fn ui_options_from_config(config: Option<&CirclesConfig>) -> UiOptions {
        let app = config.and_then(|cfg| cfg.app.as_ref());
        UiOptions {
            ascii_only: app.map(|cfg| cfg.ascii_only).unwrap_or(false),
            high_contrast: app.map(|cfg| cfg.high_contrast).unwrap_or(false),
            reduced_motion: app.map(|cfg| cfg.reduced_motion).unwrap_or(false),
        }
    }

    fn prefill_points(&mut self, points: u32) {
        let Some(draft) = PointsDraft::from_count(points) else {
            warn!(points, max = MAX_POINT_COUNT, "default_points out of range, ignoring");
            self.set_notice(format!(
                "Ignoring default_points = {points} (at most {MAX_POINT_COUNT}). Using defaults."
            ));
            return;
        };
        self.points = draft;
        self.game.configure_points(self.points.value());
    }
}

/// Apply `CIRCLES_*` variables. A set variable wins over the config file in
/// both directions.
pub fn apply_env_overrides<F>(mut options: UiOptions, lookup: F) -> UiOptions
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = lookup(CIRCLES_ASCII) {
        options.ascii_only = is_truthy(&raw);
    }
    if let Some(raw) = lookup(CIRCLES_HIGH_CONTRAST) {
        options.high_contrast = is_truthy(&raw);
    }
    if let Some(raw) = lookup(CIRCLES_REDUCED_MOTION) {
        options.reduced_motion = is_truthy(&raw);
    }
    options
}

#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::{apply_env_overrides, is_truthy};
    use circles_types::ui::UiOptions;

    #[test]
    fn truthy_override_values_are_accepted() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy("yes"));
        assert!(is_truthy(" YeS "));
    }

    #[test]
    fn non_truthy_override_values_are_rejected() {
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("false"));
        assert!(!is_truthy("no"));
        assert!(!is_truthy("on"));
    }

    #[test]
    fn env_overrides_apply_both_ways() {
        let base = UiOptions {
            ascii_only: false,
            high_contrast: true,
            reduced_motion: false,
        };
        let options = apply_env_overrides(base, |key| match key {
            "CIRCLES_ASCII" => Some("yes".to_string()),
            "CIRCLES_HIGH_CONTRAST" => Some("0".to_string()),
            _ => None,
        });
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(!options.reduced_motion);
    }

    #[test]
    fn unset_env_keeps_config() {
        let base = UiOptions {
            ascii_only: true,
            high_contrast: false,
            reduced_motion: true,
        };
        assert_eq!(apply_env_overrides(base, |_| None), base);
    }
}
