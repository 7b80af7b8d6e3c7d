use std::{env, str::FromStr};

use crate::domain::{DEFAULT_GRID_SPACING, SCROLL_ZOOM_BASE};

/// Tunables for the simulator front end.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// World units per cell
    pub grid_spacing: f64,
    /// Edge length of the square filled by a random seed
    pub seed_size: u32,
    /// Probability that a seeded cell starts alive
    pub seed_density: f64,
    pub steps_per_second: f32,
    pub start_running: bool,
    /// Scroll wheel zoom base (`base^delta`)
    pub zoom_base: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Grid lines are hidden below this scale
    pub grid_line_min_scale: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_spacing: DEFAULT_GRID_SPACING,
            seed_size: 10,
            seed_density: 0.3,
            steps_per_second: 10.0,
            start_running: true,
            zoom_base: SCROLL_ZOOM_BASE,
            min_scale: 0.01,
            max_scale: 100.0,
            grid_line_min_scale: 0.35,
        }
    }
}

impl Settings {
    /// Defaults overridden by `LIFE_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each `LIFE_*` key.
    /// Values that parse but are out of range keep the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut s = Self::default();
        override_from(&lookup, "LIFE_GRID_SPACING", &mut s.grid_spacing, positive_finite);
        override_from(&lookup, "LIFE_SEED_SIZE", &mut s.seed_size, any);
        override_from(&lookup, "LIFE_SEED_DENSITY", &mut s.seed_density, |d: &f64| !d.is_nan());
        override_from(&lookup, "LIFE_STEPS_PER_SECOND", &mut s.steps_per_second, |v: &f32| {
            v.is_finite() && *v > 0.0
        });
        override_from(&lookup, "LIFE_START_RUNNING", &mut s.start_running, any);
        override_from(&lookup, "LIFE_ZOOM_BASE", &mut s.zoom_base, positive_finite);
        override_from(&lookup, "LIFE_MIN_SCALE", &mut s.min_scale, positive_finite);
        override_from(&lookup, "LIFE_MAX_SCALE", &mut s.max_scale, positive_finite);
        override_from(
            &lookup,
            "LIFE_GRID_LINE_MIN_SCALE",
            &mut s.grid_line_min_scale,
            |v: &f64| v.is_finite() && *v >= 0.0,
        );
        s
    }
}

fn any<T>(_: &T) -> bool {
    true
}

fn positive_finite(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

fn override_from<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    field: &mut T,
    valid: impl Fn(&T) -> bool,
) where
    T: FromStr + std::fmt::Debug,
{
    let Some(raw) = lookup(key) else {
        return;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => {
            tracing::info!(key, ?value, "setting overridden from environment");
            *field = value;
        }
        Ok(value) => tracing::warn!(key, ?value, "ignoring out-of-range setting"),
        Err(_) => tracing::warn!(key, %raw, "ignoring unparsable setting"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_reference_behaviour() {
        let s = Settings::default();
        assert_eq!(s.grid_spacing, 50.0);
        assert_eq!(s.seed_size, 10);
        assert_eq!(s.seed_density, 0.3);
        assert_eq!(s.zoom_base, 1.01);
    }

    #[test]
    fn test_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("LIFE_SEED_SIZE", "24"),
            ("LIFE_START_RUNNING", "false"),
            ("LIFE_GRID_SPACING", " 12.5 "),
        ]));
        assert_eq!(s.seed_size, 24);
        assert!(!s.start_running);
        assert_eq!(s.grid_spacing, 12.5);
        assert_eq!(s.steps_per_second, 10.0);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let s = Settings::from_lookup(lookup(&[
            ("LIFE_SEED_SIZE", "-3"),
            ("LIFE_SEED_DENSITY", "lots"),
        ]));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_non_finite_and_non_positive_values_keep_defaults() {
        let s = Settings::from_lookup(lookup(&[
            ("LIFE_STEPS_PER_SECOND", "NaN"),
            ("LIFE_ZOOM_BASE", "-1.01"),
            ("LIFE_GRID_SPACING", "inf"),
            ("LIFE_MIN_SCALE", "0"),
            ("LIFE_SEED_DENSITY", "NaN"),
        ]));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_grid_line_threshold_override() {
        let s = Settings::from_lookup(lookup(&[("LIFE_GRID_LINE_MIN_SCALE", "0.8")]));
        assert_eq!(s.grid_line_min_scale, 0.8);
        let s = Settings::from_lookup(lookup(&[("LIFE_GRID_LINE_MIN_SCALE", "-2")]));
        assert_eq!(s.grid_line_min_scale, 0.35);
    }
}
