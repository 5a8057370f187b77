//! Box-size guide: on-screen cube sizes for the box catalog.
//!
//! Physical size maps to pixels through settings. `boxGuideRefCm` centimetres
//! render as `boxGuideRefPx` pixels, scaled by `boxGuideScalePct` and clamped
//! to `[boxGuideMinPx, boxGuideMaxPx]`.

use shiprate_model::{BoxSpec, Settings};

const LIMIT_MIN: f64 = 1.0;
const LIMIT_MAX: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxGuideConfig {
    pub ref_cm: f64,
    pub ref_px: f64,
    pub min_cube: f64,
    pub max_cube: f64,
    /// Multiplier, 0.5 to 2.0.
    pub scale: f64,
}

impl Default for BoxGuideConfig {
    fn default() -> Self {
        Self::from_settings(&Settings::new())
    }
}

impl BoxGuideConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        let ref_cm = settings.number("boxGuideRefCm", 60.0).clamp(LIMIT_MIN, LIMIT_MAX);
        let ref_px = settings.number("boxGuideRefPx", 90.0).clamp(LIMIT_MIN, LIMIT_MAX);
        let min_px = settings.number("boxGuideMinPx", 50.0).clamp(LIMIT_MIN, LIMIT_MAX);
        let max_px = settings.number("boxGuideMaxPx", 110.0).clamp(LIMIT_MIN, LIMIT_MAX);
        let scale_pct = settings.number("boxGuideScalePct", 100.0).clamp(50.0, 200.0);
        Self {
            ref_cm,
            ref_px,
            min_cube: min_px.min(max_px),
            max_cube: min_px.max(max_px),
            scale: scale_pct / 100.0,
        }
    }

    pub fn cube_px(&self, max_dimension_cm: f64) -> i64 {
        let base = (max_dimension_cm / self.ref_cm) * self.ref_px;
        (base * self.scale).clamp(self.min_cube, self.max_cube).round() as i64
    }

    pub fn tape_px(cube_px: i64) -> i64 {
        ((cube_px as f64) * 0.22).round().clamp(10.0, 22.0) as i64
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxGuideEntry {
    pub spec: BoxSpec,
    pub cube_px: i64,
    pub tape_px: i64,
}

/// Displayable boxes ordered by `sort`, then key. Boxes missing a key or
/// label, or with a non-positive dimension, are skipped.
pub fn box_guide(boxes: &[BoxSpec], settings: &Settings) -> Vec<BoxGuideEntry> {
    let config = BoxGuideConfig::from_settings(settings);
    let mut shown: Vec<&BoxSpec> = boxes
        .iter()
        .filter(|spec| {
            !spec.key.trim().is_empty() && !spec.label.trim().is_empty() && spec.has_valid_dimensions()
        })
        .collect();
    shown.sort_by(|a, b| a.sort.cmp(&b.sort).then_with(|| a.key.cmp(&b.key)));
    shown
        .into_iter()
        .map(|spec| {
            let cube_px = config.cube_px(spec.max_dimension());
            BoxGuideEntry {
                spec: spec.clone(),
                cube_px,
                tape_px: BoxGuideConfig::tape_px(cube_px),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_reference_size_to_reference_pixels() {
        let config = BoxGuideConfig::default();
        assert_eq!(config.cube_px(60.0), 90);
        assert_eq!(config.cube_px(10.0), 50);
        assert_eq!(config.cube_px(120.0), 110);
    }

    #[test]
    fn tape_is_clamped() {
        assert_eq!(BoxGuideConfig::tape_px(90), 20);
        assert_eq!(BoxGuideConfig::tape_px(20), 10);
        assert_eq!(BoxGuideConfig::tape_px(110), 22);
    }

    #[test]
    fn swapped_bounds_and_extreme_scale_are_clamped() {
        let mut settings = Settings::new();
        settings.insert("boxGuideMinPx", "120");
        settings.insert("boxGuideMaxPx", "40");
        settings.insert("boxGuideScalePct", "500");
        let config = BoxGuideConfig::from_settings(&settings);
        assert_eq!(config.min_cube, 40.0);
        assert_eq!(config.max_cube, 120.0);
        assert_eq!(config.scale, 2.0);
    }
}
