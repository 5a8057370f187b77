//! Billable weight calculation.
//!
//! Carriers price parcels by the greater of their actual weight and a
//! volumetric weight derived from the box dimensions. Volumetric weight is
//! rounded up to the next half kilogram.

/// Cubic centimetres per volumetric kilogram.
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Round up to the nearest 0.5; non-finite or non-positive input yields 0.
///
/// ```
/// use shiprate_normalization::round_up_to_half;
///
/// assert_eq!(round_up_to_half(5.4), 5.5);
/// assert_eq!(round_up_to_half(5.5), 5.5);
/// assert_eq!(round_up_to_half(-1.0), 0.0);
/// ```
pub fn round_up_to_half(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    (value * 2.0).ceil() / 2.0
}

/// Volumetric weight in kilograms for a box of the given dimensions (cm).
///
/// Returns 0 when any dimension is non-positive.
pub fn volumetric_weight(length_cm: f64, width_cm: f64, height_cm: f64) -> f64 {
    if length_cm <= 0.0 || width_cm <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    round_up_to_half(length_cm * width_cm * height_cm / VOLUMETRIC_DIVISOR)
}

/// Weight used for the rate lookup.
///
/// Services flagged to use actual weight ignore the volumetric weight
/// entirely; all others take the larger of the two.
pub fn billable_weight(actual_weight: f64, volumetric_weight: f64, use_actual_weight: bool) -> f64 {
    if use_actual_weight {
        actual_weight
    } else {
        actual_weight.max(volumetric_weight)
    }
}
