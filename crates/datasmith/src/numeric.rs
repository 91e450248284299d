//! Small numeric helpers shared by the samplers.

/// Round to `places` decimal places, matching the emission precision of
/// the generated tables.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
