//! Color temperature model.
//!
//! Maps a white-point temperature in Kelvin to normalized per-channel
//! multipliers via a piecewise empirical fit of the black-body locus
//! (evaluated on `temp = kelvin / 100`, raw channel values in 0..=255).
//!
//! The raw triple is normalized so the brightest channel is exactly 1.0.
//! That keeps warmth/coolness decoupled from overall luminance, which is
//! controlled separately by the brightness scalar.

/// Lowest temperature the model is defined for.
pub const MIN_KELVIN: f64 = 1000.0;

/// Highest temperature the model is defined for.
pub const MAX_KELVIN: f64 = 15000.0;

/// Neutral daylight white point; [`multipliers`] returns `[1.0; 3]` here.
pub const NEUTRAL_KELVIN: f64 = 6500.0;

/// Returns the `[r, g, b]` multipliers for a white point at `kelvin`.
///
/// Total function: out-of-range input is clamped to
/// [`MIN_KELVIN`]..=[`MAX_KELVIN`] before evaluation. Each multiplier lies
/// in `[0, 1]` and the largest is exactly 1.0.
///
/// ```rust
/// use scopedim_lut::temperature::multipliers;
///
/// let [r, g, b] = multipliers(6500.0);
/// assert_eq!([r, g, b], [1.0, 1.0, 1.0]);
///
/// // Warm white points attenuate blue the most
/// let [r, g, b] = multipliers(2700.0);
/// assert_eq!(r, 1.0);
/// assert!(b < g && g < 1.0);
/// ```
pub fn multipliers(kelvin: f64) -> [f64; 3] {
    let temp = kelvin.clamp(MIN_KELVIN, MAX_KELVIN) / 100.0;

    let r = if temp <= 66.0 {
        255.0
    } else {
        (329.698727446 * (temp - 60.0).powf(-0.1332047592)).clamp(0.0, 255.0)
    };

    let g = if temp <= 66.0 {
        99.4708025861 * temp.powf(0.34657359028) - 161.1195681661
    } else {
        288.1221695283 * (temp - 60.0).powf(-0.0755148492)
    }
    .clamp(0.0, 255.0);

    // The blue plateau starts at the neutral point: the empirical fit alone
    // leaves blue at ~233/255 at 6500 K, which would tint the neutral white
    // point yellow.
    let b = if temp >= NEUTRAL_KELVIN / 100.0 {
        255.0
    } else if temp <= 19.0 {
        0.0
    } else {
        (138.5177312231 * (temp - 10.0).powf(0.3385599327) - 305.0447927307).clamp(0.0, 255.0)
    };

    let rgb = [r / 255.0, g / 255.0, b / 255.0];
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if max == 0.0 {
        // Unreachable with the clamps above; normalization must still not
        // divide by zero.
        return rgb;
    }
    rgb.map(|c| c / max)
}
