//! Number formatting helpers for the share text.

/// Two-decimal fixed formatting matching what players already pasted.
///
/// Exact binary ties (`x.125`, `x.375`, ...) round away from zero; every other
/// value rounds to the nearest representation.
#[must_use]
pub fn fmt_fixed2(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Only multiples of 1/8 can sit exactly halfway between two cents.
    let scaled = value * 100.0;
    if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        return format!("{:.2}", scaled.round() / 100.0);
    }
    format!("{value:.2}")
}

/// Euclidean remainder for millisecond clocks.
#[must_use]
pub const fn wrap_ms(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}
