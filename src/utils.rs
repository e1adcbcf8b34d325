use crate::settings::FullScaleRange;

/// Convert a raw conversion result to volts for the given full-scale range
#[must_use]
pub fn counts_to_volts(count: i16, range: FullScaleRange) -> f64 {
    f64::from(count) * range.volts_per_count()
}
