pub struct MoneyUtil;

impl MoneyUtil {
    /// Presentation-time rounding. Allocators never round internally, so
    /// repeated calls for the same entity do not compound rounding error.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        (value * 100.0).round() / 100.0
    }
}
