//! Price formatting helpers

/// Formats a price with exactly two decimals, as used for `<input>` values.
///
/// ```
/// use frontend::shared::number_format::format_price;
/// assert_eq!(format_price(3.5), "3.50");
/// ```
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}
