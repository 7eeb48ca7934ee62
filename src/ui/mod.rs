/// Presentation: terminal session and HTML report.
pub mod console;
pub mod html;

/// Column titles shared by the console table and the HTML report.
pub const COLUMN_TITLES: [&str; 6] = ["#", "Name", "Price", "Weight (kg)", "File", "Price per kg"];

/// Shortest form that still shows the value is fractional, e.g. `100.0`, `10.5`.
pub fn fmt_amount(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_keep_a_decimal_point() {
        assert_eq!(fmt_amount(100.0), "100.0");
        assert_eq!(fmt_amount(10.5), "10.5");
        assert_eq!(fmt_amount(0.25), "0.25");
    }
}
