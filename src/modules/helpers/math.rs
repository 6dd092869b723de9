pub struct Math {}
impl Math {
    pub fn round_float_to_n_decimals(number: f64, decimals: i32) -> f64 {
        let multiplier = 10.0_f64.powi(decimals);
        (number * multiplier).round() / multiplier
    }

    /// human readable score: at most two decimals, no trailing `.0` on whole numbers
    pub fn format_score(number: f64) -> String {
        let rounded = Math::round_float_to_n_decimals(number, 2);
        if rounded == 0.0 {
            // avoids printing "-0"
            return "0".to_string();
        }

        // f64's Display never prints a trailing ".0"
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_decimals() {
        assert_eq!(Math::round_float_to_n_decimals(3.14159, 2), 3.14);
        assert_eq!(Math::round_float_to_n_decimals(2.5, 0), 3.0);
    }

    #[test]
    fn formats_scores() {
        assert_eq!(Math::format_score(8.0), "8");
        assert_eq!(Math::format_score(7.5), "7.5");
        assert_eq!(Math::format_score(10.0 / 3.0), "3.33");
        assert_eq!(Math::format_score(-0.001), "0");
        assert_eq!(Math::format_score(120.0), "120");
    }
}
