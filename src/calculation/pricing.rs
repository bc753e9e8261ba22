use crate::config::defaults::INPUT_WEIGHT;

/// Strips a leading dollar symbol and parses the rest as a decimal.
///
/// The csv cells look like "$1.50". Malformed or empty cells become 0.0,
/// never NaN and never an error; a bad cell must not poison the whole
/// catalog. That coercion is a policy choice, not a defect.
pub fn parse_price(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let without_symbol = trimmed.strip_prefix('$').unwrap_or(trimmed);

    without_symbol.parse::<f64>().unwrap_or(0.0)
}

/// Plain decimal parsing with the same coerce-to-zero policy.
/// Used for the intelligence index column, which carries no symbol.
pub fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Blends input and output price into one number, weighted 3:1.
///
/// Real usage sends roughly three input tokens for every output token,
/// so a single comparable cost is (3 * input + output) / 4.
pub fn combined_price(input_raw: &str, output_raw: &str) -> f64 {
    let input_price = parse_price(input_raw);
    let output_price = parse_price(output_raw);

    if input_price == 0.0 && output_price == 0.0 {
        return 0.0;
    }

    (INPUT_WEIGHT * input_price + output_price) / (INPUT_WEIGHT + 1.0)
}

/// Capability per dollar: intelligence index over combined price,
/// rounded to two decimals.
///
/// Note: the material this came from grew two rival formulas for this
/// score. I went with the plain ratio; the offset variant is gone.
/// A combined price of zero (or below) yields 0, never a division blowup.
pub fn value_score(intelligence: f64, combined: f64) -> f64 {
    if combined <= 0.0 {
        return 0.0;
    }

    ((intelligence / combined) * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_dollar_string() {
        assert_eq!(parse_price("$1.50"), 1.50);
    }

    #[test]
    fn empty_and_garbage_coerce_to_zero() {
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("garbage"), 0.0);
        assert_eq!(parse_price("$"), 0.0);
    }

    #[test]
    fn bare_numbers_are_fine_too() {
        assert_eq!(parse_price("2.25"), 2.25);
    }

    #[test]
    fn combined_is_a_three_to_one_blend() {
        // (3 * 2 + 1) / 4
        assert_eq!(combined_price("$2.00", "$1.00"), 1.75);
    }

    #[test]
    fn combined_of_two_zeros_is_zero() {
        assert_eq!(combined_price("$0", "$0"), 0.0);
    }

    #[test]
    fn value_is_the_rounded_ratio() {
        assert_eq!(value_score(50.0, 3.0), 16.67);
    }

    #[test]
    fn value_guards_against_zero_combined() {
        assert_eq!(value_score(50.0, 0.0), 0.0);
    }
}
