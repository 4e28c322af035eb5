/// Largest denominator used when rendering small quantities as fractions
const MAX_DENOMINATOR: u64 = 3;

/// Quantities above this are rendered as whole numbers
const FRACTION_LIMIT: f64 = 2.0;

/// Render a count for display
///
/// Missing, zero or non-positive counts render as an empty string. Counts up
/// to 2 are shown as the nearest simple fraction ("1/2", "1 1/3"), larger
/// counts are rounded to a whole number.
pub fn format_count(value: Option<f64>) -> String {
    let Some(value) = value.filter(|value| value.is_finite() && *value > 0.0) else {
        return String::new();
    };

    if value > FRACTION_LIMIT {
        return format!("{}", value.round() as u64);
    }

    let (numerator, denominator) = approximate(value, MAX_DENOMINATOR);
    let whole = numerator / denominator;
    let remainder = numerator % denominator;

    match (whole, remainder) {
        (whole, 0) => whole.to_string(),
        (0, remainder) => format!("{remainder}/{denominator}"),
        (whole, remainder) => format!("{whole} {remainder}/{denominator}"),
    }
}

/// Best rational approximation of a positive value with a bounded denominator
///
/// Walks the continued-fraction convergents and, once the next convergent
/// would exceed the bound, compares the last convergent with the largest
/// admissible semiconvergent.
fn approximate(value: f64, max_denominator: u64) -> (u64, u64) {
    let (mut h_prev, mut h) = (0u64, 1u64);
    let (mut k_prev, mut k) = (1u64, 0u64);
    let mut x = value;

    loop {
        let a = x.floor();
        let term = a as u64;
        let k_next = term * k + k_prev;

        if k_next > max_denominator {
            let t = (max_denominator - k_prev) / k;
            let (h_semi, k_semi) = (t * h + h_prev, t * k + k_prev);
            let convergent_error = (value - h as f64 / k as f64).abs();
            let semi_error = (value - h_semi as f64 / k_semi as f64).abs();
            if semi_error < convergent_error {
                return (h_semi, k_semi);
            }
            break;
        }

        let h_next = term * h + h_prev;
        (h_prev, h) = (h, h_next);
        (k_prev, k) = (k, k_next);

        let fraction = x - a;
        if fraction < 1e-9 {
            break;
        }
        x = 1.0 / fraction;
    }

    (h, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(Some(0.5), "1/2")]
    #[case(Some(3.0), "3")]
    #[case(None, "")]
    #[case(Some(0.0), "")]
    #[case(Some(1.0 / 3.0), "1/3")]
    #[case(Some(2.0 / 3.0), "2/3")]
    #[case(Some(1.5), "1 1/2")]
    #[case(Some(4.0 / 3.0), "1 1/3")]
    #[case(Some(1.0), "1")]
    #[case(Some(2.0), "2")]
    #[case(Some(1.99), "2")]
    #[case(Some(0.75), "2/3")]
    #[case(Some(0.1), "0")]
    #[case(Some(2.4), "2")]
    #[case(Some(4.5), "5")]
    #[case(Some(12.2), "12")]
    fn test_format_count(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_count(value), expected);
    }

    #[test]
    fn test_negative_and_non_finite_counts_render_empty() {
        assert_eq!(format_count(Some(-1.0)), "");
        assert_eq!(format_count(Some(f64::NAN)), "");
        assert_eq!(format_count(Some(f64::INFINITY)), "");
    }

    #[test]
    fn test_approximate_respects_denominator_bound() {
        for step in 1..200 {
            let value = f64::from(step) / 100.0;
            let (_, denominator) = approximate(value, MAX_DENOMINATOR);
            assert!((1..=MAX_DENOMINATOR).contains(&denominator), "{value}");
        }
    }
}
