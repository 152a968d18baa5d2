//! Display formatting shared by table cells.

/// Format an amount as US dollars with two decimals and thousands separators.
///
/// Non-finite input yields `"$0.00"`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let cents = (amount.abs() * 100.0).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cents = cents as u64;
    let whole = group_thousands(cents / 100);
    let frac = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${whole}.{frac:02}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Upper-case the first character and leave the rest untouched.
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formats_whole_and_fractional() {
        assert_eq!(format_usd(48.0), "$48.00");
        assert_eq!(format_usd(8.5), "$8.50");
        assert_eq!(format_usd(0.004), "$0.00");
    }

    #[test]
    fn usd_groups_thousands() {
        assert_eq!(format_usd(1234.5), "$1,234.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn usd_negative_and_non_finite() {
        assert_eq!(format_usd(-5.0), "-$5.00");
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_usd(f64::NAN), "$0.00");
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("success"), "Success");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair bar"), "Éclair bar");
    }
}
