//! Whole-dollar currency strings for display

/// Format as US dollars with thousands separators and no cents, e.g. `$12,500`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_dollars() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(324.0), "$324");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn test_rounds_cents_away() {
        assert_eq!(format_currency(196.72), "$197");
        assert_eq!(format_currency(-1500.4), "-$1,500");
    }
}
