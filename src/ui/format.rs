//! Display formatting for prices and counts

use crate::core::Limit;

/// Digits with `,` thousands separators
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `$29`, `$1,980`, or `$24.50` when there are cents
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{sign}${whole}"),
        rest => format!("{sign}${whole}.{rest:02}"),
    }
}

/// Rounded whole percent, e.g. `3746%`
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value)
}

/// `Unlimited` or the bound passed through `bounded`
pub fn format_limit(limit: Limit, bounded: impl Fn(String) -> String) -> String {
    match limit {
        Some(max) => bounded(group_thousands(u64::from(max))),
        None => "Unlimited".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(50_000), "50,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(29.0), "$29");
        assert_eq!(format_currency(2500.0), "$2,500");
        assert_eq!(format_currency(24.5), "$24.50");
        assert_eq!(format_currency(-12.0), "-$12");
    }

    #[test]
    fn test_format_percent_rounds() {
        assert_eq!(format_percent(3746.153), "3746%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn test_format_limit() {
        assert_eq!(format_limit(Some(10_000), |v| format!("{v}/mo")), "10,000/mo");
        assert_eq!(format_limit(None, |v| v), "Unlimited");
    }
}
