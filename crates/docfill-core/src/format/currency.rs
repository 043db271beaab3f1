//! Money amounts with two decimals and comma thousands grouping

/// Format `amount` as `1,010,000.00`
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    // A value that rounds to zero keeps no sign
    let sign = if int_part.bytes().all(|b| b == b'0') && frac_part.bytes().all(|b| b == b'0') {
        ""
    } else {
        sign
    };

    format!("{}{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(1_010_000.0), "1,010,000.00");
        assert_eq!(format_amount(900_000.0), "900,000.00");
        assert_eq!(format_amount(15_000.0), "15,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn test_format_amount_small_values() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(0.004), "0.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-2_500.0), "-2,500.00");
        assert_eq!(format_amount(-0.001), "0.00");
    }
}
