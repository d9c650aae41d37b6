//! Number formatting for table cells and stat cards.

/// Group an integer with narrow spaces: `1234567` -> `1 234 567`.
pub fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

/// Dollar amount with grouping; whole amounts drop the cents.
pub fn format_money(amount: f64) -> String {
    let total_cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    let units = total_cents / 100;
    let cents = total_cents % 100;
    if cents == 0 {
        format!("${}{}", sign, format_thousands(units))
    } else {
        format!("${}{},{:02}", sign, format_thousands(units), cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(25000), "25\u{a0}000");
        assert_eq!(format_thousands(-1234567), "-1\u{a0}234\u{a0}567");
    }

    #[test]
    fn formats_amounts() {
        assert_eq!(format_money(25000.0), "$25\u{a0}000");
        assert_eq!(format_money(1250.5), "$1\u{a0}250,50");
        assert_eq!(format_money(19.99), "$19,99");
        assert_eq!(format_money(19.999), "$20");
        assert_eq!(format_money(-5.5), "$-5,50");
    }
}
