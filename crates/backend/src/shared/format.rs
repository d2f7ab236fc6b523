use chrono::NaiveDate;

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```ignore
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Plain amount as the shop shows it: no grouping, no trailing zeros (`118`, `99.5`)
pub fn format_amount(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    format!("{}", value)
}

/// Amount with the rupee sign, `₹118`
pub fn format_rupees(value: f64) -> String {
    format!("₹{}", format_amount(value))
}

/// Date cell of printed reports, `18/10/2026`
pub fn format_report_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(118.0), "118");
        assert_eq!(format_amount(99.5), "99.5");
        assert_eq!(format_amount(-0.0), "0");
        assert_eq!(format_amount(-250.0), "-250");
        assert_eq!(format_rupees(2500.0), "₹2500");
    }

    #[test]
    fn test_format_report_date() {
        let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_report_date(d), "07/03/2026");
    }
}
