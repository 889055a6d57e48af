/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Format a value as `#,##0.00` (thousands separators, 2 decimals).
pub fn format_amount(value: f64) -> String {
    let rounded = round2(value);
    let negative = rounded < 0.0;
    let abs = rounded.abs();

    let formatted = format!("{:.2}", abs);
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Format a monetary value with a leading dollar sign: `$#,##0.00`.
pub fn format_money(value: f64) -> String {
    format!("${}", format_amount(value))
}

/// Title-case a label the way the report prints categories and types:
/// first letter of each whitespace-separated word uppercased, the rest
/// lowercased.
pub fn title_case(label: &str) -> String {
    label
        .trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.4), 0.4);
        assert_eq!(round2(2.555), 2.56);
        assert_eq!(round2(-2.555), -2.56);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(150.0), "150.00");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-1234.56), "-1,234.56");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(150.0), "$150.00");
        assert_eq!(format_money(-60.5), "$-60.50");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("activos corrientes"), "Activos Corrientes");
        assert_eq!(title_case("  PASIVOS NO CORRIENTES "), "Pasivos No Corrientes");
        assert_eq!(title_case("TOTALES"), "Totales");
        assert_eq!(title_case(""), "");
    }
}
