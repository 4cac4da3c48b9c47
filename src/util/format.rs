//! Display formatting helpers shared across pages.

/// USD per-kilogram price, two decimals with a dollar sign.
pub fn format_usd(value: f64) -> String {
    format!("${value:.2}")
}

/// Signed percentage, e.g. "+2.3%" or "0.0%".
pub fn format_change_pct(value: f64) -> String {
    if value.abs() < 0.05 {
        "0.0%".to_string()
    } else {
        format!("{value:+.1}%")
    }
}

/// Supply/demand ratio, or an em dash when there is none.
pub fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(value) => format!("{value:.2}"),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formats() {
        assert_eq!(format_usd(1.239), "$1.24");
        assert_eq!(format_usd(1.0), "$1.00");
        assert_eq!(format_usd(11_500.0), "$11500.00");
    }

    #[test]
    fn change_pct_formats() {
        assert_eq!(format_change_pct(2.31), "+2.3%");
        assert_eq!(format_change_pct(-1.47), "-1.5%");
        assert_eq!(format_change_pct(0.0), "0.0%");
        assert_eq!(format_change_pct(0.04), "0.0%");
    }

    #[test]
    fn ratio_formats() {
        assert_eq!(format_ratio(Some(1.5)), "1.50");
        assert_eq!(format_ratio(None), "—");
    }
}
