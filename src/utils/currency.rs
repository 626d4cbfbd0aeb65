//! Currency display helpers.

/// Formats an amount as dollars rounded to cents with thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(1029.9178), "$1,029.92");
/// assert_eq!(format_currency(-5.0), "-$5.00");
/// ```
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Formats an amount rounded to cents without symbol or separators.
pub fn format_plain(amount: f64) -> String {
    format!("{amount:.2}")
}
