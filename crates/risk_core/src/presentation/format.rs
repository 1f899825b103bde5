//! Currency, percent and number formatting.
//!
//! All rounding is half-up on the exact binary value of the input, applied to
//! the magnitude with the sign written separately. `2.5` becomes `"3"` and
//! `1.005` (stored as `1.00499…`) becomes `"1.00"` at two places.

/// Default number of decimals for [`format_percent`].
pub const DEFAULT_PERCENT_DECIMALS: usize = 1;

/// Extra digits rendered past the rounding position to decide the round.
const GUARD_DIGITS: usize = 40;

/// Render `value` with exactly `decimals` fraction digits.
///
/// Any negative input gets a leading `-`, including values that round to zero.
///
/// # Examples
/// ```
/// use risk_core::presentation::to_fixed;
///
/// assert_eq!(to_fixed(12.449, 1), "12.4");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(-0.04, 1), "-0.0");
/// ```
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let digits = round_half_up(value.abs(), decimals);
    if value < 0.0 {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Compact or full USD rendering.
///
/// Compact mode picks the unit from the magnitude and keeps the sign inside
/// the number (`"$-1.2B"`); callers pass an absolute value when they want an
/// unsigned figure. Full mode is en-US currency style with no decimals.
///
/// # Examples
/// ```
/// use risk_core::presentation::format_currency;
///
/// assert_eq!(format_currency(4_500_000.0, true), "$4.5M");
/// assert_eq!(format_currency(950.0, true), "$950");
/// assert_eq!(format_currency(48_700_000_000.0, false), "$48,700,000,000");
/// ```
pub fn format_currency(value: f64, compact: bool) -> String {
    if !compact {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{}${}", sign, group_thousands(&to_fixed(value.abs(), 0)));
    }

    let abs = value.abs();
    if abs >= 1e9 {
        format!("${}B", to_fixed(value / 1e9, 1))
    } else if abs >= 1e6 {
        format!("${}M", to_fixed(value / 1e6, 1))
    } else if abs >= 1e3 {
        format!("${}K", to_fixed(value / 1e3, 0))
    } else {
        format!("${}", to_fixed(value, 0))
    }
}

/// Fixed-decimal percent string.
///
/// # Examples
/// ```
/// use risk_core::presentation::format_percent;
///
/// assert_eq!(format_percent(12.449, 1), "12.4%");
/// assert_eq!(format_percent(0.0, 0), "0%");
/// ```
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value, decimals))
}

/// en-US grouped number with up to three fraction digits.
///
/// # Examples
/// ```
/// use risk_core::presentation::format_number;
///
/// assert_eq!(format_number(904.0), "904");
/// assert_eq!(format_number(1_234_567.891), "1,234,567.891");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return to_fixed(value, 0);
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let fixed = to_fixed(value.abs(), 3);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{}{}", sign, group_thousands(trimmed))
}

/// Round a non-negative finite magnitude half-up to `decimals` places.
fn round_half_up(magnitude: f64, decimals: usize) -> String {
    let exact = format!("{:.*}", decimals + GUARD_DIGITS, magnitude);
    let (head, guard) = exact.split_at(exact.len() - GUARD_DIGITS);
    let head = head.strip_suffix('.').unwrap_or(head);

    if guard.as_bytes()[0] >= b'5' {
        increment_decimal(head)
    } else {
        head.to_string()
    }
}

/// Add one unit in the last place of a plain decimal string.
fn increment_decimal(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }
    let mut out = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        out.insert(0, '1');
    }
    out
}

/// Insert `,` every three digits of the integer part.
fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (plain, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
