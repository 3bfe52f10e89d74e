use rust_decimal::Decimal;

const CURRENCY_SIGN: char = '₹';

/// Renders a monetary value with thousands separators, e.g. `₹1,234,567.89`.
/// Tables use zero decimal places, summary lines two.
pub fn currency(value: Decimal, decimal_places: u32) -> String {
    let mut rounded = value.round_dp(decimal_places);
    rounded.rescale(decimal_places);

    let text = rounded.to_string();
    let (digits, negative) = match text.strip_prefix('-') {
        Some(rest) => (rest, true),
        None => (text.as_str(), false),
    };
    let (integer, fraction) = match digits.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (digits, None),
    };

    let mut out = String::new();

    if negative {
        out.push('-');
    }

    out.push(CURRENCY_SIGN);
    out.push_str(&group_thousands(integer));

    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Renders a percentage at two decimal places with a trailing `%`.
pub fn percent(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    format!("{rounded}%")
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
