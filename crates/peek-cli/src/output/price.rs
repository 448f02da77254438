/// Render `amount` with Indian digit grouping (`1,23,456`), prefixed with
/// `symbol`. Up to two decimals are kept; trailing zeros are dropped.
#[must_use]
pub fn format_price(symbol: &str, amount: f64) -> String {
    format!("{symbol}{}", format_amount(amount))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_amount(amount: f64) -> String {
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = group_indian(&(paise / 100).to_string());
    let sign = if amount < 0.0 && paise > 0 { "-" } else { "" };

    match paise % 100 {
        0 => format!("{sign}{whole}"),
        frac if frac % 10 == 0 => format!("{sign}{whole}.{}", frac / 10),
        frac => format!("{sign}{whole}.{frac:02}"),
    }
}

/// Group an ASCII digit string: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
