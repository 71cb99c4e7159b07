use polytonic_protocol::NumberRange;

/// True when upper-casing `text` leaves it unchanged. Caseless text counts
/// as both upper and lower case.
pub fn is_upper(text: &str) -> bool {
    text.to_uppercase() == text
}

pub fn is_lower(text: &str) -> bool {
    text.to_lowercase() == text
}

/// Inclusive range check; the bounds may come in either order.
pub fn number_is_in_range(n: u32, range: NumberRange) -> bool {
    let (lo, hi) = if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    };
    lo <= n && n <= hi
}
