//! Spreadsheet column labels ("A", "AB") to zero-based indices and back

/// Convert a column label to a zero-based index.
///
/// Bijective base-26: `A`=1 ... `Z`=26 per digit, minus one at the end.
/// - A → 0
/// - Z → 25
/// - AA → 26
///
/// Labels must be uppercase ASCII letters; see [`is_column_label`].
pub fn column_index(label: &str) -> usize {
    label
        .bytes()
        .fold(0usize, |acc, b| {
            acc.saturating_mul(26)
                .saturating_add(usize::from(b.wrapping_sub(b'A')) + 1)
        })
        .saturating_sub(1)
}

/// Convert a zero-based index back to its column label
pub fn column_label(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = (idx % 26) as u8;
        result.insert(0, (b'A' + remainder) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}

/// True for one or more ASCII uppercase letters
pub fn is_column_label(label: &str) -> bool {
    !label.is_empty() && label.bytes().all(|b| b.is_ascii_uppercase())
}
