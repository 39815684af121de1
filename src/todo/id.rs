//! Todo id allocation and path id parsing.

use super::types::Todo;

/// Parse an id taken from a request path.
///
/// Leading whitespace and a `+` sign are skipped. A `0x`/`0X` prefix switches
/// to hexadecimal. The longest run of leading digits in that radix is read,
/// so `"2abc"` resolves to 2 and `"0x1"` to 1. Anything without leading
/// digits, a negative number, or a value that overflows `u64` resolves to
/// `None`, which never matches a stored todo.
#[must_use]
pub fn parse_id(raw: &str) -> Option<u64> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let (rest, radix) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (rest, 10),
    };
    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = rest.get(..end).filter(|d| !d.is_empty())?;
    u64::from_str_radix(digits, radix).ok()
}

/// Id for the next todo: one past the current maximum, or 1 for an empty list.
#[must_use]
pub fn next_id(todos: &[Todo]) -> u64 {
    todos
        .iter()
        .map(|t| t.id)
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Reassign ids `1..=N` following the current order.
pub fn renumber(todos: &mut [Todo]) {
    for (todo, id) in todos.iter_mut().zip(1_u64..) {
        todo.id = id;
    }
}

/// Index of the todo whose id equals `id`.
#[must_use]
pub fn position_of(todos: &[Todo], id: Option<u64>) -> Option<usize> {
    let id = id?;
    todos.iter().position(|t| t.id == id)
}
