pub const ESCAPE_CHAR: u8 = b'\\';

/// Reports whether the byte at `index` is live, i.e. not preceded by an odd run of
/// backslashes.
#[inline]
pub fn no_escape(text: &str, index: usize) -> bool {
    let bytes = text.as_bytes();
    let end = index.min(bytes.len());
    let run = bytes[..end]
        .iter()
        .rev()
        .take_while(|&&b| b == ESCAPE_CHAR)
        .count();
    run % 2 == 0
}

/// Removes every escape marker; stored literals never keep backslashes.
#[inline]
pub fn strip_escapes(text: &str) -> String {
    if !text.as_bytes().contains(&ESCAPE_CHAR) {
        return text.to_string();
    }
    text.chars().filter(|&ch| ch != '\\').collect()
}

/// Whether the first non-backslash byte at or after `from` is one of `set` and live.
pub(crate) fn starts_with_live(text: &str, from: usize, set: &[u8]) -> bool {
    let bytes = text.as_bytes();
    let Some(tail) = bytes.get(from..) else {
        return false;
    };
    let run = tail.iter().take_while(|&&b| b == ESCAPE_CHAR).count();
    match tail.get(run) {
        Some(b) if set.contains(b) => run % 2 == 0,
        _ => false,
    }
}
