use std::borrow::Cow;

/// Byte offset of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Replaces every non-overlapping occurrence of `from` with `to`, scanning left to right.
/// Borrows the input when there is nothing to replace.
pub(crate) fn replace_all<'a>(haystack: &'a [u8], from: &[u8], to: &[u8]) -> Cow<'a, [u8]> {
    let Some(first) = find(haystack, from) else {
        return Cow::Borrowed(haystack);
    };
    let mut replaced = Vec::with_capacity(haystack.len() + to.len().saturating_sub(from.len()));
    replaced.extend_from_slice(&haystack[..first]);
    replaced.extend_from_slice(to);
    let mut rest = &haystack[first + from.len()..];
    while let Some(idx) = find(rest, from) {
        replaced.extend_from_slice(&rest[..idx]);
        replaced.extend_from_slice(to);
        rest = &rest[idx + from.len()..];
    }
    replaced.extend_from_slice(rest);
    Cow::Owned(replaced)
}
