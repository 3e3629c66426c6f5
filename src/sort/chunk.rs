//! Splitting strings into digit / non-digit runs for natural ordering.
//!
//! Only ASCII `0`..`9` count as digits. Other numeral scripts (fullwidth,
//! Arabic-Indic) are text, so a chunk boundary never falls inside a
//! multi-byte character.

/// True for exactly the ASCII digits `0`..`9`
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Return the maximal homogeneous chunk of `s` starting at byte offset `marker`.
///
/// The chunk is either all digits or all non-digits and cannot be extended
/// without breaking that. Panics if `marker` is out of range or not on a
/// char boundary: callers only ever pass the end of the previous chunk.
pub fn next_chunk(s: &str, marker: usize) -> &str {
    assert!(
        marker < s.len(),
        "chunk marker {} out of range for string of length {}",
        marker,
        s.len()
    );

    let rest = &s[marker..];
    let first_is_digit = is_digit_chunk(rest);

    let end = rest
        .char_indices()
        .skip(1)
        .find(|&(_, c)| is_digit(c) != first_is_digit)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    &rest[..end]
}

/// Iterator over the chunks of a whole string
#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    s: &'a str,
    marker: usize,
}

impl<'a> Chunks<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, marker: 0 }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.marker >= self.s.len() {
            return None;
        }
        let chunk = next_chunk(self.s, self.marker);
        self.marker += chunk.len();
        Some(chunk)
    }
}

/// Whether a chunk produced by [`next_chunk`] is a digit run
#[inline]
pub fn is_digit_chunk(chunk: &str) -> bool {
    chunk.chars().next().map(is_digit).unwrap_or(false)
}
