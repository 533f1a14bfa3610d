//! Conversion between character offsets and UTF-8 byte offsets.
//!
//! Editors report cursor positions as character columns, while Rust string
//! slicing and regex match positions are byte offsets. Multi-byte characters
//! (`æ` is 2 bytes, most emoji are 4) make the two diverge.

/// Convert a byte offset to a character offset.
///
/// Offsets past the end clamp to the character count.
///
/// ```
/// use taglink_lib::utils::utf8_offsets::byte_offset_to_char_offset;
///
/// assert_eq!(byte_offset_to_char_offset("#tag", 4), 4);
/// assert_eq!(byte_offset_to_char_offset("æ #tag", 3), 2);
/// ```
pub fn byte_offset_to_char_offset(content: &str, byte_offset: usize) -> usize {
    if byte_offset >= content.len() {
        return content.chars().count();
    }

    content
        .char_indices()
        .take_while(|(byte_idx, _)| *byte_idx < byte_offset)
        .count()
}

/// Convert a character offset to a byte offset.
///
/// The offset one past the last character maps to `content.len()`; anything
/// further out is `None`.
///
/// ```
/// use taglink_lib::utils::utf8_offsets::char_offset_to_byte_offset;
///
/// assert_eq!(char_offset_to_byte_offset("æ #tag", 2), Some(3));
/// assert_eq!(char_offset_to_byte_offset("æ", 1), Some(2));
/// assert_eq!(char_offset_to_byte_offset("æ", 2), None);
/// ```
pub fn char_offset_to_byte_offset(content: &str, char_offset: usize) -> Option<usize> {
    content
        .char_indices()
        .map(|(byte_idx, _)| byte_idx)
        .chain(std::iter::once(content.len()))
        .nth(char_offset)
}
