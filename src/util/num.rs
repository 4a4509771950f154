/// Converts an interpreter index into an offset into a sequence of length
/// `len`.
///
/// ## Returns
/// - `Some(usize)`: The offset, if `0 <= index < len`.
/// - `None`: If the index is negative or past the end.
///
/// ## Example
/// ```
/// use mexpr::util::num::checked_offset;
///
/// assert_eq!(checked_offset(1, 3), Some(1));
/// assert_eq!(checked_offset(3, 3), None);
/// assert_eq!(checked_offset(-1, 3), None);
/// ```
#[must_use]
pub fn checked_offset(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|offset| *offset < len)
}
