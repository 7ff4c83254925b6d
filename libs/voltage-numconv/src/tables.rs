//! Nibble <-> hexadecimal digit lookup tables

/// Hex digit for each 4-bit value, indexed by the value
pub(crate) const HEX_DIGITS: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F',
];

/// 4-character bit group for each 4-bit value, indexed by the value
pub(crate) const NIBBLE_BITS: [&str; 16] = [
    "0000", "0001", "0010", "0011", "0100", "0101", "0110", "0111", "1000", "1001", "1010",
    "1011", "1100", "1101", "1110", "1111",
];

/// Bits per hex digit
pub(crate) const NIBBLE_WIDTH: usize = 4;

/// Map an uppercase hex digit back to its 4-bit value
#[inline]
pub(crate) fn nibble_of(digit: char) -> Option<u8> {
    match digit {
        '0'..='9' => Some(digit as u8 - b'0'),
        'A'..='F' => Some(digit as u8 - b'A' + 10),
        _ => None,
    }
}

/// Fold a group of ASCII `0`/`1` bytes (at most four) into its value
#[inline]
pub(crate) fn nibble_from_bits(group: &[u8]) -> u8 {
    group
        .iter()
        .fold(0u8, |acc, bit| (acc << 1) | (bit - b'0'))
}
