// ABOUTME: Code-point reversal of strings.
// ABOUTME: Multi-byte characters stay intact because the unit of reversal is the char, not the byte.

/// Reverse the Unicode scalar values of `input`.
///
/// Combining sequences are not kept together: a base letter followed by a
/// combining accent comes back with the accent first.
pub fn reverse(input: &str) -> String {
    input.chars().rev().collect()
}
