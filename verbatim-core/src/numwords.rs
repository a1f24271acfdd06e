//! Countdown numbers rendered as English words
//!
//! The word grid has no digit glyphs, so minute and second counts are
//! spelled out letter for letter. Zero renders as the empty string and is
//! simply omitted from the grid, never shown as "ZERO".

use heapless::String;

/// Capacity for the longest composed result ("TWENTY SEVEN" is 12 chars).
pub const MAX_WORD_LEN: usize = 16;

/// Direct lookup for 1-20. The teens are irregular and are never composed
/// from a tens word. Index 0 is the empty string.
const UNITS: [&str; 21] = [
    "", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN", "ELEVEN",
    "TWELVE", "THIRTEEN", "FOURTEEN", "FIFTEEN", "SIXTEEN", "SEVENTEEN", "EIGHTEEN", "NINETEEN",
    "TWENTY",
];

/// Tens words for composed values. Indices 0 and 1 are unreachable: values
/// below 21 go through the direct table. SIXTY exists because a full-hour
/// work session renders minutes = 60 on its first composition.
const TENS: [&str; 7] = ["", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY"];

/// Convert a minute or second count to its English word form.
///
/// Defined for `n` in `0..=60`. Multi-word results are single-space-joined
/// with no leading or trailing whitespace.
pub fn words(n: u32) -> String<MAX_WORD_LEN> {
    debug_assert!(n <= 60, "countdown values are 0..=60, got {}", n);

    let mut out = String::new();
    if n == 0 {
        return out;
    }

    if n <= 20 {
        let _ = out.push_str(UNITS[n as usize]);
        return out;
    }

    let tens = (n / 10) as usize;
    let ones = (n % 10) as usize;

    let _ = out.push_str(TENS.get(tens).copied().unwrap_or(""));
    if ones != 0 {
        let _ = out.push(' ');
        let _ = out.push_str(UNITS[ones]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(words(0), "");
    }

    #[test]
    fn test_direct_table() {
        assert_eq!(words(1), "ONE");
        assert_eq!(words(11), "ELEVEN");
        assert_eq!(words(15), "FIFTEEN");
        assert_eq!(words(20), "TWENTY");
    }

    #[test]
    fn test_composed_values() {
        assert_eq!(words(21), "TWENTY ONE");
        assert_eq!(words(24), "TWENTY FOUR");
        assert_eq!(words(30), "THIRTY");
        assert_eq!(words(45), "FORTY FIVE");
        assert_eq!(words(59), "FIFTY NINE");
    }

    #[test]
    fn test_full_hour() {
        assert_eq!(words(60), "SIXTY");
    }

    #[test]
    fn test_teens_are_not_composed() {
        // 10-19 must come from the direct table, never "TEN NINE" etc.
        assert_eq!(words(13), "THIRTEEN");
        assert_eq!(words(19), "NINETEEN");
    }

    proptest! {
        #[test]
        fn nonzero_values_render_nonempty(n in 1u32..=59) {
            prop_assert!(!words(n).is_empty());
        }

        #[test]
        fn no_double_spaces(n in 0u32..=60) {
            prop_assert!(!words(n).contains("  "));
        }

        #[test]
        fn no_edge_whitespace(n in 0u32..=60) {
            let w = words(n);
            prop_assert_eq!(w.as_str(), w.trim());
        }

        #[test]
        fn only_uppercase_and_spaces(n in 0u32..=60) {
            prop_assert!(words(n)
                .chars()
                .all(|c| c.is_ascii_uppercase() || c == ' '));
        }
    }
}
