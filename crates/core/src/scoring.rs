//! Scoring module - fixed line-clear table

use crate::types::LINE_SCORES;

/// Points for clearing `lines` rows with a single lock.
///
/// 1..=4 lines map to 100/300/500/800; anything else scores nothing.
pub fn score_for_lines(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_table() {
        assert_eq!(score_for_lines(0), 0);
        assert_eq!(score_for_lines(1), 100);
        assert_eq!(score_for_lines(2), 300);
        assert_eq!(score_for_lines(3), 500);
        assert_eq!(score_for_lines(4), 800);
        assert_eq!(score_for_lines(5), 0);
    }
}
