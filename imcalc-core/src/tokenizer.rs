// Command line tokenizer: whitespace separated words, no quoting or escapes

use crate::compat::Vec;

/// Token standing for the answer of the previous command.
pub const PREVIOUS_ANSWER: &str = "<";

pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_commands() {
        assert_eq!(tokenize("HELP"), ["HELP"]);
        assert_eq!(tokenize("conj 3+4i"), ["conj", "3+4i"]);
        assert_eq!(tokenize("1+2i * <"), ["1+2i", "*", "<"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  pow   2\t1+1i  "), ["pow", "2", "1+1i"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
