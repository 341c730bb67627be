// Small string helpers shared by the validators.

/// Returns the input when it holds something other than whitespace.
pub fn non_blank(input: Option<&str>) -> Option<&str> {
    input.filter(|s| !s.trim().is_empty())
}

/// Removes every occurrence of the given separator characters.
pub fn strip(input: &str, separators: &[char]) -> String {
    input.chars().filter(|c| !separators.contains(c)).collect()
}

/// True when the string is non-empty and made of ASCII digits only.
pub fn all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Keeps `head` leading and `tail` trailing characters and replaces the rest
/// with `*`. Strings too short to hide anything come back unchanged.
pub fn redact(input: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= head + tail {
        return input.to_string();
    }

    let hidden = chars.len() - head - tail;
    let mut out = String::with_capacity(chars.len());
    out.extend(&chars[..head]);
    out.extend(std::iter::repeat('*').take(hidden));
    out.extend(&chars[head + hidden..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some(" x ")), Some(" x "));
    }

    #[test]
    fn test_strip_separators() {
        assert_eq!(strip("784-1990 1234567-6", &['-', ' ']), "784199012345676");
    }

    #[test]
    fn test_all_digits_rejects_empty_and_non_ascii() {
        assert!(all_digits("0123456789"));
        assert!(!all_digits(""));
        assert!(!all_digits("12a4"));
        assert!(!all_digits("١٢٣"));
    }

    #[test]
    fn test_redact() {
        assert_eq!(redact("100123456700003", 3, 3), "100*********003");
        assert_eq!(redact("abc", 2, 2), "abc");
    }
}
