// Check digit algorithms shared by the identifier validators.

/// Luhn mod-10 over a string of ASCII digits.
///
/// Scans right to left leaving the rightmost digit (the check digit) as is
/// and doubling every second digit after it. Empty input or any non-digit
/// fails.
pub fn luhn_valid(digits: &str) -> bool {
    matches!(luhn_sum(digits, false), Some(sum) if sum % 10 == 0)
}

/// Check digit to append to `payload` so that the result passes [`luhn_valid`].
///
/// Doubling starts on the rightmost payload digit because that digit becomes
/// the second one from the right once the check digit is appended. Returns
/// `None` when the payload is empty or holds anything but ASCII digits.
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    luhn_sum(payload, true).map(|sum| ((10 - sum % 10) % 10) as u8)
}

fn luhn_sum(digits: &str, double_first: bool) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }
    let mut double = double_first;
    let mut sum = 0;
    for b in digits.bytes().rev() {
        if !b.is_ascii_digit() {
            return None;
        }
        let mut d = u32::from(b - b'0');
        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }
    Some(sum)
}

/// ISO 13616 Mod-97 remainder of an IBAN made of ASCII letters and digits.
///
/// The first four characters are moved to the end and letters are expanded
/// to two-digit numbers (A=10 .. Z=35). The remainder is accumulated one
/// digit at a time, so arbitrarily long numerals never need a big integer.
pub fn iban_mod97(iban: &str) -> u32 {
    let (head, tail) = iban.split_at(4.min(iban.len()));
    let mut remainder = 0u32;
    for c in tail.chars().chain(head.chars()) {
        let value = match c.to_digit(36) {
            Some(v) => v,
            None => continue,
        };
        remainder = if value >= 10 {
            (remainder * 100 + value) % 97
        } else {
            (remainder * 10 + value) % 97
        };
    }
    remainder
}
