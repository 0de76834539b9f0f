/// Characters dropped from a phone string before any other check. Digits and `+`
/// always survive.
pub const PHONE_SEPARATOR_CHARS: [char; 5] = [' ', '-', '(', ')', '.'];

/// Inclusive bounds on the national number digit count of a routable phone.
pub const MIN_NATIONAL_DIGITS: usize = 7;
pub const MAX_NATIONAL_DIGITS: usize = 15;

pub fn strip_phone_separators(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !PHONE_SEPARATOR_CHARS.contains(ch))
        .collect()
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn national_length_in_range(national_number: &str) -> bool {
    (MIN_NATIONAL_DIGITS..=MAX_NATIONAL_DIGITS).contains(&national_number.len())
}

#[cfg(test)]
mod tests {
    use super::{digits_only, national_length_in_range, strip_phone_separators};

    #[test]
    fn strip_separators_keeps_plus_and_digits() {
        let value = strip_phone_separators("+1 (415) 555-12.12");
        assert_eq!(value, "+14155551212");
    }

    #[test]
    fn strip_separators_leaves_other_characters() {
        let value = strip_phone_separators("415/555 1212 x9");
        assert_eq!(value, "415/5551212x9");
    }

    #[test]
    fn digits_only_drops_plus() {
        assert_eq!(digits_only("+44 (20) 7946-0958"), "442079460958");
    }

    #[test]
    fn national_length_bounds_are_inclusive() {
        assert!(!national_length_in_range("123456"));
        assert!(national_length_in_range("1234567"));
        assert!(national_length_in_range("123456789012345"));
        assert!(!national_length_in_range("1234567890123456"));
    }
}
