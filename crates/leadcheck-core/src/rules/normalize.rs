use crate::domain::{digits_only, strip_phone_separators, Region, MIN_NATIONAL_DIGITS};
use crate::phone::{
    CallingCodeParser, CountryHinter, GuessConfidence, LocationHinter, PhoneParser, RegionHints,
};
use serde::{Deserialize, Serialize};

pub const UNVERIFIED_NUMBER_WARNING: &str =
    "This phone number may not be valid or deliverable. Please verify before sending SMS.";
pub const FORMAT_WARNING: &str =
    "Phone number format may be incorrect. Please verify and fix if needed.";
pub const TOO_SHORT_WARNING: &str =
    "Phone number is too short. Please enter a complete phone number.";
pub const COUNTRY_CODE_MISSING_WARNING: &str = "Country code missing. Please select the correct country code from the dropdown to complete the phone number.";
pub const MANUAL_ASSIGNMENT_WARNING: &str = "Country code could not be determined reliably. Please select the correct country code before sending SMS.";
pub const LOW_CONFIDENCE_WARNING: &str =
    "Country code was inferred from location hints. Please verify before sending SMS.";

/// Country the hinting step falls back to when state and ZIP say nothing.
pub const DEFAULT_HINT_COUNTRY: Region = Region::US;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Low,
    Manual,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Low => "low",
            Confidence::Manual => "manual",
        }
    }
}

/// Best-effort canonical phone. `normalized` is not guaranteed to be E.164; only a
/// result without a warning is safe for automated sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNormalization {
    pub normalized: String,
    pub confidence: Confidence,
    pub warning: Option<String>,
}

impl PhoneNormalization {
    fn new(normalized: String, confidence: Confidence, warning: Option<&str>) -> Self {
        Self {
            normalized,
            confidence,
            warning: warning.map(str::to_string),
        }
    }

    pub fn is_sendable(&self) -> bool {
        self.warning.is_none() && self.normalized.starts_with('+')
    }
}

#[derive(Debug, Clone)]
pub struct PhoneNormalizer<P = CallingCodeParser, H = LocationHinter> {
    parser: P,
    hinter: H,
    hint_fallback: Region,
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneNormalizer {
    pub fn new() -> Self {
        Self::with_collaborators(CallingCodeParser, LocationHinter::new())
    }
}

impl<P: PhoneParser, H: CountryHinter> PhoneNormalizer<P, H> {
    pub fn with_collaborators(parser: P, hinter: H) -> Self {
        Self {
            parser,
            hinter,
            hint_fallback: DEFAULT_HINT_COUNTRY,
        }
    }

    pub fn with_hint_fallback(mut self, region: Region) -> Self {
        self.hint_fallback = region;
        self
    }

    /// Never drops input: a non-blank phone always yields a non-empty `normalized`.
    pub fn normalize(&self, raw: &str, hints: &RegionHints<'_>) -> PhoneNormalization {
        if raw.trim().is_empty() {
            return PhoneNormalization::new(String::new(), Confidence::High, None);
        }

        let cleaned = strip_phone_separators(raw.trim());
        if cleaned.starts_with('+') {
            return match self.parser.parse(&cleaned, None) {
                Ok(parsed) if parsed.is_valid() => {
                    PhoneNormalization::new(parsed.format_e164(), Confidence::High, None)
                }
                Ok(parsed) => PhoneNormalization::new(
                    parsed.format_e164(),
                    Confidence::Low,
                    Some(UNVERIFIED_NUMBER_WARNING),
                ),
                Err(_) => PhoneNormalization::new(cleaned, Confidence::Manual, Some(FORMAT_WARNING)),
            };
        }

        let digits = digits_only(&cleaned);
        if digits.len() < MIN_NATIONAL_DIGITS {
            let kept = match (digits.is_empty(), cleaned.is_empty()) {
                (false, _) => digits,
                (true, false) => cleaned,
                (true, true) => raw.trim().to_string(),
            };
            return PhoneNormalization::new(kept, Confidence::Manual, Some(TOO_SHORT_WARNING));
        }

        if let Ok(parsed) = self.parser.parse(&digits, hints.default_country) {
            if parsed.country.is_some() {
                return if parsed.is_valid() {
                    PhoneNormalization::new(parsed.format_e164(), Confidence::High, None)
                } else {
                    PhoneNormalization::new(
                        parsed.format_e164(),
                        Confidence::Low,
                        Some(UNVERIFIED_NUMBER_WARNING),
                    )
                };
            }
        }

        let guess = self.hinter.guess_country(
            raw,
            &RegionHints {
                state: hints.state,
                zip_code: hints.zip_code,
                default_country: Some(self.hint_fallback),
            },
        );
        match guess.normalized {
            Some(normalized) if normalized.starts_with('+') => {
                let (confidence, default_warning) = if guess.requires_manual_assignment {
                    (Confidence::Manual, Some(MANUAL_ASSIGNMENT_WARNING))
                } else if guess.confidence == GuessConfidence::Low {
                    (Confidence::Low, Some(LOW_CONFIDENCE_WARNING))
                } else {
                    (Confidence::High, None)
                };
                PhoneNormalization {
                    normalized,
                    confidence,
                    warning: guess
                        .warning
                        .or_else(|| default_warning.map(str::to_string)),
                }
            }
            _ => PhoneNormalization::new(
                digits,
                Confidence::Manual,
                Some(COUNTRY_CODE_MISSING_WARNING),
            ),
        }
    }
}

pub fn normalize_phone(raw: &str, hints: &RegionHints<'_>) -> PhoneNormalization {
    PhoneNormalizer::new().normalize(raw, hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::{CountryGuess, ParsedPhone, PhoneParseError};

    fn no_hints() -> RegionHints<'static> {
        RegionHints::default()
    }

    fn us_default() -> RegionHints<'static> {
        RegionHints {
            default_country: Some(Region::US),
            ..RegionHints::default()
        }
    }

    #[test]
    fn blank_input_is_empty_and_high() {
        let result = normalize_phone("   ", &no_hints());
        assert_eq!(
            result,
            PhoneNormalization::new(String::new(), Confidence::High, None)
        );
    }

    #[test]
    fn valid_e164_is_canonicalized() {
        let result = normalize_phone("+1 (555) 123-4567", &no_hints());
        assert_eq!(result.normalized, "+15551234567");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.warning, None);
        assert!(result.is_sendable());
    }

    #[test]
    fn unassignable_e164_gets_low_confidence() {
        let result = normalize_phone("+1 055 123 4567", &no_hints());
        assert_eq!(result.normalized, "+10551234567");
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.warning.as_deref(), Some(UNVERIFIED_NUMBER_WARNING));
    }

    #[test]
    fn unparseable_plus_number_keeps_cleaned_input() {
        let result = normalize_phone("+999 (123) 456", &no_hints());
        assert_eq!(result.normalized, "+999123456");
        assert_eq!(result.confidence, Confidence::Manual);
        assert_eq!(result.warning.as_deref(), Some(FORMAT_WARNING));
    }

    #[test]
    fn too_short_number_is_manual() {
        let result = normalize_phone("123", &no_hints());
        assert_eq!(result.normalized, "123");
        assert_eq!(result.confidence, Confidence::Manual);
        assert!(result.warning.unwrap().contains("too short"));
    }

    #[test]
    fn input_without_digits_is_kept_as_cleaned_text() {
        let result = normalize_phone(" N/A ", &no_hints());
        assert_eq!(result.normalized, "N/A");
        assert_eq!(result.confidence, Confidence::Manual);
        assert_eq!(result.warning.as_deref(), Some(TOO_SHORT_WARNING));

        let result = normalize_phone("()", &us_default());
        assert_eq!(result.normalized, "()");
        assert_eq!(result.confidence, Confidence::Manual);
    }

    #[test]
    fn default_country_resolves_national_number() {
        let result = normalize_phone("5551234567", &us_default());
        assert_eq!(
            result,
            PhoneNormalization::new("+15551234567".to_string(), Confidence::High, None)
        );
    }

    #[test]
    fn pasted_number_without_plus_parses_against_default_country() {
        let result = normalize_phone("1 555 123 4567", &us_default());
        assert_eq!(result.normalized, "+15551234567");
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn invalid_national_number_with_default_country_is_low() {
        let result = normalize_phone("055-123-4567", &us_default());
        assert_eq!(result.normalized, "+10551234567");
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.warning.as_deref(), Some(UNVERIFIED_NUMBER_WARNING));
    }

    #[test]
    fn state_hint_resolves_country_with_high_confidence() {
        let result = normalize_phone(
            "(416) 555-0123",
            &RegionHints {
                state: Some("Ontario"),
                ..RegionHints::default()
            },
        );
        assert_eq!(result.normalized, "+14165550123");
        assert_eq!(result.confidence, Confidence::High);
        assert_eq!(result.warning, None);
    }

    #[test]
    fn hint_fallback_without_location_is_low_confidence() {
        let result = normalize_phone("555.123.4567", &no_hints());
        assert_eq!(result.normalized, "+15551234567");
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.warning.as_deref(), Some(LOW_CONFIDENCE_WARNING));
    }

    #[test]
    fn hint_fallback_country_is_configurable() {
        let normalizer =
            PhoneNormalizer::new().with_hint_fallback(Region::from_code("GB").unwrap());
        let result = normalizer.normalize("020 7946 0958", &no_hints());
        assert_eq!(result.normalized, "+442079460958");
        assert_eq!(result.confidence, Confidence::Low);
    }

    #[test]
    fn hint_that_needs_manual_assignment_is_manual() {
        let result = normalize_phone(
            "0123456789",
            &RegionHints {
                state: Some("TX"),
                ..RegionHints::default()
            },
        );
        assert_eq!(result.normalized, "+10123456789");
        assert_eq!(result.confidence, Confidence::Manual);
        assert_eq!(result.warning.as_deref(), Some(MANUAL_ASSIGNMENT_WARNING));
    }

    #[test]
    fn unresolvable_number_keeps_digits_and_asks_for_country_code() {
        let result = normalize_phone("1234-5678-9012-3456-7890", &no_hints());
        assert_eq!(result.normalized, "12345678901234567890");
        assert_eq!(result.confidence, Confidence::Manual);
        assert_eq!(
            result.warning.as_deref(),
            Some(COUNTRY_CODE_MISSING_WARNING)
        );
    }

    struct FixedHinter(CountryGuess);

    impl CountryHinter for FixedHinter {
        fn guess_country(&self, _raw: &str, _hints: &RegionHints<'_>) -> CountryGuess {
            self.0.clone()
        }
    }

    struct FailingParser;

    impl PhoneParser for FailingParser {
        fn parse(
            &self,
            _input: &str,
            _default_region: Option<Region>,
        ) -> Result<ParsedPhone, PhoneParseError> {
            Err(PhoneParseError::MissingRegion)
        }
    }

    #[test]
    fn hinter_warning_takes_precedence_over_defaults() {
        let normalizer = PhoneNormalizer::with_collaborators(
            FailingParser,
            FixedHinter(CountryGuess {
                normalized: Some("+12125550100".to_string()),
                confidence: GuessConfidence::Low,
                requires_manual_assignment: false,
                warning: Some("Area code is unusual".to_string()),
            }),
        );
        let result = normalizer.normalize("2125550100", &no_hints());
        assert_eq!(result.confidence, Confidence::Low);
        assert_eq!(result.warning.as_deref(), Some("Area code is unusual"));
    }

    #[test]
    fn hinter_result_without_plus_is_ignored() {
        let normalizer = PhoneNormalizer::with_collaborators(
            FailingParser,
            FixedHinter(CountryGuess {
                normalized: Some("2125550100".to_string()),
                confidence: GuessConfidence::High,
                requires_manual_assignment: false,
                warning: None,
            }),
        );
        let result = normalizer.normalize("212-555-0100", &no_hints());
        assert_eq!(result.normalized, "2125550100");
        assert_eq!(result.confidence, Confidence::Manual);
        assert_eq!(
            result.warning.as_deref(),
            Some(COUNTRY_CODE_MISSING_WARNING)
        );
    }
}
