use crate::domain::phone::national_length_in_range;
use crate::domain::{strip_phone_separators, Contact};
use crate::phone::{CallingCodeParser, PhoneParser};
use serde::{Deserialize, Serialize};

pub const PHONE_MISSING_PLUS_REASON: &str = "Phone number exists but is not in E.164 format (must start with + and include country code). Email is also invalid or missing.";
pub const PHONE_INVALID_REASON: &str =
    "Phone number exists but is invalid or not in E.164 format. Email is also invalid or missing.";
pub const WEBSITE_INVALID_REASON: &str = "Website exists but is invalid (websiteValid = false)";
pub const BACKEND_VALID_REASON: &str = "Valid contact (computed by backend)";
pub const BACKEND_INVALID_REASON: &str = "Invalid contact (computed by backend)";
pub const EMAIL_AND_PHONE_REASON: &str =
    "Valid email and valid phone number (E.164 format) present";
pub const EMAIL_ONLY_REASON: &str = "Valid email address present";
pub const PHONE_ONLY_REASON: &str = "Valid phone number (E.164 format) present";
pub const MISSING_CHANNEL_REASON: &str =
    "Missing valid email or valid phone number (E.164 format)";

/// Outreach verdict for one contact. `is_valid` is `None` when the verdict is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityVerdict {
    pub is_valid: Option<bool>,
    pub reason: String,
}

impl ValidityVerdict {
    pub fn valid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: Some(true),
            reason: reason.into(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self {
            is_valid: Some(false),
            reason: reason.into(),
        }
    }

    pub fn unknown(reason: impl Into<String>) -> Self {
        Self {
            is_valid: None,
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid == Some(true)
    }

    pub fn is_invalid(&self) -> bool {
        self.is_valid == Some(false)
    }
}

#[derive(Debug, Clone, Copy)]
struct PhoneCheck {
    exists: bool,
    has_plus: bool,
    valid: bool,
}

impl PhoneCheck {
    fn blocks(&self, email_valid: bool) -> bool {
        self.exists && !self.valid && !email_valid
    }

    fn blocked_reason(&self) -> &'static str {
        if self.has_plus {
            PHONE_INVALID_REASON
        } else {
            PHONE_MISSING_PLUS_REASON
        }
    }
}

/// Decides whether a contact can be used for outreach. The backend verdict wins unless
/// the phone fails the local E.164 check and email offers no fallback.
#[derive(Debug, Clone, Default)]
pub struct ValidityResolver<P = CallingCodeParser> {
    parser: P,
}

impl ValidityResolver {
    pub fn new() -> Self {
        Self {
            parser: CallingCodeParser,
        }
    }
}

impl<P: PhoneParser> ValidityResolver<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }

    pub fn resolve(&self, contact: &Contact) -> ValidityVerdict {
        let phone = self.check_phone(contact.phone_trimmed());
        let email_valid = contact.email_valid == Some(true);

        if let Some(backend) = &contact.backend_verdict {
            if phone.blocks(email_valid) {
                return ValidityVerdict::invalid(phone.blocked_reason());
            }
            return match backend.supplied_reason() {
                Some(reason) => ValidityVerdict {
                    is_valid: Some(backend.valid),
                    reason: reason.to_string(),
                },
                None if backend.valid => ValidityVerdict::valid(BACKEND_VALID_REASON),
                None => ValidityVerdict::invalid(BACKEND_INVALID_REASON),
            };
        }

        let has_website = contact.has_website();
        if has_website && contact.website_valid == Some(false) {
            return ValidityVerdict::invalid(WEBSITE_INVALID_REASON);
        }

        if phone.blocks(email_valid) {
            return ValidityVerdict::invalid(phone.blocked_reason());
        }

        let has_valid_email_or_phone = email_valid || phone.valid;
        let website_ok = !has_website || contact.website_valid == Some(true);
        if has_valid_email_or_phone && website_ok {
            let reason = match (email_valid, phone.valid) {
                (true, true) => EMAIL_AND_PHONE_REASON,
                (true, false) => EMAIL_ONLY_REASON,
                _ => PHONE_ONLY_REASON,
            };
            return ValidityVerdict::valid(reason);
        }

        if phone.exists && !phone.has_plus {
            ValidityVerdict::invalid(PHONE_MISSING_PLUS_REASON)
        } else {
            ValidityVerdict::invalid(MISSING_CHANNEL_REASON)
        }
    }

    /// Format and length only; a parsed number the plan flags as unassignable still passes.
    fn check_phone(&self, phone: Option<&str>) -> PhoneCheck {
        let Some(trimmed) = phone else {
            return PhoneCheck {
                exists: false,
                has_plus: false,
                valid: false,
            };
        };

        let cleaned = strip_phone_separators(trimmed);
        let has_plus = cleaned.starts_with('+');
        let valid = has_plus
            && self
                .parser
                .parse(&cleaned, None)
                .is_ok_and(|parsed| national_length_in_range(&parsed.national_number));

        PhoneCheck {
            exists: true,
            has_plus,
            valid,
        }
    }
}

pub fn resolve_validity(contact: &Contact) -> ValidityVerdict {
    ValidityResolver::new().resolve(contact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BackendVerdict;

    fn contact() -> Contact {
        Contact::default()
    }

    fn backend(valid: bool, reason: Option<&str>) -> Option<BackendVerdict> {
        Some(BackendVerdict {
            valid,
            reason: reason.map(str::to_string),
        })
    }

    #[test]
    fn phone_without_plus_and_no_email_is_invalid() {
        let verdict = resolve_validity(&Contact {
            phone: Some("555-123-4567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(PHONE_MISSING_PLUS_REASON));
        assert!(verdict.reason.contains("E.164 format"));
    }

    #[test]
    fn e164_phone_alone_is_valid() {
        let verdict = resolve_validity(&Contact {
            phone: Some("+15551234567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(PHONE_ONLY_REASON));
    }

    #[test]
    fn formatted_e164_phone_is_cleaned_before_parsing() {
        let verdict = resolve_validity(&Contact {
            phone: Some("  +1 (555) 123-4567 ".to_string()),
            ..contact()
        });
        assert!(verdict.is_valid());
    }

    #[test]
    fn unassignable_but_well_formed_phone_counts_as_valid() {
        let verdict = resolve_validity(&Contact {
            phone: Some("+10551234567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(PHONE_ONLY_REASON));
    }

    #[test]
    fn plus_phone_that_fails_parsing_uses_invalid_reason() {
        let verdict = resolve_validity(&Contact {
            phone: Some("+999 123 4567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(PHONE_INVALID_REASON));
    }

    #[test]
    fn short_national_number_fails_length_check() {
        let verdict = resolve_validity(&Contact {
            phone: Some("+44 20 794".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(PHONE_INVALID_REASON));
    }

    #[test]
    fn email_validity_requires_strict_true() {
        let verdict = resolve_validity(&Contact {
            email: Some("ada@example.com".to_string()),
            email_valid: None,
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(MISSING_CHANNEL_REASON));
    }

    #[test]
    fn valid_email_and_phone_reason() {
        let verdict = resolve_validity(&Contact {
            email: Some("ada@example.com".to_string()),
            email_valid: Some(true),
            phone: Some("+15551234567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(EMAIL_AND_PHONE_REASON));
    }

    #[test]
    fn valid_email_with_bad_phone_is_still_valid() {
        let verdict = resolve_validity(&Contact {
            email_valid: Some(true),
            phone: Some("555-123-4567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(EMAIL_ONLY_REASON));
    }

    #[test]
    fn invalid_website_blocks_even_with_valid_email() {
        let verdict = resolve_validity(&Contact {
            email_valid: Some(true),
            website: Some("https://example.com".to_string()),
            website_valid: Some(false),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(WEBSITE_INVALID_REASON));
    }

    #[test]
    fn unverified_website_fails_website_check() {
        let verdict = resolve_validity(&Contact {
            email_valid: Some(true),
            website: Some("https://example.com".to_string()),
            website_valid: None,
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(MISSING_CHANNEL_REASON));
    }

    #[test]
    fn unverified_website_with_national_phone_uses_e164_reason() {
        let verdict = resolve_validity(&Contact {
            email_valid: Some(true),
            phone: Some("555-123-4567".to_string()),
            website: Some("https://example.com".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(PHONE_MISSING_PLUS_REASON));
    }

    #[test]
    fn verified_website_passes() {
        let verdict = resolve_validity(&Contact {
            email_valid: Some(true),
            website: Some("https://example.com".to_string()),
            website_valid: Some(true),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(EMAIL_ONLY_REASON));
    }

    #[test]
    fn empty_contact_is_missing_channels() {
        let verdict = resolve_validity(&contact());
        assert_eq!(verdict, ValidityVerdict::invalid(MISSING_CHANNEL_REASON));
    }

    #[test]
    fn backend_reason_is_returned_verbatim() {
        let verdict = resolve_validity(&Contact {
            backend_verdict: backend(false, Some("SMTP probe bounced")),
            email_valid: Some(true),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid("SMTP probe bounced"));
    }

    #[test]
    fn backend_without_reason_gets_default_text() {
        let valid = resolve_validity(&Contact {
            backend_verdict: backend(true, None),
            ..contact()
        });
        assert_eq!(valid, ValidityVerdict::valid(BACKEND_VALID_REASON));

        let invalid = resolve_validity(&Contact {
            backend_verdict: backend(false, Some("  ")),
            ..contact()
        });
        assert_eq!(invalid, ValidityVerdict::invalid(BACKEND_INVALID_REASON));
    }

    #[test]
    fn backend_valid_is_downgraded_by_bad_phone_without_email() {
        let verdict = resolve_validity(&Contact {
            backend_verdict: backend(true, Some("Reachable")),
            phone: Some("555-123-4567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::invalid(PHONE_MISSING_PLUS_REASON));
    }

    #[test]
    fn backend_verdict_stands_when_email_is_valid() {
        let verdict = resolve_validity(&Contact {
            backend_verdict: backend(true, None),
            email_valid: Some(true),
            phone: Some("555-123-4567".to_string()),
            ..contact()
        });
        assert_eq!(verdict, ValidityVerdict::valid(BACKEND_VALID_REASON));
    }

    #[test]
    fn backend_invalid_is_never_upgraded() {
        let verdict = resolve_validity(&Contact {
            backend_verdict: backend(false, None),
            email_valid: Some(true),
            phone: Some("+15551234567".to_string()),
            ..contact()
        });
        assert!(verdict.is_invalid());
    }

    #[test]
    fn backend_verdict_ignores_website_blocker() {
        let verdict = resolve_validity(&Contact {
            backend_verdict: backend(true, None),
            website: Some("https://example.com".to_string()),
            website_valid: Some(false),
            ..contact()
        });
        assert!(verdict.is_valid());
    }
}
