use crate::domain::Contact;
use crate::rules::{Confidence, PhoneNormalization, ValidityVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValiditySelector {
    Valid,
    Invalid,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSelector {
    Email,
    Phone,
    Website,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterExpr {
    Text(String),
    Validity(ValiditySelector),
    Confidence(Confidence),
    Has(FieldSelector),
    And(Vec<FilterExpr>),
}

pub type ContactFilter = FilterExpr;

/// One evaluated row: the contact plus what the engine derived for it.
#[derive(Debug, Clone, Copy)]
pub struct FilterSubject<'a> {
    pub contact: &'a Contact,
    pub verdict: &'a ValidityVerdict,
    pub phone: Option<&'a PhoneNormalization>,
}

impl FilterExpr {
    pub fn matches(&self, subject: &FilterSubject<'_>) -> bool {
        match self {
            FilterExpr::Text(needle) => text_matches(subject.contact, needle),
            FilterExpr::Validity(selector) => match selector {
                ValiditySelector::Valid => subject.verdict.is_valid == Some(true),
                ValiditySelector::Invalid => subject.verdict.is_valid == Some(false),
                ValiditySelector::Unknown => subject.verdict.is_valid.is_none(),
            },
            FilterExpr::Confidence(confidence) => subject.contact.has_phone()
                && subject
                    .phone
                    .is_some_and(|phone| phone.confidence == *confidence),
            FilterExpr::Has(field) => match field {
                FieldSelector::Email => subject.contact.has_email(),
                FieldSelector::Phone => subject.contact.has_phone(),
                FieldSelector::Website => subject.contact.has_website(),
            },
            FilterExpr::And(terms) => terms.iter().all(|term| term.matches(subject)),
        }
    }

    /// Whether evaluating this filter needs the phone normalization of each row.
    pub fn needs_phone(&self) -> bool {
        match self {
            FilterExpr::Confidence(_) => true,
            FilterExpr::And(terms) => terms.iter().any(FilterExpr::needs_phone),
            _ => false,
        }
    }
}

fn text_matches(contact: &Contact, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    [
        contact.name.as_deref(),
        contact.email.as_deref(),
        contact.phone.as_deref(),
        contact.website.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|value| value.to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::{FieldSelector, FilterExpr, FilterSubject, ValiditySelector};
    use crate::domain::Contact;
    use crate::rules::{Confidence, PhoneNormalization, ValidityVerdict};

    fn contact() -> Contact {
        Contact {
            name: Some("Acme Plumbing".to_string()),
            email: Some("Info@Acme.example".to_string()),
            phone: Some("555-123-4567".to_string()),
            ..Contact::default()
        }
    }

    #[test]
    fn text_match_is_case_insensitive_across_fields() {
        let contact = contact();
        let verdict = ValidityVerdict::invalid("nope");
        let subject = FilterSubject {
            contact: &contact,
            verdict: &verdict,
            phone: None,
        };
        assert!(FilterExpr::Text("acme".to_string()).matches(&subject));
        assert!(FilterExpr::Text("info@".to_string()).matches(&subject));
        assert!(FilterExpr::Text("123-45".to_string()).matches(&subject));
        assert!(!FilterExpr::Text("bakery".to_string()).matches(&subject));
    }

    #[test]
    fn selectors_combine_with_and() {
        let contact = contact();
        let verdict = ValidityVerdict::invalid("nope");
        let phone = PhoneNormalization {
            normalized: "+15551234567".to_string(),
            confidence: Confidence::Low,
            warning: Some("check".to_string()),
        };
        let subject = FilterSubject {
            contact: &contact,
            verdict: &verdict,
            phone: Some(&phone),
        };
        let filter = FilterExpr::And(vec![
            FilterExpr::Validity(ValiditySelector::Invalid),
            FilterExpr::Confidence(Confidence::Low),
            FilterExpr::Has(FieldSelector::Email),
        ]);
        assert!(filter.matches(&subject));
        assert!(filter.needs_phone());
        assert!(!FilterExpr::Has(FieldSelector::Website).matches(&subject));
        assert!(!FilterExpr::Validity(ValiditySelector::Unknown).matches(&subject));
    }

    #[test]
    fn confidence_never_matches_without_phone() {
        let contact = Contact::default();
        let verdict = ValidityVerdict::invalid("nope");
        let phone = PhoneNormalization {
            normalized: String::new(),
            confidence: Confidence::High,
            warning: None,
        };
        let subject = FilterSubject {
            contact: &contact,
            verdict: &verdict,
            phone: Some(&phone),
        };
        assert!(!FilterExpr::Confidence(Confidence::High).matches(&subject));
    }
}
