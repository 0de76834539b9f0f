use crate::filter::ast::{ContactFilter, FieldSelector, FilterExpr, ValiditySelector};
use crate::filter::FilterParseError;
use crate::rules::Confidence;

pub fn parse_filter(input: &str) -> Result<ContactFilter, FilterParseError> {
    let mut terms = Vec::new();

    for token in input.split_whitespace() {
        if let Some(raw) = token.strip_prefix("valid:") {
            terms.push(FilterExpr::Validity(parse_validity_selector(token, raw)?));
        } else if let Some(raw) = token.strip_prefix("confidence:") {
            terms.push(FilterExpr::Confidence(parse_confidence_selector(token, raw)?));
        } else if let Some(raw) = token.strip_prefix("has:") {
            terms.push(FilterExpr::Has(parse_field_selector(token, raw)?));
        } else {
            terms.push(FilterExpr::Text(token.to_string()));
        }
    }

    Ok(FilterExpr::And(terms))
}

fn parse_validity_selector(token: &str, raw: &str) -> Result<ValiditySelector, FilterParseError> {
    match raw {
        "" => Err(FilterParseError::EmptySelector(token.to_string())),
        "yes" | "true" => Ok(ValiditySelector::Valid),
        "no" | "false" => Ok(ValiditySelector::Invalid),
        "unknown" => Ok(ValiditySelector::Unknown),
        _ => Err(FilterParseError::InvalidValiditySelector(raw.to_string())),
    }
}

fn parse_confidence_selector(token: &str, raw: &str) -> Result<Confidence, FilterParseError> {
    match raw {
        "" => Err(FilterParseError::EmptySelector(token.to_string())),
        "high" => Ok(Confidence::High),
        "low" => Ok(Confidence::Low),
        "manual" => Ok(Confidence::Manual),
        _ => Err(FilterParseError::InvalidConfidenceSelector(raw.to_string())),
    }
}

fn parse_field_selector(token: &str, raw: &str) -> Result<FieldSelector, FilterParseError> {
    match raw {
        "" => Err(FilterParseError::EmptySelector(token.to_string())),
        "email" => Ok(FieldSelector::Email),
        "phone" => Ok(FieldSelector::Phone),
        "website" => Ok(FieldSelector::Website),
        _ => Err(FilterParseError::InvalidFieldSelector(raw.to_string())),
    }
}
