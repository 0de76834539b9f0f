use crate::domain::Region;
use crate::phone::metadata::{self, RegionMetadata, NANP_CALLING_CODE};
use serde::Serialize;
use thiserror::Error;

const MIN_PARSE_DIGITS: usize = 2;
const MAX_PARSE_DIGITS: usize = 17;
const EXTENSION_MARKERS: [char; 5] = ['x', 'X', '#', ';', ','];
const FORMATTING_CHARS: [char; 5] = ['-', '(', ')', '.', '/'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhoneParseError {
    #[error("phone number is empty")]
    Empty,
    #[error("phone number contains invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("unknown country calling code")]
    UnknownCallingCode,
    #[error("no region to interpret a national number")]
    MissingRegion,
    #[error("phone number is too short")]
    TooShort,
    #[error("phone number is too long")]
    TooLong,
}

/// A structurally parsed phone number. `valid` reports whether the number fits the
/// region's numbering plan; a parsed number may still be unassignable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPhone {
    pub calling_code: &'static str,
    pub national_number: String,
    pub country: Option<Region>,
    pub valid: bool,
}

impl ParsedPhone {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn format_e164(&self) -> String {
        format!("+{}{}", self.calling_code, self.national_number)
    }
}

/// Turns a phone string into a [`ParsedPhone`]. Implementations must be reentrant and
/// must report malformed input through the error, never by panicking.
pub trait PhoneParser: Send + Sync {
    fn parse(
        &self,
        input: &str,
        default_region: Option<Region>,
    ) -> Result<ParsedPhone, PhoneParseError>;
}

/// Table-driven parser over [`metadata::REGIONS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CallingCodeParser;

impl PhoneParser for CallingCodeParser {
    fn parse(
        &self,
        input: &str,
        default_region: Option<Region>,
    ) -> Result<ParsedPhone, PhoneParseError> {
        let (international, digits) = extract_digits(input)?;

        let (meta, national) = if international {
            metadata::split_calling_code(&digits).ok_or(PhoneParseError::UnknownCallingCode)?
        } else {
            let region = default_region.ok_or(PhoneParseError::MissingRegion)?;
            let meta =
                metadata::find_region(region.as_str()).ok_or(PhoneParseError::MissingRegion)?;
            (meta, strip_national_prefix(meta, &digits))
        };

        if national.len() < MIN_PARSE_DIGITS {
            return Err(PhoneParseError::TooShort);
        }
        if national.len() > MAX_PARSE_DIGITS {
            return Err(PhoneParseError::TooLong);
        }

        let region = if meta.calling_code == NANP_CALLING_CODE {
            metadata::nanp_region_for(national)
        } else {
            meta.region
        };

        Ok(ParsedPhone {
            calling_code: meta.calling_code,
            national_number: national.to_string(),
            country: Some(Region::from_static(region)),
            valid: metadata::is_valid_national(meta, national),
        })
    }
}

/// Returns whether the input carried a leading `+` plus the digits up to any extension.
fn extract_digits(input: &str) -> Result<(bool, String), PhoneParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PhoneParseError::Empty);
    }

    let (international, body) = match trimmed.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if EXTENSION_MARKERS.contains(&ch) {
            if digits.is_empty() {
                return Err(PhoneParseError::InvalidCharacter(ch));
            }
            break;
        } else if !(ch.is_whitespace() || FORMATTING_CHARS.contains(&ch)) {
            return Err(PhoneParseError::InvalidCharacter(ch));
        }
    }

    if digits.is_empty() {
        return Err(PhoneParseError::TooShort);
    }
    Ok((international, digits))
}

/// Drops a trunk prefix or a repeated calling code when what remains still fits the
/// region's length range.
fn strip_national_prefix<'a>(meta: &RegionMetadata, digits: &'a str) -> &'a str {
    let fits = |rest: &str| (meta.min_national_len..=meta.max_national_len).contains(&rest.len());
    if fits(digits) {
        return digits;
    }

    let prefixes = meta.trunk_prefix.into_iter().chain([meta.calling_code]);
    for prefix in prefixes {
        if let Some(rest) = digits.strip_prefix(prefix) {
            if fits(rest) {
                return rest;
            }
        }
    }
    digits
}
