use crate::domain::{digits_only, Region};
use crate::phone::parser::{CallingCodeParser, PhoneParser};
use serde::{Deserialize, Serialize};

const CANADA: Region = Region::from_static("CA");
const UNITED_KINGDOM: Region = Region::from_static("GB");
const AUSTRALIA: Region = Region::from_static("AU");

const US_STATES: &[(&str, &str)] = &[
    ("AL", "alabama"),
    ("AK", "alaska"),
    ("AZ", "arizona"),
    ("AR", "arkansas"),
    ("CA", "california"),
    ("CO", "colorado"),
    ("CT", "connecticut"),
    ("DE", "delaware"),
    ("DC", "district of columbia"),
    ("FL", "florida"),
    ("GA", "georgia"),
    ("HI", "hawaii"),
    ("ID", "idaho"),
    ("IL", "illinois"),
    ("IN", "indiana"),
    ("IA", "iowa"),
    ("KS", "kansas"),
    ("KY", "kentucky"),
    ("LA", "louisiana"),
    ("ME", "maine"),
    ("MD", "maryland"),
    ("MA", "massachusetts"),
    ("MI", "michigan"),
    ("MN", "minnesota"),
    ("MS", "mississippi"),
    ("MO", "missouri"),
    ("MT", "montana"),
    ("NE", "nebraska"),
    ("NV", "nevada"),
    ("NH", "new hampshire"),
    ("NJ", "new jersey"),
    ("NM", "new mexico"),
    ("NY", "new york"),
    ("NC", "north carolina"),
    ("ND", "north dakota"),
    ("OH", "ohio"),
    ("OK", "oklahoma"),
    ("OR", "oregon"),
    ("PA", "pennsylvania"),
    ("RI", "rhode island"),
    ("SC", "south carolina"),
    ("SD", "south dakota"),
    ("TN", "tennessee"),
    ("TX", "texas"),
    ("UT", "utah"),
    ("VT", "vermont"),
    ("VA", "virginia"),
    ("WA", "washington"),
    ("WV", "west virginia"),
    ("WI", "wisconsin"),
    ("WY", "wyoming"),
    ("PR", "puerto rico"),
    ("GU", "guam"),
    ("VI", "virgin islands"),
    ("AS", "american samoa"),
    ("MP", "northern mariana islands"),
];

const CANADIAN_PROVINCES: &[(&str, &str)] = &[
    ("AB", "alberta"),
    ("BC", "british columbia"),
    ("MB", "manitoba"),
    ("NB", "new brunswick"),
    ("NL", "newfoundland and labrador"),
    ("NS", "nova scotia"),
    ("NT", "northwest territories"),
    ("NU", "nunavut"),
    ("ON", "ontario"),
    ("PE", "prince edward island"),
    ("QC", "quebec"),
    ("SK", "saskatchewan"),
    ("YT", "yukon"),
];

// WA, SA and NT collide with US and Canadian codes, so only full names map for those.
const AUSTRALIAN_STATES: &[(&str, &str)] = &[
    ("NSW", "new south wales"),
    ("VIC", "victoria"),
    ("QLD", "queensland"),
    ("TAS", "tasmania"),
    ("ACT", "australian capital territory"),
    ("", "western australia"),
    ("", "south australia"),
    ("", "northern territory"),
];

const US_ZIP_SHAPES: &[&str] = &["99999", "99999-9999", "999999999"];
const CANADIAN_POSTAL_SHAPES: &[&str] = &["A9A9A9"];
const UK_POSTCODE_SHAPES: &[&str] = &["A99AA", "A999AA", "AA99AA", "AA999AA", "A9A9AA", "AA9A9AA"];

/// Location hints that help pick a country for a national number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionHints<'a> {
    pub state: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub default_country: Option<Region>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuessConfidence {
    High,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryGuess {
    pub normalized: Option<String>,
    pub confidence: GuessConfidence,
    pub requires_manual_assignment: bool,
    pub warning: Option<String>,
}

/// Guesses a country for a phone number that arrived without a calling code.
pub trait CountryHinter: Send + Sync {
    fn guess_country(&self, raw: &str, hints: &RegionHints<'_>) -> CountryGuess;
}

/// Picks a country from state and ZIP hints, then parses the digits as a national
/// number of that country.
#[derive(Debug, Clone, Default)]
pub struct LocationHinter<P = CallingCodeParser> {
    parser: P,
}

impl LocationHinter {
    pub fn new() -> Self {
        Self {
            parser: CallingCodeParser,
        }
    }
}

impl<P: PhoneParser> LocationHinter<P> {
    pub fn with_parser(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: PhoneParser> CountryHinter for LocationHinter<P> {
    fn guess_country(&self, raw: &str, hints: &RegionHints<'_>) -> CountryGuess {
        let digits = digits_only(raw);
        let from_state = hints.state.and_then(region_for_state);
        let from_zip = hints.zip_code.and_then(region_for_zip);

        let (region, confidence, warning) = match (from_state, from_zip) {
            (Some(state), Some(zip)) if state != zip => (
                state,
                GuessConfidence::Low,
                Some(format!(
                    "State suggests {state} but ZIP code suggests {zip}. Please verify the country code before sending SMS."
                )),
            ),
            (Some(region), _) | (None, Some(region)) => (region, GuessConfidence::High, None),
            (None, None) => (
                hints.default_country.unwrap_or(Region::US),
                GuessConfidence::Low,
                None,
            ),
        };

        if digits.is_empty() {
            return CountryGuess {
                normalized: None,
                confidence: GuessConfidence::Low,
                requires_manual_assignment: true,
                warning,
            };
        }

        match self.parser.parse(&digits, Some(region)) {
            Ok(parsed) => CountryGuess {
                normalized: Some(parsed.format_e164()),
                confidence: if parsed.is_valid() {
                    confidence
                } else {
                    GuessConfidence::Low
                },
                requires_manual_assignment: !parsed.is_valid(),
                warning,
            },
            Err(_) => CountryGuess {
                normalized: None,
                confidence: GuessConfidence::Low,
                requires_manual_assignment: true,
                warning,
            },
        }
    }
}

pub fn region_for_state(raw: &str) -> Option<Region> {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    let lookup = |table: &[(&str, &str)]| {
        table.iter().any(|(code, name)| {
            (!code.is_empty() && code.eq_ignore_ascii_case(trimmed))
                || name.eq_ignore_ascii_case(trimmed)
        })
    };

    if lookup(US_STATES) {
        Some(Region::US)
    } else if lookup(CANADIAN_PROVINCES) {
        Some(CANADA)
    } else if lookup(AUSTRALIAN_STATES) {
        Some(AUSTRALIA)
    } else {
        None
    }
}

pub fn region_for_zip(raw: &str) -> Option<Region> {
    let compact: String = raw
        .trim()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect();
    if compact.is_empty() {
        return None;
    }
    let matches_any = |shapes: &[&str]| shapes.iter().any(|shape| matches_shape(&compact, shape));

    if matches_any(US_ZIP_SHAPES) {
        Some(Region::US)
    } else if matches_any(CANADIAN_POSTAL_SHAPES) {
        Some(CANADA)
    } else if matches_any(UK_POSTCODE_SHAPES) {
        Some(UNITED_KINGDOM)
    } else {
        None
    }
}

/// `9` stands for a digit, `A` for a letter, anything else must match literally.
fn matches_shape(value: &str, shape: &str) -> bool {
    value.chars().count() == shape.chars().count()
        && value.chars().zip(shape.chars()).all(|(ch, slot)| match slot {
            '9' => ch.is_ascii_digit(),
            'A' => ch.is_ascii_alphabetic(),
            literal => ch == literal,
        })
}
