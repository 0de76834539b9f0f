pub mod hint;
pub mod metadata;
mod parser;

pub use hint::{
    region_for_state, region_for_zip, CountryGuess, CountryHinter, GuessConfidence,
    LocationHinter, RegionHints,
};
pub use parser::{CallingCodeParser, ParsedPhone, PhoneParseError, PhoneParser};
