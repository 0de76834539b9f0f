pub mod normalize;
pub mod validity;

pub use normalize::{
    normalize_phone, Confidence, PhoneNormalization, PhoneNormalizer, DEFAULT_HINT_COUNTRY,
};
pub use validity::{resolve_validity, ValidityResolver, ValidityVerdict};
