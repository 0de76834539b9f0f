pub mod contact;
pub mod phone;
pub mod region;

pub use contact::{BackendVerdict, Contact};
pub use phone::{
    digits_only, strip_phone_separators, MAX_NATIONAL_DIGITS, MIN_NATIONAL_DIGITS,
    PHONE_SEPARATOR_CHARS,
};
pub use region::Region;
