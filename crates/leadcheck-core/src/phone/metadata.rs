/// Numbering facts for one region. The first entry for a calling code is its main region.
#[derive(Debug)]
pub struct RegionMetadata {
    pub region: &'static str,
    pub calling_code: &'static str,
    pub trunk_prefix: Option<&'static str>,
    pub min_national_len: usize,
    pub max_national_len: usize,
    pub leading_digits: &'static str,
}

const fn entry(
    region: &'static str,
    calling_code: &'static str,
    trunk_prefix: Option<&'static str>,
    min_national_len: usize,
    max_national_len: usize,
    leading_digits: &'static str,
) -> RegionMetadata {
    RegionMetadata {
        region,
        calling_code,
        trunk_prefix,
        min_national_len,
        max_national_len,
        leading_digits,
    }
}

pub const NANP_CALLING_CODE: &str = "1";

pub static REGIONS: &[RegionMetadata] = &[
    entry("US", "1", Some("1"), 10, 10, "23456789"),
    entry("CA", "1", Some("1"), 10, 10, "23456789"),
    entry("RU", "7", Some("8"), 10, 10, "3489"),
    entry("EG", "20", Some("0"), 8, 10, "123456789"),
    entry("ZA", "27", Some("0"), 9, 9, "12345678"),
    entry("GR", "30", None, 10, 10, "2689"),
    entry("NL", "31", Some("0"), 9, 9, "123456789"),
    entry("BE", "32", Some("0"), 8, 9, "123456789"),
    entry("FR", "33", Some("0"), 9, 9, "123456789"),
    entry("ES", "34", None, 9, 9, "56789"),
    entry("IT", "39", None, 6, 11, "03"),
    entry("RO", "40", Some("0"), 9, 9, "237"),
    entry("CH", "41", Some("0"), 9, 9, "23456789"),
    entry("AT", "43", Some("0"), 7, 13, "123456789"),
    entry("GB", "44", Some("0"), 9, 10, "1235789"),
    entry("DK", "45", None, 8, 8, "23456789"),
    entry("SE", "46", Some("0"), 7, 9, "123456789"),
    entry("NO", "47", None, 8, 8, "23456789"),
    entry("PL", "48", None, 9, 9, "123456789"),
    entry("DE", "49", Some("0"), 6, 13, "123456789"),
    entry("PE", "51", Some("0"), 8, 9, "123456789"),
    entry("MX", "52", None, 10, 10, "123456789"),
    entry("AR", "54", Some("0"), 10, 10, "123456789"),
    entry("BR", "55", Some("0"), 10, 11, "123456789"),
    entry("CL", "56", None, 9, 9, "23456789"),
    entry("CO", "57", None, 10, 10, "3456"),
    entry("VE", "58", Some("0"), 10, 10, "2456789"),
    entry("MY", "60", Some("0"), 8, 10, "13456789"),
    entry("AU", "61", Some("0"), 9, 9, "23478"),
    entry("ID", "62", Some("0"), 9, 12, "2345678"),
    entry("PH", "63", Some("0"), 10, 10, "2345689"),
    entry("NZ", "64", Some("0"), 8, 10, "234679"),
    entry("SG", "65", None, 8, 8, "3689"),
    entry("TH", "66", Some("0"), 8, 9, "2345689"),
    entry("JP", "81", Some("0"), 9, 10, "123456789"),
    entry("KR", "82", Some("0"), 8, 10, "123456"),
    entry("VN", "84", Some("0"), 9, 10, "235789"),
    entry("CN", "86", Some("0"), 10, 11, "123456789"),
    entry("TR", "90", Some("0"), 10, 10, "2345"),
    entry("IN", "91", Some("0"), 10, 10, "123456789"),
    entry("PK", "92", Some("0"), 9, 10, "2345689"),
    entry("MA", "212", Some("0"), 9, 9, "5678"),
    entry("NG", "234", Some("0"), 8, 10, "1234789"),
    entry("KE", "254", Some("0"), 9, 9, "1234567"),
    entry("PT", "351", None, 9, 9, "2369"),
    entry("IE", "353", Some("0"), 7, 9, "124568"),
    entry("FI", "358", Some("0"), 6, 12, "1234579"),
    entry("UA", "380", Some("0"), 9, 9, "345679"),
    entry("CZ", "420", None, 9, 9, "234579"),
    entry("HK", "852", None, 8, 8, "2345679"),
    entry("TW", "886", Some("0"), 8, 9, "23456789"),
    entry("SA", "966", Some("0"), 9, 9, "1589"),
    entry("AE", "971", Some("0"), 8, 9, "234679"),
    entry("IL", "972", Some("0"), 8, 9, "234589"),
];

/// Canadian area codes; every other valid NANP area code resolves to the US.
const CANADIAN_AREA_CODES: &[&str] = &[
    "204", "226", "236", "249", "250", "263", "289", "306", "343", "354", "365", "367", "368",
    "382", "387", "403", "416", "418", "428", "431", "437", "438", "450", "460", "468", "474",
    "506", "514", "519", "548", "579", "581", "584", "587", "600", "604", "613", "639", "647",
    "672", "683", "705", "709", "742", "753", "778", "780", "782", "807", "819", "825", "867",
    "873", "879", "902", "905",
];

pub fn find_region(code: &str) -> Option<&'static RegionMetadata> {
    REGIONS
        .iter()
        .find(|meta| meta.region.eq_ignore_ascii_case(code))
}

/// Splits `digits` into a known calling code and the remaining national digits.
/// Calling codes are prefix-free, so at most one of the 1-3 digit prefixes matches.
pub fn split_calling_code(digits: &str) -> Option<(&'static RegionMetadata, &str)> {
    (1..=3)
        .filter(|len| digits.len() >= *len)
        .find_map(|len| {
            let (code, rest) = digits.split_at(len);
            main_region_for(code).map(|meta| (meta, rest))
        })
}

pub fn main_region_for(calling_code: &str) -> Option<&'static RegionMetadata> {
    REGIONS
        .iter()
        .find(|meta| meta.calling_code == calling_code)
}

pub fn nanp_region_for(national_number: &str) -> &'static str {
    let area_code = national_number.get(..3).unwrap_or_default();
    if CANADIAN_AREA_CODES.contains(&area_code) {
        "CA"
    } else {
        "US"
    }
}

pub fn is_valid_national(meta: &RegionMetadata, national_number: &str) -> bool {
    if meta.calling_code == NANP_CALLING_CODE {
        return is_valid_nanp(national_number);
    }
    let len = national_number.len();
    if len < meta.min_national_len || len > meta.max_national_len {
        return false;
    }
    national_number
        .chars()
        .next()
        .is_some_and(|first| meta.leading_digits.contains(first))
}

/// `NXX` area code without `N11` or `N9X`, then a seven-digit subscriber part whose
/// exchange is not `N11`. The exchange's first digit is not checked, so fictional
/// `555-1XX` style numbers stay valid.
fn is_valid_nanp(national_number: &str) -> bool {
    let digits = national_number.as_bytes();
    if digits.len() != 10 {
        return false;
    }
    let is_n = |digit: u8| (b'2'..=b'9').contains(&digit);
    let is_n11 = |block: &[u8]| block[1] == b'1' && block[2] == b'1';
    let area = &digits[..3];
    let exchange = &digits[3..6];
    is_n(area[0]) && area[1] != b'9' && !is_n11(area) && !is_n11(exchange)
}
