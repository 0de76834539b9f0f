use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use leadcheck_core::dto::{ContactListPayload, ContactRecord};
use leadcheck_core::filter::{parse_filter, ContactFilter};
use leadcheck_core::rules::ValidityVerdict;
use leadcheck_core::Region;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const STDIN_PATH: &str = "-";

pub fn read_records(path: &Path) -> Result<Vec<ContactRecord>> {
    let data = if path.as_os_str() == STDIN_PATH {
        let mut buffer = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buffer)
            .with_context(|| "read contacts from stdin")?;
        buffer
    } else {
        if !path.exists() {
            return Err(not_found(format!("contacts file {}", path.display())));
        }
        fs::read_to_string(path)
            .with_context(|| format!("read contacts file {}", path.display()))?
    };

    let payload: ContactListPayload = serde_json::from_str(&data)
        .with_context(|| format!("parse contacts from {}", path.display()))?;
    Ok(payload.into_records())
}

pub fn parse_filter_arg(raw: Option<&str>) -> Result<Option<ContactFilter>> {
    match raw {
        Some(value) if !value.trim().is_empty() => Ok(Some(parse_filter(value)?)),
        _ => Ok(None),
    }
}

pub fn parse_region_arg(raw: &str) -> Result<Region> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("country code cannot be empty"));
    }
    Ok(Region::from_code(trimmed)?)
}

pub fn verdict_label(verdict: &ValidityVerdict) -> &'static str {
    match verdict.is_valid {
        Some(true) => "valid",
        Some(false) => "invalid",
        None => "unknown",
    }
}
