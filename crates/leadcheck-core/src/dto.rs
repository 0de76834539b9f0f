use crate::domain::{BackendVerdict, Contact};
use crate::rules::{PhoneNormalization, ValidityVerdict};
use serde::de::{Deserializer, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend ids arrive as numbers or strings depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(value) => write!(f, "{value}"),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

/// Contact as the dashboard API sends it. Flags only count when they are real
/// booleans; any other JSON value reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, alias = "businessName", deserialize_with = "loose_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub email: Option<String>,
    #[serde(default, alias = "email_valid", deserialize_with = "loose_flag")]
    pub email_valid: Option<bool>,
    #[serde(default, deserialize_with = "loose_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub website: Option<String>,
    #[serde(default, alias = "website_valid", deserialize_with = "loose_flag")]
    pub website_valid: Option<bool>,
    #[serde(default, alias = "computed_valid", deserialize_with = "loose_flag")]
    pub computed_valid: Option<bool>,
    #[serde(
        default,
        alias = "computed_validation_reason",
        deserialize_with = "loose_string"
    )]
    pub computed_validation_reason: Option<String>,
    #[serde(default, deserialize_with = "loose_string")]
    pub state: Option<String>,
    #[serde(default, alias = "zip_code", alias = "zip", deserialize_with = "loose_string")]
    pub zip_code: Option<String>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        let backend_verdict = record.computed_valid.map(|valid| BackendVerdict {
            valid,
            reason: record.computed_validation_reason,
        });
        Contact {
            name: record.name,
            email: record.email,
            email_valid: record.email_valid,
            phone: record.phone,
            website: record.website,
            website_valid: record.website_valid,
            backend_verdict,
            state: record.state,
            zip_code: record.zip_code,
        }
    }
}

/// Either a bare array of contacts or the paginated list payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContactListPayload {
    List(Vec<ContactRecord>),
    Page { contacts: Vec<ContactRecord> },
}

impl ContactListPayload {
    pub fn into_records(self) -> Vec<ContactRecord> {
        match self {
            ContactListPayload::List(records) => records,
            ContactListPayload::Page { contacts } => contacts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReportDto {
    pub id: Option<RecordId>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub verdict: ValidityVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNormalization>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityStats {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub unknown: usize,
}

impl ValidityStats {
    pub fn tally<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a ValidityVerdict>,
    {
        let mut stats = Self::default();
        for verdict in verdicts {
            stats.record(verdict);
        }
        stats
    }

    pub fn record(&mut self, verdict: &ValidityVerdict) {
        self.total += 1;
        match verdict.is_valid {
            Some(true) => self.valid += 1,
            Some(false) => self.invalid += 1,
            None => self.unknown += 1,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseFlag {
    Bool(bool),
    Other(IgnoredAny),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseString {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Other(IgnoredAny),
}

fn loose_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseFlag>::deserialize(deserializer)? {
        Some(LooseFlag::Bool(value)) => Some(value),
        Some(LooseFlag::Other(_)) | None => None,
    })
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LooseString>::deserialize(deserializer)? {
        Some(LooseString::Text(value)) => Some(value),
        Some(LooseString::Integer(value)) => Some(value.to_string()),
        Some(LooseString::Unsigned(value)) => Some(value.to_string()),
        Some(LooseString::Float(value)) => Some(value.to_string()),
        Some(LooseString::Other(_)) | None => None,
    })
}
