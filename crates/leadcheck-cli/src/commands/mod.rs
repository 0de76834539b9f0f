use anyhow::Result;
use leadcheck_config::AppConfig;
use leadcheck_core::dto::{ContactRecord, RecordId};
use leadcheck_core::filter::{ContactFilter, FilterSubject};
use leadcheck_core::phone::RegionHints;
use leadcheck_core::rules::{PhoneNormalization, PhoneNormalizer, ValidityResolver, ValidityVerdict};
use leadcheck_core::Contact;
use serde::Serialize;
use std::io::{self, Write};

pub mod check;
pub mod completions;
pub mod normalize;
pub mod phones;
pub mod stats;

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
    pub resolver: ValidityResolver,
    pub normalizer: PhoneNormalizer,
}

impl<'a> Context<'a> {
    pub fn new(json: bool, config: &'a AppConfig) -> Self {
        Self {
            json,
            config,
            resolver: ValidityResolver::new(),
            normalizer: PhoneNormalizer::new().with_hint_fallback(config.hints.fallback_country),
        }
    }

    pub fn hints_for<'c>(&self, contact: &'c Contact) -> RegionHints<'c> {
        RegionHints {
            state: contact.state.as_deref(),
            zip_code: contact.zip_code.as_deref(),
            default_country: self.config.default_country,
        }
    }
}

pub struct EvaluatedContact {
    pub id: Option<RecordId>,
    pub contact: Contact,
    pub verdict: ValidityVerdict,
    pub phone: Option<PhoneNormalization>,
}

/// Runs both engines over each record and keeps the rows the filter accepts.
pub fn evaluate(
    ctx: &Context<'_>,
    records: Vec<ContactRecord>,
    filter: Option<&ContactFilter>,
    with_phone: bool,
) -> Vec<EvaluatedContact> {
    let with_phone = with_phone || filter.is_some_and(ContactFilter::needs_phone);
    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            let contact = Contact::from(record);
            let verdict = ctx.resolver.resolve(&contact);
            let phone = if with_phone {
                contact
                    .phone_trimmed()
                    .map(|raw| ctx.normalizer.normalize(raw, &ctx.hints_for(&contact)))
            } else {
                None
            };

            if let Some(filter) = filter {
                let subject = FilterSubject {
                    contact: &contact,
                    verdict: &verdict,
                    phone: phone.as_ref(),
                };
                if !filter.matches(&subject) {
                    return None;
                }
            }

            Some(EvaluatedContact {
                id,
                contact,
                verdict,
                phone,
            })
        })
        .collect()
}

pub fn display_id(id: Option<&RecordId>) -> String {
    id.map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
