use crate::commands::{display_id, evaluate, print_json, Context};
use crate::util::read_records;
use anyhow::Result;
use clap::{ArgAction, Args};
use leadcheck_core::dto::RecordId;
use leadcheck_core::rules::Confidence;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct PhonesArgs {
    /// JSON file with contact records, or `-` for stdin
    pub input: PathBuf,
    /// Only list phones that need a human to look at them
    #[arg(long, action = ArgAction::SetTrue)]
    pub only_warnings: bool,
}

#[derive(Debug, Serialize)]
struct PhoneReport {
    id: Option<RecordId>,
    raw: String,
    normalized: String,
    confidence: Confidence,
    warning: Option<String>,
}

pub fn normalize_phones(ctx: &Context<'_>, args: PhonesArgs) -> Result<()> {
    let records = read_records(&args.input)?;
    debug!(count = records.len(), "contacts loaded");

    let mut reports = Vec::new();
    for row in evaluate(ctx, records, None, true) {
        let (Some(raw), Some(phone)) = (row.contact.phone, row.phone) else {
            continue;
        };
        if phone.warning.is_some() {
            warn!(
                id = %display_id(row.id.as_ref()),
                confidence = phone.confidence.as_str(),
                "phone needs review"
            );
        } else if args.only_warnings {
            continue;
        }
        reports.push(PhoneReport {
            id: row.id,
            raw,
            normalized: phone.normalized,
            confidence: phone.confidence,
            warning: phone.warning,
        });
    }

    if ctx.json {
        return print_json(&reports);
    }

    for report in reports {
        let line = format!(
            "{}  {}  ->  {}  {}",
            display_id(report.id.as_ref()),
            report.raw.trim(),
            report.normalized,
            report.confidence.as_str()
        );
        match report.warning {
            Some(warning) => println!("{line}  {warning}"),
            None => println!("{line}"),
        }
    }
    Ok(())
}
