use crate::commands::{display_id, evaluate, print_json, Context};
use crate::util::{parse_filter_arg, read_records, verdict_label};
use anyhow::Result;
use clap::{ArgAction, Args};
use leadcheck_core::dto::ContactReportDto;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON file with contact records, or `-` for stdin
    pub input: PathBuf,
    #[arg(long)]
    pub filter: Option<String>,
    /// Skip phone normalization in the report
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_phone: bool,
}

pub fn check_contacts(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let filter = parse_filter_arg(args.filter.as_deref())?;
    let records = read_records(&args.input)?;
    debug!(count = records.len(), filter = ?filter, "contacts loaded");

    let include_phone = ctx.config.report.include_phone && !args.no_phone;
    let rows = evaluate(ctx, records, filter.as_ref(), include_phone);

    let reports: Vec<ContactReportDto> = rows
        .into_iter()
        .map(|row| ContactReportDto {
            id: row.id,
            name: row.contact.name,
            verdict: row.verdict,
            phone: if include_phone { row.phone } else { None },
        })
        .collect();

    if ctx.json {
        return print_json(&reports);
    }

    for report in reports {
        let name = report.name.as_deref().unwrap_or("");
        println!(
            "{}  {}  {}  {}",
            display_id(report.id.as_ref()),
            verdict_label(&report.verdict),
            name,
            report.verdict.reason
        );
        if let Some(phone) = report.phone {
            match phone.warning {
                Some(warning) => println!(
                    "    phone {} ({}): {}",
                    phone.normalized,
                    phone.confidence.as_str(),
                    warning
                ),
                None => println!(
                    "    phone {} ({})",
                    phone.normalized,
                    phone.confidence.as_str()
                ),
            }
        }
    }
    Ok(())
}
