use crate::commands::{evaluate, print_json, Context};
use crate::util::{parse_filter_arg, read_records};
use anyhow::Result;
use clap::Args;
use leadcheck_core::dto::ValidityStats;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// JSON file with contact records, or `-` for stdin
    pub input: PathBuf,
    #[arg(long)]
    pub filter: Option<String>,
}

pub fn contact_stats(ctx: &Context<'_>, args: StatsArgs) -> Result<()> {
    let filter = parse_filter_arg(args.filter.as_deref())?;
    let records = read_records(&args.input)?;
    debug!(count = records.len(), "contacts loaded");

    let rows = evaluate(ctx, records, filter.as_ref(), false);
    let stats = ValidityStats::tally(rows.iter().map(|row| &row.verdict));

    if ctx.json {
        return print_json(&stats);
    }

    println!("total   {}", stats.total);
    println!("valid   {}", stats.valid);
    println!("invalid {}", stats.invalid);
    println!("unknown {}", stats.unknown);
    Ok(())
}
