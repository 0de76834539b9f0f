use crate::commands::{print_json, Context};
use crate::util::parse_region_arg;
use anyhow::Result;
use clap::Args;
use leadcheck_core::phone::RegionHints;

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    pub phone: String,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub zip: Option<String>,
    /// Region used to read a number that has no `+` prefix
    #[arg(long, value_name = "CC")]
    pub country: Option<String>,
}

pub fn normalize_phone(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let default_country = match args.country.as_deref() {
        Some(raw) => Some(parse_region_arg(raw)?),
        None => ctx.config.default_country,
    };
    let hints = RegionHints {
        state: args.state.as_deref(),
        zip_code: args.zip.as_deref(),
        default_country,
    };

    let result = ctx.normalizer.normalize(&args.phone, &hints);
    if ctx.json {
        return print_json(&result);
    }

    println!("{}  {}", result.normalized, result.confidence.as_str());
    if let Some(warning) = result.warning {
        println!("warning: {}", warning);
    }
    Ok(())
}
