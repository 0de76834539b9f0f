use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    let mut writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("create completions file {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    generate(args.shell, &mut cmd, name, &mut writer);
    writer.flush()?;
    Ok(())
}
