use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use postgen_codegen_javascript::Formatter;

use super::{SourceArgs, load_collection};
use crate::{
    config::Config,
    ops::{self, GenerateOptions, generate::check_destination},
    prompt::{self, TerminalPrompter},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Destination directory; replaced as a whole (asked for when omitted)
    #[arg(long, value_name = "DIR")]
    pub outdir: Option<PathBuf>,

    /// Replace an existing destination without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip running the formatter over the generated files
    #[arg(long)]
    pub no_format: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self, config: &Config) -> Result<()> {
        let mut prompter = TerminalPrompter;
        let source = self.source.resolve(config, &mut prompter)?;

        let output_dir = match &self.outdir {
            Some(dir) => dir.clone(),
            None if self.dry_run => config.output.default_dir.clone(),
            None => prompt::ask_destination(&mut prompter, &config.output.default_dir),
        };
        if !self.dry_run {
            check_destination(&output_dir)?;
        }

        let collection = load_collection(&source)?;

        let formatter = (config.format.enabled && !self.no_format)
            .then(|| Formatter::new(config.format.command.iter().cloned()));

        let report = ops::generate(
            collection,
            GenerateOptions {
                output_dir: &output_dir,
                js: config.output.js_options(),
                formatter,
                dry_run: self.dry_run,
                assume_yes: self.yes,
            },
            &mut prompter,
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
