use clap::Args;
use eyre::Result;

use super::SourceArgs;
use crate::{
    config::Config,
    ops,
    prompt::TerminalPrompter,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TreeCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Print the tree as JSON
    #[arg(long)]
    pub json: bool,
}

impl TreeCommand {
    pub fn run(&self, config: &Config) -> Result<()> {
        let collection = self.source.load(config, &mut TerminalPrompter)?;
        let report = ops::tree(collection, self.json)?;

        if self.json {
            println!("{}", report.tree);
        } else {
            report.render(&mut TerminalOutput::new());
        }
        Ok(())
    }
}
