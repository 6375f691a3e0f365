mod completions;
mod generate;
mod tree;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use postgen_collection::{Collection, Source};
use tracing::info;
use tree::TreeCommand;

use crate::{
    config::Config,
    error::RunError,
    prompt::{self, Prompter},
};

#[derive(Parser)]
#[command(name = "postgen")]
#[command(version)]
#[command(about = "Generate JavaScript API clients from API documentation collections")]
pub(crate) struct Cli {
    /// Path to postgen.toml (defaults to ./postgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        if let Commands::Completions(cmd) = &self.command {
            return cmd.run();
        }

        let config = Config::load(self.config.as_deref())?;
        match &self.command {
            Commands::Generate(cmd) => cmd.run(&config),
            Commands::Tree(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the API client from a collection
    Generate(GenerateCommand),

    /// Print the normalized operation tree without writing anything
    Tree(TreeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where to read the collection from.
#[derive(Args)]
pub struct SourceArgs {
    /// Documenter path or URL of the published collection (e.g. /view/123/abc)
    pub path: Option<String>,

    /// Read the collection from a local JSON file instead
    #[arg(short, long, value_name = "FILE", conflicts_with = "path")]
    pub input: Option<PathBuf>,

    /// Host serving collection exports (overrides postgen.toml)
    #[arg(long)]
    pub host: Option<String>,
}

impl SourceArgs {
    /// Resolve the source, asking for a documenter path if none was given.
    pub fn resolve(&self, config: &Config, prompter: &mut dyn Prompter) -> Result<Source> {
        if let Some(file) = &self.input {
            return Ok(Source::File(file.clone()));
        }

        let host = self.host.as_deref().unwrap_or(&config.source.host);
        let path = match &self.path {
            Some(path) => path.clone(),
            None => prompt::ask_source(prompter)?,
        };
        Ok(Source::remote(host, &path).map_err(RunError::Collection)?)
    }

    /// Resolve and load the collection.
    pub fn load(&self, config: &Config, prompter: &mut dyn Prompter) -> Result<Collection> {
        let source = self.resolve(config, prompter)?;
        load_collection(&source)
    }
}

pub(crate) fn load_collection(source: &Source) -> Result<Collection> {
    info!(source = %source.display(), "loading collection");
    Ok(source.load().map_err(RunError::Collection)?)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::prompt::ScriptedPrompter;

    fn source_args(path: Option<&str>, input: Option<&str>) -> SourceArgs {
        SourceArgs {
            path: path.map(str::to_string),
            input: input.map(PathBuf::from),
            host: None,
        }
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_file_wins_without_prompting() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let source = source_args(None, Some("shop.json"))
            .resolve(&Config::default(), &mut prompter)
            .unwrap();

        assert_eq!(source, Source::File(PathBuf::from("shop.json")));
        assert!(prompter.asked.is_empty());
    }

    #[test]
    fn test_path_uses_configured_host() {
        let mut config = Config::default();
        config.source.host = "docs.example.com".to_string();

        let mut prompter = ScriptedPrompter::new(&[]);
        let source = source_args(Some("view/1/abc"), None)
            .resolve(&config, &mut prompter)
            .unwrap();
        assert_eq!(source.display(), "https://docs.example.com/view/1/abc");
    }

    #[test]
    fn test_missing_path_is_asked_for() {
        let mut prompter = ScriptedPrompter::new(&["/view/9/xyz"]);
        let source = source_args(None, None)
            .resolve(&Config::default(), &mut prompter)
            .unwrap();
        assert_eq!(
            source.display(),
            "https://documenter.gw.postman.com/view/9/xyz"
        );
    }

    #[test]
    fn test_empty_answer_means_no_source() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        let err = source_args(None, None)
            .resolve(&Config::default(), &mut prompter)
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<RunError>(), Some(RunError::NoSource)));
    }

    #[test]
    fn test_unreadable_collection_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let source = Source::File(dir.path().join("missing.json"));

        let err = load_collection(&source).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<RunError>(),
            Some(RunError::Collection(_))
        ));
    }

    #[test]
    fn test_input_conflicts_with_path() {
        let result = Cli::try_parse_from(["postgen", "tree", "/view/1", "--input", "a.json"]);
        assert!(result.is_err());
    }
}
