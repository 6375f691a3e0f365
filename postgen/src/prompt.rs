//! Interactive questions: collection source, destination and overwrite.

use std::path::{Path, PathBuf};

use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::error::RunError;

/// Source of answers to free-text questions.
pub trait Prompter {
    fn input(&mut self, prompt: &str) -> Result<String>;
}

/// Asks on the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .wrap_err("Failed to read answer")
    }
}

/// Ask for the destination directory.
///
/// An empty answer, or a prompt that cannot be shown, selects `default`.
pub fn ask_destination(prompter: &mut dyn Prompter, default: &Path) -> PathBuf {
    let prompt = format!(
        "Choose a destination directory (default: {})",
        default.display()
    );
    match prompter.input(&prompt) {
        Ok(answer) if !answer.trim().is_empty() => PathBuf::from(answer.trim()),
        _ => default.to_path_buf(),
    }
}

/// Ask for the documenter path of the collection. Empty answers are rejected.
pub fn ask_source(prompter: &mut dyn Prompter) -> Result<String> {
    let answer = prompter.input("Collection URL or documenter path")?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(RunError::NoSource.into());
    }
    Ok(answer.to_string())
}

/// Ask whether an existing destination may be replaced.
///
/// `y`/`yes` allows it, `n`/`no` fails with [`RunError::Cancelled`]; any other
/// answer asks again.
pub fn confirm_overwrite(prompter: &mut dyn Prompter, destination: &Path) -> Result<()> {
    let prompt = format!(
        "Directory '{}' already exists. Overwrite it? (y/n)",
        destination.display()
    );
    loop {
        let answer = prompter.input(&prompt)?;
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(()),
            "n" | "no" => return Err(RunError::Cancelled.into()),
            _ => continue,
        }
    }
}

/// Answers questions from a fixed script, failing once it runs out.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    pub asked: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str) -> Result<String> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| eyre::eyre!("no scripted answer for '{prompt}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_cancelled(err: &eyre::Report) -> bool {
        matches!(err.downcast_ref::<RunError>(), Some(RunError::Cancelled))
    }

    #[test]
    fn test_confirm_yes() {
        for answer in ["y", "yes", " YES "] {
            let mut prompter = ScriptedPrompter::new(&[answer]);
            confirm_overwrite(&mut prompter, Path::new("src/api")).unwrap();
        }
    }

    #[test]
    fn test_confirm_no_cancels() {
        for answer in ["n", "No"] {
            let mut prompter = ScriptedPrompter::new(&[answer]);
            let err = confirm_overwrite(&mut prompter, Path::new("src/api")).unwrap_err();
            assert!(is_cancelled(&err));
        }
    }

    #[test]
    fn test_confirm_asks_again_on_other_answers() {
        let mut prompter = ScriptedPrompter::new(&["maybe", "", "yep", "y"]);
        confirm_overwrite(&mut prompter, Path::new("src/api")).unwrap();
        assert_eq!(prompter.asked.len(), 4);
    }

    #[test]
    fn test_confirm_fails_when_input_ends() {
        let mut prompter = ScriptedPrompter::new(&["what"]);
        let err = confirm_overwrite(&mut prompter, Path::new("src/api")).unwrap_err();
        assert!(!is_cancelled(&err));
    }

    #[test]
    fn test_destination_defaults() {
        let default = Path::new("./src/api");

        let mut prompter = ScriptedPrompter::new(&["  "]);
        assert_eq!(ask_destination(&mut prompter, default), default);

        let mut prompter = ScriptedPrompter::new(&[]);
        assert_eq!(ask_destination(&mut prompter, default), default);

        let mut prompter = ScriptedPrompter::new(&["web/api"]);
        assert_eq!(ask_destination(&mut prompter, default), PathBuf::from("web/api"));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let mut prompter = ScriptedPrompter::new(&[""]);
        let err = ask_source(&mut prompter).unwrap_err();
        assert!(matches!(err.downcast_ref::<RunError>(), Some(RunError::NoSource)));
    }
}
