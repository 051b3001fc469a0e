use dialoguer::{Confirm, Input, Select};
use semver::Version;
use std::path::Path;

use crate::bump::version::{candidates, Bump};
use crate::error::{Result, ScriptError};

/// Answer to the version menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Candidate(Bump),
    Custom,
}

/// One question, one answer. A cancelled prompt is an error.
pub trait Prompter {
    fn select_version(
        &mut self,
        path: &Path,
        current: &Version,
        options: &[(Bump, Version)],
    ) -> Result<Choice>;

    fn custom_version(&mut self, path: &Path) -> Result<Version>;

    fn confirm_reuse(&mut self) -> Result<bool>;
}

/// Ask for the next version of the manifest at `path`.
pub fn pick_version<P: Prompter + ?Sized>(prompter: &mut P, path: &Path, current: &Version) -> Result<Version> {
    let options = candidates(current);

    match prompter.select_version(path, current, &options)? {
        Choice::Candidate(bump) => options
            .into_iter()
            .find(|(candidate, _)| *candidate == bump)
            .map(|(_, version)| version)
            .ok_or_else(|| ScriptError::PromptCancelled(format!("no {} candidate", bump))),
        Choice::Custom => prompter.custom_version(path),
    }
}

/// Terminal prompts
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

fn cancelled(what: &str) -> ScriptError {
    ScriptError::PromptCancelled(format!("{} was aborted", what))
}

impl Prompter for DialoguerPrompter {
    fn select_version(
        &mut self,
        path: &Path,
        current: &Version,
        options: &[(Bump, Version)],
    ) -> Result<Choice> {
        let mut items: Vec<String> = options
            .iter()
            .map(|(bump, version)| format!("{}: {}", bump, version))
            .collect();
        items.push("Custom".to_string());

        let selection = Select::new()
            .with_prompt(format!("Select the version you want for {} (currently {})", path.display(), current))
            .items(&items)
            .default(0)
            .interact_opt()?
            .ok_or_else(|| cancelled("version selection"))?;

        Ok(options
            .get(selection)
            .map(|(bump, _)| Choice::Candidate(*bump))
            .unwrap_or(Choice::Custom))
    }

    fn custom_version(&mut self, _path: &Path) -> Result<Version> {
        let raw = Input::<String>::new()
            .with_prompt("Version")
            .validate_with(|input: &String| -> std::result::Result<(), &str> {
                if input.trim().is_empty() {
                    Err("Version cannot be empty")
                } else if Version::parse(input.trim()).is_err() {
                    Err("Version is not valid")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Version::parse(raw.trim()).map_err(|e| ScriptError::PromptCancelled(e.to_string()))
    }

    fn confirm_reuse(&mut self) -> Result<bool> {
        Confirm::new()
            .with_prompt("Do you want to use the same version, for all packages?")
            .default(false)
            .interact_opt()?
            .ok_or_else(|| cancelled("confirmation"))
    }
}
