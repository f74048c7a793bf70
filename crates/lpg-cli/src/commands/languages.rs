//! Implementation of the `lpg languages` command.

use serde::Serialize;

use lpg_core::domain::{LanguageProfile, LanguageRegistry};

use crate::{
    cli::{LanguagesArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

/// One row of the language listing.
#[derive(Debug, Serialize)]
struct LanguageSummary {
    slug: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    files: Vec<String>,
    compiled: bool,
}

impl From<&LanguageProfile> for LanguageSummary {
    fn from(profile: &LanguageProfile) -> Self {
        Self {
            slug: profile.slug,
            name: profile.display_name,
            aliases: profile.aliases,
            files: profile
                .files
                .iter()
                .map(|file| file.path.to_string())
                .collect(),
            compiled: profile
                .commands
                .as_ref()
                .is_some_and(|commands| commands.compile.is_some()),
        }
    }
}

pub fn execute(args: LanguagesArgs, output: OutputManager) -> CliResult<()> {
    let registry = LanguageRegistry::builtin();
    let languages: Vec<LanguageSummary> = registry.profiles().map(LanguageSummary::from).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Supported languages:")?;
            for language in &languages {
                let aliases = if language.aliases.is_empty() {
                    String::new()
                } else {
                    format!(" (aliases: {})", language.aliases.join(", "))
                };
                output.print(&format!(
                    "  {:<8} {:<8} {}{}",
                    language.slug,
                    language.name,
                    language.files.join(" "),
                    aliases
                ))?;
            }
        }

        ListFormat::List => {
            for language in &languages {
                output.data(language.slug)?;
            }
        }

        // JSON must stay parseable in pipes, so it bypasses quiet mode.
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&languages).map_err(std::io::Error::from)?;
            output.data(&json)?;
        }
    }

    Ok(())
}
