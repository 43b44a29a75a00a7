//! CLI 명령 파싱 모듈.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::review::{OutputMode, RunOptions, SettingOverrides};
use crate::domain::target::RepositoryMode;

#[derive(Debug, Parser)]
#[command(name = "groq-review")]
#[command(about = "Review a pull request diff with a Groq-hosted model and post it as a PR comment")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print the review to stdout instead of posting a comment
    #[arg(long, global = true)]
    stdout: bool,

    /// Completion model id (overrides GROQ_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Maximum tokens to generate; 0 leaves it to the API default
    #[arg(long, global = true)]
    max_tokens: Option<u32>,

    /// Sampling temperature (0..=2)
    #[arg(long, global = true)]
    temperature: Option<f32>,

    /// Nucleus sampling probability (0..=1)
    #[arg(long, global = true)]
    top_p: Option<f32>,

    /// Diff file name relative to GITHUB_WORKSPACE
    #[arg(long, global = true)]
    diff_file: Option<String>,

    /// Read the system prompt from this file
    #[arg(long, global = true)]
    prompt_file: Option<PathBuf>,

    /// How to resolve the repository: auto, combined (GITHUB_REPOSITORY) or split
    #[arg(long, global = true)]
    repository_mode: Option<RepositoryMode>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config (credentials redacted)
    Config,
}

#[derive(Debug)]
pub enum CliAction {
    InspectConfig(RunOptions),
    Review(RunOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Cli::parse().into_action()
    }

    pub fn try_parse_action_from<I, T>(args: I) -> Result<CliAction, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Ok(Cli::try_parse_from(args)?.into_action())
    }

    fn into_action(self) -> CliAction {
        let options = RunOptions {
            output: if self.stdout {
                OutputMode::Stdout
            } else {
                OutputMode::Comment
            },
            overrides: SettingOverrides {
                model: self.model,
                max_tokens: self.max_tokens,
                temperature: self.temperature,
                top_p: self.top_p,
                diff_file: self.diff_file,
                prompt_file: self.prompt_file,
                repository_mode: self.repository_mode,
            },
        };

        match self.command {
            Some(Commands::Config) => CliAction::InspectConfig(options),
            None => CliAction::Review(options),
        }
    }
}
