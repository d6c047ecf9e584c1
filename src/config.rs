//! Command-line configuration for the `lexis` binary.
//!
//! `lexis [--tokens] [--timings] [--no-background] <file>`
//!
//! Options are plain values with a `Default`; parsing never touches the
//! filesystem, so a missing file is reported by the caller when it reads it.

use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "usage: lexis [--tokens] [--timings] [--no-background] <file>";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Source text with ANSI colour escapes.
    #[default]
    Highlight,
    /// One `line:column Kind "lexeme"` line per token.
    Tokens,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
    pub mode: OutputMode,
    /// Report phase timings on stderr.
    pub timings: bool,
    /// Paint the theme background behind the highlighted text.
    pub background: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file: PathBuf::new(),
            mode: OutputMode::Highlight,
            timings: false,
            background: true,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no input file given")]
    MissingFile,
    #[error("unknown flag {flag:?}")]
    UnknownFlag { flag: String },
    #[error("unexpected argument {argument:?}, only one input file is accepted")]
    UnexpectedArgument { argument: String },
}

impl Config {
    /// Parses the arguments after the program name.
    pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut config = Config::default();
        let mut file: Option<PathBuf> = None;

        for arg in args {
            let arg: String = arg.into();
            match arg.as_str() {
                "--tokens" => config.mode = OutputMode::Tokens,
                "--timings" => config.timings = true,
                "--no-background" => config.background = false,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    })
                }
                _ if file.is_some() => return Err(ConfigError::UnexpectedArgument { argument: arg }),
                _ => file = Some(PathBuf::from(arg)),
            }
        }

        config.file = file.ok_or(ConfigError::MissingFile)?;
        Ok(config)
    }
}
