use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::algorithm::SpanningStrategy;
use crate::{Error, Result};

/// How the command-line driver prints its report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a single run of the command-line driver
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Edge-list file; standard input when absent
    pub input: Option<PathBuf>,
    pub strategy: SpanningStrategy,
    pub format: OutputFormat,
}

impl RunConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn with_strategy(mut self, strategy: SpanningStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Parses `[--strategy NAME] [--json | --text] [INPUT]`, program name excluded
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = RunConfig::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => config.format = OutputFormat::Json,
                "--text" => config.format = OutputFormat::Text,
                "--strategy" => {
                    let name = args
                        .next()
                        .ok_or_else(|| Error::Config("--strategy needs a value".to_string()))?;
                    config.strategy = name.parse()?;
                }
                other if other.starts_with("--strategy=") => {
                    config.strategy = other["--strategy=".len()..].parse()?;
                }
                other if other.starts_with('-') && other != "-" => {
                    return Err(Error::Config(format!("unknown option '{}'", other)));
                }
                path => {
                    if config.input.is_some() {
                        return Err(Error::Config(format!("unexpected argument '{}'", path)));
                    }
                    if path != "-" {
                        config.input = Some(PathBuf::from(path));
                    }
                }
            }
        }

        Ok(config)
    }

    /// Opens the configured input, falling back to standard input
    pub fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            None => Ok(Box::new(BufReader::new(io::stdin()))),
        }
    }
}
