//! `anim run` options.

use thiserror::Error;

/// Settings for one `anim run`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    /// Stop after this many leaf commands.
    pub limit: Option<usize>,
    /// Distance one `shift` moves an object.
    pub step: f32,
    /// Suppress per-event output.
    pub quiet: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            limit: None,
            step: 1.0,
            quiet: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid --limit value '{0}': expected a non-negative integer")]
    InvalidLimit(String),
    #[error("invalid --step value '{0}': expected a finite number")]
    InvalidStep(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl RunConfig {
    /// Parse `--limit=N`, `--step=F` and `--quiet`. Later flags override
    /// earlier ones.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut config = RunConfig::default();
        for arg in args {
            let arg = arg.as_ref();
            if let Some(value) = arg.strip_prefix("--limit=") {
                let limit = value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidLimit(value.to_string()))?;
                config.limit = Some(limit);
            } else if let Some(value) = arg.strip_prefix("--step=") {
                config.step = value
                    .parse::<f32>()
                    .ok()
                    .filter(|step| step.is_finite())
                    .ok_or_else(|| ConfigError::InvalidStep(value.to_string()))?;
            } else if arg == "--quiet" || arg == "-q" {
                config.quiet = true;
            } else {
                return Err(ConfigError::UnknownOption(arg.to_string()));
            }
        }
        Ok(config)
    }
}
