use anyhow::Error;
use mailcanon_config::ConfigError;
use mailcanon_core::CoreError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;
pub const EXIT_REJECTED: u8 = 4;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid email address: {0}")]
    Rejected(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn rejected(email: impl Into<String>) -> Error {
    CliError::Rejected(email.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

fn exit_status_for(err: &Error) -> u8 {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::Rejected(_) => EXIT_REJECTED,
            };
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return config_exit_code(config_err);
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return EXIT_INVALID_INPUT;
        }
    }
    EXIT_FAILURE
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidDemoSample(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        exit_status_for, invalid_input, rejected, EXIT_FAILURE, EXIT_INVALID_INPUT, EXIT_REJECTED,
    };
    use anyhow::{anyhow, Context as _};
    use mailcanon_config::ConfigError;
    use mailcanon_core::CoreError;

    #[test]
    fn exit_code_maps_cli_errors() {
        assert_eq!(exit_status_for(&invalid_input("bad")), EXIT_INVALID_INPUT);
        assert_eq!(exit_status_for(&rejected("nope")), EXIT_REJECTED);
    }

    #[test]
    fn exit_code_walks_context_chain() {
        let err = Err::<(), _>(CoreError::InvalidArgument)
            .context("normalize value")
            .unwrap_err();
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn exit_code_maps_config_errors() {
        let err = anyhow::Error::from(ConfigError::InvalidDemoSample(0)).context("load config");
        assert_eq!(exit_status_for(&err), EXIT_INVALID_INPUT);
        let err = anyhow::Error::from(ConfigError::MissingHomeDir);
        assert_eq!(exit_status_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn exit_code_defaults_to_failure() {
        assert_eq!(exit_status_for(&anyhow!("boom")), EXIT_FAILURE);
    }
}
