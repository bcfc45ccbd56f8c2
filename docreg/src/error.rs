// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use docreg_tools::core::{
    artifact::ArtifactError, build_output::BuildOutputError, credentials::ConfigError,
    deployment::DeploymentError, project::ProjectError,
};

pub type DocregResult = Result<(), DocregError>;

#[derive(Debug)]
pub struct DocregError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DocregError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for DocregError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl From<eyre::Error> for DocregError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

macro_rules! impl_from_error {
    ($($err:ty),* $(,)?) => {
        $(
            impl From<$err> for DocregError {
                fn from(err: $err) -> Self {
                    Self {
                        error: err.into(),
                        exit_code: ExitCode::FAILURE,
                    }
                }
            }
        )*
    };
}

impl_from_error!(
    std::io::Error,
    ArtifactError,
    BuildOutputError,
    ConfigError,
    DeploymentError,
    ProjectError,
);

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn cause() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "no such file")
    }

    #[test]
    fn artifact_read_cause_printed_once() {
        let err = DocregError::from(DeploymentError::Artifact(ArtifactError::Read {
            path: "artifacts/DocumentRegistry.json".to_string(),
            source: cause(),
        }));
        assert_eq!(
            err.to_string(),
            "failed to read artifact artifacts/DocumentRegistry.json: no such file"
        );
    }

    #[test]
    fn nested_config_error_printed_once() {
        let err = DocregError::from(ProjectError::Config(ConfigError::InvalidKey));
        assert_eq!(
            err.to_string(),
            "private key is not a valid 32-byte hex secp256k1 key"
        );
    }

    #[test]
    fn constructor_mismatch_printed_once() {
        let err = DocregError::from(DeploymentError::Artifact(ArtifactError::ConstructorArgs(
            "mismatch".to_string(),
        )));
        assert_eq!(err.to_string(), "invalid constructor arguments: mismatch");
    }

    #[test]
    fn io_cause_printed_once() {
        let err = DocregError::from(cause());
        assert_eq!(err.to_string(), "no such file");
    }
}
