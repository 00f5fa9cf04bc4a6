use thiserror::Error;

use crate::external_api::ApiError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Couldn't parse the config: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("The string entered must be a URL")]
    InvalidUrl,
    #[error("Failed to retrieve the user's directories")]
    NotFoundUserDir,
    #[error("Couldn't create a config")]
    CantCreateConfig,
    #[error("No clipboard tool found, tried: {0}")]
    NoClipboardTool(String),
    #[error("No browser opener found, tried: {0}")]
    NoBrowserOpener(String),
    #[error("Command '{0}' exited with {1}")]
    CommandFailed(String, String),
    #[error("There is no card with number {0}")]
    CardNotFound(usize),
    #[error("The value must be an integer > 0")]
    MoreThenZero,
}
