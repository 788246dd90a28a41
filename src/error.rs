use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error(transparent)]
    Content(#[from] portfolio_common::Error),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
