use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown medal '{0}'")]
    UnknownMedal(String),
    #[error("unknown season '{0}'")]
    UnknownSeason(String),
    #[error("unknown sex '{0}'")]
    UnknownSex(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
