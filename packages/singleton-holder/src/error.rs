use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HolderError {
    #[error("holder has not been constructed yet, call Holder::get_instance first")]
    Uninitialized,
}

pub type Result<T> = std::result::Result<T, HolderError>;
