use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("failed to spawn worker thread")]
    Spawn(#[source] io::Error),

    #[error("worker {id} panicked")]
    Panicked { id: usize },
}

pub type WorkerResult<T> = Result<T, WorkerError>;
