use sov_core::SovError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("model error: {0}")]
    Model(#[from] SovError),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type SimResult<T> = Result<T, SimError>;
