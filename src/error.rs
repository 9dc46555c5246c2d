use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeysplitError {
    #[error("require 1 < threshold <= total (got threshold {threshold}, total {total})")]
    InvalidParameters { threshold: usize, total: usize },
    #[error("share not found: {0}")]
    MissingShare(String),
    #[error("bad share format in {id}: {reason}")]
    MalformedShare { id: String, reason: String },
    #[error("mismatched primes in shares")]
    ModulusMismatch,
    #[error("no shares provided")]
    EmptyInput,
    #[error("share numbers must be positive: {0}")]
    InvalidShareId(String),
    #[error("duplicate share index {0}")]
    DuplicateShare(BigUint),
    #[error("modulus {0} is not a usable prime")]
    InvalidModulus(BigUint),
    #[error("reconstructed secret is not valid UTF-8")]
    InvalidUtf8,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, KeysplitError>;
