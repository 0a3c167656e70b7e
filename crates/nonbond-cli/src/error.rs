use nonbond::core::io::PairTableError;
use nonbond::core::params::ParamLoadError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parameter file error: {0}")]
    Params(#[from] ParamLoadError),

    #[error("Pair table error: {0}")]
    Pairs(#[from] PairTableError),
}
