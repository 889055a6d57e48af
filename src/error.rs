use thiserror::Error;

#[derive(Error, Debug)]
pub enum BalanceReportError {
    #[error("Input is missing required column(s): {missing:?} (expected 'categoria', 'tipo', 'valor')")]
    Schema { missing: Vec<String> },

    #[error("Error calculating ratios: {0}")]
    RatioComputation(String),

    #[error("Error building report: {0}")]
    Render(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BalanceReportError>;
