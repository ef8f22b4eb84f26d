use thiserror::Error;

/// Fatal problems with the shape of the input table. These halt the run;
/// the message names the specific cause so the user can fix the file.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DatasetError {
    #[error("table has {0} column(s); need an identifier column plus at least one differentiator")]
    TooFewColumns(usize),

    #[error("table has no data rows")]
    NoRows,

    #[error("no differentiator columns remain after dropping reserved score columns")]
    NoDifferentiators,

    #[error("first column '{0}' contains no opportunity names")]
    NoOpportunities(String),
}

#[derive(Error, Debug)]
pub enum GaugeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File Not Found: '{0}'. Put the opportunities table there or pass --file.")]
    FileMissing(String),

    #[error("Dataset Error: {0}")]
    Dataset(#[from] DatasetError),

    // A parsing capability is missing, as opposed to the file being broken.
    #[error("Dependency Error: {0}")]
    Dependency(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type GaugeResult<T> = Result<T, GaugeError>;
