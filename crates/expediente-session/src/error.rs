use expediente_instruments::error::InstrumentError;
use expediente_signature::error::SignatureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error(transparent)]
    Score(#[from] InstrumentError),

    #[error("invalid session date '{date}': {source}")]
    InvalidDate {
        date: String,
        #[source]
        source: jiff::Error,
    },

    #[error(transparent)]
    Signature(#[from] SignatureError),
}
