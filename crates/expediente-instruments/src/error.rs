use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown item '{item_id}' for instrument '{instrument_id}'")]
    UnknownItem {
        instrument_id: String,
        item_id: String,
    },

    #[error("score {value} for item '{item_id}' is outside range [{min}, {max}]")]
    OutOfRange {
        item_id: String,
        value: u8,
        min: u8,
        max: u8,
    },
}
