use prism_deserializer::DeserializeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum OptionsError {
    #[error("{field} is {len} bytes or entries long, which exceeds the u32 length prefix")]
    TooLong { field: &'static str, len: usize },
}

/// Failure of a full parse: encode options, run the engine, decode.
#[derive(Debug, Error)]
#[must_use = "errors must not be silently ignored"]
pub enum PrismError {
    #[error("failed to encode parse options: {0}")]
    Options(#[from] OptionsError),

    #[error("engine failed to serialize the source")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("failed to deserialize the engine output: {0}")]
    Deserialize(#[from] DeserializeError),
}
