/// Reasons a survey is rejected by strict validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Station {index}: {field} is not a finite number")]
    NonFinite { index: usize, field: &'static str },

    #[error("Station {index}: negative measured depth {depth}")]
    NegativeDepth { index: usize, depth: f64 },

    #[error("Station {index}: measured depth {current} is above previous station at {previous}")]
    DepthOutOfOrder {
        index: usize,
        previous: f64,
        current: f64,
    },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
