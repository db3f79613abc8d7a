use thiserror::Error;

pub type TimelineResult<T> = Result<T, TimelineError>;

#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("day column {column_index} mixes single-interval and event-list shapes")]
    MixedColumnShapes { column_index: usize },
}
