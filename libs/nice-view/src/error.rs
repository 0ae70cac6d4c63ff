use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Canvas size must be at least one pixel")]
    ZeroSize,
    #[error("Canvas size {size} exceeds the {max}px limit")]
    CanvasTooLarge { size: u32, max: u32 },
    #[error("Stride alignment must be a power of two no larger than 64, got {0}")]
    UnsupportedAlignment(u32),
    #[error("Edge offset {offset} does not fit a {size}px canvas")]
    EdgeOffsetOutOfRange { offset: i32, size: u32 },
    #[error("Buffer holds {actual} bytes, geometry requires {expected}")]
    BufferSize { expected: usize, actual: usize },
}

pub type CanvasResult<T> = Result<T, Error>;
