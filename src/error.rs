use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("slide {index} does not exist, there are only {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("could not start a {interval_ms} ms interval: no browser window")]
    TimerUnavailable { interval_ms: u32 },
}
