#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error("no repeated grid state within {max_steps} cycles")]
    CycleNotFound { max_steps: usize },

    #[error("invalid loop: first seen at {first_seen_at}, seen again at {second_seen_at}")]
    InvalidLoopDescriptor {
        first_seen_at: usize,
        second_seen_at: usize,
    },

    #[error("target {target} precedes the loop point at {second_seen_at}")]
    TargetBeforeLoop {
        target: usize,
        second_seen_at: usize,
    },
}
