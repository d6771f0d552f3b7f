//! Scribe core: the write request and the pure state machine of a transactional write.
mod msg;
mod request;
mod state;
mod update;

pub use msg::Msg;
pub use request::WriteRequest;
pub use state::{FailureKind, Outcome, Stage, WriteState};
pub use update::update;
