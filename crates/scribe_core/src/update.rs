use crate::{FailureKind, Msg, Outcome, Stage, WriteState};

/// Applies one step result to the write state.
///
/// Messages that do not fit the current stage leave the state untouched.
pub fn update(mut state: WriteState, msg: Msg) -> WriteState {
    match (state.stage(), msg) {
        (Stage::Idle, Msg::Begin) => state.enter(Stage::Creating),
        (Stage::Creating, Msg::Created) => state.enter(Stage::Writing),
        (Stage::Creating, Msg::CreateFailed) => {
            state.fail(FailureKind::Creation);
            state.enter(Stage::Done(Outcome::Failed(FailureKind::Creation)));
        }
        (Stage::Writing, Msg::Written) => state.enter(Stage::Closing),
        (Stage::Writing, Msg::WriteFailed) => {
            state.fail(FailureKind::Write);
            state.enter(Stage::RollingBack);
        }
        (Stage::RollingBack, Msg::RolledBack | Msg::NothingToRollBack) => {
            state.enter(Stage::Closing)
        }
        (Stage::RollingBack, Msg::RollbackFailed) => {
            // An orphaned partial file is worse than a clean write failure.
            state.fail(FailureKind::Deletion);
            state.enter(Stage::Closing);
        }
        (Stage::Closing, Msg::Closed { ok }) => {
            state.record_close(ok);
            let outcome = match state.pending_failure() {
                Some(kind) => Outcome::Failed(kind),
                None => Outcome::Success,
            };
            state.enter(Stage::Done(outcome));
        }
        _ => {}
    }
    state
}
