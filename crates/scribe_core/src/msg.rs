/// Step results reported by the engine while it drives a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    Begin,
    Created,
    CreateFailed,
    Written,
    WriteFailed,
    RolledBack,
    /// The write failed but no file was left at the target path.
    NothingToRollBack,
    RollbackFailed,
    Closed { ok: bool },
}
