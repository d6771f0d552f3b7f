use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Creation,
    Write,
    Deletion,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Creation => write!(f, "file creation failed"),
            FailureKind::Write => write!(f, "write failed"),
            FailureKind::Deletion => write!(f, "rollback deletion failed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Idle,
    Creating,
    Writing,
    RollingBack,
    Closing,
    Done(Outcome),
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Idle => write!(f, "idle"),
            Stage::Creating => write!(f, "creating"),
            Stage::Writing => write!(f, "writing"),
            Stage::RollingBack => write!(f, "rolling-back"),
            Stage::Closing => write!(f, "closing"),
            Stage::Done(Outcome::Success) => write!(f, "done"),
            Stage::Done(Outcome::Failed(kind)) => write!(f, "done ({kind})"),
        }
    }
}

/// Progress of one transactional write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteState {
    stage: Stage,
    pending_failure: Option<FailureKind>,
    close_status: Option<bool>,
    history: Vec<Stage>,
}

impl Default for WriteState {
    fn default() -> Self {
        Self::new()
    }
}

impl WriteState {
    pub fn new() -> Self {
        Self {
            stage: Stage::Idle,
            pending_failure: None,
            close_status: None,
            history: vec![Stage::Idle],
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Every stage visited so far, starting with `Idle`.
    pub fn history(&self) -> &[Stage] {
        &self.history
    }

    /// Whether the handle was closed; `None` until the close step ran.
    pub fn close_status(&self) -> Option<bool> {
        self.close_status
    }

    pub fn pending_failure(&self) -> Option<FailureKind> {
        self.pending_failure
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.stage, Stage::Done(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.stage {
            Stage::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub(crate) fn enter(&mut self, stage: Stage) {
        self.stage = stage;
        self.history.push(stage);
    }

    pub(crate) fn fail(&mut self, kind: FailureKind) {
        self.pending_failure = Some(kind);
    }

    pub(crate) fn record_close(&mut self, ok: bool) {
        self.close_status = Some(ok);
    }
}
