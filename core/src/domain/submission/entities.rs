use std::fmt;

/// Lifecycle of one submission:
/// `Idle -> Previewing -> Submitting -> (Success | Failed) -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Previewing,
    Submitting,
    Success,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Previewing => "previewing",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Success => "success",
            SubmissionState::Failed => "failed",
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, SubmissionState::Success | SubmissionState::Failed)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
