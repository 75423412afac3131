//! Submission lifecycle: `Idle → Submitting → {Succeeded, Failed} → Idle`.

use std::time::Duration;

use tokio::time::Instant;

/// How long the success banner stays up before the form drops back to `Idle`.
pub const SUCCESS_BANNER_WINDOW: Duration = Duration::from_millis(3000);

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Job posted successfully!";
/// Shown for every failed post, whatever the cause.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to post job. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Succeeded => "succeeded",
            SubmissionStatus::Failed => "failed",
        }
    }
}

/// Feedback line under the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Success(&'static str),
    Error(&'static str),
}

impl Banner {
    pub fn message(&self) -> &'static str {
        match self {
            Banner::Success(m) | Banner::Error(m) => m,
        }
    }
}

/// Deadline for dismissing the success banner, read against the tokio clock
/// so paused-time tests can drive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    pub fn start(window: Duration) -> Self {
        Self {
            deadline: Instant::now() + window,
        }
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    pub fn is_due(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Resolves once `deadline` passes; never resolves for `None`.
/// Safe to drop and recreate on every turn of a `select!` loop.
pub async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}
