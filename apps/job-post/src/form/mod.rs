//! Headless model of the "Post a New Job" form.
//!
//! `JobPostForm` owns every piece of state. Edits are synchronous; the only
//! suspension point is the job board call inside `submit`.

pub mod location;
pub mod requirements;
pub mod salary;
pub mod submission;
pub mod validation;

use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, error, info, warn};

use crate::board_client::{BoardError, JobBoard};
use crate::errors::{FormError, SubmitError};
use crate::models::job::{JobDraft, JobPayload};

use location::LocationPicker;
use requirements::RequirementsEditor;
use submission::{
    Banner, DismissTimer, SubmissionStatus, SUBMIT_FAILED_MESSAGE, SUBMIT_SUCCESS_MESSAGE,
    SUCCESS_BANNER_WINDOW,
};
use validation::{validate_draft, Field, ValidationErrors};

#[derive(Debug)]
pub struct JobPostForm {
    draft: JobDraft,
    errors: ValidationErrors,
    requirements: RequirementsEditor,
    location: LocationPicker,
    status: SubmissionStatus,
    dismiss: Option<DismissTimer>,
}

impl Default for JobPostForm {
    fn default() -> Self {
        Self::new()
    }
}

impl JobPostForm {
    pub fn new() -> Self {
        Self {
            draft: JobDraft::default(),
            errors: ValidationErrors::default(),
            requirements: RequirementsEditor::default(),
            location: LocationPicker::default(),
            status: SubmissionStatus::Idle,
            dismiss: None,
        }
    }

    // ── Read side ──────────────────────────────────────────────────────────

    pub fn draft(&self) -> &JobDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The submit control is disabled while a post is in flight.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    pub fn banner(&self) -> Option<Banner> {
        match self.status {
            SubmissionStatus::Succeeded => Some(Banner::Success(SUBMIT_SUCCESS_MESSAGE)),
            SubmissionStatus::Failed => Some(Banner::Error(SUBMIT_FAILED_MESSAGE)),
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }

    pub fn requirement_text(&self) -> &str {
        self.requirements.buffer()
    }

    pub fn suggestions(&self) -> Vec<&'static str> {
        self.requirements.suggestions(&self.draft.requirements)
    }

    pub fn suggestions_visible(&self) -> bool {
        self.requirements.suggestions_visible(&self.draft.requirements)
    }

    pub fn location_options(&self) -> &'static [&'static str] {
        self.location.options()
    }

    pub fn location_dropdown_open(&self) -> bool {
        self.location.is_open()
    }

    /// When the success banner is due to be dismissed, if one is showing.
    pub fn banner_deadline(&self) -> Option<Instant> {
        self.dismiss.map(|t| t.deadline())
    }

    // ── Text fields ────────────────────────────────────────────────────────

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
        if !title.trim().is_empty() {
            self.errors.clear(Field::Title);
        }
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
        if !description.trim().is_empty() {
            self.errors.clear(Field::Description);
        }
    }

    // ── Location ───────────────────────────────────────────────────────────

    /// Opening the location list closes the requirement suggestions.
    pub fn toggle_location_dropdown(&mut self) {
        self.location.toggle();
        if self.location.is_open() {
            self.requirements.close_dropdown();
        }
    }

    pub fn select_location(&mut self, location: &str) -> Result<(), FormError> {
        self.location.select(&mut self.draft.location, location)?;
        self.errors.clear(Field::Location);
        debug!("Location selected: {location}");
        Ok(())
    }

    // ── Salary ─────────────────────────────────────────────────────────────

    pub fn set_min_salary(&mut self, value: u32) {
        self.draft.salary.set_min(value);
    }

    pub fn set_max_salary(&mut self, value: u32) {
        self.draft.salary.set_max(value);
    }

    // ── Requirements ───────────────────────────────────────────────────────

    pub fn set_requirement_text(&mut self, text: &str) {
        self.requirements.set_text(text);
        if self.requirements.is_dropdown_open() {
            self.location.close();
        }
    }

    pub fn focus_requirement_input(&mut self) {
        self.requirements.focus(&self.draft.requirements);
        if self.requirements.is_dropdown_open() {
            self.location.close();
        }
    }

    /// Adds a tag (typed or picked from the suggestions). Blank and duplicate tags are ignored.
    pub fn add_requirement(&mut self, tag: &str) -> bool {
        let added = self.requirements.add(&mut self.draft.requirements, tag);
        if added {
            self.errors.clear(Field::Requirements);
        }
        added
    }

    /// Confirms the typed text as a tag. Bound to an explicit accept action, never to blur.
    pub fn commit_requirement_text(&mut self) -> bool {
        let added = self.requirements.commit(&mut self.draft.requirements);
        if added {
            self.errors.clear(Field::Requirements);
        }
        added
    }

    pub fn remove_requirement(&mut self, tag: &str) -> bool {
        self.draft.requirements.remove(tag)
    }

    // ── Submission ─────────────────────────────────────────────────────────

    /// Validates and, if the draft is complete, moves to `Submitting` and hands back the
    /// payload to send. An invalid draft only updates the field errors.
    pub fn begin_submit(&mut self) -> Result<JobPayload, SubmitError> {
        if self.status == SubmissionStatus::Submitting {
            warn!("Submit ignored: a post is already in flight");
            return Err(SubmitError::InFlight);
        }

        self.errors = validate_draft(&self.draft);
        if !self.errors.is_empty() {
            debug!("Submit blocked: {}", self.errors);
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        self.dismiss = None;
        self.status = SubmissionStatus::Submitting;
        Ok(self.draft.to_payload())
    }

    /// Applies the job board's answer to a submission started with `begin_submit`.
    pub fn complete_submit(&mut self, outcome: &Result<Value, BoardError>) {
        if self.status != SubmissionStatus::Submitting {
            warn!("Submission result ignored in state {}", self.status.as_str());
            return;
        }

        match outcome {
            Ok(created) => {
                info!("Job posted successfully");
                debug!("Job board response: {created}");
                self.clear_form();
                self.status = SubmissionStatus::Succeeded;
                self.dismiss = Some(DismissTimer::start(SUCCESS_BANNER_WINDOW));
            }
            Err(e) => {
                error!("Failed to post job: {e}");
                self.status = SubmissionStatus::Failed;
            }
        }
    }

    /// Validates, posts, and records the outcome.
    pub async fn submit(&mut self, board: &dyn JobBoard) -> Result<Value, SubmitError> {
        let payload = self.begin_submit()?;
        let outcome = board.post_job(&payload).await;
        self.complete_submit(&outcome);
        Ok(outcome?)
    }

    /// Hides the error banner. The draft is left as it was for another try.
    pub fn dismiss_error(&mut self) {
        if self.status == SubmissionStatus::Failed {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Drops the success banner once its window has passed.
    pub fn tick(&mut self) {
        if self.dismiss.is_some_and(|t| t.is_due()) {
            self.dismiss = None;
            if self.status == SubmissionStatus::Succeeded {
                debug!("Success banner dismissed");
                self.status = SubmissionStatus::Idle;
            }
        }
    }

    /// Starts over with an empty draft. Ignored while a post is in flight.
    pub fn reset(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            warn!("Reset ignored: a post is already in flight");
            return;
        }
        self.clear_form();
        self.status = SubmissionStatus::Idle;
        self.dismiss = None;
    }

    fn clear_form(&mut self) {
        self.draft = JobDraft::default();
        self.errors = ValidationErrors::default();
        self.requirements.reset();
        self.location.close();
    }
}
