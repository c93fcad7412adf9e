use crate::{SubmitPayload, SubmitReply};

/// Feedback line shown after a confirmed send.
pub const SUCCESS_FEEDBACK: &str = "Message sent successfully.";
/// Feedback line shown for every failure cause.
pub const ERROR_FEEDBACK: &str = "Failed to send message.";

/// Lifecycle tag driving the form UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Name,
    Email,
    Message,
}

/// Identifies one accepted submission; settles at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// How a submission ended, as observed by the transport.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The endpoint answered. `ok_status` is the HTTP success-range flag;
    /// `reply` is the decoded envelope, when the body parsed at all.
    Replied {
        ok_status: bool,
        reply: Option<SubmitReply>,
    },
    /// The request never completed (network failure, abort).
    Failed,
}

/// State of the contact form: field values, the in-flight marker and the
/// feedback line. The transport is owned by the caller; this type only
/// decides what each outcome does to the state.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    project_type: Vec<String>,
    status: SubmissionStatus,
    feedback: Option<String>,
    seq: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a single text field. No validation happens here.
    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TextField::Name => self.name = value,
            TextField::Email => self.email = value,
            TextField::Message => self.message = value,
        }
    }

    /// Adds `label` to the selection when checked and absent, removes it
    /// when unchecked and present. Repeated identical calls are no-ops.
    pub fn toggle_project_type(&mut self, label: &str, checked: bool) {
        let present = self.project_type.iter().any(|l| l == label);
        match (checked, present) {
            (true, false) => self.project_type.push(label.to_owned()),
            (false, true) => self.project_type.retain(|l| l != label),
            _ => {}
        }
    }

    /// Freezes the current field state and moves to `Loading`.
    ///
    /// Returns `None` while a submission is already in flight:
    /// overlapping submissions are rejected, not queued.
    pub fn begin_submit(&mut self) -> Option<(SubmitToken, SubmitPayload)> {
        if self.status == SubmissionStatus::Loading {
            return None;
        }

        self.status = SubmissionStatus::Loading;
        self.feedback = None;
        self.seq += 1;

        let payload = SubmitPayload::new(
            self.name.clone(),
            self.email.clone(),
            self.message.clone(),
            self.project_type.clone(),
        );

        Some((SubmitToken(self.seq), payload))
    }

    /// Applies the outcome of the submission identified by `token`.
    ///
    /// A token that no longer matches the in-flight submission is
    /// ignored, so a response arriving after a newer submit cannot
    /// clobber state. Confirmed success resets every field; any other
    /// outcome keeps them intact for retry.
    pub fn settle(&mut self, token: SubmitToken, outcome: SubmitOutcome) {
        if self.status != SubmissionStatus::Loading || token.0 != self.seq {
            return;
        }

        let accepted = matches!(
            &outcome,
            SubmitOutcome::Replied {
                ok_status: true,
                reply: Some(reply),
            } if reply.ok
        );

        if accepted {
            self.status = SubmissionStatus::Success;
            self.feedback = Some(SUCCESS_FEEDBACK.to_owned());
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.project_type.clear();
        } else {
            self.status = SubmissionStatus::Error;
            self.feedback = Some(ERROR_FEEDBACK.to_owned());
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn project_type(&self) -> &[String] {
        &self.project_type
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}
