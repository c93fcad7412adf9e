//! Contact-form domain: submission decoding and validation, outbound
//! email rendering, and the form state machine driving the contact UI.

mod email;
mod form;
mod submission;

pub use email::OutboundEmail;
pub use form::{
    ContactForm, SubmissionStatus, SubmitOutcome, SubmitToken, TextField, ERROR_FEEDBACK,
    SUCCESS_FEEDBACK,
};
pub use submission::{
    ContactSubmission, ProjectType, SubmissionError, SubmitPayload, SubmitReply, MISSING_FIELDS,
    SEND_FAILED,
};
