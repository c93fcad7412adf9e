use askama::Template;

use crate::ContactSubmission;

/// Inquiry notification derived from one accepted submission. Never
/// persisted; lives for the request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Template)]
#[template(path = "inquiry.html")]
struct InquiryHtmlTemplate<'a> {
    subject: &'a str,
    owner: &'a str,
    name: &'a str,
    email: &'a str,
    selected: &'a str,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "inquiry.txt")]
struct InquiryTextTemplate<'a> {
    name: &'a str,
    email: &'a str,
    selected: &'a str,
    message: &'a str,
}

impl OutboundEmail {
    /// Renders both representations. The HTML template escapes every
    /// user-supplied value; the plain-text body is verbatim.
    pub fn render(submission: &ContactSubmission, owner: &str) -> Result<Self, askama::Error> {
        let subject = format!("New inquiry from {}", submission.name);
        let selected = submission.selected();

        let html = InquiryHtmlTemplate {
            subject: &subject,
            owner,
            name: &submission.name,
            email: &submission.email,
            selected: &selected,
            message: &submission.message,
        }
        .render()?;

        let text = InquiryTextTemplate {
            name: &submission.name,
            email: &submission.email,
            selected: &selected,
            message: &submission.message,
        }
        .render()?;

        Ok(Self {
            subject,
            text,
            html,
        })
    }
}
