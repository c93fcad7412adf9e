use folio_contact::{ContactSubmission, OutboundEmail};

fn submission(project_type: Vec<&str>) -> ContactSubmission {
    ContactSubmission {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Need a site".to_owned(),
        project_type: project_type.into_iter().map(str::to_owned).collect(),
    }
}

#[test]
fn subject_is_derived_from_the_sender_name() {
    let email = OutboundEmail::render(&submission(vec![]), "Folio Studio").unwrap();

    assert_eq!(email.subject, "New inquiry from Ada");
}

#[test]
fn text_body_lists_all_fields() {
    let email = OutboundEmail::render(&submission(vec!["Website", "Chatbot (RAG)"]), "Folio Studio")
        .unwrap();

    assert!(email.text.contains("Name: Ada\n"));
    assert!(email.text.contains("Email: ada@example.com\n"));
    assert!(email.text.contains("Looking for: Website, Chatbot (RAG)\n"));
    assert!(email.text.contains("Message:\nNeed a site"));
}

#[test]
fn empty_selection_renders_placeholder_in_html_and_empty_in_text() {
    let email = OutboundEmail::render(&submission(vec![]), "Folio Studio").unwrap();

    assert!(email.html.contains("&mdash;"));
    assert!(email.text.contains("Looking for: \n"));
}

#[test]
fn selection_is_comma_joined_in_both_bodies() {
    let email =
        OutboundEmail::render(&submission(vec!["Website", "Data Pipeline"]), "Folio Studio")
            .unwrap();

    assert!(email.html.contains("Website, Data Pipeline"));
    assert!(email.text.contains("Looking for: Website, Data Pipeline\n"));
    assert!(!email.html.contains("&mdash;"));
}

#[test]
fn user_supplied_markup_never_reaches_the_html_body() {
    let hostile = ContactSubmission {
        name: r#"<script>alert("x")</script>"#.to_owned(),
        email: "a&b@example.com".to_owned(),
        message: "it's <b>bold</b> & \"quoted\"".to_owned(),
        project_type: vec!["<Website>".to_owned()],
    };

    let email = OutboundEmail::render(&hostile, "Folio Studio").unwrap();

    assert!(!email.html.contains("<script>"));
    assert!(!email.html.contains("<b>"));
    assert!(!email.html.contains("<Website>"));
    assert!(!email.html.contains("it's"));
    assert!(!email.html.contains(r#""quoted""#));
    assert!(email.html.contains("&lt;script&gt;"));
    assert!(email.html.contains("a&amp;b@example.com"));
    assert!(email.html.contains("&lt;Website&gt;"));

    // The plain-text body stays verbatim.
    assert!(email.text.contains(r#"<script>alert("x")</script>"#));
}

#[test]
fn subject_line_is_escaped_in_the_html_title() {
    let mut hostile = submission(vec![]);
    hostile.name = "<Ada & Co>".to_owned();

    let email = OutboundEmail::render(&hostile, "Folio Studio").unwrap();

    assert_eq!(email.subject, "New inquiry from <Ada & Co>");
    assert!(!email.html.contains("<Ada & Co>"));
    assert!(email.html.contains("&lt;Ada &amp; Co&gt;"));
}
