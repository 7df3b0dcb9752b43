use super::*;

fn make_message(author: &str, content: &str) -> ChatMessage {
    ChatMessage {
        id: Some(1),
        author: author.to_owned(),
        content: content.to_owned(),
        created_at: "12:30".to_owned(),
        is_edited: false,
    }
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_replaces_special_characters() {
    assert_eq!(escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#), "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;");
}

#[test]
fn escape_html_keeps_plain_text() {
    assert_eq!(escape_html("привет, мир"), "привет, мир");
}

// =============================================================
// message_view
// =============================================================

#[test]
fn message_view_marks_own_messages() {
    let view = message_view(&make_message("alice", "hi"), "alice", MarkupPolicy::Escape);
    assert_eq!(view.class_name, "chat-message own");
    assert!(view.is_own());
}

#[test]
fn message_view_marks_other_messages() {
    let view = message_view(&make_message("bob", "hi"), "alice", MarkupPolicy::Escape);
    assert_eq!(view.class_name, "chat-message other");
    assert!(!view.is_own());
}

#[test]
fn message_view_without_current_user_is_other() {
    let view = message_view(&make_message("bob", "hi"), "", MarkupPolicy::Escape);
    assert!(!view.is_own());
}

#[test]
fn message_view_contains_author_content_and_time() {
    let view = message_view(&make_message("bob", "hello"), "alice", MarkupPolicy::Escape);
    assert!(view.inner_html.contains("<div class=\"message-author\">bob</div>"));
    assert!(view.inner_html.contains("<div class=\"message-content\">hello</div>"));
    assert!(view.inner_html.contains("<div class=\"message-time\">12:30</div>"));
}

#[test]
fn message_view_escapes_content_by_default() {
    let view = message_view(&make_message("bob", "<script>x()</script>"), "alice", MarkupPolicy::Escape);
    assert!(!view.inner_html.contains("<script>"));
    assert!(view.inner_html.contains("&lt;script&gt;x()&lt;/script&gt;"));
}

#[test]
fn message_view_trusted_policy_inserts_raw_markup() {
    let view = message_view(&make_message("bob", "<b>bold</b>"), "alice", MarkupPolicy::Trusted);
    assert!(view.inner_html.contains("<div class=\"message-content\"><b>bold</b></div>"));
}

#[test]
fn message_view_shows_edited_marker() {
    let mut msg = make_message("bob", "fixed");
    msg.is_edited = true;
    let view = message_view(&msg, "alice", MarkupPolicy::Escape);
    assert!(view.inner_html.contains("message-edited"));
}

// =============================================================
// toast_markup
// =============================================================

#[test]
fn toast_markup_has_body_and_close_button() {
    let html = toast_markup("Copied", MarkupPolicy::Escape);
    assert!(html.contains("<div class=\"toast-body\">Copied</div>"));
    assert!(html.contains("data-bs-dismiss=\"toast\""));
}

#[test]
fn toast_markup_escapes_message() {
    let html = toast_markup("<img>", MarkupPolicy::Escape);
    assert!(html.contains("&lt;img&gt;"));
}
