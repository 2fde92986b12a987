use super::*;
use chrono::TimeZone;

fn at_ms(ms: i64) -> DateTime<Local> {
    Local.timestamp_millis_opt(1_700_000_000_000 + ms).unwrap()
}

/// Answers with the number of messages it was shown.
struct Counting;

impl ReplySource for Counting {
    fn next_reply(&mut self, history: &[ChatMessage]) -> String {
        format!("seen {}", history.len())
    }
}

fn panel() -> ChatPanel {
    ChatPanel::new("hello", Box::new(Counting), Duration::milliseconds(1500), at_ms(0))
}

#[test]
fn panel_starts_with_greeting() {
    let panel = panel();
    assert_eq!(panel.transcript().messages().len(), 1);
    assert_eq!(panel.transcript().messages()[0].role, Role::Assistant);
    assert!(!panel.is_waiting());
}

#[test]
fn blank_messages_are_ignored() {
    let mut panel = panel();
    assert_eq!(panel.send_message("", at_ms(0)), SendOutcome::Ignored);
    assert_eq!(panel.send_message("  \n\t", at_ms(0)), SendOutcome::Ignored);
    assert_eq!(panel.transcript().messages().len(), 1);
    assert!(!panel.is_waiting());
}

#[test]
fn user_message_is_immediate_and_reply_is_delayed() {
    let mut panel = panel();
    assert_eq!(panel.send_message("How do I squat?", at_ms(100)), SendOutcome::Sent);
    assert_eq!(panel.transcript().messages().len(), 2);
    assert_eq!(panel.transcript().messages()[1].role, Role::User);
    assert!(panel.is_waiting());

    assert_eq!(panel.poll(at_ms(1599)), 0);
    assert_eq!(panel.transcript().messages().len(), 2);

    assert_eq!(panel.poll(at_ms(1600)), 1);
    let messages = panel.transcript().messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].role, Role::Assistant);
    assert_eq!(messages[2].content, "seen 2");
    assert!(!panel.is_waiting());

    assert_eq!(panel.poll(at_ms(10_000)), 0);
}

#[test]
fn transcript_stays_chronological() {
    let mut panel = panel();
    panel.send_message("one", at_ms(0));
    panel.send_message("two", at_ms(500));
    panel.poll(at_ms(1500));
    panel.poll(at_ms(2000));

    let messages = panel.transcript().messages();
    let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        [Role::Assistant, Role::User, Role::User, Role::Assistant, Role::Assistant]
    );
    assert!(messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    assert!(messages.windows(2).all(|w| w[0].id < w[1].id));
}

#[test]
fn send_draft_clears_only_on_success() {
    let mut panel = panel();
    panel.draft = "   ".to_string();
    assert_eq!(panel.send_draft(at_ms(0)), SendOutcome::Ignored);
    assert_eq!(panel.draft, "   ");

    panel.draft = "Should I add more cardio?".to_string();
    assert_eq!(panel.send_draft(at_ms(0)), SendOutcome::Sent);
    assert!(panel.draft.is_empty());
}

#[test]
fn next_deadline_tracks_oldest_pending_reply() {
    let mut panel = panel();
    assert_eq!(panel.next_deadline(), None);
    panel.send_message("a", at_ms(0));
    panel.send_message("b", at_ms(200));
    assert_eq!(panel.next_deadline(), Some(at_ms(1500)));
}

#[test]
fn canned_replies_come_from_the_fixed_set() {
    let replies = vec!["one".to_string(), "two".to_string(), "three".to_string()];
    let mut source = CannedReplies::with_rng(replies.clone(), StdRng::seed_from_u64(7));
    for _ in 0..20 {
        assert!(replies.contains(&source.next_reply(&[])));
    }
}

#[test]
fn empty_canned_set_still_answers() {
    let mut source = CannedReplies::with_rng(Vec::new(), StdRng::seed_from_u64(1));
    assert!(!source.next_reply(&[]).is_empty());
}

/// Counts how often it was asked for a reply.
struct Tally(std::rc::Rc<std::cell::Cell<usize>>);

impl ReplySource for Tally {
    fn next_reply(&mut self, _history: &[ChatMessage]) -> String {
        self.0.set(self.0.get() + 1);
        "ok".to_string()
    }
}

#[test]
fn dropping_the_panel_discards_pending_replies() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut panel = ChatPanel::new("hi", Box::new(Tally(calls.clone())), Duration::milliseconds(1500), at_ms(0));
    assert_eq!(panel.send_message("leg day?", at_ms(0)), SendOutcome::Sent);
    assert_eq!(panel.poll(at_ms(1000)), 0);
    assert!(panel.is_waiting());

    drop(panel);
    assert_eq!(calls.get(), 0);
    assert_eq!(std::rc::Rc::strong_count(&calls), 1);
}

#[test]
fn tally_source_is_asked_once_per_reply() {
    let calls = std::rc::Rc::new(std::cell::Cell::new(0));
    let mut panel = ChatPanel::new("hi", Box::new(Tally(calls.clone())), Duration::milliseconds(1500), at_ms(0));
    panel.send_message("one", at_ms(0));
    panel.send_message("two", at_ms(100));
    assert_eq!(panel.poll(at_ms(5000)), 2);
    assert_eq!(calls.get(), 2);
}
