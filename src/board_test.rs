use super::*;

// =============================================================
// Helpers
// =============================================================

fn item(id: &str, word: &str) -> Item {
    Item::with_id(id, word, "🔈")
}

fn core_with(items: Vec<Item>) -> BoardCore {
    BoardCore::new(items, BoardConfig::default(), None)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SpeechCall {
    Cancel,
    Speak { text: String, locale: String },
}

/// Recording speech engine shared with the test through an `Rc`.
struct FakeSpeech {
    calls: Rc<RefCell<Vec<SpeechCall>>>,
}

impl FakeSpeech {
    fn new() -> (Box<dyn SpeechEngine>, Rc<RefCell<Vec<SpeechCall>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (Box::new(Self { calls: Rc::clone(&calls) }), calls)
    }
}

impl SpeechEngine for FakeSpeech {
    fn cancel_all(&self) {
        self.calls.borrow_mut().push(SpeechCall::Cancel);
    }

    fn speak(&self, text: &str, locale: &str) {
        self.calls
            .borrow_mut()
            .push(SpeechCall::Speak { text: text.to_owned(), locale: locale.to_owned() });
    }
}

fn speaking_core(locale: &str) -> (BoardCore, Rc<RefCell<Vec<SpeechCall>>>) {
    let (engine, calls) = FakeSpeech::new();
    let config = BoardConfig { locale: locale.to_owned(), ..BoardConfig::default() };
    (BoardCore::new(Vec::new(), config, Some(engine)), calls)
}

// =============================================================
// Items
// =============================================================

#[test]
fn core_starts_with_the_initial_items() {
    let core = core_with(vec![item("a", "Cat"), item("b", "Dog")]);
    let items = core.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].word, "Cat");
    assert_eq!(items[1].word, "Dog");
}

#[test]
fn set_items_replaces_the_list_wholesale() {
    let mut core = core_with(vec![item("a", "Cat")]);
    core.set_items(vec![item("b", "Dog"), item("c", "Fish")]);
    let items = core.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_deref(), Some("b"));
    assert_eq!(items[1].id.as_deref(), Some("c"));
}

#[test]
fn items_returns_a_fresh_copy() {
    let core = core_with(vec![item("a", "Cat")]);
    let mut copy = core.items();
    copy.clear();
    assert_eq!(core.items().len(), 1);
}

#[test]
fn remove_by_id_with_unknown_id_reports_no_change() {
    let mut core = core_with(vec![item("a", "Cat")]);
    assert!(!core.remove_by_id("zz"));
    assert_eq!(core.items().len(), 1);
}

#[test]
fn remove_by_id_drops_a_single_match() {
    let mut core = core_with(vec![item("a", "Cat"), item("b", "Dog")]);
    assert!(core.remove_by_id("a"));
    let items = core.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].word, "Dog");
}

#[test]
fn remove_by_id_drops_every_match() {
    let mut core = core_with(vec![item("a", "Cat"), item("b", "Dog"), item("a", "Cow")]);
    assert!(core.remove_by_id("a"));
    let items = core.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].word, "Dog");
}

#[test]
fn remove_by_id_never_matches_items_without_an_id() {
    let mut core = core_with(vec![Item::new("Cat", "🐱"), item("b", "Dog")]);
    assert!(core.remove_by_id("b"));
    let items = core.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].word, "Cat");
    assert_eq!(items[0].id, None);
}

// =============================================================
// Options
// =============================================================

#[test]
fn change_handler_defaults_to_none() {
    let core = core_with(Vec::new());
    assert!(core.change_handler().is_none());
}

#[test]
fn change_handler_clones_the_attached_observer() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let config = BoardConfig {
        on_change: Some(Rc::new(move |items: Vec<Item>| sink.borrow_mut().push(items.len()))),
        ..BoardConfig::default()
    };
    let core = BoardCore::new(Vec::new(), config, None);

    let handler = core.change_handler().expect("handler attached");
    handler(vec![item("a", "Cat")]);
    assert_eq!(*seen.borrow(), vec![1]);
}

// =============================================================
// Speech
// =============================================================

#[test]
fn speak_ignores_empty_text() {
    let (core, calls) = speaking_core("en-GB");
    core.speak("");
    assert!(calls.borrow().is_empty());
}

#[test]
fn speak_ignores_whitespace_only_text() {
    let (core, calls) = speaking_core("en-GB");
    core.speak("  \t\n ");
    assert!(calls.borrow().is_empty());
}

#[test]
fn speak_without_an_engine_is_a_silent_no_op() {
    let core = core_with(Vec::new());
    core.speak("Cat");
}

#[test]
fn speak_cancels_before_speaking() {
    let (core, calls) = speaking_core("en-GB");
    core.speak("Cat");
    assert_eq!(
        *calls.borrow(),
        vec![
            SpeechCall::Cancel,
            SpeechCall::Speak { text: "Cat".to_owned(), locale: "en-GB".to_owned() },
        ]
    );
}

#[test]
fn speak_uses_the_configured_locale() {
    let (core, calls) = speaking_core("fr-FR");
    core.speak("Chat");
    assert_eq!(
        calls.borrow().last(),
        Some(&SpeechCall::Speak { text: "Chat".to_owned(), locale: "fr-FR".to_owned() })
    );
}

#[test]
fn speak_trims_surrounding_whitespace() {
    let (core, calls) = speaking_core("en-GB");
    core.speak("  Cat  ");
    assert_eq!(
        calls.borrow().last(),
        Some(&SpeechCall::Speak { text: "Cat".to_owned(), locale: "en-GB".to_owned() })
    );
}

#[test]
fn each_speak_preempts_the_previous_one() {
    let (core, calls) = speaking_core("en-GB");
    core.speak("Cat");
    core.speak("Dog");
    let recorded = calls.borrow();
    assert_eq!(recorded.len(), 4);
    assert_eq!(recorded[0], SpeechCall::Cancel);
    assert_eq!(recorded[2], SpeechCall::Cancel);
    assert_eq!(
        recorded[3],
        SpeechCall::Speak { text: "Dog".to_owned(), locale: "en-GB".to_owned() }
    );
}
