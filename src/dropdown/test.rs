use std::sync::mpsc::{self, Sender};

use super::registry::OpenRegistry;
use super::search::{substring_filter, SearchOutcome, SearchProvider};
use super::state::{Choice, DropdownState};
use super::widget::Dropdown;

fn fruits() -> Vec<Choice> {
    vec![
        Choice::new("Apple", "Apple"),
        Choice::new("Banana", "Banana"),
        Choice::new("Kiwi", "Kiwi"),
    ]
}

fn labels(choices: &[Choice]) -> Vec<&str> {
    choices.iter().map(|c| c.label.as_str()).collect()
}

/// Fake provider that parks every request on a channel so tests control
/// exactly when each answer lands.
struct ChannelSearch {
    senders: Vec<Sender<Vec<Choice>>>,
}

impl ChannelSearch {
    fn new() -> Self {
        Self {
            senders: Vec::new(),
        }
    }
}

impl SearchProvider for ChannelSearch {
    fn search(&mut self, _query: &str) -> SearchOutcome {
        let (tx, rx) = mpsc::channel();
        self.senders.push(tx);
        SearchOutcome::Pending(rx)
    }
}

#[test]
fn test_substring_filter_is_case_insensitive() {
    let options = fruits();

    assert_eq!(labels(&substring_filter(&options, "an")), vec!["Banana"]);
    assert_eq!(labels(&substring_filter(&options, "AN")), vec!["Banana"]);
    assert!(substring_filter(&options, "z").is_empty());
}

#[test]
fn test_substring_filter_preserves_order() {
    let options = fruits();

    // Both Apple and Banana contain an "a"; the option-set order stays
    assert_eq!(
        labels(&substring_filter(&options, "a")),
        vec!["Apple", "Banana"]
    );
    assert_eq!(labels(&substring_filter(&options, "")).len(), 3);
}

#[test]
fn test_open_starts_a_fresh_filter_session() {
    let options = fruits();
    let mut state = DropdownState::new();

    state.open(&options);
    state.query = "ap".to_string();
    state.run_search(&options, None);
    assert_eq!(labels(&state.filtered), vec!["Apple"]);

    state.close();
    state.open(&options);
    assert!(state.query.is_empty());
    assert_eq!(state.filtered.len(), 3);
}

#[test]
fn test_pointer_down_suppresses_exactly_one_focus() {
    let mut state = DropdownState::new();

    state.note_trigger_pointer_down();
    assert!(!state.focus_should_open());

    // Suppression is spent; the next focus is genuine
    assert!(state.focus_should_open());
}

#[test]
fn test_registry_holds_at_most_one_instance() {
    let a = egui::Id::new("a");
    let b = egui::Id::new("b");
    let mut registry = OpenRegistry::new();

    assert_eq!(registry.acquire(a), None);
    assert_eq!(registry.acquire(b), Some(a));
    assert!(registry.is_holder(b));
    assert!(!registry.is_holder(a));

    // A displaced instance must not clear the new holder
    registry.release(a);
    assert!(registry.is_holder(b));

    registry.release(b);
    assert_eq!(registry.holder(), None);
}

#[test]
fn test_reacquiring_does_not_report_self_as_displaced() {
    let a = egui::Id::new("a");
    let mut registry = OpenRegistry::new();

    registry.acquire(a);
    assert_eq!(registry.acquire(a), None);
}

#[test]
fn test_second_open_closes_first() {
    let options = fruits();
    let id_a = egui::Id::new("fruit");
    let id_b = egui::Id::new("animal");
    let mut registry = OpenRegistry::new();
    let mut a = DropdownState::new();
    let mut b = DropdownState::new();

    a.open(&options);
    registry.acquire(id_a);

    b.open(&options);
    assert_eq!(registry.acquire(id_b), Some(id_a));

    // A notices the loss on its next frame and collapses
    if a.is_open() && !registry.is_holder(id_a) {
        a.close();
    }
    assert!(!a.is_open());
    assert!(b.is_open());

    // Outside press while B is open: B closes and the slot empties
    b.close();
    registry.release(id_b);
    assert_eq!(registry.holder(), None);
}

#[test]
fn test_newer_search_supersedes_older_pending() {
    let options = fruits();
    let mut provider = ChannelSearch::new();
    let mut state = DropdownState::new();
    state.open(&options);

    state.query = "a".to_string();
    state.run_search(&options, Some(&mut provider));
    state.query = "ap".to_string();
    state.run_search(&options, Some(&mut provider));

    // The first request's channel is gone; its late answer cannot land
    assert!(provider.senders[0].send(fruits()).is_err());

    provider.senders[1]
        .send(vec![Choice::new("Apple", "Apple")])
        .unwrap();
    assert!(!state.poll_search());
    assert_eq!(labels(&state.filtered), vec!["Apple"]);
}

#[test]
fn test_poll_waits_until_the_answer_lands() {
    let options = fruits();
    let mut provider = ChannelSearch::new();
    let mut state = DropdownState::new();
    state.open(&options);

    state.query = "ki".to_string();
    state.run_search(&options, Some(&mut provider));

    // Nothing sent yet, so the view still shows the full set
    assert!(state.poll_search());
    assert_eq!(state.filtered.len(), 3);

    provider.senders[0]
        .send(vec![Choice::new("Kiwi", "Kiwi")])
        .unwrap();
    assert!(!state.poll_search());
    assert_eq!(labels(&state.filtered), vec!["Kiwi"]);
    assert!(!state.has_pending_search());
}

#[test]
fn test_dead_provider_keeps_current_view() {
    let options = fruits();
    let mut provider = ChannelSearch::new();
    let mut state = DropdownState::new();
    state.open(&options);

    state.query = "ba".to_string();
    state.run_search(&options, Some(&mut provider));
    provider.senders.clear();

    assert!(!state.poll_search());
    assert!(!state.has_pending_search());
    assert_eq!(state.filtered.len(), 3);
}

#[test]
fn test_synchronous_provider_answers_immediately() {
    struct Upper;
    impl SearchProvider for Upper {
        fn search(&mut self, query: &str) -> SearchOutcome {
            SearchOutcome::Ready(vec![Choice::new(query.to_uppercase(), query.to_uppercase())])
        }
    }

    let mut provider = Upper;
    let mut state = DropdownState::new();
    state.open(&fruits());

    state.query = "dog".to_string();
    state.run_search(&[], Some(&mut provider));
    assert_eq!(labels(&state.filtered), vec!["DOG"]);
    assert!(!state.has_pending_search());
}

#[test]
fn test_choice_identity_is_the_value() {
    assert_eq!(Choice::new("a", "Apple"), Choice::new("a", "apple"));
    assert_ne!(Choice::new("a", "Apple"), Choice::new("b", "Apple"));
}

#[test]
fn test_widget_renders_closed_and_open() {
    let options = fruits();
    let mut registry = OpenRegistry::new();
    let mut state = DropdownState::new();
    let ctx = egui::Context::default();

    ctx.run(Default::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let reply = Dropdown::new("smoke", &mut state, &mut registry, &options).show(ui);
            assert!(reply.picked.is_none());
            assert!(!reply.is_open);
        });
    });

    // Open it as a click would, then render the panel
    state.open(&options);
    registry.acquire(egui::Id::new("smoke"));

    ctx.run(Default::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            let reply = Dropdown::new("smoke", &mut state, &mut registry, &options)
                .selected(options.first())
                .show(ui);
            assert!(reply.is_open);
        });
    });

    assert!(state.is_open());
    assert!(registry.is_holder(egui::Id::new("smoke")));
}
