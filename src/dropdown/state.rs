use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{Receiver, TryRecvError};

use super::search::{self, SearchOutcome, SearchProvider};

/// One selectable entry: a display label plus the value that identifies it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

// Identity is the value; labels are presentation only.
impl PartialEq for Choice {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Choice {}

/// Whether the option panel is currently expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// Trigger interaction phase. A pointer-down on the trigger enters
/// `SuppressNextFocus` so that the focus event riding on the same gesture
/// cannot instantly reopen a panel that gesture is about to toggle closed.
/// The phase returns to `Idle` on the next focus event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TriggerPhase {
    Idle,
    SuppressNextFocus,
}

/// Host-owned state for one dropdown instance.
///
/// The widget itself is rebuilt every frame; everything that must survive
/// between frames lives here. The selected value does not: the dropdown is
/// a controlled widget and only ever reports a pick back to the host.
pub struct DropdownState {
    panel: PanelState,
    trigger_phase: TriggerPhase,

    /// Raw filter query, displayed verbatim in the filter input.
    pub query: String,

    /// Options currently shown in the panel, in option-set order.
    pub filtered: Vec<Choice>,

    /// Receiver for the newest in-flight asynchronous search, if any.
    /// Replacing it drops the previous receiver, so an older request can
    /// never deliver a result once a newer one has been issued.
    pending: Option<Receiver<Vec<Choice>>>,

    /// Request focus for the filter input on the next frame
    focus_filter: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self {
            panel: PanelState::Closed,
            trigger_phase: TriggerPhase::Idle,
            query: String::new(),
            filtered: Vec::new(),
            pending: None,
            focus_filter: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Open the panel, starting a fresh filter session: the query and the
    /// filtered view from any previous session are discarded.
    pub fn open(&mut self, options: &[Choice]) {
        self.panel = PanelState::Open;
        self.query.clear();
        self.filtered = options.to_vec();
        self.pending = None;
        self.focus_filter = true;
    }

    /// Collapse the panel. An in-flight search is left alone; its result is
    /// simply never read, and the next `open` discards the receiver.
    pub fn close(&mut self) {
        self.panel = PanelState::Closed;
    }

    /// A pointer went down on the trigger.
    pub fn note_trigger_pointer_down(&mut self) {
        self.trigger_phase = TriggerPhase::SuppressNextFocus;
    }

    /// The trigger gained focus. Returns whether that focus event should
    /// open the panel; a suppressed event only clears the suppression.
    pub fn focus_should_open(&mut self) -> bool {
        match self.trigger_phase {
            TriggerPhase::SuppressNextFocus => {
                self.trigger_phase = TriggerPhase::Idle;
                false
            }
            TriggerPhase::Idle => true,
        }
    }

    /// One-shot focus request for the filter input.
    pub fn take_focus_request(&mut self) -> bool {
        let requested = self.focus_filter;
        self.focus_filter = false;
        requested
    }

    /// Recompute the filtered view for the current query. With no provider
    /// this is the built-in case-insensitive substring filter over labels;
    /// a provider may answer immediately or hand back a channel to poll.
    pub fn run_search(&mut self, options: &[Choice], provider: Option<&mut dyn SearchProvider>) {
        match provider {
            Some(provider) => match provider.search(&self.query) {
                SearchOutcome::Ready(results) => {
                    self.filtered = results;
                    self.pending = None;
                }
                SearchOutcome::Pending(rx) => {
                    self.pending = Some(rx);
                }
            },
            None => {
                self.filtered = search::substring_filter(options, &self.query);
                self.pending = None;
            }
        }
    }

    /// Poll the pending search, if any. Returns true while a result is
    /// still outstanding so the widget can keep requesting repaints.
    pub fn poll_search(&mut self) -> bool {
        let received = match &self.pending {
            None => return false,
            Some(rx) => rx.try_recv(),
        };

        match received {
            Ok(results) => {
                debug!("search answered with {} options", results.len());
                self.filtered = results;
                self.pending = None;
                false
            }
            Err(TryRecvError::Empty) => true,
            Err(TryRecvError::Disconnected) => {
                // The provider died without answering. Keep showing what we
                // have; error handling for custom search is the host's job.
                error!("search provider dropped its result channel without answering");
                self.pending = None;
                false
            }
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for DropdownState {
    fn default() -> Self {
        Self::new()
    }
}
