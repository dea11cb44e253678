use std::sync::mpsc::Receiver;

use super::state::Choice;

/// What a search provider hands back for one query.
pub enum SearchOutcome {
    /// Results computed synchronously.
    Ready(Vec<Choice>),
    /// Results arriving later on this channel, one message per query. The
    /// widget polls the receiver each frame; dropping it abandons the
    /// request.
    Pending(Receiver<Vec<Choice>>),
}

/// Host-supplied replacement for the built-in filter. Latency, retries and
/// failure behavior are entirely the provider's business; if it drops the
/// channel without answering, the dropdown logs an error and keeps its
/// current view.
pub trait SearchProvider {
    fn search(&mut self, query: &str) -> SearchOutcome;
}

/// Built-in filter: the options whose label contains the query, compared
/// case-insensitively, in option-set order. An empty query matches all.
pub fn substring_filter(options: &[Choice], query: &str) -> Vec<Choice> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|choice| choice.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
