//! Example search providers for the demo app.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::dropdown::{substring_filter, Choice, SearchOutcome, SearchProvider};

/// Synchronous provider over a fixed option set with two query prefixes:
/// `C:` switches to a case-sensitive substring match and `R:` treats the
/// rest of the query as a regex. Anything else falls through to the normal
/// case-insensitive filter.
pub struct PrefixSearch {
    options: Vec<Choice>,
}

impl PrefixSearch {
    pub fn new(options: Vec<Choice>) -> Self {
        Self { options }
    }
}

impl SearchProvider for PrefixSearch {
    fn search(&mut self, query: &str) -> SearchOutcome {
        if let Some(pattern) = query.strip_prefix("R:") {
            let results = match Regex::new(pattern) {
                Ok(regex) => self
                    .options
                    .iter()
                    .filter(|choice| regex.is_match(&choice.label))
                    .cloned()
                    .collect(),
                // An unfinished regex matches nothing rather than erroring
                Err(_) => Vec::new(),
            };
            return SearchOutcome::Ready(results);
        }

        if let Some(needle) = query.strip_prefix("C:") {
            let results = self
                .options
                .iter()
                .filter(|choice| choice.label.contains(needle))
                .cloned()
                .collect();
            return SearchOutcome::Ready(results);
        }

        SearchOutcome::Ready(substring_filter(&self.options, query))
    }
}

static COUNTRIES: Lazy<Vec<Choice>> = Lazy::new(|| {
    [
        "Argentina",
        "Australia",
        "Brazil",
        "Canada",
        "Chile",
        "Denmark",
        "Egypt",
        "Finland",
        "France",
        "Germany",
        "Greece",
        "Iceland",
        "India",
        "Italy",
        "Japan",
        "Kenya",
        "Mexico",
        "Netherlands",
        "New Zealand",
        "Norway",
        "Poland",
        "Portugal",
        "Spain",
        "Sweden",
        "Thailand",
        "Vietnam",
    ]
    .iter()
    .map(|name| Choice::new(*name, *name))
    .collect()
});

/// Asynchronous provider that pretends to be a remote lookup: it filters a
/// built-in country table on a background thread after a fixed delay and
/// answers over a channel.
pub struct SlowLookup {
    delay: Duration,
}

impl SlowLookup {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl SearchProvider for SlowLookup {
    fn search(&mut self, query: &str) -> SearchOutcome {
        let (tx, rx) = mpsc::channel();
        let query = query.to_owned();
        let delay = self.delay;

        thread::spawn(move || {
            thread::sleep(delay);
            let results = substring_filter(&COUNTRIES, &query);
            // The dropdown drops the receiver when a newer query supersedes
            // this one; the late answer just goes nowhere.
            if tx.send(results).is_err() {
                debug!("lookup for '{}' finished after being superseded", query);
            }
        });

        SearchOutcome::Pending(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Choice> {
        vec![
            Choice::new("Apple", "Apple"),
            Choice::new("Banana", "Banana"),
            Choice::new("Kiwi", "Kiwi"),
        ]
    }

    fn ready(outcome: SearchOutcome) -> Vec<Choice> {
        match outcome {
            SearchOutcome::Ready(results) => results,
            SearchOutcome::Pending(_) => panic!("expected a synchronous answer"),
        }
    }

    #[test]
    fn test_plain_query_is_case_insensitive() {
        let mut search = PrefixSearch::new(sample());
        let results = ready(search.search("AP"));
        assert_eq!(results, vec![Choice::new("Apple", "Apple")]);
    }

    #[test]
    fn test_case_sensitive_prefix() {
        let mut search = PrefixSearch::new(sample());
        assert!(ready(search.search("C:apple")).is_empty());
        assert_eq!(ready(search.search("C:App")).len(), 1);
    }

    #[test]
    fn test_regex_prefix() {
        let mut search = PrefixSearch::new(sample());
        let results = ready(search.search("R:^Ba"));
        assert_eq!(results, vec![Choice::new("Banana", "Banana")]);

        // Half-typed regex matches nothing instead of failing
        assert!(ready(search.search("R:[")).is_empty());
    }

    #[test]
    fn test_slow_lookup_answers_over_channel() {
        let mut lookup = SlowLookup::new(Duration::from_millis(10));
        let rx = match lookup.search("jap") {
            SearchOutcome::Pending(rx) => rx,
            SearchOutcome::Ready(_) => panic!("expected a pending answer"),
        };

        let results = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(results, vec![Choice::new("Japan", "Japan")]);
    }
}
