use super::models::RaceResult;
use std::collections::HashSet;

type Identity = (String, String, String, String);

/// Results in arrival order, deduplicated by (name, event, date, time)
pub struct ResultCollection {
    results: Vec<RaceResult>,
    seen: HashSet<Identity>,
}

impl ResultCollection {
    pub fn new() -> Self {
        Self {
            results: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Adds a result unless an identical swim is already present.
    /// Returns whether the result was kept.
    pub fn add(&mut self, result: RaceResult) -> bool {
        let (name, event, date, time) = result.identity();
        let identity = (
            name.to_string(),
            event.to_string(),
            date.to_string(),
            time.to_string(),
        );

        if !self.seen.insert(identity) {
            return false;
        }
        self.results.push(result);
        true
    }

    pub fn extend<I: IntoIterator<Item = RaceResult>>(&mut self, results: I) -> usize {
        results
            .into_iter()
            .map(|r| self.add(r))
            .filter(|kept| *kept)
            .count()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn into_vec(self) -> Vec<RaceResult> {
        self.results
    }
}

impl Default for ResultCollection {
    fn default() -> Self {
        Self::new()
    }
}
