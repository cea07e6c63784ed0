use crate::models::AnalysisResult;
use std::collections::BTreeSet;

/// Caller-owned record of which recommendations have been dealt with.
/// Keys are [`Recommendation::id`](crate::models::Recommendation) values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionTracker {
    completed: BTreeSet<String>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            completed: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn mark(&mut self, id: &str) {
        self.completed.insert(id.to_string());
    }

    /// Flips the completion state of `id` and returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.completed.remove(id) {
            false
        } else {
            self.completed.insert(id.to_string());
            true
        }
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Number of `result`'s recommendations marked complete.
    pub fn completed_in(&self, result: &AnalysisResult) -> usize {
        result
            .recommendations
            .iter()
            .filter(|rec| self.is_complete(&rec.id))
            .count()
    }

    /// Percentage of `result`'s recommendations marked complete. Ids that do
    /// not appear in `result` are ignored.
    pub fn progress(&self, result: &AnalysisResult) -> u8 {
        let total = result.recommendations.len();
        if total == 0 {
            return 0;
        }
        ((self.completed_in(result) as f64 * 100.0) / total as f64).round() as u8
    }
}
