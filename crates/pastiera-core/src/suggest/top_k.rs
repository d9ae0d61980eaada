use std::cmp::Ordering;

use super::SuggestionResult;

/// Ranking order: ascending distance, then descending score, then shorter
/// candidates first.
pub fn rank_order(a: &SuggestionResult, b: &SuggestionResult) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| b.score.total_cmp(&a.score))
        .then_with(|| a.candidate.chars().count().cmp(&b.candidate.chars().count()))
}

/// Bounded, always-sorted result set.
///
/// Once full, a candidate that does not rank strictly ahead of the current
/// last item is rejected with a single comparison. Items that rank equal keep
/// their arrival order.
pub(crate) struct TopK {
    limit: usize,
    items: Vec<SuggestionResult>,
}

impl TopK {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            items: Vec::with_capacity(limit.min(64)),
        }
    }

    /// Whether `item` would be kept.
    pub fn admits(&self, item: &SuggestionResult) -> bool {
        match self.items.last() {
            _ if self.limit == 0 => false,
            Some(last) if self.items.len() >= self.limit => {
                rank_order(item, last) == Ordering::Less
            }
            _ => true,
        }
    }

    pub fn offer(&mut self, item: SuggestionResult) {
        if !self.admits(&item) {
            return;
        }
        let pos = self
            .items
            .partition_point(|x| rank_order(x, &item) != Ordering::Greater);
        self.items.insert(pos, item);
        self.items.truncate(self.limit);
    }

    pub fn into_vec(self) -> Vec<SuggestionResult> {
        self.items
    }
}
