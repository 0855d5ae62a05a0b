//! Per-store identifier allocation

/// Monotonically increasing counter owned by a single store
///
/// Two stores never share a sequence, so ids only need to be unique
/// within the store that issued them. Once `u64::MAX` has been handed
/// out the sequence is exhausted and stays that way.
#[derive(Debug, Clone)]
pub struct IdSequence {
    first: u64,
    next: Option<u64>,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self {
            first,
            next: Some(first),
        }
    }

    /// Allocate the next id, `None` when the sequence is exhausted
    pub fn next_id(&mut self) -> Option<u64> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(id)
    }

    /// Whether `id` has already been handed out by this sequence
    pub fn has_issued(&self, id: u64) -> bool {
        id >= self.first && self.next.map_or(true, |next| id < next)
    }
}
