/// Append-only sequence that keeps at most `capacity` items, evicting the
/// oldest first. Used for both the weather history and the run log.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedLog<T> {
    capacity: usize,
    items: Vec<T>,
}

impl<T> BoundedLog<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            items: Vec::new(),
        }
    }

    /// Wrap previously persisted items, keeping only the most recent ones
    pub fn from_vec(capacity: usize, items: Vec<T>) -> Self {
        let mut log = Self {
            capacity: capacity.max(1),
            items,
        };
        log.truncate_front();
        log
    }

    /// Append an item and return how many old items were evicted
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.truncate_front()
    }

    fn truncate_front(&mut self) -> usize {
        let excess = self.items.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.items.drain(..excess);
        }
        excess
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
