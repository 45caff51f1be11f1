//! # Identifier Generation
//!
//! Every created resource receives an identifier from an [`IdGenerator`]. The
//! generator is a shared counter: clones draw from the same sequence, so handing one
//! generator to several actors keeps identifiers unique across all of them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Thread-safe source of unique, monotonically increasing string identifiers.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    counter: Arc<AtomicU64>,
}

impl IdGenerator {
    /// Creates a generator whose first identifier is `"1"`.
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            counter: Arc::new(AtomicU64::new(first)),
        }
    }

    /// Issues the next identifier and advances the counter.
    pub fn next_id(&self) -> String {
        self.counter.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_sequential_numeric_strings() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), "1");
        assert_eq!(ids.next_id(), "2");
        assert_eq!(ids.next_id(), "3");
    }

    #[test]
    fn test_clones_share_one_sequence() {
        let dishes = IdGenerator::starting_at(10);
        let orders = dishes.clone();

        assert_eq!(dishes.next_id(), "10");
        assert_eq!(orders.next_id(), "11");
        assert_eq!(dishes.next_id(), "12");
    }

    #[tokio::test]
    async fn test_ids_unique_across_tasks() {
        let ids = IdGenerator::new();
        let mut handles = vec![];
        for _ in 0..8 {
            let ids = ids.clone();
            handles.push(tokio::spawn(async move {
                (0..50).map(|_| ids.next_id()).collect::<Vec<_>>()
            }));
        }

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.await.unwrap() {
                assert!(seen.insert(id), "duplicate id issued");
            }
        }
        assert_eq!(seen.len(), 400);
    }
}
