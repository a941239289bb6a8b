use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use dashmap::DashMap;

use crate::contact::ContactSubmission;

pub const DEFAULT_INBOX_CAPACITY: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredMessage {
    pub id: u64,
    pub received_at: DateTime<Utc>,
    pub submission: ContactSubmission,
}

/// Contact messages received since the process started, newest kept.
#[derive(Debug)]
pub struct ContactInbox {
    messages: DashMap<u64, StoredMessage>,
    next_id: AtomicU64,
    capacity: usize,
}

impl Default for ContactInbox {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_INBOX_CAPACITY)
    }
}

impl ContactInbox {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            messages: DashMap::new(),
            next_id: AtomicU64::new(1),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Stores a message and returns its id, evicting the oldest ones once
    /// the inbox is over capacity.
    pub fn push(&self, submission: ContactSubmission) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.messages.insert(
            id,
            StoredMessage {
                id,
                received_at: Utc::now(),
                submission,
            },
        );
        while self.messages.len() > self.capacity {
            // collect before removing; a live iterator holds shard locks
            let oldest = self.messages.iter().map(|entry| *entry.key()).min();
            match oldest {
                Some(oldest) => {
                    self.messages.remove(&oldest);
                }
                None => break,
            }
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn message(n: usize) -> ContactSubmission {
        ContactSubmission {
            first_name: format!("Visitor{n}"),
            last_name: "Test".to_string(),
            email: format!("visitor{n}@example.com"),
            company: None,
            message: "Looking forward to chatting.".to_string(),
        }
    }

    #[test]
    fn test_push_stores_message() {
        let inbox = ContactInbox::default();
        let id = inbox.push(message(1));
        let stored = inbox.messages.get(&id).unwrap();
        assert_eq!(stored.submission.first_name, "Visitor1");
        assert_eq!(inbox.len(), 1);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let inbox = ContactInbox::with_capacity(3);
        let ids: Vec<_> = (0..5).map(|n| inbox.push(message(n))).collect();

        assert_eq!(inbox.len(), 3);
        let mut kept: Vec<_> = inbox.messages.iter().map(|entry| *entry.key()).collect();
        kept.sort_unstable();
        assert_eq!(kept, ids[2..]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let inbox = ContactInbox::with_capacity(0);
        inbox.push(message(1));
        let id = inbox.push(message(2));
        assert_eq!(inbox.len(), 1);
        assert!(inbox.messages.contains_key(&id));
    }

    #[test]
    fn test_concurrent_pushes_get_distinct_ids() {
        let inbox = Arc::new(ContactInbox::with_capacity(1000));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let inbox = inbox.clone();
                std::thread::spawn(move || (0..50).map(|n| inbox.push(message(t * 100 + n))).count())
            })
            .collect();
        let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, 400);
        assert_eq!(inbox.len(), 400);
    }
}
