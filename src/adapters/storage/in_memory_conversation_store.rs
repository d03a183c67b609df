//! In-Memory Conversation Store
//!
//! Process-lifetime conversation state: no persistence, nothing survives a
//! restart, and nothing is ever removed. Each conversation sits behind its
//! own async mutex so requests for the same id serialize while requests for
//! different ids run in parallel.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::conversation::{Conversation, Message};
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};
use crate::ports::{ConversationGuard, ConversationStore};

/// In-memory store, constructed once at process start and handed to request
/// handlers by reference (no module-level globals, so tests get isolation
/// from fresh instances).
#[derive(Debug, Clone, Default)]
pub struct InMemoryConversationStore {
    conversations: Arc<RwLock<HashMap<ConversationId, Arc<Mutex<Conversation>>>>>,
}

impl InMemoryConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            conversations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clears all stored conversations (useful for tests).
    pub async fn clear(&self) {
        self.conversations.write().await.clear();
    }
}

#[async_trait]
impl ConversationStore for InMemoryConversationStore {
    async fn get_or_create(&self, id: Option<ConversationId>) -> (ConversationId, bool) {
        let mut conversations = self.conversations.write().await;

        if let Some(id) = id {
            if conversations.contains_key(&id) {
                return (id, false);
            }
        }

        // Absent or unknown id: create under a fresh server-generated id.
        // Unknown ids are not an error by design; ids are opaque handles,
        // not authorization tokens.
        let id = ConversationId::new();
        conversations.insert(id, Arc::new(Mutex::new(Conversation::new(id))));
        (id, true)
    }

    async fn lock(&self, id: &ConversationId) -> Option<ConversationGuard> {
        let entry = {
            let conversations = self.conversations.read().await;
            conversations.get(id).cloned()
        };
        // The map read lock is released before waiting on the per-id mutex,
        // so a long-held conversation never blocks unrelated ids.
        match entry {
            Some(entry) => Some(entry.lock_owned().await),
            None => None,
        }
    }

    async fn append(&self, id: &ConversationId, message: Message) -> Result<(), DomainError> {
        match self.lock(id).await {
            Some(mut guard) => guard.append(message),
            None => Err(DomainError::new(
                ErrorCode::ConversationNotFound,
                format!("No conversation with id {}", id),
            )),
        }
    }

    async fn snapshot(&self, id: &ConversationId) -> Option<Conversation> {
        match self.lock(id).await {
            Some(guard) => Some(guard.clone()),
            None => None,
        }
    }

    async fn count(&self) -> usize {
        self.conversations.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_or_create_without_id_creates_fresh_conversation() {
        let store = InMemoryConversationStore::new();

        let (id, created) = store.get_or_create(None).await;

        assert!(created);
        assert_eq!(store.count().await, 1);
        let conv = store.snapshot(&id).await.unwrap();
        assert!(conv.messages().is_empty());
    }

    #[tokio::test]
    async fn get_or_create_with_known_id_reuses_conversation() {
        let store = InMemoryConversationStore::new();

        let (id, _) = store.get_or_create(None).await;
        let (same_id, created) = store.get_or_create(Some(id)).await;

        assert!(!created);
        assert_eq!(same_id, id);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn unknown_supplied_id_creates_new_conversation() {
        let store = InMemoryConversationStore::new();

        let unknown = ConversationId::new();
        let (id, created) = store.get_or_create(Some(unknown)).await;

        assert!(created);
        assert_ne!(id, unknown);
        assert_eq!(store.count().await, 1);
    }

    #[tokio::test]
    async fn append_to_unknown_id_fails() {
        let store = InMemoryConversationStore::new();

        let result = store
            .append(&ConversationId::new(), Message::user("hi").unwrap())
            .await;

        assert!(matches!(
            result,
            Err(DomainError {
                code: ErrorCode::ConversationNotFound,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn append_preserves_order() {
        let store = InMemoryConversationStore::new();
        let (id, _) = store.get_or_create(None).await;

        store.append(&id, Message::user("one").unwrap()).await.unwrap();
        store
            .append(&id, Message::assistant("two").unwrap())
            .await
            .unwrap();

        let conv = store.snapshot(&id).await.unwrap();
        let contents: Vec<_> = conv.messages().iter().map(|m| m.content()).collect();
        assert_eq!(contents, vec!["one", "two"]);
    }

    #[tokio::test]
    async fn snapshot_of_unknown_id_is_none() {
        let store = InMemoryConversationStore::new();
        assert!(store.snapshot(&ConversationId::new()).await.is_none());
    }

    #[tokio::test]
    async fn guard_serializes_same_id_mutation() {
        let store = InMemoryConversationStore::new();
        let (id, _) = store.get_or_create(None).await;

        // Hold the guard across an await point while a second task tries to
        // append; the append must wait and land after the guarded pair.
        let mut guard = store.lock(&id).await.unwrap();
        guard.append(Message::user("first-user").unwrap()).unwrap();

        let store2 = store.clone();
        let handle = tokio::spawn(async move {
            store2
                .append(&id, Message::user("second-user").unwrap())
                .await
                .unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        guard
            .append(Message::assistant("first-assistant").unwrap())
            .unwrap();
        drop(guard);

        handle.await.unwrap();

        let conv = store.snapshot(&id).await.unwrap();
        let contents: Vec<_> = conv.messages().iter().map(|m| m.content()).collect();
        assert_eq!(
            contents,
            vec!["first-user", "first-assistant", "second-user"]
        );
    }

    #[tokio::test]
    async fn concurrent_turns_never_interleave() {
        let store = Arc::new(InMemoryConversationStore::new());
        let (id, _) = store.get_or_create(None).await;

        let n = 8;
        let mut handles = Vec::new();
        for i in 0..n {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let mut guard = store.lock(&id).await.unwrap();
                guard
                    .append(Message::user(format!("user-{}", i)).unwrap())
                    .unwrap();
                // Yield while holding the guard to invite interleaving.
                tokio::task::yield_now().await;
                guard
                    .append(Message::assistant(format!("assistant-{}", i)).unwrap())
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let conv = store.snapshot(&id).await.unwrap();
        assert_eq!(conv.messages().len(), 2 * n);

        // Every user message is immediately followed by its assistant reply.
        for pair in conv.messages().chunks(2) {
            assert!(pair[0].is_user());
            assert!(pair[1].is_assistant());
            let user_tag = pair[0].content().trim_start_matches("user-");
            let assistant_tag = pair[1].content().trim_start_matches("assistant-");
            assert_eq!(user_tag, assistant_tag);
        }
    }

    #[tokio::test]
    async fn different_ids_do_not_block_each_other() {
        let store = InMemoryConversationStore::new();
        let (id_a, _) = store.get_or_create(None).await;
        let (id_b, _) = store.get_or_create(None).await;

        // Hold A's guard; B must still be appendable.
        let _guard_a = store.lock(&id_a).await.unwrap();

        tokio::time::timeout(
            tokio::time::Duration::from_millis(100),
            store.append(&id_b, Message::user("parallel").unwrap()),
        )
        .await
        .expect("append on a different id must not block")
        .unwrap();
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let store = InMemoryConversationStore::new();
        store.get_or_create(None).await;
        store.get_or_create(None).await;
        assert_eq!(store.count().await, 2);

        store.clear().await;
        assert_eq!(store.count().await, 0);
    }
}
