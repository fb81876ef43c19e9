//! In-memory user directory

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::entities::UserId;
use crate::domain::ports::UserDirectory;

/// User directory backed by a fixed set of ids
///
/// With no set configured every user counts as registered.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    registered: Option<HashSet<UserId>>,
}

impl InMemoryUserDirectory {
    /// Accept every user id
    pub fn allow_all() -> Self {
        Self { registered: None }
    }

    /// Accept only the given user ids
    pub fn with_users(users: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            registered: Some(users.into_iter().collect()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, user_id: &UserId) -> bool {
        match &self.registered {
            Some(users) => users.contains(user_id),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn new_id() -> UserId {
        UserId(Uuid::new_v4())
    }

    #[tokio::test]
    async fn allow_all_accepts_any_id() {
        let directory = InMemoryUserDirectory::allow_all();
        assert!(directory.exists(&new_id()).await);
        assert!(directory.exists(&UserId::default()).await);
    }

    #[tokio::test]
    async fn configured_set_rejects_unknown_ids() {
        let known = new_id();
        let directory = InMemoryUserDirectory::with_users([known]);

        assert!(directory.exists(&known).await);
        assert!(!directory.exists(&new_id()).await);
    }

    #[tokio::test]
    async fn empty_set_rejects_everyone() {
        let directory = InMemoryUserDirectory::with_users(Vec::new());
        assert!(!directory.exists(&new_id()).await);
    }
}
