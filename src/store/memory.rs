//! In-memory store and identity fakes used by orchestration tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{AppError, AppResult};

use super::document::{Document, DocumentStore, WriteOp};
use super::identity::{IdentityAccount, IdentityProvider, IdentitySession};

/// In-memory document store honoring the atomic-batch and create-precondition
/// semantics of the real store
#[derive(Default)]
pub struct MemoryStore {
    docs: Mutex<BTreeMap<String, Value>>,
    fail_next_commit: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a document directly, bypassing commit semantics
    pub fn insert(&self, path: &str, fields: Value) {
        self.docs
            .lock()
            .expect("store mutex poisoned")
            .insert(path.to_string(), fields);
    }

    /// Make the next commit fail with a store error (fault injection)
    pub fn fail_next_commit(&self) {
        self.fail_next_commit.store(true, Ordering::SeqCst);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.docs
            .lock()
            .expect("store mutex poisoned")
            .contains_key(path)
    }

    pub fn document(&self, path: &str) -> Option<Value> {
        self.docs
            .lock()
            .expect("store mutex poisoned")
            .get(path)
            .cloned()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &str) -> AppResult<Option<Document>> {
        let docs = self.docs.lock().expect("store mutex poisoned");
        Ok(docs.get(path).map(|fields| Document {
            path: path.to_string(),
            fields: fields.clone(),
        }))
    }

    async fn list(&self, collection_path: &str) -> AppResult<Vec<Document>> {
        let prefix = format!("{collection_path}/");
        let docs = self.docs.lock().expect("store mutex poisoned");
        Ok(docs
            .iter()
            .filter(|(path, _)| {
                // Direct children only, not nested subcollections
                path.strip_prefix(&prefix)
                    .is_some_and(|rest| !rest.contains('/'))
            })
            .map(|(path, fields)| Document {
                path: path.clone(),
                fields: fields.clone(),
            })
            .collect())
    }

    async fn commit(&self, writes: Vec<WriteOp>) -> AppResult<()> {
        if self.fail_next_commit.swap(false, Ordering::SeqCst) {
            return Err(AppError::Store("injected commit failure".to_string()));
        }

        let mut docs = self.docs.lock().expect("store mutex poisoned");

        // Validate preconditions before applying anything (all-or-nothing)
        for write in &writes {
            if let WriteOp::Create { path, .. } = write {
                if docs.contains_key(path) {
                    return Err(AppError::Conflict("document already exists".to_string()));
                }
            }
        }

        for write in writes {
            match write {
                WriteOp::Create { path, fields } | WriteOp::Set { path, fields } => {
                    docs.insert(path, fields);
                }
                WriteOp::Merge { path, fields } => {
                    let entry = docs.entry(path).or_insert_with(|| Value::Object(Default::default()));
                    if let (Some(target), Some(updates)) = (entry.as_object_mut(), fields.as_object())
                    {
                        for (key, value) in updates {
                            target.insert(key.clone(), value.clone());
                        }
                    }
                }
                WriteOp::Delete { path } => {
                    docs.remove(&path);
                }
            }
        }

        Ok(())
    }
}

/// In-memory identity provider fake.
///
/// Session tokens are `token-{uid}` so tests can construct them directly.
#[derive(Default)]
pub struct MemoryIdentity {
    accounts: Mutex<BTreeMap<String, MemoryAccount>>,
    next_uid: AtomicU64,
}

#[derive(Clone)]
struct MemoryAccount {
    uid: String,
    email: String,
    password: String,
    display_name: Option<String>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.lock().expect("identity mutex poisoned").len()
    }

    pub fn has_account(&self, email: &str) -> bool {
        self.accounts
            .lock()
            .expect("identity mutex poisoned")
            .contains_key(email)
    }

    pub fn display_name(&self, email: &str) -> Option<String> {
        self.accounts
            .lock()
            .expect("identity mutex poisoned")
            .get(email)
            .and_then(|a| a.display_name.clone())
    }

    fn session_for(account: &MemoryAccount) -> IdentitySession {
        IdentitySession {
            uid: account.uid.clone(),
            email: account.email.clone(),
            id_token: format!("token-{}", account.uid),
            refresh_token: format!("refresh-{}", account.uid),
        }
    }

    fn account_by_token(
        accounts: &BTreeMap<String, MemoryAccount>,
        id_token: &str,
    ) -> Option<MemoryAccount> {
        let uid = id_token.strip_prefix("token-")?;
        accounts.values().find(|a| a.uid == uid).cloned()
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<IdentitySession> {
        let mut accounts = self.accounts.lock().expect("identity mutex poisoned");
        if accounts.contains_key(email) {
            return Err(AppError::EmailTaken);
        }

        let uid = format!("uid-{}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
        let account = MemoryAccount {
            uid,
            email: email.to_string(),
            password: password.to_string(),
            display_name: None,
        };
        let session = Self::session_for(&account);
        accounts.insert(email.to_string(), account);
        Ok(session)
    }

    async fn delete_account(&self, id_token: &str) -> AppResult<()> {
        let mut accounts = self.accounts.lock().expect("identity mutex poisoned");
        let account = Self::account_by_token(&accounts, id_token).ok_or(AppError::InvalidToken)?;
        accounts.remove(&account.email);
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<IdentitySession> {
        let accounts = self.accounts.lock().expect("identity mutex poisoned");
        match accounts.get(email) {
            Some(account) if account.password == password => Ok(Self::session_for(account)),
            _ => Err(AppError::InvalidCredentials),
        }
    }

    async fn lookup(&self, id_token: &str) -> AppResult<IdentityAccount> {
        let accounts = self.accounts.lock().expect("identity mutex poisoned");
        let account = Self::account_by_token(&accounts, id_token).ok_or(AppError::InvalidToken)?;
        Ok(IdentityAccount {
            uid: account.uid,
            email: account.email,
            display_name: account.display_name,
        })
    }

    async fn update_display_name(&self, id_token: &str, display_name: &str) -> AppResult<()> {
        let mut accounts = self.accounts.lock().expect("identity mutex poisoned");
        let account = Self::account_by_token(&accounts, id_token).ok_or(AppError::InvalidToken)?;
        if let Some(stored) = accounts.get_mut(&account.email) {
            stored.display_name = Some(display_name.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_precondition_rejects_whole_batch() {
        let store = MemoryStore::new();
        store.insert("usernames/bob", json!({ "uid": "other" }));

        let result = store
            .commit(vec![
                WriteOp::Create {
                    path: "users/u1".to_string(),
                    fields: json!({ "username": "bob" }),
                },
                WriteOp::Create {
                    path: "usernames/bob".to_string(),
                    fields: json!({ "uid": "u1" }),
                },
            ])
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        // Nothing from the batch may have been applied
        assert!(!store.contains("users/u1"));
    }

    #[tokio::test]
    async fn test_merge_preserves_other_fields() {
        let store = MemoryStore::new();
        store.insert("users/u1", json!({ "username": "bob", "solved": ["p1"] }));

        store
            .commit(vec![WriteOp::Merge {
                path: "users/u1".to_string(),
                fields: json!({ "name": "Bob" }),
            }])
            .await
            .expect("merge commit");

        let doc = store.document("users/u1").expect("document exists");
        assert_eq!(doc["username"], "bob");
        assert_eq!(doc["name"], "Bob");
        assert_eq!(doc["solved"], json!(["p1"]));
    }

    #[tokio::test]
    async fn test_list_returns_direct_children_only() {
        let store = MemoryStore::new();
        store.insert("users/u1", json!({}));
        store.insert("users/u1/notes/n1", json!({ "title": "a" }));
        store.insert("users/u1/notes/n2", json!({ "title": "b" }));

        let notes = store.list("users/u1/notes").await.expect("list");
        assert_eq!(notes.len(), 2);

        let users = store.list("users").await.expect("list");
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_identity_lifecycle() {
        let identity = MemoryIdentity::new();
        let session = identity
            .create_account("bob@x.com", "secret1")
            .await
            .expect("create");

        assert!(identity.has_account("bob@x.com"));
        assert!(identity.sign_in("bob@x.com", "wrong").await.is_err());

        let account = identity.lookup(&session.id_token).await.expect("lookup");
        assert_eq!(account.email, "bob@x.com");

        identity.delete_account(&session.id_token).await.expect("delete");
        assert!(!identity.has_account("bob@x.com"));
    }
}
