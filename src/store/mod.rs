//! External persistence collaborators
//!
//! All durable state lives in a managed cloud document store, and all
//! credentials live with a managed identity provider. Both are modeled as
//! object-safe traits so the orchestration layer can be exercised against
//! in-memory fakes.

pub mod document;
pub mod firestore;
pub mod identity;
#[cfg(test)]
pub mod memory;

pub use document::{paths, Document, DocumentStore, WriteOp};
pub use firestore::FirestoreStore;
pub use identity::{FirebaseIdentity, IdentityAccount, IdentityProvider, IdentitySession};
