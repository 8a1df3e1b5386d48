//! References to transactions and storage objects
//!
//! A transaction reference names a transaction already executed by the
//! node; a storage reference names one object created by that
//! transaction, by its progressive creation index. Both are opaque
//! identifiers to this client: they are carried around and marshalled,
//! never interpreted.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// Reference to a transaction executed by the remote node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionReference {
    /// Kind of the reference, as reported by the node (for instance
    /// `"local"`)
    kind: String,
    /// Hexadecimal hash of the transaction request
    hash: String,
}

impl TransactionReference {
    /// Create a transaction reference from its kind and hash.
    pub fn new(kind: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            hash: hash.into(),
        }
    }

    /// The kind of the reference.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The hexadecimal hash of the transaction request.
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

/// Reference to an object in the store of the remote node.
///
/// An object is identified by the transaction that created it and by its
/// progressive index among the objects created by that same transaction.
/// The progressive is arbitrary precision: nodes assign it, clients only
/// relay it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageReference {
    /// The transaction that created the object
    transaction: TransactionReference,
    /// Progressive index of the object among those created by the
    /// transaction
    progressive: BigInt,
}

impl StorageReference {
    /// Create a storage reference from its creating transaction and
    /// progressive index.
    pub fn new(transaction: TransactionReference, progressive: impl Into<BigInt>) -> Self {
        Self {
            transaction,
            progressive: progressive.into(),
        }
    }

    /// The transaction that created the object.
    pub fn transaction(&self) -> &TransactionReference {
        &self.transaction
    }

    /// The progressive index of the object.
    pub fn progressive(&self) -> &BigInt {
        &self.progressive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === TransactionReference ===

    #[test]
    fn test_transaction_reference_fields() {
        let reference = TransactionReference::new(
            "local",
            "d0e496468c25fca59179885fa7c5ff4f440efbd0e0c96c2426b7997336619882",
        );
        assert_eq!(reference.kind(), "local");
        assert_eq!(reference.hash().len(), 64);
    }

    // === StorageReference ===

    #[test]
    fn test_storage_reference_fields() {
        let transaction = TransactionReference::new("local", "abcd");
        let reference = StorageReference::new(transaction.clone(), 19992);
        assert_eq!(reference.transaction(), &transaction);
        assert_eq!(reference.progressive(), &BigInt::from(19992));
    }

    #[test]
    fn test_storage_reference_serde_round_trip() {
        let reference = StorageReference::new(TransactionReference::new("local", "ff00"), 7);
        let json = serde_json::to_string(&reference).unwrap();
        let back: StorageReference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reference);
    }
}
