//! Core value types for Ledgerwire
//!
//! This crate defines the domain values that get marshalled into the
//! canonical byte stream consumed by a remote ledger node: signatures of
//! methods and fields, and references to transactions and storage objects.
//!
//! The types here are plain immutable data. They carry serde derives
//! because they arrive from JSON API payloads in the surrounding client,
//! but their canonical byte encoding is hand-written in `ledgerwire-wire`
//! (field order is part of the wire contract and must never depend on a
//! schema or on reflection).

#![warn(missing_docs)]

mod references;
mod signatures;

pub use references::{StorageReference, TransactionReference};
pub use signatures::{CodeSignature, FieldSignature, MethodSignature};

// Progressive indexes and amounts are arbitrary precision; re-export the
// type so downstream crates agree on the same version.
pub use num_bigint::BigInt;
