//! # Ledgerwire
//!
//! Canonical wire marshalling for ledger node requests.
//!
//! A remote ledger node deserializes, hashes and signs the requests this
//! client sends, so the byte stream must match the node's deserializer
//! exactly: one divergent byte invalidates a request. Ledgerwire builds
//! that stream from typed values: method and field signatures, storage
//! and transaction references, arbitrary-precision amounts.
//!
//! ## Quick Start
//!
//! ```
//! use ledgerwire::prelude::*;
//!
//! let object = StorageReference::new(
//!     TransactionReference::new("local", "d0e4"),
//!     BigInt::from(19992),
//! );
//!
//! let mut session = Marshaller::new();
//! object.marshal(&mut session)?;
//! let bytes = session.finish();
//! // `bytes` is the framed stream to hand to the transport layer.
//! # Ok::<(), WireError>(())
//! ```
//!
//! ## Crates
//!
//! - [`ledgerwire_core`] - the value types that get marshalled
//! - [`ledgerwire_wire`] - the byte sink, framing and per-type encodings

#![warn(missing_docs)]

pub mod prelude;

// Re-export the value graph
pub use ledgerwire_core::{
    CodeSignature, FieldSignature, MethodSignature, StorageReference, TransactionReference,
};

// Re-export the engine
pub use ledgerwire_wire::{marshal_all, Marshal, Marshaller, TextEncoding};

// Error handling
pub use ledgerwire_wire::{Result, WireError};
