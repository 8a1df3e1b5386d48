//! Convenient imports for Ledgerwire.
//!
//! Re-exports the most commonly used types so a client can get started
//! with a single import:
//!
//! ```
//! use ledgerwire::prelude::*;
//!
//! let mut session = Marshaller::new();
//! session.write_big_integer(&BigInt::from(9));
//! assert_eq!(session.finish(), [0xAC, 0xED, 0x00, 0x05, 0x77, 0x01, 0x0D]);
//! ```

// The marshalling session and value trait
pub use ledgerwire_wire::{marshal_all, Marshal, Marshaller, TextEncoding};

// Error handling
pub use ledgerwire_wire::{Result, WireError};

// The value graph
pub use ledgerwire_core::{
    CodeSignature, FieldSignature, MethodSignature, StorageReference, TransactionReference,
};

// Arbitrary-precision amounts, re-exported for convenience
pub use ledgerwire_core::BigInt;
