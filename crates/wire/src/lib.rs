//! Wire encoding for Ledgerwire
//!
//! This crate produces the canonical byte stream that a remote ledger
//! node deserializes, hashes and signs. A single divergent byte
//! invalidates a request, so every encoding here is deterministic and
//! pinned by frozen test vectors.
//!
//! ## Stream layout
//!
//! | Section | Bytes |
//! |---------|-------|
//! | Stream header | `AC ED 00 05` |
//! | Block-data header | `77 len` (payload <= 255) or `7A len_be32` |
//! | Payload | every byte written, in call order |
//!
//! ## Per-type encodings
//!
//! | Value | Encoding |
//! |-------|----------|
//! | byte/short/int/long/float/char | fixed width, big-endian |
//! | boolean | one byte, `01`/`00` |
//! | string | 2-byte byte-length + encoded bytes |
//! | compact int | 4-byte, `FF`-escaped when >= 255 |
//! | big integer | smallest of five exact tiers |
//! | shared string | full on first sight, 2-byte handle after |
//!
//! ## Examples
//!
//! ```
//! use ledgerwire_wire::{Marshal, Marshaller};
//! use ledgerwire_core::{StorageReference, TransactionReference};
//! use num_bigint::BigInt;
//!
//! let object = StorageReference::new(
//!     TransactionReference::new("local", "d0e4"),
//!     BigInt::from(19992),
//! );
//!
//! let mut session = Marshaller::new();
//! object.marshal(&mut session)?;
//! let framed = session.finish();
//! assert_eq!(&framed[..4], [0xAC, 0xED, 0x00, 0x05]);
//! # Ok::<(), ledgerwire_wire::WireError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod encode;
mod error;
mod marshaller;
mod shared;

pub use encode::{marshal_all, Marshal};
pub use error::{Result, WireError};
pub use marshaller::{
    Marshaller, TextEncoding, STREAM_MAGIC, STREAM_VERSION, TC_BLOCKDATA, TC_BLOCKDATA_LONG,
};
