//! Canonical byte encoding of the core value types
//!
//! Every type knows the fixed sequence of engine calls that produces its
//! canonical bytes; there is no reflection or schema lookup. Field order
//! is part of the wire contract: base fields before derived fields for
//! the signature family, nested values before their siblings.
//!
//! Class and type names go through the session's shared-string table
//! (they recur across many fields of one request); member names,
//! reference kinds and hashes are written as plain strings.
//!
//! Values never frame themselves: only the outermost
//! [`Marshaller::finish`] produces the stream envelope.

use ledgerwire_core::{
    CodeSignature, FieldSignature, MethodSignature, StorageReference, TransactionReference,
};

use crate::error::Result;
use crate::marshaller::Marshaller;

/// A value that can append its canonical bytes to a session.
pub trait Marshal {
    /// Append the canonical bytes of `self`, delegating to nested values
    /// in their declared order.
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()>;
}

/// Marshal a sequence as a compact element count followed by each
/// element's canonical bytes.
pub fn marshal_all<T: Marshal>(items: &[T], ctx: &mut Marshaller) -> Result<()> {
    ctx.write_compact_int(items.len() as u32);
    for item in items {
        item.marshal(ctx)?;
    }
    Ok(())
}

impl Marshal for CodeSignature {
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()> {
        ctx.write_string_shared(self.defining_class())?;
        ctx.write_compact_int(self.formals().len() as u32);
        for formal in self.formals() {
            ctx.write_string_shared(formal)?;
        }
        Ok(())
    }
}

impl Marshal for MethodSignature {
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()> {
        // Base fields first, then the method's own.
        self.code().marshal(ctx)?;
        ctx.write_string(self.method_name())
    }
}

impl Marshal for FieldSignature {
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()> {
        ctx.write_string(self.name())?;
        ctx.write_string_shared(self.field_type())?;
        ctx.write_string_shared(self.defining_class())
    }
}

impl Marshal for TransactionReference {
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()> {
        ctx.write_string(self.kind())?;
        ctx.write_string(self.hash())
    }
}

impl Marshal for StorageReference {
    fn marshal(&self, ctx: &mut Marshaller) -> Result<()> {
        self.transaction().marshal(ctx)?;
        ctx.write_big_integer(self.progressive());
        Ok(())
    }
}
