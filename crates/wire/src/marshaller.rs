//! Byte sink and framing engine.
//!
//! A [`Marshaller`] is one serialization session: a growable byte buffer
//! that write operations append to, plus the session's shared-string
//! table. [`Marshaller::finish`] wraps the accumulated payload in the
//! outer envelope the remote deserializer expects:
//!
//! ```text
//! AC ED 00 05                   stream header (magic + version)
//! 77 <len>                      block-data header, payload <= 255 bytes
//! 7A <len_be32>                 block-data header, longer payloads
//! <payload>                     every byte written, in call order
//! ```
//!
//! The buffer's length is the only length: every write path, including
//! the raw appends, goes through the same `Vec<u8>`, so the framed length
//! can never disagree with the bytes actually accumulated. `finish`
//! consumes the session, which makes writing after finalize (or
//! finalizing twice) a compile error rather than a runtime check.

use std::borrow::Cow;

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::error::{Result, WireError};
use crate::shared::SharedStringTable;

/// Magic number opening every framed stream.
pub const STREAM_MAGIC: u16 = 0xACED;
/// Stream format version, written right after the magic.
pub const STREAM_VERSION: u16 = 0x0005;
/// Tag of the short block-data header (1-byte length).
pub const TC_BLOCKDATA: u8 = 0x77;
/// Tag of the long block-data header (4-byte length).
pub const TC_BLOCKDATA_LONG: u8 = 0x7A;

/// Marker preceding a compact int too large for its plain form, a shared
/// string seen for the first time, and similar escape cases.
const ESCAPE: u8 = 0xFF;
/// Largest big integer that fits the biased single-byte tier.
const BIGINT_ONE_BYTE_MAX: i16 = 251;
/// Bias added to a big integer encoded in the single-byte tier.
const BIGINT_ONE_BYTE_BIAS: u8 = 4;

/// Text encoding used for string payloads.
///
/// The remote deserializers this client targets read UTF-8, so that is
/// the default; `Latin1` writes one byte per character for decoders that
/// expect a byte-per-character stream, and rejects characters above
/// U+00FF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// One byte per character; characters above U+00FF are a data error.
    Latin1,
}

/// One marshalling session.
///
/// Construct a session, ask values to append their canonical bytes, then
/// call [`finish`](Self::finish) to obtain the framed stream. Sessions
/// are single-writer and independent of each other; callers needing
/// concurrent serialization create one session per producer.
#[derive(Debug)]
pub struct Marshaller {
    buf: Vec<u8>,
    strings: SharedStringTable,
    encoding: TextEncoding,
}

impl Default for Marshaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Marshaller {
    /// Create a session writing UTF-8 strings.
    pub fn new() -> Self {
        Self::with_encoding(TextEncoding::Utf8)
    }

    /// Create a session with an explicit text encoding.
    pub fn with_encoding(encoding: TextEncoding) -> Self {
        Self {
            buf: Vec::with_capacity(256),
            strings: SharedStringTable::new(),
            encoding,
        }
    }

    /// Number of payload bytes accumulated so far.
    pub fn payload_len(&self) -> usize {
        self.buf.len()
    }

    // === Fixed-width writes ===

    /// Append one byte.
    pub fn write_byte(&mut self, v: u8) {
        self.buf.push(v);
    }

    /// Append two bytes, big-endian.
    pub fn write_short(&mut self, v: i16) {
        self.write_byte((v >> 8) as u8);
        self.write_byte(v as u8);
    }

    /// Append four bytes, big-endian two's complement.
    pub fn write_int(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Append eight bytes, big-endian two's complement.
    pub fn write_long(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Append four bytes, big-endian IEEE-754 single precision.
    pub fn write_float(&mut self, v: f32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Append one byte: `1` for true, `0` for false.
    pub fn write_boolean(&mut self, v: bool) {
        self.write_byte(u8::from(v));
    }

    /// Append two bytes, the big-endian code point of `v` truncated to
    /// 16 bits.
    pub fn write_char(&mut self, v: char) {
        self.write_short(v as u32 as i16);
    }

    // === Variable-length writes ===

    /// Append a 2-byte big-endian length followed by the encoded bytes
    /// of `s`.
    ///
    /// The length counts encoded bytes, not characters. Errors if the
    /// encoded form does not fit the 16-bit prefix.
    pub fn write_string(&mut self, s: &str) -> Result<()> {
        let bytes = self.checked_text(s)?;
        self.put_length_prefixed(&bytes);
        Ok(())
    }

    /// Append `v` in the compact form: plain 4-byte big-endian if
    /// `v < 255`, otherwise an `0xFF` marker followed by the 4 bytes.
    ///
    /// The marker buys no space; it disambiguates a count field from the
    /// payload that follows it.
    pub fn write_compact_int(&mut self, v: u32) {
        if v < 255 {
            self.buf.extend_from_slice(&v.to_be_bytes());
        } else {
            self.write_byte(ESCAPE);
            self.buf.extend_from_slice(&v.to_be_bytes());
        }
    }

    /// Append `v` in the smallest of five tiers that represents it
    /// exactly.
    ///
    /// | Tier | Condition | Bytes |
    /// |------|-----------|-------|
    /// | biased byte | fits i16 and `0 <= v <= 251` | `4 + v` |
    /// | short | fits i16 | `00` + 2 |
    /// | int | fits i32 | `01` + 4 |
    /// | long | fits i64 | `02` + 8 |
    /// | raw | anything | `03` + compact length + minimal signed big-endian bytes |
    ///
    /// Most transaction amounts are small, so the common case costs one
    /// byte and the cost escalates only as magnitude demands.
    pub fn write_big_integer(&mut self, v: &BigInt) {
        if let Some(small) = v.to_i16() {
            if (0..=BIGINT_ONE_BYTE_MAX).contains(&small) {
                self.write_byte(BIGINT_ONE_BYTE_BIAS + small as u8);
            } else {
                self.write_byte(0x00);
                self.write_short(small);
            }
        } else if let Some(int) = v.to_i32() {
            self.write_byte(0x01);
            self.write_int(int);
        } else if let Some(long) = v.to_i64() {
            self.write_byte(0x02);
            self.write_long(long);
        } else {
            let bytes = v.to_signed_bytes_be();
            self.write_byte(0x03);
            self.write_compact_int(bytes.len() as u32);
            self.buf.extend_from_slice(&bytes);
        }
    }

    /// Append raw bytes with no length prefix.
    ///
    /// Used when the length is implicit from context, for instance
    /// already announced by a preceding [`write_compact_int`](Self::write_compact_int).
    pub fn write_buffer(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Append a compact element count followed by each buffer's raw
    /// bytes, concatenated in order with no per-element prefix.
    pub fn write_buffers<B: AsRef<[u8]>>(&mut self, buffers: &[B]) {
        self.write_compact_int(buffers.len() as u32);
        for buffer in buffers {
            self.buf.extend_from_slice(buffer.as_ref());
        }
    }

    /// Append `s` by reference if this session has written it before,
    /// in full otherwise.
    ///
    /// The first occurrence is an `0xFF` marker followed by the plain
    /// string, and registers the next handle (0, 1, 2, … in first-seen
    /// order). Every later occurrence is the 2-byte big-endian handle
    /// alone, regardless of the string's own length.
    pub fn write_string_shared(&mut self, s: &str) -> Result<()> {
        if let Some(handle) = self.strings.get(s) {
            self.buf.extend_from_slice(&handle.to_be_bytes());
            return Ok(());
        }

        // Validate before the marker byte, so a bad string leaves the
        // buffer untouched.
        let bytes = self.checked_text(s)?;
        self.write_byte(ESCAPE);
        self.put_length_prefixed(&bytes);
        let handle = self.strings.register(s);
        trace!(string = s, handle, "registered shared string");
        Ok(())
    }

    // === Finalize ===

    /// Consume the session and return the framed stream.
    ///
    /// Output layout: 4-byte stream header, block-data header sized by
    /// the payload length, then the payload. Consuming `self` is what
    /// makes finalize terminal: no write can follow it.
    pub fn finish(self) -> Vec<u8> {
        let len = self.buf.len();
        let mut out = Vec::with_capacity(4 + 5 + len);

        out.extend_from_slice(&STREAM_MAGIC.to_be_bytes());
        out.extend_from_slice(&STREAM_VERSION.to_be_bytes());

        if len <= 255 {
            out.push(TC_BLOCKDATA);
            out.push(len as u8);
        } else {
            out.push(TC_BLOCKDATA_LONG);
            out.extend_from_slice(&(len as u32).to_be_bytes());
        }

        out.extend_from_slice(&self.buf);
        debug!(
            payload_len = len,
            shared_strings = self.strings.len(),
            "finished marshalling session"
        );
        out
    }

    /// Encode `s` in the session's text encoding and enforce the 16-bit
    /// length bound, without touching the buffer.
    fn checked_text<'a>(&self, s: &'a str) -> Result<Cow<'a, [u8]>> {
        let bytes: Cow<'a, [u8]> = match self.encoding {
            TextEncoding::Utf8 => Cow::Borrowed(s.as_bytes()),
            TextEncoding::Latin1 => s
                .chars()
                .map(|ch| u8::try_from(ch as u32).map_err(|_| WireError::Unencodable { ch }))
                .collect::<std::result::Result<Vec<u8>, _>>()
                .map(Cow::Owned)?,
        };

        if bytes.len() > u16::MAX as usize {
            return Err(WireError::StringTooLong { len: bytes.len() });
        }
        Ok(bytes)
    }

    fn put_length_prefixed(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(&(bytes.len() as u16).to_be_bytes());
        self.buf.extend_from_slice(bytes);
    }
}
