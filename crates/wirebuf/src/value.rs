//! Value-level encodings on top of the stream cursor.
//!
//! Extends [`Stream`] with the variable-length integer codec,
//! length-prefixed and null-terminated strings, length-prefixed byte
//! runs, the user-record seam, and the raw arena/buffer copy helpers.
//!
//! Prefixed operations validate their combined span — prefix width plus
//! payload — before the prefix is written, so a failing write leaves
//! the cursor where it was.

use crate::copy::copy_bytes;
use crate::error::StreamError;
use crate::stream::Stream;
use crate::traits::{Readable, Writable};

/// Maximum number of 7-bit groups in an encoded 32-bit varint.
const MAX_VARINT_GROUPS: u32 = 5;

/// Number of bytes `value` occupies in the 7-bit group encoding.
pub fn varint_len(value: i32) -> usize {
    let mut v = value as u32;
    let mut len = 1;
    while v >= 0x80 {
        v >>= 7;
        len += 1;
    }
    len
}

/// Convert a payload length into the 32-bit prefix domain.
fn prefix_i32(len: usize) -> Result<i32, StreamError> {
    i32::try_from(len).map_err(|_| StreamError::InvalidArgument {
        detail: format!("payload length {len} exceeds the 32-bit prefix range"),
    })
}

impl Stream {
    /// Write a 32-bit value in the 7-bit group encoding.
    ///
    /// Groups are emitted least significant first; the high bit of
    /// each byte flags a continuation. The value's unsigned
    /// reinterpretation is encoded, so negative values always take
    /// five groups.
    pub fn write_varint(&mut self, value: i32) -> Result<(), StreamError> {
        self.check_span(varint_len(value))?;
        let mut v = value as u32;
        while v >= 0x80 {
            self.write_u8((v as u8) | 0x80)?;
            v >>= 7;
        }
        self.write_u8(v as u8)
    }

    /// Read a 32-bit value in the 7-bit group encoding.
    ///
    /// Non-minimal encodings are accepted. Fails with
    /// [`StreamError::MalformedVarInt`] when a fifth group still
    /// carries a continuation flag.
    pub fn read_varint(&mut self) -> Result<i32, StreamError> {
        let mut result: u32 = 0;
        let mut shift = 0;
        loop {
            if shift == 7 * MAX_VARINT_GROUPS {
                return Err(StreamError::MalformedVarInt);
            }
            let byte = self.read_u8()?;
            result |= u32::from(byte & 0x7F) << shift;
            shift += 7;
            if byte & 0x80 == 0 {
                break;
            }
        }
        Ok(result as i32)
    }

    /// Write a UTF-8 string with a varint byte-length prefix.
    pub fn write_string(&mut self, value: &str) -> Result<(), StreamError> {
        let payload = value.as_bytes();
        let length = prefix_i32(payload.len())?;
        self.check_span(varint_len(length) + payload.len())?;
        self.write_varint(length)?;
        self.write_raw(payload)
    }

    /// Read a UTF-8 string with a varint byte-length prefix.
    ///
    /// Invalid UTF-8 sequences decode to the replacement character.
    pub fn read_string(&mut self) -> Result<String, StreamError> {
        // Length prefixes are unsigned on the wire.
        let count = self.read_varint()? as u32 as usize;
        let at = self.check_span(count)?;
        let text = String::from_utf8_lossy(self.arena.slice(at, count)?).into_owned();
        self.position += count;
        Ok(text)
    }

    /// Write a null-terminated UTF-8 string: the raw bytes followed by
    /// one `0x00` byte, no length prefix.
    ///
    /// An empty string writes only the terminator. The payload must not
    /// itself contain a `0x00` byte, or the reader will stop at it —
    /// a limitation of the format.
    pub fn write_cstring(&mut self, value: &str) -> Result<(), StreamError> {
        if value.is_empty() {
            return self.write_u8(0);
        }
        let payload = value.as_bytes();
        self.check_span(payload.len() + 1)?;
        self.write_raw(payload)?;
        self.write_u8(0)
    }

    /// Read a null-terminated UTF-8 string and consume its terminator.
    ///
    /// Fails with [`StreamError::OutOfRange`] when no terminator occurs
    /// before the end of the arena. Invalid UTF-8 sequences decode to
    /// the replacement character.
    pub fn read_cstring(&mut self) -> Result<String, StreamError> {
        let count = self.scan_for(0)?;
        let at = self.check_span(count + 1)?;
        let text = String::from_utf8_lossy(self.arena.slice(at, count)?).into_owned();
        self.position += count + 1;
        Ok(text)
    }

    /// Write a byte run with a varint count prefix.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), StreamError> {
        self.write_bytes_count(data, data.len())
    }

    /// Write the first `count` bytes of `data`, prefixed with `count`
    /// rather than the source's full length.
    ///
    /// Fails with [`StreamError::InvalidArgument`] when `count` exceeds
    /// the source length.
    pub fn write_bytes_count(&mut self, data: &[u8], count: usize) -> Result<(), StreamError> {
        if count > data.len() {
            return Err(StreamError::InvalidArgument {
                detail: format!(
                    "byte-run count {count} exceeds source length {}",
                    data.len()
                ),
            });
        }
        let prefix = prefix_i32(count)?;
        self.check_span(varint_len(prefix) + count)?;
        self.write_varint(prefix)?;
        self.write_raw(&data[..count])
    }

    /// Read a byte run with a varint count prefix.
    pub fn read_bytes(&mut self) -> Result<Vec<u8>, StreamError> {
        let count = self.read_varint()? as u32 as usize;
        self.read_raw(count)
    }

    /// Serialize a record through its [`Writable`] implementation.
    ///
    /// The record writes its own deterministic sequence of primitives;
    /// the stream enforces no schema.
    pub fn write_value<T: Writable + ?Sized>(&mut self, value: &T) -> Result<(), StreamError> {
        value.write_to(self)
    }

    /// Construct a record via `Default` and populate it from the
    /// stream.
    pub fn read_value<T: Readable + Default>(&mut self) -> Result<T, StreamError> {
        let mut value = T::default();
        value.read_from(self)?;
        Ok(value)
    }

    /// Populate a caller-supplied record from the stream.
    pub fn read_into<T: Readable + ?Sized>(&mut self, value: &mut T) -> Result<(), StreamError> {
        value.read_from(self)
    }

    /// Set the bias added to the source-side offset of
    /// [`Stream::copy_to`] and [`Stream::copy_from`].
    pub fn adjust(&mut self, bias: usize) {
        self.adjusted_offset = bias;
    }

    /// Copy `len` arena bytes at `src_offset` (plus the adjusted bias)
    /// into `dest` at `dest_offset`, independent of the cursor.
    pub fn copy_to(
        &self,
        src_offset: usize,
        dest: &mut [u8],
        dest_offset: usize,
        len: usize,
    ) -> Result<(), StreamError> {
        let src = biased(src_offset, self.adjusted_offset, self.capacity())?;
        let source = self.arena.slice(src, len)?;
        let target = external_span_mut(dest, dest_offset, len)?;
        copy_bytes(source.as_ptr(), target.as_mut_ptr(), len, self.wide_copy)
    }

    /// Copy `len` bytes from `source` at `src_offset` (plus the
    /// adjusted bias) into the arena at `dest_offset`, independent of
    /// the cursor.
    pub fn copy_from(
        &mut self,
        source: &[u8],
        src_offset: usize,
        dest_offset: usize,
        len: usize,
    ) -> Result<(), StreamError> {
        let src = biased(src_offset, self.adjusted_offset, source.len())?;
        let from = external_span(source, src, len)?;
        let wide = self.wide_copy;
        let target = self.arena.slice_mut(dest_offset, len)?;
        copy_bytes(from.as_ptr(), target.as_mut_ptr(), len, wide)
    }
}

/// Apply the adjusted-offset bias with overflow protection.
fn biased(offset: usize, bias: usize, capacity: usize) -> Result<usize, StreamError> {
    offset.checked_add(bias).ok_or(StreamError::OutOfRange {
        offset,
        len: bias,
        capacity,
    })
}

/// Bounds-check a span of an external byte buffer.
fn external_span(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], StreamError> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(&buf[offset..offset + len]),
        _ => Err(StreamError::OutOfRange {
            offset,
            len,
            capacity: buf.len(),
        }),
    }
}

/// Bounds-check a mutable span of an external byte buffer.
fn external_span_mut(buf: &mut [u8], offset: usize, len: usize) -> Result<&mut [u8], StreamError> {
    match offset.checked_add(len) {
        Some(end) if end <= buf.len() => Ok(&mut buf[offset..offset + len]),
        _ => Err(StreamError::OutOfRange {
            offset,
            len,
            capacity: buf.len(),
        }),
    }
}
