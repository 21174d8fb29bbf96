//! Sample record types and fixtures for wirebuf development.
//!
//! Provides record implementations of the [`Writable`]/[`Readable`]
//! capability traits used by integration tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use wirebuf::{Readable, Stream, StreamError, Writable};

/// A flat record covering one value of each basic width plus a
/// length-prefixed string.
///
/// Its sample values serialize to exactly 21 bytes:
/// 1 (u8) + 2 (i16) + 4 (i32) + 14 (prefixed "Sample string").
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleRecord {
    pub byte: u8,
    pub short: i16,
    pub int: i32,
    pub text: String,
}

impl SampleRecord {
    /// The canonical sample values.
    pub fn sample() -> Self {
        Self {
            byte: 1,
            short: 2,
            int: 5,
            text: "Sample string".into(),
        }
    }

    /// Overwrite every field with recognisably wrong values, so a
    /// later `read_into` can prove it restored them.
    pub fn scramble(&mut self) {
        self.byte = 100;
        self.short = 100;
        self.int = 100;
        self.text = "Wrong string".into();
    }
}

impl Writable for SampleRecord {
    fn write_to(&self, stream: &mut Stream) -> Result<(), StreamError> {
        stream.write_u8(self.byte)?;
        stream.write_i16(self.short)?;
        stream.write_i32(self.int)?;
        stream.write_string(&self.text)
    }
}

impl Readable for SampleRecord {
    fn read_from(&mut self, stream: &mut Stream) -> Result<(), StreamError> {
        self.byte = stream.read_u8()?;
        self.short = stream.read_i16()?;
        self.int = stream.read_i32()?;
        self.text = stream.read_string()?;
        Ok(())
    }
}

/// A record nesting a [`SampleRecord`], exercising record-in-record
/// serialization through the capability seam.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NestedRecord {
    pub id: u64,
    pub inner: SampleRecord,
    pub ratio: f64,
    pub tags: Vec<u8>,
}

impl NestedRecord {
    pub fn sample() -> Self {
        Self {
            id: 0xDEAD_BEEF_0123_4567,
            inner: SampleRecord::sample(),
            ratio: 2598.342_537_52,
            tags: vec![1, 2, 3, 4, 5, 6, 7, 8],
        }
    }
}

impl Writable for NestedRecord {
    fn write_to(&self, stream: &mut Stream) -> Result<(), StreamError> {
        stream.write_u64(self.id)?;
        stream.write_value(&self.inner)?;
        stream.write_f64(self.ratio)?;
        stream.write_bytes(&self.tags)
    }
}

impl Readable for NestedRecord {
    fn read_from(&mut self, stream: &mut Stream) -> Result<(), StreamError> {
        self.id = stream.read_u64()?;
        stream.read_into(&mut self.inner)?;
        self.ratio = stream.read_f64()?;
        self.tags = stream.read_bytes()?;
        Ok(())
    }
}
