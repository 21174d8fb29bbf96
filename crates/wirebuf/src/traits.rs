//! Capability traits for user-defined record serialization.
//!
//! Any type implementing [`Writable`] can serialize itself through a
//! [`Stream`]; any type implementing [`Readable`] can populate itself
//! from one. The stream has no knowledge of record field layouts: a
//! writable record emits a deterministic sequence of primitive values,
//! and its readable counterpart must read back exactly that sequence,
//! in the same order.

use crate::error::StreamError;
use crate::stream::Stream;

/// A record that can serialize itself into a stream.
///
/// # Examples
///
/// ```
/// use wirebuf::{Readable, Stream, StreamError, Writable};
///
/// #[derive(Default, PartialEq, Debug)]
/// struct Header {
///     version: u16,
///     name: String,
/// }
///
/// impl Writable for Header {
///     fn write_to(&self, stream: &mut Stream) -> Result<(), StreamError> {
///         stream.write_u16(self.version)?;
///         stream.write_string(&self.name)
///     }
/// }
///
/// impl Readable for Header {
///     fn read_from(&mut self, stream: &mut Stream) -> Result<(), StreamError> {
///         self.version = stream.read_u16()?;
///         self.name = stream.read_string()?;
///         Ok(())
///     }
/// }
///
/// let header = Header { version: 2, name: "blob".into() };
/// let mut stream = Stream::little_endian(16);
/// stream.write_value(&header).unwrap();
/// stream.seek(0).unwrap();
/// assert_eq!(stream.read_value::<Header>().unwrap(), header);
/// ```
pub trait Writable {
    /// Write this record's fields to `stream` as a deterministic
    /// sequence of primitive values.
    fn write_to(&self, stream: &mut Stream) -> Result<(), StreamError>;
}

/// A record that can populate itself from a stream.
///
/// Pair with `Default` to let [`Stream::read_value`] construct the
/// instance, or hand an existing one to [`Stream::read_into`].
pub trait Readable {
    /// Read this record's fields from `stream`, in exactly the order
    /// its [`Writable`] counterpart wrote them.
    fn read_from(&mut self, stream: &mut Stream) -> Result<(), StreamError>;
}
