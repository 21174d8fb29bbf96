//! Byte-exact binary serialization streams over owned memory arenas.
//!
//! wirebuf converts primitive machine values — integers, floats,
//! strings, byte runs, nested records — to and from a byte-exact wire
//! representation inside one contiguous, explicitly managed memory
//! block, under a selectable byte order.
//!
//! # Architecture
//!
//! ```text
//! Stream
//! ├── value codec — varint, strings, byte runs, record seam (value.rs)
//! ├── fixed codec — bool/ints/floats, byte order, alignment fast path
//! │                 (stream.rs)
//! └── Arena       — owned allocation, explicit alloc/realloc/free,
//!                   bounds-checked access (arena.rs)
//! ```
//!
//! Writes flow strictly downward (value codec → fixed codec → arena
//! bytes) and reads flow upward. A failed operation never touches a
//! byte outside `[0, capacity)` and leaves the cursor unchanged; typed
//! faults surface as [`StreamError`].
//!
//! User-defined records plug in through the [`Writable`] and
//! [`Readable`] capability traits — the stream itself has no knowledge
//! of record field layouts.
//!
//! # Examples
//!
//! ```
//! use wirebuf::{Endianness, Stream};
//!
//! let mut stream = Stream::new(21, Endianness::Little);
//! stream.write_u8(1).unwrap();
//! stream.write_i16(2).unwrap();
//! stream.write_i32(5).unwrap();
//! stream.write_string("Sample string").unwrap();
//! assert_eq!(stream.position(), 21);
//!
//! stream.seek(0).unwrap();
//! assert_eq!(stream.read_u8().unwrap(), 1);
//! assert_eq!(stream.read_i16().unwrap(), 2);
//! assert_eq!(stream.read_i32().unwrap(), 5);
//! assert_eq!(stream.read_string().unwrap(), "Sample string");
//! assert_eq!(stream.position(), 21);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod arena;
mod copy;
pub mod endian;
pub mod error;
pub mod stream;
pub mod traits;
mod value;

// Public re-exports for the primary API surface.
pub use arena::Arena;
pub use endian::Endianness;
pub use error::StreamError;
pub use stream::Stream;
pub use traits::{Readable, Writable};
pub use value::varint_len;
