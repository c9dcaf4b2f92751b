//! NOP core
//!
//! Compact, self-describing binary serialization without an IDL step: the
//! schema is the in-program type declaration itself. Values encode to a
//! prefix-byte grammar with compact integer size classes, decode back
//! under strict type and size checks, and structurally compatible types
//! interoperate through the fungibility relation.
//!
//! # Overview
//!
//! - **Streams**: [`Reader`]/[`Writer`] abstractions, the in-memory
//!   [`BufferReader`]/[`BufferWriter`], and [`BoundedReader`] for framed
//!   sub-streams with a byte budget
//! - **Codecs**: the [`Encoding`] trait and implementations for the
//!   built-in types
//! - **Schema**: [`nop_structure!`], [`nop_variant!`], and [`nop_enum!`]
//!   declarations for user types
//! - **Values**: [`LogicalBuffer`], [`ErrorOr`], [`Handle`]
//! - **Facades**: [`Serializer`]/[`Deserializer`] and the
//!   [`to_bytes`]/[`from_bytes`] conveniences
//!
//! # Example
//!
//! ```
//! use nop_core::{from_bytes, nop_structure, to_bytes};
//!
//! /// A point in screen space.
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub struct Point {
//!     /// Horizontal position.
//!     pub x: u32,
//!     /// Vertical position.
//!     pub y: i32,
//! }
//! nop_structure!(Point { x, y });
//!
//! let bytes = to_bytes(&Point { x: 1, y: -1 }).unwrap();
//! assert_eq!(bytes, [0xC8, 0x02, 0x01, 0xFF]);
//! assert_eq!(from_bytes::<Point>(&bytes).unwrap(), Point { x: 1, y: -1 });
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Status`], whose error side is the
//! closed [`NopError`] taxonomy. Nothing panics and nothing is thrown;
//! codecs short-circuit on the first failure and return the kind
//! unchanged.
//!
//! The codec core is single-threaded per serializer/deserializer, touches
//! no global state, and has no asynchronous suspension points. Because
//! dispatch is type-directed, decode recursion depth is bounded by the
//! static nesting depth of the target type; hostile input cannot induce
//! unbounded recursion.

pub mod encoding;
pub mod error;
pub mod fungible;
pub mod io;
pub mod serialize;
pub mod types;

pub use encoding::{Encoding, EncodingByte};
pub use error::{NopError, Status};
pub use fungible::{assert_fungible, Fungible};
pub use io::{BoundedReader, BufferReader, BufferWriter, Reader, Writer};
pub use serialize::{from_bytes, to_bytes, Deserializer, Serializer};
pub use types::{ErrorOr, Handle, HandleReference, LogicalBuffer};
