//! NOP — Native Object Protocol
//!
//! A compact binary object serialization library with typed RPC framing.
//! There is no IDL step and no runtime type registry: the schema is the
//! in-program type declaration itself, and dispatch is type-directed at
//! compile time.
//!
//! # Features
//!
//! - **Self-describing wire format**: every frame leads with a prefix
//!   byte; integers travel in the smallest size class that holds them
//! - **Fungibility**: structurally compatible types interoperate — a
//!   fixed array/count pair reads as a `Vec`, a narrow integer reads into
//!   a wide one
//! - **Schema by declaration**: [`nop_structure!`], [`nop_variant!`],
//!   and [`nop_enum!`] derive codecs from ordered member lists
//! - **Bounded framing**: [`BoundedReader`] makes truncated or oversized
//!   payloads an explicit error, never a silent overrun
//! - **Typed RPC**: SipHash-derived method selectors, length-prefixed
//!   request/response frames, and a selector-keyed [`Dispatcher`]
//!
//! # Serialization example
//!
//! ```
//! use nop::{from_bytes, nop_structure, to_bytes};
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
//! # Modules
//!
//! - [`core`] - streams, codecs, schema declarations, value types
//! - [`rpc`] - interfaces, method selectors, framing, dispatch

pub use nop_core as core;
pub use nop_rpc as rpc;

pub use nop_core::{
    assert_fungible, from_bytes, to_bytes, BoundedReader, BufferReader, BufferWriter,
    Deserializer, Encoding, EncodingByte, ErrorOr, Fungible, Handle, HandleReference,
    LogicalBuffer, NopError, Reader, Serializer, Status, Writer,
};

pub use nop_core::{nop_enum, nop_structure, nop_variant};

pub use nop_rpc::{method_selector, Dispatcher, Interface, Method, MethodReceiver, MethodSender};
