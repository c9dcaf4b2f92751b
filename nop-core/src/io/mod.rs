//! Byte-stream abstractions the codec runs over.
//!
//! The codec is written against the [`Reader`] and [`Writer`] traits and
//! never touches a transport directly. [`BufferReader`] and
//! [`BufferWriter`] are the in-memory reference implementations;
//! [`BoundedReader`] scopes any reader to a byte budget for framed
//! sub-streams.
//!
//! Readers and writers are stateful and non-shareable; sharing one across
//! threads requires external synchronization.

mod bounded;
mod buffer;
mod reader;
mod writer;

pub use bounded::BoundedReader;
pub use buffer::{BufferReader, BufferWriter};
pub use reader::Reader;
pub use writer::Writer;
