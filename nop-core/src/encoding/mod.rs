//! The wire grammar and the per-type codecs.
//!
//! Every encoded frame is a prefix byte followed by an optional payload;
//! the prefix alone determines the parser continuation. The [`Encoding`]
//! trait is the per-type capability (prefix selection, exact sizing,
//! prefix matching, payload transfer) and is implemented here for the
//! built-in types:
//!
//! - integers with compact size classes ([`integer`](self))
//! - booleans, floats, and unit ([`scalar`](self))
//! - strings, sequences, maps, tuples
//! - logical buffers and array/count member pairs
//! - options, results, and declared variants
//! - out-of-band handles
//!
//! User types enter through the declaration macros:
//! [`nop_structure!`](crate::nop_structure),
//! [`nop_variant!`](crate::nop_variant), and
//! [`nop_enum!`](crate::nop_enum).

mod buffer;
mod byte;
mod enumeration;
mod handle;
mod integer;
mod map;
mod result;
mod scalar;
mod sequence;
mod string;
mod structure;
mod traits;
mod tuple;
mod variant;


pub use buffer::{buffer_member_size, read_buffer_member, write_buffer_member};
pub use byte::{EncodingByte, NEGATIVE_FIXINT_MIN, POSITIVE_FIXINT_MAX};
pub use sequence::{
    read_sequence_count, read_sequence_element, sequence_prefix, slice_encoded_size,
    write_slice_payload,
};
pub use traits::Encoding;
