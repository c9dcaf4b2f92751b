//! Value types carried by the codec beyond the language built-ins.
//!
//! - [`LogicalBuffer`] - a fixed-capacity array with a live element count
//! - [`ErrorOr`] - a success-or-error sum with an explicit empty state
//! - [`Handle`] / [`HandleReference`] - out-of-band OS handles

mod handle;
mod logical_buffer;
mod result;

pub use handle::{Handle, HandleReference};
pub use logical_buffer::LogicalBuffer;
pub use result::ErrorOr;
