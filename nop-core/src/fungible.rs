//! The fungibility relation.
//!
//! Two types are fungible when their schemas induce identical wire
//! productions: whatever one writes, the other reads, and the bytes are
//! equal for structurally equal values. The relation is reflexive and
//! closed under member substitution; the marker impls here cover the
//! built-in cross-type cases, and the test suite establishes the
//! byte-level equalities the markers promise.

use crate::encoding::Encoding;
use crate::types::LogicalBuffer;

/// Marker for wire-level structural equivalence with `U`.
///
/// `T: Fungible<U>` promises that every value of `T` encodes to bytes a
/// reader of `U` accepts, yielding the structurally mapped value. Senders
/// and receivers may therefore declare differently-shaped types for the
/// same protocol.
pub trait Fungible<U: ?Sized> {}

// Every type is fungible with itself.
impl<T> Fungible<T> for T {}

// A logical buffer is a dynamic sequence of its elements.
impl<T, U, const N: usize> Fungible<Vec<U>> for LogicalBuffer<T, N>
where
    T: Encoding,
    U: Encoding + Fungible<T>,
{
}

impl<T, U, const N: usize> Fungible<LogicalBuffer<U, N>> for Vec<T>
where
    T: Encoding,
    U: Encoding + Fungible<T>,
{
}

/// Compile-time assertion that `T` may stand in for `U` on the wire.
///
/// ```
/// use nop_core::{assert_fungible, LogicalBuffer};
///
/// assert_fungible::<LogicalBuffer<u8, 256>, Vec<u8>>();
/// ```
pub const fn assert_fungible<T: Fungible<U>, U>() {}
