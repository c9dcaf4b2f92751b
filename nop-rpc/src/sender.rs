//! Client and service stream pairings.

use nop_core::io::{Reader, Writer};
use nop_core::{Deserializer, Serializer};

/// The client end of a channel: requests go out on the serializer,
/// responses come back on the deserializer.
#[derive(Debug)]
pub struct MethodSender<'a, W, R> {
    serializer: &'a mut Serializer<W>,
    deserializer: &'a mut Deserializer<R>,
}

impl<'a, W: Writer, R: Reader> MethodSender<'a, W, R> {
    /// Pair a serializer and deserializer as a sender.
    pub fn new(
        serializer: &'a mut Serializer<W>,
        deserializer: &'a mut Deserializer<R>,
    ) -> Self {
        Self { serializer, deserializer }
    }

    /// Borrow both streams at once.
    pub fn split(&mut self) -> (&mut Serializer<W>, &mut Deserializer<R>) {
        (&mut *self.serializer, &mut *self.deserializer)
    }
}

/// The service end of a channel: requests come in on the deserializer,
/// responses go out on the serializer.
#[derive(Debug)]
pub struct MethodReceiver<'a, R, W> {
    deserializer: &'a mut Deserializer<R>,
    serializer: &'a mut Serializer<W>,
}

impl<'a, R: Reader, W: Writer> MethodReceiver<'a, R, W> {
    /// Pair a deserializer and serializer as a receiver.
    pub fn new(
        deserializer: &'a mut Deserializer<R>,
        serializer: &'a mut Serializer<W>,
    ) -> Self {
        Self { deserializer, serializer }
    }

    /// Borrow both streams at once.
    pub fn split(&mut self) -> (&mut Deserializer<R>, &mut Serializer<W>) {
        (&mut *self.deserializer, &mut *self.serializer)
    }
}
