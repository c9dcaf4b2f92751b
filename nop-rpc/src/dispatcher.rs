//! Selector-keyed request dispatch.

use std::collections::HashMap;

use core::marker::PhantomData;

use nop_core::io::{Reader, Writer};
use nop_core::{BoundedReader, Encoding, EncodingByte, NopError, Serializer, Status};
use tracing::{trace, warn};

use crate::interface::Method;
use crate::sender::MethodReceiver;

/// A type-erased bound handler.
///
/// The frame reader is a trait object so the dispatch table stays
/// independent of the transport it later serves.
trait ErasedHandler<C, W: Writer> {
    fn handle(
        &mut self,
        context: &mut C,
        frame: &mut BoundedReader<'_, dyn Reader + '_>,
        serializer: &mut Serializer<W>,
    ) -> Status<()>;
}

/// Adapts a typed callback to the erased handler shape: decode the
/// argument tuple, invoke, encode the response frame.
struct MethodHandler<Args, Ret, F> {
    callback: F,
    _signature: PhantomData<fn(Args) -> Ret>,
}

impl<C, W, Args, Ret, F> ErasedHandler<C, W> for MethodHandler<Args, Ret, F>
where
    W: Writer,
    Args: Encoding,
    Ret: Encoding,
    F: FnMut(&mut C, Args) -> Ret,
{
    fn handle(
        &mut self,
        context: &mut C,
        frame: &mut BoundedReader<'_, dyn Reader + '_>,
        serializer: &mut Serializer<W>,
    ) -> Status<()> {
        let arguments = Args::read(frame)?;
        frame.read_padding()?;

        let value = (self.callback)(context, arguments);

        let writer = serializer.writer();
        (value.encoded_size() as u64).write(writer)?;
        value.write(writer)
    }
}

struct HandlerEntry<C, W: Writer> {
    name: &'static str,
    handler: Box<dyn ErasedHandler<C, W>>,
}

/// A dispatch table mapping method selectors to bound handlers.
///
/// Handlers receive a caller-supplied context of type `C` plus the decoded
/// argument tuple, and return the method's response value; a handler that
/// reports application errors does so in its return type. The dispatch
/// loop is driven explicitly by the service: each
/// [`dispatch`](Self::dispatch) call consumes exactly one request frame
/// and produces at most one response frame, so a single channel stays
/// strictly FIFO.
pub struct Dispatcher<C, W: Writer> {
    handlers: HashMap<u64, HandlerEntry<C, W>>,
}

impl<C, W: Writer> Default for Dispatcher<C, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, W: Writer> Dispatcher<C, W> {
    /// Create an empty dispatch table.
    #[must_use]
    pub fn new() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// Bind `method` to `callback`.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateMethodHash` if a method with the same selector is
    /// already bound; the table is left unchanged, making selector
    /// collisions a declaration-time failure.
    pub fn bind<Args, Ret, F>(&mut self, method: &Method<Args, Ret>, callback: F) -> Status<()>
    where
        Args: Encoding + 'static,
        Ret: Encoding + 'static,
        F: FnMut(&mut C, Args) -> Ret + 'static,
    {
        if self.handlers.contains_key(&method.selector()) {
            return Err(NopError::DuplicateMethodHash);
        }
        self.handlers.insert(
            method.selector(),
            HandlerEntry {
                name: method.name(),
                handler: Box::new(MethodHandler { callback, _signature: PhantomData }),
            },
        );
        Ok(())
    }

    /// Number of bound methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no methods are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Consume one request frame: decode the selector, invoke the bound
    /// handler under a reader scoped to the frame, and encode the
    /// response frame.
    ///
    /// Malformed and unknown requests are drained to the frame boundary
    /// before the error is returned, so the stream stays aligned for the
    /// next request.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterfaceMethod` for an unbound selector, or the
    /// failure the frame decode reported.
    pub fn dispatch<R: Reader>(
        &mut self,
        context: &mut C,
        receiver: &mut MethodReceiver<'_, R, W>,
    ) -> Status<()> {
        let (deserializer, serializer) = receiver.split();
        let reader: &mut dyn Reader = deserializer.reader();

        let frame_bytes = u64::read(reader)?;
        let frame_bytes =
            usize::try_from(frame_bytes).map_err(|_| NopError::InvalidContainerLength)?;
        let mut frame = BoundedReader::new(reader, frame_bytes);

        match read_selector(&mut frame) {
            Ok(selector) => match self.handlers.get_mut(&selector) {
                Some(entry) => {
                    trace!(selector, method = entry.name, "dispatching request");
                    match entry.handler.handle(context, &mut frame, serializer) {
                        Ok(()) => Ok(()),
                        Err(error) => {
                            frame.read_padding()?;
                            Err(error)
                        }
                    }
                }
                None => {
                    warn!(selector, "no handler bound for selector");
                    frame.read_padding()?;
                    Err(NopError::InvalidInterfaceMethod)
                }
            },
            Err(error) => {
                frame.read_padding()?;
                Err(error)
            }
        }
    }
}

/// Parse the `(selector, arguments)` pair header and the selector,
/// leaving the frame positioned at the argument tuple.
fn read_selector<R: Reader + ?Sized>(frame: &mut BoundedReader<'_, R>) -> Status<u64> {
    let prefix = EncodingByte::read(frame)?;
    if prefix != EncodingByte::Array {
        return Err(NopError::UnexpectedEncodingType);
    }
    let pair_count = u64::read(frame)?;
    if pair_count != 2 {
        return Err(NopError::InvalidContainerLength);
    }
    u64::read(frame)
}

impl<C, W: Writer> core::fmt::Debug for Dispatcher<C, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dispatcher").field("handlers", &self.handlers.len()).finish()
    }
}
