//! NOP RPC
//!
//! Typed method calls layered on the NOP codec. An [`Interface`] names a
//! group of methods; each [`Method`] carries a SipHash-derived wire
//! selector and a typed signature. Clients invoke methods through a
//! [`MethodSender`]; services bind handlers into a [`Dispatcher`] and
//! drive it with a [`MethodReceiver`].
//!
//! Requests and responses travel as length-prefixed frames decoded under
//! a bounded reader, so a malformed frame never desynchronizes the
//! channel. Ordering on one channel is strictly FIFO: the N-th request is
//! answered by the N-th response. Concurrent in-flight calls on one
//! client require external multiplexing.
//!
//! # Example
//!
//! ```
//! use nop_core::{BufferReader, BufferWriter, Deserializer, Serializer};
//! use nop_rpc::{Dispatcher, Interface, MethodReceiver};
//!
//! let calculator = Interface::new("example.Calculator");
//! let add = calculator.method::<(u32, u32), u64>("Add");
//!
//! // Service side: bind the handler.
//! let mut dispatcher: Dispatcher<(), BufferWriter> = Dispatcher::new();
//! dispatcher.bind(&add, |_, (a, b)| u64::from(a) + u64::from(b)).unwrap();
//!
//! // Client side: encode a request frame.
//! let mut requests = Serializer::new(BufferWriter::new());
//! add.send_request(&mut requests, &(2, 3)).unwrap();
//! let (request_bytes, _) = requests.into_writer().into_parts();
//!
//! // Service side: dispatch it and answer.
//! let mut incoming = Deserializer::new(BufferReader::new(&request_bytes));
//! let mut responses = Serializer::new(BufferWriter::new());
//! let mut receiver = MethodReceiver::new(&mut incoming, &mut responses);
//! dispatcher.dispatch(&mut (), &mut receiver).unwrap();
//!
//! // Client side: read the response.
//! let (response_bytes, _) = responses.into_writer().into_parts();
//! let mut incoming = Deserializer::new(BufferReader::new(&response_bytes));
//! assert_eq!(add.read_response(&mut incoming), Ok(5));
//! ```

mod dispatcher;
mod interface;
mod selector;
mod sender;

pub use dispatcher::Dispatcher;
pub use interface::{Interface, Method};
pub use selector::method_selector;
pub use sender::{MethodReceiver, MethodSender};
