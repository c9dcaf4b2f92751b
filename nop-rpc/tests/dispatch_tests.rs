//! End-to-end RPC tests: a small customer database service driven
//! through the dispatcher over in-memory streams.

use std::collections::HashMap;

use nop_core::{
    nop_enum, nop_structure, BufferReader, BufferWriter, Deserializer, ErrorOr, NopError,
    Serializer,
};
use nop_rpc::{Dispatcher, Interface, Method, MethodReceiver};

// ============================================================================
// Protocol types
// ============================================================================

nop_enum! {
    /// Kinds of phone number.
    enum PhoneKind: u8 {
        /// Work number.
        Work = 0,
        /// Home number.
        Home = 1,
        /// Mobile number.
        Cell = 2,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PhoneNumber {
    number: String,
    kind: PhoneKind,
}
nop_structure!(PhoneNumber { number, kind });

#[derive(Debug, Clone, PartialEq, Eq)]
struct Customer {
    first_name: String,
    last_name: String,
    address: String,
    phone_numbers: Vec<PhoneNumber>,
}
nop_structure!(Customer { first_name, last_name, address, phone_numbers });

nop_enum! {
    /// Application errors the service reports.
    enum CustomerError: u8 {
        /// The customer is already present.
        CustomerExists = 1,
        /// No customer has the given id.
        InvalidCustomerId = 2,
    }
}

type CustomerId = u64;

// ============================================================================
// Service
// ============================================================================

#[derive(Debug, Default)]
struct CustomerDb {
    customers: HashMap<CustomerId, Customer>,
    next_id: CustomerId,
}

impl CustomerDb {
    fn add(&mut self, customer: Customer) -> ErrorOr<CustomerError, CustomerId> {
        if self.customers.values().any(|existing| *existing == customer) {
            return ErrorOr::err(CustomerError::CustomerExists);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.customers.insert(id, customer);
        ErrorOr::ok(id)
    }

    fn get(&self, id: CustomerId) -> ErrorOr<CustomerError, Customer> {
        match self.customers.get(&id) {
            Some(customer) => ErrorOr::ok(customer.clone()),
            None => ErrorOr::err(CustomerError::InvalidCustomerId),
        }
    }

    fn remove(&mut self, id: CustomerId) -> ErrorOr<CustomerError, ()> {
        match self.customers.remove(&id) {
            Some(_) => ErrorOr::ok(()),
            None => ErrorOr::err(CustomerError::InvalidCustomerId),
        }
    }
}

struct CustomerProtocol {
    add: Method<(Customer,), ErrorOr<CustomerError, CustomerId>>,
    get: Method<(CustomerId,), ErrorOr<CustomerError, Customer>>,
    remove: Method<(CustomerId,), ErrorOr<CustomerError, ()>>,
}

impl CustomerProtocol {
    fn new() -> Self {
        let interface = Interface::new("example.rpc.Customer");
        Self {
            add: interface.method("Add"),
            get: interface.method("Get"),
            remove: interface.method("Remove"),
        }
    }

    fn bind(&self) -> Dispatcher<CustomerDb, BufferWriter> {
        let mut dispatcher = Dispatcher::new();
        dispatcher.bind(&self.add, |db: &mut CustomerDb, (customer,)| db.add(customer))
            .expect("unique selector");
        dispatcher.bind(&self.get, |db: &mut CustomerDb, (id,)| db.get(id))
            .expect("unique selector");
        dispatcher.bind(&self.remove, |db: &mut CustomerDb, (id,)| db.remove(id))
            .expect("unique selector");
        dispatcher
    }
}

fn customer_a() -> Customer {
    Customer {
        first_name: "John".to_owned(),
        last_name: "Doe".to_owned(),
        address: "100 First St.".to_owned(),
        phone_numbers: vec![PhoneNumber {
            number: "408-555-5555".to_owned(),
            kind: PhoneKind::Home,
        }],
    }
}

fn customer_b() -> Customer {
    Customer {
        first_name: "Jane".to_owned(),
        last_name: "Smith".to_owned(),
        address: "200 Second St.".to_owned(),
        phone_numbers: vec![PhoneNumber {
            number: "980-555-5555".to_owned(),
            kind: PhoneKind::Cell,
        }],
    }
}

// ============================================================================
// Full exchanges
// ============================================================================

#[test]
fn customer_service_round_trip() {
    let protocol = CustomerProtocol::new();
    let mut dispatcher = protocol.bind();
    let mut db = CustomerDb::default();

    // Client queues a conversation's worth of requests on one stream.
    let mut requests = Serializer::new(BufferWriter::new());
    protocol.add.send_request(&mut requests, &(customer_a(),)).expect("request encodes");
    protocol.add.send_request(&mut requests, &(customer_b(),)).expect("request encodes");
    protocol.add.send_request(&mut requests, &(customer_a(),)).expect("request encodes");
    protocol.get.send_request(&mut requests, &(0,)).expect("request encodes");
    protocol.remove.send_request(&mut requests, &(42,)).expect("request encodes");
    let (request_bytes, _) = requests.into_writer().into_parts();

    // Service consumes them in order, answering each.
    let mut incoming = Deserializer::new(BufferReader::new(&request_bytes));
    let mut responses = Serializer::new(BufferWriter::new());
    let mut receiver = MethodReceiver::new(&mut incoming, &mut responses);
    for _ in 0..5 {
        dispatcher.dispatch(&mut db, &mut receiver).expect("dispatch succeeds");
    }

    // Client reads the responses, strictly FIFO.
    let (response_bytes, _) = responses.into_writer().into_parts();
    let mut replies = Deserializer::new(BufferReader::new(&response_bytes));

    assert_eq!(protocol.add.read_response(&mut replies), Ok(ErrorOr::ok(0)));
    assert_eq!(protocol.add.read_response(&mut replies), Ok(ErrorOr::ok(1)));
    assert_eq!(
        protocol.add.read_response(&mut replies),
        Ok(ErrorOr::err(CustomerError::CustomerExists))
    );
    assert_eq!(protocol.get.read_response(&mut replies), Ok(ErrorOr::ok(customer_a())));
    assert_eq!(
        protocol.remove.read_response(&mut replies),
        Ok(ErrorOr::err(CustomerError::InvalidCustomerId))
    );

    assert_eq!(db.customers.len(), 2);
}

#[test]
fn unknown_selector_drains_the_frame() {
    let protocol = CustomerProtocol::new();
    let mut dispatcher = protocol.bind();
    let mut db = CustomerDb::default();

    // An unbound method of a different interface, then a valid request.
    let stranger = Interface::new("example.rpc.Vendor").method::<(u64,), u64>("Lookup");
    let mut requests = Serializer::new(BufferWriter::new());
    stranger.send_request(&mut requests, &(9,)).expect("request encodes");
    protocol.add.send_request(&mut requests, &(customer_a(),)).expect("request encodes");
    let (request_bytes, _) = requests.into_writer().into_parts();

    let mut incoming = Deserializer::new(BufferReader::new(&request_bytes));
    let mut responses = Serializer::new(BufferWriter::new());
    let mut receiver = MethodReceiver::new(&mut incoming, &mut responses);

    assert_eq!(
        dispatcher.dispatch(&mut db, &mut receiver),
        Err(NopError::InvalidInterfaceMethod)
    );
    // The stream is still aligned: the next request dispatches cleanly.
    dispatcher.dispatch(&mut db, &mut receiver).expect("dispatch succeeds");

    let (response_bytes, _) = responses.into_writer().into_parts();
    let mut replies = Deserializer::new(BufferReader::new(&response_bytes));
    assert_eq!(protocol.add.read_response(&mut replies), Ok(ErrorOr::ok(0)));
}

#[test]
fn malformed_arguments_drain_the_frame() {
    let protocol = CustomerProtocol::new();
    let mut dispatcher = protocol.bind();
    let mut db = CustomerDb::default();

    // Same selector as Add but a string argument instead of a customer.
    let impostor =
        Interface::new("example.rpc.Customer").method::<(String,), u64>("Add");
    assert_eq!(impostor.selector(), protocol.add.selector());

    let mut requests = Serializer::new(BufferWriter::new());
    impostor.send_request(&mut requests, &("garbage".to_owned(),)).expect("request encodes");
    protocol.add.send_request(&mut requests, &(customer_b(),)).expect("request encodes");
    let (request_bytes, _) = requests.into_writer().into_parts();

    let mut incoming = Deserializer::new(BufferReader::new(&request_bytes));
    let mut responses = Serializer::new(BufferWriter::new());
    let mut receiver = MethodReceiver::new(&mut incoming, &mut responses);

    assert_eq!(
        dispatcher.dispatch(&mut db, &mut receiver),
        Err(NopError::UnexpectedEncodingType)
    );
    dispatcher.dispatch(&mut db, &mut receiver).expect("dispatch succeeds");

    let (response_bytes, _) = responses.into_writer().into_parts();
    let mut replies = Deserializer::new(BufferReader::new(&response_bytes));
    assert_eq!(protocol.add.read_response(&mut replies), Ok(ErrorOr::ok(0)));
}

#[test]
fn duplicate_binding_is_rejected() {
    let protocol = CustomerProtocol::new();
    let mut dispatcher: Dispatcher<CustomerDb, BufferWriter> = Dispatcher::new();

    dispatcher
        .bind(&protocol.add, |db: &mut CustomerDb, (customer,)| db.add(customer))
        .expect("unique selector");
    assert_eq!(
        dispatcher.bind(&protocol.add, |db: &mut CustomerDb, (customer,)| db.add(customer)),
        Err(NopError::DuplicateMethodHash)
    );
    assert_eq!(dispatcher.len(), 1);
}

#[test]
fn selectors_are_stable_across_declarations() {
    let first = CustomerProtocol::new();
    let second = CustomerProtocol::new();
    assert_eq!(first.add.selector(), second.add.selector());
    assert_ne!(first.add.selector(), first.get.selector());
    assert_ne!(first.get.selector(), first.remove.selector());
}
