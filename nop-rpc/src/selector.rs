//! Wire selectors for interface methods.

use std::hash::Hasher;

use siphasher::sip::SipHasher24;

/// Compute the wire selector of a method.
///
/// The selector is SipHash-2-4 with a zero key over
/// `interface_id || 0x00 || method_name`, taken as an unsigned 64-bit
/// value. The NUL separator keeps `("a", "bc")` and `("ab", "c")`
/// distinct.
#[must_use]
pub fn method_selector(interface_id: &str, method_name: &str) -> u64 {
    let mut hasher = SipHasher24::new_with_keys(0, 0);
    hasher.write(interface_id.as_bytes());
    hasher.write(&[0]);
    hasher.write(method_name.as_bytes());
    hasher.finish()
}
