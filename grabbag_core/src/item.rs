/// Bound for the opaque values a pool can hold.
///
/// The picker never inspects items; it only stores, clones, and hands them
/// back, so any cloneable, thread-safe, debuggable value qualifies.
pub trait Item: Clone + Send + Sync + std::fmt::Debug + 'static {}

impl<T: Clone + Send + Sync + std::fmt::Debug + 'static> Item for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_item<I: Item>(_value: &I) {}

    #[test]
    fn common_owned_types_satisfy_item() {
        assert_item(&String::from("Hello world!"));
        assert_item(&42u64);
        assert_item(&vec![1u8, 2, 3]);
    }
}
