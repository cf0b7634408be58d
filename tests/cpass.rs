//! Vectors of `Send`-able things are `Send`

use fixvec::{FixedCapacityVector, IntoIter};

#[test]
fn send() {
    struct IsSend;

    unsafe impl Send for IsSend {}

    fn is_send<T>()
    where
        T: Send,
    {
    }

    is_send::<FixedCapacityVector<IsSend, 4>>();
    is_send::<IntoIter<IsSend, 4>>();
}

#[test]
fn sync() {
    struct IsSync;

    unsafe impl Sync for IsSync {}

    fn is_sync<T>()
    where
        T: Sync,
    {
    }

    is_sync::<FixedCapacityVector<IsSync, 4>>();
}

#[test]
fn usable_in_statics() {
    static EMPTY: FixedCapacityVector<u32, 8> = FixedCapacityVector::new();
    static PRIMES: FixedCapacityVector<u32, 8> = FixedCapacityVector::from_array([2, 3, 5, 7]);

    assert!(EMPTY.is_empty());
    assert_eq!(PRIMES, [2, 3, 5, 7]);
    assert_eq!(PRIMES.capacity(), 8);
}
