use crate::ChunkedAppendList;
use crate::sync::{Arc, Mutex, thread};
use super::utils::consume_copies;

/// Writer appends under an external lock, reader traverses under the same lock.
/// Every traversal must observe a prefix of the written sequence.
pub(crate) fn locked_write_read_test_impl(capacity: usize, len: usize, reads: usize) {
    let list = Arc::new(Mutex::new(
        ChunkedAppendList::<usize>::new(capacity).unwrap()
    ));

    let writer = {
        let list = list.clone();
        thread::spawn(move || {
            for i in 0..len{
                list.lock().append(i);
            }
        })
    };

    let reader = {
        let list = list.clone();
        thread::spawn(move || {
            for _ in 0..reads{
                let seen = consume_copies(&*list.lock());
                assert!(seen.len() <= len);
                assert!(seen.iter().copied().eq(0..seen.len()));
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();

    let list = list.lock();
    assert_eq!(consume_copies(&*list), (0..len).collect::<Vec<_>>());
}
