use crate::ChunkedAppendList;

pub fn consume_copies<T: Clone>(list: &ChunkedAppendList<T>) -> Vec<T> {
    consume_mapped(list, |item| item.clone())
}

pub fn consume_mapped<T, F, R>(list: &ChunkedAppendList<T>, mut f: F) -> Vec<R>
where F: FnMut(&T) -> R
{
    let mut v = Vec::new();
    list.for_each(|item| v.push( f(item) ));
    v
}

/// Visits made by `for_each_while`, which stops on `stop_at`.
pub fn consume_until<T: Clone + PartialEq>(list: &ChunkedAppendList<T>, stop_at: &T) -> Vec<T> {
    let mut v = Vec::new();
    list.for_each_while(|item| {
        v.push(item.clone());
        item == stop_at
    });
    v
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
