use crate::chunk_storage::ChunkStorage;
use std::ops::ControlFlow;
use std::ptr::NonNull;

pub(crate) struct Chunk<T>{
    pub(crate) storage : ChunkStorage<T>,

    /// Owning link. Set once, when the chunk fills up and the list grows.
    pub(crate) next    : Option<NonNull<Chunk<T>>>,
}

impl<T> Chunk<T>{
    /// Leaked. Ownership goes to [ChunkedAppendList](crate::ChunkedAppendList),
    /// which frees the whole chain on drop.
    pub(crate) fn construct(capacity: usize) -> NonNull<Self>{
        let chunk = Box::new(Self{
            storage: ChunkStorage::new(capacity),
            next: None,
        });
        NonNull::from(Box::leak(chunk))
    }

    /// Unsafe - `this` must come from [Chunk::construct] and must not be used afterwards.
    /// Does not touch `next`.
    pub(crate) unsafe fn destruct(this: NonNull<Self>){
        drop(Box::from_raw(this.as_ptr()));
    }
}

/// Free chunks from `first` to the end of the chain. Iterative, chain may be long.
/// If some item's drop panics, the rest of the chain is still freed during unwind.
///
/// Unsafe - chunks must come from [Chunk::construct] and must not be used afterwards.
pub(crate) unsafe fn destruct_chain<T>(first: NonNull<Chunk<T>>){
    struct DropGuard<T>(Option<NonNull<Chunk<T>>>);
    impl<T> Drop for DropGuard<T>{
        fn drop(&mut self) {
            if let Some(next) = self.0 {
                unsafe{ destruct_chain(next); }
            }
        }
    }

    let mut chunk_ptr = Some(first);
    while let Some(ptr) = chunk_ptr{
        let guard = DropGuard(ptr.as_ref().next);
        Chunk::destruct(ptr);
        chunk_ptr = guard.0;
        std::mem::forget(guard);
    }
}

/// Visit chunks from `first` to the end of the chain.
///
/// Unsafe - all chunks reachable from `first` must be alive for `'a`.
#[inline]
pub(crate) unsafe fn foreach_chunk<'a, T, B, F>(first: NonNull<Chunk<T>>, mut func: F) -> ControlFlow<B>
    where T: 'a, F: FnMut(&'a Chunk<T>) -> ControlFlow<B>
{
    let mut chunk_ptr = Some(first);
    while let Some(ptr) = chunk_ptr{
        let chunk = &*ptr.as_ptr();
        func(chunk)?;
        chunk_ptr = chunk.next;
    }
    ControlFlow::Continue(())
}
