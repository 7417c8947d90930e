use crate::chunk::Chunk;
use std::iter::FusedIterator;

/// In-order iterator over [ChunkedAppendList](crate::ChunkedAppendList).
///
/// Holds `&list`, so no appends can happen while it lives.
pub struct Iter<'a, T>{
    pending_first: Option<&'a T>,
    chunk: Option<&'a Chunk<T>>,
    index: usize,
    remaining: usize,
}

unsafe impl<'a, T: Sync> Send for Iter<'a, T>{}
unsafe impl<'a, T: Sync> Sync for Iter<'a, T>{}

impl<'a, T> Iter<'a, T>{
    pub(crate) fn new(pending_first: Option<&'a T>, first_chunk: &'a Chunk<T>, len: usize) -> Self{
        Self{
            pending_first,
            chunk: Some(first_chunk),
            index: 0,
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T>{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending_first.take(){
            self.remaining -= 1;
            return Some(value);
        }

        loop {
            let chunk = self.chunk?;
            if let Some(value) = chunk.storage.as_slice().get(self.index){
                self.index += 1;
                self.remaining -= 1;
                return Some(value);
            }

            // Only the last chunk may be partially filled, and it has no next.
            self.chunk = chunk.next.map(|next| unsafe{ &*next.as_ptr() });
            self.index = 0;
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T>{}
impl<'a, T> FusedIterator for Iter<'a, T>{}
