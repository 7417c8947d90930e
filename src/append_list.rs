//! Append-only list. Single writer, in-order readers.
//!
//! Linked list of fixed-size Chunks. Writer fills the last chunk; when it is full,
//! a new chunk is allocated and linked behind it. Nothing is ever moved or removed,
//! until the whole list is dropped.
//!
//! There is no internal synchronization. Writes need `&mut self`, traversal needs `&self`,
//! so within one thread the borrow checker keeps them apart. Across threads, the caller
//! must establish happens-before between the last write and the traversal
//! (lock, channel, thread join, ...).
//!
//! # First element override
//!
//! [ChunkedAppendList::set_first] always targets position 0:
//! - with elements present, it replaces the first one in place;
//! - on an empty list, it stages a "pending first", visible as the only element.
//!   The next append lands at position 0 and discards it.

use crate::chunk::{destruct_chain, foreach_chunk, Chunk};
use crate::error::{Error, Result};
use crate::iter::Iter;
use crate::settings::{DefaultSettings, Settings};
use std::alloc::Layout;
use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroUsize;
use std::ops::ControlFlow;
use std::ops::ControlFlow::{Break, Continue};
use std::ptr::NonNull;
use tracing::{debug, trace};

const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DefaultSettings::CAPACITY) {
    Some(capacity) => capacity,
    None => panic!("DefaultSettings::CAPACITY must be positive"),
};

pub struct ChunkedAppendList<T>{
    capacity: NonZeroUsize,

    first: NonNull<Chunk<T>>,
    /// Chunk accepting writes. Its fill count is the write offset.
    last : NonNull<Chunk<T>>,
    chunks_count: usize,

    /// Only Some while nothing was appended.
    pending_first: Option<T>,

    _owns: PhantomData<Box<Chunk<T>>>,
}

unsafe impl<T: Send> Send for ChunkedAppendList<T>{}
unsafe impl<T: Sync> Sync for ChunkedAppendList<T>{}

impl<T> ChunkedAppendList<T>{
    /// Fails with [Error::InvalidConfiguration] if `capacity` is not positive,
    /// or if a chunk of `capacity` items can not be laid out in memory.
    pub fn new<C>(capacity: C) -> Result<Self>
        where C: TryInto<usize> + fmt::Display + Copy
    {
        let Some(checked) = capacity.try_into().ok().and_then(NonZeroUsize::new) else {
            debug!(%capacity, "rejected chunk capacity");
            return Err(Error::InvalidConfiguration(
                format!("chunk capacity must be positive, got {capacity}")
            ));
        };

        // size * capacity must stay within isize::MAX
        if Layout::array::<T>(checked.get()).is_err(){
            debug!(%capacity, item_size = std::mem::size_of::<T>(), "rejected chunk capacity");
            return Err(Error::InvalidConfiguration(
                format!("chunk capacity {capacity} is too large for item size {}", std::mem::size_of::<T>())
            ));
        }

        Ok(Self::with_capacity(checked))
    }

    /// # Panics
    ///
    /// If `capacity` items of `T` exceed `isize::MAX` bytes. Use [new](Self::new) to get an error instead.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        let chunk = Chunk::construct(capacity.get());
        Self{
            capacity,
            first: chunk,
            last : chunk,
            chunks_count: 1,
            pending_first: None,
            _owns: PhantomData,
        }
    }

    pub fn from_settings<S: Settings>() -> Result<Self> {
        Self::new(S::CAPACITY)
    }

    #[inline]
    fn add_chunk(&mut self){
        let new_chunk = Chunk::construct(self.capacity.get());

        // connect
        unsafe{ self.last.as_mut().next = Some(new_chunk); }
        self.last = new_chunk;
        self.chunks_count += 1;

        trace!(capacity = self.capacity.get(), chunks = self.chunks_count, "linked new chunk");
    }

    #[inline]
    fn discard_pending_first(&mut self){
        if self.pending_first.take().is_some(){
            trace!("append overwrote pending first element");
        }
    }

    #[inline]
    pub fn append(&mut self, value: T){
        self.discard_pending_first();

        let result = unsafe{ self.last.as_mut() }.storage.try_push(value);
        if let Err(err) = result{
            self.add_chunk();
            unsafe{ self.last.as_mut().storage.push_unchecked(err.value); }
        }
    }

    /// Same as calling [append](Self::append) for each item, but fills chunks in bulk.
    pub fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item = T>
    {
        let mut iter = iter.into_iter();

        // pending first survives an empty extend
        let Some(value) = iter.next() else { return };
        self.append(value);

        loop {
            let result = unsafe{ self.last.as_mut() }.storage.extend(&mut iter);
            if result.is_ok(){
                return;
            }

            match iter.next(){
                None => return,
                Some(value) => {
                    self.add_chunk();
                    unsafe{ self.last.as_mut().storage.push_unchecked(value); }
                }
            }
        }
    }

    /// Put `value` at position 0. See [module docs](crate::append_list) for interaction with append.
    pub fn set_first(&mut self, value: T){
        match unsafe{ self.first.as_mut() }.storage.replace_first(value){
            Ok(_replaced) => {
                trace!("replaced first element");
            }
            Err(err) => {
                trace!("staged pending first element");
                self.pending_first = Some(err.value);
            }
        }
    }

    /// Visit elements in append order, until `visit` breaks.
    pub fn try_for_each<B, F>(&self, mut visit: F) -> ControlFlow<B>
        where F: FnMut(&T) -> ControlFlow<B>
    {
        if let Some(value) = &self.pending_first{
            visit(value)?;
        }

        unsafe {
            foreach_chunk(self.first, |chunk| {
                chunk.storage.as_slice().iter().try_for_each(&mut visit)
            })
        }
    }

    pub fn for_each<F>(&self, mut visit: F)
        where F: FnMut(&T)
    {
        let _ = self.try_for_each(|value| -> ControlFlow<()> {
            visit(value);
            Continue(())
        });
    }

    /// Stops right after the first element, for which `visit` returns true.
    pub fn for_each_while<F>(&self, mut visit: F)
        where F: FnMut(&T) -> bool
    {
        let _ = self.try_for_each(|value| {
            if visit(value) { Break(()) } else { Continue(()) }
        });
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T>{
        Iter::new(
            self.pending_first.as_ref(),
            unsafe{ self.first.as_ref() },
            self.len()
        )
    }

    pub fn first(&self) -> Option<&T>{
        self.pending_first.as_ref()
            .or_else(|| unsafe{ self.first.as_ref() }.storage.as_slice().first())
    }

    pub fn last(&self) -> Option<&T>{
        self.pending_first.as_ref()
            .or_else(|| unsafe{ self.last.as_ref() }.storage.as_slice().last())
    }

    /// Element slots per chunk.
    #[inline]
    pub fn capacity(&self) -> usize{
        self.capacity.get()
    }

    /// Elements traversal would visit. Pending first counts as one.
    pub fn len(&self) -> usize{
        let last_len = unsafe{ self.last.as_ref() }.storage.len();
        (self.chunks_count - 1) * self.capacity.get()
            + last_len
            + usize::from(self.pending_first.is_some())
    }

    #[inline]
    pub fn is_empty(&self) -> bool{
        self.len() == 0
    }

    #[inline]
    pub fn chunks_count(&self) -> usize{
        self.chunks_count
    }
}

impl<T> Drop for ChunkedAppendList<T>{
    fn drop(&mut self) {
        unsafe{ destruct_chain(self.first); }
    }
}

impl<T> Default for ChunkedAppendList<T>{
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> Extend<T> for ChunkedAppendList<T>{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        ChunkedAppendList::extend(self, iter);
    }
}

impl<T> FromIterator<T> for ChunkedAppendList<T>{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::default();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ChunkedAppendList<T>{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ChunkedAppendList<T>{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
