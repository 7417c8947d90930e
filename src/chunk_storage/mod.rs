//! Fixed-capacity slot block.
//!
//! Slots `[0, len)` are initialized, `[len, capacity)` are not.
//! Capacity never changes after construction, so items never move.


use std::mem::MaybeUninit;
use std::ptr;

/// Error, indicating insufficient capacity
pub(crate) struct CapacityError<V>{
    pub value: V,
}

pub(crate) struct ChunkStorage<T>{
    storage : Box<[MaybeUninit<T>]>,
    len     : usize,
}

impl<T> ChunkStorage<T>{
    pub fn new(capacity: usize) -> Self {
        let mut storage = Vec::with_capacity(capacity);
        // MaybeUninit slots need no initialization
        unsafe{ storage.set_len(capacity); }
        Self{
            storage: storage.into_boxed_slice(),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError<T>>{
        if self.is_full(){
            return Err(CapacityError{value});
        }

        unsafe{ self.push_unchecked(value); }
        Ok(())
    }

    #[inline(always)]
    pub unsafe fn push_unchecked(&mut self, value: T){
        debug_assert!(self.len < self.capacity());

        *self.storage.get_unchecked_mut(self.len) = MaybeUninit::new(value);
        self.len += 1;
    }

    /// Append items from iterator, until have free space
    /// Returns Ok if iterator exhausted, CapacityError() - if storage became full first.
    pub fn extend<I>(&mut self, iter: &mut I) -> Result<(), CapacityError<()>>
        where I: Iterator<Item = T>
    {
        loop {
            if self.is_full(){
                return Err(CapacityError{value: ()});
            }

            match iter.next(){
                None => return Ok(()),
                Some(value) => unsafe{ self.push_unchecked(value) },
            }
        }
    }

    /// Swap value at index 0. Gives `value` back, if storage is empty.
    pub fn replace_first(&mut self, value: T) -> Result<T, CapacityError<T>>{
        if self.len == 0 {
            return Err(CapacityError{value});
        }

        let first = unsafe{ self.storage.get_unchecked_mut(0).assume_init_mut() };
        Ok(std::mem::replace(first, value))
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        // [0..len) always initialized
        unsafe {
            std::slice::from_raw_parts(self.storage.as_ptr() as *const T, self.len)
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
}

impl<T> Drop for ChunkStorage<T>{
    fn drop(&mut self) {
        if std::mem::needs_drop::<T>() {
            // slice drop keeps going past a panicking item
            unsafe{
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.storage.as_mut_ptr() as *mut T,
                    self.len
                ));
            }
        }
    }
}
