//! Append-only linked list of fixed-size chunks.
//!
//! One producer appends, later one consumer walks everything in order,
//! possibly stopping early. No per-element allocation, no reallocation on growth.
//!
//! ```
//! use chunked_append_list::ChunkedAppendList;
//!
//! let mut list = ChunkedAppendList::new(4).unwrap();
//! list.extend(0..10);
//!
//! let mut sum = 0;
//! list.for_each_while(|value| {
//!     sum += value;
//!     *value == 5
//! });
//! assert_eq!(sum, 15);
//! ```

mod chunk;
mod chunk_storage;

pub mod append_list;
pub mod error;
pub mod iter;
pub mod settings;

pub use append_list::ChunkedAppendList;
pub use error::{Error, Result};
pub use iter::Iter;
pub use settings::{DefaultSettings, Settings};

#[cfg(test)]
mod sync;

#[cfg(test)]
mod tests;
