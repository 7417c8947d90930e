/// Compile-time list configuration.
///
/// ```
/// use chunked_append_list::{ChunkedAppendList, Settings};
///
/// struct Batch; impl Settings for Batch {
///     const CAPACITY: usize = 64;
/// }
///
/// let list = ChunkedAppendList::<u32>::from_settings::<Batch>().unwrap();
/// assert_eq!(list.capacity(), 64);
/// ```
pub trait Settings {
    /// Element slots per chunk. Must be positive.
    const CAPACITY: usize;
}

/// Defaults:
///
/// CAPACITY = 4
pub struct DefaultSettings;
impl Settings for DefaultSettings {
    const CAPACITY: usize = 4;
}
