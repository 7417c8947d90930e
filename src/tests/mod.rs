#[allow(dead_code)]
pub(crate) mod utils;

mod common;
