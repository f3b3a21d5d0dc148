// Use cases layer: meeting utilities, the state store and its async thunks.

pub mod meeting_utils;
pub mod store;
pub mod thunks;

#[cfg(test)]
pub(crate) mod test_support;
