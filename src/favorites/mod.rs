//! Client-side favorites list and its storage seam.

pub mod storage;
pub mod store;
