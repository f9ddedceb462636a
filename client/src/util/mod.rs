//! Helpers the pages lean on. Browser storage and request cancellation
//! live here next to the role guard.

pub mod abort_scope;
pub mod format;
pub mod route_guard;
pub mod storage;
