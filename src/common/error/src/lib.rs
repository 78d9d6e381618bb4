//! Error types and result aliases for ramify.
//!
//! Every fallible graph operation in the workspace returns [`RamifyResult`].
//! Errors are local to the operation that raised them: nothing is retried and
//! no partially built graph is handed back alongside an error.

mod error;

pub use error::{RamifyError, RamifyResult};
