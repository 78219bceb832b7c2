//! Chain operations beyond the core transforms, one concern per file.
//!
//! Each submodule adds an `impl` block to [`Chain`](crate::Chain); nothing
//! here needs importing.

pub(crate) mod flatten;
pub(crate) mod flip;
pub(crate) mod fold;
pub(crate) mod set_ops;
pub(crate) mod shuffle;
pub(crate) mod try_process;
