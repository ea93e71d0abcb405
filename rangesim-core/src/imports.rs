pub use anyhow::*;
// `anyhow::*` re-exports `anyhow::Ok`, which shadows the prelude's `Ok` and
// infers an `anyhow::Error` result. Re-import the std variants so `Ok`/`Err`
// resolve to `core::result::Result` in functions returning `SimError`.
pub use std::result::Result::{Err, Ok};
pub use log;
pub use ndarray::{array, s, Array, Array1, Axis};
pub use serde::{Deserialize, Serialize};
pub use std::ffi::OsStr;
pub use std::fs::File;
pub use std::path::{Path, PathBuf};

pub use crate::error::SimError;
pub use crate::traits::*;
