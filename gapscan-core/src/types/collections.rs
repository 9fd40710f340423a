//! Collection aliases used across gapscan.
//! FxHashMap/FxHashSet everywhere hashing speed matters more than
//! DoS resistance; all inputs here are trusted extractor output.

pub use rustc_hash::{FxHashMap, FxHashSet};
