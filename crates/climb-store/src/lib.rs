//! # climb-store
//!
//! Fixed-width binary persistence for the climblog collection.
//!
//! - [`codec`] turns a slice of climbs into the on-disk byte layout and back.
//! - [`load`], [`load_or_create`], and [`save`] wrap the codec with file
//!   handling. They are meant to run once each per process: load at startup,
//!   save at shutdown.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let path = Path::new(climb_store::DEFAULT_STORE_FILE);
//! let store = climb_store::load_or_create(path, true).expect("load");
//! // ... mutate `store` ...
//! climb_store::save(&store, path).expect("save");
//! ```

pub mod codec;
mod error;
mod file;

pub use error::{CodecError, StoreError};
pub use file::{DEFAULT_STORE_FILE, load, load_or_create, save};
