//! Palette store, selection and export.
//!
//! The [`PaletteStore`] owns the JSON document on disk. Everything else here
//! is either a pure function over a palette list ([`filter`], [`codec`],
//! [`export`]) or explicit session state ([`Selection`], [`Session`]).

pub mod codec;
pub mod export;
pub mod filter;
pub mod model;
pub mod selection;
pub mod session;
pub mod store;
pub mod sync;

pub use filter::{CategoryFilter, FilterCriteria};
pub use model::{Palette, DEFAULT_CATEGORY};
pub use selection::Selection;
pub use session::Session;
pub use store::{LoadReport, PaletteCache, PaletteStore, Snapshot};
pub use sync::{CommandSync, NoRemote, RemoteSync};
