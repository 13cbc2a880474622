//! Dashboard presentation-state core.
//!
//! Leaf-first: locale store, load states and pagination, the overview
//! aggregator, pure formatters and view projections, then the Elm-style
//! model/update pair and the session runtime that drives it.

pub mod format;
pub mod load_state;
pub mod locale_store;
pub mod model;
pub mod overview;
pub mod pagination;
pub mod runtime;
pub mod update;
pub mod views;

pub use load_state::LoadState;
pub use locale_store::{JsonFileStore, KeyValueStore, LocaleStore, MemoryStore, ViewContext};
pub use model::{DashboardCmd, DashboardModel, DashboardMsg, Screen};
pub use runtime::DashboardSession;
