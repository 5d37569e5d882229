//! panekit - component lifecycle kit for terminal application shells
//!
//! A shell is a long-lived TUI application hosting many loosely related
//! panels and service elements. This crate provides the base contract those
//! components share:
//!
//! - `dispose`: ordered, idempotent release of acquired resources
//! - `theme`: the active theme plus change notifications to subscribers
//! - `storage` / `memento`: per-component persisted state in global and
//!   workspace scopes
//! - `styles`: sink for theme-derived widget styles
//! - `component`: the lifecycle base tying the above together

pub mod component;
pub mod dispose;
pub mod logging;
pub mod memento;
pub mod storage;
pub mod styles;
pub mod theme;

pub use component::{Component, ComponentCore};
pub use dispose::{Disposable, DisposableStore, DisposeFn};
pub use memento::Memento;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageScope};
pub use styles::StyleCollector;
pub use theme::{Theme, ThemeEvents, ThemeService, ThemeSubscription};
