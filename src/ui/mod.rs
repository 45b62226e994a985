//! User interface layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → Layout::compute → Layout → render
//!                                                                   ↑
//!                                   mouse reports → pointer::translate
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready data computed from state
//! - [`layout`]: Screen geometry and hit testing
//! - [`pointer`]: Mouse press/hold/release to drag events
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Section renderers
//! - [`helpers`]: Cursor and text fitting utilities
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod pointer;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Button, Layout, Target};
pub use pointer::{translate, Pointer};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, SortedItem, SortedPanel, UIViewModel, ZoneItem,
};
