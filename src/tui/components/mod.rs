//! Component-based UI architecture.
//!
//! Stateful components (editor, density panel, help menu) co-locate state
//! with event handling; purely visual parts (header, stat cards, status
//! bar) are plain render functions over the per-frame metrics snapshot.

mod density;
mod editor;
pub mod header;
mod help_menu;
pub mod stats;
pub mod status_bar;
mod theme;

use crossterm::event::Event;
pub use density::DensityPanel;
pub use editor::Editor;
pub use help_menu::HelpMenu;
pub use theme::Palette;

/// A UI component with co-located state and event handling.
pub trait Component {
    /// Handle a terminal event. Returns true if the event was consumed.
    fn handle_event(&mut self, event: &Event) -> bool;
}
