//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the page store and UI state from Leptos context
//! providers set up by the page that mounts them.

pub mod comments;
pub mod confirm_dialog;
pub mod context_panel;
pub mod delete_game;
pub mod difficulty_form;
pub mod display_name;
pub mod list_editor;
pub mod quality_form;
pub mod quality_panel;
pub mod radar_chart;
pub mod theme_switcher;
pub mod toast;
