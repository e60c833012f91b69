//! Reactive state shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `page` wraps the `ratings` page store in a signal and adds the request
//! plumbing components share; `ui` holds presentation-only state (theme and
//! the pending confirmation).

pub mod page;
pub mod ui;
