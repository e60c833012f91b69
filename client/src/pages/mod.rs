//! Page-level roots, one per mount point.
//!
//! ARCHITECTURE
//! ============
//! Each page owns orchestration for its mount point (context, confirmed
//! actions) and delegates rendering details to `components`.

pub mod game_details;
pub mod game_form;
