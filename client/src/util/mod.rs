//! Browser glue shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! These modules isolate `web-sys` access (storage, DOM attributes, page
//! blobs, navigation, card tilt) from components, and no-op in native builds.

pub mod card_tilt;
pub mod page_data;
pub mod storage;
pub mod theme;
