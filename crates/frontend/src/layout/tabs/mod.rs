//! Tab management
//!
//! - `page` wraps one tab's content and hides it while inactive
//! - `registry` maps a tab key to its view
//! - `tab_labels` holds every tab title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::tab_label_for_key;
