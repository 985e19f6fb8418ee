//! Modal dialogs

pub mod confirm;
