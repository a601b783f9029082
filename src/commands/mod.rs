//! Command implementations for gradebook

pub mod add;
pub mod dispatch;
pub mod helpers;
pub mod init;
pub mod list;
pub mod remove;
pub mod show;
pub mod stats;
pub mod update;
pub mod validate;
pub mod what_if;
