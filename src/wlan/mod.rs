//! Native WiFi (wlanapi.dll) bindings
//!
//! The library is loaded on first use and every entry point is resolved
//! dynamically, so the crate builds and links on every platform. Calls go
//! through a [`Session`] and return owned copies of whatever the service
//! allocated.

pub mod loader;
pub mod memory;
pub mod sys;
pub mod types;
pub mod wide;

mod connection;
mod handle;
mod hosted;
mod listener;
mod profile;
mod scanning;
mod security;

// Re-export public API
pub use connection::OpcodeValue;
pub use handle::{Session, default_interface};
pub use hosted::SecondaryKey;
pub use listener::{
    ConnectionNotification, Notification, NotificationEvent, NotificationListener,
    decode_notification, start_listener,
};
pub use loader::{WlanApi, api};
pub use profile::{
    connection_mode, create_profile_xml, element_text, is_auto_connect, with_connection_mode,
};
pub use security::reason_code_to_string;
pub use types::*;
