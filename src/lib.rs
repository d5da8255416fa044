//! Dynamically loaded bindings to the Windows Native WiFi API.
//!
//! ```no_run
//! let session = wlanapi::Session::open()?;
//! for interface in session.enum_interfaces()?.items {
//!     println!("{} {}", interface.guid, interface.description);
//! }
//! # Ok::<(), wlanapi::WlanError>(())
//! ```

pub mod config;
pub mod error;
pub mod wlan;

pub use error::{WlanError, WlanResult};
pub use wlan::{Session, api, default_interface, reason_code_to_string};
