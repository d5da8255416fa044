/// Centralized configuration constants for the wlanapi bindings

// Native library
pub const WLANAPI_LIBRARY: &str = "wlanapi.dll";

/// Client version passed to `WlanOpenHandle` (2 = Windows Vista and later)
pub const CLIENT_VERSION: u32 = 2;

// Native fixed-size field limits
pub const WLAN_MAX_NAME_LENGTH: usize = 256;
pub const DOT11_SSID_MAX_LENGTH: usize = 32;
pub const WLAN_MAX_PHY_TYPE_NUMBER: usize = 8;
pub const WLAN_MAX_PHY_INDEX: usize = 64;
pub const DOT11_RATE_SET_MAX_LENGTH: usize = 126;

/// Buffer size (in UTF-16 code units) handed to `WlanReasonCodeToString`
pub const REASON_STRING_BUFFER_LEN: usize = 512;

/// Upper bound on the item count accepted from any native list.
///
/// The OS allocates lists of the reported size, so this only rejects counts that
/// cannot come from a healthy service (corrupt or misread memory).
pub const MAX_LIST_ITEMS: usize = 1 << 16;

// Diagnostic binary
pub const LOG_ENV_VAR: &str = "WLANINFO_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const DEFAULT_WATCH_SECS: u64 = 30;
