/// Typed errors for the wlanapi bindings
use thiserror::Error;

/// Result type alias for WLAN operations
pub type WlanResult<T> = Result<T, WlanError>;

/// Errors that can occur while calling into the Native WiFi API
#[derive(Error, Debug)]
pub enum WlanError {
    #[error("wlanapi.dll is unavailable on this platform: {reason}")]
    LibraryUnavailable { reason: String },

    #[error("wlanapi.dll does not export {symbol}")]
    MissingEntryPoint { symbol: &'static str },

    #[error("{operation} failed (code: {code}, {})", status_name(*code))]
    Status { operation: &'static str, code: u32 },

    #[error("{operation} failed (code: {code}, {}, reason: {reason})", status_name(*code))]
    StatusWithReason {
        operation: &'static str,
        code: u32,
        reason: u32,
    },

    #[error("Cannot marshal argument for {operation}: {detail}")]
    Encoding {
        operation: &'static str,
        detail: String,
    },

    #[error("{what} reports {count} items but the binding holds at most {capacity}")]
    CapacityExceeded {
        what: &'static str,
        count: usize,
        capacity: usize,
    },

    #[error("Index {index} is out of range for a list of {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No WiFi interface found")]
    NoInterface,

    #[error("{operation} succeeded but returned no data")]
    NullBuffer { operation: &'static str },

    #[error("{operation} returned {actual} bytes, expected at least {expected}")]
    Truncated {
        operation: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Could not find connectionMode in profile XML")]
    ProfileXmlInvalid,
}

impl WlanError {
    /// Raw native status code, if this error came from a native call
    pub fn code(&self) -> Option<u32> {
        match self {
            WlanError::Status { code, .. } | WlanError::StatusWithReason { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    /// Name of the native operation that failed, if any
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            WlanError::Status { operation, .. }
            | WlanError::StatusWithReason { operation, .. }
            | WlanError::Encoding { operation, .. }
            | WlanError::NullBuffer { operation }
            | WlanError::Truncated { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// System message text for the status code (Windows only)
    #[cfg(windows)]
    pub fn system_message(&self) -> Option<String> {
        self.code()
            .map(|code| windows::core::HRESULT::from_win32(code).message())
    }
}

pub const ERROR_SUCCESS: u32 = 0;
pub const ERROR_ACCESS_DENIED: u32 = 5;
pub const ERROR_INVALID_HANDLE: u32 = 6;
pub const ERROR_NOT_ENOUGH_MEMORY: u32 = 8;
pub const ERROR_NOT_SUPPORTED: u32 = 50;
pub const ERROR_INVALID_PARAMETER: u32 = 87;
pub const ERROR_INSUFFICIENT_BUFFER: u32 = 122;
pub const ERROR_ALREADY_EXISTS: u32 = 183;
pub const ERROR_SERVICE_NOT_ACTIVE: u32 = 1062;
pub const ERROR_NOT_FOUND: u32 = 1168;
pub const ERROR_NO_MATCH: u32 = 1169;
pub const ERROR_BAD_PROFILE: u32 = 1206;
pub const ERROR_REMOTE_SESSION_LIMIT_EXCEEDED: u32 = 1220;
pub const ERROR_INVALID_STATE: u32 = 5023;
pub const ERROR_NDIS_DOT11_POWER_STATE_INVALID: u32 = 0x8034_2002;

/// Name of a documented Win32 status code returned by the WLAN functions
pub fn status_name(code: u32) -> &'static str {
    match code {
        ERROR_SUCCESS => "ERROR_SUCCESS",
        ERROR_ACCESS_DENIED => "ERROR_ACCESS_DENIED",
        ERROR_INVALID_HANDLE => "ERROR_INVALID_HANDLE",
        ERROR_NOT_ENOUGH_MEMORY => "ERROR_NOT_ENOUGH_MEMORY",
        ERROR_NOT_SUPPORTED => "ERROR_NOT_SUPPORTED",
        ERROR_INVALID_PARAMETER => "ERROR_INVALID_PARAMETER",
        ERROR_INSUFFICIENT_BUFFER => "ERROR_INSUFFICIENT_BUFFER",
        ERROR_ALREADY_EXISTS => "ERROR_ALREADY_EXISTS",
        ERROR_SERVICE_NOT_ACTIVE => "ERROR_SERVICE_NOT_ACTIVE",
        ERROR_NOT_FOUND => "ERROR_NOT_FOUND",
        ERROR_NO_MATCH => "ERROR_NO_MATCH",
        ERROR_BAD_PROFILE => "ERROR_BAD_PROFILE",
        ERROR_REMOTE_SESSION_LIMIT_EXCEEDED => "ERROR_REMOTE_SESSION_LIMIT_EXCEEDED",
        ERROR_INVALID_STATE => "ERROR_INVALID_STATE",
        ERROR_NDIS_DOT11_POWER_STATE_INVALID => "ERROR_NDIS_DOT11_POWER_STATE_INVALID",
        _ => "unrecognized status",
    }
}

/// Convert a WLAN reason code to a human-readable string.
///
/// Used when `WlanReasonCodeToString` is not exported.
pub fn wlan_reason_to_string(code: u32) -> String {
    match code {
        0 => "Success".to_string(),
        1 => "Unknown Failure".to_string(),
        0x00010001 => "Network Not Compatible".to_string(),
        0x00010002 => "Profile Not Compatible".to_string(),
        0x00028002 => "Association Failed".to_string(),
        0x00028003 => "Association Timeout".to_string(),
        0x00028004 => "Pre-Security Failure".to_string(),
        0x00028005 => "Start Security Failure".to_string(),
        0x00028006 => "Security Failure".to_string(),
        0x00028007 => "Security Timeout".to_string(),
        0x00028008 => "Roaming Failure".to_string(),
        0x00028009 => "Roaming Security Failure".to_string(),
        0x0002800A => "Ad-hoc Security Failure".to_string(),
        0x0002800B => "Driver Disconnected".to_string(),
        0x0002800C => "Driver Operation Failure".to_string(),
        0x0002800D => "IHV Not Available".to_string(),
        0x0002800E => "IHV Not Responding".to_string(),
        0x00038002 => "Network Not Available".to_string(),
        0x00038003 => "Profile Not Found".to_string(),
        0x00038004 => "Profile Already Exists".to_string(),
        0x00038005 => "Profile Name Too Long".to_string(),
        0x00038006 => "Profile Invalid".to_string(),
        0x00038014 => "Connection Failed (Profile Issue)".to_string(),
        0x00048005 => "Key Exchange Timeout".to_string(),
        0x00048014 => "Authentication Timeout".to_string(),
        0x00050004 => "Incorrect Password".to_string(),
        0x00080006 => "MSM Security Missing".to_string(),
        _ => format!("Unknown Reason (Code: {code}, 0x{code:X})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_raw_code_and_operation() {
        let err = WlanError::Status {
            operation: "WlanScan",
            code: ERROR_INVALID_HANDLE,
        };
        assert_eq!(err.code(), Some(6));
        assert_eq!(err.operation(), Some("WlanScan"));
        assert_eq!(
            err.to_string(),
            "WlanScan failed (code: 6, ERROR_INVALID_HANDLE)"
        );
    }

    #[test]
    fn reason_variant_renders_both_codes() {
        let err = WlanError::StatusWithReason {
            operation: "WlanSetProfile",
            code: ERROR_BAD_PROFILE,
            reason: 0x00038006,
        };
        assert_eq!(err.code(), Some(ERROR_BAD_PROFILE));
        assert!(err.to_string().contains("reason: 229382"));
    }

    #[test]
    fn non_status_errors_have_no_code() {
        assert_eq!(WlanError::NoInterface.code(), None);
        assert_eq!(
            WlanError::IndexOutOfRange { index: 3, count: 1 }.code(),
            None
        );
    }

    #[test]
    fn unknown_codes_are_labelled() {
        assert_eq!(status_name(0xDEAD), "unrecognized status");
        assert_eq!(
            wlan_reason_to_string(0x1234),
            "Unknown Reason (Code: 4660, 0x1234)"
        );
    }
}
