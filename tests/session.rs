use wlanapi::error::{ERROR_INVALID_HANDLE, ERROR_SERVICE_NOT_ACTIVE};
use wlanapi::wlan::{Session, api};
use wlanapi::{WlanError, reason_code_to_string};

#[cfg(not(windows))]
#[test]
fn library_is_unavailable_off_windows() {
    assert!(matches!(api(), Err(WlanError::LibraryUnavailable { .. })));
    assert!(matches!(
        Session::open(),
        Err(WlanError::LibraryUnavailable { .. })
    ));
    assert!(matches!(
        wlanapi::default_interface(),
        Err(WlanError::LibraryUnavailable { .. })
    ));
}

#[test]
fn reason_text_is_never_empty() {
    assert!(!reason_code_to_string(0).is_empty());
    assert!(!reason_code_to_string(0x00028017).is_empty());
}

/// Open a session, or `None` when the WLAN AutoConfig service is not running.
fn open_or_skip() -> Option<Session> {
    match Session::open() {
        Ok(session) => Some(session),
        Err(WlanError::Status { code, .. }) if code == ERROR_SERVICE_NOT_ACTIVE => None,
        Err(WlanError::LibraryUnavailable { .. }) => None,
        Err(err) => panic!("WlanOpenHandle failed: {err}"),
    }
}

#[test]
fn open_and_close() {
    let Some(session) = open_or_skip() else {
        return;
    };
    assert!(session.negotiated_version() >= 1);
    session.close().unwrap();
}

#[test]
fn enumerated_interfaces_have_descriptions() {
    let Some(session) = open_or_skip() else {
        return;
    };
    let list = session.enum_interfaces().unwrap();
    for interface in &list.items {
        assert!(!interface.description.is_empty());
    }
    if list.is_empty() {
        assert!(matches!(list.current(), Err(WlanError::NoInterface)));
    }
}

#[test]
fn invalid_handle_reports_native_status() {
    if api().is_err() {
        return;
    }
    let session = unsafe { Session::from_raw(0xDEAD_usize as _, 2) }.unwrap();
    let err = session.enum_interfaces().unwrap_err();
    assert_eq!(err.code(), Some(ERROR_INVALID_HANDLE));
    assert_eq!(err.operation(), Some("WlanEnumInterfaces"));
    // Not ours to close.
    let _ = session.into_raw();
}
