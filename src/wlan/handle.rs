use std::mem::ManuallyDrop;
use std::ptr;

use crate::config::CLIENT_VERSION;
use crate::error::{ERROR_SUCCESS, WlanError, WlanResult, status_name};
use crate::wlan::loader::{WlanApi, api};
use crate::wlan::memory::{WlanMemory, copy_items};
use crate::wlan::sys;
use crate::wlan::types::{Guid, InterfaceInfo, InterfaceList};

/// Map a native status code to a result, logging failures.
pub(crate) fn check(operation: &'static str, code: u32) -> WlanResult<()> {
    if code == ERROR_SUCCESS {
        tracing::debug!(operation, "native call succeeded");
        return Ok(());
    }
    tracing::warn!(operation, code, status = status_name(code), "native call failed");
    Err(WlanError::Status { operation, code })
}

/// Like [`check`], for calls that also report a reason or fail-reason code.
pub(crate) fn check_reason(operation: &'static str, code: u32, reason: u32) -> WlanResult<()> {
    if code == ERROR_SUCCESS {
        tracing::debug!(operation, "native call succeeded");
        return Ok(());
    }
    tracing::warn!(
        operation,
        code,
        reason,
        status = status_name(code),
        "native call failed"
    );
    Err(WlanError::StatusWithReason {
        operation,
        code,
        reason,
    })
}

/// A client session with the WLAN service, closed automatically on drop.
///
/// A session may move between threads but must not be used from two threads at
/// once; wrap it in a `Mutex` to share it.
#[derive(Debug)]
pub struct Session {
    api: &'static WlanApi,
    handle: sys::HANDLE,
    negotiated_version: u32,
}

// SAFETY: the handle is an opaque token owned by this value. wlanapi.dll accepts it
// from any thread, and `&self` methods are not shared across threads (no `Sync`).
unsafe impl Send for Session {}

impl Session {
    /// Open a session with the default client version
    pub fn open() -> WlanResult<Self> {
        Self::open_with_version(CLIENT_VERSION)
    }

    pub fn open_with_version(client_version: u32) -> WlanResult<Self> {
        let api = api()?;
        let mut negotiated_version = 0;
        let mut handle: sys::HANDLE = ptr::null_mut();
        let result = unsafe {
            (api.open_handle)(
                client_version,
                ptr::null_mut(),
                &mut negotiated_version,
                &mut handle,
            )
        };
        check("WlanOpenHandle", result)?;
        tracing::debug!(client_version, negotiated_version, "WLAN session opened");
        Ok(Self {
            api,
            handle,
            negotiated_version,
        })
    }

    /// Adopt a handle obtained elsewhere. It is closed when the session drops.
    ///
    /// # Safety
    /// `handle` must be an open WLAN client handle not owned by anything else.
    pub unsafe fn from_raw(handle: sys::HANDLE, negotiated_version: u32) -> WlanResult<Self> {
        Ok(Self {
            api: api()?,
            handle,
            negotiated_version,
        })
    }

    /// Give up ownership of the handle without closing it.
    pub fn into_raw(self) -> sys::HANDLE {
        ManuallyDrop::new(self).handle
    }

    /// Close the session, reporting the close status.
    pub fn close(self) -> WlanResult<()> {
        let this = ManuallyDrop::new(self);
        let result = unsafe { (this.api.close_handle)(this.handle, ptr::null_mut()) };
        check("WlanCloseHandle", result)
    }

    /// Get the raw handle for API calls
    pub fn as_raw(&self) -> sys::HANDLE {
        self.handle
    }

    pub fn negotiated_version(&self) -> u32 {
        self.negotiated_version
    }

    pub(crate) fn api(&self) -> &'static WlanApi {
        self.api
    }

    /// Run a call whose result the service allocates, taking ownership of the buffer.
    ///
    /// # Safety
    /// On success `call` must have stored a pointer to a valid `T` (or null) that is
    /// released with `WlanFreeMemory`.
    pub(crate) unsafe fn allocated<T>(
        &self,
        operation: &'static str,
        call: impl FnOnce(*mut *mut T) -> u32,
    ) -> WlanResult<WlanMemory<T>> {
        let mut out: *mut T = ptr::null_mut();
        let result = call(&mut out as *mut *mut T);
        if result != ERROR_SUCCESS && !out.is_null() {
            unsafe { (self.api.free_memory)(out.cast()) };
        }
        check(operation, result)?;
        unsafe { WlanMemory::from_raw(out, self.api.free_memory, operation) }
    }

    /// Enumerate the wireless interfaces on this machine
    pub fn enum_interfaces(&self) -> WlanResult<InterfaceList> {
        let list = unsafe {
            self.allocated("WlanEnumInterfaces", |out| {
                (self.api.enum_interfaces)(self.handle, ptr::null_mut(), out)
            })?
        };
        let items = unsafe { copy_items(list.as_ptr())? };
        Ok(InterfaceList {
            items: items.iter().map(InterfaceInfo::from).collect(),
            current_index: list.dwIndex,
        })
    }

    /// The interface at the list's reported current index
    pub fn default_interface(&self) -> WlanResult<InterfaceInfo> {
        let list = self.enum_interfaces()?;
        list.current().cloned()
    }

    /// Get the first interface GUID
    pub fn first_interface_guid(&self) -> WlanResult<Guid> {
        self.enum_interfaces()?
            .items
            .first()
            .map(|info| info.guid)
            .ok_or(WlanError::NoInterface)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let result = unsafe { (self.api.close_handle)(self.handle, ptr::null_mut()) };
        if result != ERROR_SUCCESS {
            tracing::warn!(
                code = result,
                status = status_name(result),
                "WlanCloseHandle failed on drop"
            );
        }
    }
}

/// Open a session and return the default interface's GUID and description.
pub fn default_interface() -> WlanResult<(Guid, String)> {
    let session = Session::open()?;
    let info = session.default_interface()?;
    Ok((info.guid, info.description))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ERROR_INVALID_HANDLE;

    #[test]
    fn success_passes_through() {
        assert!(check("WlanScan", ERROR_SUCCESS).is_ok());
        assert!(check_reason("WlanSetProfile", ERROR_SUCCESS, 7).is_ok());
    }

    #[test]
    fn failure_keeps_operation_and_code() {
        let err = check("WlanScan", ERROR_INVALID_HANDLE).unwrap_err();
        assert!(matches!(
            err,
            WlanError::Status {
                operation: "WlanScan",
                code: ERROR_INVALID_HANDLE
            }
        ));

        let err = check_reason("WlanHostedNetworkForceStart", 5, 5).unwrap_err();
        assert_eq!(err.code(), Some(5));
        assert!(matches!(err, WlanError::StatusWithReason { reason: 5, .. }));
    }

    #[cfg(not(windows))]
    #[test]
    fn open_reports_missing_library() {
        assert!(matches!(
            Session::open(),
            Err(WlanError::LibraryUnavailable { .. })
        ));
        assert!(matches!(
            default_interface(),
            Err(WlanError::LibraryUnavailable { .. })
        ));
    }
}
