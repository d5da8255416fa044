use std::ptr;

use crate::config::REASON_STRING_BUFFER_LEN;
use crate::error::{ERROR_SUCCESS, WlanError, WlanResult, wlan_reason_to_string};
use crate::wlan::handle::{Session, check};
use crate::wlan::loader::{api, entry};
use crate::wlan::memory::{copy_items, network_list};
use crate::wlan::sys;
use crate::wlan::types::{FilterListType, NetworkFilter, OpcodeValueType, SecuritySettings};
use crate::wlan::wide::{from_wide, from_wide_ptr, to_wide};

/// Convert a WLAN reason code to a human-readable string.
///
/// Uses `WlanReasonCodeToString` when available and falls back to a built-in table.
pub fn reason_code_to_string(code: u32) -> String {
    match native_reason_string(code) {
        Ok(text) if !text.is_empty() => text,
        Ok(_) => wlan_reason_to_string(code),
        Err(err) => {
            tracing::debug!(code, %err, "using built-in reason text");
            wlan_reason_to_string(code)
        }
    }
}

fn native_reason_string(code: u32) -> WlanResult<String> {
    let to_string = entry(api()?.reason_code_to_string, "WlanReasonCodeToString")?;
    let mut buffer = vec![0u16; REASON_STRING_BUFFER_LEN];
    let result = unsafe {
        to_string(
            code,
            buffer.len() as u32,
            buffer.as_mut_ptr(),
            ptr::null_mut(),
        )
    };
    if result != ERROR_SUCCESS {
        return Err(WlanError::Status {
            operation: "WlanReasonCodeToString",
            code: result,
        });
    }
    Ok(from_wide(&buffer))
}

impl Session {
    /// Networks on a group-policy or user permit/deny list
    pub fn filter_list(&self, list_type: FilterListType) -> WlanResult<Vec<NetworkFilter>> {
        let get = entry(self.api().get_filter_list, "WlanGetFilterList")?;
        let list = unsafe {
            self.allocated("WlanGetFilterList", |out| {
                get(self.as_raw(), list_type.to_raw(), ptr::null_mut(), out)
            })
        };
        // An empty list comes back as success with no buffer.
        let list = match list {
            Ok(list) => list,
            Err(WlanError::NullBuffer { .. }) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        let items = unsafe { copy_items(list.as_ptr())? };
        items.iter().map(NetworkFilter::from_native).collect()
    }

    /// Replace a user permit/deny list. `None` clears it.
    pub fn set_filter_list(
        &self,
        list_type: FilterListType,
        networks: Option<&[NetworkFilter]>,
    ) -> WlanResult<()> {
        let set = entry(self.api().set_filter_list, "WlanSetFilterList")?;
        let buffer = networks
            .map(|networks| {
                let native: Vec<sys::DOT11_NETWORK> =
                    networks.iter().map(NetworkFilter::to_native).collect();
                network_list(&native)
            })
            .transpose()?;
        let result = unsafe {
            set(
                self.as_raw(),
                list_type.to_raw(),
                buffer
                    .as_ref()
                    .map_or(ptr::null(), |b| b.as_ptr::<sys::DOT11_NETWORK_LIST>()),
                ptr::null_mut(),
            )
        };
        check("WlanSetFilterList", result)
    }

    /// Security descriptor of a `wlan_secure_*` object
    pub fn security_settings(&self, object: u32) -> WlanResult<SecuritySettings> {
        let get = entry(self.api().get_security_settings, "WlanGetSecuritySettings")?;
        let mut value_type = sys::wlan_opcode_value_type_invalid;
        let mut granted_access = 0u32;
        let sddl = unsafe {
            self.allocated::<u16>("WlanGetSecuritySettings", |out| {
                get(
                    self.as_raw(),
                    object,
                    &mut value_type,
                    out,
                    &mut granted_access,
                )
            })?
        };
        Ok(SecuritySettings {
            value_type: OpcodeValueType::from_raw(value_type),
            sddl: unsafe { from_wide_ptr(sddl.as_ptr()) },
            granted_access,
        })
    }

    pub fn set_security_settings(&self, object: u32, sddl: &str) -> WlanResult<()> {
        let set = entry(self.api().set_security_settings, "WlanSetSecuritySettings")?;
        let sddl = to_wide("WlanSetSecuritySettings", sddl)?;
        let result = unsafe { set(self.as_raw(), object, sddl.as_ptr()) };
        check("WlanSetSecuritySettings", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn reason_text_falls_back_without_the_library() {
        assert_eq!(reason_code_to_string(0x00050004), "Incorrect Password");
        assert_eq!(
            reason_code_to_string(0xABCD),
            "Unknown Reason (Code: 43981, 0xABCD)"
        );
    }
}
