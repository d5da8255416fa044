//! Process-wide table of `wlanapi.dll` entry points, resolved by name on first use.

use std::sync::LazyLock;

use libloading::Library;

use crate::config::WLANAPI_LIBRARY;
use crate::error::{WlanError, WlanResult};
use crate::wlan::sys;

static API: LazyLock<Result<WlanApi, String>> = LazyLock::new(|| {
    WlanApi::load(WLANAPI_LIBRARY).map_err(|err| match err {
        WlanError::LibraryUnavailable { reason } => reason,
        other => other.to_string(),
    })
});

/// Get the resolved entry-point table, loading the library on first call.
pub fn api() -> WlanResult<&'static WlanApi> {
    match &*API {
        Ok(api) => Ok(api),
        Err(reason) => Err(WlanError::LibraryUnavailable {
            reason: reason.clone(),
        }),
    }
}

/// Unwrap an optional entry point or report which symbol is missing.
pub(crate) fn entry<F: Copy>(slot: Option<F>, symbol: &'static str) -> WlanResult<F> {
    slot.ok_or(WlanError::MissingEntryPoint { symbol })
}

/// Resolved entry points of the Native WiFi API.
///
/// The four session primitives are required. Everything else is optional so a
/// trimmed-down `wlanapi.dll` still serves the calls it does export.
pub struct WlanApi {
    _library: Library,
    missing: Vec<&'static str>,

    pub open_handle: sys::WlanOpenHandleFn,
    pub close_handle: sys::WlanCloseHandleFn,
    pub free_memory: sys::WlanFreeMemoryFn,
    pub enum_interfaces: sys::WlanEnumInterfacesFn,

    pub scan: Option<sys::WlanScanFn>,
    pub get_available_network_list: Option<sys::WlanGetAvailableNetworkListFn>,
    pub get_network_bss_list: Option<sys::WlanGetNetworkBssListFn>,
    pub connect: Option<sys::WlanConnectFn>,
    pub disconnect: Option<sys::WlanDisconnectFn>,
    pub query_interface: Option<sys::WlanQueryInterfaceFn>,
    pub set_interface: Option<sys::WlanSetInterfaceFn>,
    pub get_interface_capability: Option<sys::WlanGetInterfaceCapabilityFn>,
    pub query_auto_config_parameter: Option<sys::WlanQueryAutoConfigParameterFn>,
    pub set_auto_config_parameter: Option<sys::WlanSetAutoConfigParameterFn>,
    pub reason_code_to_string: Option<sys::WlanReasonCodeToStringFn>,
    pub register_notification: Option<sys::WlanRegisterNotificationFn>,

    pub get_profile: Option<sys::WlanGetProfileFn>,
    pub set_profile: Option<sys::WlanSetProfileFn>,
    pub delete_profile: Option<sys::WlanDeleteProfileFn>,
    pub rename_profile: Option<sys::WlanRenameProfileFn>,
    pub get_profile_list: Option<sys::WlanGetProfileListFn>,
    pub set_profile_list: Option<sys::WlanSetProfileListFn>,
    pub set_profile_position: Option<sys::WlanSetProfilePositionFn>,
    pub get_profile_custom_user_data: Option<sys::WlanGetProfileCustomUserDataFn>,
    pub set_profile_custom_user_data: Option<sys::WlanSetProfileCustomUserDataFn>,
    pub set_profile_eap_user_data: Option<sys::WlanSetProfileEapUserDataFn>,
    pub set_profile_eap_xml_user_data: Option<sys::WlanSetProfileEapXmlUserDataFn>,
    pub save_temporary_profile: Option<sys::WlanSaveTemporaryProfileFn>,

    pub get_filter_list: Option<sys::WlanGetFilterListFn>,
    pub set_filter_list: Option<sys::WlanSetFilterListFn>,
    pub get_security_settings: Option<sys::WlanGetSecuritySettingsFn>,
    pub set_security_settings: Option<sys::WlanSetSecuritySettingsFn>,

    pub hosted_network_start_using: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_stop_using: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_force_start: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_force_stop: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_init_settings: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_refresh_security_settings: Option<sys::WlanHostedNetworkActionFn>,
    pub hosted_network_query_property: Option<sys::WlanHostedNetworkQueryPropertyFn>,
    pub hosted_network_set_property: Option<sys::WlanHostedNetworkSetPropertyFn>,
    pub hosted_network_query_status: Option<sys::WlanHostedNetworkQueryStatusFn>,
    pub hosted_network_set_secondary_key: Option<sys::WlanHostedNetworkSetSecondaryKeyFn>,
    pub hosted_network_query_secondary_key: Option<sys::WlanHostedNetworkQuerySecondaryKeyFn>,
}

impl std::fmt::Debug for WlanApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WlanApi")
            .field("missing", &self.missing)
            .finish_non_exhaustive()
    }
}

impl WlanApi {
    /// Load `library` and resolve every entry point by name.
    pub fn load(library: &str) -> WlanResult<Self> {
        let library = open_library(library)?;
        let mut missing = Vec::new();
        let m = &mut missing;

        // SAFETY: each symbol is resolved as the signature type of the field it fills.
        let api = unsafe {
            WlanApi {
                open_handle: required(&library, "WlanOpenHandle")?,
                close_handle: required(&library, "WlanCloseHandle")?,
                free_memory: required(&library, "WlanFreeMemory")?,
                enum_interfaces: required(&library, "WlanEnumInterfaces")?,
                scan: optional(&library, m, "WlanScan"),
                get_available_network_list: optional(&library, m, "WlanGetAvailableNetworkList"),
                get_network_bss_list: optional(&library, m, "WlanGetNetworkBssList"),
                connect: optional(&library, m, "WlanConnect"),
                disconnect: optional(&library, m, "WlanDisconnect"),
                query_interface: optional(&library, m, "WlanQueryInterface"),
                set_interface: optional(&library, m, "WlanSetInterface"),
                get_interface_capability: optional(&library, m, "WlanGetInterfaceCapability"),
                query_auto_config_parameter: optional(&library, m, "WlanQueryAutoConfigParameter"),
                set_auto_config_parameter: optional(&library, m, "WlanSetAutoConfigParameter"),
                reason_code_to_string: optional(&library, m, "WlanReasonCodeToString"),
                register_notification: optional(&library, m, "WlanRegisterNotification"),
                get_profile: optional(&library, m, "WlanGetProfile"),
                set_profile: optional(&library, m, "WlanSetProfile"),
                delete_profile: optional(&library, m, "WlanDeleteProfile"),
                rename_profile: optional(&library, m, "WlanRenameProfile"),
                get_profile_list: optional(&library, m, "WlanGetProfileList"),
                set_profile_list: optional(&library, m, "WlanSetProfileList"),
                set_profile_position: optional(&library, m, "WlanSetProfilePosition"),
                get_profile_custom_user_data: optional(&library, m, "WlanGetProfileCustomUserData"),
                set_profile_custom_user_data: optional(&library, m, "WlanSetProfileCustomUserData"),
                set_profile_eap_user_data: optional(&library, m, "WlanSetProfileEapUserData"),
                set_profile_eap_xml_user_data: optional(&library, m, "WlanSetProfileEapXmlUserData"),
                save_temporary_profile: optional(&library, m, "WlanSaveTemporaryProfile"),
                get_filter_list: optional(&library, m, "WlanGetFilterList"),
                set_filter_list: optional(&library, m, "WlanSetFilterList"),
                get_security_settings: optional(&library, m, "WlanGetSecuritySettings"),
                set_security_settings: optional(&library, m, "WlanSetSecuritySettings"),
                hosted_network_start_using: optional(&library, m, "WlanHostedNetworkStartUsing"),
                hosted_network_stop_using: optional(&library, m, "WlanHostedNetworkStopUsing"),
                hosted_network_force_start: optional(&library, m, "WlanHostedNetworkForceStart"),
                hosted_network_force_stop: optional(&library, m, "WlanHostedNetworkForceStop"),
                hosted_network_init_settings: optional(&library, m, "WlanHostedNetworkInitSettings"),
                hosted_network_refresh_security_settings: optional(
                    &library,
                    m,
                    "WlanHostedNetworkRefreshSecuritySettings",
                ),
                hosted_network_query_property: optional(
                    &library,
                    m,
                    "WlanHostedNetworkQueryProperty",
                ),
                hosted_network_set_property: optional(&library, m, "WlanHostedNetworkSetProperty"),
                hosted_network_query_status: optional(&library, m, "WlanHostedNetworkQueryStatus"),
                hosted_network_set_secondary_key: optional(
                    &library,
                    m,
                    "WlanHostedNetworkSetSecondaryKey",
                ),
                hosted_network_query_secondary_key: optional(
                    &library,
                    m,
                    "WlanHostedNetworkQuerySecondaryKey",
                ),
                missing,
                _library: library,
            }
        };

        if !api.missing.is_empty() {
            tracing::debug!(missing = ?api.missing, "wlanapi.dll lacks optional entry points");
        }
        Ok(api)
    }

    /// Optional entry points the loaded library does not export
    pub fn missing_symbols(&self) -> &[&'static str] {
        &self.missing
    }
}

#[cfg(windows)]
fn open_library(name: &str) -> WlanResult<Library> {
    use libloading::os::windows::{LOAD_LIBRARY_SEARCH_SYSTEM32, Library as WinLibrary};

    // Only System32 is searched so a planted DLL next to the executable is never picked up.
    unsafe { WinLibrary::load_with_flags(name, LOAD_LIBRARY_SEARCH_SYSTEM32) }
        .map(Library::from)
        .map_err(|err| WlanError::LibraryUnavailable {
            reason: format!("failed to load {name}: {err}"),
        })
}

#[cfg(not(windows))]
fn open_library(name: &str) -> WlanResult<Library> {
    unsafe { Library::new(name) }.map_err(|err| WlanError::LibraryUnavailable {
        reason: format!("failed to load {name}: {err}"),
    })
}

fn symbol_name(symbol: &str) -> Vec<u8> {
    let mut name = Vec::with_capacity(symbol.len() + 1);
    name.extend_from_slice(symbol.as_bytes());
    name.push(0);
    name
}

/// Resolve `symbol` as `F`.
///
/// # Safety
/// `F` must be the function pointer type matching the exported symbol.
unsafe fn resolve<F: Copy>(library: &Library, symbol: &'static str) -> Option<F> {
    let name = symbol_name(symbol);
    match unsafe { library.get::<F>(&name) } {
        Ok(func) => Some(*func),
        Err(err) => {
            tracing::debug!(symbol, %err, "entry point not resolved");
            None
        }
    }
}

/// # Safety
/// See [`resolve`].
unsafe fn optional<F: Copy>(
    library: &Library,
    missing: &mut Vec<&'static str>,
    symbol: &'static str,
) -> Option<F> {
    let func = unsafe { resolve(library, symbol) };
    if func.is_none() {
        missing.push(symbol);
    }
    func
}

/// # Safety
/// See [`resolve`].
unsafe fn required<F: Copy>(library: &Library, symbol: &'static str) -> WlanResult<F> {
    unsafe { resolve(library, symbol) }.ok_or_else(|| WlanError::LibraryUnavailable {
        reason: format!("{symbol} is not exported"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_library_is_reported_not_fatal() {
        let err = WlanApi::load("definitely-not-a-real-wlan-library.dll").unwrap_err();
        assert!(matches!(err, WlanError::LibraryUnavailable { .. }));
        assert!(err.to_string().contains("definitely-not-a-real-wlan-library.dll"));
    }

    #[test]
    fn missing_entry_point_names_the_symbol() {
        let slot: Option<sys::WlanScanFn> = None;
        let err = entry(slot, "WlanScan").unwrap_err();
        assert_eq!(err.to_string(), "wlanapi.dll does not export WlanScan");
    }

    #[test]
    fn symbol_names_are_nul_terminated() {
        assert_eq!(symbol_name("WlanScan"), b"WlanScan\0".to_vec());
    }

    #[cfg(not(windows))]
    #[test]
    fn table_is_unavailable_off_windows() {
        assert!(matches!(api(), Err(WlanError::LibraryUnavailable { .. })));
        // Repeated access reports the same failure instead of retrying the load.
        assert!(matches!(api(), Err(WlanError::LibraryUnavailable { .. })));
    }
}
