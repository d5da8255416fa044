//! Raw `#[repr(C)]` mirrors of the structures, enumerations and function
//! signatures declared in `wlanapi.h`, `windot11.h` and `eaptypes.h`.
//!
//! Every record here must match the native layout byte for byte. The names
//! follow the Windows SDK so they can be checked against the documentation.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

use std::ffi::c_void;

use crate::config::{
    DOT11_RATE_SET_MAX_LENGTH, DOT11_SSID_MAX_LENGTH, WLAN_MAX_NAME_LENGTH, WLAN_MAX_PHY_INDEX,
    WLAN_MAX_PHY_TYPE_NUMBER,
};

pub type HANDLE = *mut c_void;
pub type BOOL = i32;
pub type BOOLEAN = u8;
pub type DWORD = u32;
pub type WCHAR = u16;

pub const TRUE: BOOL = 1;
pub const FALSE: BOOL = 0;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GUID {
    pub Data1: u32,
    pub Data2: u16,
    pub Data3: u16,
    pub Data4: [u8; 8],
}

// ---------------------------------------------------------------------------
// windot11.h
// ---------------------------------------------------------------------------

pub type DOT11_MAC_ADDRESS = [u8; 6];

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DOT11_SSID {
    pub uSSIDLength: u32,
    pub ucSSID: [u8; DOT11_SSID_MAX_LENGTH],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct NDIS_OBJECT_HEADER {
    pub Type: u8,
    pub Revision: u8,
    pub Size: u16,
}

pub const NDIS_OBJECT_TYPE_DEFAULT: u8 = 0x80;
pub const DOT11_BSSID_LIST_REVISION_1: u8 = 1;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DOT11_BSSID_LIST {
    pub Header: NDIS_OBJECT_HEADER,
    pub uNumOfEntries: u32,
    pub uTotalNumOfEntries: u32,
    pub BSSIDs: [DOT11_MAC_ADDRESS; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DOT11_NETWORK {
    pub dot11Ssid: DOT11_SSID,
    pub dot11BssType: DOT11_BSS_TYPE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DOT11_NETWORK_LIST {
    pub dwNumberOfItems: DWORD,
    pub dwIndex: DWORD,
    pub Network: [DOT11_NETWORK; 1],
}

pub type DOT11_BSS_TYPE = u32;
pub const dot11_BSS_type_infrastructure: DOT11_BSS_TYPE = 1;
pub const dot11_BSS_type_independent: DOT11_BSS_TYPE = 2;
pub const dot11_BSS_type_any: DOT11_BSS_TYPE = 3;

pub type DOT11_AUTH_ALGORITHM = u32;
pub const DOT11_AUTH_ALGO_80211_OPEN: DOT11_AUTH_ALGORITHM = 1;
pub const DOT11_AUTH_ALGO_80211_SHARED_KEY: DOT11_AUTH_ALGORITHM = 2;
pub const DOT11_AUTH_ALGO_WPA: DOT11_AUTH_ALGORITHM = 3;
pub const DOT11_AUTH_ALGO_WPA_PSK: DOT11_AUTH_ALGORITHM = 4;
pub const DOT11_AUTH_ALGO_WPA_NONE: DOT11_AUTH_ALGORITHM = 5;
pub const DOT11_AUTH_ALGO_RSNA: DOT11_AUTH_ALGORITHM = 6;
pub const DOT11_AUTH_ALGO_RSNA_PSK: DOT11_AUTH_ALGORITHM = 7;
pub const DOT11_AUTH_ALGO_WPA3: DOT11_AUTH_ALGORITHM = 8;
pub const DOT11_AUTH_ALGO_WPA3_SAE: DOT11_AUTH_ALGORITHM = 9;
pub const DOT11_AUTH_ALGO_OWE: DOT11_AUTH_ALGORITHM = 10;
pub const DOT11_AUTH_ALGO_WPA3_ENT: DOT11_AUTH_ALGORITHM = 11;
pub const DOT11_AUTH_ALGO_IHV_START: DOT11_AUTH_ALGORITHM = 0x8000_0000;
pub const DOT11_AUTH_ALGO_IHV_END: DOT11_AUTH_ALGORITHM = 0xffff_ffff;

pub type DOT11_CIPHER_ALGORITHM = u32;
pub const DOT11_CIPHER_ALGO_NONE: DOT11_CIPHER_ALGORITHM = 0x00;
pub const DOT11_CIPHER_ALGO_WEP40: DOT11_CIPHER_ALGORITHM = 0x01;
pub const DOT11_CIPHER_ALGO_TKIP: DOT11_CIPHER_ALGORITHM = 0x02;
pub const DOT11_CIPHER_ALGO_CCMP: DOT11_CIPHER_ALGORITHM = 0x04;
pub const DOT11_CIPHER_ALGO_WEP104: DOT11_CIPHER_ALGORITHM = 0x05;
pub const DOT11_CIPHER_ALGO_BIP: DOT11_CIPHER_ALGORITHM = 0x06;
pub const DOT11_CIPHER_ALGO_GCMP: DOT11_CIPHER_ALGORITHM = 0x08;
pub const DOT11_CIPHER_ALGO_GCMP_256: DOT11_CIPHER_ALGORITHM = 0x09;
pub const DOT11_CIPHER_ALGO_CCMP_256: DOT11_CIPHER_ALGORITHM = 0x0a;
pub const DOT11_CIPHER_ALGO_WPA_USE_GROUP: DOT11_CIPHER_ALGORITHM = 0x100;
pub const DOT11_CIPHER_ALGO_RSN_USE_GROUP: DOT11_CIPHER_ALGORITHM = 0x100;
pub const DOT11_CIPHER_ALGO_WEP: DOT11_CIPHER_ALGORITHM = 0x101;
pub const DOT11_CIPHER_ALGO_IHV_START: DOT11_CIPHER_ALGORITHM = 0x8000_0000;
pub const DOT11_CIPHER_ALGO_IHV_END: DOT11_CIPHER_ALGORITHM = 0xffff_ffff;

pub type DOT11_PHY_TYPE = u32;
pub const dot11_phy_type_unknown: DOT11_PHY_TYPE = 0;
pub const dot11_phy_type_any: DOT11_PHY_TYPE = 0;
pub const dot11_phy_type_fhss: DOT11_PHY_TYPE = 1;
pub const dot11_phy_type_dsss: DOT11_PHY_TYPE = 2;
pub const dot11_phy_type_irbaseband: DOT11_PHY_TYPE = 3;
pub const dot11_phy_type_ofdm: DOT11_PHY_TYPE = 4;
pub const dot11_phy_type_hrdsss: DOT11_PHY_TYPE = 5;
pub const dot11_phy_type_erp: DOT11_PHY_TYPE = 6;
pub const dot11_phy_type_ht: DOT11_PHY_TYPE = 7;
pub const dot11_phy_type_vht: DOT11_PHY_TYPE = 8;
pub const dot11_phy_type_dmg: DOT11_PHY_TYPE = 9;
pub const dot11_phy_type_he: DOT11_PHY_TYPE = 10;
pub const dot11_phy_type_eht: DOT11_PHY_TYPE = 11;
pub const dot11_phy_type_IHV_start: DOT11_PHY_TYPE = 0x8000_0000;
pub const dot11_phy_type_IHV_end: DOT11_PHY_TYPE = 0xffff_ffff;

pub type DOT11_RADIO_STATE = u32;
pub const dot11_radio_state_unknown: DOT11_RADIO_STATE = 0;
pub const dot11_radio_state_on: DOT11_RADIO_STATE = 1;
pub const dot11_radio_state_off: DOT11_RADIO_STATE = 2;

// ---------------------------------------------------------------------------
// wlanapi.h: enumerations
// ---------------------------------------------------------------------------

pub type WLAN_INTERFACE_STATE = u32;
pub const wlan_interface_state_not_ready: WLAN_INTERFACE_STATE = 0;
pub const wlan_interface_state_connected: WLAN_INTERFACE_STATE = 1;
pub const wlan_interface_state_ad_hoc_network_formed: WLAN_INTERFACE_STATE = 2;
pub const wlan_interface_state_disconnecting: WLAN_INTERFACE_STATE = 3;
pub const wlan_interface_state_disconnected: WLAN_INTERFACE_STATE = 4;
pub const wlan_interface_state_associating: WLAN_INTERFACE_STATE = 5;
pub const wlan_interface_state_discovering: WLAN_INTERFACE_STATE = 6;
pub const wlan_interface_state_authenticating: WLAN_INTERFACE_STATE = 7;

pub type WLAN_INTERFACE_TYPE = u32;
pub const wlan_interface_type_emulated_802_11: WLAN_INTERFACE_TYPE = 0;
pub const wlan_interface_type_native_802_11: WLAN_INTERFACE_TYPE = 1;
pub const wlan_interface_type_invalid: WLAN_INTERFACE_TYPE = 2;

pub type WLAN_CONNECTION_MODE = u32;
pub const wlan_connection_mode_profile: WLAN_CONNECTION_MODE = 0;
pub const wlan_connection_mode_temporary_profile: WLAN_CONNECTION_MODE = 1;
pub const wlan_connection_mode_discovery_secure: WLAN_CONNECTION_MODE = 2;
pub const wlan_connection_mode_discovery_unsecure: WLAN_CONNECTION_MODE = 3;
pub const wlan_connection_mode_auto: WLAN_CONNECTION_MODE = 4;
pub const wlan_connection_mode_invalid: WLAN_CONNECTION_MODE = 5;

pub type WLAN_FILTER_LIST_TYPE = u32;
pub const wlan_filter_list_type_gp_permit: WLAN_FILTER_LIST_TYPE = 0;
pub const wlan_filter_list_type_gp_deny: WLAN_FILTER_LIST_TYPE = 1;
pub const wlan_filter_list_type_user_permit: WLAN_FILTER_LIST_TYPE = 2;
pub const wlan_filter_list_type_user_deny: WLAN_FILTER_LIST_TYPE = 3;

pub type WLAN_SECURABLE_OBJECT = u32;
pub const wlan_secure_permit_list: WLAN_SECURABLE_OBJECT = 0;
pub const wlan_secure_deny_list: WLAN_SECURABLE_OBJECT = 1;
pub const wlan_secure_ac_enabled: WLAN_SECURABLE_OBJECT = 2;
pub const wlan_secure_bc_scan_enabled: WLAN_SECURABLE_OBJECT = 3;
pub const wlan_secure_bss_type: WLAN_SECURABLE_OBJECT = 4;
pub const wlan_secure_show_denied: WLAN_SECURABLE_OBJECT = 5;
pub const wlan_secure_interface_properties: WLAN_SECURABLE_OBJECT = 6;
pub const wlan_secure_ihv_control: WLAN_SECURABLE_OBJECT = 7;
pub const wlan_secure_all_user_profiles_order: WLAN_SECURABLE_OBJECT = 8;
pub const wlan_secure_add_new_all_user_profiles: WLAN_SECURABLE_OBJECT = 9;
pub const wlan_secure_add_new_per_user_profiles: WLAN_SECURABLE_OBJECT = 10;
pub const wlan_secure_media_streaming_mode_enabled: WLAN_SECURABLE_OBJECT = 11;
pub const wlan_secure_current_operation_mode: WLAN_SECURABLE_OBJECT = 12;
pub const wlan_secure_get_plaintext_key: WLAN_SECURABLE_OBJECT = 13;
pub const wlan_secure_hosted_network_elevated_access: WLAN_SECURABLE_OBJECT = 14;
pub const wlan_secure_virtual_station_extensibility: WLAN_SECURABLE_OBJECT = 15;
pub const wlan_secure_wfd_elevated_access: WLAN_SECURABLE_OBJECT = 16;
pub const WLAN_SECURABLE_OBJECT_COUNT: WLAN_SECURABLE_OBJECT = 17;

pub type WLAN_INTF_OPCODE = u32;
pub const wlan_intf_opcode_autoconf_start: WLAN_INTF_OPCODE = 0x0000_0000;
pub const wlan_intf_opcode_autoconf_enabled: WLAN_INTF_OPCODE = 1;
pub const wlan_intf_opcode_background_scan_enabled: WLAN_INTF_OPCODE = 2;
pub const wlan_intf_opcode_media_streaming_mode: WLAN_INTF_OPCODE = 3;
pub const wlan_intf_opcode_radio_state: WLAN_INTF_OPCODE = 4;
pub const wlan_intf_opcode_bss_type: WLAN_INTF_OPCODE = 5;
pub const wlan_intf_opcode_interface_state: WLAN_INTF_OPCODE = 6;
pub const wlan_intf_opcode_current_connection: WLAN_INTF_OPCODE = 7;
pub const wlan_intf_opcode_channel_number: WLAN_INTF_OPCODE = 8;
pub const wlan_intf_opcode_supported_infrastructure_auth_cipher_pairs: WLAN_INTF_OPCODE = 9;
pub const wlan_intf_opcode_supported_adhoc_auth_cipher_pairs: WLAN_INTF_OPCODE = 10;
pub const wlan_intf_opcode_supported_country_or_region_string_list: WLAN_INTF_OPCODE = 11;
pub const wlan_intf_opcode_current_operation_mode: WLAN_INTF_OPCODE = 12;
pub const wlan_intf_opcode_supported_safe_mode: WLAN_INTF_OPCODE = 13;
pub const wlan_intf_opcode_certified_safe_mode: WLAN_INTF_OPCODE = 14;
pub const wlan_intf_opcode_hosted_network_capable: WLAN_INTF_OPCODE = 15;
pub const wlan_intf_opcode_management_frame_protection_capable: WLAN_INTF_OPCODE = 16;
pub const wlan_intf_opcode_autoconf_end: WLAN_INTF_OPCODE = 0x0fff_ffff;
pub const wlan_intf_opcode_msm_start: WLAN_INTF_OPCODE = 0x1000_0100;
pub const wlan_intf_opcode_statistics: WLAN_INTF_OPCODE = 0x1000_0101;
pub const wlan_intf_opcode_rssi: WLAN_INTF_OPCODE = 0x1000_0102;
pub const wlan_intf_opcode_msm_end: WLAN_INTF_OPCODE = 0x1fff_ffff;
pub const wlan_intf_opcode_security_start: WLAN_INTF_OPCODE = 0x2001_0000;
pub const wlan_intf_opcode_security_end: WLAN_INTF_OPCODE = 0x2fff_ffff;
pub const wlan_intf_opcode_ihv_start: WLAN_INTF_OPCODE = 0x3000_0000;
pub const wlan_intf_opcode_ihv_end: WLAN_INTF_OPCODE = 0x3fff_ffff;

pub type WLAN_AUTOCONF_OPCODE = u32;
pub const wlan_autoconf_opcode_start: WLAN_AUTOCONF_OPCODE = 0;
pub const wlan_autoconf_opcode_show_denied_networks: WLAN_AUTOCONF_OPCODE = 1;
pub const wlan_autoconf_opcode_power_setting: WLAN_AUTOCONF_OPCODE = 2;
pub const wlan_autoconf_opcode_only_use_gp_profiles_for_allowed_networks: WLAN_AUTOCONF_OPCODE = 3;
pub const wlan_autoconf_opcode_allow_explicit_creds: WLAN_AUTOCONF_OPCODE = 4;
pub const wlan_autoconf_opcode_block_period: WLAN_AUTOCONF_OPCODE = 5;
pub const wlan_autoconf_opcode_allow_virtual_station_extensibility: WLAN_AUTOCONF_OPCODE = 6;
pub const wlan_autoconf_opcode_end: WLAN_AUTOCONF_OPCODE = 7;

pub type WLAN_OPCODE_VALUE_TYPE = u32;
pub const wlan_opcode_value_type_query_only: WLAN_OPCODE_VALUE_TYPE = 0;
pub const wlan_opcode_value_type_set_by_group_policy: WLAN_OPCODE_VALUE_TYPE = 1;
pub const wlan_opcode_value_type_set_by_user: WLAN_OPCODE_VALUE_TYPE = 2;
pub const wlan_opcode_value_type_invalid: WLAN_OPCODE_VALUE_TYPE = 3;

pub type WLAN_HOSTED_NETWORK_OPCODE = u32;
pub const wlan_hosted_network_opcode_connection_settings: WLAN_HOSTED_NETWORK_OPCODE = 0;
pub const wlan_hosted_network_opcode_security_settings: WLAN_HOSTED_NETWORK_OPCODE = 1;
pub const wlan_hosted_network_opcode_station_profile: WLAN_HOSTED_NETWORK_OPCODE = 2;
pub const wlan_hosted_network_opcode_enable: WLAN_HOSTED_NETWORK_OPCODE = 3;

pub type WLAN_HOSTED_NETWORK_STATE = u32;
pub const wlan_hosted_network_unavailable: WLAN_HOSTED_NETWORK_STATE = 0;
pub const wlan_hosted_network_idle: WLAN_HOSTED_NETWORK_STATE = 1;
pub const wlan_hosted_network_active: WLAN_HOSTED_NETWORK_STATE = 2;

pub type WLAN_HOSTED_NETWORK_PEER_AUTH_STATE = u32;
pub const wlan_hosted_network_peer_state_invalid: WLAN_HOSTED_NETWORK_PEER_AUTH_STATE = 0;
pub const wlan_hosted_network_peer_state_authenticated: WLAN_HOSTED_NETWORK_PEER_AUTH_STATE = 1;

pub type WLAN_HOSTED_NETWORK_REASON = u32;
pub const wlan_hosted_network_reason_success: WLAN_HOSTED_NETWORK_REASON = 0;
pub const wlan_hosted_network_reason_unspecified: WLAN_HOSTED_NETWORK_REASON = 1;
pub const wlan_hosted_network_reason_bad_parameters: WLAN_HOSTED_NETWORK_REASON = 2;
pub const wlan_hosted_network_reason_service_shutting_down: WLAN_HOSTED_NETWORK_REASON = 3;
pub const wlan_hosted_network_reason_insufficient_resources: WLAN_HOSTED_NETWORK_REASON = 4;
pub const wlan_hosted_network_reason_elevation_required: WLAN_HOSTED_NETWORK_REASON = 5;
pub const wlan_hosted_network_reason_read_only: WLAN_HOSTED_NETWORK_REASON = 6;
pub const wlan_hosted_network_reason_persistence_failed: WLAN_HOSTED_NETWORK_REASON = 7;
pub const wlan_hosted_network_reason_crypt_error: WLAN_HOSTED_NETWORK_REASON = 8;
pub const wlan_hosted_network_reason_impersonation: WLAN_HOSTED_NETWORK_REASON = 9;
pub const wlan_hosted_network_reason_stop_before_start: WLAN_HOSTED_NETWORK_REASON = 10;
pub const wlan_hosted_network_reason_interface_available: WLAN_HOSTED_NETWORK_REASON = 11;
pub const wlan_hosted_network_reason_interface_unavailable: WLAN_HOSTED_NETWORK_REASON = 12;
pub const wlan_hosted_network_reason_miniport_stopped: WLAN_HOSTED_NETWORK_REASON = 13;
pub const wlan_hosted_network_reason_miniport_started: WLAN_HOSTED_NETWORK_REASON = 14;
pub const wlan_hosted_network_reason_incompatible_connection_started: WLAN_HOSTED_NETWORK_REASON =
    15;
pub const wlan_hosted_network_reason_incompatible_connection_stopped: WLAN_HOSTED_NETWORK_REASON =
    16;
pub const wlan_hosted_network_reason_user_action: WLAN_HOSTED_NETWORK_REASON = 17;
pub const wlan_hosted_network_reason_client_abort: WLAN_HOSTED_NETWORK_REASON = 18;
pub const wlan_hosted_network_reason_ap_start_failed: WLAN_HOSTED_NETWORK_REASON = 19;
pub const wlan_hosted_network_reason_peer_arrived: WLAN_HOSTED_NETWORK_REASON = 20;
pub const wlan_hosted_network_reason_peer_departed: WLAN_HOSTED_NETWORK_REASON = 21;
pub const wlan_hosted_network_reason_peer_timeout: WLAN_HOSTED_NETWORK_REASON = 22;
pub const wlan_hosted_network_reason_gp_denied: WLAN_HOSTED_NETWORK_REASON = 23;
pub const wlan_hosted_network_reason_service_unavailable: WLAN_HOSTED_NETWORK_REASON = 24;
pub const wlan_hosted_network_reason_device_change: WLAN_HOSTED_NETWORK_REASON = 25;
pub const wlan_hosted_network_reason_properties_change: WLAN_HOSTED_NETWORK_REASON = 26;
pub const wlan_hosted_network_reason_virtual_station_blocking_use: WLAN_HOSTED_NETWORK_REASON = 27;
pub const wlan_hosted_network_reason_service_available_on_virtual_station:
    WLAN_HOSTED_NETWORK_REASON = 28;

pub type WLAN_HOSTED_NETWORK_NOTIFICATION_CODE = u32;
pub const wlan_hosted_network_state_change: WLAN_HOSTED_NETWORK_NOTIFICATION_CODE = 0x0000_1000;
pub const wlan_hosted_network_peer_state_change: WLAN_HOSTED_NETWORK_NOTIFICATION_CODE =
    0x0000_1001;
pub const wlan_hosted_network_radio_state_change: WLAN_HOSTED_NETWORK_NOTIFICATION_CODE =
    0x0000_1002;

pub type WFD_DISPLAY_SINK_NOTIFICATION_TYPE = u32;
pub const ProvisioningRequestNotification: WFD_DISPLAY_SINK_NOTIFICATION_TYPE = 0;
pub const ReconnectRequestNotification: WFD_DISPLAY_SINK_NOTIFICATION_TYPE = 1;
pub const ConnectedNotification: WFD_DISPLAY_SINK_NOTIFICATION_TYPE = 2;
pub const DisconnectedNotification: WFD_DISPLAY_SINK_NOTIFICATION_TYPE = 3;

pub type WL_DISPLAY_PAGES = u32;
pub const WLConnectionPage: WL_DISPLAY_PAGES = 0;
pub const WLSecurityPage: WL_DISPLAY_PAGES = 1;
pub const WLAdvPage: WL_DISPLAY_PAGES = 2;

// Notification sources
pub const WLAN_NOTIFICATION_SOURCE_NONE: DWORD = 0;
pub const WLAN_NOTIFICATION_SOURCE_ONEX: DWORD = 0x0000_0004;
pub const WLAN_NOTIFICATION_SOURCE_ACM: DWORD = 0x0000_0008;
pub const WLAN_NOTIFICATION_SOURCE_MSM: DWORD = 0x0000_0010;
pub const WLAN_NOTIFICATION_SOURCE_SECURITY: DWORD = 0x0000_0020;
pub const WLAN_NOTIFICATION_SOURCE_IHV: DWORD = 0x0000_0040;
pub const WLAN_NOTIFICATION_SOURCE_HNWK: DWORD = 0x0000_0080;
pub const WLAN_NOTIFICATION_SOURCE_ALL: DWORD = 0x0000_ffff;

// ACM notification codes
pub const wlan_notification_acm_autoconf_enabled: DWORD = 1;
pub const wlan_notification_acm_autoconf_disabled: DWORD = 2;
pub const wlan_notification_acm_background_scan_enabled: DWORD = 3;
pub const wlan_notification_acm_background_scan_disabled: DWORD = 4;
pub const wlan_notification_acm_bss_type_change: DWORD = 5;
pub const wlan_notification_acm_power_setting_change: DWORD = 6;
pub const wlan_notification_acm_scan_complete: DWORD = 7;
pub const wlan_notification_acm_scan_fail: DWORD = 8;
pub const wlan_notification_acm_connection_start: DWORD = 9;
pub const wlan_notification_acm_connection_complete: DWORD = 10;
pub const wlan_notification_acm_connection_attempt_fail: DWORD = 11;
pub const wlan_notification_acm_filter_list_change: DWORD = 12;
pub const wlan_notification_acm_interface_arrival: DWORD = 13;
pub const wlan_notification_acm_interface_removal: DWORD = 14;
pub const wlan_notification_acm_profile_change: DWORD = 15;
pub const wlan_notification_acm_profile_name_change: DWORD = 16;
pub const wlan_notification_acm_profiles_exhausted: DWORD = 17;
pub const wlan_notification_acm_network_not_available: DWORD = 18;
pub const wlan_notification_acm_network_available: DWORD = 19;
pub const wlan_notification_acm_disconnecting: DWORD = 20;
pub const wlan_notification_acm_disconnected: DWORD = 21;
pub const wlan_notification_acm_adhoc_network_state_change: DWORD = 22;
pub const wlan_notification_acm_profile_unblocked: DWORD = 23;
pub const wlan_notification_acm_screen_power_change: DWORD = 24;
pub const wlan_notification_acm_profile_blocked: DWORD = 25;
pub const wlan_notification_acm_scan_list_refresh: DWORD = 26;
pub const wlan_notification_acm_operational_state_change: DWORD = 27;

// Flags
pub const WLAN_AVAILABLE_NETWORK_INCLUDE_ALL_ADHOC_PROFILES: DWORD = 0x0000_0001;
pub const WLAN_AVAILABLE_NETWORK_INCLUDE_ALL_MANUAL_HIDDEN_PROFILES: DWORD = 0x0000_0002;
pub const WLAN_AVAILABLE_NETWORK_CONNECTED: DWORD = 0x0000_0001;
pub const WLAN_AVAILABLE_NETWORK_HAS_PROFILE: DWORD = 0x0000_0002;
pub const WLAN_AVAILABLE_NETWORK_CONSOLE_USER_PROFILE: DWORD = 0x0000_0004;
pub const WLAN_AVAILABLE_NETWORK_INTERWORKING_SUPPORTED: DWORD = 0x0000_0008;
pub const WLAN_AVAILABLE_NETWORK_HOTSPOT2_ENABLED: DWORD = 0x0000_0010;
pub const WLAN_AVAILABLE_NETWORK_ANQP_SUPPORTED: DWORD = 0x0000_0020;
pub const WLAN_AVAILABLE_NETWORK_HOTSPOT2_DOMAIN: DWORD = 0x0000_0040;
pub const WLAN_AVAILABLE_NETWORK_HOTSPOT2_ROAMING: DWORD = 0x0000_0080;
pub const WLAN_AVAILABLE_NETWORK_AUTO_CONNECT_FAILED: DWORD = 0x0000_0100;

pub const WLAN_PROFILE_GROUP_POLICY: DWORD = 0x0000_0001;
pub const WLAN_PROFILE_USER: DWORD = 0x0000_0002;
pub const WLAN_PROFILE_GET_PLAINTEXT_KEY: DWORD = 0x0000_0004;

pub const WLAN_CONNECTION_HIDDEN_NETWORK: DWORD = 0x0000_0001;
pub const WLAN_CONNECTION_ADHOC_JOIN_ONLY: DWORD = 0x0000_0002;
pub const WLAN_CONNECTION_IGNORE_PRIVACY_BIT: DWORD = 0x0000_0004;
pub const WLAN_CONNECTION_EAPOL_PASSTHROUGH: DWORD = 0x0000_0008;
pub const WLAN_CONNECTION_PERSIST_DISCOVERY_PROFILE: DWORD = 0x0000_0010;

pub const WLAN_SET_EAPHOST_DATA_ALL_USERS: DWORD = 0x0000_0001;

pub const WLAN_READ_ACCESS: DWORD = 0x0002_0000 | 0x0000_0001;
pub const WLAN_EXECUTE_ACCESS: DWORD = WLAN_READ_ACCESS | 0x0000_0020;
pub const WLAN_WRITE_ACCESS: DWORD = WLAN_READ_ACCESS | WLAN_EXECUTE_ACCESS | 0x0000_0002 | 0x0001_0000 | 0x0004_0000;

// ---------------------------------------------------------------------------
// wlanapi.h: structures
// ---------------------------------------------------------------------------

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_INTERFACE_INFO {
    pub InterfaceGuid: GUID,
    pub strInterfaceDescription: [WCHAR; WLAN_MAX_NAME_LENGTH],
    pub isState: WLAN_INTERFACE_STATE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_INTERFACE_INFO_LIST {
    pub dwNumberOfItems: DWORD,
    pub dwIndex: DWORD,
    pub InterfaceInfo: [WLAN_INTERFACE_INFO; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_AVAILABLE_NETWORK {
    pub strProfileName: [WCHAR; WLAN_MAX_NAME_LENGTH],
    pub dot11Ssid: DOT11_SSID,
    pub dot11BssType: DOT11_BSS_TYPE,
    pub uNumberOfBssids: u32,
    pub bNetworkConnectable: BOOL,
    pub wlanNotConnectableReason: u32,
    pub uNumberOfPhyTypes: u32,
    pub dot11PhyTypes: [DOT11_PHY_TYPE; WLAN_MAX_PHY_TYPE_NUMBER],
    pub bMorePhyTypes: BOOL,
    pub wlanSignalQuality: u32,
    pub bSecurityEnabled: BOOL,
    pub dot11DefaultAuthAlgorithm: DOT11_AUTH_ALGORITHM,
    pub dot11DefaultCipherAlgorithm: DOT11_CIPHER_ALGORITHM,
    pub dwFlags: DWORD,
    pub dwReserved: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_AVAILABLE_NETWORK_LIST {
    pub dwNumberOfItems: DWORD,
    pub dwIndex: DWORD,
    pub Network: [WLAN_AVAILABLE_NETWORK; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_RATE_SET {
    pub uRateSetLength: u32,
    pub usRateSet: [u16; DOT11_RATE_SET_MAX_LENGTH],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_BSS_ENTRY {
    pub dot11Ssid: DOT11_SSID,
    pub uPhyId: u32,
    pub dot11Bssid: DOT11_MAC_ADDRESS,
    pub dot11BssType: DOT11_BSS_TYPE,
    pub dot11BssPhyType: DOT11_PHY_TYPE,
    pub lRssi: i32,
    pub uLinkQuality: u32,
    pub bInRegDomain: BOOLEAN,
    pub usBeaconPeriod: u16,
    pub ullTimestamp: u64,
    pub ullHostTimestamp: u64,
    pub usCapabilityInformation: u16,
    pub ulChCenterFrequency: u32,
    pub wlanRateSet: WLAN_RATE_SET,
    pub ulIeOffset: u32,
    pub ulIeSize: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_BSS_LIST {
    pub dwTotalSize: DWORD,
    pub dwNumberOfItems: DWORD,
    pub wlanBssEntries: [WLAN_BSS_ENTRY; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_PROFILE_INFO {
    pub strProfileName: [WCHAR; WLAN_MAX_NAME_LENGTH],
    pub dwFlags: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_PROFILE_INFO_LIST {
    pub dwNumberOfItems: DWORD,
    pub dwIndex: DWORD,
    pub ProfileInfo: [WLAN_PROFILE_INFO; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_RAW_DATA {
    pub dwDataSize: DWORD,
    pub DataBlob: [u8; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_CONNECTION_PARAMETERS {
    pub wlanConnectionMode: WLAN_CONNECTION_MODE,
    pub strProfile: *const WCHAR,
    pub pDot11Ssid: *const DOT11_SSID,
    pub pDesiredBssidList: *const DOT11_BSSID_LIST,
    pub dot11BssType: DOT11_BSS_TYPE,
    pub dwFlags: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_ASSOCIATION_ATTRIBUTES {
    pub dot11Ssid: DOT11_SSID,
    pub dot11BssType: DOT11_BSS_TYPE,
    pub dot11Bssid: DOT11_MAC_ADDRESS,
    pub dot11PhyType: DOT11_PHY_TYPE,
    pub uDot11PhyIndex: u32,
    pub wlanSignalQuality: u32,
    pub ulRxRate: u32,
    pub ulTxRate: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_SECURITY_ATTRIBUTES {
    pub bSecurityEnabled: BOOL,
    pub bOneXEnabled: BOOL,
    pub dot11AuthAlgorithm: DOT11_AUTH_ALGORITHM,
    pub dot11CipherAlgorithm: DOT11_CIPHER_ALGORITHM,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_CONNECTION_ATTRIBUTES {
    pub isState: WLAN_INTERFACE_STATE,
    pub wlanConnectionMode: WLAN_CONNECTION_MODE,
    pub strProfileName: [WCHAR; WLAN_MAX_NAME_LENGTH],
    pub wlanAssociationAttributes: WLAN_ASSOCIATION_ATTRIBUTES,
    pub wlanSecurityAttributes: WLAN_SECURITY_ATTRIBUTES,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_INTERFACE_CAPABILITY {
    pub interfaceType: WLAN_INTERFACE_TYPE,
    pub bDot11DSupported: BOOL,
    pub dwMaxDesiredSsidListSize: DWORD,
    pub dwMaxDesiredBssidListSize: DWORD,
    pub dwNumberOfSupportedPhys: DWORD,
    pub dot11PhyTypes: [DOT11_PHY_TYPE; WLAN_MAX_PHY_INDEX],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WLAN_PHY_RADIO_STATE {
    pub dwPhyIndex: DWORD,
    pub dot11SoftwareRadioState: DOT11_RADIO_STATE,
    pub dot11HardwareRadioState: DOT11_RADIO_STATE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_RADIO_STATE {
    pub dwNumberOfPhys: DWORD,
    pub PhyRadioState: [WLAN_PHY_RADIO_STATE; WLAN_MAX_PHY_INDEX],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_NOTIFICATION_DATA {
    pub NotificationSource: DWORD,
    pub NotificationCode: DWORD,
    pub InterfaceGuid: GUID,
    pub dwDataSize: DWORD,
    pub pData: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_CONNECTION_NOTIFICATION_DATA {
    pub wlanConnectionMode: WLAN_CONNECTION_MODE,
    pub strProfileName: [WCHAR; WLAN_MAX_NAME_LENGTH],
    pub dot11Ssid: DOT11_SSID,
    pub dot11BssType: DOT11_BSS_TYPE,
    pub bSecurityEnabled: BOOL,
    pub wlanReasonCode: u32,
    pub dwFlags: DWORD,
    pub strProfileXml: [WCHAR; 1],
}

// Hosted network

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS {
    pub hostedNetworkSSID: DOT11_SSID,
    pub dwMaxNumberOfPeers: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_SECURITY_SETTINGS {
    pub dot11AuthAlgo: DOT11_AUTH_ALGORITHM,
    pub dot11CipherAlgo: DOT11_CIPHER_ALGORITHM,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_PEER_STATE {
    pub PeerMacAddress: DOT11_MAC_ADDRESS,
    pub PeerAuthState: WLAN_HOSTED_NETWORK_PEER_AUTH_STATE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_STATUS {
    pub HostedNetworkState: WLAN_HOSTED_NETWORK_STATE,
    pub IPDeviceID: GUID,
    pub wlanHostedNetworkBSSID: DOT11_MAC_ADDRESS,
    pub dot11PhyType: DOT11_PHY_TYPE,
    pub ulChannelFrequency: u32,
    pub dwNumberOfPeers: DWORD,
    pub PeerList: [WLAN_HOSTED_NETWORK_PEER_STATE; 1],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_RADIO_STATE {
    pub dot11SoftwareRadioState: DOT11_RADIO_STATE,
    pub dot11HardwareRadioState: DOT11_RADIO_STATE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_STATE_CHANGE {
    pub OldState: WLAN_HOSTED_NETWORK_STATE,
    pub NewState: WLAN_HOSTED_NETWORK_STATE,
    pub StateChangeReason: WLAN_HOSTED_NETWORK_REASON,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WLAN_HOSTED_NETWORK_DATA_PEER_STATE_CHANGE {
    pub OldState: WLAN_HOSTED_NETWORK_PEER_STATE,
    pub NewState: WLAN_HOSTED_NETWORK_PEER_STATE,
    pub PeerStateChangeReason: WLAN_HOSTED_NETWORK_REASON,
}

// eaptypes.h

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EAP_TYPE {
    pub r#type: u8,
    pub dwVendorId: DWORD,
    pub dwVendorType: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EAP_METHOD_TYPE {
    pub eapType: EAP_TYPE,
    pub dwAuthorId: DWORD,
}

// ---------------------------------------------------------------------------
// Entry-point signatures, in the order documented on Microsoft Learn
// ---------------------------------------------------------------------------

pub type WLAN_NOTIFICATION_CALLBACK =
    Option<unsafe extern "system" fn(data: *mut WLAN_NOTIFICATION_DATA, context: *mut c_void)>;

pub type WlanOpenHandleFn = unsafe extern "system" fn(
    dwClientVersion: DWORD,
    pReserved: *mut c_void,
    pdwNegotiatedVersion: *mut DWORD,
    phClientHandle: *mut HANDLE,
) -> DWORD;

pub type WlanCloseHandleFn =
    unsafe extern "system" fn(hClientHandle: HANDLE, pReserved: *mut c_void) -> DWORD;

pub type WlanFreeMemoryFn = unsafe extern "system" fn(pMemory: *mut c_void);

pub type WlanEnumInterfacesFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pReserved: *mut c_void,
    ppInterfaceList: *mut *mut WLAN_INTERFACE_INFO_LIST,
) -> DWORD;

pub type WlanScanFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pDot11Ssid: *const DOT11_SSID,
    pIeData: *const WLAN_RAW_DATA,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetAvailableNetworkListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    dwFlags: DWORD,
    pReserved: *mut c_void,
    ppAvailableNetworkList: *mut *mut WLAN_AVAILABLE_NETWORK_LIST,
) -> DWORD;

pub type WlanGetNetworkBssListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pDot11Ssid: *const DOT11_SSID,
    dot11BssType: DOT11_BSS_TYPE,
    bSecurityEnabled: BOOL,
    pReserved: *mut c_void,
    ppWlanBssList: *mut *mut WLAN_BSS_LIST,
) -> DWORD;

pub type WlanConnectFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pConnectionParameters: *const WLAN_CONNECTION_PARAMETERS,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanDisconnectFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanQueryInterfaceFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    OpCode: WLAN_INTF_OPCODE,
    pReserved: *mut c_void,
    pdwDataSize: *mut DWORD,
    ppData: *mut *mut c_void,
    pWlanOpcodeValueType: *mut WLAN_OPCODE_VALUE_TYPE,
) -> DWORD;

pub type WlanSetInterfaceFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    OpCode: WLAN_INTF_OPCODE,
    dwDataSize: DWORD,
    pData: *const c_void,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetInterfaceCapabilityFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pReserved: *mut c_void,
    ppCapability: *mut *mut WLAN_INTERFACE_CAPABILITY,
) -> DWORD;

pub type WlanQueryAutoConfigParameterFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    OpCode: WLAN_AUTOCONF_OPCODE,
    pReserved: *mut c_void,
    pdwDataSize: *mut DWORD,
    ppData: *mut *mut c_void,
    pWlanOpcodeValueType: *mut WLAN_OPCODE_VALUE_TYPE,
) -> DWORD;

pub type WlanSetAutoConfigParameterFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    OpCode: WLAN_AUTOCONF_OPCODE,
    dwDataSize: DWORD,
    pData: *const c_void,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanReasonCodeToStringFn = unsafe extern "system" fn(
    dwReasonCode: DWORD,
    dwBufferSize: DWORD,
    pStringBuffer: *mut WCHAR,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanRegisterNotificationFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    dwNotifSource: DWORD,
    bIgnoreDuplicate: BOOL,
    funcCallback: WLAN_NOTIFICATION_CALLBACK,
    pCallbackContext: *mut c_void,
    pReserved: *mut c_void,
    pdwPrevNotifSource: *mut DWORD,
) -> DWORD;

pub type WlanGetProfileFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    pReserved: *mut c_void,
    pstrProfileXml: *mut *mut WCHAR,
    pdwFlags: *mut DWORD,
    pdwGrantedAccess: *mut DWORD,
) -> DWORD;

pub type WlanSetProfileFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    dwFlags: DWORD,
    strProfileXml: *const WCHAR,
    strAllUserProfileSecurity: *const WCHAR,
    bOverwrite: BOOL,
    pReserved: *mut c_void,
    pdwReasonCode: *mut DWORD,
) -> DWORD;

pub type WlanDeleteProfileFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanRenameProfileFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strOldProfileName: *const WCHAR,
    strNewProfileName: *const WCHAR,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetProfileListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    pReserved: *mut c_void,
    ppProfileList: *mut *mut WLAN_PROFILE_INFO_LIST,
) -> DWORD;

pub type WlanSetProfileListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    dwItems: DWORD,
    strProfileNames: *const *const WCHAR,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanSetProfilePositionFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    dwPosition: DWORD,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetProfileCustomUserDataFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    pReserved: *mut c_void,
    pdwDataSize: *mut DWORD,
    ppData: *mut *mut u8,
) -> DWORD;

pub type WlanSetProfileCustomUserDataFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    dwDataSize: DWORD,
    pData: *const u8,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanSetProfileEapUserDataFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    eapType: EAP_METHOD_TYPE,
    dwFlags: DWORD,
    dwEapUserDataSize: DWORD,
    pbEapUserData: *const u8,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanSetProfileEapXmlUserDataFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    dwFlags: DWORD,
    strEapXmlUserData: *const WCHAR,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanSaveTemporaryProfileFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pInterfaceGuid: *const GUID,
    strProfileName: *const WCHAR,
    strAllUserProfileSecurity: *const WCHAR,
    dwFlags: DWORD,
    bOverWrite: BOOL,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetFilterListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    wlanFilterListType: WLAN_FILTER_LIST_TYPE,
    pReserved: *mut c_void,
    ppNetworkList: *mut *mut DOT11_NETWORK_LIST,
) -> DWORD;

pub type WlanSetFilterListFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    wlanFilterListType: WLAN_FILTER_LIST_TYPE,
    pNetworkList: *const DOT11_NETWORK_LIST,
    pReserved: *mut c_void,
) -> DWORD;

pub type WlanGetSecuritySettingsFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    SecurableObject: WLAN_SECURABLE_OBJECT,
    pValueType: *mut WLAN_OPCODE_VALUE_TYPE,
    pstrCurrentSDDL: *mut *mut WCHAR,
    pdwGrantedAccess: *mut DWORD,
) -> DWORD;

pub type WlanSetSecuritySettingsFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    SecurableObject: WLAN_SECURABLE_OBJECT,
    strModifiedSDDL: *const WCHAR,
) -> DWORD;

/// Shared shape of StartUsing, StopUsing, ForceStart, ForceStop, InitSettings
/// and RefreshSecuritySettings
pub type WlanHostedNetworkActionFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pFailReason: *mut WLAN_HOSTED_NETWORK_REASON,
    pvReserved: *mut c_void,
) -> DWORD;

pub type WlanHostedNetworkQueryPropertyFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    OpCode: WLAN_HOSTED_NETWORK_OPCODE,
    pdwDataSize: *mut DWORD,
    ppvData: *mut *mut c_void,
    pWlanOpcodeValueType: *mut WLAN_OPCODE_VALUE_TYPE,
    pvReserved: *mut c_void,
) -> DWORD;

pub type WlanHostedNetworkSetPropertyFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    OpCode: WLAN_HOSTED_NETWORK_OPCODE,
    dwDataSize: DWORD,
    pvData: *const c_void,
    pFailReason: *mut WLAN_HOSTED_NETWORK_REASON,
    pvReserved: *mut c_void,
) -> DWORD;

pub type WlanHostedNetworkQueryStatusFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    ppWlanHostedNetworkStatus: *mut *mut WLAN_HOSTED_NETWORK_STATUS,
    pvReserved: *mut c_void,
) -> DWORD;

pub type WlanHostedNetworkSetSecondaryKeyFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    dwKeyLength: DWORD,
    pucKeyData: *const u8,
    bIsPassPhrase: BOOL,
    bPersistent: BOOL,
    pFailReason: *mut WLAN_HOSTED_NETWORK_REASON,
    pvReserved: *mut c_void,
) -> DWORD;

pub type WlanHostedNetworkQuerySecondaryKeyFn = unsafe extern "system" fn(
    hClientHandle: HANDLE,
    pdwKeyLength: *mut DWORD,
    ppucKeyData: *mut *mut u8,
    pbIsPassPhrase: *mut BOOL,
    pbPersistent: *mut BOOL,
    pFailReason: *mut WLAN_HOSTED_NETWORK_REASON,
    pvReserved: *mut c_void,
) -> DWORD;
