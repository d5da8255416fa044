//! Owned, safe copies of the records the Native WiFi API returns.

use std::fmt;
use std::str::FromStr;

use crate::config::{DOT11_SSID_MAX_LENGTH, WLAN_MAX_PHY_INDEX, WLAN_MAX_PHY_TYPE_NUMBER};
use crate::error::{WlanError, WlanResult};
use crate::wlan::sys;
use crate::wlan::wide::from_wide;

/// 128-bit interface identifier in native `GUID` layout
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Guid(sys::GUID);

impl Guid {
    pub const fn from_fields(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self(sys::GUID {
            Data1: data1,
            Data2: data2,
            Data3: data3,
            Data4: data4,
        })
    }

    pub const fn from_u128(value: u128) -> Self {
        Self::from_fields(
            (value >> 96) as u32,
            ((value >> 80) & 0xffff) as u16,
            ((value >> 64) & 0xffff) as u16,
            (value as u64).to_be_bytes(),
        )
    }

    pub fn to_u128(&self) -> u128 {
        (u128::from(self.0.Data1) << 96)
            | (u128::from(self.0.Data2) << 80)
            | (u128::from(self.0.Data3) << 64)
            | u128::from(u64::from_be_bytes(self.0.Data4))
    }

    pub fn as_raw(&self) -> *const sys::GUID {
        &self.0
    }

    pub fn to_native(&self) -> sys::GUID {
        self.0
    }
}

impl From<sys::GUID> for Guid {
    fn from(guid: sys::GUID) -> Self {
        Self(guid)
    }
}

#[cfg(windows)]
impl From<windows::core::GUID> for Guid {
    fn from(guid: windows::core::GUID) -> Self {
        Self::from_fields(guid.data1, guid.data2, guid.data3, guid.data4)
    }
}

#[cfg(windows)]
impl From<Guid> for windows::core::GUID {
    fn from(guid: Guid) -> Self {
        windows::core::GUID::from_values(guid.0.Data1, guid.0.Data2, guid.0.Data3, guid.0.Data4)
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.0.Data4;
        write!(
            f,
            "{{{:08X}-{:04X}-{:04X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}}}",
            self.0.Data1, self.0.Data2, self.0.Data3, d[0], d[1], d[2], d[3], d[4], d[5], d[6], d[7]
        )
    }
}

impl FromStr for Guid {
    type Err = WlanError;

    /// Parse `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`, braces optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WlanError::Encoding {
            operation: "Guid::from_str",
            detail: format!("{s:?} is not a GUID"),
        };
        let trimmed = s.trim().trim_start_matches('{').trim_end_matches('}');
        let groups: Vec<&str> = trimmed.split('-').collect();
        let lengths = [8, 4, 4, 4, 12];
        if groups.len() != lengths.len()
            || groups.iter().zip(lengths).any(|(g, len)| g.len() != len)
            || !groups.iter().all(|g| g.bytes().all(|b| b.is_ascii_hexdigit()))
        {
            return Err(invalid());
        }
        let hex: String = groups.concat();
        u128::from_str_radix(&hex, 16)
            .map(Guid::from_u128)
            .map_err(|_| invalid())
    }
}

/// Network name, at most 32 raw bytes (not necessarily UTF-8)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Ssid(Vec<u8>);

impl Ssid {
    pub fn new(bytes: impl Into<Vec<u8>>) -> WlanResult<Self> {
        let bytes = bytes.into();
        if bytes.len() > DOT11_SSID_MAX_LENGTH {
            return Err(WlanError::Encoding {
                operation: "DOT11_SSID",
                detail: format!(
                    "SSID is {} bytes, at most {DOT11_SSID_MAX_LENGTH} are allowed",
                    bytes.len()
                ),
            });
        }
        Ok(Self(bytes))
    }

    pub fn from_native(ssid: &sys::DOT11_SSID) -> WlanResult<Self> {
        let len = ssid.uSSIDLength as usize;
        if len > DOT11_SSID_MAX_LENGTH {
            return Err(WlanError::CapacityExceeded {
                what: "DOT11_SSID",
                count: len,
                capacity: DOT11_SSID_MAX_LENGTH,
            });
        }
        Ok(Self(ssid.ucSSID[..len].to_vec()))
    }

    pub fn to_native(&self) -> sys::DOT11_SSID {
        let mut native = sys::DOT11_SSID {
            uSSIDLength: self.0.len() as u32,
            ucSSID: [0; DOT11_SSID_MAX_LENGTH],
        };
        native.ucSSID[..self.0.len()].copy_from_slice(&self.0);
        native
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Ssid {
    type Err = WlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ssid::new(s.as_bytes())
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = WlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WlanError::Encoding {
            operation: "MacAddress::from_str",
            detail: format!("{s:?} is not a MAC address"),
        };
        let mut bytes = [0u8; 6];
        let mut parts = s.split([':', '-']);
        for byte in &mut bytes {
            let part = parts.next().ok_or_else(invalid)?;
            if part.len() != 2 {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Self(bytes))
    }
}

/// Define a `u32`-backed native enumeration with a catch-all `Other` variant.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $value:path => $label:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(u32),
        }

        impl $name {
            pub fn from_raw(value: u32) -> Self {
                match value {
                    $(v if v == $value => $name::$variant,)+
                    other => $name::Other(other),
                }
            }

            pub fn to_raw(self) -> u32 {
                match self {
                    $($name::$variant => $value,)+
                    $name::Other(value) => value,
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Other(_) => "Unknown",
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $name::Other(value) => write!(f, "Unknown ({value})"),
                    known => f.write_str(known.label()),
                }
            }
        }
    };
}

native_enum! {
    /// State of a wireless interface
    InterfaceState {
        NotReady = sys::wlan_interface_state_not_ready => "Not Ready",
        Connected = sys::wlan_interface_state_connected => "Connected",
        AdHocNetworkFormed = sys::wlan_interface_state_ad_hoc_network_formed => "Ad-hoc Network Formed",
        Disconnecting = sys::wlan_interface_state_disconnecting => "Disconnecting",
        Disconnected = sys::wlan_interface_state_disconnected => "Disconnected",
        Associating = sys::wlan_interface_state_associating => "Associating",
        Discovering = sys::wlan_interface_state_discovering => "Discovering",
        Authenticating = sys::wlan_interface_state_authenticating => "Authenticating",
    }
}

native_enum! {
    InterfaceType {
        Emulated = sys::wlan_interface_type_emulated_802_11 => "Emulated 802.11",
        Native = sys::wlan_interface_type_native_802_11 => "Native 802.11",
        Invalid = sys::wlan_interface_type_invalid => "Invalid",
    }
}

native_enum! {
    BssType {
        Infrastructure = sys::dot11_BSS_type_infrastructure => "Infrastructure",
        Independent = sys::dot11_BSS_type_independent => "Ad-hoc",
        Any = sys::dot11_BSS_type_any => "Any",
    }
}

native_enum! {
    AuthAlgorithm {
        Open = sys::DOT11_AUTH_ALGO_80211_OPEN => "Open",
        SharedKey = sys::DOT11_AUTH_ALGO_80211_SHARED_KEY => "Shared",
        Wpa = sys::DOT11_AUTH_ALGO_WPA => "WPA",
        WpaPsk = sys::DOT11_AUTH_ALGO_WPA_PSK => "WPA-PSK",
        WpaNone = sys::DOT11_AUTH_ALGO_WPA_NONE => "WPA-None",
        Rsna = sys::DOT11_AUTH_ALGO_RSNA => "WPA2",
        RsnaPsk = sys::DOT11_AUTH_ALGO_RSNA_PSK => "WPA2-PSK",
        Wpa3 = sys::DOT11_AUTH_ALGO_WPA3 => "WPA3",
        Wpa3Sae = sys::DOT11_AUTH_ALGO_WPA3_SAE => "WPA3-SAE",
        Owe = sys::DOT11_AUTH_ALGO_OWE => "OWE",
        Wpa3Enterprise = sys::DOT11_AUTH_ALGO_WPA3_ENT => "WPA3-Enterprise",
    }
}

native_enum! {
    CipherAlgorithm {
        None = sys::DOT11_CIPHER_ALGO_NONE => "None",
        Wep40 = sys::DOT11_CIPHER_ALGO_WEP40 => "WEP",
        Tkip = sys::DOT11_CIPHER_ALGO_TKIP => "TKIP",
        Ccmp = sys::DOT11_CIPHER_ALGO_CCMP => "AES",
        Wep104 = sys::DOT11_CIPHER_ALGO_WEP104 => "WEP",
        Bip = sys::DOT11_CIPHER_ALGO_BIP => "BIP",
        Gcmp = sys::DOT11_CIPHER_ALGO_GCMP => "GCMP",
        Gcmp256 = sys::DOT11_CIPHER_ALGO_GCMP_256 => "GCMP-256",
        Ccmp256 = sys::DOT11_CIPHER_ALGO_CCMP_256 => "CCMP-256",
        UseGroup = sys::DOT11_CIPHER_ALGO_WPA_USE_GROUP => "WPA-Group",
        Wep = sys::DOT11_CIPHER_ALGO_WEP => "WEP",
    }
}

native_enum! {
    PhyType {
        Unknown = sys::dot11_phy_type_unknown => "Unknown",
        Fhss = sys::dot11_phy_type_fhss => "FHSS",
        Dsss = sys::dot11_phy_type_dsss => "DSSS",
        IrBaseband = sys::dot11_phy_type_irbaseband => "IR Baseband",
        Ofdm = sys::dot11_phy_type_ofdm => "802.11a",
        HrDsss = sys::dot11_phy_type_hrdsss => "802.11b",
        Erp = sys::dot11_phy_type_erp => "802.11g",
        Ht = sys::dot11_phy_type_ht => "802.11n (Wi-Fi 4)",
        Vht = sys::dot11_phy_type_vht => "802.11ac (Wi-Fi 5)",
        Dmg = sys::dot11_phy_type_dmg => "802.11ad",
        He = sys::dot11_phy_type_he => "802.11ax (Wi-Fi 6)",
        Eht = sys::dot11_phy_type_eht => "802.11be (Wi-Fi 7)",
    }
}

native_enum! {
    ConnectionMode {
        Profile = sys::wlan_connection_mode_profile => "Profile",
        TemporaryProfile = sys::wlan_connection_mode_temporary_profile => "Temporary Profile",
        DiscoverySecure = sys::wlan_connection_mode_discovery_secure => "Discovery (Secure)",
        DiscoveryUnsecure = sys::wlan_connection_mode_discovery_unsecure => "Discovery (Unsecure)",
        Auto = sys::wlan_connection_mode_auto => "Auto",
        Invalid = sys::wlan_connection_mode_invalid => "Invalid",
    }
}

native_enum! {
    RadioState {
        Unknown = sys::dot11_radio_state_unknown => "Unknown",
        On = sys::dot11_radio_state_on => "On",
        Off = sys::dot11_radio_state_off => "Off",
    }
}

native_enum! {
    /// Who controls a queried setting
    OpcodeValueType {
        QueryOnly = sys::wlan_opcode_value_type_query_only => "Query Only",
        SetByGroupPolicy = sys::wlan_opcode_value_type_set_by_group_policy => "Set by Group Policy",
        SetByUser = sys::wlan_opcode_value_type_set_by_user => "Set by User",
        Invalid = sys::wlan_opcode_value_type_invalid => "Invalid",
    }
}

native_enum! {
    FilterListType {
        GroupPolicyPermit = sys::wlan_filter_list_type_gp_permit => "Group Policy Permit",
        GroupPolicyDeny = sys::wlan_filter_list_type_gp_deny => "Group Policy Deny",
        UserPermit = sys::wlan_filter_list_type_user_permit => "User Permit",
        UserDeny = sys::wlan_filter_list_type_user_deny => "User Deny",
    }
}

native_enum! {
    HostedNetworkState {
        Unavailable = sys::wlan_hosted_network_unavailable => "Unavailable",
        Idle = sys::wlan_hosted_network_idle => "Idle",
        Active = sys::wlan_hosted_network_active => "Active",
    }
}

native_enum! {
    HostedNetworkPeerAuthState {
        Invalid = sys::wlan_hosted_network_peer_state_invalid => "Invalid",
        Authenticated = sys::wlan_hosted_network_peer_state_authenticated => "Authenticated",
    }
}

/// One wireless adapter as reported by `WlanEnumInterfaces`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceInfo {
    pub guid: Guid,
    pub description: String,
    pub state: InterfaceState,
}

impl From<&sys::WLAN_INTERFACE_INFO> for InterfaceInfo {
    fn from(info: &sys::WLAN_INTERFACE_INFO) -> Self {
        Self {
            guid: info.InterfaceGuid.into(),
            description: from_wide(&info.strInterfaceDescription),
            state: InterfaceState::from_raw(info.isState),
        }
    }
}

/// Result of `WlanEnumInterfaces`, sized from the reported count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceList {
    pub items: Vec<InterfaceInfo>,
    pub current_index: u32,
}

impl InterfaceList {
    /// The entry at the reported current index.
    pub fn current(&self) -> WlanResult<&InterfaceInfo> {
        if self.items.is_empty() {
            return Err(WlanError::NoInterface);
        }
        let index = self.current_index as usize;
        self.items.get(index).ok_or(WlanError::IndexOutOfRange {
            index,
            count: self.items.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn phy_types(
    types: &[u32],
    count: u32,
    capacity: usize,
    what: &'static str,
) -> WlanResult<Vec<PhyType>> {
    let count = count as usize;
    if count > capacity {
        return Err(WlanError::CapacityExceeded {
            what,
            count,
            capacity,
        });
    }
    Ok(types[..count].iter().copied().map(PhyType::from_raw).collect())
}

/// One entry of `WlanGetAvailableNetworkList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableNetwork {
    pub profile_name: String,
    pub ssid: Ssid,
    pub bss_type: BssType,
    pub bssid_count: u32,
    pub connectable: bool,
    pub not_connectable_reason: u32,
    pub phy_types: Vec<PhyType>,
    pub more_phy_types: bool,
    pub signal_quality: u32,
    pub security_enabled: bool,
    pub auth_algorithm: AuthAlgorithm,
    pub cipher_algorithm: CipherAlgorithm,
    pub flags: u32,
}

impl AvailableNetwork {
    pub fn from_native(network: &sys::WLAN_AVAILABLE_NETWORK) -> WlanResult<Self> {
        Ok(Self {
            profile_name: from_wide(&network.strProfileName),
            ssid: Ssid::from_native(&network.dot11Ssid)?,
            bss_type: BssType::from_raw(network.dot11BssType),
            bssid_count: network.uNumberOfBssids,
            connectable: network.bNetworkConnectable != sys::FALSE,
            not_connectable_reason: network.wlanNotConnectableReason,
            phy_types: phy_types(
                &network.dot11PhyTypes,
                network.uNumberOfPhyTypes,
                WLAN_MAX_PHY_TYPE_NUMBER,
                "WLAN_AVAILABLE_NETWORK.dot11PhyTypes",
            )?,
            more_phy_types: network.bMorePhyTypes != sys::FALSE,
            signal_quality: network.wlanSignalQuality,
            security_enabled: network.bSecurityEnabled != sys::FALSE,
            auth_algorithm: AuthAlgorithm::from_raw(network.dot11DefaultAuthAlgorithm),
            cipher_algorithm: CipherAlgorithm::from_raw(network.dot11DefaultCipherAlgorithm),
            flags: network.dwFlags,
        })
    }

    pub fn is_connected(&self) -> bool {
        self.flags & sys::WLAN_AVAILABLE_NETWORK_CONNECTED != 0
    }

    pub fn has_profile(&self) -> bool {
        self.flags & sys::WLAN_AVAILABLE_NETWORK_HAS_PROFILE != 0
    }
}

/// One entry of `WlanGetNetworkBssList`, with its information elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BssEntry {
    pub ssid: Ssid,
    pub phy_id: u32,
    pub bssid: MacAddress,
    pub bss_type: BssType,
    pub phy_type: PhyType,
    pub rssi: i32,
    pub link_quality: u32,
    pub in_reg_domain: bool,
    pub beacon_period: u16,
    pub timestamp: u64,
    pub host_timestamp: u64,
    pub capability_information: u16,
    /// Channel center frequency in kHz
    pub center_frequency: u32,
    /// Supported rates in units of 0.5 Mbps, basic-rate bit (0x8000) preserved
    pub rates: Vec<u16>,
    pub ie: Vec<u8>,
}

impl BssEntry {
    pub fn from_native(entry: &sys::WLAN_BSS_ENTRY, ie: Vec<u8>) -> WlanResult<Self> {
        let rate_len = entry.wlanRateSet.uRateSetLength as usize;
        let rate_count = rate_len / 2;
        if rate_count > entry.wlanRateSet.usRateSet.len() {
            return Err(WlanError::CapacityExceeded {
                what: "WLAN_RATE_SET",
                count: rate_count,
                capacity: entry.wlanRateSet.usRateSet.len(),
            });
        }
        Ok(Self {
            ssid: Ssid::from_native(&entry.dot11Ssid)?,
            phy_id: entry.uPhyId,
            bssid: MacAddress(entry.dot11Bssid),
            bss_type: BssType::from_raw(entry.dot11BssType),
            phy_type: PhyType::from_raw(entry.dot11BssPhyType),
            rssi: entry.lRssi,
            link_quality: entry.uLinkQuality,
            in_reg_domain: entry.bInRegDomain != 0,
            beacon_period: entry.usBeaconPeriod,
            timestamp: entry.ullTimestamp,
            host_timestamp: entry.ullHostTimestamp,
            capability_information: entry.usCapabilityInformation,
            center_frequency: entry.ulChCenterFrequency,
            rates: entry.wlanRateSet.usRateSet[..rate_count].to_vec(),
            ie,
        })
    }

    /// Channel number derived from the center frequency (0 if outside known bands)
    pub fn channel(&self) -> u32 {
        channel_from_frequency(self.center_frequency)
    }

    /// Rates in Mbps
    pub fn rates_mbps(&self) -> Vec<f32> {
        self.rates
            .iter()
            .map(|rate| f32::from(rate & 0x7fff) * 0.5)
            .collect()
    }
}

/// Map a center frequency in kHz to its 802.11 channel number.
pub fn channel_from_frequency(freq: u32) -> u32 {
    if (2_412_000..=2_484_000).contains(&freq) {
        if freq == 2_484_000 {
            14
        } else {
            (freq - 2_407_000) / 5000
        }
    } else if (5_000_000..=5_900_000).contains(&freq) {
        (freq - 5_000_000) / 5000
    } else if freq == 5_935_000 {
        // 6 GHz channel 2 sits below the band's 5950 MHz channel origin.
        2
    } else if (5_955_000..=7_115_000).contains(&freq) {
        (freq - 5_950_000) / 5000
    } else {
        0
    }
}

/// One entry of `WlanGetProfileList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileInfo {
    pub name: String,
    pub flags: u32,
}

impl From<&sys::WLAN_PROFILE_INFO> for ProfileInfo {
    fn from(info: &sys::WLAN_PROFILE_INFO) -> Self {
        Self {
            name: from_wide(&info.strProfileName),
            flags: info.dwFlags,
        }
    }
}

impl ProfileInfo {
    pub fn is_group_policy(&self) -> bool {
        self.flags & sys::WLAN_PROFILE_GROUP_POLICY != 0
    }

    pub fn is_per_user(&self) -> bool {
        self.flags & sys::WLAN_PROFILE_USER != 0
    }
}

/// A profile's XML together with the flags and access the OS reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub xml: String,
    pub flags: u32,
    pub granted_access: u32,
}

/// `wlan_intf_opcode_current_connection` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionAttributes {
    pub state: InterfaceState,
    pub mode: ConnectionMode,
    pub profile_name: String,
    pub ssid: Ssid,
    pub bss_type: BssType,
    pub bssid: MacAddress,
    pub phy_type: PhyType,
    pub phy_index: u32,
    pub signal_quality: u32,
    /// Receive rate in kbps
    pub rx_rate: u32,
    /// Transmit rate in kbps
    pub tx_rate: u32,
    pub security_enabled: bool,
    pub onex_enabled: bool,
    pub auth_algorithm: AuthAlgorithm,
    pub cipher_algorithm: CipherAlgorithm,
}

impl ConnectionAttributes {
    pub fn from_native(attrs: &sys::WLAN_CONNECTION_ATTRIBUTES) -> WlanResult<Self> {
        let assoc = &attrs.wlanAssociationAttributes;
        let security = &attrs.wlanSecurityAttributes;
        Ok(Self {
            state: InterfaceState::from_raw(attrs.isState),
            mode: ConnectionMode::from_raw(attrs.wlanConnectionMode),
            profile_name: from_wide(&attrs.strProfileName),
            ssid: Ssid::from_native(&assoc.dot11Ssid)?,
            bss_type: BssType::from_raw(assoc.dot11BssType),
            bssid: MacAddress(assoc.dot11Bssid),
            phy_type: PhyType::from_raw(assoc.dot11PhyType),
            phy_index: assoc.uDot11PhyIndex,
            signal_quality: assoc.wlanSignalQuality,
            rx_rate: assoc.ulRxRate,
            tx_rate: assoc.ulTxRate,
            security_enabled: security.bSecurityEnabled != sys::FALSE,
            onex_enabled: security.bOneXEnabled != sys::FALSE,
            auth_algorithm: AuthAlgorithm::from_raw(security.dot11AuthAlgorithm),
            cipher_algorithm: CipherAlgorithm::from_raw(security.dot11CipherAlgorithm),
        })
    }
}

/// `WlanGetInterfaceCapability` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceCapability {
    pub interface_type: InterfaceType,
    pub dot11d_supported: bool,
    pub max_desired_ssid_list_size: u32,
    pub max_desired_bssid_list_size: u32,
    pub phy_types: Vec<PhyType>,
}

impl InterfaceCapability {
    pub fn from_native(cap: &sys::WLAN_INTERFACE_CAPABILITY) -> WlanResult<Self> {
        Ok(Self {
            interface_type: InterfaceType::from_raw(cap.interfaceType),
            dot11d_supported: cap.bDot11DSupported != sys::FALSE,
            max_desired_ssid_list_size: cap.dwMaxDesiredSsidListSize,
            max_desired_bssid_list_size: cap.dwMaxDesiredBssidListSize,
            phy_types: phy_types(
                &cap.dot11PhyTypes,
                cap.dwNumberOfSupportedPhys,
                WLAN_MAX_PHY_INDEX,
                "WLAN_INTERFACE_CAPABILITY.dot11PhyTypes",
            )?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhyRadioState {
    pub phy_index: u32,
    pub software: RadioState,
    pub hardware: RadioState,
}

/// Decode `WLAN_RADIO_STATE`, bounded by its fixed PHY array.
pub fn radio_states(state: &sys::WLAN_RADIO_STATE) -> WlanResult<Vec<PhyRadioState>> {
    let count = state.dwNumberOfPhys as usize;
    if count > WLAN_MAX_PHY_INDEX {
        return Err(WlanError::CapacityExceeded {
            what: "WLAN_RADIO_STATE",
            count,
            capacity: WLAN_MAX_PHY_INDEX,
        });
    }
    Ok(state.PhyRadioState[..count]
        .iter()
        .map(|phy| PhyRadioState {
            phy_index: phy.dwPhyIndex,
            software: RadioState::from_raw(phy.dot11SoftwareRadioState),
            hardware: RadioState::from_raw(phy.dot11HardwareRadioState),
        })
        .collect())
}

/// Caller-owned arguments for `WlanConnect`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionParameters {
    pub mode: ConnectionMode,
    /// Profile name (profile mode) or profile XML (temporary-profile mode)
    pub profile: Option<String>,
    pub ssid: Option<Ssid>,
    pub desired_bssids: Vec<MacAddress>,
    pub bss_type: BssType,
    pub flags: u32,
}

impl ConnectionParameters {
    /// Connect using a stored profile
    pub fn profile(name: impl Into<String>) -> Self {
        Self {
            mode: ConnectionMode::Profile,
            profile: Some(name.into()),
            ssid: None,
            desired_bssids: Vec::new(),
            bss_type: BssType::Infrastructure,
            flags: 0,
        }
    }

    /// Connect using profile XML that is not stored
    pub fn temporary_profile(xml: impl Into<String>) -> Self {
        Self {
            mode: ConnectionMode::TemporaryProfile,
            ..Self::profile(xml)
        }
    }

    pub fn with_ssid(mut self, ssid: Ssid) -> Self {
        self.ssid = Some(ssid);
        self
    }

    pub fn with_bssids(mut self, bssids: impl IntoIterator<Item = MacAddress>) -> Self {
        self.desired_bssids = bssids.into_iter().collect();
        self
    }

    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedNetworkConnectionSettings {
    pub ssid: Ssid,
    pub max_peers: u32,
}

impl HostedNetworkConnectionSettings {
    pub fn from_native(
        settings: &sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS,
    ) -> WlanResult<Self> {
        Ok(Self {
            ssid: Ssid::from_native(&settings.hostedNetworkSSID)?,
            max_peers: settings.dwMaxNumberOfPeers,
        })
    }

    pub fn to_native(&self) -> sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS {
        sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS {
            hostedNetworkSSID: self.ssid.to_native(),
            dwMaxNumberOfPeers: self.max_peers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostedNetworkSecuritySettings {
    pub auth_algorithm: AuthAlgorithm,
    pub cipher_algorithm: CipherAlgorithm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostedNetworkPeer {
    pub mac_address: MacAddress,
    pub auth_state: HostedNetworkPeerAuthState,
}

impl From<&sys::WLAN_HOSTED_NETWORK_PEER_STATE> for HostedNetworkPeer {
    fn from(peer: &sys::WLAN_HOSTED_NETWORK_PEER_STATE) -> Self {
        Self {
            mac_address: MacAddress(peer.PeerMacAddress),
            auth_state: HostedNetworkPeerAuthState::from_raw(peer.PeerAuthState),
        }
    }
}

/// `WlanHostedNetworkQueryStatus` result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedNetworkStatus {
    pub state: HostedNetworkState,
    pub device_id: Guid,
    pub bssid: MacAddress,
    pub phy_type: PhyType,
    /// Channel frequency in kHz
    pub channel_frequency: u32,
    pub peers: Vec<HostedNetworkPeer>,
}

/// One entry of a permit or deny filter list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkFilter {
    pub ssid: Ssid,
    pub bss_type: BssType,
}

impl NetworkFilter {
    pub fn from_native(network: &sys::DOT11_NETWORK) -> WlanResult<Self> {
        Ok(Self {
            ssid: Ssid::from_native(&network.dot11Ssid)?,
            bss_type: BssType::from_raw(network.dot11BssType),
        })
    }

    pub fn to_native(&self) -> sys::DOT11_NETWORK {
        sys::DOT11_NETWORK {
            dot11Ssid: self.ssid.to_native(),
            dot11BssType: self.bss_type.to_raw(),
        }
    }
}

/// Security descriptor of a securable WLAN object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuritySettings {
    pub value_type: OpcodeValueType,
    pub sddl: String,
    pub granted_access: u32,
}

/// EAP method identifier used when storing EAP user data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EapMethodType {
    /// IANA EAP type (13 = EAP-TLS, 25 = PEAP, ...)
    pub eap_type: u8,
    pub vendor_id: u32,
    pub vendor_type: u32,
    pub author_id: u32,
}

impl EapMethodType {
    pub fn to_native(&self) -> sys::EAP_METHOD_TYPE {
        sys::EAP_METHOD_TYPE {
            eapType: sys::EAP_TYPE {
                r#type: self.eap_type,
                dwVendorId: self.vendor_id,
                dwVendorType: self.vendor_type,
            },
            dwAuthorId: self.author_id,
        }
    }
}

/// Name of a `WLAN_HOSTED_NETWORK_REASON` value
pub fn hosted_network_reason_name(reason: u32) -> &'static str {
    const NAMES: [&str; 29] = [
        "success",
        "unspecified",
        "bad parameters",
        "service shutting down",
        "insufficient resources",
        "elevation required",
        "read only",
        "persistence failed",
        "crypt error",
        "impersonation",
        "stop before start",
        "interface available",
        "interface unavailable",
        "miniport stopped",
        "miniport started",
        "incompatible connection started",
        "incompatible connection stopped",
        "user action",
        "client abort",
        "ap start failed",
        "peer arrived",
        "peer departed",
        "peer timeout",
        "gp denied",
        "service unavailable",
        "device change",
        "properties change",
        "virtual station blocking use",
        "service available on virtual station",
    ];
    NAMES.get(reason as usize).copied().unwrap_or("unknown reason")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_formats_in_registry_form() {
        let guid = Guid::from_fields(
            0x1234_5678,
            0x9abc,
            0xdef0,
            [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef],
        );
        assert_eq!(guid.to_string(), "{12345678-9ABC-DEF0-0123-456789ABCDEF}");
        assert_eq!(guid.to_string().parse::<Guid>().unwrap(), guid);
        assert_eq!(Guid::from_u128(guid.to_u128()), guid);
    }

    #[test]
    fn guid_parse_rejects_garbage() {
        assert!("not-a-guid".parse::<Guid>().is_err());
        assert!("{12345678-9ABC-DEF0-0123-456789ABCDEZ}".parse::<Guid>().is_err());
        assert!("{+2345678-9ABC-DEF0-0123-456789ABCDEF}".parse::<Guid>().is_err());
        assert!("{12345678-+ABC-DEF0-0123-456789ABCDEF}".parse::<Guid>().is_err());
    }

    #[test]
    fn ssid_rejects_overlong_values() {
        assert!(Ssid::new(vec![b'a'; 33]).is_err());
        let native = sys::DOT11_SSID {
            uSSIDLength: 40,
            ucSSID: [b'x'; 32],
        };
        assert!(matches!(
            Ssid::from_native(&native),
            Err(WlanError::CapacityExceeded { count: 40, .. })
        ));
    }

    #[test]
    fn ssid_native_round_trip_keeps_length() {
        let ssid: Ssid = "CoffeeShop".parse().unwrap();
        let native = ssid.to_native();
        assert_eq!(native.uSSIDLength, 10);
        assert_eq!(Ssid::from_native(&native).unwrap(), ssid);
    }

    #[test]
    fn mac_address_parses_both_separators() {
        let mac: MacAddress = "00:11:22:aa:bb:cc".parse().unwrap();
        assert_eq!(mac, "00-11-22-AA-BB-CC".parse().unwrap());
        assert_eq!(mac.to_string(), "00:11:22:aa:bb:cc");
        assert!("00:11:22".parse::<MacAddress>().is_err());
    }

    #[test]
    fn unknown_enum_values_are_preserved() {
        let state = InterfaceState::from_raw(42);
        assert_eq!(state, InterfaceState::Other(42));
        assert_eq!(state.to_raw(), 42);
        assert_eq!(AuthAlgorithm::from_raw(7), AuthAlgorithm::RsnaPsk);
        assert_eq!(AuthAlgorithm::RsnaPsk.to_string(), "WPA2-PSK");
    }

    #[test]
    fn current_interface_is_bounds_checked() {
        let info = InterfaceInfo {
            guid: Guid::default(),
            description: "Intel(R) Wi-Fi 6 AX201 160MHz".into(),
            state: InterfaceState::Connected,
        };
        let empty = InterfaceList::default();
        assert!(matches!(empty.current(), Err(WlanError::NoInterface)));

        let out_of_range = InterfaceList {
            items: vec![info.clone()],
            current_index: 1,
        };
        assert!(matches!(
            out_of_range.current(),
            Err(WlanError::IndexOutOfRange { index: 1, count: 1 })
        ));

        let ok = InterfaceList {
            items: vec![info.clone()],
            current_index: 0,
        };
        assert_eq!(ok.current().unwrap(), &info);
    }

    #[test]
    fn channels_cover_all_bands() {
        assert_eq!(channel_from_frequency(2_412_000), 1);
        assert_eq!(channel_from_frequency(2_484_000), 14);
        assert_eq!(channel_from_frequency(5_180_000), 36);
        assert_eq!(channel_from_frequency(5_955_000), 1);
        assert_eq!(channel_from_frequency(7_115_000), 233);
        assert_eq!(channel_from_frequency(900_000), 0);
    }

    #[test]
    fn low_6ghz_edge_does_not_underflow() {
        assert_eq!(channel_from_frequency(5_935_000), 2);
        assert_eq!(channel_from_frequency(5_925_000), 0);
        assert_eq!(channel_from_frequency(5_940_000), 0);
    }

    #[test]
    fn bss_entry_rate_set_is_bounded() {
        let mut entry: sys::WLAN_BSS_ENTRY = unsafe { std::mem::zeroed() };
        entry.ulChCenterFrequency = 2_437_000;
        entry.wlanRateSet.uRateSetLength = 6;
        entry.wlanRateSet.usRateSet[..3].copy_from_slice(&[0x8002, 0x8004, 0x006c]);
        let decoded = BssEntry::from_native(&entry, vec![0xdd, 0x01]).unwrap();
        assert_eq!(decoded.rates, vec![0x8002, 0x8004, 0x006c]);
        assert_eq!(decoded.rates_mbps(), vec![1.0, 2.0, 54.0]);
        assert_eq!(decoded.channel(), 6);
        assert_eq!(decoded.ie, vec![0xdd, 0x01]);

        entry.wlanRateSet.uRateSetLength = 252;
        assert_eq!(BssEntry::from_native(&entry, Vec::new()).unwrap().rates.len(), 126);

        entry.wlanRateSet.uRateSetLength = 254;
        assert!(matches!(
            BssEntry::from_native(&entry, Vec::new()),
            Err(WlanError::CapacityExceeded { count: 127, capacity: 126, .. })
        ));
    }

    #[test]
    fn phy_type_count_is_bounded() {
        let mut network: sys::WLAN_AVAILABLE_NETWORK = unsafe { std::mem::zeroed() };
        network.uNumberOfPhyTypes = 9;
        assert!(matches!(
            AvailableNetwork::from_native(&network),
            Err(WlanError::CapacityExceeded { count: 9, capacity: 8, .. })
        ));
        network.uNumberOfPhyTypes = 2;
        network.dot11PhyTypes[0] = sys::dot11_phy_type_he;
        network.dot11PhyTypes[1] = sys::dot11_phy_type_vht;
        let decoded = AvailableNetwork::from_native(&network).unwrap();
        assert_eq!(decoded.phy_types, vec![PhyType::He, PhyType::Vht]);
    }

    #[test]
    fn reason_names_cover_the_enumeration() {
        assert_eq!(
            hosted_network_reason_name(sys::wlan_hosted_network_reason_elevation_required),
            "elevation required"
        );
        assert_eq!(hosted_network_reason_name(99), "unknown reason");
    }
}
