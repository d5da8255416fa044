use std::ffi::c_void;
use std::mem::size_of;
use std::ptr;

use secrecy::SecretString;

use crate::error::{ERROR_INVALID_STATE, WlanError, WlanResult};
use crate::wlan::handle::{Session, check};
use crate::wlan::loader::entry;
use crate::wlan::memory::bssid_list;
use crate::wlan::profile::create_profile_xml;
use crate::wlan::sys;
use crate::wlan::types::{
    BssType, ConnectionAttributes, ConnectionParameters, Guid, InterfaceCapability,
    InterfaceState, OpcodeValueType, PhyRadioState, RadioState, Ssid, radio_states,
};
use crate::wlan::wide::to_wide;

/// Bytes returned by `WlanQueryInterface` or `WlanQueryAutoConfigParameter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpcodeValue {
    pub data: Vec<u8>,
    pub value_type: OpcodeValueType,
}

impl OpcodeValue {
    /// Reinterpret the leading bytes as `T`.
    ///
    /// # Safety
    /// `T` must be a plain-data `sys` record for which every bit pattern is valid.
    pub(crate) unsafe fn read<T: Copy>(&self, operation: &'static str) -> WlanResult<T> {
        if self.data.len() < size_of::<T>() {
            return Err(WlanError::Truncated {
                operation,
                expected: size_of::<T>(),
                actual: self.data.len(),
            });
        }
        Ok(unsafe { ptr::read_unaligned(self.data.as_ptr().cast::<T>()) })
    }

    pub fn as_u32(&self, operation: &'static str) -> WlanResult<u32> {
        unsafe { self.read::<u32>(operation) }
    }

    pub fn as_i32(&self, operation: &'static str) -> WlanResult<i32> {
        unsafe { self.read::<i32>(operation) }
    }

    pub fn as_bool(&self, operation: &'static str) -> WlanResult<bool> {
        Ok(unsafe { self.read::<sys::BOOL>(operation)? } != sys::FALSE)
    }
}

fn native_bool(value: bool) -> sys::BOOL {
    if value { sys::TRUE } else { sys::FALSE }
}

impl Session {
    /// Start a connection attempt on `interface`.
    ///
    /// Completion is reported asynchronously through notifications.
    pub fn connect(&self, interface: &Guid, params: &ConnectionParameters) -> WlanResult<()> {
        let connect = entry(self.api().connect, "WlanConnect")?;

        let profile = params
            .profile
            .as_deref()
            .map(|profile| to_wide("WlanConnect", profile))
            .transpose()?;
        let ssid = params.ssid.as_ref().map(Ssid::to_native);
        let bssids: Vec<sys::DOT11_MAC_ADDRESS> =
            params.desired_bssids.iter().map(|mac| mac.0).collect();
        let bssids = if bssids.is_empty() {
            None
        } else {
            Some(bssid_list(&bssids)?)
        };

        let native = sys::WLAN_CONNECTION_PARAMETERS {
            wlanConnectionMode: params.mode.to_raw(),
            strProfile: profile.as_ref().map_or(ptr::null(), |p| p.as_ptr()),
            pDot11Ssid: ssid.as_ref().map_or(ptr::null(), |s| s as *const _),
            pDesiredBssidList: bssids
                .as_ref()
                .map_or(ptr::null(), |b| b.as_ptr::<sys::DOT11_BSSID_LIST>()),
            dot11BssType: params.bss_type.to_raw(),
            dwFlags: params.flags,
        };

        let result =
            unsafe { connect(self.as_raw(), interface.as_raw(), &native, ptr::null_mut()) };
        check("WlanConnect", result)
    }

    /// Connect using a stored profile
    pub fn connect_profile(&self, interface: &Guid, profile_name: &str) -> WlanResult<()> {
        self.connect(interface, &ConnectionParameters::profile(profile_name))
    }

    /// Store a profile for `ssid` (overwriting any existing one), then connect with it.
    pub fn connect_with_key(
        &self,
        interface: &Guid,
        ssid: &str,
        auth: &str,
        cipher: &str,
        key: Option<&SecretString>,
        hidden: bool,
    ) -> WlanResult<()> {
        let xml = create_profile_xml(ssid, auth, cipher, key, hidden)?;
        self.set_profile(interface, 0, &xml, None, true)?;
        self.connect_profile(interface, ssid)
    }

    /// Disconnect from the current network
    pub fn disconnect(&self, interface: &Guid) -> WlanResult<()> {
        let disconnect = entry(self.api().disconnect, "WlanDisconnect")?;
        let result =
            unsafe { disconnect(self.as_raw(), interface.as_raw(), ptr::null_mut()) };
        check("WlanDisconnect", result)
    }

    /// Query an interface parameter, returning the raw bytes
    pub fn query_interface(&self, interface: &Guid, opcode: u32) -> WlanResult<OpcodeValue> {
        let query = entry(self.api().query_interface, "WlanQueryInterface")?;
        let mut size = 0u32;
        let mut value_type = sys::wlan_opcode_value_type_invalid;
        let data = unsafe {
            self.allocated::<c_void>("WlanQueryInterface", |out| {
                query(
                    self.as_raw(),
                    interface.as_raw(),
                    opcode,
                    ptr::null_mut(),
                    &mut size,
                    out,
                    &mut value_type,
                )
            })?
        };
        let bytes =
            unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<u8>(), size as usize) };
        Ok(OpcodeValue {
            data: bytes.to_vec(),
            value_type: OpcodeValueType::from_raw(value_type),
        })
    }

    /// Attributes of the current connection.
    ///
    /// Fails with `ERROR_INVALID_STATE` when the interface is not connected.
    pub fn current_connection(&self, interface: &Guid) -> WlanResult<ConnectionAttributes> {
        let value = self.query_interface(interface, sys::wlan_intf_opcode_current_connection)?;
        let attrs: sys::WLAN_CONNECTION_ATTRIBUTES =
            unsafe { value.read("wlan_intf_opcode_current_connection")? };
        ConnectionAttributes::from_native(&attrs)
    }

    /// Get the currently connected SSID, if any
    pub fn connected_ssid(&self, interface: &Guid) -> WlanResult<Option<Ssid>> {
        match self.current_connection(interface) {
            Ok(attrs) if attrs.state == InterfaceState::Connected => Ok(Some(attrs.ssid)),
            Ok(_) => Ok(None),
            Err(WlanError::Status {
                code: ERROR_INVALID_STATE,
                ..
            }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn interface_state(&self, interface: &Guid) -> WlanResult<InterfaceState> {
        let value = self.query_interface(interface, sys::wlan_intf_opcode_interface_state)?;
        Ok(InterfaceState::from_raw(
            value.as_u32("wlan_intf_opcode_interface_state")?,
        ))
    }

    pub fn radio_state(&self, interface: &Guid) -> WlanResult<Vec<PhyRadioState>> {
        let value = self.query_interface(interface, sys::wlan_intf_opcode_radio_state)?;
        let state: sys::WLAN_RADIO_STATE = unsafe { value.read("wlan_intf_opcode_radio_state")? };
        radio_states(&state)
    }

    pub fn channel_number(&self, interface: &Guid) -> WlanResult<u32> {
        self.query_interface(interface, sys::wlan_intf_opcode_channel_number)?
            .as_u32("wlan_intf_opcode_channel_number")
    }

    /// Received signal strength of the current connection in dBm
    pub fn rssi(&self, interface: &Guid) -> WlanResult<i32> {
        self.query_interface(interface, sys::wlan_intf_opcode_rssi)?
            .as_i32("wlan_intf_opcode_rssi")
    }

    pub fn autoconf_enabled(&self, interface: &Guid) -> WlanResult<bool> {
        self.query_interface(interface, sys::wlan_intf_opcode_autoconf_enabled)?
            .as_bool("wlan_intf_opcode_autoconf_enabled")
    }

    pub fn background_scan_enabled(&self, interface: &Guid) -> WlanResult<bool> {
        self.query_interface(interface, sys::wlan_intf_opcode_background_scan_enabled)?
            .as_bool("wlan_intf_opcode_background_scan_enabled")
    }

    pub fn media_streaming_mode(&self, interface: &Guid) -> WlanResult<bool> {
        self.query_interface(interface, sys::wlan_intf_opcode_media_streaming_mode)?
            .as_bool("wlan_intf_opcode_media_streaming_mode")
    }

    pub fn bss_type(&self, interface: &Guid) -> WlanResult<BssType> {
        let value = self.query_interface(interface, sys::wlan_intf_opcode_bss_type)?;
        Ok(BssType::from_raw(value.as_u32("wlan_intf_opcode_bss_type")?))
    }

    /// `DOT11_OPERATION_MODE_*` value (1 = station, 2 = access point, ...)
    pub fn current_operation_mode(&self, interface: &Guid) -> WlanResult<u32> {
        self.query_interface(interface, sys::wlan_intf_opcode_current_operation_mode)?
            .as_u32("wlan_intf_opcode_current_operation_mode")
    }

    /// Set an interface parameter from raw bytes
    pub fn set_interface(&self, interface: &Guid, opcode: u32, data: &[u8]) -> WlanResult<()> {
        let set = entry(self.api().set_interface, "WlanSetInterface")?;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                opcode,
                data.len() as u32,
                data.as_ptr().cast(),
                ptr::null_mut(),
            )
        };
        check("WlanSetInterface", result)
    }

    fn set_interface_value<T: Copy>(
        &self,
        interface: &Guid,
        opcode: u32,
        value: &T,
    ) -> WlanResult<()> {
        let bytes = unsafe {
            std::slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>())
        };
        self.set_interface(interface, opcode, bytes)
    }

    pub fn set_autoconf_enabled(&self, interface: &Guid, enabled: bool) -> WlanResult<()> {
        self.set_interface_value(
            interface,
            sys::wlan_intf_opcode_autoconf_enabled,
            &native_bool(enabled),
        )
    }

    pub fn set_background_scan_enabled(&self, interface: &Guid, enabled: bool) -> WlanResult<()> {
        self.set_interface_value(
            interface,
            sys::wlan_intf_opcode_background_scan_enabled,
            &native_bool(enabled),
        )
    }

    pub fn set_bss_type(&self, interface: &Guid, bss_type: BssType) -> WlanResult<()> {
        self.set_interface_value(interface, sys::wlan_intf_opcode_bss_type, &bss_type.to_raw())
    }

    /// Switch the software radio of one PHY on or off
    pub fn set_radio_state(
        &self,
        interface: &Guid,
        phy_index: u32,
        state: RadioState,
    ) -> WlanResult<()> {
        let native = sys::WLAN_PHY_RADIO_STATE {
            dwPhyIndex: phy_index,
            dot11SoftwareRadioState: state.to_raw(),
            dot11HardwareRadioState: sys::dot11_radio_state_unknown,
        };
        self.set_interface_value(interface, sys::wlan_intf_opcode_radio_state, &native)
    }

    pub fn interface_capability(&self, interface: &Guid) -> WlanResult<InterfaceCapability> {
        let get = entry(
            self.api().get_interface_capability,
            "WlanGetInterfaceCapability",
        )?;
        let capability = unsafe {
            self.allocated("WlanGetInterfaceCapability", |out| {
                get(self.as_raw(), interface.as_raw(), ptr::null_mut(), out)
            })?
        };
        InterfaceCapability::from_native(&capability)
    }

    /// Query a service-wide autoconfiguration parameter (`wlan_autoconf_opcode_*`)
    pub fn query_autoconf_parameter(&self, opcode: u32) -> WlanResult<OpcodeValue> {
        let query = entry(
            self.api().query_auto_config_parameter,
            "WlanQueryAutoConfigParameter",
        )?;
        let mut size = 0u32;
        let mut value_type = sys::wlan_opcode_value_type_invalid;
        let data = unsafe {
            self.allocated::<c_void>("WlanQueryAutoConfigParameter", |out| {
                query(
                    self.as_raw(),
                    opcode,
                    ptr::null_mut(),
                    &mut size,
                    out,
                    &mut value_type,
                )
            })?
        };
        let bytes =
            unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<u8>(), size as usize) };
        Ok(OpcodeValue {
            data: bytes.to_vec(),
            value_type: OpcodeValueType::from_raw(value_type),
        })
    }

    pub fn set_autoconf_parameter(&self, opcode: u32, data: &[u8]) -> WlanResult<()> {
        let set = entry(
            self.api().set_auto_config_parameter,
            "WlanSetAutoConfigParameter",
        )?;
        let result = unsafe {
            set(
                self.as_raw(),
                opcode,
                data.len() as u32,
                data.as_ptr().cast(),
                ptr::null_mut(),
            )
        };
        check("WlanSetAutoConfigParameter", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(data: Vec<u8>) -> OpcodeValue {
        OpcodeValue {
            data,
            value_type: OpcodeValueType::QueryOnly,
        }
    }

    #[test]
    fn scalar_values_decode_little_endian() {
        assert_eq!(value(6u32.to_le_bytes().to_vec()).as_u32("op").unwrap(), 6);
        assert_eq!(value((-58i32).to_le_bytes().to_vec()).as_i32("op").unwrap(), -58);
        assert!(value(1i32.to_le_bytes().to_vec()).as_bool("op").unwrap());
        assert!(!value(vec![0; 4]).as_bool("op").unwrap());
    }

    #[test]
    fn short_value_is_truncated() {
        let err = value(vec![1, 2]).as_u32("wlan_intf_opcode_channel_number").unwrap_err();
        assert!(matches!(
            err,
            WlanError::Truncated {
                operation: "wlan_intf_opcode_channel_number",
                expected: 4,
                actual: 2
            }
        ));
    }

    #[test]
    fn connection_attributes_decode_from_bytes() {
        let mut attrs: sys::WLAN_CONNECTION_ATTRIBUTES = unsafe { std::mem::zeroed() };
        attrs.isState = sys::wlan_interface_state_connected;
        attrs.wlanAssociationAttributes.dot11Ssid.uSSIDLength = 4;
        attrs.wlanAssociationAttributes.dot11Ssid.ucSSID[..4].copy_from_slice(b"home");
        attrs.wlanAssociationAttributes.ulTxRate = 866_700;
        attrs.wlanSecurityAttributes.dot11AuthAlgorithm = sys::DOT11_AUTH_ALGO_RSNA_PSK;
        let bytes = unsafe {
            std::slice::from_raw_parts(
                (&attrs as *const sys::WLAN_CONNECTION_ATTRIBUTES).cast::<u8>(),
                size_of::<sys::WLAN_CONNECTION_ATTRIBUTES>(),
            )
        };

        let raw: sys::WLAN_CONNECTION_ATTRIBUTES =
            unsafe { value(bytes.to_vec()).read("op").unwrap() };
        let decoded = ConnectionAttributes::from_native(&raw).unwrap();
        assert_eq!(decoded.state, InterfaceState::Connected);
        assert_eq!(decoded.ssid.to_string(), "home");
        assert_eq!(decoded.tx_rate, 866_700);
        assert_eq!(decoded.auth_algorithm.to_string(), "WPA2-PSK");
    }
}
