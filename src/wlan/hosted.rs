//! Hosted Network (software access point) calls.
//!
//! Every call here reports a `WLAN_HOSTED_NETWORK_REASON` alongside its status, which
//! is carried in [`WlanError::StatusWithReason`]. See
//! [`hosted_network_reason_name`](crate::wlan::types::hosted_network_reason_name).

use std::ffi::c_void;
use std::fmt::Write as _;
use std::mem::size_of;
use std::ptr::{self, addr_of};

use secrecy::{ExposeSecret, SecretString};

use crate::error::{WlanError, WlanResult};
use crate::wlan::handle::{Session, check_reason};
use crate::wlan::loader::entry;
use crate::wlan::memory::{WlanMemory, check_count};
use crate::wlan::sys;
use crate::wlan::types::{
    AuthAlgorithm, CipherAlgorithm, Guid, HostedNetworkConnectionSettings, HostedNetworkPeer,
    HostedNetworkSecuritySettings, HostedNetworkState, HostedNetworkStatus, MacAddress,
    OpcodeValueType, PhyType,
};
use crate::wlan::wide::from_wide;

/// The secondary security key of the hosted network
#[derive(Debug)]
pub struct SecondaryKey {
    /// Passphrase text, or the binary key as lowercase hex
    pub key: SecretString,
    pub is_passphrase: bool,
    pub persistent: bool,
}

fn native_bool(value: bool) -> sys::BOOL {
    if value { sys::TRUE } else { sys::FALSE }
}

fn read_property<T: Copy>(data: &[u8], operation: &'static str) -> WlanResult<T> {
    if data.len() < size_of::<T>() {
        return Err(WlanError::Truncated {
            operation,
            expected: size_of::<T>(),
            actual: data.len(),
        });
    }
    // SAFETY: length checked above; callers only instantiate plain-data sys records.
    Ok(unsafe { ptr::read_unaligned(data.as_ptr().cast::<T>()) })
}

/// Copy a `WLAN_HOSTED_NETWORK_STATUS` and its trailing peer array.
///
/// # Safety
/// `status` must point to a valid allocation holding `dwNumberOfPeers` peers.
unsafe fn copy_status(
    status: *const sys::WLAN_HOSTED_NETWORK_STATUS,
) -> WlanResult<HostedNetworkStatus> {
    let header = unsafe { *status };
    let count = header.dwNumberOfPeers as usize;
    check_count("WLAN_HOSTED_NETWORK_STATUS", count)?;
    let first = unsafe {
        addr_of!((*status).PeerList).cast::<sys::WLAN_HOSTED_NETWORK_PEER_STATE>()
    };
    let peers = unsafe { std::slice::from_raw_parts(first, count) };
    Ok(HostedNetworkStatus {
        state: HostedNetworkState::from_raw(header.HostedNetworkState),
        device_id: Guid::from(header.IPDeviceID),
        bssid: MacAddress(header.wlanHostedNetworkBSSID),
        phy_type: PhyType::from_raw(header.dot11PhyType),
        channel_frequency: header.ulChannelFrequency,
        peers: peers.iter().map(HostedNetworkPeer::from).collect(),
    })
}

fn hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

impl Session {
    fn hosted_action(
        &self,
        slot: Option<sys::WlanHostedNetworkActionFn>,
        operation: &'static str,
    ) -> WlanResult<()> {
        let action = entry(slot, operation)?;
        let mut reason = sys::wlan_hosted_network_reason_success;
        let result = unsafe { action(self.as_raw(), &mut reason, ptr::null_mut()) };
        check_reason(operation, result, reason)
    }

    /// Start the hosted network on behalf of this client
    pub fn hosted_network_start_using(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_start_using,
            "WlanHostedNetworkStartUsing",
        )
    }

    pub fn hosted_network_stop_using(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_stop_using,
            "WlanHostedNetworkStopUsing",
        )
    }

    /// Start the hosted network regardless of other users (requires elevation)
    pub fn hosted_network_force_start(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_force_start,
            "WlanHostedNetworkForceStart",
        )
    }

    pub fn hosted_network_force_stop(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_force_stop,
            "WlanHostedNetworkForceStop",
        )
    }

    /// Configure and persist the hosted network settings if they were never set
    pub fn hosted_network_init_settings(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_init_settings,
            "WlanHostedNetworkInitSettings",
        )
    }

    pub fn hosted_network_refresh_security_settings(&self) -> WlanResult<()> {
        self.hosted_action(
            self.api().hosted_network_refresh_security_settings,
            "WlanHostedNetworkRefreshSecuritySettings",
        )
    }

    fn hosted_network_query_property(
        &self,
        opcode: u32,
    ) -> WlanResult<(Vec<u8>, OpcodeValueType)> {
        let query = entry(
            self.api().hosted_network_query_property,
            "WlanHostedNetworkQueryProperty",
        )?;
        let mut size = 0u32;
        let mut value_type = sys::wlan_opcode_value_type_invalid;
        let data = unsafe {
            self.allocated::<c_void>("WlanHostedNetworkQueryProperty", |out| {
                query(
                    self.as_raw(),
                    opcode,
                    &mut size,
                    out,
                    &mut value_type,
                    ptr::null_mut(),
                )
            })?
        };
        let bytes =
            unsafe { std::slice::from_raw_parts(data.as_ptr().cast::<u8>(), size as usize) };
        Ok((bytes.to_vec(), OpcodeValueType::from_raw(value_type)))
    }

    fn hosted_network_set_property(&self, opcode: u32, data: &[u8]) -> WlanResult<()> {
        let set = entry(
            self.api().hosted_network_set_property,
            "WlanHostedNetworkSetProperty",
        )?;
        let mut reason = sys::wlan_hosted_network_reason_success;
        let result = unsafe {
            set(
                self.as_raw(),
                opcode,
                data.len() as u32,
                data.as_ptr().cast(),
                &mut reason,
                ptr::null_mut(),
            )
        };
        check_reason("WlanHostedNetworkSetProperty", result, reason)
    }

    pub fn hosted_network_connection_settings(
        &self,
    ) -> WlanResult<HostedNetworkConnectionSettings> {
        let opcode = sys::wlan_hosted_network_opcode_connection_settings;
        let (data, _) = self.hosted_network_query_property(opcode)?;
        let native: sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS =
            read_property(&data, "wlan_hosted_network_opcode_connection_settings")?;
        HostedNetworkConnectionSettings::from_native(&native)
    }

    pub fn hosted_network_security_settings(&self) -> WlanResult<HostedNetworkSecuritySettings> {
        let (data, _) =
            self.hosted_network_query_property(sys::wlan_hosted_network_opcode_security_settings)?;
        let native: sys::WLAN_HOSTED_NETWORK_SECURITY_SETTINGS =
            read_property(&data, "wlan_hosted_network_opcode_security_settings")?;
        Ok(HostedNetworkSecuritySettings {
            auth_algorithm: AuthAlgorithm::from_raw(native.dot11AuthAlgo),
            cipher_algorithm: CipherAlgorithm::from_raw(native.dot11CipherAlgo),
        })
    }

    /// Profile XML the hosted network uses for connecting stations
    pub fn hosted_network_station_profile(&self) -> WlanResult<String> {
        let (data, _) =
            self.hosted_network_query_property(sys::wlan_hosted_network_opcode_station_profile)?;
        let units: Vec<u16> = data
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(from_wide(&units))
    }

    pub fn hosted_network_enabled(&self) -> WlanResult<bool> {
        let (data, _) =
            self.hosted_network_query_property(sys::wlan_hosted_network_opcode_enable)?;
        let enabled: sys::BOOL = read_property(&data, "wlan_hosted_network_opcode_enable")?;
        Ok(enabled != sys::FALSE)
    }

    pub fn set_hosted_network_connection_settings(
        &self,
        settings: &HostedNetworkConnectionSettings,
    ) -> WlanResult<()> {
        let native = settings.to_native();
        let bytes = unsafe {
            std::slice::from_raw_parts(
                (&native as *const sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS).cast::<u8>(),
                size_of::<sys::WLAN_HOSTED_NETWORK_CONNECTION_SETTINGS>(),
            )
        };
        self.hosted_network_set_property(sys::wlan_hosted_network_opcode_connection_settings, bytes)
    }

    pub fn set_hosted_network_enabled(&self, enabled: bool) -> WlanResult<()> {
        let value = native_bool(enabled);
        self.hosted_network_set_property(
            sys::wlan_hosted_network_opcode_enable,
            &value.to_ne_bytes(),
        )
    }

    pub fn hosted_network_status(&self) -> WlanResult<HostedNetworkStatus> {
        let query = entry(
            self.api().hosted_network_query_status,
            "WlanHostedNetworkQueryStatus",
        )?;
        let status = unsafe {
            self.allocated("WlanHostedNetworkQueryStatus", |out| {
                query(self.as_raw(), out, ptr::null_mut())
            })?
        };
        unsafe { copy_status(status.as_ptr()) }
    }

    /// Set the secondary key. A passphrase must be 8 to 63 printable ASCII characters.
    pub fn set_hosted_network_secondary_key(
        &self,
        key: &SecretString,
        is_passphrase: bool,
        persistent: bool,
    ) -> WlanResult<()> {
        let set = entry(
            self.api().hosted_network_set_secondary_key,
            "WlanHostedNetworkSetSecondaryKey",
        )?;
        let secret = key.expose_secret();
        if secret.contains('\0') {
            return Err(WlanError::Encoding {
                operation: "WlanHostedNetworkSetSecondaryKey",
                detail: "key contains an interior NUL".to_string(),
            });
        }
        // The key length counts the terminating NUL of a passphrase.
        let mut bytes = secret.as_bytes().to_vec();
        if is_passphrase {
            bytes.push(0);
        }
        let mut reason = sys::wlan_hosted_network_reason_success;
        let result = unsafe {
            set(
                self.as_raw(),
                bytes.len() as u32,
                bytes.as_ptr(),
                native_bool(is_passphrase),
                native_bool(persistent),
                &mut reason,
                ptr::null_mut(),
            )
        };
        bytes.fill(0);
        check_reason("WlanHostedNetworkSetSecondaryKey", result, reason)
    }

    /// The secondary key, or `None` if none is configured
    pub fn hosted_network_secondary_key(&self) -> WlanResult<Option<SecondaryKey>> {
        let query = entry(
            self.api().hosted_network_query_secondary_key,
            "WlanHostedNetworkQuerySecondaryKey",
        )?;
        let mut length = 0u32;
        let mut out: *mut u8 = ptr::null_mut();
        let mut is_passphrase = sys::FALSE;
        let mut persistent = sys::FALSE;
        let mut reason = sys::wlan_hosted_network_reason_success;
        let result = unsafe {
            query(
                self.as_raw(),
                &mut length,
                &mut out,
                &mut is_passphrase,
                &mut persistent,
                &mut reason,
                ptr::null_mut(),
            )
        };
        let free = self.api().free_memory;
        let data = if out.is_null() {
            None
        } else {
            Some(unsafe {
                WlanMemory::from_raw(out, free, "WlanHostedNetworkQuerySecondaryKey")?
            })
        };
        check_reason("WlanHostedNetworkQuerySecondaryKey", result, reason)?;

        let Some(data) = data else {
            return Ok(None);
        };
        if length == 0 {
            return Ok(None);
        }
        let bytes = unsafe { std::slice::from_raw_parts(data.as_ptr(), length as usize) };
        let is_passphrase = is_passphrase != sys::FALSE;
        let key = if is_passphrase {
            let text = bytes.strip_suffix(&[0]).unwrap_or(bytes);
            String::from_utf8_lossy(text).into_owned()
        } else {
            hex(bytes)
        };
        Ok(Some(SecondaryKey {
            key: SecretString::from(key),
            is_passphrase,
            persistent: persistent != sys::FALSE,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_copies_every_reported_peer() {
        #[repr(C)]
        struct StatusWithPeers {
            status: sys::WLAN_HOSTED_NETWORK_STATUS,
            extra: [sys::WLAN_HOSTED_NETWORK_PEER_STATE; 2],
        }
        let peer = |tag: u8| sys::WLAN_HOSTED_NETWORK_PEER_STATE {
            PeerMacAddress: [0x02, 0, 0, 0, 0, tag],
            PeerAuthState: sys::wlan_hosted_network_peer_state_authenticated,
        };
        let buffer = StatusWithPeers {
            status: sys::WLAN_HOSTED_NETWORK_STATUS {
                HostedNetworkState: sys::wlan_hosted_network_active,
                IPDeviceID: sys::GUID::default(),
                wlanHostedNetworkBSSID: [0x02, 0x11, 0x22, 0x33, 0x44, 0x55],
                dot11PhyType: sys::dot11_phy_type_ht,
                ulChannelFrequency: 2_437_000,
                dwNumberOfPeers: 2,
                PeerList: [peer(1)],
            },
            extra: [peer(2), peer(3)],
        };

        let status =
            unsafe { copy_status((&buffer as *const StatusWithPeers).cast()) }.unwrap();
        assert_eq!(status.state, HostedNetworkState::Active);
        assert_eq!(status.phy_type, PhyType::Ht);
        assert_eq!(status.bssid.to_string(), "02:11:22:33:44:55");
        assert_eq!(status.peers.len(), 2);
        assert_eq!(status.peers[1].mac_address.0[5], 2);
    }

    #[test]
    fn short_property_is_truncated() {
        let err =
            read_property::<sys::BOOL>(&[1], "wlan_hosted_network_opcode_enable").unwrap_err();
        assert!(matches!(err, WlanError::Truncated { expected: 4, actual: 1, .. }));
    }

    #[test]
    fn binary_keys_render_as_hex() {
        assert_eq!(hex(&[0x00, 0xab, 0x10]), "00ab10");
    }
}
