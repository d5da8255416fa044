use std::ptr;

use crate::error::WlanResult;
use crate::wlan::handle::{Session, check};
use crate::wlan::loader::entry;
use crate::wlan::memory::{copy_bss_entries, copy_items, raw_data};
use crate::wlan::sys;
use crate::wlan::types::{AvailableNetwork, BssEntry, BssType, Guid, Ssid};

impl Session {
    /// Trigger a network scan on `interface`
    pub fn scan(&self, interface: &Guid) -> WlanResult<()> {
        self.scan_ssid(interface, None, None)
    }

    /// Scan, optionally probing for `ssid` and attaching vendor IE bytes to the probe.
    pub fn scan_ssid(
        &self,
        interface: &Guid,
        ssid: Option<&Ssid>,
        ie_data: Option<&[u8]>,
    ) -> WlanResult<()> {
        let scan = entry(self.api().scan, "WlanScan")?;
        let ssid = ssid.map(Ssid::to_native);
        let ie = ie_data.map(raw_data);

        let result = unsafe {
            scan(
                self.as_raw(),
                interface.as_raw(),
                ssid.as_ref().map_or(ptr::null(), |s| s as *const _),
                ie.as_ref()
                    .map_or(ptr::null(), |buffer| buffer.as_ptr::<sys::WLAN_RAW_DATA>()),
                ptr::null_mut(),
            )
        };
        check("WlanScan", result)
    }

    /// Get the networks visible on `interface`.
    ///
    /// `flags` takes `WLAN_AVAILABLE_NETWORK_INCLUDE_*` bits.
    pub fn available_networks(
        &self,
        interface: &Guid,
        flags: u32,
    ) -> WlanResult<Vec<AvailableNetwork>> {
        let get = entry(
            self.api().get_available_network_list,
            "WlanGetAvailableNetworkList",
        )?;
        let list = unsafe {
            self.allocated("WlanGetAvailableNetworkList", |out| {
                get(
                    self.as_raw(),
                    interface.as_raw(),
                    flags,
                    ptr::null_mut(),
                    out,
                )
            })?
        };
        let items = unsafe { copy_items(list.as_ptr())? };
        items.iter().map(AvailableNetwork::from_native).collect()
    }

    /// Get the BSS entries seen on `interface`, optionally narrowed to one SSID.
    ///
    /// `security_enabled` is only consulted when `ssid` is given.
    pub fn bss_list(
        &self,
        interface: &Guid,
        ssid: Option<&Ssid>,
        bss_type: BssType,
        security_enabled: bool,
    ) -> WlanResult<Vec<BssEntry>> {
        let get = entry(self.api().get_network_bss_list, "WlanGetNetworkBssList")?;
        let ssid = ssid.map(Ssid::to_native);
        let list = unsafe {
            self.allocated("WlanGetNetworkBssList", |out| {
                get(
                    self.as_raw(),
                    interface.as_raw(),
                    ssid.as_ref().map_or(ptr::null(), |s| s as *const _),
                    bss_type.to_raw(),
                    if security_enabled { sys::TRUE } else { sys::FALSE },
                    ptr::null_mut(),
                    out,
                )
            })?
        };
        let entries = unsafe { copy_bss_entries(list.as_ptr())? };
        entries
            .into_iter()
            .map(|raw| BssEntry::from_native(&raw.entry, raw.ie))
            .collect()
    }
}
