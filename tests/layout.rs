//! Native record layouts must match the Windows SDK headers byte for byte.

use std::mem::{align_of, offset_of, size_of};

use wlanapi::wlan::{AuthAlgorithm, AvailableNetwork, BssType, CipherAlgorithm, PhyType, sys};

#[test]
fn fixed_size_records() {
    assert_eq!(size_of::<sys::GUID>(), 16);
    assert_eq!(size_of::<sys::DOT11_SSID>(), 36);
    assert_eq!(size_of::<sys::DOT11_NETWORK>(), 40);
    assert_eq!(size_of::<sys::DOT11_BSSID_LIST>(), 20);
    assert_eq!(size_of::<sys::WLAN_INTERFACE_INFO>(), 532);
    assert_eq!(size_of::<sys::WLAN_AVAILABLE_NETWORK>(), 628);
    assert_eq!(size_of::<sys::WLAN_RATE_SET>(), 256);
    assert_eq!(size_of::<sys::WLAN_BSS_ENTRY>(), 360);
    assert_eq!(size_of::<sys::WLAN_PROFILE_INFO>(), 516);
    assert_eq!(size_of::<sys::WLAN_RAW_DATA>(), 8);
    assert_eq!(size_of::<sys::WLAN_CONNECTION_ATTRIBUTES>(), 604);
    assert_eq!(size_of::<sys::WLAN_INTERFACE_CAPABILITY>(), 276);
    assert_eq!(size_of::<sys::WLAN_RADIO_STATE>(), 772);
    assert_eq!(size_of::<sys::WLAN_CONNECTION_NOTIFICATION_DATA>(), 572);
    assert_eq!(size_of::<sys::WLAN_HOSTED_NETWORK_PEER_STATE>(), 12);
    assert_eq!(size_of::<sys::WLAN_HOSTED_NETWORK_STATUS>(), 52);
    assert_eq!(size_of::<sys::EAP_METHOD_TYPE>(), 16);
}

#[test]
fn list_headers_precede_their_arrays() {
    assert_eq!(offset_of!(sys::WLAN_INTERFACE_INFO_LIST, InterfaceInfo), 8);
    assert_eq!(offset_of!(sys::WLAN_AVAILABLE_NETWORK_LIST, Network), 8);
    assert_eq!(offset_of!(sys::WLAN_PROFILE_INFO_LIST, ProfileInfo), 8);
    assert_eq!(offset_of!(sys::DOT11_NETWORK_LIST, Network), 8);
    assert_eq!(offset_of!(sys::WLAN_BSS_LIST, wlanBssEntries), 8);
    assert_eq!(offset_of!(sys::WLAN_RAW_DATA, DataBlob), 4);
    assert_eq!(offset_of!(sys::DOT11_BSSID_LIST, BSSIDs), 12);
}

#[test]
fn available_network_offsets() {
    assert_eq!(offset_of!(sys::WLAN_AVAILABLE_NETWORK, dot11BssType), 548);
    assert_eq!(offset_of!(sys::WLAN_AVAILABLE_NETWORK, dot11PhyTypes), 568);
    assert_eq!(offset_of!(sys::WLAN_AVAILABLE_NETWORK, wlanSignalQuality), 604);
    assert_eq!(offset_of!(sys::WLAN_AVAILABLE_NETWORK, dwFlags), 620);
}

#[test]
fn bss_entry_offsets() {
    assert_eq!(align_of::<sys::WLAN_BSS_ENTRY>(), 8);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, dot11Bssid), 40);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, dot11BssType), 48);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, bInRegDomain), 64);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, ullTimestamp), 72);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, ulChCenterFrequency), 92);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, wlanRateSet), 96);
    assert_eq!(offset_of!(sys::WLAN_BSS_ENTRY, ulIeOffset), 352);
}

#[test]
fn connection_record_offsets() {
    assert_eq!(
        offset_of!(sys::WLAN_CONNECTION_ATTRIBUTES, wlanAssociationAttributes),
        520
    );
    assert_eq!(
        offset_of!(sys::WLAN_CONNECTION_ATTRIBUTES, wlanSecurityAttributes),
        588
    );
    assert_eq!(offset_of!(sys::WLAN_ASSOCIATION_ATTRIBUTES, dot11PhyType), 48);
    assert_eq!(
        offset_of!(sys::WLAN_CONNECTION_NOTIFICATION_DATA, strProfileXml),
        568
    );
    assert_eq!(offset_of!(sys::WLAN_HOSTED_NETWORK_STATUS, PeerList), 40);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pointer_bearing_records_on_64_bit() {
    assert_eq!(size_of::<sys::WLAN_NOTIFICATION_DATA>(), 40);
    assert_eq!(offset_of!(sys::WLAN_NOTIFICATION_DATA, pData), 32);
    assert_eq!(size_of::<sys::WLAN_CONNECTION_PARAMETERS>(), 40);
    assert_eq!(offset_of!(sys::WLAN_CONNECTION_PARAMETERS, dot11BssType), 32);
}

fn put_u32(image: &mut [u8], offset: usize, value: u32) {
    image[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[test]
fn available_network_decodes_from_byte_image() {
    let mut image = vec![0u8; size_of::<sys::WLAN_AVAILABLE_NETWORK>()];
    for (i, unit) in "Office".encode_utf16().enumerate() {
        image[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
    }
    put_u32(&mut image, 512, 6);
    image[516..522].copy_from_slice(b"Office");
    put_u32(&mut image, 548, sys::dot11_BSS_type_infrastructure);
    put_u32(&mut image, 552, 2);
    put_u32(&mut image, 556, 1);
    put_u32(&mut image, 564, 2);
    put_u32(&mut image, 568, sys::dot11_phy_type_ht);
    put_u32(&mut image, 572, sys::dot11_phy_type_vht);
    put_u32(&mut image, 604, 87);
    put_u32(&mut image, 608, 1);
    put_u32(&mut image, 612, sys::DOT11_AUTH_ALGO_RSNA_PSK);
    put_u32(&mut image, 616, sys::DOT11_CIPHER_ALGO_CCMP);
    put_u32(&mut image, 620, sys::WLAN_AVAILABLE_NETWORK_CONNECTED);

    let native: sys::WLAN_AVAILABLE_NETWORK =
        unsafe { std::ptr::read_unaligned(image.as_ptr().cast()) };
    let network = AvailableNetwork::from_native(&native).unwrap();

    assert_eq!(network.profile_name, "Office");
    assert_eq!(network.ssid.as_bytes(), b"Office");
    assert_eq!(network.bss_type, BssType::Infrastructure);
    assert_eq!(network.bssid_count, 2);
    assert!(network.connectable);
    assert_eq!(network.phy_types, vec![PhyType::Ht, PhyType::Vht]);
    assert_eq!(network.signal_quality, 87);
    assert!(network.security_enabled);
    assert_eq!(network.auth_algorithm, AuthAlgorithm::RsnaPsk);
    assert_eq!(network.cipher_algorithm, CipherAlgorithm::Ccmp);
    assert!(network.is_connected());
}

#[test]
fn oversized_phy_count_is_rejected() {
    let mut native: sys::WLAN_AVAILABLE_NETWORK = unsafe { std::mem::zeroed() };
    native.uNumberOfPhyTypes = 9;
    assert!(AvailableNetwork::from_native(&native).is_err());
}

#[cfg(windows)]
mod against_windows_crate {
    use std::mem::size_of;

    use windows::Win32::NetworkManagement::WiFi as w;
    use wlanapi::wlan::sys;

    #[test]
    fn sizes_match_windows_rs() {
        assert_eq!(size_of::<sys::WLAN_INTERFACE_INFO>(), size_of::<w::WLAN_INTERFACE_INFO>());
        assert_eq!(
            size_of::<sys::WLAN_AVAILABLE_NETWORK>(),
            size_of::<w::WLAN_AVAILABLE_NETWORK>()
        );
        assert_eq!(size_of::<sys::WLAN_BSS_ENTRY>(), size_of::<w::WLAN_BSS_ENTRY>());
        assert_eq!(size_of::<sys::WLAN_PROFILE_INFO>(), size_of::<w::WLAN_PROFILE_INFO>());
        assert_eq!(
            size_of::<sys::WLAN_CONNECTION_ATTRIBUTES>(),
            size_of::<w::WLAN_CONNECTION_ATTRIBUTES>()
        );
        assert_eq!(
            size_of::<sys::WLAN_CONNECTION_PARAMETERS>(),
            size_of::<w::WLAN_CONNECTION_PARAMETERS>()
        );
        assert_eq!(
            size_of::<sys::WLAN_HOSTED_NETWORK_STATUS>(),
            size_of::<w::WLAN_HOSTED_NETWORK_STATUS>()
        );
    }
}
