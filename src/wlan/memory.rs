//! Ownership of memory crossing the native boundary.
//!
//! Buffers the OS allocates on our behalf are held in [`WlanMemory`] and freed
//! through `WlanFreeMemory` when the guard drops. Buffers we hand to the OS
//! are built in [`NativeBuffer`].

use std::ffi::c_void;
use std::mem::{offset_of, size_of};
use std::ops::Deref;
use std::ptr::{self, NonNull, addr_of};

use crate::config::MAX_LIST_ITEMS;
use crate::error::{WlanError, WlanResult};
use crate::wlan::sys;

/// A buffer allocated by `wlanapi.dll`, released with `WlanFreeMemory` on drop.
pub struct WlanMemory<T> {
    ptr: NonNull<T>,
    free: sys::WlanFreeMemoryFn,
}

impl<T> WlanMemory<T> {
    /// Take ownership of a native allocation.
    ///
    /// Returns `NullBuffer` if the call reported success but left the pointer null.
    ///
    /// # Safety
    /// `ptr` must be null or a live allocation holding a valid `T`, and `free`
    /// must be the function that releases it.
    pub unsafe fn from_raw(
        ptr: *mut T,
        free: sys::WlanFreeMemoryFn,
        operation: &'static str,
    ) -> WlanResult<Self> {
        NonNull::new(ptr)
            .map(|ptr| Self { ptr, free })
            .ok_or(WlanError::NullBuffer { operation })
    }

    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }
}

impl<T> Deref for WlanMemory<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: validity was promised in `from_raw` and holds until drop.
        unsafe { self.ptr.as_ref() }
    }
}

impl<T> Drop for WlanMemory<T> {
    fn drop(&mut self) {
        unsafe { (self.free)(self.ptr.as_ptr().cast::<c_void>()) }
    }
}

/// Native records laid out as `{ count, index, item[1] }` with the item
/// array extending past the declared struct.
///
/// # Safety
/// `items` must return a pointer to the first array element derived from
/// `this` without narrowing its provenance to the declared one-element array.
pub unsafe trait NativeList {
    type Item: Copy;
    const WHAT: &'static str;

    fn count(&self) -> u32;
    fn index(&self) -> u32;
    fn items(this: *const Self) -> *const Self::Item;
}

unsafe impl NativeList for sys::WLAN_INTERFACE_INFO_LIST {
    type Item = sys::WLAN_INTERFACE_INFO;
    const WHAT: &'static str = "WLAN_INTERFACE_INFO_LIST";

    fn count(&self) -> u32 {
        self.dwNumberOfItems
    }
    fn index(&self) -> u32 {
        self.dwIndex
    }
    fn items(this: *const Self) -> *const Self::Item {
        unsafe { addr_of!((*this).InterfaceInfo).cast() }
    }
}

unsafe impl NativeList for sys::WLAN_AVAILABLE_NETWORK_LIST {
    type Item = sys::WLAN_AVAILABLE_NETWORK;
    const WHAT: &'static str = "WLAN_AVAILABLE_NETWORK_LIST";

    fn count(&self) -> u32 {
        self.dwNumberOfItems
    }
    fn index(&self) -> u32 {
        self.dwIndex
    }
    fn items(this: *const Self) -> *const Self::Item {
        unsafe { addr_of!((*this).Network).cast() }
    }
}

unsafe impl NativeList for sys::WLAN_PROFILE_INFO_LIST {
    type Item = sys::WLAN_PROFILE_INFO;
    const WHAT: &'static str = "WLAN_PROFILE_INFO_LIST";

    fn count(&self) -> u32 {
        self.dwNumberOfItems
    }
    fn index(&self) -> u32 {
        self.dwIndex
    }
    fn items(this: *const Self) -> *const Self::Item {
        unsafe { addr_of!((*this).ProfileInfo).cast() }
    }
}

unsafe impl NativeList for sys::DOT11_NETWORK_LIST {
    type Item = sys::DOT11_NETWORK;
    const WHAT: &'static str = "DOT11_NETWORK_LIST";

    fn count(&self) -> u32 {
        self.dwNumberOfItems
    }
    fn index(&self) -> u32 {
        self.dwIndex
    }
    fn items(this: *const Self) -> *const Self::Item {
        unsafe { addr_of!((*this).Network).cast() }
    }
}

pub(crate) fn check_count(what: &'static str, count: usize) -> WlanResult<()> {
    if count > MAX_LIST_ITEMS {
        return Err(WlanError::CapacityExceeded {
            what,
            count,
            capacity: MAX_LIST_ITEMS,
        });
    }
    Ok(())
}

/// Copy exactly `count()` items out of a native list.
///
/// # Safety
/// `list` must point to a valid list whose allocation holds at least
/// `count()` items.
pub unsafe fn copy_items<L: NativeList>(list: *const L) -> WlanResult<Vec<L::Item>> {
    let count = unsafe { (*list).count() } as usize;
    check_count(L::WHAT, count)?;
    let first = L::items(list);
    let items = unsafe { std::slice::from_raw_parts(first, count) };
    Ok(items.to_vec())
}

/// One BSS entry and the information-element bytes that trail it.
pub struct RawBssEntry {
    pub entry: sys::WLAN_BSS_ENTRY,
    pub ie: Vec<u8>,
}

/// Copy the entries of a `WLAN_BSS_LIST`, bounded by its `dwTotalSize`.
///
/// # Safety
/// `list` must point to a valid list allocation of at least `dwTotalSize` bytes.
pub unsafe fn copy_bss_entries(list: *const sys::WLAN_BSS_LIST) -> WlanResult<Vec<RawBssEntry>> {
    const WHAT: &str = "WLAN_BSS_LIST";
    let (total_size, count) =
        unsafe { ((*list).dwTotalSize as usize, (*list).dwNumberOfItems as usize) };
    check_count(WHAT, count)?;

    let header = offset_of!(sys::WLAN_BSS_LIST, wlanBssEntries);
    let entry_size = size_of::<sys::WLAN_BSS_ENTRY>();
    let capacity = total_size.saturating_sub(header) / entry_size;
    if count > capacity {
        return Err(WlanError::CapacityExceeded {
            what: WHAT,
            count,
            capacity,
        });
    }

    let base = list.cast::<u8>();
    let first = unsafe { addr_of!((*list).wlanBssEntries).cast::<sys::WLAN_BSS_ENTRY>() };
    let mut entries = Vec::with_capacity(count);
    for i in 0..count {
        let entry = unsafe { *first.add(i) };
        let entry_offset = header + i * entry_size;
        let ie_start = entry_offset + entry.ulIeOffset as usize;
        let ie_len = entry.ulIeSize as usize;
        let ie = if ie_len == 0 {
            Vec::new()
        } else if ie_start.saturating_add(ie_len) > total_size {
            return Err(WlanError::CapacityExceeded {
                what: "WLAN_BSS_ENTRY information elements",
                count: ie_start.saturating_add(ie_len),
                capacity: total_size,
            });
        } else {
            unsafe { std::slice::from_raw_parts(base.add(ie_start), ie_len) }.to_vec()
        };
        entries.push(RawBssEntry { entry, ie });
    }
    Ok(entries)
}

/// An 8-byte aligned, zero-initialised buffer for variable-length input records.
pub struct NativeBuffer {
    storage: Vec<u64>,
    len: usize,
}

impl NativeBuffer {
    pub fn zeroed(len: usize) -> Self {
        Self {
            storage: vec![0u64; len.div_ceil(8).max(1)],
            len,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_ptr<T>(&self) -> *const T {
        self.storage.as_ptr().cast()
    }

    fn as_mut_ptr(&mut self) -> *mut u8 {
        self.storage.as_mut_ptr().cast()
    }

    /// Write `value` at byte `offset`.
    fn write<T: Copy>(&mut self, offset: usize, value: T) {
        assert!(offset + size_of::<T>() <= self.len, "write past NativeBuffer end");
        unsafe { ptr::write_unaligned(self.as_mut_ptr().add(offset).cast::<T>(), value) }
    }
}

/// Build a `DOT11_NETWORK_LIST` holding `networks`.
pub fn network_list(networks: &[sys::DOT11_NETWORK]) -> WlanResult<NativeBuffer> {
    check_count("DOT11_NETWORK_LIST", networks.len())?;
    let header = offset_of!(sys::DOT11_NETWORK_LIST, Network);
    let item = size_of::<sys::DOT11_NETWORK>();
    let len = size_of::<sys::DOT11_NETWORK_LIST>().max(header + item * networks.len());
    let mut buffer = NativeBuffer::zeroed(len);
    buffer.write(offset_of!(sys::DOT11_NETWORK_LIST, dwNumberOfItems), networks.len() as u32);
    buffer.write(offset_of!(sys::DOT11_NETWORK_LIST, dwIndex), 0u32);
    for (i, network) in networks.iter().enumerate() {
        buffer.write(header + i * item, *network);
    }
    Ok(buffer)
}

/// Build a `DOT11_BSSID_LIST` holding `bssids`.
pub fn bssid_list(bssids: &[sys::DOT11_MAC_ADDRESS]) -> WlanResult<NativeBuffer> {
    check_count("DOT11_BSSID_LIST", bssids.len())?;
    let header = offset_of!(sys::DOT11_BSSID_LIST, BSSIDs);
    let len = size_of::<sys::DOT11_BSSID_LIST>().max(header + 6 * bssids.len());
    let mut buffer = NativeBuffer::zeroed(len);
    buffer.write(
        offset_of!(sys::DOT11_BSSID_LIST, Header),
        sys::NDIS_OBJECT_HEADER {
            Type: sys::NDIS_OBJECT_TYPE_DEFAULT,
            Revision: sys::DOT11_BSSID_LIST_REVISION_1,
            Size: size_of::<sys::DOT11_BSSID_LIST>() as u16,
        },
    );
    let count = bssids.len() as u32;
    buffer.write(offset_of!(sys::DOT11_BSSID_LIST, uNumOfEntries), count);
    buffer.write(offset_of!(sys::DOT11_BSSID_LIST, uTotalNumOfEntries), count);
    for (i, bssid) in bssids.iter().enumerate() {
        buffer.write(header + i * 6, *bssid);
    }
    Ok(buffer)
}

/// Build a `WLAN_RAW_DATA` blob carrying `data`.
pub fn raw_data(data: &[u8]) -> NativeBuffer {
    let header = offset_of!(sys::WLAN_RAW_DATA, DataBlob);
    let len = size_of::<sys::WLAN_RAW_DATA>().max(header + data.len());
    let mut buffer = NativeBuffer::zeroed(len);
    buffer.write(offset_of!(sys::WLAN_RAW_DATA, dwDataSize), data.len() as u32);
    for (i, byte) in data.iter().enumerate() {
        buffer.write(header + i, *byte);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FREED: AtomicUsize = AtomicUsize::new(0);

    unsafe extern "system" fn counting_free(_memory: *mut c_void) {
        FREED.fetch_add(1, Ordering::SeqCst);
    }

    fn interface(tag: u8) -> sys::WLAN_INTERFACE_INFO {
        sys::WLAN_INTERFACE_INFO {
            InterfaceGuid: sys::GUID {
                Data1: u32::from(tag),
                ..Default::default()
            },
            strInterfaceDescription: [u16::from(b'a' + tag); 256],
            isState: sys::wlan_interface_state_connected,
        }
    }

    #[repr(C)]
    struct InterfaceListWithTail {
        list: sys::WLAN_INTERFACE_INFO_LIST,
        tail: [sys::WLAN_INTERFACE_INFO; 3],
    }

    const BSS_HEADER: usize = offset_of!(sys::WLAN_BSS_LIST, wlanBssEntries);
    const BSS_ENTRY: usize = size_of::<sys::WLAN_BSS_ENTRY>();

    fn bss_entry(tag: u8, ie_offset: u32, ie_size: u32) -> sys::WLAN_BSS_ENTRY {
        let mut entry: sys::WLAN_BSS_ENTRY = unsafe { std::mem::zeroed() };
        entry.dot11Bssid = [tag; 6];
        entry.ulIeOffset = ie_offset;
        entry.ulIeSize = ie_size;
        entry
    }

    /// Lay out a `WLAN_BSS_LIST` allocation: header, entries, then trailing IE bytes.
    fn bss_list_image(
        total_size: u32,
        count: u32,
        entries: &[sys::WLAN_BSS_ENTRY],
        tail: &[u8],
    ) -> Vec<u64> {
        let len = BSS_HEADER + entries.len() * BSS_ENTRY + tail.len();
        let mut storage = vec![0u64; len.max(total_size as usize).div_ceil(8)];
        let base = storage.as_mut_ptr().cast::<u8>();
        unsafe {
            ptr::copy_nonoverlapping(total_size.to_le_bytes().as_ptr(), base, 4);
            ptr::copy_nonoverlapping(count.to_le_bytes().as_ptr(), base.add(4), 4);
            ptr::copy_nonoverlapping(
                entries.as_ptr().cast::<u8>(),
                base.add(BSS_HEADER),
                entries.len() * BSS_ENTRY,
            );
            ptr::copy_nonoverlapping(
                tail.as_ptr(),
                base.add(BSS_HEADER + entries.len() * BSS_ENTRY),
                tail.len(),
            );
        }
        storage
    }

    #[test]
    fn bss_entries_carry_their_trailing_ie_bytes() {
        let tail = [0x00, 0x03, b'f', 0xdd, 0x00];
        let ie_area = 2 * BSS_ENTRY;
        let entries = [
            // Each IE offset is relative to the start of its own entry.
            bss_entry(1, ie_area as u32, 3),
            bss_entry(2, (ie_area - BSS_ENTRY + 3) as u32, 2),
        ];
        let total = (BSS_HEADER + ie_area + tail.len()) as u32;
        let image = bss_list_image(total, 2, &entries, &tail);

        let copied =
            unsafe { copy_bss_entries(image.as_ptr().cast::<sys::WLAN_BSS_LIST>()) }.unwrap();
        assert_eq!(copied.len(), 2);
        assert_eq!(copied[0].entry.dot11Bssid, [1; 6]);
        assert_eq!(copied[0].ie, vec![0x00, 0x03, b'f']);
        assert_eq!(copied[1].entry.dot11Bssid, [2; 6]);
        assert_eq!(copied[1].ie, vec![0xdd, 0x00]);
    }

    #[test]
    fn bss_count_beyond_total_size_is_rejected() {
        let entries = [bss_entry(1, 0, 0), bss_entry(2, 0, 0)];
        let total = (BSS_HEADER + BSS_ENTRY) as u32;
        let image = bss_list_image(total, 2, &entries, &[]);

        let err = unsafe { copy_bss_entries(image.as_ptr().cast::<sys::WLAN_BSS_LIST>()) }
            .err()
            .unwrap();
        assert!(matches!(
            err,
            WlanError::CapacityExceeded {
                what: "WLAN_BSS_LIST",
                count: 2,
                capacity: 1
            }
        ));
    }

    #[test]
    fn ie_running_past_total_size_is_rejected() {
        let tail = [0u8; 4];
        let entries = [bss_entry(1, BSS_ENTRY as u32, 10)];
        let total = (BSS_HEADER + BSS_ENTRY + tail.len()) as u32;
        let image = bss_list_image(total, 1, &entries, &tail);

        let err = unsafe { copy_bss_entries(image.as_ptr().cast::<sys::WLAN_BSS_LIST>()) }
            .err()
            .unwrap();
        assert!(matches!(
            err,
            WlanError::CapacityExceeded { count, capacity, .. }
                if count == BSS_HEADER + BSS_ENTRY + 10 && capacity == total as usize
        ));
    }

    #[test]
    fn guard_frees_exactly_once() {
        let mut value = 7u32;
        let before = FREED.load(Ordering::SeqCst);
        {
            let guard = unsafe { WlanMemory::from_raw(&mut value, counting_free, "test") }.unwrap();
            assert_eq!(*guard, 7);
        }
        assert_eq!(FREED.load(Ordering::SeqCst), before + 1);
    }

    #[test]
    fn null_success_is_an_error() {
        let result = unsafe {
            WlanMemory::<u32>::from_raw(ptr::null_mut(), counting_free, "WlanEnumInterfaces")
        };
        assert!(matches!(
            result,
            Err(WlanError::NullBuffer {
                operation: "WlanEnumInterfaces"
            })
        ));
    }

    #[test]
    fn copies_stop_at_reported_count() {
        let buffer = InterfaceListWithTail {
            list: sys::WLAN_INTERFACE_INFO_LIST {
                dwNumberOfItems: 2,
                dwIndex: 1,
                InterfaceInfo: [interface(0)],
            },
            tail: [interface(1), interface(2), interface(3)],
        };
        let list = (&buffer as *const InterfaceListWithTail).cast::<sys::WLAN_INTERFACE_INFO_LIST>();
        let items = unsafe { copy_items(list) }.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].InterfaceGuid.Data1, 0);
        assert_eq!(items[1].InterfaceGuid.Data1, 1);
        assert_eq!(buffer.list.index(), 1);
    }

    #[test]
    fn empty_list_copies_nothing() {
        let list = sys::WLAN_INTERFACE_INFO_LIST {
            dwNumberOfItems: 0,
            dwIndex: 0,
            InterfaceInfo: [interface(9)],
        };
        let items = unsafe { copy_items(&list as *const _) }.unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn absurd_count_is_rejected_before_reading() {
        let list = sys::WLAN_INTERFACE_INFO_LIST {
            dwNumberOfItems: u32::MAX,
            dwIndex: 0,
            InterfaceInfo: [interface(0)],
        };
        let err = unsafe { copy_items(&list as *const _) }.unwrap_err();
        assert!(matches!(err, WlanError::CapacityExceeded { .. }));
    }

    #[test]
    fn network_list_round_trips_through_copy() {
        let mut ssid = sys::DOT11_SSID {
            uSSIDLength: 4,
            ucSSID: [0; 32],
        };
        ssid.ucSSID[..4].copy_from_slice(b"home");
        let networks = [
            sys::DOT11_NETWORK {
                dot11Ssid: ssid,
                dot11BssType: sys::dot11_BSS_type_infrastructure,
            },
            sys::DOT11_NETWORK {
                dot11Ssid: ssid,
                dot11BssType: sys::dot11_BSS_type_independent,
            },
        ];
        let buffer = network_list(&networks).unwrap();
        let items = unsafe { copy_items(buffer.as_ptr::<sys::DOT11_NETWORK_LIST>()) }.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].dot11BssType, sys::dot11_BSS_type_independent);
        assert_eq!(&items[0].dot11Ssid.ucSSID[..4], b"home");
    }

    #[test]
    fn bssid_list_header_is_filled() {
        let buffer = bssid_list(&[[1, 2, 3, 4, 5, 6], [7, 8, 9, 10, 11, 12]]).unwrap();
        let list = unsafe { &*buffer.as_ptr::<sys::DOT11_BSSID_LIST>() };
        assert_eq!(list.Header.Type, sys::NDIS_OBJECT_TYPE_DEFAULT);
        assert_eq!(list.uNumOfEntries, 2);
        let bytes =
            unsafe { std::slice::from_raw_parts(buffer.as_ptr::<u8>(), buffer.len()) };
        assert_eq!(&bytes[12..24], &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn raw_data_carries_length_prefix() {
        let buffer = raw_data(&[0xdd, 0x05, 0x01]);
        let bytes = unsafe { std::slice::from_raw_parts(buffer.as_ptr::<u8>(), buffer.len()) };
        assert_eq!(&bytes[..4], &3u32.to_ne_bytes());
        assert_eq!(&bytes[4..7], &[0xdd, 0x05, 0x01]);
    }
}
