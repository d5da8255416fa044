use std::ffi::c_void;
use std::mem::{offset_of, size_of};
use std::ptr;

use tokio::sync::mpsc::UnboundedSender;

use crate::error::WlanResult;
use crate::wlan::handle::{Session, check};
use crate::wlan::loader::entry;
use crate::wlan::security::reason_code_to_string;
use crate::wlan::sys;
use crate::wlan::types::{
    BssType, ConnectionMode, Guid, HostedNetworkPeer, HostedNetworkState, RadioState, Ssid,
};
use crate::wlan::wide::from_wide;

/// Payload of an ACM connection notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionNotification {
    pub mode: ConnectionMode,
    pub profile_name: String,
    pub ssid: Ssid,
    pub bss_type: BssType,
    pub security_enabled: bool,
    pub reason_code: u32,
    pub flags: u32,
    /// Profile XML, present for some failures of temporary-profile connections
    pub profile_xml: Option<String>,
}

/// A decoded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    ConnectionStart(ConnectionNotification),
    Connected(ConnectionNotification),
    ConnectionFailed {
        connection: ConnectionNotification,
        reason: String,
    },
    Disconnecting(ConnectionNotification),
    Disconnected(ConnectionNotification),
    ScanComplete,
    ScanFailed {
        reason_code: u32,
        reason: String,
    },
    InterfaceArrival,
    InterfaceRemoval,
    HostedNetworkStateChange {
        old: HostedNetworkState,
        new: HostedNetworkState,
        reason: u32,
    },
    HostedNetworkPeerStateChange {
        old: HostedNetworkPeer,
        new: HostedNetworkPeer,
        reason: u32,
    },
    HostedNetworkRadioStateChange {
        software: RadioState,
        hardware: RadioState,
    },
    /// Any notification not decoded above, with its raw payload
    Other { data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub source: u32,
    pub code: u32,
    pub interface: Guid,
    pub event: NotificationEvent,
}

fn payload(data: &sys::WLAN_NOTIFICATION_DATA) -> &[u8] {
    if data.pData.is_null() || data.dwDataSize == 0 {
        return &[];
    }
    // SAFETY: the service guarantees `dwDataSize` readable bytes at `pData`.
    unsafe { std::slice::from_raw_parts(data.pData.cast::<u8>(), data.dwDataSize as usize) }
}

fn read<T: Copy>(bytes: &[u8]) -> Option<T> {
    if bytes.len() < size_of::<T>() {
        return None;
    }
    // SAFETY: length checked; only instantiated with plain-data sys records.
    Some(unsafe { ptr::read_unaligned(bytes.as_ptr().cast::<T>()) })
}

fn connection_payload(bytes: &[u8]) -> Option<ConnectionNotification> {
    let native: sys::WLAN_CONNECTION_NOTIFICATION_DATA = read(bytes)?;
    let xml_start = offset_of!(sys::WLAN_CONNECTION_NOTIFICATION_DATA, strProfileXml);
    let units: Vec<u16> = bytes[xml_start..]
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let profile_xml = Some(from_wide(&units)).filter(|xml| !xml.is_empty());
    Some(ConnectionNotification {
        mode: ConnectionMode::from_raw(native.wlanConnectionMode),
        profile_name: from_wide(&native.strProfileName),
        ssid: Ssid::from_native(&native.dot11Ssid).ok()?,
        bss_type: BssType::from_raw(native.dot11BssType),
        security_enabled: native.bSecurityEnabled != sys::FALSE,
        reason_code: native.wlanReasonCode,
        flags: native.dwFlags,
        profile_xml,
    })
}

fn decode_acm(code: u32, bytes: &[u8]) -> Option<NotificationEvent> {
    let event = match code {
        sys::wlan_notification_acm_connection_start => {
            NotificationEvent::ConnectionStart(connection_payload(bytes)?)
        }
        sys::wlan_notification_acm_connection_complete => {
            NotificationEvent::Connected(connection_payload(bytes)?)
        }
        sys::wlan_notification_acm_connection_attempt_fail => {
            let connection = connection_payload(bytes)?;
            let reason = reason_code_to_string(connection.reason_code);
            NotificationEvent::ConnectionFailed { connection, reason }
        }
        sys::wlan_notification_acm_disconnecting => {
            NotificationEvent::Disconnecting(connection_payload(bytes)?)
        }
        sys::wlan_notification_acm_disconnected => {
            NotificationEvent::Disconnected(connection_payload(bytes)?)
        }
        sys::wlan_notification_acm_scan_complete => NotificationEvent::ScanComplete,
        sys::wlan_notification_acm_scan_fail => {
            let reason_code: u32 = read(bytes)?;
            NotificationEvent::ScanFailed {
                reason_code,
                reason: reason_code_to_string(reason_code),
            }
        }
        sys::wlan_notification_acm_interface_arrival => NotificationEvent::InterfaceArrival,
        sys::wlan_notification_acm_interface_removal => NotificationEvent::InterfaceRemoval,
        _ => return None,
    };
    Some(event)
}

fn decode_hosted(code: u32, bytes: &[u8]) -> Option<NotificationEvent> {
    let event = match code {
        sys::wlan_hosted_network_state_change => {
            let change: sys::WLAN_HOSTED_NETWORK_STATE_CHANGE = read(bytes)?;
            NotificationEvent::HostedNetworkStateChange {
                old: HostedNetworkState::from_raw(change.OldState),
                new: HostedNetworkState::from_raw(change.NewState),
                reason: change.StateChangeReason,
            }
        }
        sys::wlan_hosted_network_peer_state_change => {
            let change: sys::WLAN_HOSTED_NETWORK_DATA_PEER_STATE_CHANGE = read(bytes)?;
            NotificationEvent::HostedNetworkPeerStateChange {
                old: HostedNetworkPeer::from(&change.OldState),
                new: HostedNetworkPeer::from(&change.NewState),
                reason: change.PeerStateChangeReason,
            }
        }
        sys::wlan_hosted_network_radio_state_change => {
            let radio: sys::WLAN_HOSTED_NETWORK_RADIO_STATE = read(bytes)?;
            NotificationEvent::HostedNetworkRadioStateChange {
                software: RadioState::from_raw(radio.dot11SoftwareRadioState),
                hardware: RadioState::from_raw(radio.dot11HardwareRadioState),
            }
        }
        _ => return None,
    };
    Some(event)
}

/// Decode a notification the service delivered to the callback.
pub fn decode_notification(data: &sys::WLAN_NOTIFICATION_DATA) -> Notification {
    let bytes = payload(data);
    let event = match data.NotificationSource {
        sys::WLAN_NOTIFICATION_SOURCE_ACM => decode_acm(data.NotificationCode, bytes),
        sys::WLAN_NOTIFICATION_SOURCE_HNWK => decode_hosted(data.NotificationCode, bytes),
        _ => None,
    };
    Notification {
        source: data.NotificationSource,
        code: data.NotificationCode,
        interface: Guid::from(data.InterfaceGuid),
        event: event.unwrap_or_else(|| NotificationEvent::Other {
            data: bytes.to_vec(),
        }),
    }
}

unsafe extern "system" fn notification_callback(
    data: *mut sys::WLAN_NOTIFICATION_DATA,
    context: *mut c_void,
) {
    if data.is_null() || context.is_null() {
        return;
    }

    // SAFETY: checked for null above. The context is the sender boxed in
    // `NotificationListener::with_session` and outlives the registration.
    let (data, sender) = unsafe {
        (
            &*data,
            &*(context as *const UnboundedSender<Notification>),
        )
    };

    let notification = decode_notification(data);
    tracing::trace!(
        source = notification.source,
        code = notification.code,
        "WLAN notification"
    );
    let _ = sender.send(notification);
}

/// WLAN event listener that forwards notifications to a channel.
///
/// Dropping it unregisters the callback and closes its session.
#[derive(Debug)]
pub struct NotificationListener {
    session: Option<Session>,
    context: *mut UnboundedSender<Notification>,
}

// SAFETY: the boxed sender is `Send` and only touched by the callback until drop.
unsafe impl Send for NotificationListener {}

impl NotificationListener {
    /// Register for `sources` (`WLAN_NOTIFICATION_SOURCE_*` bits) on `session`.
    pub fn with_session(
        session: Session,
        sources: u32,
        sender: UnboundedSender<Notification>,
    ) -> WlanResult<Self> {
        let register = entry(
            session.api().register_notification,
            "WlanRegisterNotification",
        )?;
        let context = Box::into_raw(Box::new(sender));
        let result = unsafe {
            register(
                session.as_raw(),
                sources,
                sys::TRUE,
                Some(notification_callback),
                context.cast(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        if let Err(err) = check("WlanRegisterNotification", result) {
            drop(unsafe { Box::from_raw(context) });
            return Err(err);
        }
        Ok(Self {
            session: Some(session),
            context,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl Drop for NotificationListener {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(register) = session.api().register_notification {
                let result = unsafe {
                    register(
                        session.as_raw(),
                        sys::WLAN_NOTIFICATION_SOURCE_NONE,
                        sys::TRUE,
                        None,
                        ptr::null_mut(),
                        ptr::null_mut(),
                        ptr::null_mut(),
                    )
                };
                let _ = check("WlanRegisterNotification", result);
            }
            // Closing the handle waits for callbacks still in flight.
            drop(session);
        }
        drop(unsafe { Box::from_raw(self.context) });
    }
}

/// Start listening for WLAN events on a new session
pub fn start_listener(
    sources: u32,
    sender: UnboundedSender<Notification>,
) -> WlanResult<NotificationListener> {
    NotificationListener::with_session(Session::open()?, sources, sender)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(source: u32, code: u32, payload: &mut [u8]) -> sys::WLAN_NOTIFICATION_DATA {
        sys::WLAN_NOTIFICATION_DATA {
            NotificationSource: source,
            NotificationCode: code,
            InterfaceGuid: sys::GUID::default(),
            dwDataSize: payload.len() as u32,
            pData: payload.as_mut_ptr().cast(),
        }
    }

    fn bytes_of<T: Copy>(value: &T) -> Vec<u8> {
        unsafe { std::slice::from_raw_parts((value as *const T).cast::<u8>(), size_of::<T>()) }
            .to_vec()
    }

    fn connection_data(ssid: &[u8], reason: u32) -> sys::WLAN_CONNECTION_NOTIFICATION_DATA {
        let mut data: sys::WLAN_CONNECTION_NOTIFICATION_DATA = unsafe { std::mem::zeroed() };
        data.wlanConnectionMode = sys::wlan_connection_mode_profile;
        data.dot11Ssid.uSSIDLength = ssid.len() as u32;
        data.dot11Ssid.ucSSID[..ssid.len()].copy_from_slice(ssid);
        data.dot11BssType = sys::dot11_BSS_type_infrastructure;
        data.wlanReasonCode = reason;
        for (slot, unit) in data.strProfileName.iter_mut().zip("Home".encode_utf16()) {
            *slot = unit;
        }
        data
    }

    #[test]
    fn connection_complete_decodes_ssid_and_profile() {
        let mut bytes = bytes_of(&connection_data(b"HomeNet", 0));
        let native = notification(
            sys::WLAN_NOTIFICATION_SOURCE_ACM,
            sys::wlan_notification_acm_connection_complete,
            &mut bytes,
        );
        let decoded = decode_notification(&native);
        let NotificationEvent::Connected(connection) = decoded.event else {
            panic!("unexpected event {:?}", decoded.event);
        };
        assert_eq!(connection.ssid.to_string(), "HomeNet");
        assert_eq!(connection.profile_name, "Home");
        assert_eq!(connection.mode, ConnectionMode::Profile);
        assert_eq!(connection.profile_xml, None);
    }

    #[test]
    fn attempt_failure_carries_reason_text() {
        let mut bytes = bytes_of(&connection_data(b"Cafe", 0x00050004));
        let native = notification(
            sys::WLAN_NOTIFICATION_SOURCE_ACM,
            sys::wlan_notification_acm_connection_attempt_fail,
            &mut bytes,
        );
        match decode_notification(&native).event {
            NotificationEvent::ConnectionFailed { connection, reason } => {
                assert_eq!(connection.reason_code, 0x00050004);
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn short_payload_falls_back_to_raw_bytes() {
        let mut bytes = vec![1u8, 2, 3];
        let native = notification(
            sys::WLAN_NOTIFICATION_SOURCE_ACM,
            sys::wlan_notification_acm_disconnected,
            &mut bytes,
        );
        assert_eq!(
            decode_notification(&native).event,
            NotificationEvent::Other {
                data: vec![1, 2, 3]
            }
        );
    }

    #[test]
    fn hosted_state_change_decodes() {
        let change = sys::WLAN_HOSTED_NETWORK_STATE_CHANGE {
            OldState: sys::wlan_hosted_network_idle,
            NewState: sys::wlan_hosted_network_active,
            StateChangeReason: sys::wlan_hosted_network_reason_user_action,
        };
        let mut bytes = bytes_of(&change);
        let native = notification(
            sys::WLAN_NOTIFICATION_SOURCE_HNWK,
            sys::wlan_hosted_network_state_change,
            &mut bytes,
        );
        assert_eq!(
            decode_notification(&native).event,
            NotificationEvent::HostedNetworkStateChange {
                old: HostedNetworkState::Idle,
                new: HostedNetworkState::Active,
                reason: sys::wlan_hosted_network_reason_user_action,
            }
        );
    }

    #[test]
    fn callback_forwards_to_channel() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Notification>();
        let context = Box::into_raw(Box::new(tx));
        let mut native = notification(
            sys::WLAN_NOTIFICATION_SOURCE_ACM,
            sys::wlan_notification_acm_scan_complete,
            &mut [],
        );
        unsafe { notification_callback(&mut native, context.cast()) };
        drop(unsafe { Box::from_raw(context) });

        let received = rx.try_recv().unwrap();
        assert_eq!(received.event, NotificationEvent::ScanComplete);
    }
}
