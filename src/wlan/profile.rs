use std::io::Cursor;
use std::ptr;

use quick_xml::Reader;
use quick_xml::escape::unescape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{WlanError, WlanResult};
use crate::wlan::handle::{Session, check, check_reason};
use crate::wlan::loader::entry;
use crate::wlan::memory::copy_items;
use crate::wlan::sys;
use crate::wlan::types::{EapMethodType, Guid, Profile, ProfileInfo};
use crate::wlan::wide::{from_wide_ptr, to_wide};

const PROFILE_NAMESPACE: &str = "http://www.microsoft.com/networking/WLAN/profile/v1";

fn xml_error(operation: &'static str, err: impl std::fmt::Display) -> WlanError {
    WlanError::Encoding {
        operation,
        detail: err.to_string(),
    }
}

/// Create a WiFi profile XML document
pub fn create_profile_xml(
    ssid: &str,
    auth: &str,
    cipher: &str,
    key: Option<&SecretString>,
    hidden: bool,
) -> WlanResult<String> {
    const OP: &str = "create_profile_xml";
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let w = &mut writer;

    write_event(w, Event::Decl(BytesDecl::new("1.0", None, None)))?;
    let mut wlan_profile = BytesStart::new("WLANProfile");
    wlan_profile.push_attribute(("xmlns", PROFILE_NAMESPACE));
    write_event(w, Event::Start(wlan_profile))?;

    write_element(w, "name", ssid)?;

    write_event(w, Event::Start(BytesStart::new("SSIDConfig")))?;
    write_event(w, Event::Start(BytesStart::new("SSID")))?;
    write_element(w, "name", ssid)?;
    write_event(w, Event::End(BytesEnd::new("SSID")))?;
    if hidden {
        write_element(w, "nonBroadcast", "true")?;
    }
    write_event(w, Event::End(BytesEnd::new("SSIDConfig")))?;

    write_element(w, "connectionType", "ESS")?;
    write_element(w, "connectionMode", "manual")?;

    write_event(w, Event::Start(BytesStart::new("MSM")))?;
    write_event(w, Event::Start(BytesStart::new("security")))?;
    write_event(w, Event::Start(BytesStart::new("authEncryption")))?;

    let (xml_auth, xml_cipher) = profile_auth_cipher(auth, cipher);
    write_element(w, "authentication", xml_auth)?;
    write_element(w, "encryption", xml_cipher)?;
    write_element(w, "useOneX", "false")?;
    write_event(w, Event::End(BytesEnd::new("authEncryption")))?;

    if let Some(key) = key {
        write_event(w, Event::Start(BytesStart::new("sharedKey")))?;
        write_element(w, "keyType", "passPhrase")?;
        write_element(w, "protected", "false")?;
        write_element(w, "keyMaterial", key.expose_secret())?;
        write_event(w, Event::End(BytesEnd::new("sharedKey")))?;
    }

    write_event(w, Event::End(BytesEnd::new("security")))?;
    write_event(w, Event::End(BytesEnd::new("MSM")))?;
    write_event(w, Event::End(BytesEnd::new("WLANProfile")))?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(|err| xml_error(OP, err))
}

/// Map display names of auth/cipher algorithms to profile schema values.
fn profile_auth_cipher(auth: &str, cipher: &str) -> (&'static str, &'static str) {
    let tkip_or_aes = if cipher == "AES" { "AES" } else { "TKIP" };
    let (xml_auth, xml_cipher) = match auth {
        "WPA3-SAE" => ("WPA3SAE", "AES"),
        "WPA3ENT" | "WPA3-Enterprise" => ("WPA3ENT", "AES"),
        "WPA3ENT192" | "WPA3" => ("WPA3ENT192", "AES"),
        "OWE" => ("OWE", "AES"),
        "WPA2-PSK" => ("WPA2PSK", "AES"),
        "WPA2" => ("WPA2", "AES"),
        "WPA-PSK" => ("WPAPSK", tkip_or_aes),
        "WPA" => ("WPA", tkip_or_aes),
        "Shared" | "WEP" => ("shared", "WEP"),
        "Open" | "open" => ("open", "none"),
        _ => ("WPA2PSK", "AES"),
    };
    if cipher == "GCMP" {
        (xml_auth, "GCMP")
    } else {
        (xml_auth, xml_cipher)
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> WlanResult<()> {
    writer
        .write_event(event)
        .map_err(|err| xml_error("create_profile_xml", err))
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &str,
) -> WlanResult<()> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(value)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

/// Text content of the first element named `name` (namespace prefix ignored).
pub fn element_text(xml: &str, name: &str) -> WlanResult<Option<String>> {
    const OP: &str = "parse profile XML";
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().map_err(|err| xml_error(OP, err))? {
            Event::Start(start) if start.local_name().as_ref() == name.as_bytes() => {
                let end = start.to_end().into_owned();
                let raw = reader
                    .read_text(end.name())
                    .map_err(|err| xml_error(OP, err))?;
                let text = unescape(&raw).map_err(|err| xml_error(OP, err))?;
                return Ok(Some(text.trim().to_string()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// The profile's `<connectionMode>`, `auto` or `manual`
pub fn connection_mode(xml: &str) -> WlanResult<String> {
    element_text(xml, "connectionMode")?.ok_or(WlanError::ProfileXmlInvalid)
}

/// Check if a profile has auto-connect enabled
pub fn is_auto_connect(xml: &str) -> WlanResult<bool> {
    Ok(connection_mode(xml)? == "auto")
}

/// Rewrite the profile's `<connectionMode>` to `auto` or `manual`.
///
/// Fails with `ProfileXmlInvalid` unless an unprefixed `<connectionMode>` element is found.
pub fn with_connection_mode(xml: &str, auto: bool) -> WlanResult<String> {
    const OPEN: &str = "<connectionMode>";
    const CLOSE: &str = "</connectionMode>";
    connection_mode(xml)?;
    let new_mode = if auto { "auto" } else { "manual" };
    let start = xml.find(OPEN).ok_or(WlanError::ProfileXmlInvalid)? + OPEN.len();
    let end = xml[start..]
        .find(CLOSE)
        .ok_or(WlanError::ProfileXmlInvalid)?
        + start;
    let mut rewritten = String::with_capacity(xml.len());
    rewritten.push_str(&xml[..start]);
    rewritten.push_str(new_mode);
    rewritten.push_str(&xml[end..]);
    Ok(rewritten)
}

impl Session {
    /// Get a profile's XML.
    ///
    /// `flags` may carry `WLAN_PROFILE_GET_PLAINTEXT_KEY`; the returned flags are the
    /// ones the service reports for the profile.
    pub fn profile(&self, interface: &Guid, name: &str, flags: u32) -> WlanResult<Profile> {
        let get = entry(self.api().get_profile, "WlanGetProfile")?;
        let name = to_wide("WlanGetProfile", name)?;
        let mut flags = flags;
        let mut granted_access = 0u32;
        let xml = unsafe {
            self.allocated::<u16>("WlanGetProfile", |out| {
                get(
                    self.as_raw(),
                    interface.as_raw(),
                    name.as_ptr(),
                    ptr::null_mut(),
                    out,
                    &mut flags,
                    &mut granted_access,
                )
            })?
        };
        Ok(Profile {
            xml: unsafe { from_wide_ptr(xml.as_ptr()) },
            flags,
            granted_access,
        })
    }

    /// Get the key material of a saved profile.
    ///
    /// Returns `None` if the profile has no key (open network). Reading the
    /// plaintext key requires the caller to be an administrator or the profile owner.
    pub fn profile_key(&self, interface: &Guid, name: &str) -> WlanResult<Option<SecretString>> {
        let profile = self.profile(interface, name, sys::WLAN_PROFILE_GET_PLAINTEXT_KEY)?;
        Ok(element_text(&profile.xml, "keyMaterial")?
            .filter(|key| !key.is_empty())
            .map(SecretString::from))
    }

    /// Set auto-connect for a profile.
    ///
    /// The profile is read with its plaintext key so writing it back does not force
    /// the user to re-enter credentials.
    pub fn set_auto_connect(&self, interface: &Guid, name: &str, enable: bool) -> WlanResult<()> {
        let profile = self.profile(interface, name, sys::WLAN_PROFILE_GET_PLAINTEXT_KEY)?;
        let xml = with_connection_mode(&profile.xml, enable)?;
        self.set_profile(interface, 0, &xml, None, true)
    }

    /// Create or overwrite a profile from XML.
    ///
    /// `all_user_security` is an SDDL string for all-user profiles.
    pub fn set_profile(
        &self,
        interface: &Guid,
        flags: u32,
        xml: &str,
        all_user_security: Option<&str>,
        overwrite: bool,
    ) -> WlanResult<()> {
        let set = entry(self.api().set_profile, "WlanSetProfile")?;
        let xml = to_wide("WlanSetProfile", xml)?;
        let security = all_user_security
            .map(|sddl| to_wide("WlanSetProfile", sddl))
            .transpose()?;
        let mut reason = 0u32;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                flags,
                xml.as_ptr(),
                security.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                if overwrite { sys::TRUE } else { sys::FALSE },
                ptr::null_mut(),
                &mut reason,
            )
        };
        check_reason("WlanSetProfile", result, reason)
    }

    /// Forget (delete) a saved network profile
    pub fn delete_profile(&self, interface: &Guid, name: &str) -> WlanResult<()> {
        let delete = entry(self.api().delete_profile, "WlanDeleteProfile")?;
        let name = to_wide("WlanDeleteProfile", name)?;
        let result = unsafe {
            delete(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                ptr::null_mut(),
            )
        };
        check("WlanDeleteProfile", result)
    }

    pub fn rename_profile(
        &self,
        interface: &Guid,
        old_name: &str,
        new_name: &str,
    ) -> WlanResult<()> {
        let rename = entry(self.api().rename_profile, "WlanRenameProfile")?;
        let old_name = to_wide("WlanRenameProfile", old_name)?;
        let new_name = to_wide("WlanRenameProfile", new_name)?;
        let result = unsafe {
            rename(
                self.as_raw(),
                interface.as_raw(),
                old_name.as_ptr(),
                new_name.as_ptr(),
                ptr::null_mut(),
            )
        };
        check("WlanRenameProfile", result)
    }

    /// Saved profiles on `interface`, in preference order
    pub fn profiles(&self, interface: &Guid) -> WlanResult<Vec<ProfileInfo>> {
        let get = entry(self.api().get_profile_list, "WlanGetProfileList")?;
        let list = unsafe {
            self.allocated("WlanGetProfileList", |out| {
                get(self.as_raw(), interface.as_raw(), ptr::null_mut(), out)
            })?
        };
        let items = unsafe { copy_items(list.as_ptr())? };
        Ok(items.iter().map(ProfileInfo::from).collect())
    }

    /// Reorder the saved profiles. `names` must list every profile exactly once.
    pub fn set_profile_list(&self, interface: &Guid, names: &[&str]) -> WlanResult<()> {
        let set = entry(self.api().set_profile_list, "WlanSetProfileList")?;
        let wide = names
            .iter()
            .map(|name| to_wide("WlanSetProfileList", name))
            .collect::<WlanResult<Vec<_>>>()?;
        let pointers: Vec<*const u16> = wide.iter().map(|name| name.as_ptr()).collect();
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                pointers.len() as u32,
                pointers.as_ptr(),
                ptr::null_mut(),
            )
        };
        check("WlanSetProfileList", result)
    }

    pub fn set_profile_position(
        &self,
        interface: &Guid,
        name: &str,
        position: u32,
    ) -> WlanResult<()> {
        let set = entry(self.api().set_profile_position, "WlanSetProfilePosition")?;
        let name = to_wide("WlanSetProfilePosition", name)?;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                position,
                ptr::null_mut(),
            )
        };
        check("WlanSetProfilePosition", result)
    }

    pub fn profile_custom_user_data(&self, interface: &Guid, name: &str) -> WlanResult<Vec<u8>> {
        let get = entry(
            self.api().get_profile_custom_user_data,
            "WlanGetProfileCustomUserData",
        )?;
        let name = to_wide("WlanGetProfileCustomUserData", name)?;
        let mut size = 0u32;
        let data = unsafe {
            self.allocated::<u8>("WlanGetProfileCustomUserData", |out| {
                get(
                    self.as_raw(),
                    interface.as_raw(),
                    name.as_ptr(),
                    ptr::null_mut(),
                    &mut size,
                    out,
                )
            })
        };
        // A profile without custom data reports success with no buffer.
        let data = match data {
            Ok(data) => data,
            Err(WlanError::NullBuffer { .. }) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        Ok(unsafe { std::slice::from_raw_parts(data.as_ptr(), size as usize) }.to_vec())
    }

    pub fn set_profile_custom_user_data(
        &self,
        interface: &Guid,
        name: &str,
        data: &[u8],
    ) -> WlanResult<()> {
        let set = entry(
            self.api().set_profile_custom_user_data,
            "WlanSetProfileCustomUserData",
        )?;
        let name = to_wide("WlanSetProfileCustomUserData", name)?;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                data.len() as u32,
                data.as_ptr(),
                ptr::null_mut(),
            )
        };
        check("WlanSetProfileCustomUserData", result)
    }

    /// Store EAP user credentials as an opaque blob for `method`.
    pub fn set_profile_eap_user_data(
        &self,
        interface: &Guid,
        name: &str,
        method: EapMethodType,
        flags: u32,
        data: &[u8],
    ) -> WlanResult<()> {
        let set = entry(
            self.api().set_profile_eap_user_data,
            "WlanSetProfileEapUserData",
        )?;
        let name = to_wide("WlanSetProfileEapUserData", name)?;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                method.to_native(),
                flags,
                data.len() as u32,
                if data.is_empty() {
                    ptr::null()
                } else {
                    data.as_ptr()
                },
                ptr::null_mut(),
            )
        };
        check("WlanSetProfileEapUserData", result)
    }

    /// Store EAP user credentials given as `EapHostUserCredentials` XML.
    pub fn set_profile_eap_xml_user_data(
        &self,
        interface: &Guid,
        name: &str,
        flags: u32,
        xml: &str,
    ) -> WlanResult<()> {
        let set = entry(
            self.api().set_profile_eap_xml_user_data,
            "WlanSetProfileEapXmlUserData",
        )?;
        let name = to_wide("WlanSetProfileEapXmlUserData", name)?;
        let xml = to_wide("WlanSetProfileEapXmlUserData", xml)?;
        let result = unsafe {
            set(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                flags,
                xml.as_ptr(),
                ptr::null_mut(),
            )
        };
        check("WlanSetProfileEapXmlUserData", result)
    }

    /// Persist the temporary profile of the current connection under `name`.
    pub fn save_temporary_profile(
        &self,
        interface: &Guid,
        name: &str,
        all_user_security: Option<&str>,
        flags: u32,
        overwrite: bool,
    ) -> WlanResult<()> {
        let save = entry(self.api().save_temporary_profile, "WlanSaveTemporaryProfile")?;
        let name = to_wide("WlanSaveTemporaryProfile", name)?;
        let security = all_user_security
            .map(|sddl| to_wide("WlanSaveTemporaryProfile", sddl))
            .transpose()?;
        let result = unsafe {
            save(
                self.as_raw(),
                interface.as_raw(),
                name.as_ptr(),
                security.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
                flags,
                if overwrite { sys::TRUE } else { sys::FALSE },
                ptr::null_mut(),
            )
        };
        check("WlanSaveTemporaryProfile", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_xml_has_expected_structure() {
        let key = SecretString::from("hunter2 & more".to_string());
        let xml = create_profile_xml("Café Wi-Fi", "WPA2-PSK", "AES", Some(&key), true).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\"?>"));
        assert!(xml.contains(PROFILE_NAMESPACE));
        assert_eq!(element_text(&xml, "name").unwrap().as_deref(), Some("Café Wi-Fi"));
        assert_eq!(element_text(&xml, "authentication").unwrap().as_deref(), Some("WPA2PSK"));
        assert_eq!(element_text(&xml, "encryption").unwrap().as_deref(), Some("AES"));
        assert_eq!(element_text(&xml, "nonBroadcast").unwrap().as_deref(), Some("true"));
        assert!(xml.contains("hunter2 &amp; more"));
        assert_eq!(
            element_text(&xml, "keyMaterial").unwrap().as_deref(),
            Some("hunter2 & more")
        );
    }

    #[test]
    fn open_profile_has_no_key() {
        let xml = create_profile_xml("Guest", "Open", "None", None, false).unwrap();
        assert_eq!(element_text(&xml, "authentication").unwrap().as_deref(), Some("open"));
        assert_eq!(element_text(&xml, "encryption").unwrap().as_deref(), Some("none"));
        assert_eq!(element_text(&xml, "keyMaterial").unwrap(), None);
        assert_eq!(element_text(&xml, "nonBroadcast").unwrap(), None);
    }

    #[test]
    fn legacy_wpa_keeps_tkip_unless_aes() {
        assert_eq!(profile_auth_cipher("WPA-PSK", "TKIP"), ("WPAPSK", "TKIP"));
        assert_eq!(profile_auth_cipher("WPA-PSK", "AES"), ("WPAPSK", "AES"));
        assert_eq!(profile_auth_cipher("WPA3-SAE", "GCMP"), ("WPA3SAE", "GCMP"));
        assert_eq!(profile_auth_cipher("Mystery", "AES"), ("WPA2PSK", "AES"));
    }

    #[test]
    fn connection_mode_round_trips() {
        let xml = create_profile_xml("Office", "WPA3-SAE", "AES", None, false).unwrap();
        assert_eq!(connection_mode(&xml).unwrap(), "manual");
        assert!(!is_auto_connect(&xml).unwrap());

        let auto = with_connection_mode(&xml, true).unwrap();
        assert!(is_auto_connect(&auto).unwrap());
        let manual = with_connection_mode(&auto, false).unwrap();
        assert_eq!(manual, xml);
    }

    #[test]
    fn padded_connection_mode_is_rewritten() {
        let xml = "<WLANProfile><connectionMode> auto </connectionMode></WLANProfile>";
        assert!(is_auto_connect(xml).unwrap());
        let manual = with_connection_mode(xml, false).unwrap();
        assert_eq!(
            manual,
            "<WLANProfile><connectionMode>manual</connectionMode></WLANProfile>"
        );
        assert!(!is_auto_connect(&manual).unwrap());
    }

    #[test]
    fn prefixed_connection_mode_is_not_silently_kept() {
        let xml = r#"<p:WLANProfile xmlns:p="urn:x"><p:connectionMode>auto</p:connectionMode></p:WLANProfile>"#;
        assert!(matches!(
            with_connection_mode(xml, false),
            Err(WlanError::ProfileXmlInvalid)
        ));
    }

    #[test]
    fn missing_connection_mode_is_invalid() {
        let xml = r#"<WLANProfile xmlns="http://www.microsoft.com/networking/WLAN/profile/v1"><name>x</name></WLANProfile>"#;
        assert!(matches!(
            connection_mode(xml),
            Err(WlanError::ProfileXmlInvalid)
        ));
    }
}
