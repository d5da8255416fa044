//! UTF-16 marshaling for `WCHAR` arguments and fixed-size name fields.

use crate::error::{WlanError, WlanResult};

/// Encode `value` as a NUL-terminated UTF-16 buffer for `operation`.
///
/// Fails before any native call if the string carries an interior NUL, which
/// the native side would silently truncate.
pub fn to_wide(operation: &'static str, value: &str) -> WlanResult<Vec<u16>> {
    if value.contains('\0') {
        return Err(WlanError::Encoding {
            operation,
            detail: "string contains an interior NUL".to_string(),
        });
    }
    Ok(value.encode_utf16().chain(std::iter::once(0)).collect())
}

/// Decode a fixed-size `WCHAR` array, stopping at the first NUL.
pub fn from_wide(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

/// Decode a NUL-terminated `WCHAR` string owned by the native side.
///
/// # Safety
/// `ptr` must be null or point to a readable, NUL-terminated UTF-16 string.
pub unsafe fn from_wide_ptr(ptr: *const u16) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let mut len = 0;
    // SAFETY: the caller guarantees a terminator exists.
    while unsafe { *ptr.add(len) } != 0 {
        len += 1;
    }
    let units = unsafe { std::slice::from_raw_parts(ptr, len) };
    String::from_utf16_lossy(units)
}

/// Write `value` into a fixed-size `WCHAR` field, NUL-terminated.
pub fn write_fixed(operation: &'static str, field: &mut [u16], value: &str) -> WlanResult<()> {
    let wide = to_wide(operation, value)?;
    if wide.len() > field.len() {
        return Err(WlanError::Encoding {
            operation,
            detail: format!(
                "string needs {} UTF-16 units, field holds {}",
                wide.len(),
                field.len()
            ),
        });
    }
    field.fill(0);
    field[..wide.len()].copy_from_slice(&wide);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_profile_name_round_trips() {
        for name in ["Café Wi-Fi", "咖啡馆网络", "Сеть 🚀", "ÆØÅ-5G"] {
            let wide = to_wide("WlanGetProfile", name).unwrap();
            assert_eq!(wide.last(), Some(&0));
            assert_eq!(from_wide(&wide), name);
            assert_eq!(unsafe { from_wide_ptr(wide.as_ptr()) }, name);
        }
    }

    #[test]
    fn interior_nul_fails_before_marshaling() {
        let err = to_wide("WlanDeleteProfile", "home\0net").unwrap_err();
        assert!(matches!(
            err,
            WlanError::Encoding {
                operation: "WlanDeleteProfile",
                ..
            }
        ));
    }

    #[test]
    fn fixed_field_stops_at_first_nul() {
        let mut field = [0u16; 8];
        write_fixed("test", &mut field, "abc").unwrap();
        field[5] = u16::from(b'z');
        assert_eq!(from_wide(&field), "abc");
    }

    #[test]
    fn fixed_field_without_terminator_uses_full_length() {
        let field: Vec<u16> = "abcd".encode_utf16().collect();
        assert_eq!(from_wide(&field), "abcd");
    }

    #[test]
    fn fixed_field_rejects_overlong_values() {
        let mut field = [0u16; 4];
        assert!(write_fixed("test", &mut field, "abcd").is_err());
        assert!(write_fixed("test", &mut field, "abc").is_ok());
    }

    #[test]
    fn null_pointer_decodes_empty() {
        assert_eq!(unsafe { from_wide_ptr(std::ptr::null()) }, "");
    }
}
