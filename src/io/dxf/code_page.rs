//! Byte decoding for DXF files written in a legacy code page.
//!
//! Drawings before AutoCAD 2007 store text in the code page named by the
//! `$DWGCODEPAGE` header variable. Later drawings are UTF-8.

use encoding_rs::Encoding;
use std::borrow::Cow;

const CODE_PAGE_VARIABLE: &[u8] = b"$DWGCODEPAGE";

/// Get the `encoding_rs` encoding for a `$DWGCODEPAGE` value.
///
/// Returns `None` for UTF-8 / ASCII code pages. Unrecognized names fall back
/// to Windows-1252, the usual code page of western drawings.
pub fn encoding_from_code_page(code_page: &str) -> Option<&'static Encoding> {
    let name = code_page.trim().to_ascii_lowercase();
    let encoding = match name.as_str() {
        "ascii" | "utf-8" | "utf8" | "unicode" => return None,
        "ansi_932" | "dos932" => encoding_rs::SHIFT_JIS,
        "ansi_936" | "gb2312" => encoding_rs::GBK,
        "ansi_949" | "korean" | "johab" => encoding_rs::EUC_KR,
        "ansi_950" | "big5" => encoding_rs::BIG5,
        "ansi_874" => encoding_rs::WINDOWS_874,
        "ansi_1250" | "dos852" | "iso8859-2" => encoding_rs::WINDOWS_1250,
        "ansi_1251" | "dos855" | "dos866" | "iso8859-5" => encoding_rs::WINDOWS_1251,
        "ansi_1253" | "dos869" | "iso8859-7" => encoding_rs::WINDOWS_1253,
        "ansi_1254" | "dos857" | "iso8859-9" => encoding_rs::WINDOWS_1254,
        "ansi_1255" | "iso8859-8" => encoding_rs::WINDOWS_1255,
        "ansi_1256" | "iso8859-6" => encoding_rs::WINDOWS_1256,
        "ansi_1257" | "iso8859-4" => encoding_rs::WINDOWS_1257,
        "ansi_1258" => encoding_rs::WINDOWS_1258,
        "koi8-r" => encoding_rs::KOI8_R,
        "koi8-u" => encoding_rs::KOI8_U,
        _ => encoding_rs::WINDOWS_1252,
    };
    Some(encoding)
}

/// Find the `$DWGCODEPAGE` value in raw DXF bytes.
fn find_code_page(bytes: &[u8]) -> Option<String> {
    let start = bytes
        .windows(CODE_PAGE_VARIABLE.len())
        .position(|w| w == CODE_PAGE_VARIABLE)?;
    let mut lines = bytes[start..].split(|b| *b == b'\n').skip(1);
    let code = lines.next()?;
    if String::from_utf8_lossy(code).trim() != "3" {
        return None;
    }
    lines
        .next()
        .map(|value| String::from_utf8_lossy(value).trim().to_string())
}

/// Decode DXF bytes to text.
///
/// A UTF-8 byte order mark is stripped. Valid UTF-8 is used as is; otherwise
/// the bytes are decoded with the drawing's `$DWGCODEPAGE` (Windows-1252 when
/// absent).
pub fn decode_dxf_bytes(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let code_page = find_code_page(bytes);
    let encoding = code_page
        .as_deref()
        .and_then(encoding_from_code_page)
        .unwrap_or(encoding_rs::WINDOWS_1252);
    log::debug!(
        "input is not UTF-8, decoding as {} (code page {:?})",
        encoding.name(),
        code_page
    );
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        log::warn!("some bytes could not be decoded as {}", encoding.name());
    }
    text
}
