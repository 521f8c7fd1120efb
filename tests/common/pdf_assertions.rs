use lopdf::content::Content;
use lopdf::{Document as LopdfDocument, Object};

/// Decodes a WinAnsi-encoded string operand. Latin-1 covers every byte the
/// reports draw outside the 0x80-0x9F punctuation range.
pub fn decode_win_ansi(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| match b {
            0x93 => '\u{201C}',
            0x94 => '\u{201D}',
            0x96 => '\u{2013}',
            0x97 => '\u{2014}',
            _ => b as char,
        })
        .collect()
}

pub fn page_operations(doc: &LopdfDocument, page_number: u32) -> Vec<lopdf::content::Operation> {
    let pages = doc.get_pages();
    let page_id = pages
        .get(&page_number)
        .unwrap_or_else(|| panic!("page {} not found", page_number));
    let content = doc.get_page_content(*page_id).expect("page content");
    Content::decode(&content).expect("decodable content").operations
}

/// Text shown with `Tj` on a 1-based page, in drawing order.
pub fn shown_text(doc: &LopdfDocument, page_number: u32) -> Vec<String> {
    page_operations(doc, page_number)
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| match op.operands.first() {
            Some(Object::String(bytes, _)) => Some(decode_win_ansi(bytes)),
            _ => None,
        })
        .collect()
}

/// `(font resource, size)` for every `Tf` on a page.
pub fn font_selections(doc: &LopdfDocument, page_number: u32) -> Vec<(String, f32)> {
    page_operations(doc, page_number)
        .iter()
        .filter(|op| op.operator == "Tf")
        .filter_map(|op| {
            let name = op.operands.first()?.as_name().ok()?;
            let size = op.operands.get(1)?.as_float().ok()?;
            Some((String::from_utf8_lossy(name).into_owned(), size))
        })
        .collect()
}

/// BaseFont names referenced from page resources.
pub fn base_fonts(doc: &LopdfDocument) -> Vec<String> {
    let mut fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter(|dict| {
            dict.get(b"Type")
                .and_then(|t| t.as_name())
                .map(|n| n == b"Font")
                .unwrap_or(false)
        })
        .filter_map(|dict| dict.get(b"BaseFont").and_then(|f| f.as_name()).ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    fonts.sort();
    fonts
}

/// A string entry of the document information dictionary, decoding UTF-16BE
/// strings that start with a byte order mark.
pub fn info_string(doc: &LopdfDocument, key: &[u8]) -> Option<String> {
    let info_id = doc.trailer.get(b"Info").ok()?.as_reference().ok()?;
    let info = doc.get_dictionary(info_id).ok()?;
    let bytes = info.get(key).ok()?.as_str().ok()?;
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16(&units).ok();
    }
    Some(String::from_utf8_lossy(bytes).into_owned())
}
