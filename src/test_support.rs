//! Byte-level image fixtures shared by the unit tests.

const TAG_ORIENTATION: u16 = 0x0112;
const TAG_DATETIME: u16 = 0x0132;
const TAG_EXIF_IFD_POINTER: u16 = 0x8769;
const TAG_DATETIME_ORIGINAL: u16 = 0x9003;

const TYPE_ASCII: u16 = 2;
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;

fn ascii(value: &str) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    bytes
}

fn entry(out: &mut Vec<u8>, tag: u16, dtype: u16, count: u32, value: u32) {
    out.extend_from_slice(&tag.to_be_bytes());
    out.extend_from_slice(&dtype.to_be_bytes());
    out.extend_from_slice(&count.to_be_bytes());
    out.extend_from_slice(&value.to_be_bytes());
}

/// Big-endian TIFF with Orientation, plus optional IFD0 `DateTime` and
/// Exif IFD `DateTimeOriginal`. Date strings must be longer than 3 bytes.
pub fn tiff_with_dates(datetime: Option<&str>, original: Option<&str>) -> Vec<u8> {
    let datetime = datetime.map(ascii);
    let original = original.map(ascii);

    let ifd0_count = 1 + datetime.is_some() as usize + original.is_some() as usize;
    let ifd0_len = 2 + 12 * ifd0_count + 4;
    let exif_ifd_offset = 8 + ifd0_len;
    let exif_ifd_len = if original.is_some() { 2 + 12 + 4 } else { 0 };
    let data_offset = exif_ifd_offset + exif_ifd_len;
    let datetime_offset = data_offset;
    let original_offset = data_offset + datetime.as_ref().map_or(0, Vec::len);

    let mut out = Vec::new();
    out.extend_from_slice(b"MM");
    out.extend_from_slice(&42u16.to_be_bytes());
    out.extend_from_slice(&8u32.to_be_bytes());

    out.extend_from_slice(&(ifd0_count as u16).to_be_bytes());
    // SHORT values are left-justified in the value field
    entry(&mut out, TAG_ORIENTATION, TYPE_SHORT, 1, 1 << 16);
    if let Some(value) = &datetime {
        entry(&mut out, TAG_DATETIME, TYPE_ASCII, value.len() as u32, datetime_offset as u32);
    }
    if original.is_some() {
        entry(&mut out, TAG_EXIF_IFD_POINTER, TYPE_LONG, 1, exif_ifd_offset as u32);
    }
    out.extend_from_slice(&0u32.to_be_bytes());

    if let Some(value) = &original {
        out.extend_from_slice(&1u16.to_be_bytes());
        entry(
            &mut out,
            TAG_DATETIME_ORIGINAL,
            TYPE_ASCII,
            value.len() as u32,
            original_offset as u32,
        );
        out.extend_from_slice(&0u32.to_be_bytes());
    }

    if let Some(value) = &datetime {
        out.extend_from_slice(value);
    }
    if let Some(value) = &original {
        out.extend_from_slice(value);
    }
    out
}

fn segment(out: &mut Vec<u8>, marker: u8, payload: &[u8]) {
    out.extend_from_slice(&[0xFF, marker]);
    out.extend_from_slice(&((payload.len() + 2) as u16).to_be_bytes());
    out.extend_from_slice(payload);
}

pub fn jpeg_with_exif(tiff: &[u8]) -> Vec<u8> {
    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(tiff);
    let mut out = vec![0xFF, 0xD8];
    segment(&mut out, 0xE1, &payload);
    segment(&mut out, 0xDB, &[0u8; 65]);
    segment(&mut out, 0xDA, &[0u8; 10]);
    out.extend_from_slice(&[0x12, 0x34, 0xFF, 0xD9]);
    out
}

pub fn jpeg_without_exif() -> Vec<u8> {
    let mut out = vec![0xFF, 0xD8];
    segment(&mut out, 0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0");
    segment(&mut out, 0xE1, b"http://ns.adobe.com/xap/1.0/\0<x:xmpmeta/>");
    segment(&mut out, 0xDA, &[0u8; 10]);
    out.extend_from_slice(&[0xFF, 0xD9]);
    out
}

fn chunk(out: &mut Vec<u8>, kind: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(kind);
    out.extend_from_slice(data);
    // CRC is not verified by the extractor
    out.extend_from_slice(&[0, 0, 0, 0]);
}

fn png_with_chunks(exif: Option<&[u8]>) -> Vec<u8> {
    let mut out = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    chunk(&mut out, b"IHDR", &[0, 0, 0, 1, 0, 0, 0, 1, 8, 2, 0, 0, 0]);
    chunk(&mut out, b"IDAT", &[0x78, 0x9C, 0x63, 0x00, 0x00]);
    if let Some(exif) = exif {
        chunk(&mut out, b"eXIf", exif);
    }
    chunk(&mut out, b"IEND", &[]);
    out
}

pub fn png_with_exif(tiff: &[u8]) -> Vec<u8> {
    png_with_chunks(Some(tiff))
}

pub fn png_without_exif() -> Vec<u8> {
    png_with_chunks(None)
}

fn heic_box(kind: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut out = ((body.len() + 8) as u32).to_be_bytes().to_vec();
    out.extend_from_slice(kind);
    out.extend_from_slice(body);
    out
}

fn heic_meta(exif_offset: u32, exif_len: u32) -> Vec<u8> {
    // infe version 2: item 1 of type Exif
    let infe = heic_box(b"infe", &[2, 0, 0, 0, 0, 1, 0, 0, b'E', b'x', b'i', b'f', 0]);
    let mut iinf_body = vec![0, 0, 0, 0, 0, 1];
    iinf_body.extend_from_slice(&infe);
    let iinf = heic_box(b"iinf", &iinf_body);

    // iloc version 1, 4-byte offsets and lengths, one item with one extent
    let mut iloc_body = vec![1, 0, 0, 0, 0x44, 0x00, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1];
    iloc_body.extend_from_slice(&exif_offset.to_be_bytes());
    iloc_body.extend_from_slice(&exif_len.to_be_bytes());
    let iloc = heic_box(b"iloc", &iloc_body);

    let mut meta_body = vec![0, 0, 0, 0];
    meta_body.extend_from_slice(&heic_box(b"hdlr", &[0u8; 25]));
    meta_body.extend_from_slice(&iinf);
    meta_body.extend_from_slice(&iloc);
    heic_box(b"meta", &meta_body)
}

pub fn heic_with_exif(tiff: &[u8]) -> Vec<u8> {
    let ftyp = heic_box(b"ftyp", b"heic\0\0\0\0mif1heic");
    let mut item = 6u32.to_be_bytes().to_vec();
    item.extend_from_slice(b"Exif\0\0");
    item.extend_from_slice(tiff);

    let meta_len = heic_meta(0, 0).len();
    let item_offset = (ftyp.len() + meta_len + 8) as u32;
    let mut out = ftyp;
    out.extend_from_slice(&heic_meta(item_offset, item.len() as u32));
    out.extend_from_slice(&heic_box(b"mdat", &item));
    out
}
