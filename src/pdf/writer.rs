//! `lopdf`-backed document assembly.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};

use super::TextStyle;
use crate::error::{Error, Result};
use crate::font::{FontHandle, StandardFont};

const PDF_VERSION: &str = "1.5";
const DEFAULT_COMPRESSION_LEVEL: u32 = 6;

#[derive(Debug)]
struct PageBuffer {
    width: f32,
    height: f32,
    operations: Vec<Operation>,
}

/// Accumulates pages, fonts and text runs, then serializes them as a PDF.
#[derive(Debug)]
pub struct PdfWriter {
    pages: Vec<PageBuffer>,
    fonts: Vec<FontHandle>,
    title: Option<String>,
    compression: Option<u32>,
}

impl PdfWriter {
    /// Create an empty writer with compressed content streams.
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            fonts: Vec::new(),
            title: None,
            compression: Some(DEFAULT_COMPRESSION_LEVEL),
        }
    }

    /// Set the document title written to the Info dictionary.
    pub fn with_title(mut self, title: Option<impl Into<String>>) -> Self {
        self.title = title.map(Into::into);
        self
    }

    /// Set the Flate level for content streams (`None` stores them raw).
    pub fn with_compression(mut self, level: Option<u8>) -> Self {
        self.compression = level.map(|l| u32::from(l.min(9)));
        self
    }

    /// Append a page of the given size in points and return its index.
    pub fn add_page(&mut self, width: f32, height: f32) -> usize {
        self.pages.push(PageBuffer {
            width,
            height,
            operations: Vec::new(),
        });
        self.pages.len() - 1
    }

    /// Register a standard font by name.
    ///
    /// Registering the same font twice returns the existing handle.
    pub fn embed_font(&mut self, name: &str) -> Result<FontHandle> {
        let font = StandardFont::from_name(name)
            .ok_or_else(|| Error::FontUnavailable(name.to_string()))?;

        if let Some(existing) = self.fonts.iter().find(|f| f.font() == font) {
            return Ok(existing.clone());
        }

        let handle = FontHandle::new(format!("F{}", self.fonts.len() + 1), font);
        self.fonts.push(handle.clone());
        Ok(handle)
    }

    /// Draw a single line of text on a page.
    ///
    /// Nothing is drawn when the text cannot be encoded in the font.
    pub fn draw_text(&mut self, page: usize, text: &str, style: &TextStyle<'_>) -> Result<()> {
        if !self.fonts.contains(style.font) {
            return Err(Error::Pdf(format!(
                "Font {} is not registered with this document",
                style.font.resource_name()
            )));
        }

        let encoded = style.font.encode(text)?;

        let buffer = self
            .pages
            .get_mut(page)
            .ok_or_else(|| Error::Pdf(format!("Page index {} out of range", page)))?;

        let color = style.color;
        buffer.operations.extend([
            Operation::new("BT", vec![]),
            Operation::new("rg", vec![color.r.into(), color.g.into(), color.b.into()]),
            Operation::new(
                "Tf",
                vec![style.font.resource_name().into(), style.size.into()],
            ),
            Operation::new("Td", vec![style.x.into(), style.y.into()]),
            Operation::new("Tj", vec![Object::string_literal(encoded)]),
            Operation::new("ET", vec![]),
        ]);

        Ok(())
    }

    /// Number of pages added so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document.
    pub fn save(self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();

        let mut font_dict = Dictionary::new();
        for handle in &self.fonts {
            let font_id = doc.add_object(Dictionary::from_iter([
                ("Type", Object::Name(b"Font".to_vec())),
                ("Subtype", Object::Name(b"Type1".to_vec())),
                (
                    "BaseFont",
                    Object::Name(handle.font().base_font().as_bytes().to_vec()),
                ),
                ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
            ]));
            font_dict.set(handle.resource_name(), Object::Reference(font_id));
        }
        let resources_id = doc.add_object(Dictionary::from_iter([(
            "Font",
            Object::Dictionary(font_dict),
        )]));

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in self.pages {
            let content = Content {
                operations: page.operations,
            }
            .encode()
            .map_err(|e| Error::Pdf(format!("Failed to encode page content: {}", e)))?;

            let stream = match self.compression {
                Some(level) => {
                    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(level));
                    encoder.write_all(&content)?;
                    let compressed = encoder.finish()?;
                    Stream::new(
                        Dictionary::from_iter([("Filter", Object::Name(b"FlateDecode".to_vec()))]),
                        compressed,
                    )
                }
                None => Stream::new(Dictionary::new(), content),
            };
            let content_id = doc.add_object(stream);

            let page_id = doc.add_object(Dictionary::from_iter([
                ("Type", Object::Name(b"Page".to_vec())),
                ("Parent", Object::Reference(pages_id)),
                ("Contents", Object::Reference(content_id)),
                ("Resources", Object::Reference(resources_id)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        0.into(),
                        0.into(),
                        page.width.into(),
                        page.height.into(),
                    ]),
                ),
            ]));
            kids.push(Object::Reference(page_id));
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(Dictionary::from_iter([
                ("Type", Object::Name(b"Pages".to_vec())),
                ("Kids", Object::Array(kids)),
                ("Count", Object::Integer(count)),
            ])),
        );

        let catalog_id = doc.add_object(Dictionary::from_iter([
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(pages_id)),
        ]));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let info_id = doc.add_object(info_dictionary(self.title.as_deref()));
        doc.trailer.set("Info", Object::Reference(info_id));

        let mut output = Vec::new();
        doc.save_to(&mut output)
            .map_err(|e| Error::Pdf(format!("Failed to save PDF: {}", e)))?;

        log::debug!("Saved PDF: {} pages, {} bytes", count, output.len());
        Ok(output)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn info_dictionary(title: Option<&str>) -> Dictionary {
    let producer = format!("textpdf {}", env!("CARGO_PKG_VERSION"));
    let created = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();

    let mut info = Dictionary::from_iter([
        ("Producer", Object::string_literal(producer)),
        ("CreationDate", Object::string_literal(created)),
    ]);
    if let Some(title) = title {
        info.set("Title", text_string(title));
    }
    info
}

/// Encode a PDF text string, using UTF-16BE when it is not plain ASCII.
fn text_string(text: &str) -> Object {
    if text.is_ascii() {
        return Object::string_literal(text);
    }

    let mut bytes = vec![0xFE, 0xFF];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, lopdf::StringFormat::Hexadecimal)
}
