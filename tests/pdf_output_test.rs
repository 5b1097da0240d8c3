//! Integration tests inspecting the generated PDF content.

use lopdf::content::Content;
use lopdf::{Document, Object};
use textpdf::convert::{convert_batch, convert_text, BatchMode, ConvertOptions};
use textpdf::{Error, FontOptions, TextDocument};

/// A text run as drawn on a page.
#[derive(Debug)]
struct Run {
    font: String,
    size: f32,
    color: [f32; 3],
    y: f32,
    text: Vec<u8>,
}

fn number(obj: &Object) -> f32 {
    match obj {
        Object::Integer(i) => *i as f32,
        Object::Real(r) => *r as f32,
        other => panic!("not a number: {:?}", other),
    }
}

/// Text runs of every page, in drawing order.
fn page_runs(bytes: &[u8]) -> Vec<Vec<Run>> {
    let doc = Document::load_mem(bytes).unwrap();
    doc.get_pages()
        .values()
        .map(|page_id| {
            let content = Content::decode(&doc.get_page_content(*page_id).unwrap()).unwrap();
            let mut runs = Vec::new();
            let mut font = String::new();
            let mut size = 0.0;
            let mut color = [0.0; 3];
            let mut y = 0.0;
            for op in &content.operations {
                match op.operator.as_str() {
                    "Tf" => {
                        if let Object::Name(name) = &op.operands[0] {
                            font = String::from_utf8_lossy(name).into_owned();
                        }
                        size = number(&op.operands[1]);
                    }
                    "rg" => {
                        color = [
                            number(&op.operands[0]),
                            number(&op.operands[1]),
                            number(&op.operands[2]),
                        ];
                    }
                    "Td" => y = number(&op.operands[1]),
                    "Tj" => {
                        if let Object::String(text, _) = &op.operands[0] {
                            runs.push(Run {
                                font: font.clone(),
                                size,
                                color,
                                y,
                                text: text.clone(),
                            });
                        }
                    }
                    _ => {}
                }
            }
            runs
        })
        .collect()
}

fn texts(runs: &[Run]) -> Vec<String> {
    runs.iter()
        .map(|r| String::from_utf8_lossy(&r.text).into_owned())
        .collect()
}

#[test]
fn test_hello_world_single_page() {
    let output = convert_text("hello.txt", "Hello world", &ConvertOptions::default()).unwrap();
    assert_eq!(output.name, "hello.pdf");

    let pages = page_runs(&output.bytes);
    assert_eq!(pages.len(), 1);
    assert_eq!(texts(&pages[0]), vec!["Hello world"]);
    assert_eq!(pages[0][0].size, 12.0);
    assert_eq!(pages[0][0].color, [0.0, 0.0, 0.0]);
}

#[test]
fn test_bullet_is_transliterated() {
    let output =
        convert_text("list.txt", "\u{25CF} first\n\u{2022} second", &ConvertOptions::default())
            .unwrap();
    let pages = page_runs(&output.bytes);
    assert_eq!(texts(&pages[0]), vec!["* first", "* second"]);
}

#[test]
fn test_symbols_render_as_ascii() {
    let output = convert_text(
        "math.txt",
        "x \u{2264} y \u{2192} \u{03B1} \u{2260} \u{03B2}",
        &ConvertOptions::default(),
    )
    .unwrap();
    let pages = page_runs(&output.bytes);
    assert_eq!(texts(&pages[0]), vec!["x <= y -> alpha != beta"]);
}

#[test]
fn test_page_count_follows_lines_per_page() {
    let options = ConvertOptions::default();
    let per_page = options.lines_per_page();
    assert_eq!(per_page, 48);

    for lines in [1usize, 47, 48, 49, 100, 144] {
        let text = (1..=lines)
            .map(|i| format!("Line number {}", i))
            .collect::<Vec<_>>()
            .join("\n");
        let output = convert_text("lines.txt", text, &options).unwrap();
        let pages = page_runs(&output.bytes);
        assert_eq!(pages.len(), lines.div_ceil(per_page), "{} lines", lines);

        let drawn: usize = pages.iter().map(Vec::len).sum();
        assert_eq!(drawn, lines);
        for page in &pages[..pages.len() - 1] {
            assert_eq!(page.len(), per_page);
        }
    }
}

#[test]
fn test_every_page_starts_at_top_margin() {
    let options = ConvertOptions::default();
    let text = (1..=130)
        .map(|i| format!("Line number {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let output = convert_text("lines.txt", text, &options).unwrap();
    let pages = page_runs(&output.bytes);
    assert_eq!(pages.len(), 3);

    let top = options.geometry.top();
    assert_eq!(top, 742.0);
    for page in &pages {
        assert!((page[0].y - top).abs() < 1e-3, "first baseline {}", page[0].y);
        let last = page.last().unwrap();
        assert!(last.y >= options.geometry.margin_bottom);
    }
}

#[test]
fn test_long_paragraph_wraps_within_margins() {
    let paragraph = "lorem ipsum dolor sit amet ".repeat(60);
    let output = convert_text("long.txt", paragraph, &ConvertOptions::default()).unwrap();
    let pages = page_runs(&output.bytes);
    let runs = &pages[0];
    assert!(runs.len() > 1);

    let font = textpdf::StandardFont::TimesRoman;
    for run in runs {
        let width: u32 = run.text.iter().map(|b| u32::from(font.glyph_width(*b))).sum();
        assert!(width as f32 * 12.0 / 1000.0 <= 512.0);
    }
}

#[test]
fn test_placeholder_for_unsupported_characters() {
    let output = convert_text(
        "mixed.txt",
        "before\n\u{4E2D}\u{6587}\u{5B57}\nafter",
        &ConvertOptions::default(),
    )
    .unwrap();
    assert_eq!(output.stats.placeholder_count, 1);

    let pages = page_runs(&output.bytes);
    let runs = &pages[0];
    assert_eq!(
        texts(runs),
        vec!["before", "[Special characters not supported]", "after"]
    );
    // Body text uses the body font, the placeholder the fallback font
    assert_eq!(runs[0].font, "F2");
    assert_eq!(runs[1].font, "F1");
    assert_eq!(runs[1].color, [0.5, 0.0, 0.0]);
    assert_eq!(runs[2].color, [0.0, 0.0, 0.0]);
}

#[test]
fn test_custom_placeholder() {
    let options = ConvertOptions::default().with_placeholder("<?>");
    let output = convert_text("cjk.txt", "\u{4E2D}", &options).unwrap();
    let pages = page_runs(&output.bytes);
    assert_eq!(texts(&pages[0]), vec!["<?>"]);
}

#[test]
fn test_combined_flow_with_headers() {
    let documents = vec![
        TextDocument::new("first.txt", "Alpha paragraph").unwrap(),
        TextDocument::new("second.txt", "Beta paragraph").unwrap(),
    ];
    let output =
        convert_batch(&documents, BatchMode::Combined, &ConvertOptions::default()).unwrap();
    assert_eq!(output.name, "combined_text.pdf");

    let pages = page_runs(&output.bytes);
    assert_eq!(pages.len(), 1);
    let runs = &pages[0];
    assert_eq!(
        texts(runs),
        vec!["first.txt", "Alpha paragraph", "second.txt", "Beta paragraph"]
    );
    assert_eq!(runs[0].size, 14.0);
    assert_eq!(runs[1].size, 12.0);
}

#[test]
fn test_combined_flow_continues_across_documents() {
    let options = ConvertOptions::default();
    let per_page = options.lines_per_page();
    // Two documents of 40 lines each overflow the first page
    let body = (0..40).map(|i| format!("row {}", i)).collect::<Vec<_>>().join("\n");
    let documents = vec![
        TextDocument::new("a.txt", body.clone()).unwrap(),
        TextDocument::new("b.txt", body).unwrap(),
    ];
    let output = convert_batch(&documents, BatchMode::Combined, &options).unwrap();
    let pages = page_runs(&output.bytes);

    assert_eq!(pages.len(), 2);
    assert!(pages[0].len() <= per_page);
    let all: Vec<String> = pages.iter().flat_map(|p| texts(p)).collect();
    assert_eq!(all.len(), 82);
    assert_eq!(all[0], "a.txt");
    assert_eq!(all[41], "b.txt");
}

#[test]
fn test_fatal_font_error() {
    let options = ConvertOptions::default()
        .with_fonts(FontOptions::new().with_candidates(["Arial", "Calibri"]));
    let documents = vec![TextDocument::new("a.txt", "text").unwrap()];

    let err = convert_batch(&documents, BatchMode::Combined, &options).unwrap_err();
    match err {
        Error::NoRenderableFont { attempted } => assert_eq!(attempted, vec!["Arial", "Calibri"]),
        other => panic!("unexpected error: {other}"),
    }

    let err = convert_batch(&documents, BatchMode::PerFileZipped, &options).unwrap_err();
    match err {
        Error::Document { name, source } => {
            assert_eq!(name, "a.txt");
            assert!(matches!(*source, Error::NoRenderableFont { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_font_fallback_chain_skips_missing() {
    let options = ConvertOptions::default().with_fonts(
        FontOptions::new()
            .with_candidates(["Arial", "Courier"])
            .with_body_font(None::<String>),
    );
    let output = convert_text("a.txt", "monospaced", &options).unwrap();

    let doc = Document::load_mem(&output.bytes).unwrap();
    let fonts: Vec<Vec<u8>> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| dict.get(b"Type").and_then(Object::as_name).ok() == Some(&b"Font"[..]))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(<[u8]>::to_vec)
        .collect();
    assert_eq!(fonts, vec![b"Courier".to_vec()]);
}

#[test]
fn test_uncompressed_content_is_readable() {
    let options = ConvertOptions::default().with_compression(false);
    let output = convert_text("a.txt", "Hello world", &options).unwrap();
    assert!(output.bytes.windows(13).any(|w| w == b"(Hello world)"));
}

#[test]
fn test_title_in_info_dictionary() {
    let options = ConvertOptions::default().with_title("Quarterly notes");
    let output = convert_text("a.txt", "body", &options).unwrap();

    let doc = Document::load_mem(&output.bytes).unwrap();
    let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
    let info = doc.get_dictionary(info_id).unwrap();
    assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), b"Quarterly notes");
    let producer = info.get(b"Producer").unwrap().as_str().unwrap();
    assert!(producer.starts_with(b"textpdf"));
}

#[test]
fn test_a4_media_box() {
    let options = ConvertOptions::default().with_geometry(textpdf::PageGeometry::a4());
    let output = convert_text("a.txt", "body", &options).unwrap();

    let doc = Document::load_mem(&output.bytes).unwrap();
    let page_id = doc.get_pages()[&1];
    let page = doc.get_dictionary(page_id).unwrap();
    let media_box = page.get(b"MediaBox").unwrap().as_array().unwrap();
    assert!((number(&media_box[2]) - 595.28).abs() < 0.01);
    assert!((number(&media_box[3]) - 841.89).abs() < 0.01);
}
