//! PDF rendering: a small object writer that assembles the document
//! structure by hand. One title page, then one page per slide, text only.

use super::{ExportError, Theme};
use crate::models::Presentation;

const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 72.0;
const BODY_LEADING: f32 = 18.0;
const WRAP_COLUMNS: usize = 78;

/// Serializes numbered objects and tracks their byte offsets for the
/// cross-reference table.
struct PdfBuilder {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfBuilder {
    fn new() -> Self {
        Self {
            // The comment line with high bytes marks the file as binary.
            buf: b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n".to_vec(),
            offsets: Vec::new(),
        }
    }

    fn add_object(&mut self, body: &str) -> usize {
        let num = self.offsets.len() + 1;
        self.offsets.push(self.buf.len());
        self.buf
            .extend_from_slice(format!("{num} 0 obj\n{body}\nendobj\n").as_bytes());
        num
    }

    fn add_stream(&mut self, stream: &[u8]) -> usize {
        let num = self.offsets.len() + 1;
        self.offsets.push(self.buf.len());
        self.buf.extend_from_slice(
            format!("{num} 0 obj\n<< /Length {} >>\nstream\n", stream.len()).as_bytes(),
        );
        self.buf.extend_from_slice(stream);
        self.buf.extend_from_slice(b"\nendstream\nendobj\n");
        num
    }

    fn finish(mut self, root: usize) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let count = self.offsets.len() + 1;
        self.buf
            .extend_from_slice(format!("xref\n0 {count}\n").as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        self.buf.extend_from_slice(
            format!("trailer\n<< /Size {count} /Root {root} 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n")
                .as_bytes(),
        );
        self.buf
    }
}

/// Accumulates page drawing operators.
struct ContentStream {
    ops: Vec<u8>,
}

impl ContentStream {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn raw(&mut self, s: String) {
        self.ops.extend_from_slice(s.as_bytes());
    }

    fn fill_page(&mut self, color: (f32, f32, f32)) {
        let (r, g, b) = color;
        self.raw(format!(
            "{r:.4} {g:.4} {b:.4} rg 0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2} re f\n"
        ));
    }

    fn text(&mut self, font: &str, size: u32, color: (f32, f32, f32), x: f32, y: f32, text: &str) {
        let (r, g, b) = color;
        self.raw(format!(
            "BT /{font} {size} Tf {r:.4} {g:.4} {b:.4} rg {x:.2} {y:.2} Td ("
        ));
        self.ops.extend_from_slice(&encode_text(text));
        self.raw(") Tj ET\n".to_string());
    }
}

/// Render a presentation as PDF bytes. Deterministic: nothing is derived
/// from the clock, so the same snapshot always yields the same file.
pub fn render(presentation: &Presentation, theme: Theme) -> Result<Vec<u8>, ExportError> {
    let palette = theme.palette();
    let background = hex_rgb(palette.background);
    let title_color = hex_rgb(palette.title);
    let body_color = hex_rgb(palette.body);
    let accent = hex_rgb(palette.accent);

    let mut streams: Vec<Vec<u8>> = Vec::with_capacity(presentation.slides.len() + 1);

    // Title page.
    let mut cover = ContentStream::new();
    cover.fill_page(background);
    let mut y = PAGE_HEIGHT - 3.0 * MARGIN;
    for line in wrap_text(&presentation.topic, 36) {
        cover.text("F2", 28, title_color, MARGIN, y, &line);
        y -= 36.0;
    }
    y -= 12.0;
    cover.text("F1", 12, body_color, MARGIN, y, "AI Generated Presentation");
    y -= 24.0;
    let created = presentation.created_at.format("%B %d, %Y").to_string();
    cover.text("F1", 12, body_color, MARGIN, y, &format!("Created on {created}"));
    streams.push(cover.ops);

    // One page per slide.
    for (i, slide) in presentation.slides.iter().enumerate() {
        let mut page = ContentStream::new();
        page.fill_page(background);
        let mut y = PAGE_HEIGHT - MARGIN;

        page.text("F1", 10, body_color, MARGIN, y, &format!("Slide {}", i + 1));
        y -= 34.0;

        for line in wrap_text(&slide.title, 48) {
            if y < MARGIN {
                break;
            }
            page.text("F2", 20, accent, MARGIN, y, &line);
            y -= 26.0;
        }
        y -= 8.0;

        for bullet in &slide.bullets {
            let mut first = true;
            for line in wrap_text(bullet, WRAP_COLUMNS) {
                if y < MARGIN {
                    break;
                }
                let prefix = if first { "- " } else { "  " };
                page.text("F1", 12, body_color, MARGIN, y, &format!("{prefix}{line}"));
                y -= BODY_LEADING;
                first = false;
            }
        }

        if let Some(notes) = &slide.notes {
            y -= 10.0;
            if y >= MARGIN {
                page.text("F3", 11, body_color, MARGIN, y, "Speaker notes:");
                y -= 16.0;
                for line in wrap_text(notes, WRAP_COLUMNS) {
                    if y < MARGIN {
                        break;
                    }
                    page.text("F3", 11, body_color, MARGIN, y, &line);
                    y -= 15.0;
                }
            }
        }

        streams.push(page.ops);
    }

    // Objects: 1 catalog, 2 pages, 3-5 fonts, then (page, contents) pairs.
    let page_count = streams.len();
    let first_page_obj = 6;
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", first_page_obj + 2 * i))
        .collect();

    let mut pdf = PdfBuilder::new();
    pdf.add_object("<< /Type /Catalog /Pages 2 0 R >>");
    pdf.add_object(&format!(
        "<< /Type /Pages /Kids [{}] /Count {page_count} >>",
        kids.join(" ")
    ));
    for font in ["Helvetica", "Helvetica-Bold", "Helvetica-Oblique"] {
        pdf.add_object(&format!(
            "<< /Type /Font /Subtype /Type1 /BaseFont /{font} /Encoding /WinAnsiEncoding >>"
        ));
    }
    for (i, stream) in streams.iter().enumerate() {
        let contents_obj = first_page_obj + 2 * i + 1;
        pdf.add_object(&format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.2} {PAGE_HEIGHT:.2}] \
             /Resources << /Font << /F1 3 0 R /F2 4 0 R /F3 5 0 R >> >> \
             /Contents {contents_obj} 0 R >>"
        ));
        pdf.add_stream(stream);
    }

    Ok(pdf.finish(1))
}

/// Map text to WinAnsi bytes with PDF string escaping. Characters outside
/// the 8-bit range fall back to '?', which is what a Type1 Helvetica can
/// honestly show anyway.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        let b = if (c as u32) < 256 { c as u8 } else { b'?' };
        match b {
            b'(' | b')' | b'\\' => {
                out.push(b'\\');
                out.push(b);
            }
            b'\n' | b'\r' => out.push(b' '),
            _ => out.push(b),
        }
    }
    out
}

fn hex_rgb(hex: &str) -> (f32, f32, f32) {
    let channel = |i: usize| {
        u8::from_str_radix(hex.get(i..i + 2).unwrap_or("00"), 16).unwrap_or(0) as f32 / 255.0
    };
    (channel(0), channel(2), channel(4))
}

/// Greedy word wrap; words longer than the column budget are hard-split.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word = word;
        while word.chars().count() > max_chars {
            let split: String = word.chars().take(max_chars).collect();
            let rest_at = split.len();
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(split);
            word = &word[rest_at..];
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slide;

    fn sample() -> Presentation {
        Presentation::new(
            "Bees",
            vec![
                Slide {
                    title: "Bees".into(),
                    bullets: vec![],
                    notes: None,
                    image_ref: None,
                },
                Slide {
                    title: "Hive (life)".into(),
                    bullets: vec!["Queen".into(), "Workers".into()],
                    notes: Some("pause here".into()),
                    image_ref: None,
                },
            ],
        )
    }

    fn count_pages(bytes: &[u8]) -> usize {
        let needle = b"/Type /Page /";
        bytes
            .windows(needle.len())
            .filter(|w| w == needle)
            .count()
    }

    #[test]
    fn document_has_title_page_plus_one_per_slide() {
        let bytes = render(&sample(), Theme::Midnight).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));
        assert_eq!(count_pages(&bytes), 3);
    }

    #[test]
    fn identical_input_renders_identical_bytes() {
        let p = sample();
        let a = render(&p, Theme::Daylight).unwrap();
        let b = render(&p, Theme::Daylight).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn parens_in_text_are_escaped() {
        let bytes = render(&sample(), Theme::Midnight).unwrap();
        let body = String::from_utf8_lossy(&bytes);
        assert!(body.contains(r"Hive \(life\)"));
    }

    #[test]
    fn wrap_respects_column_budget() {
        let lines = wrap_text("one two three four five", 9);
        assert_eq!(lines, vec!["one two", "three", "four five"]);
        for line in wrap_text(&"long ".repeat(40), 20) {
            assert!(line.chars().count() <= 20);
        }
    }

    #[test]
    fn oversized_words_are_hard_split() {
        let lines = wrap_text(&"x".repeat(25), 10);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }
}
