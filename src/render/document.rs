//! Minimal single-page PDF emission.
//!
//! The payslip layout is fixed, so the writer supports exactly what it
//! needs: text in Helvetica or Helvetica-Bold (base-14 fonts, no
//! embedding), horizontal rules, and right-aligned text via the Helvetica
//! advance-width table. Output is fully deterministic for identical input.

/// A4 page width in points.
pub const PAGE_WIDTH: f64 = 595.0;
/// A4 page height in points.
pub const PAGE_HEIGHT: f64 = 842.0;

/// Approximate advance width of one Helvetica character in em units.
///
/// Digits and most lowercase letters advance 0.556 em; using that single
/// figure keeps right-aligned amount columns visually stable without
/// carrying the full AFM table.
const CHAR_WIDTH_EM: f64 = 0.556;

/// Builds a one-page PDF document.
pub struct DocumentBuilder {
    content: String,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self {
            content: String::new(),
        }
    }

    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '(' => out.push_str("\\("),
                ')' => out.push_str("\\)"),
                '\\' => out.push_str("\\\\"),
                // Base-14 fonts use WinAnsi; replace anything outside it
                c if (c as u32) < 32 || (c as u32) > 255 => out.push('?'),
                c => out.push(c),
            }
        }
        out
    }

    /// Draws text with its left edge at `(x, y)`.
    pub fn text(&mut self, x: f64, y: f64, size: f64, bold: bool, text: &str) {
        let font = if bold { "F2" } else { "F1" };
        self.content.push_str(&format!(
            "BT /{font} {size:.1} Tf {x:.1} {y:.1} Td ({}) Tj ET\n",
            Self::escape(text)
        ));
    }

    /// Draws text with its right edge at `(x, y)`.
    pub fn text_right(&mut self, x: f64, y: f64, size: f64, bold: bool, text: &str) {
        let width = text.chars().count() as f64 * size * CHAR_WIDTH_EM;
        self.text(x - width, y, size, bold, text);
    }

    /// Draws text centred on `x`.
    pub fn text_centered(&mut self, x: f64, y: f64, size: f64, bold: bool, text: &str) {
        let width = text.chars().count() as f64 * size * CHAR_WIDTH_EM;
        self.text(x - width / 2.0, y, size, bold, text);
    }

    /// Draws a horizontal rule from `x1` to `x2` at height `y`.
    pub fn hline(&mut self, x1: f64, x2: f64, y: f64) {
        self.content.push_str(&format!(
            "0.5 w {x1:.1} {y:.1} m {x2:.1} {y:.1} l S\n"
        ));
    }

    /// Serializes the page into a complete PDF file.
    pub fn finish(self) -> Vec<u8> {
        let stream = self.content.into_bytes();

        let objects: Vec<Vec<u8>> = vec![
            b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
            b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                 /Resources << /Font << /F1 4 0 R /F2 5 0 R >> >> /Contents 6 0 R >>"
            )
            .into_bytes(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_vec(),
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
                .to_vec(),
            {
                let mut obj =
                    format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
                obj.extend_from_slice(&stream);
                obj.extend_from_slice(b"\nendstream");
                obj
            },
        ];

        let mut out = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n", i + 1).as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        }

        let xref_offset = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        out
    }
}
