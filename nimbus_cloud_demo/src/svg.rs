// Copyright 2026 the Nimbus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `nimbus_cloud_demo`.

use kurbo::Affine;
use nimbus_cloud::{Canvas2d, TextFont};
use peniko::Color;

/// An SVG text surface: every [`Canvas2d`] call becomes a `<text>` element.
#[derive(Debug)]
pub(crate) struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
}

impl SvgCanvas {
    pub(crate) fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    /// Draws a filled rectangle (demo chrome: background, band swatches).
    pub(crate) fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Color) {
        self.body.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{}"/>"#,
            hex_color(fill)
        ));
        self.body.push('\n');
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
            w = self.width,
            h = self.height
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Canvas2d for SvgCanvas {
    fn fill_text(
        &mut self,
        text: &str,
        font: &TextFont,
        font_size: f64,
        fill: Color,
        transform: Affine,
    ) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        self.body.push_str(&format!(
            r#"<text transform="matrix({a} {b} {c} {d} {e} {f})" font-family="{}" font-style="{}" font-weight="{}" font-size="{font_size}" text-anchor="middle" dominant-baseline="middle" fill="{}">"#,
            escape_xml(font.family.as_css_family()),
            font.style.as_css_style(),
            font.weight.0,
            hex_color(fill),
        ));
        self.body.push_str(&escape_xml(text));
        self.body.push_str("</text>\n");
    }
}

fn hex_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
