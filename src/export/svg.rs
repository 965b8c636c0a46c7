//! Deterministic SVG serialization of a [`VisualTree`].

use crate::foundation::core::{Color, Rect};
use crate::foundation::error::CardResult;
use crate::source::descriptor::ImageRef;
use crate::template::scene::{
    Block, BlockContent, Fill, ImageBlock, ImageFilter, ResolvedImage, ShapeBlock, TextAlign,
    TextBlock, VisualTree,
};

/// Turns an image reference into an `href` the rasterizer can load without network access.
pub trait ImageEmbedder {
    fn href(&self, image: &ImageRef) -> CardResult<String>;
}

impl<F> ImageEmbedder for F
where
    F: Fn(&ImageRef) -> CardResult<String>,
{
    fn href(&self, image: &ImageRef) -> CardResult<String> {
        self(image)
    }
}

/// Escape text for element content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if (c as u32) < 0x20 && c != '\t' && c != '\n' && c != '\r' => {}
            c => out.push(c),
        }
    }
    out
}

fn num(v: f64) -> String {
    let r = (v * 100.0).round() / 100.0;
    if r == r.trunc() {
        format!("{}", r as i64)
    } else {
        format!("{r}")
    }
}

/// Two-color gradient derived from a placeholder seed.
pub(crate) fn placeholder_fill(seed: u64) -> Fill {
    let hue = (seed % 360) as f64;
    let spread = 30.0 + ((seed >> 16) % 60) as f64;
    let angle = ((seed >> 32) % 180) as f64;
    Fill::LinearGradient {
        angle_deg: angle,
        stops: vec![
            (0.0, Color::from_hsl(hue, 0.65, 0.55)),
            (1.0, Color::from_hsl(hue + spread, 0.70, 0.35)),
        ],
    }
}

struct SvgWriter {
    defs: String,
    body: String,
    next_id: u32,
}

impl SvgWriter {
    fn id(&mut self, prefix: &str) -> String {
        let id = format!("{prefix}{}", self.next_id);
        self.next_id += 1;
        id
    }

    /// Paint attribute value plus opacity for `fill`.
    fn paint(&mut self, fill: &Fill) -> (String, f64) {
        match fill {
            Fill::Solid(c) => (c.to_hex_rgb(), c.opacity()),
            Fill::LinearGradient { angle_deg, stops } => {
                let id = self.id("g");
                let (s, c) = angle_deg.to_radians().sin_cos();
                let (x1, y1, x2, y2) = (0.5 - c / 2.0, 0.5 - s / 2.0, 0.5 + c / 2.0, 0.5 + s / 2.0);
                self.defs.push_str(&format!(
                    r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    num(x1),
                    num(y1),
                    num(x2),
                    num(y2)
                ));
                for (offset, color) in stops {
                    self.defs.push_str(&format!(
                        r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                        num(*offset),
                        color.to_hex_rgb(),
                        num(color.opacity())
                    ));
                }
                self.defs.push_str("</linearGradient>");
                (format!("url(#{id})"), 1.0)
            }
        }
    }

    fn rect(&mut self, frame: Rect, radius: f64, fill: &Fill, stroke: Option<(Color, f64)>) {
        let (paint, opacity) = self.paint(fill);
        let mut el = format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}""#,
            num(frame.x0),
            num(frame.y0),
            num(frame.width()),
            num(frame.height())
        );
        if radius > 0.0 {
            let r = radius.min(frame.width() / 2.0).min(frame.height() / 2.0);
            el.push_str(&format!(r#" rx="{0}" ry="{0}""#, num(r)));
        }
        el.push_str(&format!(r#" fill="{paint}""#));
        if opacity < 1.0 {
            el.push_str(&format!(r#" fill-opacity="{}""#, num(opacity)));
        }
        if let Some((c, w)) = stroke {
            el.push_str(&format!(
                r#" stroke="{}" stroke-width="{}""#,
                c.to_hex_rgb(),
                num(w)
            ));
            if c.a < 255 {
                el.push_str(&format!(r#" stroke-opacity="{}""#, num(c.opacity())));
            }
        }
        el.push_str("/>");
        self.body.push_str(&el);
    }

    fn filter(&mut self, f: &ImageFilter) -> String {
        let id = self.id("f");
        self.defs.push_str(&format!(
            r#"<filter id="{id}" x="0" y="0" width="1" height="1" color-interpolation-filters="sRGB">"#
        ));
        if f.blur > 0.0 {
            self.defs.push_str(&format!(
                r#"<feGaussianBlur stdDeviation="{}" edgeMode="duplicate"/>"#,
                num(f.blur)
            ));
        }
        if f.grayscale {
            self.defs
                .push_str(r#"<feColorMatrix type="saturate" values="0"/>"#);
        }
        if f.sepia {
            self.defs.push_str(
                r#"<feColorMatrix type="matrix" values="0.393 0.769 0.189 0 0 0.349 0.686 0.168 0 0 0.272 0.534 0.131 0 0 0 0 0 1 0"/>"#,
            );
        }
        if f.brightness != 1.0 {
            let b = num(f.brightness.max(0.0));
            self.defs.push_str(&format!(
                r#"<feComponentTransfer><feFuncR type="linear" slope="{b}"/><feFuncG type="linear" slope="{b}"/><feFuncB type="linear" slope="{b}"/></feComponentTransfer>"#
            ));
        }
        self.defs.push_str("</filter>");
        id
    }

    fn image(&mut self, frame: Rect, img: &ImageBlock, embed: &dyn ImageEmbedder) -> CardResult<()> {
        let clip = self.id("c");
        let r = img
            .corner_radius
            .min(frame.width() / 2.0)
            .min(frame.height() / 2.0)
            .max(0.0);
        self.defs.push_str(&format!(
            r#"<clipPath id="{clip}"><rect x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}"/></clipPath>"#,
            num(frame.x0),
            num(frame.y0),
            num(frame.width()),
            num(frame.height()),
            r = num(r)
        ));
        let filter = (!img.filter.is_none()).then(|| self.filter(&img.filter));
        self.body.push_str(&format!(r#"<g clip-path="url(#{clip})">"#));
        match &img.image {
            ResolvedImage::Placeholder { seed } => {
                let fill = placeholder_fill(*seed);
                if let Some(f) = &filter {
                    self.body.push_str(&format!(r#"<g filter="url(#{f})">"#));
                }
                self.rect(frame, 0.0, &fill, None);
                if filter.is_some() {
                    self.body.push_str("</g>");
                }
            }
            ResolvedImage::Uploaded { image } | ResolvedImage::SourceDefault { image } => {
                let href = embed.href(image)?;
                self.body.push_str(&format!(
                    r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid slice" xlink:href="{}""#,
                    num(frame.x0),
                    num(frame.y0),
                    num(frame.width()),
                    num(frame.height()),
                    escape(&href)
                ));
                if let Some(f) = &filter {
                    self.body.push_str(&format!(r#" filter="url(#{f})""#));
                }
                self.body.push_str("/>");
            }
        }
        self.body.push_str("</g>");
        Ok(())
    }

    fn text(&mut self, frame: Rect, t: &TextBlock) {
        if t.lines.is_empty() {
            return;
        }
        let (x, anchor) = match t.align {
            TextAlign::Start => (frame.x0, "start"),
            TextAlign::Middle => (frame.center().x, "middle"),
            TextAlign::End => (frame.x1, "end"),
        };
        let step = t.font_size * t.line_height;
        // First baseline sits about one ascent below the frame top.
        let first = frame.y0 + t.font_size * 0.9;
        let mut el = format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{anchor}""#,
            num(x),
            num(first),
            escape(t.font_family.css_stack()),
            num(t.font_size),
            t.weight,
            t.color.to_hex_rgb()
        );
        if t.italic {
            el.push_str(r#" font-style="italic""#);
        }
        if t.color.a < 255 {
            el.push_str(&format!(r#" fill-opacity="{}""#, num(t.color.opacity())));
        }
        el.push_str(r#" xml:space="preserve">"#);
        for (i, line) in t.lines.iter().enumerate() {
            let dy = if i == 0 { 0.0 } else { step };
            el.push_str(&format!(
                r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                num(x),
                num(dy),
                escape(line)
            ));
        }
        el.push_str("</text>");
        self.body.push_str(&el);
    }

    fn block(&mut self, b: &Block, embed: &dyn ImageEmbedder) -> CardResult<()> {
        let mut attrs = format!(r#"<g data-element="{}""#, escape(b.element_id.as_str()));
        if b.rotation_deg != 0.0 {
            let c = b.frame.center();
            attrs.push_str(&format!(
                r#" transform="rotate({} {} {})""#,
                num(b.rotation_deg),
                num(c.x),
                num(c.y)
            ));
        }
        if b.opacity < 1.0 {
            attrs.push_str(&format!(r#" opacity="{}""#, num(b.opacity.max(0.0))));
        }
        attrs.push('>');
        self.body.push_str(&attrs);
        match &b.content {
            BlockContent::Text(t) => self.text(b.frame, t),
            BlockContent::Image(img) => self.image(b.frame, img, embed)?,
            BlockContent::Shape(ShapeBlock {
                fill,
                stroke,
                corner_radius,
            }) => self.rect(b.frame, *corner_radius, fill, *stroke),
        }
        self.body.push_str("</g>");
        Ok(())
    }
}

/// Serialize `tree`; output is byte-identical for identical input.
pub fn to_svg(tree: &VisualTree, embed: &dyn ImageEmbedder) -> CardResult<String> {
    let mut w = SvgWriter {
        defs: String::new(),
        body: String::new(),
        next_id: 0,
    };
    w.rect(tree.canvas.rect(), 0.0, &tree.background, None);
    for block in &tree.blocks {
        w.block(block, embed)?;
    }

    let (cw, ch) = (tree.canvas.width, tree.canvas.height);
    let mut out = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{cw}" height="{ch}" viewBox="0 0 {cw} {ch}">"#
    );
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    out.push_str(&w.body);
    out.push_str("</svg>");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/export/svg.rs"]
mod tests;
