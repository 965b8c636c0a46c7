use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use base64::Engine as _;

use crate::export::svg::to_svg;
use crate::foundation::core::Color;
use crate::foundation::error::{CardError, CardResult};
use crate::source::descriptor::ImageRef;
use crate::template::scene::VisualTree;
use crate::template::text;

/// Raster export settings.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOpts {
    /// Pixel multiplier over the canvas size.
    pub scale: f32,
    /// Painted under the tree; `None` keeps transparency where the tree has none.
    pub background: Option<Color>,
    pub file_prefix: String,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            file_prefix: "viralcard".to_string(),
        }
    }
}

/// Encoded image plus the download name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedImage {
    pub file_name: String,
    pub width: u32,
    pub height: u32,
    pub png: Vec<u8>,
}

impl ExportedImage {
    /// Write the PNG into `dir` under its file name.
    pub fn save_to_dir(&self, dir: &Path) -> CardResult<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create export dir '{}'", dir.display()))
            .map_err(export_err)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.png)
            .with_context(|| format!("write export '{}'", path.display()))
            .map_err(export_err)?;
        Ok(path)
    }
}

/// Renders a visual tree to a raster blob.
pub trait ExportAdapter {
    fn export(&self, tree: &VisualTree) -> CardResult<ExportedImage>;
}

/// `<prefix>-<unix millis>.png`.
pub fn export_file_name(prefix: &str, unix_millis: u128) -> String {
    format!("{prefix}-{unix_millis}.png")
}

fn export_err(e: anyhow::Error) -> CardError {
    CardError::export(format!("{e:#}"))
}

fn now_millis() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// SVG → PNG through `usvg`/`resvg`, embedding local images as data URIs.
#[derive(Clone)]
pub struct PngExporter {
    opts: ExportOpts,
    /// Relative image paths resolve against this directory.
    base_dir: Option<PathBuf>,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl PngExporter {
    pub fn new(opts: ExportOpts) -> Self {
        Self {
            opts,
            base_dir: None,
            fontdb: build_fontdb(None),
        }
    }

    /// Resolve relative image paths under `dir` and load its `fonts/` for export and text layout.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.fontdb = build_fontdb(Some(&dir));
        text::register_fonts_dir(&dir.join("fonts"));
        self.base_dir = Some(dir);
        self
    }

    pub fn opts(&self) -> &ExportOpts {
        &self.opts
    }

    fn resolve_path(&self, raw: &str) -> PathBuf {
        let raw = raw.strip_prefix("file://").unwrap_or(raw);
        let p = Path::new(raw);
        match &self.base_dir {
            Some(base) if p.is_relative() => base.join(p),
            _ => p.to_path_buf(),
        }
    }

    /// Render `tree` to SVG text with every image inlined.
    pub fn svg(&self, tree: &VisualTree) -> CardResult<String> {
        let embed = |image: &ImageRef| self.embed(image);
        to_svg(tree, &embed)
    }

    fn embed(&self, image: &ImageRef) -> CardResult<String> {
        if image.is_remote() {
            return Err(CardError::export(format!(
                "remote image '{}' cannot be embedded; use locally uploaded images instead",
                image.as_str()
            )));
        }
        if image.is_data_uri() {
            let s = image.as_str().trim();
            if !s.starts_with("data:image/") {
                return Err(CardError::export("data URI is not an image"));
            }
            return Ok(s.to_string());
        }

        let path = self.resolve_path(image.as_str());
        let bytes = std::fs::read(&path)
            .with_context(|| format!("read image '{}'", path.display()))
            .map_err(export_err)?;
        let decoded = image::load_from_memory(&bytes)
            .with_context(|| format!("decode image '{}'", path.display()))
            .map_err(export_err)?;
        let mut png = Vec::new();
        decoded
            .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .context("re-encode image as png")
            .map_err(export_err)?;
        Ok(format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&png)
        ))
    }

    fn rasterize(&self, svg: &str, width: u32, height: u32) -> CardResult<Vec<u8>> {
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| CardError::export(format!("parse svg: {e}")))?;

        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| CardError::export("failed to allocate export pixmap"))?;
        if let Some(bg) = self.opts.background {
            pixmap.fill(resvg::tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        }
        let sx = width as f32 / tree.size().width();
        let sy = height as f32 / tree.size().height();
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        let img = image::RgbaImage::from_raw(width, height, rgba)
            .ok_or_else(|| CardError::export("pixmap size mismatch"))?;
        let mut png = Vec::new();
        img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
            .context("encode png")
            .map_err(export_err)?;
        Ok(png)
    }
}

impl std::fmt::Debug for PngExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PngExporter")
            .field("opts", &self.opts)
            .field("base_dir", &self.base_dir)
            .field("font_faces", &self.fontdb.len())
            .finish()
    }
}

impl ExportAdapter for PngExporter {
    #[tracing::instrument(skip(self, tree), fields(blocks = tree.blocks.len()))]
    fn export(&self, tree: &VisualTree) -> CardResult<ExportedImage> {
        let scale = self.opts.scale;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CardError::validation("export scale must be > 0"));
        }
        let width = ((tree.canvas.width as f32) * scale).round().max(1.0) as u32;
        let height = ((tree.canvas.height as f32) * scale).round().max(1.0) as u32;

        let svg = self.svg(tree)?;
        let png = self.rasterize(&svg, width, height)?;
        let file_name = export_file_name(&self.opts.file_prefix, now_millis());
        tracing::debug!(%file_name, width, height, bytes = png.len(), "exported");
        Ok(ExportedImage {
            file_name,
            width,
            height,
            png,
        })
    }
}

fn build_fontdb(dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = dir {
        db.load_fonts_dir(dir.join("fonts"));
    }
    Arc::new(db)
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
