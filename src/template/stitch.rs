//! Subtitle-Stitch: a hero frame followed by three film-strip rows, one per key point.
//!
//! Each row shows a blurred crop of the hero image behind the point, like consecutive video
//! frames with burned-in subtitles.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::{ElementId, Fill, ImageFilter};
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Palette};

pub(crate) const ROWS: usize = 3;

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::BLACK),
        base_text: Color::WHITE,
        highlight: Color::rgb(255, 221, 0),
        font: FontFamily::Sans,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;
    let hero_h = h * 0.4;
    let row_h = (h - hero_h) / ROWS as f64;

    cx.image(SlotId::Hero, Rect::new(0.0, 0.0, w, hero_h), 0.0);
    cx.shape(
        "hero-fade",
        Rect::new(0.0, hero_h - 200.0, w, hero_h),
        Fill::vertical(Color::rgba(0, 0, 0, 0), Color::rgba(0, 0, 0, 200)),
        0.0,
    );
    cx.text(
        TextPath::Title,
        Rect::new(48.0, hero_h - 170.0, w - 48.0, hero_h - 24.0),
        TextSpec::new(54.0).bold().center().lines(2),
    );

    let blurred = ImageFilter {
        blur: 18.0,
        brightness: 0.5,
        ..ImageFilter::NONE
    };
    for i in 0..ROWS {
        let y = hero_h + i as f64 * row_h;
        let row = Rect::new(0.0, y, w, y + row_h);
        cx.image_with(ElementId::deco(&format!("row-{i}")), SlotId::Hero, row, 0.0, blurred);
        cx.shape(
            &format!("row-gap-{i}"),
            Rect::new(0.0, y, w, y + 4.0),
            Fill::Solid(Color::BLACK),
            0.0,
        );
        if i < s.key_points.len() {
            cx.text(
                TextPath::KeyPoint(i),
                Rect::new(60.0, y + row_h * 0.5 - 60.0, w - 60.0, y + row_h * 0.5 + 60.0),
                TextSpec::new(38.0).weight(600).highlight().center().lines(2),
            );
        }
    }
}
