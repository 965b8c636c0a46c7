//! Blurred photo backdrop with frosted dashboard tiles.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::{ElementId, Fill, ImageFilter};
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(15, 23, 42)),
        base_text: Color::WHITE,
        highlight: Color::rgb(56, 189, 248),
        font: FontFamily::Sans,
    }
}

fn tile(cx: &mut LayoutCx<'_>, name: &str, frame: Rect) {
    cx.shape(name, frame, Fill::Solid(Color::rgba(255, 255, 255, 38)), 28.0);
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;
    let dim = Paint::Fixed(Color::rgba(255, 255, 255, 170));

    let backdrop = ImageFilter {
        blur: 40.0,
        brightness: 0.55,
        ..ImageFilter::NONE
    };
    cx.image_with(ElementId::deco("backdrop"), SlotId::Hero, cx.canvas.rect(), 0.0, backdrop);

    tile(cx, "head-tile", Rect::new(60.0, 80.0, w - 60.0, 420.0));
    cx.label(
        "status",
        "● LIVE SUMMARY",
        Rect::new(100.0, 110.0, w - 100.0, 150.0),
        TextSpec::new(22.0).bold().highlight(),
    );
    cx.text(
        TextPath::Title,
        Rect::new(100.0, 160.0, w - 100.0, 400.0),
        TextSpec::new(56.0).bold().leading(1.15).lines(3),
    );

    tile(cx, "image-tile", Rect::new(60.0, 450.0, 520.0, 850.0));
    cx.image(SlotId::Hero, Rect::new(80.0, 470.0, 500.0, 830.0), 20.0);
    tile(cx, "idea-tile", Rect::new(550.0, 450.0, w - 60.0, 850.0));
    cx.label(
        "idea-head",
        "CORE IDEA",
        Rect::new(580.0, 480.0, w - 90.0, 520.0),
        TextSpec::new(20.0).paint(dim),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(580.0, 530.0, w - 90.0, 830.0),
        TextSpec::new(26.0).leading(1.45).lines(8),
    );

    let tiles = s.first_points(4).len();
    let tile_w = (w - 120.0 - 30.0 * 1.0) / 2.0;
    for i in 0..tiles {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let x = 60.0 + col * (tile_w + 30.0);
        let y = 880.0 + row * 200.0;
        tile(cx, &format!("metric-{i}"), Rect::new(x, y, x + tile_w, y + 180.0));
        cx.label(
            &format!("metric-num-{i}"),
            format!("{:02}", i + 1),
            Rect::new(x + 30.0, y + 20.0, x + 130.0, y + 70.0),
            TextSpec::new(36.0).weight(800).highlight(),
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(x + 30.0, y + 76.0, x + tile_w - 30.0, y + 170.0),
            TextSpec::new(24.0).lines(2),
        );
    }

    if s.lead_quote().is_some() {
        cx.text(
            TextPath::Quote(0),
            Rect::new(60.0, h - 110.0, w - 60.0, h - 40.0),
            TextSpec::new(24.0).italic().paint(dim).center().lines(1),
        );
    }
}
