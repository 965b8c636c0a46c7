//! Terminal window on a dark grid; neon mono text.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::{ElementId, Fill, ImageFilter};
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(8, 10, 18)),
        base_text: Color::rgb(0, 255, 163),
        highlight: Color::rgb(255, 0, 170),
        font: FontFamily::Mono,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;
    let grid = Color::rgba(0, 255, 163, 28);

    for i in 1..12 {
        let x = w * i as f64 / 12.0;
        cx.shape(&format!("grid-v{i}"), Rect::new(x, 0.0, x + 1.0, h), Fill::Solid(grid), 0.0);
    }
    for i in 1..16 {
        let y = h * i as f64 / 16.0;
        cx.shape(&format!("grid-h{i}"), Rect::new(0.0, y, w, y + 1.0), Fill::Solid(grid), 0.0);
    }

    let win = Rect::new(60.0, 80.0, w - 60.0, h - 80.0);
    cx.shape("window", win, Fill::Solid(Color::rgba(12, 16, 28, 240)), 18.0);
    cx.outline("window-border", win, (cx.base(), 2.0), 18.0);
    for (i, c) in [(255, 95, 86), (255, 189, 46), (39, 201, 63)].into_iter().enumerate() {
        let x = 96.0 + i as f64 * 40.0;
        cx.shape(
            &format!("light-{i}"),
            Rect::new(x, 110.0, x + 22.0, 132.0),
            Fill::Solid(Color::rgb(c.0, c.1, c.2)),
            11.0,
        );
    }
    cx.label(
        "prompt",
        "$ cat summary.md",
        Rect::new(100.0, 170.0, w - 100.0, 210.0),
        TextSpec::new(26.0).paint(Paint::Fixed(Color::rgb(140, 150, 170))),
    );
    cx.text(
        TextPath::Title,
        Rect::new(100.0, 230.0, w - 100.0, 430.0),
        TextSpec::new(52.0).bold().highlight().leading(1.2).lines(3),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(100.0, 450.0, w - 100.0, 620.0),
        TextSpec::new(26.0).leading(1.5).lines(4),
    );

    let mut y = 650.0;
    for (i, _) in s.first_points(4).iter().enumerate() {
        cx.label(
            &format!("arrow-{i}"),
            ">",
            Rect::new(100.0, y, 130.0, y + 40.0),
            TextSpec::new(28.0).highlight(),
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(140.0, y, w - 100.0, y + 90.0),
            TextSpec::new(26.0).lines(2),
        );
        y += 100.0;
    }

    let filter = ImageFilter {
        grayscale: true,
        brightness: 0.8,
        ..ImageFilter::NONE
    };
    cx.image_with(
        ElementId::for_slot(SlotId::Hero),
        SlotId::Hero,
        Rect::new(100.0, h - 400.0, 440.0, h - 120.0),
        8.0,
        filter,
    );
    if s.lead_quote().is_some() {
        cx.text(
            TextPath::Quote(0),
            Rect::new(480.0, h - 400.0, w - 100.0, h - 120.0),
            TextSpec::new(26.0).italic().lines(6),
        );
    }
}
