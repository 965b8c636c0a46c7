//! Full-bleed hero image with floating title, quote and list blocks.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(17, 17, 17)),
        base_text: Color::WHITE,
        highlight: Color::rgb(255, 214, 10),
        font: FontFamily::Sans,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.image(SlotId::Hero, cx.canvas.rect(), 0.0);
    cx.shape(
        "scrim",
        Rect::new(0.0, h * 0.35, w, h),
        Fill::vertical(Color::rgba(0, 0, 0, 0), Color::rgba(0, 0, 0, 220)),
        0.0,
    );

    if s.lead_quote().is_some() {
        cx.shape(
            "quote-card",
            Rect::new(w * 0.46, 80.0, w - 60.0, 360.0),
            Fill::Solid(Color::rgba(255, 255, 255, 230)),
            28.0,
        )
        .part_of(TextPath::Quote(0))
        .rotation_deg = 2.0;
        cx.text(
            TextPath::Quote(0),
            Rect::new(w * 0.46 + 36.0, 116.0, w - 96.0, 324.0),
            TextSpec::new(30.0)
                .italic()
                .paint(Paint::Fixed(Color::rgb(20, 20, 20)))
                .lines(5),
        )
        .rotation_deg = 2.0;
    }

    cx.label(
        "kicker",
        "MUST READ",
        Rect::new(64.0, h * 0.50, w * 0.6, h * 0.50 + 40.0),
        TextSpec::new(26.0).bold().highlight().upper(),
    );
    cx.text(
        TextPath::Title,
        Rect::new(64.0, h * 0.50 + 52.0, w - 64.0, h * 0.50 + 300.0),
        TextSpec::new(76.0).weight(800).leading(1.1).lines(3),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(64.0, h * 0.50 + 320.0, w - 64.0, h * 0.50 + 440.0),
        TextSpec::new(30.0).lines(3),
    );

    let top = h * 0.50 + 470.0;
    for (i, _) in s.first_points(3).iter().enumerate() {
        let y = top + i as f64 * 70.0;
        cx.shape(
            &format!("bullet-{i}"),
            Rect::new(64.0, y + 12.0, 80.0, y + 28.0),
            Fill::Solid(cx.highlight()),
            8.0,
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(100.0, y, w - 64.0, y + 64.0),
            TextSpec::new(28.0).lines(2),
        );
    }
}
