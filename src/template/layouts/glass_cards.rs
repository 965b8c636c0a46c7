//! Gradient backdrop with stacked translucent cards.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::LinearGradient {
            angle_deg: 135.0,
            stops: vec![
                (0.0, Color::rgb(99, 102, 241)),
                (0.5, Color::rgb(168, 85, 247)),
                (1.0, Color::rgb(236, 72, 153)),
            ],
        },
        base_text: Color::WHITE,
        highlight: Color::rgb(253, 224, 71),
        font: FontFamily::Sans,
    }
}

fn glass(cx: &mut LayoutCx<'_>, name: &str, frame: Rect) {
    cx.shape(name, frame, Fill::Solid(Color::rgba(255, 255, 255, 46)), 32.0);
    cx.outline(
        &format!("{name}-edge"),
        frame,
        (Color::rgba(255, 255, 255, 90), 2.0),
        32.0,
    );
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.shape(
        "orb",
        Rect::new(w * 0.55, -120.0, w + 160.0, 480.0),
        Fill::Solid(Color::rgba(255, 255, 255, 36)),
        300.0,
    );

    glass(cx, "head-card", Rect::new(60.0, 80.0, w - 60.0, 520.0));
    cx.image(SlotId::Hero, Rect::new(100.0, 120.0, 340.0, 360.0), 120.0);
    cx.text(
        TextPath::Title,
        Rect::new(370.0, 130.0, w - 100.0, 360.0),
        TextSpec::new(50.0).bold().leading(1.15).lines(4),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(100.0, 380.0, w - 100.0, 500.0),
        TextSpec::new(26.0).lines(3),
    );

    let mut y = 560.0;
    for (i, _) in s.first_points(3).iter().enumerate() {
        glass(cx, &format!("point-card-{i}"), Rect::new(60.0, y, w - 60.0, y + 180.0));
        cx.label(
            &format!("num-{i}"),
            format!("{}", i + 1),
            Rect::new(100.0, y + 40.0, 160.0, y + 120.0),
            TextSpec::new(64.0).weight(800).highlight(),
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(180.0, y + 40.0, w - 100.0, y + 150.0),
            TextSpec::new(30.0).lines(3),
        );
        y += 200.0;
    }

    if s.lead_quote().is_some() {
        glass(cx, "quote-card", Rect::new(60.0, h - 240.0, w - 60.0, h - 60.0));
        cx.text(
            TextPath::Quote(0),
            Rect::new(100.0, h - 200.0, w - 100.0, h - 90.0),
            TextSpec::new(28.0).italic().center().lines(3),
        );
    }
}
