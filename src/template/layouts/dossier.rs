//! Aged-paper case file: stamp, clipped photo, typed findings.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::{ElementId, Fill, ImageFilter};
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::LinearGradient {
            angle_deg: 90.0,
            stops: vec![
                (0.0, Color::rgb(236, 224, 196)),
                (1.0, Color::rgb(214, 196, 160)),
            ],
        },
        base_text: Color::rgb(50, 40, 30),
        highlight: Color::rgb(170, 30, 30),
        font: FontFamily::Mono,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.outline("frame", Rect::new(40.0, 40.0, w - 40.0, h - 40.0), (cx.base(), 2.0), 0.0);
    cx.label(
        "file-no",
        "CASE FILE / NO. 0427",
        Rect::new(80.0, 80.0, w - 80.0, 120.0),
        TextSpec::new(24.0).upper(),
    );
    cx.label(
        "stamp",
        "CONFIDENTIAL",
        Rect::new(w - 460.0, 140.0, w - 80.0, 220.0),
        TextSpec::new(48.0).weight(900).face(FontFamily::Display).highlight().center(),
    )
    .rotation_deg = -12.0;
    cx.outline(
        "stamp-box",
        Rect::new(w - 460.0, 140.0, w - 80.0, 220.0),
        (cx.highlight(), 5.0),
        8.0,
    )
    .rotation_deg = -12.0;

    let sepia = ImageFilter {
        sepia: true,
        ..ImageFilter::NONE
    };
    cx.shape(
        "photo-mount",
        Rect::new(80.0, 260.0, 480.0, 760.0),
        Fill::Solid(Color::rgb(250, 246, 236)),
        2.0,
    )
    .rotation_deg = -2.0;
    cx.image_with(
        ElementId::for_slot(SlotId::Hero),
        SlotId::Hero,
        Rect::new(100.0, 280.0, 460.0, 740.0),
        0.0,
        sepia,
    )
    .rotation_deg = -2.0;
    cx.shape("clip", Rect::new(250.0, 236.0, 310.0, 300.0), Fill::Solid(Color::rgb(140, 140, 150)), 6.0);

    cx.label(
        "subject",
        "SUBJECT:",
        Rect::new(520.0, 280.0, w - 80.0, 320.0),
        TextSpec::new(22.0).bold(),
    );
    cx.text(
        TextPath::Title,
        Rect::new(520.0, 330.0, w - 80.0, 560.0),
        TextSpec::new(44.0).bold().leading(1.2).lines(4),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(520.0, 580.0, w - 80.0, 760.0),
        TextSpec::new(24.0).leading(1.5).lines(5),
    );

    cx.label(
        "findings",
        "FINDINGS",
        Rect::new(80.0, 810.0, w - 80.0, 850.0),
        TextSpec::new(26.0).bold().upper(),
    );
    let mut y = 870.0;
    for (i, _) in s.first_points(4).iter().enumerate() {
        cx.label(
            &format!("item-{i}"),
            format!("{}.", i + 1),
            Rect::new(80.0, y, 130.0, y + 40.0),
            TextSpec::new(26.0),
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(130.0, y, w - 80.0, y + 80.0),
            TextSpec::new(26.0).lines(2),
        );
        y += 90.0;
    }

    if s.lead_quote().is_some() {
        cx.text(
            TextPath::Quote(0),
            Rect::new(80.0, h - 180.0, w - 80.0, h - 80.0),
            TextSpec::new(24.0)
                .italic()
                .paint(Paint::Fixed(Color::rgb(100, 80, 60)))
                .lines(3),
        );
    }
}
