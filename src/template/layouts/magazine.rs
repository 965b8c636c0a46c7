//! Magazine spread: masthead, big photo, two text columns and a pull quote.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::WHITE),
        base_text: Color::rgb(17, 17, 17),
        highlight: Color::rgb(220, 38, 38),
        font: FontFamily::Serif,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.label(
        "masthead",
        "THE DIGEST",
        Rect::new(60.0, 40.0, w - 60.0, 130.0),
        TextSpec::new(84.0).weight(900).face(FontFamily::Display).highlight().center(),
    );
    cx.shape("masthead-rule", Rect::new(60.0, 140.0, w - 60.0, 144.0), Fill::Solid(cx.base()), 0.0);
    cx.image(SlotId::Hero, Rect::new(60.0, 170.0, w - 60.0, 700.0), 0.0);
    cx.text(
        TextPath::Title,
        Rect::new(60.0, 730.0, w - 60.0, 900.0),
        TextSpec::new(58.0).bold().leading(1.1).lines(2),
    );

    let col_w = (w - 60.0 * 2.0 - 40.0) / 2.0;
    let left = Rect::new(60.0, 920.0, 60.0 + col_w, h - 80.0);
    let right = Rect::new(left.x1 + 40.0, 920.0, w - 60.0, h - 80.0);
    cx.text(
        TextPath::CoreIdea,
        Rect::new(left.x0, left.y0, left.x1, left.y0 + 220.0),
        TextSpec::new(26.0).leading(1.5).lines(6),
    );

    let mut y = left.y0 + 240.0;
    for (i, _) in s.first_points(3).iter().enumerate() {
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(left.x0, y, left.x1, y + 80.0),
            TextSpec::new(24.0).lines(2),
        );
        y += 90.0;
    }

    if s.lead_quote().is_some() {
        cx.shape(
            "pull-rule-top",
            Rect::new(right.x0, right.y0, right.x1, right.y0 + 4.0),
            Fill::Solid(cx.highlight()),
            0.0,
        )
        .part_of(TextPath::Quote(0));
        cx.label(
            "pull-mark",
            "“",
            Rect::new(right.x0, right.y0 + 20.0, right.x0 + 80.0, right.y0 + 120.0),
            TextSpec::new(110.0).highlight(),
        )
        .part_of(TextPath::Quote(0));
        cx.text(
            TextPath::Quote(0),
            Rect::new(right.x0, right.y0 + 120.0, right.x1, right.y1 - 40.0),
            TextSpec::new(36.0).italic().leading(1.3).lines(7),
        );
    }
    cx.label(
        "folio",
        "P. 01",
        Rect::new(60.0, h - 60.0, w - 60.0, h - 30.0),
        TextSpec::new(18.0).paint(Paint::Fixed(Color::rgb(130, 130, 130))).end(),
    );
}
