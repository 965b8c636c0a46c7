//! Rounded card under a colored banner; numbered points and a quote footer.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(238, 242, 247)),
        base_text: Color::rgb(30, 41, 59),
        highlight: Color::rgb(59, 130, 246),
        font: FontFamily::Sans,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.shape("card", Rect::new(60.0, 60.0, w - 60.0, h - 60.0), Fill::Solid(Color::WHITE), 40.0);
    cx.shape("banner", Rect::new(60.0, 60.0, w - 60.0, 480.0), Fill::Solid(cx.highlight()), 40.0);
    cx.image(SlotId::Hero, Rect::new(100.0, 100.0, 380.0, 380.0), 140.0);
    cx.text(
        TextPath::Title,
        Rect::new(410.0, 120.0, w - 100.0, 440.0),
        TextSpec::new(54.0)
            .bold()
            .paint(Paint::Fixed(Color::WHITE))
            .leading(1.15)
            .lines(4),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(110.0, 520.0, w - 110.0, 700.0),
        TextSpec::new(30.0).leading(1.5).lines(4),
    );

    let mut y = 730.0;
    for (i, _) in s.first_points(4).iter().enumerate() {
        cx.label(
            &format!("num-{i}"),
            format!("{:02}", i + 1),
            Rect::new(110.0, y, 190.0, y + 60.0),
            TextSpec::new(40.0).weight(800).highlight(),
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(200.0, y + 4.0, w - 110.0, y + 100.0),
            TextSpec::new(30.0).lines(2),
        );
        y += 110.0;
    }

    if s.lead_quote().is_some() {
        cx.shape(
            "quote-rule",
            Rect::new(110.0, h - 250.0, 118.0, h - 120.0),
            Fill::Solid(cx.highlight()),
            0.0,
        )
        .part_of(TextPath::Quote(0));
        cx.text(
            TextPath::Quote(0),
            Rect::new(140.0, h - 250.0, w - 110.0, h - 120.0),
            TextSpec::new(28.0).italic().lines(3),
        );
    }
}
