//! Abstract literary poster: geometric shapes, huge serif title, a single quote.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(240, 234, 222)),
        base_text: Color::rgb(25, 25, 35),
        highlight: Color::rgb(214, 94, 58),
        font: FontFamily::Serif,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;

    cx.shape(
        "sun",
        Rect::new(w * 0.42, 120.0, w * 0.42 + 520.0, 640.0),
        Fill::Solid(cx.highlight()),
        260.0,
    );
    cx.shape(
        "slab",
        Rect::new(-40.0, 520.0, w * 0.62, 600.0),
        Fill::Solid(Color::rgb(25, 25, 35)),
        0.0,
    )
    .rotation_deg = -8.0;
    cx.image(SlotId::Hero, Rect::new(90.0, 180.0, 430.0, 520.0), 170.0)
        .opacity = 0.9;

    cx.text(
        TextPath::Title,
        Rect::new(80.0, 700.0, w - 80.0, 1000.0),
        TextSpec::new(88.0).weight(600).leading(1.05).lines(3),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(80.0, 1010.0, w * 0.7, 1140.0),
        TextSpec::new(24.0).lines(4),
    );

    if let Some(q) = s.lead_quote() {
        cx.shape("quote-rule", Rect::new(80.0, 1170.0, 200.0, 1174.0), Fill::Solid(cx.base()), 0.0)
            .part_of(TextPath::Quote(0));
        cx.text(
            TextPath::Quote(0),
            Rect::new(80.0, 1190.0, w - 80.0, h - 110.0),
            TextSpec::new(32.0).italic().lines(3),
        );
        let attribution = if q.timestamp_label.is_empty() {
            "—".to_string()
        } else {
            format!("— {}", q.timestamp_label)
        };
        cx.label(
            "attribution",
            attribution,
            Rect::new(80.0, h - 100.0, w - 80.0, h - 60.0),
            TextSpec::new(22.0)
                .paint(Paint::Fixed(Color::rgb(110, 110, 120)))
                .end(),
        )
        .part_of(TextPath::Quote(0));
    }
    cx.label(
        "edition",
        "VOL. I",
        Rect::new(80.0, 60.0, 400.0, 100.0),
        TextSpec::new(22.0).face(FontFamily::Sans).bold().upper(),
    );
}
