//! Phone note-app screen: status bar, heading, body and a checklist.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(252, 250, 242)),
        base_text: Color::rgb(34, 34, 34),
        highlight: Color::rgb(232, 170, 20),
        font: FontFamily::Sans,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let w = cx.w();
    let s = cx.summary;
    let grey = Paint::Fixed(Color::rgb(150, 150, 150));

    cx.label("clock", "9:41", Rect::new(60.0, 30.0, 300.0, 70.0), TextSpec::new(28.0).bold());
    cx.label(
        "back",
        "‹ Notes",
        Rect::new(48.0, 100.0, 400.0, 150.0),
        TextSpec::new(34.0).highlight(),
    );
    cx.label(
        "date",
        "Today",
        Rect::new(60.0, 170.0, w - 60.0, 210.0),
        TextSpec::new(24.0).paint(grey).center(),
    );
    cx.text(
        TextPath::Title,
        Rect::new(60.0, 230.0, w - 60.0, 400.0),
        TextSpec::new(60.0).bold().leading(1.15).lines(2),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(60.0, 420.0, w - 60.0, 600.0),
        TextSpec::new(32.0).leading(1.5).lines(4),
    );
    cx.image(SlotId::Hero, Rect::new(60.0, 620.0, w - 60.0, 900.0), 24.0);

    let mut y = 940.0;
    for (i, _) in s.first_points(5).iter().enumerate() {
        cx.outline(
            &format!("check-{i}"),
            Rect::new(60.0, y + 6.0, 96.0, y + 42.0),
            (cx.highlight(), 3.0),
            18.0,
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(116.0, y, w - 60.0, y + 84.0),
            TextSpec::new(30.0).lines(2),
        );
        y += 92.0;
    }
}
