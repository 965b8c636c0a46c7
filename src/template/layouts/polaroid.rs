//! Three tilted instant photos on a cork board with handwritten captions.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::slots::SlotId;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(196, 160, 120)),
        base_text: Color::rgb(40, 30, 20),
        highlight: Color::rgb(200, 40, 40),
        font: FontFamily::Handwritten,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let w = cx.w();
    let s = cx.summary;

    cx.shape(
        "title-tape",
        Rect::new(80.0, 60.0, w - 80.0, 300.0),
        Fill::Solid(Color::rgba(255, 255, 240, 235)),
        6.0,
    )
    .rotation_deg = -1.5;
    cx.text(
        TextPath::Title,
        Rect::new(120.0, 90.0, w - 120.0, 280.0),
        TextSpec::new(60.0).bold().center().leading(1.1).lines(2),
    )
    .rotation_deg = -1.5;

    let photos = [
        (SlotId::Hero, Rect::new(80.0, 360.0, 560.0, 900.0), -4.0),
        (SlotId::Secondary, Rect::new(520.0, 420.0, 1000.0, 960.0), 3.5),
        (SlotId::Tertiary, Rect::new(260.0, 860.0, 740.0, 1400.0), -1.5),
    ];
    for (i, (slot, frame, tilt)) in photos.into_iter().enumerate() {
        cx.shape(&format!("frame-{i}"), frame, Fill::Solid(Color::rgb(252, 252, 250)), 4.0)
            .rotation_deg = tilt;
        let photo = Rect::new(frame.x0 + 24.0, frame.y0 + 24.0, frame.x1 - 24.0, frame.y1 - 120.0);
        cx.image(slot, photo, 0.0).rotation_deg = tilt;
        if i < s.key_points.len() {
            cx.text(
                TextPath::KeyPoint(i),
                Rect::new(frame.x0 + 24.0, frame.y1 - 110.0, frame.x1 - 24.0, frame.y1 - 10.0),
                TextSpec::new(28.0)
                    .paint(Paint::Fixed(Color::rgb(40, 40, 40)))
                    .center()
                    .lines(2),
            )
            .rotation_deg = tilt;
        }
        cx.shape(
            &format!("pin-{i}"),
            Rect::new(frame.center().x - 14.0, frame.y0 - 10.0, frame.center().x + 14.0, frame.y0 + 18.0),
            Fill::Solid(cx.highlight()),
            14.0,
        );
    }
}
