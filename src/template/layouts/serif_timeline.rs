//! Minimalist serif timeline: one vertical rule, every key point as a dated node.

use crate::foundation::core::{Color, Rect};
use crate::summary::model::TextPath;
use crate::template::layout::{LayoutCx, TextSpec};
use crate::template::scene::Fill;
use crate::template::style::{FontFamily, Paint, Palette};

pub(crate) fn palette() -> Palette {
    Palette {
        background: Fill::Solid(Color::rgb(250, 248, 244)),
        base_text: Color::rgb(28, 28, 28),
        highlight: Color::rgb(160, 82, 45),
        font: FontFamily::Serif,
    }
}

pub(crate) fn layout(cx: &mut LayoutCx<'_>) {
    let (w, h) = (cx.w(), cx.h());
    let s = cx.summary;
    let muted = Paint::Fixed(Color::rgb(120, 120, 120));

    cx.text(
        TextPath::Title,
        Rect::new(90.0, 90.0, w - 90.0, 300.0),
        TextSpec::new(64.0).leading(1.15).lines(3),
    );
    cx.text(
        TextPath::CoreIdea,
        Rect::new(90.0, 320.0, w - 90.0, 460.0),
        TextSpec::new(28.0).italic().paint(muted).lines(3),
    );

    let points = s.key_points.len().min(6);
    let top = 520.0;
    let bottom = h - 260.0;
    let step = if points > 1 { (bottom - top) / points as f64 } else { 0.0 };
    cx.shape("rule", Rect::new(118.0, top, 120.0, bottom), Fill::Solid(cx.base()), 0.0);
    for i in 0..points {
        let y = top + i as f64 * step;
        cx.shape(
            &format!("node-{i}"),
            Rect::new(108.0, y + 8.0, 130.0, y + 30.0),
            Fill::Solid(cx.highlight()),
            11.0,
        )
        .part_of(TextPath::KeyPoint(i));
        cx.text(
            TextPath::KeyPoint(i),
            Rect::new(170.0, y, w - 90.0, y + step.max(90.0) - 10.0),
            TextSpec::new(30.0).lines(2),
        );
    }

    if let Some(q) = s.lead_quote() {
        cx.text(
            TextPath::Quote(0),
            Rect::new(90.0, h - 220.0, w - 90.0, h - 130.0),
            TextSpec::new(30.0).italic().center().lines(2),
        );
        if !q.timestamp_label.is_empty() {
            cx.label(
                "quote-time",
                q.timestamp_label.clone(),
                Rect::new(90.0, h - 120.0, w - 90.0, h - 80.0),
                TextSpec::new(22.0).paint(muted).center(),
            )
            .part_of(TextPath::Quote(0));
        }
    }
}
