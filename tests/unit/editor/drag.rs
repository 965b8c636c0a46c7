use super::*;

#[test]
fn idle_ignores_move_and_release() {
    let mut g = DragGesture::default();
    assert_eq!(g.move_to(Point::new(1.0, 1.0)), DragEffect::Noop);
    assert_eq!(g.release(Point::new(1.0, 1.0)), DragEffect::Noop);
    assert_eq!(g.cancel(), DragEffect::Noop);
}

#[test]
fn live_delta_tracks_pointer_from_base() {
    let mut g = DragGesture::default();
    assert_eq!(
        g.press(Point::new(100.0, 100.0), Vec2::new(5.0, 5.0)),
        DragEffect::Started
    );
    assert_eq!(
        g.move_to(Point::new(110.0, 90.0)),
        DragEffect::Moved {
            delta: Vec2::new(15.0, -5.0)
        }
    );
    assert_eq!(
        g.move_to(Point::new(120.0, 100.0)),
        DragEffect::Moved {
            delta: Vec2::new(25.0, 5.0)
        }
    );
    assert_eq!(
        g.release(Point::new(120.0, 100.0)),
        DragEffect::Committed {
            delta: Vec2::new(25.0, 5.0)
        }
    );
    assert!(!g.is_dragging());
}

#[test]
fn second_press_while_dragging_is_ignored() {
    let mut g = DragGesture::default();
    g.press(Point::ZERO, Vec2::ZERO);
    assert_eq!(g.press(Point::new(50.0, 50.0), Vec2::ZERO), DragEffect::Noop);
    assert_eq!(
        g.release(Point::new(3.0, 4.0)),
        DragEffect::Committed {
            delta: Vec2::new(3.0, 4.0)
        }
    );
}

#[test]
fn cancel_restores_base() {
    let mut g = DragGesture::default();
    g.press(Point::ZERO, Vec2::new(7.0, 0.0));
    g.move_to(Point::new(40.0, 40.0));
    assert_eq!(
        g.cancel(),
        DragEffect::Canceled {
            delta: Vec2::new(7.0, 0.0)
        }
    );
}
