use freqpicker::data::selection::*;

fn complete(a: Point, b: Point) -> SelectionBox {
    let mut sel = Selection::default();
    sel.add_point(a);
    match sel.add_point(b) {
        SelectionEvent::Completed(bx) => bx,
        other => panic!("expected completed selection, got {:?}", other),
    }
}

#[test]
fn box_is_independent_of_click_order() {
    let pairs = [
        (Point::new(700, 100), Point::new(1100, 400)),
        (Point::new(5, 90), Point::new(80, 3)),
        (Point::new(0, 0), Point::new(0, 0)),
        (Point::new(-4, 10), Point::new(12, -6)),
    ];
    for (a, b) in pairs {
        assert_eq!(complete(a, b), complete(b, a));
    }
}

#[test]
fn box_dimensions_are_absolute_differences() {
    let a = Point::new(1100, 40);
    let b = Point::new(700, 400);
    let bx = complete(a, b);
    assert_eq!(bx.x, 700);
    assert_eq!(bx.y, 40);
    assert_eq!(bx.width, a.x.abs_diff(b.x));
    assert_eq!(bx.height, a.y.abs_diff(b.y));
}

#[test]
fn box_only_exists_with_two_points() {
    let mut sel = Selection::default();
    assert!(sel.selection_box().is_none());
    sel.add_point(Point::new(1, 1));
    assert!(sel.selection_box().is_none());
    sel.add_point(Point::new(4, 5));
    assert!(sel.is_complete());
    assert_eq!(
        sel.selection_box(),
        Some(SelectionBox {
            x: 1,
            y: 1,
            width: 3,
            height: 4
        })
    );
}

#[test]
fn third_click_with_discard_clears_everything() {
    let mut sel = Selection::new(ThirdClickPolicy::Discard);
    sel.add_point(Point::new(1, 1));
    sel.add_point(Point::new(4, 5));
    assert_eq!(sel.add_point(Point::new(9, 9)), SelectionEvent::Reset);
    assert!(sel.is_empty());
    assert!(sel.selection_box().is_none());

    // Next click begins a fresh cycle.
    assert_eq!(
        sel.add_point(Point::new(2, 2)),
        SelectionEvent::Started(Point::new(2, 2))
    );
}

#[test]
fn third_click_with_restart_keeps_new_point() {
    let mut sel = Selection::new(ThirdClickPolicy::Restart);
    sel.add_point(Point::new(1, 1));
    sel.add_point(Point::new(4, 5));
    assert_eq!(sel.add_point(Point::new(9, 9)), SelectionEvent::Reset);
    assert_eq!(sel.points(), &[Point::new(9, 9)]);
    assert!(sel.selection_box().is_none());

    match sel.add_point(Point::new(19, 29)) {
        SelectionEvent::Completed(bx) => {
            assert_eq!((bx.x, bx.y, bx.width, bx.height), (9, 9, 10, 20));
        }
        other => panic!("expected completed selection, got {:?}", other),
    }
}

#[test]
fn length_never_exceeds_two() {
    for policy in [ThirdClickPolicy::Discard, ThirdClickPolicy::Restart] {
        let mut sel = Selection::new(policy);
        for i in 0..10 {
            sel.add_point(Point::new(i, i * 2));
            assert!(sel.len() <= 2);
        }
    }
}

#[test]
fn reset_clears_points_but_keeps_policy() {
    let mut sel = Selection::new(ThirdClickPolicy::Discard);
    sel.add_point(Point::new(1, 1));
    sel.add_point(Point::new(2, 2));
    sel.reset();
    assert!(sel.is_empty());
    assert!(sel.selection_box().is_none());
    assert_eq!(sel.policy(), ThirdClickPolicy::Discard);
}

#[test]
fn default_policy_is_restart() {
    assert_eq!(Selection::default().policy(), ThirdClickPolicy::Restart);
}
