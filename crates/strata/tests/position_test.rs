use rustc_hash::FxHashMap;
use strata::position::compute_positions;
use strata::{NodeId, Point, Size};

fn layer(ids: &[&str]) -> Vec<NodeId> {
    ids.iter().map(|id| NodeId::from(*id)).collect()
}

fn dims(entries: &[(&str, f64, f64)]) -> FxHashMap<NodeId, Size> {
    entries
        .iter()
        .map(|(id, width, height)| {
            (
                NodeId::from(*id),
                Size {
                    width: *width,
                    height: *height,
                },
            )
        })
        .collect()
}

#[test]
fn centers_a_single_node_on_x_zero() {
    let positions = compute_positions(
        &[layer(&["a"])],
        &dims(&[("a", 100.0, 40.0)]),
        60.0,
        40.0,
    );
    assert_eq!(positions[&NodeId::from("a")], Point { x: -50.0, y: 0.0 });
}

#[test]
fn lays_out_a_row_in_order_without_overlap() {
    let positions = compute_positions(
        &[layer(&["a", "b"])],
        &dims(&[("a", 100.0, 40.0), ("b", 60.0, 40.0)]),
        60.0,
        40.0,
    );
    // total width = 100 + 60 + 40 = 200, so the row starts at -100.
    assert_eq!(positions[&NodeId::from("a")], Point { x: -100.0, y: 0.0 });
    assert_eq!(positions[&NodeId::from("b")], Point { x: 40.0, y: 0.0 });
}

#[test]
fn advances_y_by_the_tallest_node_plus_the_rank_gap() {
    let positions = compute_positions(
        &[layer(&["a", "b"]), layer(&["c"])],
        &dims(&[("a", 100.0, 50.0), ("b", 100.0, 120.0), ("c", 100.0, 40.0)]),
        60.0,
        40.0,
    );
    assert_eq!(positions[&NodeId::from("a")].y, 0.0);
    assert_eq!(positions[&NodeId::from("b")].y, 0.0);
    assert_eq!(positions[&NodeId::from("c")].y, 180.0);
}

#[test]
fn honors_the_configured_node_gap() {
    let positions = compute_positions(
        &[layer(&["a", "b"])],
        &dims(&[("a", 50.0, 40.0), ("b", 50.0, 40.0)]),
        60.0,
        200.0,
    );
    let a = positions[&NodeId::from("a")];
    let b = positions[&NodeId::from("b")];
    assert_eq!(b.x - (a.x + 50.0), 200.0);
}

#[test]
fn keeps_horizontal_intervals_disjoint_for_any_positive_gap() {
    for gap in [1.0, 10.0, 40.0] {
        let positions = compute_positions(
            &[layer(&["a", "b", "c"])],
            &dims(&[("a", 80.0, 40.0), ("b", 120.0, 40.0), ("c", 30.0, 40.0)]),
            60.0,
            gap,
        );
        let mut spans: Vec<(f64, f64)> = [("a", 80.0), ("b", 120.0), ("c", 30.0)]
            .iter()
            .map(|(id, w)| {
                let p = positions[&NodeId::from(*id)];
                (p.x, p.x + w)
            })
            .collect();
        spans.sort_by(|l, r| l.0.total_cmp(&r.0));
        for pair in spans.windows(2) {
            assert!(pair[0].1 <= pair[1].0, "overlap at gap {gap}: {pair:?}");
        }
    }
}

#[test]
fn falls_back_to_a_default_box_for_missing_dimensions() {
    let positions = compute_positions(&[layer(&["a"])], &FxHashMap::default(), 60.0, 40.0);
    let fallback = strata::dimensions::FALLBACK_SIZE;
    assert_eq!(
        positions[&NodeId::from("a")],
        Point {
            x: -fallback.width / 2.0,
            y: 0.0
        }
    );
}
