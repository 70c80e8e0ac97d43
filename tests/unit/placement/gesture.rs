use super::*;
use crate::placement::AssetKind;

fn asset() -> PendingAsset {
    PendingAsset {
        media_path: "img/cat.png".to_string(),
        width: 200.0,
        height: 100.0,
        kind: AssetKind::Img,
    }
}

#[test]
fn starts_idle_and_ignores_moves() {
    let mut g = DropGesture::new(1.0);
    assert_eq!(g.state(), GestureState::Idle);
    assert_eq!(g.move_to(Point::new(3.0, 4.0)), None);
}

#[test]
fn move_tracks_radius_while_drawing() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(0.0, 0.0));
    assert!(g.is_drawing());

    let c = g.move_to(Point::new(30.0, 40.0)).unwrap();
    assert_eq!(c.center, Point::new(0.0, 0.0));
    assert_eq!(c.radius, 50.0);

    let c = g.move_to(Point::new(1.0, 1.0)).unwrap();
    assert_eq!(c.radius, 4.0);
    assert_eq!(
        g.state(),
        GestureState::Drawing {
            anchor: Point::new(0.0, 0.0),
            radius: 4.0
        }
    );
}

#[test]
fn release_commits_placed_asset() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(500.0, 500.0));
    let a = asset();
    let outcome = g.release(Point::new(560.0, 580.0), Some(&a));

    let DropOutcome::Committed { circle, placed } = outcome else {
        panic!("expected commit, got {outcome:?}");
    };
    assert_eq!(circle.radius, 100.0);
    assert!((placed.left - 410.557).abs() < 1e-3);
    assert!((placed.top - 455.279).abs() < 1e-3);
    assert_eq!(g.state(), GestureState::Idle);
}

#[test]
fn small_circles_are_discarded() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(0.0, 0.0));
    let a = asset();
    let outcome = g.release(Point::new(6.0, 0.0), Some(&a));
    assert_eq!(
        outcome,
        DropOutcome::Discarded(DiscardReason::BelowCommitRadius { radius: 6.0 })
    );
    assert!(!g.is_drawing());
}

#[test]
fn commit_threshold_never_drops_below_min_radius() {
    let g = DropGesture::new(8.0).with_commit_radius(0.0);
    assert_eq!(g.commit_threshold(), 18.0);
    let g = DropGesture::new(1.0);
    assert_eq!(g.commit_threshold(), DEFAULT_COMMIT_RADIUS);
}

#[test]
fn missing_asset_discards() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(0.0, 0.0));
    assert_eq!(
        g.release(Point::new(50.0, 0.0), None),
        DropOutcome::Discarded(DiscardReason::NoPendingAsset)
    );
    assert_eq!(g.state(), GestureState::Idle);
}

#[test]
fn degenerate_asset_discards() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(0.0, 0.0));
    let mut a = asset();
    a.height = 0.0;
    let outcome = g.release(Point::new(50.0, 0.0), Some(&a));
    assert!(matches!(
        outcome,
        DropOutcome::Discarded(DiscardReason::InvalidAsset(_))
    ));
}

#[test]
fn release_without_press_is_discarded() {
    let mut g = DropGesture::new(1.0);
    assert_eq!(
        g.release(Point::new(50.0, 0.0), Some(&asset())),
        DropOutcome::Discarded(DiscardReason::NotDrawing)
    );
}

#[test]
fn leave_behaves_like_release() {
    let mut g = DropGesture::new(1.0);
    g.press(Point::new(0.0, 0.0));
    let a = asset();
    assert!(matches!(
        g.leave(Point::new(0.0, 80.0), Some(&a)),
        DropOutcome::Committed { .. }
    ));
    assert_eq!(g.state(), GestureState::Idle);
}
