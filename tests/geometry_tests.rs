use textlens::geometry::{
    from_canonical, normalize, project, unproject, FitMode, ImageDescriptor, ImageOrientation,
    Rect, ViewDescriptor,
};

const EPS: f64 = 1e-9;

#[test]
fn test_orientation_round_trip_identity_for_explicit_rotations() {
    let rects = [
        Rect::new(0.0, 0.0, 50.0, 20.0),
        Rect::new(33.0, 47.5, 128.0, 64.0),
        Rect::new(599.0, 399.0, 1.0, 1.0),
    ];
    for orientation in [
        ImageOrientation::Up,
        ImageOrientation::Down,
        ImageOrientation::Left,
        ImageOrientation::Right,
    ] {
        let (w, h) = orientation.display_size(600.0, 400.0);
        for r in rects {
            let there = orientation.rotate_to_display(r, w, h);
            let back = orientation.rotate_from_display(there, w, h);
            assert!(back.approx_eq(&r, EPS), "{orientation:?}: {back:?} != {r:?}");
        }
    }
}

#[test]
fn test_mirrored_orientations_keep_identity_fallback() {
    // Mirrored tags have no explicit transform and must pass rectangles
    // through unchanged; this pins the fallback down for future review.
    let r = Rect::new(12.0, 34.0, 56.0, 78.0);
    for orientation in [
        ImageOrientation::UpMirrored,
        ImageOrientation::DownMirrored,
        ImageOrientation::LeftMirrored,
        ImageOrientation::RightMirrored,
    ] {
        let (w, h) = orientation.display_size(600.0, 400.0);
        assert_eq!(orientation.rotate_to_display(r, w, h), r);
    }
}

#[test]
fn test_unit_normalizer_stays_in_unit_square() {
    let inputs = [
        Rect::new(0.0, 0.0, 640.0, 480.0),
        Rect::new(100.0, 50.0, 200.0, 30.0),
        // Overshooting detector output gets clamped, not rejected.
        Rect::new(-15.0, 470.0, 700.0, 40.0),
    ];
    for r in inputs {
        let canonical = normalize::to_canonical(r, 640.0, 480.0);
        assert!(canonical.is_unit(), "{r:?} -> {canonical:?}");
    }
}

#[test]
fn test_unit_normalizer_round_trip() {
    let r = Rect::new(100.0, 50.0, 200.0, 30.0);
    let back = from_canonical(normalize::to_canonical(r, 640.0, 480.0), 640.0, 480.0);
    assert!(back.approx_eq(&r, EPS));
}

#[test]
fn test_contain_full_image_rect_fills_letterbox() {
    let image = ImageDescriptor::new(1000.0, 2000.0);
    let view = ViewDescriptor::new(500.0, 500.0);
    let mapped = project(Rect::new(0.0, 0.0, 1.0, 1.0), image, view, FitMode::Contain).unwrap();
    assert!((mapped.left - 125.0).abs() < EPS);
    assert!((mapped.top - 0.0).abs() < EPS);
    assert!((mapped.width - 250.0).abs() < EPS);
    assert!((mapped.height - 500.0).abs() < EPS);
    assert!(mapped.is_inside(view.width, view.height));
}

#[test]
fn test_contain_keeps_every_canonical_rect_inside_the_view() {
    let image = ImageDescriptor::new(1234.0, 567.0);
    let view = ViewDescriptor::new(390.0, 844.0);
    let samples = [
        Rect::new(0.0, 0.0, 1.0, 1.0),
        Rect::new(0.0, 0.0, 0.0, 0.0),
        Rect::new(0.99, 0.99, 0.01, 0.01),
        Rect::new(0.25, 0.5, 0.5, 0.25),
    ];
    for r in samples {
        let mapped = project(r, image, view, FitMode::Contain).unwrap();
        assert!(
            mapped.is_inside(view.width + EPS, view.height + EPS),
            "{r:?} -> {mapped:?}"
        );
    }
}

#[test]
fn test_view_mapper_round_trip() {
    let image = ImageDescriptor::new(1000.0, 2000.0);
    let view = ViewDescriptor::new(500.0, 500.0);
    let rect = Rect::new(0.1, 0.8, 0.3, 0.1);
    for fit in [FitMode::Contain, FitMode::Cover] {
        let back = unproject(project(rect, image, view, fit).unwrap(), image, view, fit).unwrap();
        assert!(back.approx_eq(&rect, EPS));
    }
}

#[test]
fn test_view_mapper_unavailable_before_layout() {
    let rect = Rect::new(0.1, 0.8, 0.3, 0.1);
    let image = ImageDescriptor::new(1000.0, 2000.0);
    assert!(project(rect, image, ViewDescriptor::new(0.0, 500.0), FitMode::Contain).is_none());
    assert!(project(rect, image, ViewDescriptor::new(500.0, f64::NAN), FitMode::Cover).is_none());
}

#[test]
fn test_end_to_end_example() {
    // Display 1000x2000, canonical {0.1, 0.8, 0.3, 0.1}, 500x500 view,
    // contain: scale 0.25, displayed 250x500, offset (125, 0).
    let image = ImageDescriptor::new(1000.0, 2000.0);
    let view = ViewDescriptor::new(500.0, 500.0);
    let mapped = project(Rect::new(0.1, 0.8, 0.3, 0.1), image, view, FitMode::Contain).unwrap();
    assert!((mapped.left - 150.0).abs() < EPS);
    assert!((mapped.top - 50.0).abs() < EPS);
    assert!((mapped.width - 75.0).abs() < EPS);
    assert!((mapped.height - 50.0).abs() < EPS);
}
