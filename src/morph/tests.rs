use super::*;
use crate::prelude::*;
use nalgebra::Point2;
use rand::{rngs::StdRng, SeedableRng};

fn line(from: (f64, f64), to: (f64, f64)) -> Vec<PathPoint> {
    vec![
        PathPoint::new(from.0, from.1),
        PathPoint::new(to.0, to.1),
        PathPoint::new(to.0, to.1),
    ]
}

/// Source definition without schedule, and a target whose segment starts late
fn staggered() -> (Definition, Definition) {
    let from = Definition::try_new(PathPoint::new(0., 0.), line((0., 0.), (10., 0.))).unwrap();
    let early = Schedule::new(0., 100.);
    let late = Schedule::new(100., 100.);
    let to = Definition::try_new(
        PathPoint::new(0., 10.).with_schedule(early),
        vec![
            PathPoint::new(0., 10.).with_schedule(early),
            PathPoint::new(20., 10.).with_schedule(late),
            PathPoint::new(20., 10.).with_schedule(late),
        ],
    )
    .unwrap();
    (from, to)
}

fn positions(definition: &Definition) -> Vec<Point2<f64>> {
    definition.iter().map(|p| p.position).collect()
}

#[test]
fn test_interpolate_staggered_points() {
    let (from, to) = staggered();
    let timing = TimingFunction::from(Easing::Linear);
    let window = Schedule::new(0., 1000.);

    let (frame, completed) = interpolate(&from, &to, 0., &timing, window).unwrap();
    assert_eq!(frame, from);
    assert!(!completed);

    let (frame, completed) = interpolate(&from, &to, 50., &timing, window).unwrap();
    assert_eq!(
        positions(&frame),
        [(0., 5.), (0., 5.), (10., 0.), (10., 0.)].map(|(x, y)| Point2::new(x, y))
    );
    assert!(!completed);

    // the anchor is done, the late segment has not started yet
    let (frame, completed) = interpolate(&from, &to, 100., &timing, window).unwrap();
    assert_eq!(
        positions(&frame),
        [(0., 10.), (0., 10.), (10., 0.), (10., 0.)].map(|(x, y)| Point2::new(x, y))
    );
    assert_eq!(frame.anchor(), to.anchor());
    assert!(!completed);

    let (frame, completed) = interpolate(&from, &to, 150., &timing, window).unwrap();
    assert_eq!(frame.points()[1].position, Point2::new(15., 5.));
    assert!(!completed);

    let (frame, completed) = interpolate(&from, &to, 200., &timing, window).unwrap();
    assert_eq!(frame, to);
    assert!(completed);

    let (frame, completed) = interpolate(&from, &to, 1e6, &timing, window).unwrap();
    assert_eq!(frame, to);
    assert!(completed);
}

#[test]
fn test_interpolate_default_window() {
    let from: Definition = "M0 0L1 1L2 0z".parse().unwrap();
    let to: Definition = "M0 2L1 3L2 2z".parse().unwrap();
    let timing = TimingFunction::default();
    let window = Schedule::new(100., 200.);

    let (frame, completed) = interpolate(&from, &to, 100., &timing, window).unwrap();
    assert_eq!(frame, from);
    assert!(!completed);

    // ease out cubic at half time
    let (frame, _) = interpolate(&from, &to, 200., &timing, window).unwrap();
    assert_eq!(frame.anchor().position, Point2::new(0., 1.75));
    assert_eq!(
        frame.to_string(),
        "M0 1.75C0 1.75 1 2.75 1 2.75 1 2.75 2 1.75 2 1.75 2 1.75 0 1.75 0 1.75z"
    );

    let (frame, completed) = interpolate(&from, &to, 300., &timing, window).unwrap();
    assert_eq!(frame, to);
    assert!(completed);
}

#[test]
fn test_interpolate_precision() {
    let from = PathPoint::new(0., 0.);
    let to = PathPoint::new(1., 1.);
    let timing = TimingFunction::from(Easing::Linear);
    let window = Schedule::new(0., 3.);

    let (point, _) = from
        .morph(&to, &Interpolation::new(1., &timing, window))
        .unwrap();
    assert_eq!(point.position, Point2::new(0.33, 0.33));

    let (point, _) = from
        .morph(&to, &Interpolation::new(1., &timing, window).with_precision(4))
        .unwrap();
    assert_eq!(point.position, Point2::new(0.3333, 0.3333));
}

#[test]
fn test_interpolate_zero_duration() {
    let from = PathPoint::new(0., 0.);
    let to = PathPoint::new(1., 1.).with_schedule(Schedule::new(10., 0.));
    let timing = TimingFunction::default();
    let window = Schedule::new(0., 100.);

    let (point, completed) = from
        .morph(&to, &Interpolation::new(5., &timing, window))
        .unwrap();
    assert_eq!(point, from);
    assert!(!completed);

    let (point, completed) = from
        .morph(&to, &Interpolation::new(10., &timing, window))
        .unwrap();
    assert_eq!(point, to);
    assert!(completed);
}

#[test]
fn test_interpolate_vector_timing() {
    let from: Definition = "M0 0L1 0L1 1z".parse().unwrap();
    let to: Definition = "M2 0L3 0L3 1z".parse().unwrap();
    // every point jumps halfway regardless of time
    let timing = TimingFunction::vector(|_, [a, b]| nalgebra::center(&a, &b));
    let (frame, completed) =
        interpolate(&from, &to, 10., &timing, Schedule::new(0., 100.)).unwrap();
    assert!(!completed);
    assert_eq!(frame.anchor().position, Point2::new(1., 0.));
    assert_eq!(frame.points()[1].position, Point2::new(2., 0.));
}

#[test]
fn test_interpolate_shape_mismatch() {
    let triangle: Definition = "M0 0L1 1L2 0z".parse().unwrap();
    let square: Definition = "M0 0H1V1H0z".parse().unwrap();
    let timing = TimingFunction::default();
    assert_eq!(
        interpolate(&triangle, &square, 0., &timing, Schedule::new(0., 1.)),
        Err(PathError::ShapeMismatch { from: 9, to: 12 })
    );
}

#[test]
fn test_interpolate_equalized_batch() {
    let batch = equalize(vec![
        "M0 0L1 1L2 0z".parse().unwrap(),
        "M3 10L0 7V3l3-3h4l3 3v4l-3 3z".parse().unwrap(),
    ]);
    let timing = TimingFunction::default();
    let window = Schedule::new(0., 100.);
    let (frame, completed) = interpolate(&batch[0], &batch[1], 50., &timing, window).unwrap();
    assert_eq!(frame.len(), batch[1].len());
    assert!(!completed);
    // clone flags follow the target once a point moved
    assert!(frame
        .points()
        .iter()
        .zip(batch[1].points())
        .all(|(f, t)| f.is_clone == t.is_clone));
}

fn seeded_set(sources: &[&str]) -> MorphSet {
    let scheduler = Scheduler::with_rng(MorphOptions::default(), StdRng::seed_from_u64(7));
    MorphSet::try_with_scheduler(sources, scheduler).unwrap()
}

#[test]
fn test_morph_set_preparation() {
    let set = seeded_set(&[
        "M0 0L1 1L2 0z",
        "M3 10L0 7V3l3-3h4l3 3v4l-3 3z",
        "M8 5a2 2 0 1 0-3-2 2 2 0 1 0-2 2 3 3 0 1 0 2 3 2 2 0 1 0 3-3z",
    ]);
    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
    assert_eq!(set.current_index(), 0);
    assert_eq!(set.target_index(), None);
    assert!(set.definitions().iter().all(|d| d.len() == 30));
    assert!(set
        .definitions()
        .iter()
        .all(|d| d.iter().all(|p| p.schedule.is_some())));
    assert_eq!(set.definition(), set.serialize()[0]);
    assert_eq!(set.options(), &MorphOptions::default());
}

#[test]
fn test_morph_set_transition() {
    let mut set = seeded_set(&["M0 0L1 1L2 0z", "M3 10L0 7V3l3-3h4l3 3v4l-3 3z"]);
    let initial = set.definition().to_string();

    // no transition yet
    assert_eq!(set.tick(10.).unwrap(), Frame::Completed(initial.clone()));

    set.transition_to(1, TimingFunction::default()).unwrap();
    assert!(set.is_transitioning());
    assert_eq!(set.target_index(), Some(1));

    let end = set.definitions()[1]
        .iter()
        .filter_map(|p| p.schedule)
        .map(|s| s.end())
        .fold(0., f64::max);

    assert_eq!(set.tick(0.).unwrap(), Frame::InProgress(initial.clone()));
    let frame = set.tick(end - 1.).unwrap();
    assert!(!frame.is_completed());
    assert_eq!(set.definition(), frame.definition());
    assert_eq!(set.current_index(), 0);

    let frame = set.tick(end).unwrap();
    assert_eq!(frame, Frame::Completed(set.serialize()[1].clone()));
    assert_eq!(set.current_index(), 1);
    assert!(!set.is_transitioning());
    assert_eq!(set.definition(), frame.into_definition());
}

#[test]
fn test_morph_set_transition_with() {
    let mut set = seeded_set(&["M0 0L1 1L2 0z", "M0 0H1V1H0z", "M0 0L1 1V0z"]);
    let next = |current: usize| (current + 1) % 3;
    (1..=4).for_each(|i| {
        set.transition_with(next, TimingFunction::from(Easing::Linear))
            .unwrap();
        assert!(set.tick(1e9).unwrap().is_completed());
        assert_eq!(set.current_index(), i % 3);
    });
}

#[test]
fn test_morph_set_cancel() {
    let mut set = seeded_set(&["M0 0L1 1L2 0z", "M0 0H1V1H0z"]);
    assert!(!set.cancel());

    set.transition_to(1, TimingFunction::default()).unwrap();
    let frame = set.tick(3000.).unwrap();
    assert!(!frame.is_completed());
    assert_ne!(set.definition(), set.serialize()[0]);

    assert!(set.cancel());
    assert_eq!(set.current_index(), 0);
    assert_eq!(set.definition(), set.serialize()[0]);
    assert_eq!(
        set.tick(1e9).unwrap(),
        Frame::Completed(set.serialize()[0].clone())
    );
}

#[test]
fn test_morph_set_failures() {
    let empty: [&str; 0] = [];
    assert!(MorphSet::try_new(&empty, MorphOptions::default()).is_err());

    let err = MorphSet::try_new(&["M0 0L1 1z", "M0 0K1 1"], MorphOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid path definition at index 1");
    assert_eq!(
        err.root_cause().to_string(),
        "unexpected character 'K' at position 4"
    );

    let options = MorphOptions::default().with_duration_range(10., 1.);
    let err = MorphSet::try_new(&["M0 0L1 1z"], options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PathError>(),
        Some(PathError::InvalidOption(_))
    ));

    let options = MorphOptions::default().with_precision(400);
    let err = MorphSet::try_new(&["M0 0A5 5 0 1 0 10 0z"], options).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PathError>(),
        Some(PathError::InvalidOption(_))
    ));

    let mut set = seeded_set(&["M0 0L1 1z"]);
    assert!(set.transition_to(1, TimingFunction::default()).is_err());
    assert!(!set.is_transitioning());
}
