use approx::assert_relative_eq;
use nalgebra::Point2;
use pathmorph::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

const SHAPES: [&str; 4] = [
    "M0 0L1 1L2 0z",
    "M3 10L0 7V3l3-3h4l3 3v4l-3 3z",
    "M5 0l2 3 3 1-3 2 1 4-3-2-3 2 1-4-3-2 3-1z",
    "M8 5a2 2 0 1 0-3-2 2 2 0 1 0-2 2 3 3 0 1 0 2 3 2 2 0 1 0 3-3z",
];

#[test]
fn test_triangle_pipeline() {
    let commands = parse("M0 0L1 1L2 0z").unwrap();
    assert_eq!(commands.len(), 4);

    let definition = normalize(&commands).unwrap();
    let [start, cubic, close] = definition.commands();
    assert_eq!(start, CanonicalCommand::Move(&PathPoint::new(0., 0.)));
    match cubic {
        CanonicalCommand::Cubic(points) => {
            assert_eq!(points.len(), 9);
            // control points of lines are the segment endpoints
            points.chunks(3).for_each(|triple| {
                assert_eq!(triple[1].position, triple[2].position);
            });
        }
        _ => panic!("expected a cubic command"),
    }
    assert_eq!(close, CanonicalCommand::Close);

    let text = serialize(&definition);
    assert!(text.starts_with("M0 0C"));
    assert!(text.ends_with('z'));
}

#[test]
fn test_implicit_zero() {
    let commands = parse("L1.2.3").unwrap();
    assert_eq!(commands.len(), 1);
    let group = &commands[0].groups()[0];
    assert_eq!(group.value(Parameter::X), Ok(1.2));
    assert_eq!(group.value(Parameter::Y), Ok(0.3));
}

#[test]
fn test_canonical_round_trip() {
    let canonical = [
        "M0 0C0 0 1 1 1 1 1 1 2 0 2 0 2 0 0 0 0 0z",
        "M-1.5 2C-1.5 3 0.25-4 1 1 1 1-1.5 2-1.5 2z",
        "M0 5C0 8.85 4.17 11.25 7.5 9.33 9.05 8.44 10 6.79 10 5 10 1.15 5.83-1.25 2.5 0.67 0.95 1.56 0 3.21 0 5z",
    ];
    canonical.iter().for_each(|text| {
        let definition: Definition = text.parse().unwrap();
        assert_eq!(definition.to_string(), *text);
    });
}

#[test]
fn test_normalized_shapes() {
    SHAPES.iter().for_each(|text| {
        let definition: Definition = text.parse().unwrap();
        assert_eq!(definition.len() % 3, 0);
        assert_eq!(definition.commands().len(), 3);
        // every outline is closed on its anchor
        let last = definition.points().last().unwrap();
        assert_eq!(last.position, definition.anchor().position);
    });
}

#[test]
fn test_equalized_batch() {
    let originals: Vec<Definition> = SHAPES.iter().map(|s| s.parse().unwrap()).collect();
    let longest = originals.iter().map(|d| d.len()).max().unwrap();
    let equalized = equalize(originals.clone());

    equalized.iter().zip(originals.iter()).for_each(|(e, o)| {
        assert_eq!(e.len(), longest);
        assert!(e.len() >= o.len());
        let kept: Vec<_> = e.points().iter().filter(|p| !p.is_clone).collect();
        assert_eq!(kept.len(), o.len());
    });
}

#[test]
fn test_interpolation_bounds() {
    let mut batch = equalize(SHAPES.iter().map(|s| s.parse().unwrap()).collect());
    let mut scheduler = Scheduler::with_rng(MorphOptions::default(), StdRng::seed_from_u64(42));
    batch.iter_mut().for_each(|d| scheduler.schedule(d));

    let timing = TimingFunction::default();
    let window = scheduler.options().default_schedule();
    for from in batch.iter() {
        for to in batch.iter() {
            let (frame, completed) = interpolate(from, to, 0., &timing, window).unwrap();
            assert_eq!(frame, *from);
            assert!(!completed);

            let end = to
                .iter()
                .filter_map(|p| p.schedule)
                .map(|s| s.end())
                .fold(0., f64::max);
            let (frame, completed) = interpolate(from, to, end, &timing, window).unwrap();
            assert_eq!(frame, *to);
            assert!(completed);
        }
    }
}

#[test]
fn test_rotated_half_circle() {
    // half of the unit circle, starting from a point rotated by the ellipse angle
    let angle: f64 = 45.;
    let rotation = nalgebra::Rotation2::new(angle.to_radians());
    let start = rotation * Point2::new(-1., 0.);
    let arc = EllipticalArc {
        radius_x: 1.,
        radius_y: 1.,
        angle,
        large_arc: false,
        sweep: true,
        end: rotation * Point2::new(1., 0.),
    };
    let points = arc_to_cubic(&start, &arc, 9);
    assert_eq!(points.len(), 6);
    points.chunks(3).for_each(|triple| {
        assert_relative_eq!(triple[2].coords.norm(), 1., epsilon = 1e-6);
    });
    let kappa = 4. / 3. * (std::f64::consts::PI * 2. / 3. / 4.).tan();
    assert_relative_eq!((points[0] - start).norm(), kappa, epsilon = 1e-6);
}

#[test]
fn test_frame_loop() {
    let options = MorphOptions::default()
        .with_delay_range(0., 100.)
        .with_duration_range(300., 500.);
    let scheduler = Scheduler::with_rng(options, StdRng::seed_from_u64(3));
    let mut set = MorphSet::try_with_scheduler(&SHAPES, scheduler).unwrap();

    set.transition_to(3, "easeInOutCubic".parse().unwrap())
        .unwrap();
    let mut frames = vec![];
    let mut elapsed = 0.;
    loop {
        match set.tick(elapsed).unwrap() {
            Frame::InProgress(d) => frames.push(d),
            Frame::Completed(d) => {
                frames.push(d);
                break;
            }
        }
        elapsed += 16.;
        assert!(elapsed < 1000., "transition never completed");
    }

    assert!(frames.len() > 1);
    assert_eq!(frames.first().unwrap(), &set.serialize()[0]);
    assert_eq!(frames.last().unwrap(), &set.serialize()[3]);
    assert_eq!(set.current_index(), 3);
    // every frame is valid path data with the batch's shape
    frames.iter().for_each(|frame| {
        let definition: Definition = frame.parse().unwrap();
        assert_eq!(definition.len(), set.definitions()[0].len());
    });
}
