//! Integrationstests für die Turtle-Sitzung:
//! - Strecken, Drehungen und Schrittweite
//! - Bögen (Richtung, Tangente, Fehlerfälle)
//! - Strich-Flächen und Pen-Up

use approx::{assert_abs_diff_eq, assert_relative_eq};
use edge_liner::{
    ArcArg, EdgeConfig, EdgeShape, LinerOptions, PathCommand, Pen, PolylineRecorder,
};
use glam::DVec2;

fn pen_at_origin() -> Pen<PolylineRecorder> {
    Pen::new(PolylineRecorder::new(DVec2::ZERO), DVec2::ZERO, 0.0)
}

fn assert_point(actual: DVec2, expected: DVec2) {
    assert_abs_diff_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_abs_diff_eq!(actual.y, expected.y, epsilon = 1e-9);
}

// ─── Strecken ────────────────────────────────────────────────────────────────

#[test]
fn test_square_returns_to_start() {
    let mut pen = pen_at_origin();
    for _ in 0..4 {
        let len = pen.forward(100.0, None);
        assert_relative_eq!(len, 100.0);
        pen.turn(90.0);
    }

    assert_point(pen.position(), DVec2::ZERO);
    assert_abs_diff_eq!(pen.heading(), 0.0, epsilon = 1e-9);

    let (min, max) = pen.current_stroke().bounds().expect("Strich gezeichnet");
    assert_point(min, DVec2::ZERO);
    assert_point(max, DVec2::new(100.0, 100.0));
    assert_relative_eq!(
        pen.current_stroke().squared_farthest_dist(),
        20_000.0,
        epsilon = 1e-6
    );
}

#[test]
fn test_step_scales_distances_not_limits() {
    let mut pen = pen_at_origin();
    pen.set_step(2.0);
    assert_relative_eq!(pen.forward(10.0, None), 20.0);
    assert_point(pen.position(), DVec2::new(20.0, 0.0));

    assert_relative_eq!(pen.forward(10.0, Some(5.0)), 5.0);
    assert_point(pen.position(), DVec2::new(25.0, 0.0));
}

#[test]
fn test_pen_up_moves_without_area() {
    let mut pen = pen_at_origin();
    pen.pen_up();
    pen.forward(50.0, None);

    assert!(pen.current_stroke().is_empty());
    assert!(pen.finished_strokes().is_empty());
    let (recorder, strokes) = pen.finish();
    assert!(strokes.is_empty());
    assert_eq!(
        recorder.commands(),
        &[PathCommand::MoveTo(DVec2::new(50.0, 0.0))]
    );
}

#[test]
fn test_strokes_are_split_by_pen_up() {
    let mut pen = pen_at_origin();
    pen.forward(10.0, None);
    pen.pen_up();
    pen.jump_to(100.0, 100.0);
    pen.pen_down();
    pen.forward(10.0, None);

    assert_eq!(pen.finished_strokes().len(), 1);
    let (min, max) = pen.bounds().expect("zwei Striche");
    assert_point(min, DVec2::ZERO);
    assert_point(max, DVec2::new(110.0, 100.0));

    let (_, strokes) = pen.finish();
    assert_eq!(strokes.len(), 2);
    assert_eq!(strokes[1].from_point(), Some(DVec2::new(100.0, 100.0)));
}

// ─── Bögen ───────────────────────────────────────────────────────────────────

#[test]
fn test_clockwise_quarter_arc_leaves_along_heading() {
    let mut pen = pen_at_origin();
    let len = pen
        .arc(ArcArg::Scalar(10.0), ArcArg::Scalar(90.0), None)
        .expect("gültiger Bogen");

    assert_abs_diff_eq!(len, 10.0 * std::f64::consts::FRAC_PI_2, epsilon = 0.05);
    assert_point(pen.position(), DVec2::new(10.0, 10.0));
    assert_abs_diff_eq!(pen.heading(), 90.0, epsilon = 1e-9);
}

#[test]
fn test_anticlockwise_quarter_arc() {
    let mut pen = pen_at_origin();
    pen.arc(ArcArg::Scalar(10.0), ArcArg::Scalar(-90.0), None)
        .expect("gültiger Bogen");

    assert_point(pen.position(), DVec2::new(10.0, -10.0));
    assert_abs_diff_eq!(pen.heading(), -90.0, epsilon = 1e-9);
}

#[test]
fn test_full_turn_arc_returns_to_start() {
    let mut pen = pen_at_origin();
    pen.set_heading(30.0);
    let len = pen
        .arc(ArcArg::Scalar(20.0), ArcArg::Scalar(360.0), None)
        .expect("gültiger Bogen");

    assert_abs_diff_eq!(len, 40.0 * std::f64::consts::PI, epsilon = 0.1);
    assert_point(pen.position(), DVec2::ZERO);
    assert_abs_diff_eq!(pen.heading(), 30.0, epsilon = 1e-9);
}

#[test]
fn test_zero_sweep_arc_draws_nothing() {
    let mut pen = pen_at_origin();
    let len = pen
        .arc(ArcArg::Scalar(10.0), ArcArg::Scalar(0.0), None)
        .expect("gültige Argumente");
    assert_eq!(len, 0.0);
    let (recorder, _) = pen.finish();
    assert!(recorder.is_empty());
}

#[test]
fn test_short_radius_list_reports_context() {
    let mut pen = pen_at_origin();
    let err = pen
        .arc(ArcArg::List(&[5.0]), ArcArg::Scalar(90.0), None)
        .expect_err("Radius-Liste zu kurz");
    let message = format!("{:#}", err);
    assert!(message.contains("Bogen-Argumente"), "{}", message);
    assert!(message.contains("Radius"), "{}", message);
    assert_point(pen.position(), DVec2::ZERO);
}

#[test]
fn test_arc_radii_scale_with_step() {
    let mut pen = pen_at_origin();
    pen.set_step(2.0);
    pen.arc(ArcArg::from(&[5.0, 5.0]), ArcArg::from(&[0.0, 180.0]), None)
        .expect("gültiger Bogen");

    assert_point(pen.position(), DVec2::new(0.0, 20.0));
    assert_abs_diff_eq!(pen.heading(), 180.0, epsilon = 1e-9);
}

// ─── Optionen ────────────────────────────────────────────────────────────────

#[test]
fn test_options_apply_edge_and_step() {
    let options = LinerOptions {
        step: 10.0,
        edge: Some(EdgeConfig {
            shape: EdgeShape::Sine,
            length: 10.0,
            amplitude: 10.0,
            options: Default::default(),
        }),
        ..LinerOptions::default()
    };
    let mut pen = Pen::with_options(PolylineRecorder::default(), DVec2::ZERO, 0.0, &options);
    assert_relative_eq!(pen.step(), 10.0);
    assert!(pen.liner().edge().is_some());

    let len = pen.forward(10.0, None);
    assert_relative_eq!(len, 100.0);

    let (recorder, _) = pen.finish();
    assert_eq!(recorder.len(), 100);
    for cmd in recorder.commands() {
        assert!(cmd.end_point().y.abs() <= 5.0 + 1e-9);
    }
}

#[test]
fn test_options_sample_density_refines_arc() {
    let options = LinerOptions {
        sample_density: 8.0,
        ..LinerOptions::default()
    };
    let mut coarse = pen_at_origin();
    let mut fine = Pen::with_options(PolylineRecorder::default(), DVec2::ZERO, 0.0, &options);

    let exact = 10.0 * std::f64::consts::FRAC_PI_2;
    let coarse_len = coarse
        .arc(ArcArg::Scalar(10.0), ArcArg::Scalar(90.0), None)
        .expect("gültiger Bogen");
    let fine_len = fine
        .arc(ArcArg::Scalar(10.0), ArcArg::Scalar(90.0), None)
        .expect("gültiger Bogen");

    assert!(fine_len <= exact);
    assert!(exact - fine_len < exact - coarse_len);
}
