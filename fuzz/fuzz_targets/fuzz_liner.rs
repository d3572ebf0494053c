#![no_main]

use edge_liner::{
    abs_sine_edge, AreaAccumulator, EdgeOptions, Liner, PolylineRecorder,
};
use glam::DVec2;
use libfuzzer_sys::fuzz_target;

/// Obergrenze für Längen und Radien, damit die Abtastung endlich bleibt.
const MAX_SPAN: f64 = 1_000.0;

fn read(data: &[u8], index: usize) -> f64 {
    let v = data
        .get(index * 8..index * 8 + 8)
        .and_then(|c| c.try_into().ok())
        .map(f64::from_le_bytes)
        .unwrap_or(0.0);
    if v.is_finite() { v.clamp(-MAX_SPAN, MAX_SPAN) } else { 0.0 }
}

fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let v = |i| read(rest, i);
    let mut liner = Liner::new(PolylineRecorder::new(DVec2::ZERO));
    if mode & 1 == 1 {
        let options = EdgeOptions {
            centering: mode & 2 == 2,
            reverse: mode & 4 == 4,
            flip: mode & 8 == 8,
            phase: v(9),
        };
        liner.set_edge(abs_sine_edge(v(10), v(11), options));
    }
    let limit = (mode & 16 == 16).then(|| v(8));
    let mut area = AreaAccumulator::new();

    let drawn = match mode >> 5 {
        0 => liner.line(v(0), v(1), v(2), v(3), limit, Some(&mut area)),
        1 => liner.quad_curve_abs(v(0), v(1), v(2), v(3), v(4), v(5), limit, Some(&mut area)),
        2 => liner.bezier_curve_abs(
            v(0), v(1), v(2), v(3), v(4), v(5), v(6), v(7), limit, Some(&mut area),
        ),
        _ => liner.arc(
            v(0), v(1), v(2), v(3), v(4), v(5), v(6), mode & 2 == 2, limit, Some(&mut area),
        ),
    };
    assert!(drawn.is_finite() && drawn >= 0.0);
});
