#![no_main]

use edge_liner::{arrange_arc_params, ArcArg};
use libfuzzer_sys::fuzz_target;

/// Liest bis zu 6 f64-Werte; das erste Byte wählt Skalar- oder Listenform.
fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let values: Vec<f64> = rest
        .chunks_exact(8)
        .take(6)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap_or([0; 8])))
        .collect();
    let split = values.len() / 2;
    let (radius, degree) = values.split_at(split);
    let step = values.last().copied().unwrap_or(1.0);

    let radius = if mode & 1 == 0 {
        ArcArg::Scalar(radius.first().copied().unwrap_or(0.0))
    } else {
        ArcArg::List(radius)
    };
    let degree = if mode & 2 == 0 {
        ArcArg::Scalar(degree.first().copied().unwrap_or(0.0))
    } else {
        ArcArg::List(degree)
    };
    let _ = arrange_arc_params(radius, degree, step);
});
