//! Edge Liner.
//!
//! Zeichnet eine Beispielfigur mit verzerrten Kanten und gibt sie als SVG aus.
//! Optionaler Parameter: Pfad zu einer Optionen-Datei (TOML).

use edge_liner::{ArcArg, EdgeConfig, EdgeShape, LinerOptions, Pen, SvgPathWriter};
use glam::DVec2;

/// Rand um die Figur in der viewBox.
const DOCUMENT_MARGIN: f64 = 10.0;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Edge Liner v{} startet...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(LinerOptions::config_path);
    let mut options = LinerOptions::load_from_file(&config_path)?;
    if options.edge.is_none() {
        options.edge = Some(EdgeConfig {
            shape: EdgeShape::Sine,
            length: 12.0,
            amplitude: 4.0,
            options: Default::default(),
        });
    }

    let start = DVec2::new(20.0, 20.0);
    let mut pen = Pen::with_options(SvgPathWriter::new(start), start, 0.0, &options);
    draw_demo(&mut pen)?;

    let bounds = pen.bounds();
    let (svg, strokes) = pen.finish();
    log::info!("{} Striche gezeichnet", strokes.len());
    print!("{}", svg.to_document(bounds, DOCUMENT_MARGIN));
    Ok(())
}

/// Quadrat, Welle und Halbkreis.
fn draw_demo(pen: &mut Pen<SvgPathWriter>) -> anyhow::Result<()> {
    for _ in 0..4 {
        pen.forward(100.0, None);
        pen.turn(90.0);
    }
    pen.pen_up();

    pen.jump_to(160.0, 70.0);
    pen.set_heading(0.0);
    pen.pen_down();
    pen.curve(60.0, -40.0, 60.0, 80.0, None);
    pen.arc(ArcArg::Scalar(30.0), ArcArg::Scalar(180.0), None)?;
    pen.bezier(40.0, 30.0, 40.0, 60.0, 40.0, 30.0, Some(80.0));
    pen.pen_up();
    Ok(())
}
