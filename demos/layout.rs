//! Place a tooltip relative to an anchor using mixed units, then resize the
//! viewport and place it again.
//!
//! Run with: RUST_LOG=unitvec=trace cargo run --example layout --features tracing -- 2rem

use tracing_subscriber::EnvFilter;
use unitvec::{LiveMetrics, Metrics, Unit, UnitKind, Vector};

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let offset = std::env::args().nth(1).unwrap_or_else(|| "1.5rem".to_string());
    let window = LiveMetrics::new(Metrics::default());

    for (width, height) in [(1920.0, 1080.0), (800.0, 600.0)] {
        window.set_viewport(width, height);

        let anchor = Vector::from_values(50.0, 25.0, UnitKind::Vw, &window);
        let gap = Unit::parse(&offset, &window)?;
        let tooltip = anchor
            .add(Vector::new(gap, gap))
            .rotate_degrees(-15.0);

        let (x, y) = tooltip.translate();
        let distance = tooltip.magnitude().value();
        println!("{width}x{height}: translate({x}, {y}) at {distance:.1}px from origin");
        println!(
            "  as viewport units: {}, {}",
            tooltip.x().to_vw(&window),
            tooltip.y().to_vh(&window)
        );
    }

    Ok(())
}
