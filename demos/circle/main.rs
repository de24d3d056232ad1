//! Prints a circle polygon around a point.
//!
//! Usage:
//! ```text
//! cargo run --example circle                                  # defaults
//! cargo run --example circle -- 51.5074 -0.1278 250 24        # lat lon radius segments
//! RUST_LOG=geocircle=debug cargo run --example circle
//! ```

use geocircle::{circle_to_polygon, Coordinate, GeneratorConfig};

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T) -> T {
    args.get(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> geocircle::Result<()> {
    // Default: WARN for everything, INFO for geocircle.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geocircle=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("geocircle=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lat = parse_arg(&args, 0, 23.4567);
    let lon = parse_arg(&args, 1, -34.765_322);
    let radius = parse_arg(&args, 2, 50.0);
    let segments = parse_arg(&args, 3, 10);

    let center = Coordinate::new(lat, lon)?;
    let shape = circle_to_polygon(center, radius, segments, &GeneratorConfig::default())?;

    println!("{}", shape.kind());
    for [lon, lat] in shape.coordinates() {
        println!("{lon:.9} {lat:.9}");
    }
    Ok(())
}
