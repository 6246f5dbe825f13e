//! Ring validation demo.
//!
//! Usage:
//! ```text
//! cargo run --example validate_ring                    # built-in sample rings
//! cargo run --example validate_ring -- ring.gml        # first posList in a GML file
//! RUST_LOG=ringcheck=trace cargo run --example validate_ring
//! ```

use ringcheck::math::Point3;
use ringcheck::{validate_gml_ring, RingError, ValidateRings, Violation, ViolationPayload};

fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

fn samples() -> Vec<(&'static str, Vec<Point3>)> {
    vec![
        (
            "triangle",
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(1.0, 1.0, 0.0), p(0.0, 0.0, 0.0)],
        ),
        (
            "duplicate start",
            vec![p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 0.0, 0.0)],
        ),
        ("segment", vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)]),
        (
            "bowtie",
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(0.0, 2.0, 0.0),
                p(0.0, 0.0, 0.0),
            ],
        ),
    ]
}

fn report(name: &str, result: &Result<Vec<Violation>, RingError>) {
    match result {
        Ok(violations) if violations.is_empty() => println!("{name}: valid"),
        Ok(violations) => {
            println!("{name}: {} violation(s)", violations.len());
            for v in violations {
                println!("  {v}");
                if let ViolationPayload::Intersections(hits) = &v.payload {
                    for hit in hits {
                        println!(
                            "    edges {} and {} meet at ({:.3}, {:.3})",
                            hit.seg_i, hit.seg_j, hit.point.x, hit.point.y
                        );
                    }
                }
            }
        }
        Err(err) => println!("{name}: could not validate: {err}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for the demo, DEBUG for ringcheck.
    // Override with RUST_LOG env var (e.g. RUST_LOG=ringcheck=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("validate_ring=info".parse().unwrap_or_default())
        .add_directive("ringcheck=debug".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    if let Some(path) = std::env::args().nth(1) {
        let xml = std::fs::read_to_string(&path)?;
        report(&path, &validate_gml_ring(&xml));
        return Ok(());
    }

    let samples = samples();
    let rings: Vec<&[Point3]> = samples.iter().map(|(_, ring)| ring.as_slice()).collect();
    let results = ValidateRings::new(&rings).execute();
    for ((name, _), result) in samples.iter().zip(&results) {
        report(name, result);
    }
    Ok(())
}
