//! Parses vectors given on the command line and prints their properties.
//!
//! Usage:
//! ```text
//! cargo run --example inspect -- "(3, 4)" "(1, 1e-10)"
//! cargo run --example inspect -- "[(1, 2), (3, 4.5)]"
//! RUST_LOG=planar=trace cargo run --example inspect -- "(0, 0)"
//! ```

use planar::{PlanarError, Vec2d, Vec2dArray};

fn describe(v: Vec2d) {
    println!("{v}");
    println!("  length   = {}", v.length());
    println!("  unit     = {}", v.normalized());
    println!("  ortho    = {}", v.orthogonalized());
    println!("  angle(x) = {}", Vec2d::unit_x().angle(v));
}

fn main() -> Result<(), PlanarError> {
    // Default: WARN for everything, INFO for planar.
    // Override with RUST_LOG env var (e.g. RUST_LOG=planar=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("planar=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut previous: Option<Vec2d> = None;
    for arg in std::env::args().skip(1) {
        if arg.trim_start().starts_with('[') {
            let array: Vec2dArray = arg.parse()?;
            println!("{} vectors: {array}", array.len());
            for v in &array {
                describe(*v);
            }
            continue;
        }

        let v: Vec2d = arg.parse()?;
        describe(v);
        if let Some(p) = previous {
            println!(
                "  vs {p}: is_close={} all_close={} is_near(1e-6)={} all_near(1e-6)={}",
                v.is_close(p),
                v.all_close(p),
                v.is_near(p, 1e-6),
                v.all_near(p, 1e-6),
            );
        }
        previous = Some(v);
    }
    Ok(())
}
