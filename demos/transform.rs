//! Walks a triangle through a few composed transforms and prints each step.
//!
//! ```text
//! cargo run --example transform
//! RUST_LOG=affinity=trace cargo run --example transform
//! ```

use std::f64::consts::FRAC_PI_2;

use affinity::operations::transform::{about_pivot, compose};
use affinity::{Path, Point, Result, RotationMatrix, ScalingMatrix, TranslationMatrix};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for the demo and the library.
    // Override with RUST_LOG env var (e.g. RUST_LOG=affinity=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("transform=info".parse().unwrap_or_default())
        .add_directive("affinity=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut triangle = Path::new(vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ]);
    tracing::info!(%triangle, "start");

    triangle.rotate_about(FRAC_PI_2, &Point::new(2.0, 1.0));
    tracing::info!(%triangle, "rotated a quarter turn about (2,1)");

    triangle.scale(2.0, 0.5);
    tracing::info!(%triangle, "scaled by (2, 0.5)");

    let flip = about_pivot(&ScalingMatrix::new(-1.0, 1.0), 1.0, 0.0)?;
    let combined = compose(&[
        &*TranslationMatrix::new(10.0, 10.0),
        &flip,
        &*RotationMatrix::new(-FRAC_PI_2),
    ])?;
    triangle.transform(&combined)?;
    tracing::info!(%triangle, "applied combined transform");

    println!("{triangle}");
    Ok(())
}
