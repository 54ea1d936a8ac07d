use std::io::{self, Write};

use chrono::Utc;
use solar_orbits::{j2000, Catalog, Clock, EngineConfig, SystemClock};
use tracing_subscriber::EnvFilter;

const PATH_PREVIEW_POINTS: usize = 5;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // One display unit per million kilometers.
    let config = EngineConfig {
        distance_scale: 1e-6,
        size_scale: 1e-3,
        ..Default::default()
    };
    let engine = config.engine();
    let catalog = Catalog::builtin();
    let now = SystemClock.now();

    let mut lock = io::stdout().lock();
    writeln!(lock, "{catalog}")?;

    for (label, instant) in [("J2000", j2000()), ("now", now)] {
        writeln!(lock, "=== Positions at {label} ({instant}) ===")?;
        for (body, position) in catalog.positions_at(&engine, instant) {
            writeln!(
                lock,
                "{:<8} r={:>9.3}  ({:>10.3}, {:>8.3}, {:>10.3})  radius {:.3}",
                body.name(),
                position.length(),
                position.x,
                position.y,
                position.z,
                config.display_radius(body),
            )?;
        }
    }

    if let Some(earth) = catalog.get("Earth") {
        let path = engine.default_orbit_path(earth);
        writeln!(
            lock,
            "=== Earth orbit path: {} points, first {PATH_PREVIEW_POINTS} ===",
            path.len()
        )?;
        for point in path.iter().take(PATH_PREVIEW_POINTS) {
            writeln!(lock, "{point}")?;
        }
    }

    writeln!(lock, "Rendered at {}", Utc::now())?;

    Ok(())
}
