//! Reads two lines from a TOML file and prints whether and where they intersect.

mod lines_file;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use log::info;

use coplanar_geometry::{Intersection, intersect, intersects};
use lines_file::LinesFile;

fn main() -> Result<()> {
    env_logger::init();

    let path: PathBuf = env::args_os()
        .nth(1)
        .context("Usage: coplanar-intersect <lines.toml>")?
        .into();

    let (a, b) = LinesFile::load(&path)?.into_lines()?;
    info!("Line a: {a:?}");
    info!("Line b: {b:?}");

    println!("intersects: {}", intersects(&a, &b));
    println!("intersection: {}", describe(&intersect(&a, &b)));
    Ok(())
}

fn describe(intersection: &Intersection) -> String {
    match intersection {
        Intersection::Point(p) => format!("{}, {}, {}", p.x, p.y, p.z),
        Intersection::None => "none".into(),
        Intersection::Parallel => "parallel".into(),
    }
}

#[cfg(test)]
mod tests {
    use coplanar_geometry::Point3;

    use super::*;

    #[test]
    fn describes_all_outcomes() {
        assert_eq!(
            describe(&Intersection::Point(Point3::new(1.0, 0.0, 1.5))),
            "1, 0, 1.5"
        );
        assert_eq!(describe(&Intersection::None), "none");
        assert_eq!(describe(&Intersection::Parallel), "parallel");
    }
}
