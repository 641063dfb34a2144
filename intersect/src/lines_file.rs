use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use coplanar_geometry::{Line3, Point3, Vector3};

/// Intermediate representation of the TOML file describing the two lines.
#[derive(Debug, Deserialize)]
pub struct LinesFile {
    pub a: LineSection,
    pub b: LineSection,
}

/// A line is either given by a point and a direction, or by two points it runs through.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LineSection {
    PointDirection { point: Point3, direction: Vector3 },
    Through { through: [Point3; 2] },
}

impl LinesFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lines file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse lines file: {}", path.display()))
    }

    pub fn into_lines(self) -> Result<(Line3, Line3)> {
        let a = self.a.into_line().context("Line `a`")?;
        let b = self.b.into_line().context("Line `b`")?;
        Ok((a, b))
    }
}

impl LineSection {
    pub fn into_line(self) -> Result<Line3> {
        match self {
            Self::PointDirection { point, direction } => Ok(Line3::new(point, direction)),
            Self::Through { through: [from, to] } => match Line3::from_points(from, to) {
                Some(line) => Ok(line),
                None => bail!("The two points a line runs through must differ, both are {from}"),
            },
        }
    }
}
