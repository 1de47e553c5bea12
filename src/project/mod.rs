//! `.agriplan` project documents
//!
//! A project is a pretty-printed JSON document holding the field polygons,
//! the base point, drone parameters and the last computed route:
//!
//! ```json
//! {
//!   "map_path": "field.png",
//!   "scale": 0.5,
//!   "polygons": [{ "points": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]], "type": "inclusion" }],
//!   "base_point": [-5.0, -5.0],
//!   "drone_params": { "tank_volume": 20.0, "spray_width": 6.0, "consumption_rate": 0.1,
//!                     "work_speed": 5.0, "transport_speed": 10.0 },
//!   "route": [{ "type": "transport", "points": [[-5.0, -5.0], [0.0, 3.0]] }]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::{DroneParams, Point2D, Polygon, Route};
use crate::planner::PlanInput;

fn default_scale() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Background map image; carried through untouched
    #[serde(default)]
    pub map_path: Option<PathBuf>,
    /// Map meters per image pixel; carried through untouched
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub polygons: Vec<Polygon>,
    #[serde(default)]
    pub base_point: Option<Point2D>,
    #[serde(default)]
    pub drone_params: Option<DroneParams>,
    #[serde(default)]
    pub route: Route,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            map_path: None,
            scale: default_scale(),
            polygons: Vec::new(),
            base_point: None,
            drone_params: None,
            route: Route::new(),
        }
    }
}

impl Project {
    /// Planner input from this project, using `defaults` when the document
    /// has no drone parameters of its own
    pub fn plan_input(&self, defaults: DroneParams) -> PlanInput {
        PlanInput {
            polygons: self.polygons.clone(),
            base_point: self.base_point,
            drone_params: self.drone_params.unwrap_or(defaults),
        }
    }
}

/// Read a project document from disk
pub fn load_project(path: &Path) -> Result<Project> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open project file: {}", path.display()))?;
    let project = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse project file: {}", path.display()))?;
    Ok(project)
}

/// Write a project document to disk as pretty-printed JSON
pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create project file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, project)
        .with_context(|| format!("Failed to write project file: {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
