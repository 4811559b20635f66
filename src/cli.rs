use clap::{Parser, ValueEnum};
use quad_mesh::constants::*;
use quad_mesh::{BuilderSettings, FrontFace, ShapeParameters};
use std::path::PathBuf;

/// Generate a rounded quad mesh
#[derive(Parser, Debug)]
#[command(name = "rounded-quad")]
#[command(about = "Generate a flat rounded-rectangle triangle mesh")]
#[command(version)]
pub struct Cli {
    /// Quad width
    #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
    pub width: f32,

    /// Quad height
    #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
    pub height: f32,

    /// Corner radius, clamped to half the shorter side
    #[arg(long, default_value_t = DEFAULT_CORNER_RADIUS, allow_negative_numbers = true)]
    pub radius: f32,

    /// Samples per corner arc, clamped to 4..=32
    #[arg(long, default_value_t = DEFAULT_CORNER_SEGMENTS)]
    pub segments: u32,

    /// Winding treated as front-facing
    #[arg(long, value_enum, default_value_t = Winding::Ccw)]
    pub front_face: Winding,

    /// Mesh name
    #[arg(long, default_value = DEFAULT_MESH_NAME)]
    pub name: String,

    /// Print every vertex, UV and triangle
    #[arg(long)]
    pub dump: bool,

    /// Write the mesh as Wavefront OBJ
    #[arg(long, value_name = "PATH")]
    pub obj: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Winding {
    Ccw,
    Cw,
}

impl From<Winding> for FrontFace {
    fn from(winding: Winding) -> Self {
        match winding {
            Winding::Ccw => FrontFace::CounterClockwise,
            Winding::Cw => FrontFace::Clockwise,
        }
    }
}

impl Cli {
    pub fn params(&self) -> ShapeParameters {
        ShapeParameters::new(self.width, self.height, self.radius, self.segments)
    }

    pub fn settings(&self) -> BuilderSettings {
        BuilderSettings {
            front_face: self.front_face.into(),
            name: self.name.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["rounded-quad"]);
        assert_eq!(cli.params(), ShapeParameters::default());
        assert_eq!(cli.settings(), BuilderSettings::default());
        assert!(!cli.dump);
        assert!(cli.obj.is_none());
    }

    #[test]
    fn test_parse_arguments() {
        let cli = Cli::parse_from([
            "rounded-quad",
            "--width",
            "3",
            "--height",
            "1.5",
            "--radius",
            "-0.5",
            "--segments",
            "12",
            "--front-face",
            "cw",
            "--obj",
            "quad.obj",
        ]);
        assert_eq!(cli.params(), ShapeParameters::new(3.0, 1.5, -0.5, 12));
        assert_eq!(cli.settings().front_face, FrontFace::Clockwise);
        assert_eq!(cli.obj, Some(PathBuf::from("quad.obj")));
    }

    #[test]
    fn test_negative_size_reaches_validation() {
        let cli = Cli::parse_from(["rounded-quad", "--width", "-1", "--height", "-0.5"]);
        assert_eq!(cli.width, -1.0);
        assert_eq!(cli.height, -0.5);

        let err = quad_mesh::RoundedQuadMeshBuilder::with_settings(cli.params(), cli.settings())
            .unwrap_err();
        assert!(matches!(
            err,
            quad_mesh::MeshError::InvalidParameter { name: "width", .. }
        ));
    }
}
