use crate::constants::DEFAULT_MESH_NAME;
use crate::error::MeshResult;
use crate::mesh::GeneratedMesh;
use crate::params::{clamp_radius, clamp_segments, ShapeParameters};
use crate::tessellate::{generate_into, FrontFace};

/// When and how a [`RoundedQuadMeshBuilder`] regenerates
#[derive(Clone, Debug, PartialEq)]
pub struct BuilderSettings {
    /// Generate as soon as the builder is constructed
    pub generate_on_start: bool,
    /// Regenerate after [`RoundedQuadMeshBuilder::set_params`]
    pub auto_update: bool,
    pub front_face: FrontFace,
    /// Name given to the generated mesh
    pub name: String,
}

impl Default for BuilderSettings {
    fn default() -> Self {
        Self {
            generate_on_start: true,
            auto_update: true,
            front_face: FrontFace::default(),
            name: DEFAULT_MESH_NAME.to_string(),
        }
    }
}

/// Owns one set of shape parameters and the mesh most recently generated from them.
///
/// Every regeneration rebuilds all buffers; the previous mesh is overwritten in
/// place so its allocations are reused.
#[derive(Debug)]
pub struct RoundedQuadMeshBuilder {
    params: ShapeParameters,
    settings: BuilderSettings,
    mesh: Option<GeneratedMesh>,
    last_generated: Option<ShapeParameters>,
}

impl RoundedQuadMeshBuilder {
    pub fn new(params: ShapeParameters) -> MeshResult<Self> {
        Self::with_settings(params, BuilderSettings::default())
    }

    pub fn with_settings(params: ShapeParameters, settings: BuilderSettings) -> MeshResult<Self> {
        let mut builder = Self {
            params: params.clamped()?,
            settings,
            mesh: None,
            last_generated: None,
        };

        if builder.settings.generate_on_start {
            builder.regenerate()?;
        }

        Ok(builder)
    }

    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    pub fn settings(&self) -> &BuilderSettings {
        &self.settings
    }

    /// Most recent mesh, `None` until the first generation
    pub fn mesh(&self) -> Option<&GeneratedMesh> {
        self.mesh.as_ref()
    }

    /// Hand the mesh to the caller. The next regeneration starts from a fresh allocation.
    pub fn take_mesh(&mut self) -> Option<GeneratedMesh> {
        self.last_generated = None;
        self.mesh.take()
    }

    /// True when there is no mesh or the parameters changed since it was built
    pub fn needs_regeneration(&self) -> bool {
        self.last_generated != Some(self.params)
    }

    /// Rebuild the mesh from the current parameters.
    ///
    /// On error the previous mesh, if any, is kept unchanged.
    pub fn regenerate(&mut self) -> MeshResult<&GeneratedMesh> {
        let mut mesh = self.mesh.take().unwrap_or_default();
        let previous_name = std::mem::replace(&mut mesh.name, self.settings.name.clone());

        if let Err(err) = generate_into(&self.params, self.settings.front_face, &mut mesh) {
            // A failed first generation stores nothing
            if !mesh.is_empty() {
                mesh.name = previous_name;
                self.mesh = Some(mesh);
            }
            return Err(err);
        }

        self.last_generated = Some(self.params);
        Ok(&*self.mesh.insert(mesh))
    }

    /// Alias of [`Self::regenerate`]
    pub fn generate(&mut self) -> MeshResult<&GeneratedMesh> {
        self.regenerate()
    }

    /// Resize the quad and regenerate.
    ///
    /// The stored radius is re-clamped against the new size. Non-positive sizes
    /// are rejected and leave the builder unchanged.
    pub fn set_size(&mut self, width: f32, height: f32) -> MeshResult<&GeneratedMesh> {
        let params = ShapeParameters {
            width,
            height,
            ..self.params
        }
        .clamped()?;
        self.params = params;
        self.regenerate()
    }

    /// Change the corner radius and regenerate. Out-of-range radii are clamped.
    pub fn set_corner_radius(&mut self, radius: f32) -> MeshResult<&GeneratedMesh> {
        let params = ShapeParameters {
            corner_radius: radius,
            ..self.params
        }
        .clamped()?;
        self.params = params;
        self.regenerate()
    }

    /// Change the samples per corner and regenerate. Clamped to `[4, 32]`.
    pub fn set_corner_segments(&mut self, segments: u32) -> MeshResult<&GeneratedMesh> {
        self.params.corner_segments = clamp_segments(segments);
        self.regenerate()
    }

    /// Replace all parameters at once.
    ///
    /// The radius is clamped to the new size; the mesh is only rebuilt when
    /// `auto_update` is set, otherwise call [`Self::regenerate`].
    pub fn set_params(&mut self, params: ShapeParameters) -> MeshResult<()> {
        params.validate()?;
        self.params = ShapeParameters {
            corner_radius: clamp_radius(params.width, params.height, params.corner_radius),
            corner_segments: clamp_segments(params.corner_segments),
            ..params
        };

        if self.settings.auto_update {
            self.regenerate()?;
        }
        Ok(())
    }

    pub fn set_front_face(&mut self, front_face: FrontFace) -> MeshResult<&GeneratedMesh> {
        self.settings.front_face = front_face;
        self.regenerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tessellate::generate;
    use approx::assert_abs_diff_eq;

    fn manual() -> BuilderSettings {
        BuilderSettings {
            generate_on_start: false,
            auto_update: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_generates_on_start() {
        let builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();
        let mesh = builder.mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 33);
        assert_eq!(mesh.triangle_count(), 32);
        assert!(!builder.needs_regeneration());
    }

    #[test]
    fn test_no_mesh_before_first_generation() {
        let mut builder =
            RoundedQuadMeshBuilder::with_settings(ShapeParameters::default(), manual()).unwrap();
        assert!(builder.mesh().is_none());
        assert!(builder.needs_regeneration());

        builder.regenerate().unwrap();
        assert!(builder.mesh().is_some());
        assert!(!builder.needs_regeneration());
    }

    #[test]
    fn test_construction_clamps() {
        let builder =
            RoundedQuadMeshBuilder::new(ShapeParameters::new(2.0, 1.0, 9.0, 100)).unwrap();
        assert_eq!(builder.params().corner_radius, 0.5);
        assert_eq!(builder.params().corner_segments, 32);
    }

    #[test]
    fn test_construction_rejects_bad_size() {
        assert!(RoundedQuadMeshBuilder::new(ShapeParameters::new(0.0, 1.0, 0.2, 8)).is_err());
    }

    #[test]
    fn test_set_corner_segments_clamps_and_regenerates() {
        let mut builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();

        let mesh = builder.set_corner_segments(2).unwrap();
        assert_eq!(mesh.vertex_count(), 17);
        assert_eq!(builder.params().corner_segments, 4);

        let mesh = builder.set_corner_segments(50).unwrap();
        assert_eq!(mesh.vertex_count(), 129);
        assert_eq!(builder.params().corner_segments, 32);
    }

    #[test]
    fn test_set_corner_radius_clamps() {
        let mut builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();

        builder.set_corner_radius(3.0).unwrap();
        assert_eq!(builder.params().corner_radius, 0.5);

        builder.set_corner_radius(-1.0).unwrap();
        assert_eq!(builder.params().corner_radius, 0.0);

        assert!(builder.set_corner_radius(f32::NAN).is_err());
        assert_eq!(builder.params().corner_radius, 0.0);
    }

    #[test]
    fn test_set_size_reclamps_radius() {
        let mut builder =
            RoundedQuadMeshBuilder::new(ShapeParameters::new(4.0, 4.0, 1.5, 8)).unwrap();

        let mesh = builder.set_size(2.0, 1.0).unwrap();
        let bounds = mesh.bounds().unwrap();
        assert_abs_diff_eq!(bounds.max.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.max.y, 0.5, epsilon = 1e-6);
        assert_eq!(builder.params().corner_radius, 0.5);
    }

    #[test]
    fn test_set_size_rejects_without_side_effects() {
        let mut builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();
        let before = builder.mesh().cloned();

        assert!(builder.set_size(-2.0, 1.0).is_err());
        assert_eq!(builder.params(), &ShapeParameters::default());
        assert_eq!(builder.mesh().cloned(), before);
    }

    #[test]
    fn test_mutators_match_fresh_generation() {
        let mut builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();
        builder.set_size(3.0, 2.0).unwrap();
        builder.set_corner_radius(0.7).unwrap();
        builder.set_corner_segments(11).unwrap();

        let fresh = generate(&ShapeParameters::new(3.0, 2.0, 0.7, 11)).unwrap();
        assert_eq!(builder.mesh(), Some(&fresh));
    }

    #[test]
    fn test_set_params_respects_auto_update() {
        let mut builder =
            RoundedQuadMeshBuilder::with_settings(ShapeParameters::default(), manual()).unwrap();
        builder.regenerate().unwrap();

        builder.set_params(ShapeParameters::new(1.0, 1.0, 2.0, 6)).unwrap();
        assert_eq!(builder.params().corner_radius, 0.5);
        assert!(builder.needs_regeneration());
        assert_eq!(builder.mesh().unwrap().vertex_count(), 33);

        builder.regenerate().unwrap();
        assert_eq!(builder.mesh().unwrap().vertex_count(), 25);

        let mut auto = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();
        auto.set_params(ShapeParameters::new(1.0, 1.0, 0.2, 6)).unwrap();
        assert!(!auto.needs_regeneration());
        assert_eq!(auto.mesh().unwrap().vertex_count(), 25);
    }

    #[test]
    fn test_settings_flow_into_mesh() {
        let settings = BuilderSettings {
            front_face: FrontFace::Clockwise,
            name: "Panel".to_string(),
            ..Default::default()
        };
        let mut builder =
            RoundedQuadMeshBuilder::with_settings(ShapeParameters::default(), settings).unwrap();

        let mesh = builder.mesh().unwrap();
        assert_eq!(mesh.name, "Panel");
        assert!(mesh.signed_area() < 0.0);

        let mesh = builder.set_front_face(FrontFace::CounterClockwise).unwrap();
        assert!(mesh.signed_area() > 0.0);
    }

    #[test]
    fn test_failed_first_generation_stores_no_mesh() {
        let mut builder =
            RoundedQuadMeshBuilder::with_settings(ShapeParameters::default(), manual()).unwrap();
        builder.params.width = 0.0;

        assert!(builder.regenerate().is_err());
        assert!(builder.mesh().is_none());
        assert!(builder.needs_regeneration());
    }

    #[test]
    fn test_failed_regeneration_keeps_previous_mesh() {
        let settings = BuilderSettings {
            name: "Panel".to_string(),
            ..manual()
        };
        let mut builder =
            RoundedQuadMeshBuilder::with_settings(ShapeParameters::default(), settings).unwrap();
        let before = builder.regenerate().unwrap().clone();

        builder.settings.name = "Renamed".to_string();
        builder.params.height = f32::NAN;
        assert!(builder.regenerate().is_err());
        assert_eq!(builder.mesh(), Some(&before));
    }

    #[test]
    fn test_take_mesh() {
        let mut builder = RoundedQuadMeshBuilder::new(ShapeParameters::default()).unwrap();
        let mesh = builder.take_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 33);
        assert!(builder.mesh().is_none());
        assert!(builder.needs_regeneration());
    }
}
