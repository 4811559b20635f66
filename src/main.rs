//! Rounded quad mesh generator
//!
//! Builds a flat rounded-rectangle mesh from the command line, logs a summary
//! and optionally dumps the buffers or writes an OBJ file.

mod cli;
mod obj;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use quad_mesh::{GeneratedMesh, RoundedQuadMeshBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};

fn log_summary(mesh: &GeneratedMesh) {
    log::info!(
        "✓ Generated '{}': {} vertices, {} triangles",
        mesh.name,
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    if let Some(bounds) = mesh.bounds() {
        let size = bounds.size();
        log::info!("  Bounds: {:.3} x {:.3}", size.x, size.y);
    }
    log::info!("  Covered area: {:.5}", mesh.signed_area().abs());
    log::info!(
        "  GPU buffers: {} vertex bytes, {} index bytes",
        mesh.vertex_bytes().len(),
        mesh.index_bytes().len()
    );
}

fn dump(mesh: &GeneratedMesh) {
    println!("# vertices (x y z | u v)");
    for (i, (v, uv)) in mesh.vertices.iter().zip(&mesh.uvs).enumerate() {
        println!(
            "{:4}: {:9.5} {:9.5} {:9.5} | {:7.5} {:7.5}",
            i, v.x, v.y, v.z, uv.x, uv.y
        );
    }
    println!("# triangles");
    for (i, [a, b, c]) in mesh.triangles_iter().enumerate() {
        println!("{:4}: {} {} {}", i, a, b, c);
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logger (RUST_LOG=debug for verbose output)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let params = cli.params();
    log::info!(
        "Generating rounded quad {}x{} r={} segments={}",
        params.width,
        params.height,
        params.corner_radius,
        params.corner_segments
    );

    let builder = RoundedQuadMeshBuilder::with_settings(params, cli.settings())
        .context("invalid quad parameters")?;
    let mesh = builder
        .mesh()
        .context("builder finished without a mesh")?;

    log_summary(mesh);

    if cli.dump {
        dump(mesh);
    }

    if let Some(path) = &cli.obj {
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);
        obj::write_obj(mesh, &mut out)
            .and_then(|_| out.flush())
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
