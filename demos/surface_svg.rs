use plotters::prelude::*;
use trimesh_grid::{Surface, SurfaceConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    run_example("surface_10.svg", SurfaceConfig::new(10).with_seed(1))?;
    run_example("surface_30.svg", SurfaceConfig::new(30).with_seed(2))?;
    run_example("surface_partial.svg", SurfaceConfig::new(20).with_seed(3).with_edge_budget(300))?;

    Ok(())
}

fn run_example(filename: &str, config: SurfaceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let surface = Surface::generate(config)?;
    let grid = surface.grid();
    let extent = grid.size() as f64;

    let root = SVGBackend::new(filename, (1024, 1024)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-0.5..extent + 0.5, -0.5..extent + 0.5)?;

    // Draw lattice cells
    for i in 0..=grid.size() {
        let v = i as f64;
        chart.draw_series(std::iter::once(PathElement::new(vec![(v, 0.0), (v, extent)], BLACK.mix(0.1))))?;
        chart.draw_series(std::iter::once(PathElement::new(vec![(0.0, v), (extent, v)], BLACK.mix(0.1))))?;
    }

    // Draw triangles, shaded by height
    for triangle in surface.triangles() {
        let [a, b, c] = triangle.vertices().map(|v| grid.point(v));
        let height = (a[2] + b[2] + c[2]) / 3.0;
        let poly = vec![(a[0], a[1]), (b[0], b[1]), (c[0], c[1])];

        chart.draw_series(std::iter::once(Polygon::new(
            poly.clone(),
            BLUE.mix(0.1 + 0.4 * height).filled(),
        )))?;

        let mut outline = poly;
        outline.push(outline[0]);
        chart.draw_series(std::iter::once(PathElement::new(outline, BLACK.mix(0.5))))?;
    }

    // Draw points
    let points: Vec<(f64, f64)> = grid.points().iter().map(|p| (p[0], p[1])).collect();
    chart.draw_series(points.iter().map(|&p| Circle::new(p, 2, RED.filled())))?;

    root.present()?;
    println!(
        "Output saved to {} ({} triangles, complete: {})",
        filename,
        surface.triangle_count(),
        surface.is_complete()
    );
    Ok(())
}
