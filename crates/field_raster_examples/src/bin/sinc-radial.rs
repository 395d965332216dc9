use field_raster::prelude::*;
use field_raster_examples::init_tracing;
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::new(1024, 1024);
    // The epsilon keeps the center sample off the 0/0 singularity.
    let sinc = |p: DVec2| {
        let r = (20.0 * p.x * p.x + 20.0 * p.y * p.y).sqrt() + 1e-9;
        r.sin() / r
    };

    let out = "sinc-radial.png";
    render_to_file(&config, &sinc, out)?;
    Ok(())
}
