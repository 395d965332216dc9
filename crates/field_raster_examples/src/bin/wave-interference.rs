use field_raster::prelude::*;
use field_raster_examples::init_tracing;
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::new(1024, 1024);
    let wave = |p: DVec2| (2.0 * p.x).sin() * (2.0 * p.y).cos() + (0.1 * p.x * p.y).sin();

    let out = "wave-interference.png";
    render_to_file(&config, &wave, out)?;
    Ok(())
}
