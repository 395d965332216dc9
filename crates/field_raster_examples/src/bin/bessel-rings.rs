use field_raster::prelude::*;
use field_raster_examples::{init_tracing, j0};
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::new(1024, 1024);
    let rings = |p: DVec2| j0(p.x * p.x + p.y * p.y);

    let out = "bessel-rings.png";
    render_to_file(&config, &rings, out)?;
    Ok(())
}
