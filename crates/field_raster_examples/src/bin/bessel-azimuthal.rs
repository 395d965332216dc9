use field_raster::prelude::*;
use field_raster_examples::{init_tracing, j0};
use glam::DVec2;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = RenderConfig::new(1024, 1024);
    let lobes = |p: DVec2| {
        let theta = p.x.atan2(p.y);
        j0(p.x * p.x + p.y * p.y) * (2.0 * theta).cos()
    };

    // TIFF output; the extension picks the container.
    let out = "bessel-azimuthal.tiff";
    render_to_file(&config, &lobes, out)?;
    Ok(())
}
