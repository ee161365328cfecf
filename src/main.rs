//--- Copyright (C) 2025 Saki Komikado <komietty@gmail.com>,
//--- This Source Code Form is subject to the terms of the Mozilla Public License v.2.0.

use log::info;
use craftmesh::{stack_stages, BuildConfig, SimulationState};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let conf = BuildConfig::from_env()?;
    let mut session = SimulationState::new(conf)?;
    let n = session.config.default_edge_count;

    let rocket = stack_stages("rocket", &[(4., 1., 1.), (3., 1., 0.6), (1.5, 0.6, 0.)], n)?;
    let lander = stack_stages("lander", &[(0.5, 1.2, 1.2), (1., 1.2, 0.25)], n)?;
    session.add_craft(rocket);
    session.add_craft(lander);

    for i in 0..session.craft_count() {
        session.set_active(i)?;
        let now = std::time::Instant::now();
        if let Some(g) = session.active_geometry()? {
            let b = g.bounds();
            info!("{}: {} verts, {} tris, size {:?}, built in {:?}",
                session.craft(i)?.name, g.vertex_count(), g.triangle_count(), b.size(), now.elapsed());
        }
        session.advance_clock(1.)?;
    }
    info!("clock: {}", session.clock());
    Ok(())
}
