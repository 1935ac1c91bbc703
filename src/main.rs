use transmilenio::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let setup = ViewerSetup::default();
    let scene = assemble_bus();
    log::info!(
        "Bus wireframe ready: {} vertices, {} edges.",
        scene.vertices().len(),
        scene.edges().len()
    );

    let mut viewer = pollster::block_on(Viewer::open(&setup))?;
    let mut frame_loop = FrameLoop::new(&setup);
    frame_loop.run(&mut viewer, &scene);

    log::info!("Window closed after {} frames.", frame_loop.frames());
    Ok(())
}
