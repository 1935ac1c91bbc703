/*!
# Transmilenio

A red wireframe bus spinning in a window.

The model is a box-shaped body with glass panels, plus twelve wheel rings
sampled from a circle. Everything is built once at startup into an
immutable [`Wireframe`](crate::scene::Wireframe) and drawn every frame as a
single wgpu line list:

```no_run
use transmilenio::prelude::*;

fn main() -> anyhow::Result<()> {
    let setup = ViewerSetup::default();
    let scene = assemble_bus();
    let mut viewer = pollster::block_on(Viewer::open(&setup))?;

    FrameLoop::new(&setup).run(&mut viewer, &scene);
    Ok(())
}
```

The frame loop is a two-state machine ([`LoopState`](crate::window::LoopState)):
it polls for a close request, rotates the model one degree around the
vertical axis, clears, draws, presents and sleeps ten milliseconds.
*/
#![allow(clippy::module_inception)]

pub use glamx;

pub mod camera;
pub mod color;
pub mod context;
pub mod event;
pub mod procedural;
pub mod renderer;
pub mod scene;
pub mod setup;
pub mod window;

pub mod prelude {
    pub use crate::camera::*;
    pub use crate::color::*;
    pub use crate::context::*;
    pub use crate::event::*;
    pub use crate::procedural::*;
    pub use crate::renderer::*;
    pub use crate::scene::*;
    pub use crate::setup::*;
    pub use crate::window::*;
    pub use glamx::{Mat4, Vec2, Vec3};
}
