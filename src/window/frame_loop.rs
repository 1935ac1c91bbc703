//! The rendering loop, as an explicit two-state machine.

use std::time::Duration;

use crate::scene::Wireframe;
use crate::setup::ViewerSetup;
use glamx::Mat4;

/// The state of a [`FrameLoop`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// Frames keep being drawn.
    Running,
    /// A quit request was observed. This state is final.
    Terminated,
}

/// What the frame loop drives: an event source, a frame to draw into and a clock.
pub trait FrameTarget {
    /// Polls pending events without blocking.
    ///
    /// Returns `true` if a quit request was observed.
    fn poll_quit(&mut self) -> bool;

    /// Clears the frame, draws `scene` moved by `model`, and presents the result.
    fn draw_frame(&mut self, scene: &Wireframe, model: Mat4);

    /// Waits before the next iteration.
    fn pause(&mut self, interval: Duration);
}

/// Spins a wireframe around the vertical axis, one increment per frame.
///
/// The rotation is tracked as a number of frames, so after `k` frames the model is
/// rotated by exactly `k` increments.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLoop {
    state: LoopState,
    spin_degrees: f32,
    frame_interval: Duration,
    frames: u64,
}

impl FrameLoop {
    /// Creates a running loop with the spin and frame interval of `setup`.
    pub fn new(setup: &ViewerSetup) -> FrameLoop {
        FrameLoop::with_spin(setup.spin_degrees, setup.frame_interval)
    }

    /// Creates a running loop rotating by `spin_degrees` each frame and pausing
    /// `frame_interval` between frames.
    pub fn with_spin(spin_degrees: f32, frame_interval: Duration) -> FrameLoop {
        FrameLoop {
            state: LoopState::Running,
            spin_degrees,
            frame_interval,
            frames: 0,
        }
    }

    /// The current state.
    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The number of frames drawn so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The cumulative rotation around the vertical axis, in degrees.
    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        self.frames as f64 * self.spin_degrees as f64
    }

    /// The model transform of the current frame.
    pub fn model_transform(&self) -> Mat4 {
        let degrees = self.rotation_degrees().rem_euclid(360.0) as f32;
        Mat4::from_rotation_y(degrees.to_radians())
    }

    /// Runs one iteration.
    ///
    /// Polls events first: a quit request terminates the loop before anything is drawn.
    /// Otherwise rotates the model by one increment, draws and presents the frame, then
    /// pauses. Once terminated, this does nothing.
    pub fn step<T: FrameTarget + ?Sized>(&mut self, target: &mut T, scene: &Wireframe) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        if target.poll_quit() {
            log::debug!("Quit requested after {} frames.", self.frames);
            self.state = LoopState::Terminated;
            return self.state;
        }

        self.frames += 1;
        target.draw_frame(scene, self.model_transform());
        target.pause(self.frame_interval);

        self.state
    }

    /// Runs iterations until a quit request is observed.
    pub fn run<T: FrameTarget + ?Sized>(&mut self, target: &mut T, scene: &Wireframe) -> LoopState {
        log::debug!("Entering the frame loop.");

        while self.step(target, scene) == LoopState::Running {}

        self.state
    }
}
