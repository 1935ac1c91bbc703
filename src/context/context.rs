//! The GPU device shared by the window and the line renderer.
//!
//! There is a single window, so the device lives in a thread-local slot filled when
//! the window opens and emptied when it closes.

use std::cell::RefCell;
use std::sync::Arc;

thread_local! {
    static CONTEXT_SINGLETON: RefCell<Option<Context>> = const { RefCell::new(None) };
}

/// Handles to the wgpu device and queue, plus the format frames are drawn in.
#[derive(Clone)]
pub struct Context {
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    /// Color format of the window surface, which every pipeline must target.
    pub surface_format: wgpu::TextureFormat,
}

impl Context {
    /// Format of the depth buffer attached to every frame.
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Makes `device` and `queue` the current context of this thread.
    pub fn init(device: wgpu::Device, queue: wgpu::Queue, surface_format: wgpu::TextureFormat) {
        CONTEXT_SINGLETON.with(|cell| {
            *cell.borrow_mut() = Some(Context {
                device: Arc::new(device),
                queue: Arc::new(queue),
                surface_format,
            })
        });
    }

    /// The current context of this thread.
    ///
    /// # Panics
    /// Panics if no window is open.
    pub fn get() -> Context {
        CONTEXT_SINGLETON.with(|cell| {
            cell.borrow()
                .clone()
                .expect("no wgpu context: the window must be opened first")
        })
    }

    /// Destroys the device and empties the slot.
    ///
    /// Runs when the window is dropped, before thread-local storage is torn down.
    pub fn reset() {
        if let Some(ctxt) = CONTEXT_SINGLETON.with(|cell| cell.borrow_mut().take()) {
            ctxt.device.destroy();
        }
    }
}
