//! GPU device and surface management.
//!
//! - `Gpu` owns the wgpu instance, adapter, device, queue and window surface.
//! - `GpuFrame` is one acquired swapchain image plus its command encoder.
//! - surface helpers pick formats and map surface errors to actions.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
