//! Error types for overlay session construction.
//!
//! Only the failures that make a session unusable surface here; degraded
//! visual refinements (missing monitor info, blur, region carving) are
//! logged at the point of occurrence and swallowed.

use thiserror::Error;

/// Fatal overlay session errors.
#[derive(Error, Debug)]
pub enum OverlayError {
    /// The native overlay window could not be created at all.
    #[error("surface creation failed: {0}")]
    SurfaceCreation(String),

    /// The D3D/D2D/composition pipeline could not be initialized, so the
    /// session would never be able to draw a frame.
    #[error("graphics initialization failed: {0}")]
    GraphicsInit(String),

    /// The dedicated render thread could not be spawned.
    #[error("worker thread spawn failed: {0}")]
    WorkerSpawn(#[from] std::io::Error),

    /// The worker thread died before signaling readiness.
    #[error("overlay worker exited before the surface was ready")]
    WorkerVanished,
}
