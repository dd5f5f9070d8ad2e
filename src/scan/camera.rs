//! Camera session management.
//!
//! A session holds at most one capture stream. Acquisition goes through a
//! [`CaptureBackend`]; failures come back as browser-style error names and
//! are mapped to the messages shown to the user.

use thiserror::Error;

/// Camera failure, keyed on the error name the capture layer reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Camera access denied. Please allow camera permissions and try again.")]
    NotAllowed,
    #[error("No camera found. Please ensure your device has a camera.")]
    NotFound,
    #[error("Camera is already in use by another application.")]
    NotReadable,
    #[error("Camera constraints not supported. Try switching camera mode.")]
    Overconstrained,
    #[error("Camera access blocked due to security restrictions.")]
    Security,
    #[error("Camera error: {0}")]
    Other(String),
}

impl CameraError {
    /// Map a reported error name and message to a [`CameraError`].
    pub fn from_name(name: &str, message: Option<&str>) -> Self {
        match name {
            "NotAllowedError" => CameraError::NotAllowed,
            "NotFoundError" => CameraError::NotFound,
            "NotReadableError" => CameraError::NotReadable,
            "OverconstrainedError" => CameraError::Overconstrained,
            "SecurityError" => CameraError::Security,
            _ => CameraError::Other(
                message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or("Unknown error occurred")
                    .to_string(),
            ),
        }
    }

    /// Text shown in the scanner error panel.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Whether the failure means permission was refused.
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, CameraError::NotAllowed | CameraError::Security)
    }
}

/// Which camera to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// Rear camera.
    #[default]
    Environment,
    /// Front camera.
    User,
}

impl Facing {
    pub fn toggled(self) -> Self {
        match self {
            Facing::Environment => Facing::User,
            Facing::User => Facing::Environment,
        }
    }
}

/// Camera permission as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraPermission {
    #[default]
    Prompt,
    Granted,
    Denied,
    Unknown,
}

/// Ideal capture size requested from the backend.
pub const IDEAL_WIDTH: u32 = 640;
pub const IDEAL_HEIGHT: u32 = 480;

/// Source of capture streams.
pub trait CaptureBackend {
    type Stream;

    fn open(&mut self, facing: Facing, width: u32, height: u32) -> Result<Self::Stream, CameraError>;

    fn close(&mut self, stream: Self::Stream);
}

/// Holds at most one open stream and releases it on stop or drop.
pub struct CameraSession<B: CaptureBackend> {
    backend: B,
    stream: Option<B::Stream>,
    facing: Facing,
    permission: CameraPermission,
    last_error: Option<CameraError>,
}

impl<B: CaptureBackend> CameraSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stream: None,
            facing: Facing::default(),
            permission: CameraPermission::default(),
            last_error: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn permission(&self) -> CameraPermission {
        self.permission
    }

    pub fn last_error(&self) -> Option<&CameraError> {
        self.last_error.as_ref()
    }

    /// Open a stream. Does nothing if one is already held.
    pub fn start(&mut self) -> Result<(), CameraError> {
        if self.stream.is_some() {
            return Ok(());
        }

        self.last_error = None;
        match self.backend.open(self.facing, IDEAL_WIDTH, IDEAL_HEIGHT) {
            Ok(stream) => {
                self.stream = Some(stream);
                self.permission = CameraPermission::Granted;
                log::info!("CAMERA_STARTED facing={:?}", self.facing);
                Ok(())
            }
            Err(err) => {
                log::warn!("CAMERA_START_FAILED facing={:?} error={}", self.facing, err);
                if err.is_permission_denied() {
                    self.permission = CameraPermission::Denied;
                }
                self.last_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Release the held stream, if any.
    pub fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            self.backend.close(stream);
            log::info!("CAMERA_STOPPED facing={:?}", self.facing);
        }
    }

    /// Switch between front and rear camera, restarting an active stream.
    pub fn switch_facing(&mut self) -> Result<(), CameraError> {
        self.facing = self.facing.toggled();
        if self.stream.is_some() {
            self.stop();
            self.start()?;
        }
        Ok(())
    }
}

impl<B: CaptureBackend> Drop for CameraSession<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
