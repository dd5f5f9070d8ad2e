//! QR detection stub and demo-mode scan ids.
//!
//! There is no decoder behind the camera preview: [`detect_code`] looks at
//! the frame and never finds anything. Codes enter the system through manual
//! entry or through [`demo_scan_id`].

use rand::Rng;

/// Characters used for demo product ids (base 36, uppercase).
const DEMO_ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DEMO_ID_LEN: usize = 9;
pub const DEMO_ID_PREFIX: &str = "PROD-";

/// A captured camera frame in RGBA order.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self { width, height, rgba }
    }

    /// A frame holds enough data when the buffer covers every pixel.
    ///
    /// Dimensions whose byte size does not fit in `usize` never do.
    pub fn has_enough_data(&self) -> bool {
        if self.width == 0 || self.height == 0 {
            return false;
        }
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .map_or(false, |needed| self.rgba.len() >= needed)
    }
}

/// Look for a QR code in a frame. Always `None`: no decoder is wired in.
pub fn detect_code(frame: &Frame) -> Option<String> {
    if !frame.has_enough_data() {
        log::debug!(
            "DETECT_SKIP reason=incomplete_frame width={} height={}",
            frame.width,
            frame.height
        );
        return None;
    }
    None
}

/// Synthetic product id for demo-mode scans, e.g. `PROD-4K9QZ1M7B`.
pub fn demo_scan_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..DEMO_ID_LEN)
        .map(|_| DEMO_ID_ALPHABET[rng.gen_range(0..DEMO_ID_ALPHABET.len())] as char)
        .collect();
    format!("{}{}", DEMO_ID_PREFIX, suffix)
}
