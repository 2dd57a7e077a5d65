// SPDX-License-Identifier: MPL-2.0
//! Decoded panorama pixels.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// An equirectangular image: longitude spans the width, latitude the height.
///
/// Pixels are RGBA, 4 bytes each, row-major. The buffer is shared so the
/// GPU pipeline and the async loader can hold it without copying. Clones
/// keep the [`id`](Self::id) of the original, so the GPU texture is uploaded
/// once per decoded image.
#[derive(Clone)]
pub struct EquirectImage {
    id: u64,
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl EquirectImage {
    /// Wraps RGBA data, returning `None` when the buffer length does not match
    /// the dimensions or either dimension is zero.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected_len = (width as usize) * (height as usize) * 4;
        if width == 0 || height == 0 || rgba_bytes.len() != expected_len {
            return None;
        }
        Some(Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Identity of the decoded buffer.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// RGBA value at integer coordinates. Callers keep `x < width` and
    /// `y < height`.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let offset = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let p = &self.rgba_bytes[offset..offset + 4];
        [p[0], p[1], p[2], p[3]]
    }
}

impl fmt::Debug for EquirectImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquirectImage")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl PartialEq for EquirectImage {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.rgba_bytes == other.rgba_bytes
    }
}
