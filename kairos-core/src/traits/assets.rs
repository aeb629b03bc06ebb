//! Icon asset seam

use crate::icon::IconId;

/// Loader for the bundled weather icon bitmaps.
///
/// Loading is infallible by contract: the icon set ships with the
/// firmware, and a missing asset is a packaging defect handled below
/// this core. Every bitmap handed out must eventually come back through
/// `release`; the icon resource guarantees it holds at most one.
pub trait IconAssets {
    /// Bitmap handle type
    type Bitmap;

    /// Load the bitmap for an icon
    fn load(&mut self, icon: IconId) -> Self::Bitmap;

    /// Release a previously loaded bitmap
    fn release(&mut self, bitmap: Self::Bitmap);
}
