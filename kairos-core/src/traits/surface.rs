//! Presentation surface seam
//!
//! The surface owns layout geometry, font selection, and the layer
//! tree; this core only pushes content and attributes at it. Every
//! setter is idempotent, so pushing an unchanged value is always safe.

use crate::color::Color;
use crate::icon::Palette;

/// Independently addressable text areas of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Region {
    /// Clock text
    Time,
    /// Date text
    Date,
    /// Temperature text
    Temperature,
    /// Conditions text
    Conditions,
}

/// Rendering capability of the display hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorMode {
    /// Full color rendering
    Color,
    /// 1-bit black and white only
    Monochrome,
}

/// Trait for the presentation surface
pub trait Surface {
    /// Bitmap handle produced by the icon asset loader
    type Bitmap;

    /// Replace a text region's content
    fn set_text(&mut self, region: Region, text: &str);

    /// Set a text region's text color
    fn set_text_color(&mut self, region: Region, color: Color);

    /// Set a text region's background fill.
    ///
    /// Only the clock and date regions carry their own background; the
    /// weather regions draw directly on the backdrop.
    fn set_background(&mut self, region: Region, color: Color);

    /// Set the window backdrop behind all regions
    fn set_backdrop(&mut self, color: Color);

    /// Hide or show a region
    fn set_hidden(&mut self, region: Region, hidden: bool);

    /// Show a freshly loaded icon bitmap with its palette
    fn show_icon(&mut self, bitmap: &Self::Bitmap, palette: Palette);

    /// Width of the battery gauge region in pixels
    fn battery_region_width(&self) -> u16;

    /// Draw the battery bar: a filled rectangle of `fill_width` pixels
    /// anchored at the region origin, rounded on the trailing corners
    fn draw_battery_bar(&mut self, fill_width: u16, color: Color);

    /// Rendering capability of this display
    fn color_mode(&self) -> ColorMode;
}
