//! Weather icon resource lifecycle
//!
//! At most one icon bitmap is loaded at any time. A reload always
//! releases the held bitmap before acquiring the new one, even for an
//! unchanged id: the palette carries the configured stroke color, so a
//! color change must rebuild it. The merge layer short-circuits
//! equal-id updates instead; this layer never does.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::traits::assets::IconAssets;
use crate::traits::surface::ColorMode;

/// The fixed weather icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IconId {
    /// Fallback for indices outside the set
    #[default]
    Default,
    ClearDay,
    ClearNight,
    Cloudy,
    Fog,
    PartlyCloudy,
    PartlySunny,
    Rain,
    Sleet,
    Snow,
    Thunderstorm,
    Sunrise,
    Sunset,
}

impl IconId {
    /// Resolve a companion-supplied icon index.
    ///
    /// Out-of-set values fall back to the default icon rather than
    /// failing; the companion may know icons this firmware does not.
    pub fn from_number(number: i32) -> Self {
        match number {
            0 => IconId::Default,
            1 => IconId::ClearDay,
            2 => IconId::ClearNight,
            3 => IconId::Cloudy,
            4 => IconId::Fog,
            5 => IconId::PartlyCloudy,
            6 => IconId::PartlySunny,
            7 => IconId::Rain,
            8 => IconId::Sleet,
            9 => IconId::Snow,
            10 => IconId::Thunderstorm,
            11 => IconId::Sunrise,
            12 => IconId::Sunset,
            _ => IconId::Default,
        }
    }
}

/// Two-entry palette applied to the 1-bit icon bitmap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Palette {
    /// Entry 0: icon stroke
    pub foreground: Color,
    /// Entry 1: fill behind the stroke
    pub background: Color,
}

impl Palette {
    /// Palette for a stroke color on the given display hardware.
    ///
    /// Color displays draw the configured stroke over a transparent
    /// fill. Monochrome displays force black-on-white regardless of the
    /// configured color.
    pub fn for_mode(stroke: Color, mode: ColorMode) -> Self {
        match mode {
            ColorMode::Color => Palette {
                foreground: stroke,
                background: Color::CLEAR,
            },
            ColorMode::Monochrome => Palette {
                foreground: Color::BLACK,
                background: Color::WHITE,
            },
        }
    }
}

#[derive(Debug)]
struct Loaded<B> {
    id: IconId,
    bitmap: B,
    palette: Palette,
}

/// Owns the single currently-loaded icon bitmap
#[derive(Debug)]
pub struct IconResource<B> {
    loaded: Option<Loaded<B>>,
}

impl<B> IconResource<B> {
    pub fn new() -> Self {
        Self { loaded: None }
    }

    /// Currently loaded icon id, if any
    pub fn current(&self) -> Option<IconId> {
        self.loaded.as_ref().map(|loaded| loaded.id)
    }

    /// Palette of the currently loaded bitmap, if any
    pub fn palette(&self) -> Option<Palette> {
        self.loaded.as_ref().map(|loaded| loaded.palette)
    }

    /// Load `id` with the given stroke color.
    ///
    /// Any held bitmap is released first, unconditionally - same-id
    /// reloads rebuild the palette. Returns the fresh bitmap and its
    /// palette for the caller to push at the surface.
    pub fn set_icon<A>(
        &mut self,
        assets: &mut A,
        id: IconId,
        stroke: Color,
        mode: ColorMode,
    ) -> (&B, Palette)
    where
        A: IconAssets<Bitmap = B>,
    {
        if let Some(old) = self.loaded.take() {
            assets.release(old.bitmap);
        }
        let palette = Palette::for_mode(stroke, mode);
        let bitmap = assets.load(id);
        let loaded = self.loaded.insert(Loaded {
            id,
            bitmap,
            palette,
        });
        (&loaded.bitmap, palette)
    }
}

impl<B> Default for IconResource<B> {
    fn default() -> Self {
        Self::new()
    }
}
