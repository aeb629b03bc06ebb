//! Sparse merge of inbound companion batches
//!
//! One batch updates the settings record field by field. Keys are
//! processed in schema order; each present, well-typed key touches
//! exactly one field, and absent keys leave their fields alone - this
//! is a merge, not a replace. Side effects (surface pushes, icon
//! reloads) run per key; the caller persists the record once after the
//! whole batch.

use core::fmt::Write;

use heapless::String;
use kairos_protocol::{Batch, TupleKey};

use crate::color::Color;
use crate::display::dispatcher::RenderDispatcher;
use crate::display::state::DisplayState;
use crate::icon::{IconId, IconResource};
use crate::settings::types::{self, PersistedSettings};
use crate::traits::assets::IconAssets;
use crate::traits::device::DeviceServices;
use crate::traits::surface::{Region, Surface};

/// Stateless application of one inbound batch
pub struct MessageMerger;

impl MessageMerger {
    /// Apply every recognized key of `batch`, in schema order.
    ///
    /// Tuples of the wrong value kind are skipped like absent keys.
    /// The order below matters twice: an icon id and a weather stroke
    /// in the same batch reload the icon twice (first with the old
    /// stroke, then recolored), and a date pattern reformats with
    /// whatever colors the batch already applied.
    pub fn apply<S, A, D>(
        settings: &mut PersistedSettings,
        display: &DisplayState,
        icon: &mut IconResource<S::Bitmap>,
        surface: &mut S,
        assets: &mut A,
        device: &D,
        batch: &Batch,
    ) where
        S: Surface,
        A: IconAssets<Bitmap = S::Bitmap>,
        D: DeviceServices,
    {
        if let Some(value) = batch.int(TupleKey::Temperature) {
            let mut text: String<16> = String::new();
            let _ = write!(text, "{value}°");
            types::copy_truncated(&mut settings.temperature, &text);
            surface.set_text(Region::Temperature, &settings.temperature);
        }

        if let Some(text) = batch.text(TupleKey::Conditions) {
            types::copy_truncated(&mut settings.conditions, text);
            surface.set_text(Region::Conditions, &settings.conditions);
        }

        if let Some(number) = batch.int(TupleKey::IconNumber) {
            let id = IconId::from_number(number);
            // Unchanged ids are left alone; color changes below force
            // their own reload regardless of the id.
            if id != settings.icon {
                settings.icon = id;
                let (bitmap, palette) =
                    icon.set_icon(assets, id, settings.weather_stroke, surface.color_mode());
                surface.show_icon(bitmap, palette);
            }
        }

        if let Some(flag) = batch.int(TupleKey::ShowConditions) {
            settings.show_conditions = flag == 1;
            surface.set_hidden(Region::Conditions, !settings.show_conditions);
        }

        if let Some(flag) = batch.int(TupleKey::VibrateDisconnect) {
            settings.vibrate_disconnect = flag == 1;
        }

        if let Some(text) = batch.text(TupleKey::UpdateInterval) {
            // Non-numeric text keeps the previous interval
            match text.trim().parse::<i32>() {
                Ok(minutes) => settings.update_interval = minutes,
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("unparsable update interval: {=str}", text);
                }
            }
        }

        if let Some(packed) = batch.int(TupleKey::ColorTimeBg) {
            settings.time_bg = Color::from_hex(packed as u32);
            surface.set_background(Region::Time, settings.time_bg);
            surface.set_background(Region::Date, settings.time_bg);
        }

        if let Some(packed) = batch.int(TupleKey::ColorTimeStroke) {
            settings.time_stroke = Color::from_hex(packed as u32);
            surface.set_text_color(Region::Time, settings.time_stroke);
            surface.set_text_color(Region::Date, settings.time_stroke);
        }

        if let Some(packed) = batch.int(TupleKey::ColorWeatherBg) {
            settings.weather_bg = Color::from_hex(packed as u32);
            surface.set_backdrop(settings.weather_bg);
        }

        if let Some(packed) = batch.int(TupleKey::ColorWeatherStroke) {
            settings.weather_stroke = Color::from_hex(packed as u32);
            surface.set_text_color(Region::Temperature, settings.weather_stroke);
            surface.set_text_color(Region::Conditions, settings.weather_stroke);
            // The icon palette carries this color: reload even though
            // the id is unchanged.
            let (bitmap, palette) = icon.set_icon(
                assets,
                settings.icon,
                settings.weather_stroke,
                surface.color_mode(),
            );
            surface.show_icon(bitmap, palette);
        }

        if let Some(packed) = batch.int(TupleKey::ColorBatteryBar) {
            settings.battery_bar = Color::from_hex(packed as u32);
            RenderDispatcher::push_battery(settings, display, surface);
        }

        if let Some(text) = batch.text(TupleKey::DateFormat) {
            types::copy_truncated(&mut settings.date_format, text);
            RenderDispatcher::refresh_clock(settings, display, device.is_24h_clock(), surface);
        }
    }
}
