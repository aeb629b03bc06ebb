//! Render dispatch
//!
//! Translates the settings record and live display state into calls on
//! the presentation surface. The dispatcher keeps no state of its own;
//! every push is idempotent and safe to repeat.

use crate::clock;
use crate::display::battery;
use crate::display::state::DisplayState;
use crate::settings::types::PersistedSettings;
use crate::traits::surface::{Region, Surface};

/// Stateless translator from state changes to surface calls
pub struct RenderDispatcher;

impl RenderDispatcher {
    /// Re-format the clock strings and push them.
    ///
    /// Runs unconditionally: the clock text depends on connectivity as
    /// well as the tick, so callers re-run this after either changes.
    pub fn refresh_clock<S: Surface>(
        settings: &mut PersistedSettings,
        display: &DisplayState,
        use_24h: bool,
        surface: &mut S,
    ) {
        clock::format_time(
            &display.clock,
            use_24h,
            display.connected,
            &mut settings.time,
        );
        clock::format_date(&settings.date_format, &display.clock, &mut settings.date);
        surface.set_text(Region::Time, &settings.time);
        surface.set_text(Region::Date, &settings.date);
    }

    /// Push the battery bar at its current fill and color
    pub fn push_battery<S: Surface>(
        settings: &PersistedSettings,
        display: &DisplayState,
        surface: &mut S,
    ) {
        let width = battery::bar_width(display.battery_percent, surface.battery_region_width());
        surface.draw_battery_bar(width, settings.battery_bar);
    }

    /// Push every region color from the settings record
    pub fn push_colors<S: Surface>(settings: &PersistedSettings, surface: &mut S) {
        surface.set_background(Region::Time, settings.time_bg);
        surface.set_background(Region::Date, settings.time_bg);
        surface.set_text_color(Region::Time, settings.time_stroke);
        surface.set_text_color(Region::Date, settings.time_stroke);
        surface.set_backdrop(settings.weather_bg);
        surface.set_text_color(Region::Temperature, settings.weather_stroke);
        surface.set_text_color(Region::Conditions, settings.weather_stroke);
    }

    /// Push the weather texts and the conditions visibility flag
    pub fn push_weather<S: Surface>(settings: &PersistedSettings, surface: &mut S) {
        surface.set_text(Region::Temperature, &settings.temperature);
        surface.set_text(Region::Conditions, &settings.conditions);
        surface.set_hidden(Region::Conditions, !settings.show_conditions);
    }
}
