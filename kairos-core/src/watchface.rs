//! The watchface controller context
//!
//! [`Watchface`] owns the settings record, the live display state, the
//! icon resource, and the collaborator handles, and exposes one
//! synchronous method per external event. The platform's event loop
//! delivers callbacks one at a time and each method runs to completion;
//! nothing here suspends, and nothing else touches the state. An
//! embedding that introduces real parallelism must serialize access to
//! this struct (single-owner task or a mutex around it).

use kairos_protocol::Batch;

use crate::clock::WallClock;
use crate::display::dispatcher::RenderDispatcher;
use crate::display::state::DisplayState;
use crate::icon::IconResource;
use crate::merge::MessageMerger;
use crate::refresh::RefreshRequester;
use crate::settings::store::ConfigStore;
use crate::settings::types::PersistedSettings;
use crate::traits::assets::IconAssets;
use crate::traits::channel::MessageOutbox;
use crate::traits::device::DeviceServices;
use crate::traits::storage::SettingsStore;
use crate::traits::surface::{Region, Surface};

/// Watchface controller: all state, one method per event callback
pub struct Watchface<S, A, P, D, O>
where
    S: Surface,
    A: IconAssets<Bitmap = S::Bitmap>,
    P: SettingsStore,
    D: DeviceServices,
    O: MessageOutbox,
{
    settings: PersistedSettings,
    display: DisplayState,
    icon: IconResource<S::Bitmap>,
    config: ConfigStore<P>,
    surface: S,
    assets: A,
    device: D,
    outbox: O,
}

impl<S, A, P, D, O> Watchface<S, A, P, D, O>
where
    S: Surface,
    A: IconAssets<Bitmap = S::Bitmap>,
    P: SettingsStore,
    D: DeviceServices,
    O: MessageOutbox,
{
    /// Load the persisted settings (or defaults) and take ownership of
    /// the collaborators
    pub fn new(surface: S, assets: A, store: P, device: D, outbox: O) -> Self {
        let mut config = ConfigStore::new(store);
        let settings = config.load();
        Self {
            settings,
            display: DisplayState::new(),
            icon: IconResource::new(),
            config,
            surface,
            assets,
            device,
            outbox,
        }
    }

    /// Push the complete persisted state to a freshly created surface.
    ///
    /// Call once after the surface exists, before the event loop starts
    /// delivering callbacks. The initial tick/battery/connectivity
    /// deliveries then bring the live signals up to date.
    pub fn boot(&mut self) {
        RenderDispatcher::push_colors(&self.settings, &mut self.surface);
        RenderDispatcher::push_weather(&self.settings, &mut self.surface);
        self.surface.set_text(Region::Time, &self.settings.time);
        self.surface.set_text(Region::Date, &self.settings.date);
        let (bitmap, palette) = self.icon.set_icon(
            &mut self.assets,
            self.settings.icon,
            self.settings.weather_stroke,
            self.surface.color_mode(),
        );
        self.surface.show_icon(bitmap, palette);
        RenderDispatcher::push_battery(&self.settings, &self.display, &mut self.surface);
    }

    /// Minute tick: reformat and push the clock, maybe ping the phone
    pub fn on_tick(&mut self, clock: WallClock) {
        self.display.set_clock(clock);
        RenderDispatcher::refresh_clock(
            &mut self.settings,
            &self.display,
            self.device.is_24h_clock(),
            &mut self.surface,
        );
        RefreshRequester::run(clock.minute, self.settings.update_interval, &mut self.outbox);
    }

    /// Battery level change: repush the gauge region, nothing else
    pub fn on_battery(&mut self, percent: u8) {
        self.display.set_battery(percent);
        RenderDispatcher::push_battery(&self.settings, &self.display, &mut self.surface);
    }

    /// Phone link change: maybe vibrate, then refresh the clock text
    pub fn on_connectivity(&mut self, connected: bool) {
        let went_down = self.display.set_connectivity(connected);
        if went_down && self.settings.vibrate_disconnect {
            self.device.vibrate_double_pulse();
        }
        // The clock text carries the disconnect marker
        RenderDispatcher::refresh_clock(
            &mut self.settings,
            &self.display,
            self.device.is_24h_clock(),
            &mut self.surface,
        );
    }

    /// Inbound batch: sparse merge, then one persistence write
    pub fn on_message(&mut self, batch: &Batch) {
        MessageMerger::apply(
            &mut self.settings,
            &self.display,
            &mut self.icon,
            &mut self.surface,
            &mut self.assets,
            &self.device,
            batch,
        );
        self.config.persist(&self.settings);
    }

    /// Current settings record
    pub fn settings(&self) -> &PersistedSettings {
        &self.settings
    }

    /// Live display state
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Currently loaded icon resource
    pub fn icon(&self) -> &IconResource<S::Bitmap> {
        &self.icon
    }

    /// The owned presentation surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The owned icon asset loader
    pub fn assets(&self) -> &A {
        &self.assets
    }

    /// The owned settings store
    pub fn config(&self) -> &ConfigStore<P> {
        &self.config
    }

    /// The owned device services
    pub fn device(&self) -> &D {
        &self.device
    }

    /// The owned outbound channel
    pub fn outbox(&self) -> &O {
        &self.outbox
    }
}
