//! Test doubles for the collaborator seams

use heapless::{String, Vec};

use crate::color::Color;
use crate::icon::{IconId, Palette};
use crate::settings::store::SETTINGS_BLOB_MAX;
use crate::settings::types::PersistedSettings;
use crate::traits::assets::IconAssets;
use crate::traits::channel::{MessageOutbox, SendError};
use crate::traits::device::DeviceServices;
use crate::traits::storage::{SettingsStore, StorageError};
use crate::traits::surface::{ColorMode, Region, Surface};

/// One recorded surface interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Text(Region, String<32>),
    TextColor(Region, Color),
    Background(Region, Color),
    Backdrop(Color),
    Hidden(Region, bool),
    Icon(IconId, u32, Palette),
    BatteryBar(u16, Color),
}

/// Surface that records every call it receives
pub struct RecordingSurface {
    pub calls: Vec<SurfaceCall, 128>,
    pub width: u16,
    pub mode: ColorMode,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            width: 144,
            mode: ColorMode::Color,
        }
    }

    fn record(&mut self, call: SurfaceCall) {
        self.calls.push(call).expect("surface call log full");
    }

    /// Most recent text pushed to a region
    pub fn last_text(&self, region: Region) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            SurfaceCall::Text(r, text) if *r == region => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    type Bitmap = TestBitmap;

    fn set_text(&mut self, region: Region, text: &str) {
        let mut copy = String::new();
        for c in text.chars() {
            let _ = copy.push(c);
        }
        self.record(SurfaceCall::Text(region, copy));
    }

    fn set_text_color(&mut self, region: Region, color: Color) {
        self.record(SurfaceCall::TextColor(region, color));
    }

    fn set_background(&mut self, region: Region, color: Color) {
        self.record(SurfaceCall::Background(region, color));
    }

    fn set_backdrop(&mut self, color: Color) {
        self.record(SurfaceCall::Backdrop(color));
    }

    fn set_hidden(&mut self, region: Region, hidden: bool) {
        self.record(SurfaceCall::Hidden(region, hidden));
    }

    fn show_icon(&mut self, bitmap: &TestBitmap, palette: Palette) {
        self.record(SurfaceCall::Icon(bitmap.id, bitmap.seq, palette));
    }

    fn battery_region_width(&self) -> u16 {
        self.width
    }

    fn draw_battery_bar(&mut self, fill_width: u16, color: Color) {
        self.record(SurfaceCall::BatteryBar(fill_width, color));
    }

    fn color_mode(&self) -> ColorMode {
        self.mode
    }
}

/// Bitmap handle that remembers which load produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestBitmap {
    pub id: IconId,
    pub seq: u32,
}

/// Asset loader that counts acquisitions and releases
pub struct CountingAssets {
    pub loads: u32,
    pub releases: u32,
}

impl CountingAssets {
    pub fn new() -> Self {
        Self {
            loads: 0,
            releases: 0,
        }
    }

    /// Bitmaps currently outstanding
    pub fn live(&self) -> i64 {
        i64::from(self.loads) - i64::from(self.releases)
    }
}

impl IconAssets for CountingAssets {
    type Bitmap = TestBitmap;

    fn load(&mut self, icon: IconId) -> TestBitmap {
        self.loads += 1;
        TestBitmap {
            id: icon,
            seq: self.loads,
        }
    }

    fn release(&mut self, _bitmap: TestBitmap) {
        self.releases += 1;
    }
}

/// In-memory settings store
pub struct MemoryStore {
    pub blob: Option<Vec<u8, SETTINGS_BLOB_MAX>>,
    pub writes: u32,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            blob: None,
            writes: 0,
            fail_writes: false,
        }
    }

    pub fn with_blob(bytes: &[u8]) -> Self {
        let mut blob = Vec::new();
        blob.extend_from_slice(bytes).expect("blob too large");
        Self {
            blob: Some(blob),
            writes: 0,
            fail_writes: false,
        }
    }

    /// Store preloaded with a serialized settings record
    pub fn holding(settings: &PersistedSettings) -> Self {
        let mut buffer = [0u8; SETTINGS_BLOB_MAX];
        let blob = postcard::to_slice(settings, &mut buffer).expect("settings serialize");
        Self::with_blob(blob)
    }

    pub fn failing() -> Self {
        Self {
            blob: None,
            writes: 0,
            fail_writes: true,
        }
    }
}

impl SettingsStore for MemoryStore {
    fn read(&mut self, buffer: &mut [u8]) -> Result<usize, StorageError> {
        match &self.blob {
            Some(blob) if blob.len() <= buffer.len() => {
                buffer[..blob.len()].copy_from_slice(blob);
                Ok(blob.len())
            }
            Some(_) => Err(StorageError::Capacity),
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, data: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io);
        }
        let mut blob = Vec::new();
        blob.extend_from_slice(data)
            .map_err(|_| StorageError::Capacity)?;
        self.blob = Some(blob);
        self.writes += 1;
        Ok(())
    }
}

/// Device services with a fixed clock style and a pulse counter
pub struct FakeDevice {
    pub use_24h: bool,
    pub pulses: u32,
}

impl FakeDevice {
    pub fn new(use_24h: bool) -> Self {
        Self { use_24h, pulses: 0 }
    }
}

impl DeviceServices for FakeDevice {
    fn is_24h_clock(&self) -> bool {
        self.use_24h
    }

    fn vibrate_double_pulse(&mut self) {
        self.pulses += 1;
    }
}

/// Outbound channel that counts pings
pub struct RecordingOutbox {
    pub sent: u32,
    pub fail: bool,
}

impl RecordingOutbox {
    pub fn new() -> Self {
        Self {
            sent: 0,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: 0,
            fail: true,
        }
    }
}

impl MessageOutbox for RecordingOutbox {
    fn send_refresh_request(&mut self) -> Result<(), SendError> {
        if self.fail {
            return Err(SendError::Closed);
        }
        self.sent += 1;
        Ok(())
    }
}
