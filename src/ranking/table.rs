//! Static rank table for the built-in settings screens
//!
//! Screens are grouped into categories; every screen in a category shares
//! the category rank. Lower ranks sort first downstream.

use super::{RankingError, RankingProvider};
use crate::registry::types::Rank;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RANK_WIFI: Rank = 1;
pub const RANK_BT: Rank = 2;
pub const RANK_SIM: Rank = 3;
pub const RANK_DATA_USAGE: Rank = 4;
pub const RANK_WIRELESS: Rank = 5;
pub const RANK_HOME: Rank = 6;
pub const RANK_DISPLAY: Rank = 7;
pub const RANK_WALLPAPER: Rank = 8;
pub const RANK_NOTIFICATIONS: Rank = 9;
pub const RANK_MEMORY: Rank = 10;
pub const RANK_POWER_USAGE: Rank = 11;
pub const RANK_USERS: Rank = 12;
pub const RANK_LOCATION: Rank = 13;
pub const RANK_SECURITY: Rank = 14;
pub const RANK_IME: Rank = 15;
pub const RANK_PRIVACY: Rank = 16;
pub const RANK_DATE_TIME: Rank = 17;
pub const RANK_ACCESSIBILITY: Rank = 18;
pub const RANK_PRINTING: Rank = 19;
pub const RANK_DEVELOPMENT: Rank = 20;
pub const RANK_DEVICE_INFO: Rank = 21;

/// Rank for screens not listed in the table
pub const RANK_OTHERS: Rank = 1024;

const BUILTIN_RANKS: &[(&str, Rank)] = &[
    ("com.android.settings.wifi.WifiSettings", RANK_WIFI),
    ("com.android.settings.wifi.AdvancedWifiSettings", RANK_WIFI),
    ("com.android.settings.wifi.SavedAccessPointsWifiSettings", RANK_WIFI),
    ("com.android.settings.bluetooth.BluetoothSettings", RANK_BT),
    ("com.android.settings.sim.SimSettings", RANK_SIM),
    ("com.android.settings.DataUsageSummary", RANK_DATA_USAGE),
    ("com.android.settings.net.DataUsageMeteredSettings", RANK_DATA_USAGE),
    ("com.android.settings.WirelessSettings", RANK_WIRELESS),
    ("com.android.settings.HomeSettings", RANK_HOME),
    ("com.android.settings.DisplaySettings", RANK_DISPLAY),
    ("com.android.settings.WallpaperTypeSettings", RANK_WALLPAPER),
    ("com.android.settings.SoundSettings", RANK_NOTIFICATIONS),
    ("com.android.settings.notification.NotificationManagerSettings", RANK_NOTIFICATIONS),
    ("com.android.settings.notification.OtherSoundSettings", RANK_NOTIFICATIONS),
    ("com.android.settings.notification.ZenModeSettings", RANK_NOTIFICATIONS),
    ("com.android.settings.deviceinfo.Memory", RANK_MEMORY),
    ("com.android.settings.deviceinfo.UsbSettings", RANK_MEMORY),
    ("com.android.settings.fuelgauge.PowerUsageSummary", RANK_POWER_USAGE),
    ("com.android.settings.users.UserSettings", RANK_USERS),
    ("com.android.settings.location.LocationSettings", RANK_LOCATION),
    ("com.android.settings.SecuritySettings", RANK_SECURITY),
    ("com.android.settings.ScreenPinningSettings", RANK_SECURITY),
    ("com.android.settings.inputmethod.InputMethodAndLanguageSettings", RANK_IME),
    ("com.android.settings.voice.VoiceInputSettings", RANK_IME),
    ("com.android.settings.PrivacySettings", RANK_PRIVACY),
    ("com.android.settings.DateTimeSettings", RANK_DATE_TIME),
    ("com.android.settings.accessibility.AccessibilitySettings", RANK_ACCESSIBILITY),
    ("com.android.settings.print.PrintSettingsFragment", RANK_PRINTING),
    ("com.android.settings.DevelopmentSettings", RANK_DEVELOPMENT),
    ("com.android.settings.DeviceInfoSettings", RANK_DEVICE_INFO),
];

/// User-tunable ranking settings (part of the app config)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Rank given to identifiers missing from the table.
    /// `None` makes unlisted identifiers an error.
    #[serde(default = "default_fallback_rank")]
    pub fallback_rank: Option<Rank>,

    /// Per-identifier ranks that take precedence over the built-in table
    #[serde(default)]
    pub overrides: BTreeMap<String, Rank>,
}

fn default_fallback_rank() -> Option<Rank> {
    Some(RANK_OTHERS)
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            fallback_rank: default_fallback_rank(),
            overrides: BTreeMap::new(),
        }
    }
}

/// Table-driven [`RankingProvider`]
#[derive(Debug, Clone)]
pub struct RankTable {
    ranks: AHashMap<String, Rank>,
    fallback: Option<Rank>,
}

impl RankTable {
    /// Build the table from the built-in ranks plus config overrides
    pub fn new(config: &RankingConfig) -> Self {
        let mut ranks: AHashMap<String, Rank> = BUILTIN_RANKS
            .iter()
            .map(|(id, rank)| (id.to_string(), *rank))
            .collect();

        for (id, rank) in &config.overrides {
            ranks.insert(id.clone(), *rank);
        }

        Self {
            ranks,
            fallback: config.fallback_rank,
        }
    }

    /// Table with built-in ranks and the default fallback
    pub fn builtin() -> Self {
        Self::new(&RankingConfig::default())
    }

    /// Explicitly listed rank for an identifier, ignoring the fallback
    pub fn listed(&self, identifier: &str) -> Option<Rank> {
        self.ranks.get(identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl Default for RankTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RankingProvider for RankTable {
    fn rank(&self, identifier: &str) -> Result<Rank, RankingError> {
        self.listed(identifier)
            .or(self.fallback)
            .ok_or_else(|| RankingError::Unranked {
                identifier: identifier.to_string(),
            })
    }
}
