//! The compiled-in list of search-indexable settings screens
//!
//! Order is preserved from the table below. Alternate manifests can be read
//! from JSON (an array of [`ManifestEntry`]) for inspection and testing.

use crate::registry::types::{ManifestEntry, NO_DATA_RES_ID, ResId};
use crate::resources::{drawable, xml};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const BUILTIN: &[(&str, ResId, ResId)] = &[
    ("com.android.settings.wifi.WifiSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_WIRELESS),
    (
        "com.android.settings.wifi.AdvancedWifiSettings",
        xml::WIFI_ADVANCED_SETTINGS,
        drawable::IC_SETTINGS_WIRELESS,
    ),
    (
        "com.android.settings.wifi.SavedAccessPointsWifiSettings",
        xml::WIFI_DISPLAY_SAVED_ACCESS_POINTS,
        drawable::IC_SETTINGS_WIRELESS,
    ),
    (
        "com.android.settings.bluetooth.BluetoothSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_BLUETOOTH2,
    ),
    ("com.android.settings.sim.SimSettings", NO_DATA_RES_ID, drawable::IC_SIM_SD),
    ("com.android.settings.DataUsageSummary", NO_DATA_RES_ID, drawable::IC_SETTINGS_DATA_USAGE),
    (
        "com.android.settings.net.DataUsageMeteredSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_DATA_USAGE,
    ),
    ("com.android.settings.WirelessSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_MORE),
    (
        "com.android.settings.razer.LockScreenSettings",
        xml::RAZER_LOCKSCREEN_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    ("com.android.settings.HomeSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_HOME),
    ("com.android.settings.DisplaySettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_DISPLAY),
    ("com.android.settings.SoundSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_NOTIFICATIONS),
    (
        "com.android.settings.notification.NotificationManagerSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_NOTIFICATIONS,
    ),
    (
        "com.android.settings.notification.OtherSoundSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_NOTIFICATIONS,
    ),
    (
        "com.android.settings.notification.ZenModeSettings",
        xml::ZEN_MODE_SETTINGS,
        drawable::IC_SETTINGS_NOTIFICATIONS,
    ),
    ("com.android.settings.deviceinfo.Memory", NO_DATA_RES_ID, drawable::IC_SETTINGS_STORAGE),
    (
        "com.android.settings.deviceinfo.UsbSettings",
        xml::USB_SETTINGS,
        drawable::IC_SETTINGS_STORAGE,
    ),
    (
        "com.android.settings.fuelgauge.PowerUsageSummary",
        xml::POWER_USAGE_SUMMARY,
        drawable::IC_SETTINGS_BATTERY,
    ),
    ("com.android.settings.users.UserSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_MULTIUSER),
    (
        "com.android.settings.location.LocationSettings",
        xml::LOCATION_SETTINGS,
        drawable::IC_SETTINGS_LOCATION,
    ),
    ("com.android.settings.SecuritySettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_SECURITY),
    ("com.android.settings.ScreenPinningSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_SECURITY),
    (
        "com.android.settings.inputmethod.InputMethodAndLanguageSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_LANGUAGE,
    ),
    (
        "com.android.settings.voice.VoiceInputSettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_LANGUAGE,
    ),
    ("com.android.settings.PrivacySettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_BACKUP),
    (
        "com.android.settings.DateTimeSettings",
        xml::DATE_TIME_PREFS,
        drawable::IC_SETTINGS_DATE_TIME,
    ),
    (
        "com.android.settings.accessibility.AccessibilitySettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_ACCESSIBILITY,
    ),
    (
        "com.android.settings.print.PrintSettingsFragment",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_PRINT,
    ),
    ("com.android.settings.DevelopmentSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_DEVELOPMENT),
    ("com.android.settings.DeviceInfoSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_ABOUT),
    ("com.android.settings.ButtonSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_BUTTONS),
    (
        "com.android.settings.cyanogenmod.StatusBarSettings",
        xml::STATUS_BAR_SETTINGS,
        drawable::IC_SETTINGS_EXTDESK_HIDENAVBAR,
    ),
    (
        "com.android.settings.cyanogenmod.NotificationDrawerSettings",
        xml::NOTIFICATION_DRAWER_SETTINGS,
        drawable::IC_SETTINGS_NOTIFICATION_DRAWER,
    ),
    (
        "com.android.settings.cyanogenmod.PrivacySettings",
        NO_DATA_RES_ID,
        drawable::IC_SETTINGS_PRIVACY,
    ),
    ("com.android.settings.razer.AmbientSettings", NO_DATA_RES_ID, drawable::IC_SETTINGS_DISPLAY),
    (
        "com.android.settings.razer.RecentsSettings",
        xml::RECENTS_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.NavbarSettings",
        xml::NAVBAR_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.StatusBarClockStyle",
        xml::STATUS_BAR_CLOCK_STYLE,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.StatusBarBatteryStatusSettings",
        xml::STATUS_BAR_BATTERY_STATUS_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.RazerDisplaySettings",
        xml::RAZER_DISPLAY_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.BatteryStyle",
        xml::RAZER_BATTERY_STYLE,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.RazerSoundSettings",
        xml::RAZER_SOUND_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.NavigationSettings",
        xml::RAZER_NAVIGATION_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.InterfaceSettings",
        xml::RAZER_INTERFACE_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.AnimationSettings",
        xml::ANIMATION_SETTINGS,
        drawable::IC_RAZER_INTERFACE,
    ),
    (
        "com.android.settings.razer.SmartControl",
        xml::RAZER_SMARTCONTROL,
        drawable::IC_SETTINGS_SMARTCONTROL,
    ),
];

/// The built-in manifest, in declaration order
pub fn builtin_manifest() -> Vec<ManifestEntry> {
    BUILTIN
        .iter()
        .map(|&(identifier, data_ref, icon_ref)| ManifestEntry::new(identifier, data_ref, icon_ref))
        .collect()
}

/// Parse a manifest from a JSON array
pub fn parse_manifest(json: &str) -> Result<Vec<ManifestEntry>> {
    serde_json::from_str(json).context("Failed to parse manifest")
}

/// Load a manifest file
pub fn load_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    parse_manifest(&content).with_context(|| format!("Invalid manifest {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{drawable_name, xml_name};
    use std::collections::HashSet;

    #[test]
    fn test_builtin_identifiers_unique() {
        let manifest = builtin_manifest();
        let ids: HashSet<_> = manifest.iter().map(|e| e.identifier.as_str()).collect();
        assert_eq!(manifest.len(), 46);
        assert_eq!(ids.len(), manifest.len());
        assert!(manifest.iter().all(|e| !e.identifier.is_empty()));
    }

    #[test]
    fn test_builtin_references_resolve() {
        for entry in builtin_manifest() {
            assert!(
                drawable_name(entry.icon_ref).is_some(),
                "{} has unknown icon",
                entry.identifier
            );
            if entry.data_ref != NO_DATA_RES_ID {
                assert!(
                    xml_name(entry.data_ref).is_some(),
                    "{} has unknown data ref",
                    entry.identifier
                );
            }
        }
    }

    #[test]
    fn test_both_privacy_screens_registered() {
        let manifest = builtin_manifest();
        let find = |id: &str| manifest.iter().find(|e| e.identifier == id).cloned();

        let cm = find("com.android.settings.cyanogenmod.PrivacySettings")
            .expect("cyanogenmod privacy screen in manifest");
        assert_eq!(cm.data_ref, NO_DATA_RES_ID);
        assert_eq!(cm.icon_ref, drawable::IC_SETTINGS_PRIVACY);

        let aosp =
            find("com.android.settings.PrivacySettings").expect("privacy screen in manifest");
        assert_eq!(aosp.icon_ref, drawable::IC_SETTINGS_BACKUP);
    }

    #[test]
    fn test_builtin_order_preserved() {
        let manifest = builtin_manifest();
        assert_eq!(manifest[0].identifier, "com.android.settings.wifi.WifiSettings");
        assert_eq!(
            manifest.last().unwrap().identifier,
            "com.android.settings.razer.SmartControl"
        );
    }

    #[test]
    fn test_parse_manifest() {
        let json = r#"[
            {"identifier": "wifi.Settings", "icon_ref": 10},
            {"identifier": "usb.Settings", "data_ref": 5, "icon_ref": 11}
        ]"#;
        let manifest = parse_manifest(json).unwrap();
        assert_eq!(
            manifest,
            vec![
                ManifestEntry::new("wifi.Settings", NO_DATA_RES_ID, 10),
                ManifestEntry::new("usb.Settings", 5, 11),
            ]
        );
    }

    #[test]
    fn test_parse_manifest_rejects_garbage() {
        assert!(parse_manifest("{}").is_err());
        assert!(parse_manifest(r#"[{"identifier": "a"}]"#).is_err());
    }
}
