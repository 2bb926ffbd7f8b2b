//! Compiled-in resource references
//!
//! Data references point at XML preference screens, icon references at
//! drawables. The registry never interprets these values; the names here
//! exist so the manifest can be written symbolically and so output can show
//! something readable.

use crate::registry::types::{NO_DATA_RES_ID, ResId};

macro_rules! resource_group {
    ($(#[$meta:meta])* $module:ident { $($name:ident = $id:literal,)* }) => {
        $(#[$meta])*
        pub mod $module {
            use super::ResId;

            $(pub const $name: ResId = $id;)*

            pub(crate) const NAMES: &[(ResId, &str)] = &[$(($name, stringify!($name)),)*];
        }
    };
}

resource_group! {
    /// Preference screen definitions used as external data sources
    xml {
        WIFI_ADVANCED_SETTINGS = 0x7f15_0001,
        WIFI_DISPLAY_SAVED_ACCESS_POINTS = 0x7f15_0002,
        RAZER_LOCKSCREEN_SETTINGS = 0x7f15_0003,
        ZEN_MODE_SETTINGS = 0x7f15_0004,
        USB_SETTINGS = 0x7f15_0005,
        POWER_USAGE_SUMMARY = 0x7f15_0006,
        LOCATION_SETTINGS = 0x7f15_0007,
        DATE_TIME_PREFS = 0x7f15_0008,
        STATUS_BAR_SETTINGS = 0x7f15_0009,
        NOTIFICATION_DRAWER_SETTINGS = 0x7f15_000a,
        RECENTS_SETTINGS = 0x7f15_000b,
        NAVBAR_SETTINGS = 0x7f15_000c,
        STATUS_BAR_CLOCK_STYLE = 0x7f15_000d,
        STATUS_BAR_BATTERY_STATUS_SETTINGS = 0x7f15_000e,
        RAZER_DISPLAY_SETTINGS = 0x7f15_000f,
        RAZER_BATTERY_STYLE = 0x7f15_0010,
        RAZER_SOUND_SETTINGS = 0x7f15_0011,
        RAZER_NAVIGATION_SETTINGS = 0x7f15_0012,
        RAZER_INTERFACE_SETTINGS = 0x7f15_0013,
        ANIMATION_SETTINGS = 0x7f15_0014,
        RAZER_SMARTCONTROL = 0x7f15_0015,
    }
}

resource_group! {
    /// Icons shown next to search results
    drawable {
        IC_SETTINGS_WIRELESS = 0x7f08_0001,
        IC_SETTINGS_BLUETOOTH2 = 0x7f08_0002,
        IC_SIM_SD = 0x7f08_0003,
        IC_SETTINGS_DATA_USAGE = 0x7f08_0004,
        IC_SETTINGS_MORE = 0x7f08_0005,
        IC_RAZER_INTERFACE = 0x7f08_0006,
        IC_SETTINGS_HOME = 0x7f08_0007,
        IC_SETTINGS_DISPLAY = 0x7f08_0008,
        IC_SETTINGS_NOTIFICATIONS = 0x7f08_0009,
        IC_SETTINGS_STORAGE = 0x7f08_000a,
        IC_SETTINGS_BATTERY = 0x7f08_000b,
        IC_SETTINGS_MULTIUSER = 0x7f08_000c,
        IC_SETTINGS_LOCATION = 0x7f08_000d,
        IC_SETTINGS_SECURITY = 0x7f08_000e,
        IC_SETTINGS_LANGUAGE = 0x7f08_000f,
        IC_SETTINGS_BACKUP = 0x7f08_0010,
        IC_SETTINGS_DATE_TIME = 0x7f08_0011,
        IC_SETTINGS_ACCESSIBILITY = 0x7f08_0012,
        IC_SETTINGS_PRINT = 0x7f08_0013,
        IC_SETTINGS_DEVELOPMENT = 0x7f08_0014,
        IC_SETTINGS_ABOUT = 0x7f08_0015,
        IC_SETTINGS_BUTTONS = 0x7f08_0016,
        IC_SETTINGS_EXTDESK_HIDENAVBAR = 0x7f08_0017,
        IC_SETTINGS_NOTIFICATION_DRAWER = 0x7f08_0018,
        IC_SETTINGS_SMARTCONTROL = 0x7f08_0019,
        IC_SETTINGS_PRIVACY = 0x7f08_001a,
    }
}

fn lookup(names: &[(ResId, &'static str)], id: ResId) -> Option<&'static str> {
    names.iter().find(|(res, _)| *res == id).map(|(_, name)| *name)
}

/// Symbolic name of a data (xml) resource
pub fn xml_name(id: ResId) -> Option<&'static str> {
    lookup(xml::NAMES, id)
}

/// Symbolic name of an icon (drawable) resource
pub fn drawable_name(id: ResId) -> Option<&'static str> {
    lookup(drawable::NAMES, id)
}

/// Human-readable form of a data reference: `-` for the sentinel,
/// `xml/<name>` when known, hex otherwise
pub fn describe_data_ref(id: ResId) -> String {
    if id == NO_DATA_RES_ID {
        return "-".to_string();
    }
    describe("xml", xml_name(id), id)
}

/// Human-readable form of an icon reference
pub fn describe_icon_ref(id: ResId) -> String {
    describe("drawable", drawable_name(id), id)
}

fn describe(kind: &str, name: Option<&str>, id: ResId) -> String {
    match name {
        Some(name) => format!("{}/{}", kind, name.to_ascii_lowercase()),
        None => format!("{:#010x}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_non_sentinel() {
        let mut seen = HashSet::new();
        for (id, name) in xml::NAMES.iter().chain(drawable::NAMES) {
            assert_ne!(*id, NO_DATA_RES_ID, "{} uses the sentinel", name);
            assert!(seen.insert(*id), "{} reuses id {:#x}", name, id);
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(xml_name(xml::USB_SETTINGS), Some("USB_SETTINGS"));
        assert_eq!(drawable_name(drawable::IC_SIM_SD), Some("IC_SIM_SD"));
        assert_eq!(xml_name(drawable::IC_SIM_SD), None);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe_data_ref(NO_DATA_RES_ID), "-");
        assert_eq!(describe_data_ref(xml::ZEN_MODE_SETTINGS), "xml/zen_mode_settings");
        assert_eq!(
            describe_icon_ref(drawable::IC_SETTINGS_WIRELESS),
            "drawable/ic_settings_wireless"
        );
        assert_eq!(describe_icon_ref(0x1234), "0x00001234");
    }
}
