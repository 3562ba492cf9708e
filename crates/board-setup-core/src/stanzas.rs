use crate::types::{Boundary, Fallback, Stanza};

pub const BOARD_LABEL: &str = "ESP32C3_SUPERMINI";

pub const CMAKE_LISTS: Stanza = Stanza {
    file_name: "CMakeLists.txt",
    label: BOARD_LABEL,
    guard: "CONFIG_BOARD_TYPE_ESP32C3_SUPERMINI",
    anchor: "elseif(CONFIG_BOARD_TYPE_HU_087)",
    block: "elseif(CONFIG_BOARD_TYPE_ESP32C3_SUPERMINI)
    set(BOARD_TYPE \"esp32c3-supermini\")
    set(BUILTIN_TEXT_FONT font_puhui_basic_14_1)
    set(BUILTIN_ICON_FONT font_awesome_14_1)
",
    boundary: Boundary::ClosingKeyword("endif()"),
    fallback: Fallback::Skip,
};

pub const KCONFIG_PROJBUILD: Stanza = Stanza {
    file_name: "Kconfig.projbuild",
    label: BOARD_LABEL,
    guard: "BOARD_TYPE_ESP32C3_SUPERMINI",
    anchor: "config BOARD_TYPE_HU_087",
    block: "    config BOARD_TYPE_ESP32C3_SUPERMINI
        bool \"ESP32-C3 SuperMini (MAX98357A + INMP441 + ST7789)\"
        depends on IDF_TARGET_ESP32C3
",
    boundary: Boundary::NextEntry {
        entry_prefix: "config ",
        closing: "endchoice",
    },
    fallback: Fallback::AnchorOffset,
};

/// Applied in this order; the build listing goes first.
pub const BOARD_STANZAS: [Stanza; 2] = [CMAKE_LISTS, KCONFIG_PROJBUILD];
