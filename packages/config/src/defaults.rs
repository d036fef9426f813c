//! Built-in default configuration and preset catalog

use crate::model::{Configuration, ObserverConfig, PathConfig, Preset, SelectorConfig, ThemeColors};

pub const DEFAULT_PRESET_NAME: &str = "Default";

/// Configuration matching a stock OpenList deployment (Hope UI themes)
pub fn default_config() -> Configuration {
    Configuration {
        colors: ThemeColors {
            // Translucent white so a background image shows through
            light: "rgba(255, 255, 255, 0.8)".to_string(),
            dark: "rgb(32, 36, 37)".to_string(),
            // Hope UI grey; elements painted with it get recoloured
            specific_prefix: "rgba(132, 133, 141".to_string(),
        },
        selectors: SelectorConfig {
            light_theme: ".hope-ui-light".to_string(),
            dark_theme: ".hope-ui-dark".to_string(),
            ignored: vec![
                ".hope-tooltip".to_string(),
                ".hope-tooltip__arrow".to_string(),
                ".hope-checkbox__control".to_string(),
                ".hope-modal__overlay".to_string(),
                "button:not(.hope-menu__trigger)".to_string(),
                "svg".to_string(),
            ],
            root_element: "#root".to_string(),
        },
        paths: PathConfig {
            excluded: vec!["/@manage".to_string(), "/@login".to_string()],
        },
        observer: ObserverConfig {
            child_list: true,
            subtree: true,
            // ~60fps
            throttle_delay: 16,
        },
        debug: false,
    }
}

/// The fixed preset catalog, in display order
pub fn presets() -> Vec<Preset> {
    let base = default_config();

    let mut high_contrast = base.clone();
    high_contrast.colors.light = "rgba(255, 255, 255, 0.95)".to_string();
    high_contrast.colors.dark = "rgb(20, 24, 25)".to_string();

    let mut transparent = base.clone();
    transparent.colors.light = "rgba(255, 255, 255, 0.6)".to_string();
    transparent.colors.dark = "rgba(32, 36, 37, 0.8)".to_string();

    let mut performance = base.clone();
    performance.observer.throttle_delay = 100;

    vec![
        Preset {
            name: DEFAULT_PRESET_NAME.to_string(),
            description: "Standard styling that suits most OpenList deployments".to_string(),
            config: base,
        },
        Preset {
            name: "High Contrast".to_string(),
            description: "Higher contrast backgrounds for easier reading".to_string(),
            config: high_contrast,
        },
        Preset {
            name: "Transparent".to_string(),
            description: "More transparent panels that let the background image through"
                .to_string(),
            config: transparent,
        },
        Preset {
            name: "Performance".to_string(),
            description: "Restyles less often, for low-powered devices".to_string(),
            config: performance,
        },
    ]
}
