//! Property-based invariants for the appearance stores.
//!
//! Drives a mounted context through random user actions and checks after
//! every step:
//!
//! 1. The surface shows exactly the active preset's triple for the current mode
//! 2. Brightness stays inside the configured range
//! 3. `is_custom` holds only for presets derived from a picked color
//! 4. The persisted record (when present) reloads to the active preset

use std::rc::Rc;

use folio_runtime::{AppearanceConfig, AppearanceContext, MemoryStorage, MemorySurface};
use folio_style::{PalettePreset, PresetId, Rgb};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Toggle,
    Preset(usize),
    Custom(String),
    Draft(String),
    Brightness(i32),
    Reset,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Toggle),
        (0usize..8).prop_map(Action::Preset),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| Action::Custom(Rgb::new(r, g, b).to_hex())),
        "#?[0-9A-Fa-fxz]{0,7}".prop_map(Action::Draft),
        (-80i32..80).prop_map(Action::Brightness),
        Just(Action::Reset),
    ]
}

fn apply(ctx: &AppearanceContext, action: &Action) {
    let appearance = ctx.appearance();
    match action {
        Action::Toggle => {
            ctx.theme().toggle();
        }
        Action::Preset(idx) => appearance.select_preset(PresetId::from_index(*idx).preset()),
        Action::Custom(hex) => {
            appearance.select_custom_color(hex);
        }
        Action::Draft(draft) => {
            appearance.set_custom_draft(draft);
        }
        Action::Brightness(offset) => {
            appearance.set_brightness(*offset);
        }
        Action::Reset => appearance.reset_to_default(),
    }
}

proptest! {
    #[test]
    fn stores_stay_consistent(actions in prop::collection::vec(action(), 1..40)) {
        let storage = MemoryStorage::new();
        let surface = MemorySurface::new();
        let ctx = AppearanceContext::new(
            AppearanceConfig::default(),
            Rc::new(storage.clone()),
            Rc::new(surface.clone()),
        );
        ctx.mount(None);

        for action in &actions {
            apply(&ctx, action);

            let appearance = ctx.appearance();
            let mode = ctx.theme().mode();
            prop_assert_eq!(appearance.mode(), mode);
            prop_assert_eq!(surface.tones(), Some(appearance.current_tones()));
            prop_assert!(appearance.brightness_range().contains(&appearance.brightness()));

            let state = appearance.state();
            if state.is_custom {
                prop_assert!(state.preset.is_custom());
            }
            prop_assert!(state.preset.is_well_formed());

            if let Some(raw) = storage.peek("portfolio-accent-colors") {
                let stored: PalettePreset = serde_json::from_str(&raw).unwrap();
                prop_assert_eq!(stored, state.preset);
            }
        }
    }
}
