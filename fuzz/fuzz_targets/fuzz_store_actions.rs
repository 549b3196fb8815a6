#![no_main]

use std::rc::Rc;

use arbitrary::Arbitrary;
use folio_runtime::{AppearanceConfig, AppearanceContext, MemoryStorage, MemorySurface};
use folio_style::PresetId;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Action {
    Toggle,
    Preset(u8),
    Custom(String),
    Draft(String),
    Brightness(i32),
    Reset,
    Reload,
    CorruptRecord(String),
}

fuzz_target!(|actions: Vec<Action>| {
    if actions.len() > 256 {
        return;
    }
    let storage = MemoryStorage::new();
    let boot = |storage: &MemoryStorage| {
        let surface = MemorySurface::new();
        let ctx = AppearanceContext::new(
            AppearanceConfig::default(),
            Rc::new(storage.clone()),
            Rc::new(surface.clone()),
        );
        ctx.mount(None);
        (ctx, surface)
    };
    let (mut ctx, mut surface) = boot(&storage);

    for action in &actions {
        match action {
            Action::Toggle => {
                ctx.theme().toggle();
            }
            Action::Preset(idx) => ctx
                .appearance()
                .select_preset(PresetId::from_index(usize::from(*idx)).preset()),
            Action::Custom(hex) => {
                ctx.appearance().select_custom_color(hex);
            }
            Action::Draft(draft) => {
                ctx.appearance().set_custom_draft(draft);
            }
            Action::Brightness(offset) => {
                ctx.appearance().set_brightness(*offset);
            }
            Action::Reset => ctx.appearance().reset_to_default(),
            Action::Reload => (ctx, surface) = boot(&storage),
            Action::CorruptRecord(raw) => {
                use folio_runtime::StorageBackend;
                let _ = storage.set("portfolio-accent-colors", raw);
                (ctx, surface) = boot(&storage);
            }
        }

        let appearance = ctx.appearance();
        assert_eq!(surface.tones(), Some(appearance.current_tones()));
        assert!(appearance.brightness_range().contains(&appearance.brightness()));
        assert!(appearance.active_preset().is_well_formed());
    }
});
