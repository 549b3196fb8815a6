//! Native host setup through the facade.

use std::rc::Rc;

use folio::prelude::*;
use folio::{MemorySurface, native};

#[test]
fn open_mounts_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let surface = MemorySurface::new();
    let ctx = native::open(
        None,
        &dir.path().join("state.json"),
        Rc::new(surface.clone()),
        Some(ThemeMode::Dark),
    )
    .unwrap();

    assert!(ctx.is_mounted());
    assert_eq!(ctx.theme().mode(), ThemeMode::Dark);
    assert_eq!(
        surface.tones().as_ref(),
        Some(&PresetId::DustyRose.preset().dark)
    );
}

#[test]
fn open_reads_toml_and_json_configs() {
    let dir = tempfile::tempdir().unwrap();
    let toml_path = dir.path().join("folio.toml");
    std::fs::write(&toml_path, "default_preset = \"Slate\"\n").unwrap();
    let json_path = dir.path().join("folio.json");
    std::fs::write(&json_path, r#"{ "default_preset": "Peach" }"#).unwrap();

    let from_toml = native::open(
        Some(&toml_path),
        &dir.path().join("a.json"),
        Rc::new(MemorySurface::new()),
        None,
    )
    .unwrap();
    assert_eq!(from_toml.appearance().active_preset().name, "Slate");

    let from_json = native::open(
        Some(&json_path),
        &dir.path().join("b.json"),
        Rc::new(MemorySurface::new()),
        None,
    )
    .unwrap();
    assert_eq!(from_json.appearance().active_preset().name, "Peach");
}

#[test]
fn state_persists_between_opens() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");

    let first = native::open(None, &state, Rc::new(MemorySurface::new()), None).unwrap();
    first.appearance().select_custom_color("#5A7D9A");
    first.theme().toggle();
    drop(first);

    let second = native::open(None, &state, Rc::new(MemorySurface::new()), None).unwrap();
    assert!(second.appearance().is_custom());
    assert_eq!(second.theme().mode(), ThemeMode::Dark);
}

#[test]
fn corrupt_storage_file_falls_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "{{{").unwrap();

    let ctx = native::open(None, &state, Rc::new(MemorySurface::new()), None).unwrap();
    assert!(ctx.is_mounted());
    assert_eq!(ctx.appearance().active_preset().name, "Dusty Rose");
}

#[test]
fn invalid_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.toml");
    std::fs::write(&path, "brightness_max = -4\n").unwrap();

    let result = native::open(
        Some(&path),
        &dir.path().join("state.json"),
        Rc::new(MemorySurface::new()),
        None,
    );
    assert!(matches!(result, Err(Error::Config(_))));
}
