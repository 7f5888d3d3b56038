//! High score persistence over LocalStorage.
//!
//! A single integer stored as a base-10 string under the primary key, with
//! a fallback read from the key used by earlier builds. Anything missing or
//! non-numeric degrades to 0 rather than failing.

pub const STORAGE_KEY: &str = "duck-dash-high-score";
pub const LEGACY_STORAGE_KEY: &str = "pixel-runner-high-score";

/// Resolve a stored high score from the primary value, falling back to the
/// legacy value only when the primary key is absent.
pub fn resolve_high_score(primary: Option<&str>, legacy: Option<&str>) -> u32 {
    primary
        .or(legacy)
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

/// A finished run updates the high score only when it beats it.
pub fn record_run(high_score: u32, run_score: u32) -> Option<u32> {
    (run_score > high_score).then_some(run_score)
}

/// Load the persisted high score (WASM only).
#[cfg(target_arch = "wasm32")]
pub fn load() -> u32 {
    let Some(storage) = local_storage() else {
        return 0;
    };
    let primary = storage.get_item(STORAGE_KEY).ok().flatten();
    let legacy = storage.get_item(LEGACY_STORAGE_KEY).ok().flatten();
    let value = resolve_high_score(primary.as_deref(), legacy.as_deref());
    log::info!("loaded high score {value}");
    value
}

/// Persist a new high score under the primary key and drop the legacy key
/// now that the value has migrated (WASM only).
#[cfg(target_arch = "wasm32")]
pub fn save(value: u32) {
    let Some(storage) = local_storage() else {
        return;
    };
    let _ = storage.set_item(STORAGE_KEY, &value.to_string());
    let _ = storage.remove_item(LEGACY_STORAGE_KEY);
    log::info!("saved high score {value}");
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
}

/// Native stubs so the crate links under plain `cargo test`.
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> u32 {
    0
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_value: u32) {}
