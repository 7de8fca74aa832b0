use leptos::prelude::*;
use web_sys::window;

const COLLAPSED_KEY: &str = "sidebar_collapsed";

/// Sidebar collapse preference — the only piece of UI state that
/// survives a reload.
#[derive(Clone, Copy)]
pub struct SidebarState {
    pub collapsed: RwSignal<bool>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self {
            collapsed: RwSignal::new(read_flag()),
        }
    }

    pub fn toggle(&self) {
        let next = !self.collapsed.get_untracked();
        self.collapsed.set(next);
        write_flag(next);
    }
}

impl Default for SidebarState {
    fn default() -> Self {
        Self::new()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read_flag() -> bool {
    get_local_storage()
        .and_then(|s| s.get_item(COLLAPSED_KEY).ok().flatten())
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn write_flag(collapsed: bool) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(COLLAPSED_KEY, if collapsed { "1" } else { "0" });
    }
}
