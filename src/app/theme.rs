use leptos::prelude::*;
use web_sys::Storage;

use crate::theme::{self, PreferenceStore, StoreError, ThemeMode, ThemeResolver};

const DARK_CLASS: &str = "dark";

/// `window.localStorage`, looked up on every access since browsers may
/// withhold it (private windows, disabled site data).
pub struct BrowserStore;

impl BrowserStore {
    fn storage(&self) -> Result<Storage, StoreError> {
        window()
            .local_storage()
            .map_err(|e| StoreError::Read(format!("{e:?}")))?
            .ok_or(StoreError::Unavailable)
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Read(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}

/// `matchMedia` evaluated on the spot; only consulted when nothing valid is
/// stored.
fn os_prefers_dark() -> bool {
    theme::prefers_dark(|query| {
        window()
            .match_media(query)
            .ok()
            .flatten()
            .map(|list| list.matches())
    })
}

/// Handle to the page-wide display mode.
///
/// The resolver behind it is the only writer; components read [`mode`] and
/// ask for a [`toggle`].
///
/// [`mode`]: ThemeContext::mode
/// [`toggle`]: ThemeContext::toggle
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: ReadSignal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
    resolver: StoredValue<ThemeResolver<BrowserStore>>,
}

impl ThemeContext {
    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn toggle(&self) {
        let mut next = ThemeMode::default();
        self.resolver.update_value(|r| next = r.toggle_active());
        self.set_mode.set(next);
    }
}

/// Resolve the starting mode and keep the `dark` class on `<html>` in sync
/// with it.
pub fn provide_theme() {
    let mut resolver = ThemeResolver::new(BrowserStore);
    let initial = resolver.initialize(os_prefers_dark);
    let (mode, set_mode) = signal(initial);

    Effect::new(move |_| set_document_class(mode.get()));

    provide_context(ThemeContext {
        mode,
        set_mode,
        resolver: StoredValue::new(resolver),
    });
}

fn set_document_class(mode: ThemeMode) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(DARK_CLASS, mode.is_dark())
    {
        log::warn!("couldn't set document theme class: {e:?}");
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<ThemeContext>();
    view! {
        <button
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
            class="inline-flex h-9 w-9 items-center justify-center rounded-lg border border-slate-200 bg-white text-slate-900 shadow-sm transition-colors hover:bg-slate-50 dark:border-white/10 dark:bg-white/5 dark:text-white"
        >
            {move || if theme.mode().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
