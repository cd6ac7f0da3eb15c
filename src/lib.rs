#[cfg(feature = "csr")]
pub mod app;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod site;
pub mod skills;
pub mod theme;

#[cfg(feature = "csr")]
pub fn mount() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_ok() {
        log::info!("portfolio built {}", crate::site::BUILD_TIME);
    }
    leptos::mount::mount_to_body(App);
}
