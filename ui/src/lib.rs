pub mod app;
pub mod icons;
pub mod pages;
pub mod scene;
pub mod sidebar;
pub mod state;
pub mod theme;
pub mod viewport;

pub use app::App;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use leptos::*;
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use wasm_bindgen::prelude::*;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <App/> });
}
