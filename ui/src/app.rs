use crate::icons::icon_menu;
use crate::pages::{HomePage, SettingsPage, UploadPage, UserPage};
use crate::scene::BackgroundScenes;
use crate::sidebar::Sidebar;
use crate::state::provide_shell_ctx;
use crate::theme::GLOBAL_CSS;
use crate::viewport::use_viewport_monitor;
use app_shell::Theme;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = provide_shell_ctx();
    let shell = ctx.shell;

    // Viewport monitor feeds the shell; entering mobile force-closes the
    // sidebar inside set_mobile.
    use_viewport_monitor(move |is_mobile| shell.update(|s| s.set_mobile(is_mobile)));

    let theme_class = create_memo(move |_| {
        shell.with(|s| match s.theme {
            Theme::Light => "shell-app light-theme",
            Theme::Dark => "shell-app",
            Theme::Rainy => "shell-app rainy-theme",
        })
    });
    let main_class = create_memo(move |_| shell.with(|s| s.main_class()));
    let show_menu_button = move || shell.with(|s| s.is_mobile && !s.sidebar_open);
    let show_overlay = move || shell.with(|s| s.is_mobile && s.sidebar_open);

    view! {
        <Style>{GLOBAL_CSS}</Style>
        <Router>
            <div class=theme_class>
                <BackgroundScenes/>

                <Show when=show_menu_button>
                    <button
                        class="menu-button"
                        title="Open menu"
                        on:click=move |_| shell.update(|s| s.toggle_sidebar())
                    >
                        {icon_menu()}
                    </button>
                </Show>

                // Dimmed page behind the mobile overlay sidebar; clicking it
                // closes the sidebar.
                <Show when=show_overlay>
                    <div
                        class="overlay"
                        on:click=move |_| shell.update(|s| s.toggle_sidebar())
                    ></div>
                </Show>

                <main class=main_class>
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path="/home"/> }/>
                        <Route path="/home" view=HomePage/>
                        <Route path="/user" view=UserPage/>
                        <Route path="/upload" view=UploadPage/>
                        <Route path="/settings" view=SettingsPage/>
                        <Route path="/*any" view=|| view! { <Redirect path="/home"/> }/>
                    </Routes>
                </main>

                <Sidebar/>
            </div>
        </Router>
    }
}
