use crate::icons::{
    icon_close, icon_cloud_rain, icon_github, icon_home, icon_lightbulb, icon_moon,
    icon_settings, icon_sun, icon_upload, icon_user,
};
use crate::state::use_shell_ctx;
use app_shell::{NavRoute, SidebarMode, Theme};
use leptos::*;
use leptos_router::use_location;

fn route_icon(route: NavRoute) -> View {
    match route {
        NavRoute::Home => icon_home().into_view(),
        NavRoute::User => icon_user().into_view(),
        NavRoute::Upload => icon_upload().into_view(),
        NavRoute::Settings => icon_settings().into_view(),
    }
}

fn theme_icon(theme: Theme) -> View {
    match theme {
        Theme::Light => icon_sun().into_view(),
        Theme::Dark => icon_moon().into_view(),
        Theme::Rainy => icon_cloud_rain().into_view(),
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = use_shell_ctx().shell;
    let location = use_location();
    let pathname = location.pathname;

    let aside_class = create_memo(move |_| {
        shell.with(|s| match s.sidebar_mode() {
            SidebarMode::Open => "sidebar open",
            SidebarMode::CollapsedRail => "sidebar rail",
            SidebarMode::Hidden => "sidebar hidden",
        })
    });
    let is_open = create_memo(move |_| shell.with(|s| s.sidebar_open));
    let theme = create_memo(move |_| shell.with(|s| s.theme));

    let nav_links = NavRoute::ALL
        .iter()
        .copied()
        .map(|route| {
            let link_class = move || {
                if NavRoute::from_path(&pathname.get()) == Some(route) {
                    "nav-link active"
                } else {
                    "nav-link"
                }
            };
            view! {
                // Router intercepts same-origin anchor clicks, so plain
                // anchors stay client-side.
                <a href=route.path() class=link_class title=route.label()>
                    {route_icon(route)}
                    <Show when=move || is_open.get()>
                        <span class="nav-label">{route.label()}</span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    view! {
        <aside class=aside_class>
            <div class="sidebar-glass">
                <div class="sidebar-header">
                    <Show
                        when=move || is_open.get()
                        // Collapsed rail: the logo is the expand affordance.
                        fallback=move || {
                            view! {
                                <button
                                    class="brand-badge as-button"
                                    title="Expand sidebar"
                                    on:click=move |_| shell.update(|s| s.toggle_sidebar())
                                >
                                    {icon_lightbulb()}
                                </button>
                            }
                        }
                    >
                        <div class="brand-row">
                            <div class="brand-badge">{icon_lightbulb()}</div>
                            <span class="brand-title">"Lucidev"</span>
                        </div>
                        <button
                            class="ghost-button"
                            title="Collapse sidebar"
                            on:click=move |_| shell.update(|s| s.toggle_sidebar())
                        >
                            {icon_close()}
                        </button>
                    </Show>
                </div>

                <nav class="sidebar-nav">{nav_links}</nav>

                <div class="sidebar-footer">
                    <button
                        class="nav-link"
                        title=move || theme.get().label()
                        on:click=move |_| shell.update(|s| s.cycle_theme())
                    >
                        {move || theme_icon(theme.get())}
                        <Show when=move || is_open.get()>
                            <span class="nav-label">{move || theme.get().label()}</span>
                        </Show>
                    </button>
                    <a
                        class="nav-link"
                        href="https://github.com"
                        target="_blank"
                        rel="noreferrer"
                        title="GitHub"
                    >
                        {icon_github()}
                        <Show when=move || is_open.get()>
                            <span class="nav-label">"GitHub"</span>
                        </Show>
                    </a>
                </div>
            </div>
        </aside>
    }
}
