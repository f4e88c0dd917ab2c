//! Static page bodies for the four routes. Pure presentation; the shell
//! decides which one is mounted.

use crate::icons::{
    icon_check, icon_code, icon_palette, icon_settings, icon_shield, icon_sparkles,
    icon_upload, icon_zap,
};
use leptos::*;

struct Feature {
    icon: View,
    title: &'static str,
    blurb: &'static str,
    accent: &'static str,
}

#[component]
pub fn HomePage() -> impl IntoView {
    let features = vec![
        Feature {
            icon: icon_zap().into_view(),
            title: "Lightning Fast",
            blurb: "Blazing performance with optimized rendering and smooth animations.",
            accent: "accent-amber",
        },
        Feature {
            icon: icon_palette().into_view(),
            title: "Beautiful Themes",
            blurb: "Three immersive scenes that cross-fade like changing weather.",
            accent: "accent-violet",
        },
        Feature {
            icon: icon_shield().into_view(),
            title: "Secure & Reliable",
            blurb: "Built with modern practices and rock-solid reliability.",
            accent: "accent-blue",
        },
        Feature {
            icon: icon_code().into_view(),
            title: "Developer Friendly",
            blurb: "Clean, maintainable code with documentation and examples.",
            accent: "accent-emerald",
        },
    ];

    let benefits = [
        "Ultra-realistic animated scenery",
        "Smooth glass morphism effects",
        "Fully responsive design",
        "Dark, Light & Rainy modes",
        "Easy customization",
        "Modern Rust & WebAssembly",
    ];

    view! {
        <div class="page">
            <section class="hero">
                <div class="hero-badge">
                    {icon_sparkles()}
                    <span>"Welcome to the Future"</span>
                </div>
                <h1 class="hero-title">"Lucidev"</h1>
                <p class="hero-subtitle">"Experience Web Design Like Never Before"</p>
                <p class="hero-copy">
                    "A next-generation shell featuring immersive themes, realistic glass \
                     morphism, and silky-smooth animations. Built for creators who demand \
                     excellence."
                </p>
                <div class="hero-actions">
                    <button class="btn primary">"Get Started"</button>
                    <button class="btn ghost">"View Documentation"</button>
                </div>
            </section>

            <section class="section">
                <div class="section-head">
                    <h2>"Powerful Features"</h2>
                    <p>"Everything you need to create stunning web experiences"</p>
                </div>
                <div class="feature-grid">
                    {features
                        .into_iter()
                        .map(|f| {
                            view! {
                                <div class="card feature-card">
                                    <div class=format!("feature-icon {}", f.accent)>{f.icon}</div>
                                    <h3>{f.title}</h3>
                                    <p>{f.blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="section">
                <div class="card benefits-card">
                    <h2>"Why Choose Lucidev?"</h2>
                    <ul class="benefit-list">
                        {benefits
                            .iter()
                            .map(|b| {
                                view! {
                                    <li class="benefit-item">
                                        <span class="benefit-check">{icon_check()}</span>
                                        <span>{*b}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn UserPage() -> impl IntoView {
    let stats = [
        ("Projects", "24"),
        ("Followers", "1.2k"),
        ("Following", "180"),
    ];

    view! {
        <div class="page">
            <section class="section">
                <div class="card profile-card">
                    <div class="avatar">"AR"</div>
                    <h2>"Alex Rivers"</h2>
                    <p class="profile-role">"Product Designer"</p>
                    <p class="hero-copy">
                        "Designing calm interfaces and chasing the perfect gradient. \
                         Currently somewhere between the clouds and the rain."
                    </p>
                    <div class="stat-row">
                        {stats
                            .iter()
                            .map(|(label, value)| {
                                view! {
                                    <div class="stat">
                                        <span class="stat-value">{*value}</span>
                                        <span class="stat-label">{*label}</span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="section">
                <div class="section-head">
                    <h2>"Upload"</h2>
                    <p>"Drop files anywhere in the zone below"</p>
                </div>
                <div class="card drop-zone">
                    <div class="drop-icon">{icon_upload()}</div>
                    <p class="drop-title">"Drag & drop your files here"</p>
                    <p class="drop-hint">"or"</p>
                    <button class="btn primary">"Browse Files"</button>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let rows = [
        ("Notifications", "Email me about activity and mentions"),
        ("Reduced motion", "Tone down scenery animations"),
        ("Public profile", "Let other members find your page"),
    ];

    view! {
        <div class="page">
            <section class="section">
                <div class="section-head">
                    <h2>"Settings"</h2>
                    <p>"Tune the shell to your liking"</p>
                </div>
                <div class="card settings-card">
                    <div class="settings-row settings-title">
                        {icon_settings()}
                        <span>"Preferences"</span>
                    </div>
                    {rows
                        .iter()
                        .map(|(title, hint)| {
                            view! {
                                <div class="settings-row">
                                    <div class="settings-text">
                                        <span class="settings-name">{*title}</span>
                                        <span class="settings-hint">{*hint}</span>
                                    </div>
                                    <label class="switch">
                                        <input type="checkbox"/>
                                        <span class="switch-track"></span>
                                    </label>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
