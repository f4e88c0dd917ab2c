//! Decorative background scenery. All three scenes stay mounted; the root
//! theme class cross-fades them via an opacity transition.

use crate::state::use_shell_ctx;
use app_shell::Theme;
use leptos::*;

#[cfg(target_arch = "wasm32")]
fn rand_unit() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn rand_unit() -> f64 {
    use std::cell::Cell;
    thread_local! {
        static SEED: Cell<u64> = const { Cell::new(0x9e37_79b9_7f4a_7c15) };
    }
    SEED.with(|s| {
        let mut x = s.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        s.set(x);
        (x >> 11) as f64 / (1u64 << 53) as f64
    })
}

/// Inline style for one water droplet clinging to the window glass.
fn droplet_style() -> String {
    format!(
        "left:{:.1}%;top:{:.1}%;animation-delay:{:.2}s;width:{:.0}px;height:{:.0}px;",
        rand_unit() * 100.0,
        rand_unit() * 100.0,
        rand_unit() * 3.0,
        3.0 + rand_unit() * 6.0,
        20.0 + rand_unit() * 40.0,
    )
}

/// Inline style for one falling rain streak.
fn streak_style() -> String {
    format!(
        "left:{:.1}%;animation-delay:{:.2}s;animation-duration:{:.2}s;opacity:{:.2};",
        rand_unit() * 100.0,
        rand_unit() * 2.0,
        0.4 + rand_unit() * 0.3,
        0.3 + rand_unit() * 0.5,
    )
}

#[component]
pub fn BackgroundScenes() -> impl IntoView {
    let shell = use_shell_ctx().shell;
    let theme = create_memo(move |_| shell.with(|s| s.theme));

    // Randomized once per mount; re-randomizing on theme change would make
    // the rain jump mid-fade.
    let droplets: Vec<String> = (0..25).map(|_| droplet_style()).collect();
    let streaks: Vec<String> = (0..120).map(|_| streak_style()).collect();

    view! {
        <div class="backdrop">
            // Daylight sky: layered clouds and a hazy sun.
            <div class="scene scene-light" class:visible=move || theme.get() == Theme::Light>
                <div class="sky-gradient"></div>
                <div class="sky-haze"></div>
                <div class="cloud-field">
                    <div class="cloud cloud-1"></div>
                    <div class="cloud cloud-2"></div>
                    <div class="cloud cloud-3"></div>
                    <div class="cloud cloud-4"></div>
                    <div class="cloud cloud-5"></div>
                    <div class="cloud cloud-6"></div>
                </div>
                <div class="sun-anchor">
                    <div class="sun-glow"></div>
                    <div class="sun">
                        <div class="sun-sheen"></div>
                    </div>
                </div>
                <div class="light-rays"></div>
            </div>

            // Night sky: star layers, the moon, a few shooting stars.
            <div class="scene scene-dark" class:visible=move || theme.get() == Theme::Dark>
                <div class="night-gradient"></div>
                <div class="nebula"></div>
                <div class="stars stars-far"></div>
                <div class="stars stars-mid"></div>
                <div class="stars stars-near"></div>
                <div class="moon-anchor">
                    <div class="moon-halo"></div>
                    <div class="moon">
                        <div class="crater crater-1"></div>
                        <div class="crater crater-2"></div>
                        <div class="crater crater-3"></div>
                        <div class="crater crater-4"></div>
                        <div class="moon-shade"></div>
                    </div>
                </div>
                <div class="shooting-star" style="animation-delay:0s;"></div>
                <div class="shooting-star" style="animation-delay:3s;top:25%;"></div>
                <div class="shooting-star" style="animation-delay:6s;top:60%;"></div>
                <div class="shooting-star" style="animation-delay:9s;top:40%;"></div>
            </div>

            // Storm through a window: rain outside, droplets on the glass.
            <div class="scene scene-rainy" class:visible=move || theme.get() == Theme::Rainy>
                <div class="storm-gradient"></div>
                <div class="storm-fog"></div>
                <div class="storm-cloud storm-cloud-1"></div>
                <div class="storm-cloud storm-cloud-2"></div>
                <div class="storm-cloud storm-cloud-3"></div>
                <div class="rain-outside">
                    {streaks
                        .into_iter()
                        .map(|style| view! { <div class="rain-streak" style=style></div> })
                        .collect_view()}
                </div>
                <div class="window-frame">
                    <div class="window-divider-v"></div>
                    <div class="window-divider-h"></div>
                </div>
                <div class="rain-on-glass">
                    {droplets
                        .into_iter()
                        .map(|style| view! { <div class="droplet" style=style></div> })
                        .collect_view()}
                </div>
                <div class="lightning"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(style: &'a str, key: &str) -> &'a str {
        style
            .split(';')
            .find_map(|part| part.strip_prefix(key).and_then(|v| v.strip_prefix(':')))
            .unwrap_or_else(|| panic!("missing {key} in {style}"))
    }

    #[test]
    fn droplet_styles_stay_in_bounds() {
        for _ in 0..50 {
            let style = droplet_style();
            let left: f64 = field(&style, "left").trim_end_matches('%').parse().unwrap();
            let width: f64 = field(&style, "width").trim_end_matches("px").parse().unwrap();
            let height: f64 = field(&style, "height").trim_end_matches("px").parse().unwrap();
            assert!((0.0..=100.0).contains(&left));
            assert!((3.0..=9.0).contains(&width));
            assert!((20.0..=60.0).contains(&height));
        }
    }

    #[test]
    fn streak_styles_stay_in_bounds() {
        for _ in 0..50 {
            let style = streak_style();
            let duration: f64 = field(&style, "animation-duration")
                .trim_end_matches('s')
                .parse()
                .unwrap();
            let opacity: f64 = field(&style, "opacity").parse().unwrap();
            assert!((0.4..=0.7).contains(&duration));
            assert!((0.3..=0.8).contains(&opacity));
        }
    }
}
