pub const GLOBAL_CSS: &str = r#"
:root {
  --text: #e8ecf4;
  --text-dim: #b9c2d4;
  --text-muted: #828ca1;
  --panel: rgba(15, 18, 32, 0.55);
  --panel-strong: rgba(15, 18, 32, 0.75);
  --border: rgba(255, 255, 255, 0.1);
  --border-strong: rgba(255, 255, 255, 0.2);
  --surface-hover: rgba(255, 255, 255, 0.08);
  --accent-from: #8b5cf6;
  --accent-via: #a855f7;
  --accent-to: #d946ef;
  --glow: rgba(168, 85, 247, 0.45);
  --radius: 12px;
  --radius-lg: 16px;
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --sidebar-wide: 288px;
  --sidebar-rail: 64px;
  --ease: 500ms cubic-bezier(0.22, 1, 0.36, 1);
  --fade: 1000ms ease;
  --font-body: Inter, "SF Pro Text", system-ui, -apple-system, sans-serif;
}

.light-theme {
  --text: #17233a;
  --text-dim: #33415e;
  --text-muted: #5d6a84;
  --panel: rgba(255, 255, 255, 0.45);
  --panel-strong: rgba(255, 255, 255, 0.65);
  --border: rgba(255, 255, 255, 0.55);
  --border-strong: rgba(255, 255, 255, 0.8);
  --surface-hover: rgba(255, 255, 255, 0.5);
}

.rainy-theme {
  --text: #e4e9f0;
  --text-dim: #c2cbd8;
  --text-muted: #8d99ab;
  --panel: rgba(30, 38, 50, 0.55);
  --panel-strong: rgba(30, 38, 50, 0.78);
  --border: rgba(255, 255, 255, 0.12);
  --surface-hover: rgba(255, 255, 255, 0.09);
}

* { box-sizing: border-box; }
html, body { margin: 0; padding: 0; height: 100%; }
body { font-family: var(--font-body); color: var(--text); }

.shell-app { position: relative; display: flex; height: 100vh; overflow: hidden; color: var(--text); }
.icon { width: 20px; height: 20px; flex: none; }

/* ---------- Backdrop scenes ---------------------------------------------- */

.backdrop { position: fixed; inset: 0; z-index: -10; }
.scene { position: absolute; inset: 0; opacity: 0; transition: opacity var(--fade); pointer-events: none; }
.scene.visible { opacity: 1; }
.scene > div { position: absolute; }

/* Light: daylight sky */
.sky-gradient { inset: 0; background: linear-gradient(to bottom, #38bdf8, #7dd3fc, #eff6ff); }
.sky-haze { inset: 0; background: linear-gradient(to bottom, transparent, rgba(255,255,255,0.1) 55%, rgba(255,255,255,0.35)); }
.cloud-field { inset: 0; overflow: hidden; opacity: 0.9; }
.cloud { position: absolute; background: rgba(255, 255, 255, 0.85); border-radius: 50%; filter: blur(18px); animation: drift linear infinite; }
.cloud-1 { width: 320px; height: 90px; top: 12%; animation-duration: 95s; }
.cloud-2 { width: 240px; height: 70px; top: 28%; animation-duration: 120s; animation-delay: -40s; }
.cloud-3 { width: 420px; height: 110px; top: 45%; animation-duration: 150s; animation-delay: -75s; opacity: 0.7; }
.cloud-4 { width: 180px; height: 55px; top: 8%; animation-duration: 80s; animation-delay: -20s; }
.cloud-5 { width: 280px; height: 80px; top: 62%; animation-duration: 135s; animation-delay: -100s; opacity: 0.6; }
.cloud-6 { width: 360px; height: 95px; top: 75%; animation-duration: 160s; animation-delay: -55s; opacity: 0.5; }
.sun-anchor { top: 80px; right: 128px; }
.sun { position: relative; width: 160px; height: 160px; border-radius: 50%; background: radial-gradient(circle at 35% 35%, #fef9c3, #fde047 55%, #fb923c); box-shadow: 0 0 120px 60px rgba(253, 224, 71, 0.6); }
.sun-sheen { position: absolute; inset: 0; border-radius: 50%; background: linear-gradient(135deg, rgba(255,255,255,0.4), transparent 60%); }
.sun-glow { position: absolute; inset: -60px; border-radius: 50%; background: radial-gradient(circle, rgba(253, 224, 71, 0.35), transparent 70%); animation: glow-pulse 6s ease-in-out infinite; }
.light-rays { inset: 0; background: conic-gradient(from 200deg at 85% 15%, rgba(255, 255, 255, 0.14) 0deg, transparent 40deg, rgba(255, 255, 255, 0.1) 80deg, transparent 120deg); }

/* Dark: night sky */
.night-gradient { inset: 0; background: linear-gradient(to bottom, #0a0a1a, #1a0a2e, #16213e); }
.nebula { inset: 0; background: radial-gradient(ellipse at 30% 40%, rgba(139, 92, 246, 0.22), transparent 55%), radial-gradient(ellipse at 75% 70%, rgba(59, 130, 246, 0.15), transparent 50%); opacity: 0.6; }
.stars { inset: 0; background-repeat: repeat; animation: twinkle ease-in-out infinite alternate; }
.stars-far { background-image: radial-gradient(1px 1px at 25px 35px, rgba(255,255,255,0.7), transparent), radial-gradient(1px 1px at 110px 90px, rgba(255,255,255,0.5), transparent), radial-gradient(1px 1px at 180px 20px, rgba(255,255,255,0.6), transparent); background-size: 220px 160px; animation-duration: 5s; }
.stars-mid { background-image: radial-gradient(1.5px 1.5px at 60px 120px, rgba(255,255,255,0.8), transparent), radial-gradient(1.5px 1.5px at 150px 50px, rgba(255,255,255,0.6), transparent); background-size: 260px 200px; animation-duration: 3.5s; animation-delay: -1s; }
.stars-near { background-image: radial-gradient(2px 2px at 40px 60px, #ffffff, transparent), radial-gradient(2px 2px at 200px 140px, rgba(255,255,255,0.9), transparent); background-size: 320px 240px; animation-duration: 2.5s; animation-delay: -2s; }
.moon-anchor { top: 64px; right: 96px; }
.moon { position: relative; width: 192px; height: 192px; border-radius: 50%; overflow: hidden; background: radial-gradient(circle at 38% 35%, #e2e8f0, #cbd5e1 60%, #94a3b8); }
.moon-halo { position: absolute; inset: -70px; border-radius: 50%; background: radial-gradient(circle, rgba(226, 232, 240, 0.25), transparent 70%); }
.crater { position: absolute; border-radius: 50%; background: rgba(100, 116, 139, 0.4); filter: blur(2px); }
.crater-1 { width: 44px; height: 44px; top: 40px; left: 56px; }
.crater-2 { width: 30px; height: 30px; top: 96px; left: 28px; }
.crater-3 { width: 52px; height: 52px; top: 64px; right: 36px; }
.crater-4 { width: 26px; height: 26px; bottom: 44px; right: 60px; }
.moon-shade { position: absolute; inset: 0; border-radius: 50%; background: linear-gradient(135deg, rgba(255,255,255,0.2), transparent 45%, rgba(15, 23, 42, 0.35)); }
.shooting-star { position: absolute; top: 15%; left: -10%; width: 120px; height: 2px; background: linear-gradient(90deg, transparent, #ffffff); border-radius: 999px; opacity: 0; animation: shoot 12s linear infinite; }

/* Rainy: storm through a window */
.storm-gradient { inset: 0; background: linear-gradient(to bottom, #475569, #64748b, #94a3b8); }
.storm-fog { inset: 0; background: linear-gradient(to top, rgba(203, 213, 225, 0.4), transparent 60%); }
.storm-cloud { position: absolute; background: rgba(30, 41, 59, 0.55); border-radius: 50%; filter: blur(26px); animation: drift linear infinite; }
.storm-cloud-1 { width: 480px; height: 140px; top: 6%; animation-duration: 110s; }
.storm-cloud-2 { width: 380px; height: 120px; top: 22%; animation-duration: 140s; animation-delay: -60s; }
.storm-cloud-3 { width: 560px; height: 160px; top: 38%; animation-duration: 170s; animation-delay: -30s; opacity: 0.7; }
.rain-outside { inset: 0; overflow: hidden; }
.rain-streak { position: absolute; top: -12%; width: 1.5px; height: 90px; background: linear-gradient(to bottom, transparent, rgba(203, 213, 225, 0.8)); animation: fall linear infinite; }
.window-frame { inset: 0; border: 14px solid rgba(30, 27, 24, 0.85); box-shadow: inset 0 0 60px rgba(0, 0, 0, 0.35); }
.window-divider-v { position: absolute; top: 0; bottom: 0; left: 50%; width: 10px; margin-left: -5px; background: rgba(30, 27, 24, 0.85); }
.window-divider-h { position: absolute; left: 0; right: 0; top: 50%; height: 10px; margin-top: -5px; background: rgba(30, 27, 24, 0.85); }
.rain-on-glass { inset: 0; overflow: hidden; }
.droplet { position: absolute; border-radius: 40% 40% 60% 60%; background: linear-gradient(to bottom, rgba(255, 255, 255, 0.12), rgba(203, 213, 225, 0.45)); animation: slide 4s ease-in infinite; }
.lightning { inset: 0; background: rgba(226, 232, 240, 0.9); opacity: 0; animation: flash 9s steps(1) infinite; }

@keyframes drift { from { transform: translateX(-30vw); } to { transform: translateX(130vw); } }
@keyframes twinkle { from { opacity: 0.45; } to { opacity: 1; } }
@keyframes glow-pulse { 0%, 100% { transform: scale(1); opacity: 0.8; } 50% { transform: scale(1.08); opacity: 1; } }
@keyframes shoot { 0% { opacity: 0; transform: translate(0, 0) rotate(-20deg); } 4% { opacity: 1; } 12% { opacity: 0; transform: translate(60vw, 22vh) rotate(-20deg); } 100% { opacity: 0; } }
@keyframes fall { from { transform: translateY(0); } to { transform: translateY(115vh); } }
@keyframes slide { 0% { transform: translateY(0); opacity: 0.9; } 100% { transform: translateY(60px); opacity: 0.2; } }
@keyframes flash { 0%, 96% { opacity: 0; } 97% { opacity: 0.5; } 97.6% { opacity: 0; } 98.2% { opacity: 0.35; } 99% { opacity: 0; } }
@keyframes fade-in { from { opacity: 0; } to { opacity: 1; } }

/* ---------- Shell chrome -------------------------------------------------- */

.main-content { flex: 1 1 auto; height: 100%; overflow-y: auto; margin-right: 0; transition: margin-right var(--ease); }
.main-content.offset-wide { margin-right: var(--sidebar-wide); }
.main-content.offset-rail { margin-right: var(--sidebar-rail); }

.menu-button { position: fixed; top: var(--space-4); right: var(--space-4); z-index: 40; display: flex; align-items: center; justify-content: center; width: 48px; height: 48px; border: 1px solid var(--border); border-radius: var(--radius); background: var(--panel-strong); color: var(--text); backdrop-filter: blur(14px); box-shadow: 0 14px 42px rgba(0, 0, 0, 0.35); cursor: pointer; }
.menu-button:hover { background: var(--surface-hover); }

.overlay { position: fixed; inset: 0; z-index: 40; background: rgba(0, 0, 0, 0.5); backdrop-filter: blur(4px); animation: fade-in 300ms ease; }

/* ---------- Sidebar ------------------------------------------------------- */

.sidebar { position: fixed; top: 0; right: 0; z-index: 50; height: 100vh; transition: width var(--ease), transform var(--ease); }
.sidebar.open { width: var(--sidebar-wide); }
.sidebar.rail { width: var(--sidebar-rail); }
.sidebar.hidden { width: 0; transform: translateX(100%); }

.sidebar-glass { display: flex; flex-direction: column; height: 100%; overflow: hidden; background: var(--panel); border-left: 1px solid var(--border); backdrop-filter: blur(22px); box-shadow: -18px 0 50px rgba(0, 0, 0, 0.25); }

.sidebar-header { display: flex; align-items: center; justify-content: space-between; padding: var(--space-4); border-bottom: 1px solid var(--border); }
.sidebar.rail .sidebar-header { justify-content: center; }
.brand-row { display: flex; align-items: center; gap: var(--space-3); }
.brand-badge { position: relative; display: flex; align-items: center; justify-content: center; width: 36px; height: 36px; border-radius: var(--radius); background: linear-gradient(135deg, var(--accent-from), var(--accent-via), var(--accent-to)); color: #ffffff; box-shadow: 0 0 24px var(--glow); animation: glow-pulse 4s ease-in-out infinite; }
.brand-badge.as-button { border: 0; cursor: pointer; transition: transform 300ms ease; }
.brand-badge.as-button:hover { transform: scale(1.1); }
.brand-title { font-size: 17px; font-weight: 600; letter-spacing: 0.02em; }
.ghost-button { display: flex; align-items: center; justify-content: center; width: 32px; height: 32px; border: 0; border-radius: 8px; background: transparent; color: var(--text-dim); cursor: pointer; transition: background 300ms ease, transform 300ms ease; }
.ghost-button:hover { background: var(--surface-hover); transform: rotate(90deg); }

.sidebar-nav { flex: 1 1 auto; display: flex; flex-direction: column; gap: var(--space-2); padding: var(--space-6) var(--space-3) 0; overflow-y: auto; }
.sidebar.rail .sidebar-nav { padding: var(--space-6) var(--space-2) 0; align-items: center; }

.nav-link { display: flex; align-items: center; gap: var(--space-3); width: 100%; height: 48px; padding: 0 var(--space-4); border: 0; border-radius: var(--radius); background: transparent; color: var(--text-dim); font-family: inherit; font-size: 15px; text-decoration: none; cursor: pointer; transition: background 300ms ease, transform 300ms ease; }
.nav-link:hover { background: var(--surface-hover); transform: scale(1.02); }
.nav-link.active { background: linear-gradient(135deg, var(--accent-from), var(--accent-via), var(--accent-to)); color: #ffffff; box-shadow: 0 0 24px var(--glow); }
.sidebar.rail .nav-link { width: 48px; justify-content: center; padding: 0; }
.nav-label { white-space: nowrap; }

.sidebar-footer { display: flex; flex-direction: column; gap: var(--space-2); padding: var(--space-3); border-top: 1px solid var(--border); }
.sidebar.rail .sidebar-footer { align-items: center; padding: var(--space-2); }

/* ---------- Pages --------------------------------------------------------- */

.page { min-height: 100%; padding: 0 var(--space-4) var(--space-6); animation: fade-in 500ms ease; }
.section { max-width: 960px; margin: 0 auto; padding: var(--space-6) 0; }
.section-head { text-align: center; margin-bottom: var(--space-6); }
.section-head p { color: var(--text-muted); }

.hero { max-width: 820px; margin: 0 auto; padding: 96px 0 48px; text-align: center; }
.hero-badge { display: inline-flex; align-items: center; gap: var(--space-2); padding: var(--space-2) var(--space-4); margin-bottom: var(--space-6); border: 1px solid var(--border); border-radius: 999px; background: var(--panel); backdrop-filter: blur(12px); color: var(--text-dim); font-size: 14px; }
.hero-badge .icon { width: 16px; height: 16px; color: #facc15; }
.hero-title { margin: 0 0 var(--space-4); font-size: 64px; background: linear-gradient(90deg, var(--accent-from), var(--accent-via), var(--accent-to)); -webkit-background-clip: text; background-clip: text; color: transparent; }
.hero-subtitle { margin: 0 0 var(--space-3); font-size: 22px; color: var(--text-dim); }
.hero-copy { margin: 0 auto var(--space-6); max-width: 620px; color: var(--text-muted); line-height: 1.6; }
.hero-actions { display: flex; gap: var(--space-4); justify-content: center; flex-wrap: wrap; }

.btn { height: 52px; padding: 0 var(--space-6); border-radius: var(--radius); font-family: inherit; font-size: 15px; cursor: pointer; transition: transform 300ms ease, background 300ms ease; }
.btn:hover { transform: scale(1.03); }
.btn.primary { border: 0; background: linear-gradient(135deg, var(--accent-from), var(--accent-to)); color: #ffffff; box-shadow: 0 0 28px var(--glow); }
.btn.ghost { border: 1px solid var(--border-strong); background: var(--panel); color: var(--text); backdrop-filter: blur(12px); }

.card { border: 1px solid var(--border); border-radius: var(--radius-lg); background: var(--panel); backdrop-filter: blur(18px); box-shadow: 0 14px 42px rgba(0, 0, 0, 0.18); }

.feature-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: var(--space-4); }
.feature-card { padding: var(--space-6); transition: transform 300ms ease; }
.feature-card:hover { transform: scale(1.02); }
.feature-card p { color: var(--text-muted); line-height: 1.6; }
.feature-icon { display: flex; align-items: center; justify-content: center; width: 48px; height: 48px; margin-bottom: var(--space-4); border-radius: var(--radius); color: #ffffff; }
.accent-amber { background: linear-gradient(135deg, #eab308, #f97316); }
.accent-violet { background: linear-gradient(135deg, #a855f7, #ec4899); }
.accent-blue { background: linear-gradient(135deg, #3b82f6, #06b6d4); }
.accent-emerald { background: linear-gradient(135deg, #22c55e, #10b981); }

.benefits-card { padding: var(--space-6); }
.benefit-list { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: var(--space-3); margin: var(--space-4) 0 0; padding: 0; list-style: none; }
.benefit-item { display: flex; align-items: center; gap: var(--space-3); color: var(--text-dim); }
.benefit-check { display: flex; align-items: center; justify-content: center; width: 24px; height: 24px; border-radius: 50%; background: rgba(34, 197, 94, 0.2); color: #22c55e; }
.benefit-check .icon { width: 14px; height: 14px; }

.profile-card { max-width: 520px; margin: 48px auto 0; padding: var(--space-6); text-align: center; }
.avatar { display: flex; align-items: center; justify-content: center; width: 88px; height: 88px; margin: 0 auto var(--space-4); border-radius: 50%; background: linear-gradient(135deg, var(--accent-from), var(--accent-to)); color: #ffffff; font-size: 28px; font-weight: 600; box-shadow: 0 0 28px var(--glow); }
.profile-role { color: var(--text-muted); margin-top: calc(-1 * var(--space-2)); }
.stat-row { display: flex; justify-content: center; gap: var(--space-6); margin-top: var(--space-6); }
.stat { display: flex; flex-direction: column; }
.stat-value { font-size: 22px; font-weight: 600; }
.stat-label { color: var(--text-muted); font-size: 13px; }

.drop-zone { display: flex; flex-direction: column; align-items: center; gap: var(--space-3); padding: 64px var(--space-6); border-style: dashed; border-color: var(--border-strong); text-align: center; }
.drop-icon { display: flex; align-items: center; justify-content: center; width: 64px; height: 64px; border-radius: 50%; background: var(--surface-hover); color: var(--text-dim); }
.drop-icon .icon { width: 28px; height: 28px; }
.drop-title { margin: 0; font-size: 17px; }
.drop-hint { margin: 0; color: var(--text-muted); }

.settings-card { max-width: 640px; margin: 0 auto; padding: var(--space-4) var(--space-6); }
.settings-row { display: flex; align-items: center; justify-content: space-between; gap: var(--space-4); padding: var(--space-4) 0; border-bottom: 1px solid var(--border); }
.settings-row:last-child { border-bottom: 0; }
.settings-title { gap: var(--space-3); justify-content: flex-start; font-weight: 600; }
.settings-text { display: flex; flex-direction: column; gap: var(--space-1); }
.settings-name { font-size: 15px; }
.settings-hint { color: var(--text-muted); font-size: 13px; }

.switch { position: relative; display: inline-block; width: 44px; height: 24px; flex: none; }
.switch input { position: absolute; opacity: 0; width: 0; height: 0; }
.switch-track { position: absolute; inset: 0; border-radius: 999px; background: var(--surface-hover); border: 1px solid var(--border); cursor: pointer; transition: background 300ms ease; }
.switch-track::before { content: ""; position: absolute; top: 2px; left: 2px; width: 18px; height: 18px; border-radius: 50%; background: var(--text-dim); transition: transform 300ms ease, background 300ms ease; }
.switch input:checked + .switch-track { background: linear-gradient(135deg, var(--accent-from), var(--accent-to)); }
.switch input:checked + .switch-track::before { transform: translateX(20px); background: #ffffff; }
"#;
