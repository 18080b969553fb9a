use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::config::Config;
use crate::core::context::{use_app_context, AppContext, CurrentPath, ThemeState};
use crate::core::layout::Layout;
use crate::core::query::use_query_cache_provider;
use crate::routes;
use crate::theme;

pub fn launch_ui(config: Config) {
    let initial_theme = theme::load_theme(&config.db_path());
    let title = config.product_name.clone();
    tracing::info!(theme = %initial_theme, "launching {title}");

    let ctx = AppContext::new(config, initial_theme);
    dioxus::LaunchBuilder::new()
        .with_cfg(DesktopConfig::new().with_window(WindowBuilder::new().with_title(title)))
        .with_context(ctx)
        .launch(app_view);
}

fn app_view() -> Element {
    let ctx = use_app_context();
    use_query_cache_provider();
    let current_path = use_context_provider(|| CurrentPath(Signal::new("/".to_string())));
    let theme = use_context_provider(|| ThemeState(Signal::new(ctx.initial_theme)));

    let path = current_path.0.read().clone();
    let theme_name = theme.0.read().as_str();

    rsx! {
        style { r#"
            [data-theme="dark"] {{
                --base-100: #111827; --base-200: #0b1020; --base-300: #1f2937;
                --content: #e5e7eb; --muted: rgba(229,231,235,0.65);
                --border: rgba(255,255,255,0.08);
            }}
            [data-theme="light"] {{
                --base-100: #ffffff; --base-200: #f3f4f6; --base-300: #e5e7eb;
                --content: #1f2937; --muted: rgba(31,41,55,0.6);
                --border: rgba(0,0,0,0.08);
            }}
            :root {{
                --primary: #6366f1; --secondary: #a855f7; --accent: #14b8a6;
                --success: #22c55e; --warning: #f59e0b; --error: #ef4444; --info: #38bdf8;
            }}
            body {{ margin: 0; font-family: system-ui, -apple-system, BlinkMacSystemFont, "SF Pro Text", sans-serif; }}
            .app {{ height: 100vh; background: var(--base-200); color: var(--content); }}
            .layout {{ height: 100%; display: flex; overflow: hidden; }}
            .sidebar {{
                width: 260px; min-width: 220px;
                background: var(--base-100);
                border-right: 1px solid var(--border);
                display: flex; flex-direction: column;
            }}
            .sidebar-header {{ padding: 16px; display: flex; gap: 10px; align-items: center; border-bottom: 1px solid var(--border); }}
            .sidebar-footer {{ padding: 12px 16px; display: flex; justify-content: space-between; align-items: center; border-top: 1px solid var(--border); }}
            .logo {{ font-size: 24px; }}
            .title {{ font-size: 16px; font-weight: 700; }}
            .menu {{ list-style: none; margin: 0; padding: 8px; flex: 1; overflow-y: auto; }}
            .menu a, .menu summary {{ display: flex; gap: 10px; align-items: center; padding: 10px 12px; border-radius: 10px; cursor: pointer; }}
            .menu a:hover, .menu summary:hover {{ background: var(--base-300); }}
            .menu .menu-active {{ background: var(--primary); color: white; }}
            .menu ul {{ list-style: none; padding-left: 16px; }}
            .content {{ flex: 1; min-width: 0; overflow-y: auto; padding: 24px; }}
            .page {{ display: flex; flex-direction: column; gap: 20px; }}
            .page h1 {{ margin: 0; font-size: 32px; }}
            .page-header {{ display: flex; justify-content: space-between; align-items: center; }}
            .hint, .muted {{ color: var(--muted); font-size: 13px; }}
            .strong {{ font-weight: 600; }}
            .row {{ display: flex; gap: 8px; align-items: center; }}
            .grow {{ flex: 1; }}
            .grid-2 {{ display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }}
            .card {{ background: var(--base-100); border: 1px solid var(--border); border-radius: 14px; padding: 20px; display: flex; flex-direction: column; gap: 12px; }}
            .card-title {{ margin: 0; font-size: 20px; }}
            .card-actions {{ display: flex; gap: 8px; justify-content: flex-end; }}
            .card-gradient {{ background: linear-gradient(135deg, var(--primary), var(--secondary)); color: white; }}
            .card-gradient-alt {{ background: linear-gradient(135deg, var(--accent), var(--info)); color: white; }}
            .card-danger {{ border: 2px solid var(--error); }}
            .stats {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 16px; }}
            .stat {{ background: var(--base-100); border: 1px solid var(--border); border-radius: 12px; padding: 16px; }}
            .stat-title {{ color: var(--muted); font-size: 13px; }}
            .stat-value {{ font-size: 28px; font-weight: 800; }}
            .stat-desc {{ color: var(--muted); font-size: 12px; }}
            .text-primary {{ color: var(--primary); }}
            .text-secondary {{ color: var(--secondary); }}
            .text-accent {{ color: var(--accent); }}
            .text-success {{ color: var(--success); }}
            .text-warning {{ color: var(--warning); }}
            .text-info {{ color: var(--info); }}
            .text-error {{ color: var(--error); }}
            .btn {{
                padding: 8px 14px; border-radius: 10px; border: 1px solid transparent;
                background: var(--base-300); color: inherit; cursor: pointer; font-weight: 600;
            }}
            .btn:disabled {{ opacity: 0.5; cursor: not-allowed; }}
            .btn-primary {{ background: var(--primary); color: white; }}
            .btn-error {{ background: var(--error); color: white; }}
            .btn-outline {{ background: transparent; border-color: currentColor; }}
            .btn-outline.btn-error {{ color: var(--error); }}
            .btn-ghost {{ background: transparent; }}
            .btn-ghost:hover {{ background: var(--base-300); }}
            .btn-sm {{ padding: 4px 8px; }}
            .btn-square {{ padding: 4px 10px; }}
            .btn-danger {{ color: var(--error); }}
            .input, select, textarea {{
                padding: 10px 12px; border-radius: 10px; border: 1px solid var(--border);
                background: var(--base-200); color: inherit; font: inherit;
            }}
            .input-error {{ border-color: var(--error); }}
            textarea {{ min-height: 80px; resize: vertical; }}
            .form {{ display: flex; flex-direction: column; gap: 14px; }}
            .form-control {{ display: flex; flex-direction: column; gap: 6px; }}
            .form-grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }}
            .toggle-row {{ display: flex; gap: 14px; align-items: center; cursor: pointer; }}
            .divider {{ height: 1px; background: var(--border); }}
            .alert {{ padding: 12px 16px; border-radius: 12px; }}
            .alert-success {{ background: rgba(34,197,94,0.15); color: var(--success); }}
            .alert-error {{ background: rgba(239,68,68,0.15); color: var(--error); }}
            .badge {{ padding: 2px 8px; border-radius: 999px; font-size: 12px; background: var(--base-300); }}
            .badge-primary {{ background: var(--primary); color: white; }}
            .badge-success {{ background: var(--success); color: white; }}
            .badge-warning {{ background: var(--warning); color: #1f2937; }}
            .badge-error {{ background: var(--error); color: white; }}
            .badge-info {{ background: var(--info); color: #1f2937; }}
            .table-wrap {{ overflow-x: auto; }}
            .table {{ width: 100%; border-collapse: collapse; }}
            .table th, .table td {{ padding: 10px 12px; text-align: left; border-bottom: 1px solid var(--border); }}
            .table .col-status {{ width: 56px; }}
            .table .col-actions {{ width: 100px; }}
            .row-done .title.done {{ text-decoration: line-through; color: var(--muted); }}
            .table-actions {{ display: flex; gap: 4px; }}
            .sortable-header {{ background: none; border: none; color: inherit; font: inherit; font-weight: 700; cursor: pointer; display: flex; gap: 6px; }}
            .sort-marker {{ color: var(--muted); }}
            .empty-state {{ padding: 40px; text-align: center; color: var(--muted); }}
            .empty-icon {{ font-size: 40px; }}
            .loading {{ display: flex; justify-content: center; padding: 40px; }}
            .spinner {{
                display: inline-block; width: 18px; height: 18px; border-radius: 50%;
                border: 2px solid var(--border); border-top-color: var(--primary);
                animation: spin 0.8s linear infinite;
            }}
            @keyframes spin {{ to {{ transform: rotate(360deg); }} }}
            .dialog-backdrop {{
                position: fixed; inset: 0; background: rgba(0,0,0,0.5);
                display: flex; align-items: center; justify-content: center; z-index: 50;
            }}
            .dialog-card {{ background: var(--base-100); border-radius: 16px; width: min(480px, 92vw); max-height: 90vh; display: flex; flex-direction: column; }}
            .dialog-wide {{ width: min(720px, 92vw); }}
            .dialog-header {{ display: flex; justify-content: space-between; align-items: center; padding: 16px 20px; }}
            .dialog-title {{ margin: 0; font-size: 18px; }}
            .dialog-body {{ padding: 0 20px; overflow-y: auto; }}
            .dialog-actions {{ display: flex; justify-content: flex-end; gap: 8px; padding: 16px 20px; }}
        "# }
        div { class: "app", "data-theme": "{theme_name}",
            Layout { {routes::render(&path)} }
        }
    }
}
