mod host;
mod lifecycle;
mod tray;

use tracing_subscriber::EnvFilter;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,clipstack=debug")),
        )
        .init();

    let app = tauri::Builder::default()
        .setup(|app| {
            tray::setup_tray(app)?;
            Ok(())
        })
        .on_window_event(lifecycle::on_window_event)
        .build(tauri::generate_context!())
        .expect("error building tauri application");

    app.run(lifecycle::on_run_event);
}
