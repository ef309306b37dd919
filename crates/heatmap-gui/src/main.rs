mod app;
mod convert;
mod messages;
mod panels;
mod states;
mod surface;
mod worker;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1600.0, 1000.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("HeatMap UI"),
        ..Default::default()
    };

    eframe::run_native(
        "HeatMap",
        options,
        Box::new(|cc| Ok(Box::new(app::HeatmapApp::new(&cc.egui_ctx)))),
    )
}
