use anyhow::Result;

fn main() -> Result<()> {
    // Initialize core
    tenki_core::init()?;

    // Create and initialize application
    let mut app = tenki_core::App::new().inspect_err(|e| {
        if let Some(config_err) = e.downcast_ref::<tenki_core::ConfigError>() {
            tracing::error!("{} ({:#})", config_err.user_message(), e);
        }
    })?;
    app.initialize()?;

    tracing::info!("Tenki application started");

    tenki_ui::run(&app)?;

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
