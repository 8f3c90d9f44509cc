use dotenv::dotenv;
use eventos::modules::Modules;
use eventos::utils::auth::restore_session;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "eventos=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let modules = Modules::load_from_settings();

    match restore_session(&modules.session) {
        Ok(Some(user)) => info!("Session restored for {}", user.username),
        Ok(None) => info!("No stored session"),
        Err(e) => warn!("Could not restore the session: {e}"),
    }

    let mut manager = modules.manager();
    manager.load().await;

    info!(
        "Loaded {} event(s) and {} user(s)",
        manager.events.len(),
        manager.users.len()
    );
    for event in &manager.events {
        info!(
            "{} @ {} with {}",
            event.name,
            manager.schedule_text(event),
            manager.participant_names(event)
        );
    }
}
