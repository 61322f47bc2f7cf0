mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler::operations, service::admin::code::AdminCodeService,
            startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client();

        let admin_codes = AdminCodeService::new();

        tracing::info!("Starting server");

        // Issue an admin bootstrap code while no admin pilot exists
        startup::check_for_admin(&db, &admin_codes).await?;

        let state = AppState::new(db, http_client, config, admin_codes);

        let scheduler_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = operations::start_scheduler(scheduler_state).await {
                tracing::error!("Operations scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()?.with_state(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
