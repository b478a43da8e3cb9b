use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};

use department_manager::app_state::AppState;
use department_manager::config::Config;
use department_manager::{db, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    // Load (or seed) the department slot before accepting requests
    let store = db::open_store(&config).map_err(|err| {
        error!("failed to open department store: {}", err);
        std::io::Error::other(err.to_string())
    })?;
    info!(
        "loaded {} departments from '{}' in {}",
        store.len(),
        config.slot_name,
        config.data_dir.display()
    );

    let state = web::Data::new(AppState::new(store));

    info!("Starting server at {}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
