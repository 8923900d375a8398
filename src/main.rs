// src/main.rs

// --- Imports ---
use gestion_academica::{config::AppConfig, db, services::seed_service, state::AppState, web};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Logging (tracing) ---
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "gestion_academica=debug,tower_http=info,sqlx=warn".into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor de Gestión Académica...");

    // --- Configuración ---
    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("❌ Configuración inválida: {}", e);
        anyhow::anyhow!("Configuración inválida: {}", e)
    })?;

    // --- Base de datos ---
    let db_pool = match db::create_db_pool(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falla crítica al inicializar la base de datos: {}", e);
            return Err(anyhow::anyhow!("Falla al conectar/migrar la DB: {}", e));
        }
    };

    if config.seed_data {
        seed_service::populate_initial_data(&db_pool, config.bcrypt_cost)
            .await
            .map_err(|e| anyhow::anyhow!("Falla al cargar datos de ejemplo: {}", e))?;
    }

    // --- Estado de la aplicación ---
    let app_state = AppState {
        db_pool,
        bcrypt_cost: config.bcrypt_cost,
    };

    // --- Listener ---
    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ No se pudo escuchar en {}: {}", config.bind_addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escuchando en http://{}", config.bind_addr);

    // --- Router y capas ---
    let app = web::routes::create_router(app_state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    // --- Inicio del servidor ---
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            tracing::error!("❌ Error fatal en el servidor: {}", e);
            anyhow::Error::from(e)
        })?;

    tracing::info!("👋 Servidor detenido.");
    Ok(())
}

// Ctrl+C o SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("No se pudo instalar el manejador de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("No se pudo instalar el manejador de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Señal de apagado recibida, cerrando conexiones...");
}
