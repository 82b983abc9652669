// src/main.rs
use cinevoto::{config::Config, db, state::AppState, web};
use axum::serve;
use std::env;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Configuração do Logging (Tracing) ---
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinevoto=debug,tower_http=info,sqlx=warn".into())
                    .into()
            }),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("🚀 Iniciando servidor CineVoto...");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Configuração inválida: {}", e))?;
    tracing::info!("🔑 Ambiente: {:?} (cookies seguros: {})", config.app_env, config.secure_cookies());

    // --- Configuração da Base de Dados ---
    let db_pool = match db::create_db_pool(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("❌ Falha crítica ao inicializar a base de dados: {}", e);
            return Err(anyhow::anyhow!("Falha ao conectar/migrar DB: {}", e));
        }
    };

    let addr = config.bind_addr;
    let app_state = AppState::new(db_pool, config);

    // --- Configuração do Endereço e Listener ---
    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("❌ Falha ao iniciar listener em {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("📡 Servidor escutando em http://{}", addr);

    let app = web::routes::create_app(app_state);

    // --- Início do Servidor ---
    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("❌ Erro fatal no servidor: {}", e);
        return Err(e.into());
    }

    Ok(())
}
