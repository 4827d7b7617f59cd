//! Static host for the compiled client.
//!
//! Serves `index.html` and the wasm-bindgen output under `/pkg`. The storage
//! API itself is a separate service; the client reaches it at the URL baked
//! in at build time.

use std::path::PathBuf;

use actix_files as fs;
use actix_web::{get, middleware::Logger, web, App, HttpResponse, HttpServer, Result as ActixResult};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: String,

    /// Directory holding index.html and the pkg/ bundle
    #[arg(long, default_value = "./static")]
    dist: PathBuf,
}

#[derive(Clone)]
struct AppState {
    dist: PathBuf,
}

// Serve the page that boots the wasm bundle
#[get("/")]
async fn index(data: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let path = data.dist.join("index.html");
    let html = web::block(move || std::fs::read_to_string(path))
        .await?
        .map_err(|e| {
            log::error!("failed to read index.html: {}", e);
            actix_web::error::ErrorNotFound("index.html not found")
        })?;
    Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !args.dist.join("index.html").exists() {
        log::warn!("{} has no index.html; build the client first", args.dist.display());
    }

    log::info!("serving {} at http://{}", args.dist.display(), args.bind);

    let app_state = AppState {
        dist: args.dist.clone(),
    };

    HttpServer::new(move || {
        let pkg_dir = app_state.dist.join("pkg");

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .service(index)
            .service(fs::Files::new("/pkg", pkg_dir))
    })
    .bind(&args.bind)?
    .run()
    .await
}
