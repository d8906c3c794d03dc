use actix_web::{App, HttpServer};
use clap::Parser;
use cli::Cli;
use colored::*;

mod cli;
mod frontend;
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    let addr = cli.addr();

    logger::init(cli.log_level());

    log::info!(
        "Starting service: \"dotbot-pairing\", listening on: {}",
        addr.blue()
    );

    HttpServer::new(|| App::new().service(frontend::assets))
        .bind(addr)?
        .run()
        .await
}
