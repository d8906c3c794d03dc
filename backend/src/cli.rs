use crate::logger::LogLevel;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(clap::Parser)]
#[command(version, about = "Serves the DotBot pairing form", long_about = None)]
pub struct Cli {
    #[arg(help = "Specify the address for the server (e.g., '127.0.0.1:8080').")]
    addr: Option<String>,
    #[arg(long, help = "Log level")]
    log: Option<LogLevel>,
}

impl Cli {
    pub fn addr(&self) -> String {
        self.addr.as_deref().unwrap_or(DEFAULT_ADDR).to_owned()
    }

    pub fn log_level(&self) -> LogLevel {
        self.log.clone().unwrap_or_default()
    }
}
