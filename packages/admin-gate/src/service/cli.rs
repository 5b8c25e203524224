use clap::{Parser, Subcommand};
use crate::service::rest::cors::AllowedOrigin;

#[derive(Parser)]
pub struct Args {
    #[clap(subcommand)]
    pub subcommand: Commands
}

#[derive(Subcommand)]
pub enum Commands {
    Run {
        #[clap(long)]
        http_port: u16,
        #[clap(long)]
        http_host: String,
        #[clap(long = "cloudflare")]
        cloudflare_support: bool,
        /// Browser origin allowed to call the API with cookies. May be repeated.
        #[clap(long = "allow-origin")]
        allowed_origins: Vec<AllowedOrigin>,
    },
    Version {
        #[clap(long)]
        plain: bool,
    }
}
