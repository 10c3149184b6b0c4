//! CLI arguments and server configuration defaults.

use clap::Parser;

pub const DEFAULT_UPLOAD_DIR: &str = "static/uploads";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Filename extensions accepted by the upload endpoint.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// CLI arguments and environment configuration for the server.
#[derive(Parser, Debug)]
#[command(name = "imgdrop", version, about = "Image upload server")]
pub struct Args {
    #[arg(
        short = 'u',
        long,
        env = "IMGDROP_UPLOAD_DIR",
        default_value = DEFAULT_UPLOAD_DIR,
        help = "Directory where uploaded files are stored"
    )]
    pub upload_dir: String,
    #[arg(
        short = 'b',
        long,
        env = "IMGDROP_BIND",
        default_value = DEFAULT_HOST,
        help = "Bind address for HTTP"
    )]
    pub host: String,
    #[arg(
        short = 'p',
        long,
        env = "IMGDROP_PORT",
        default_value_t = DEFAULT_PORT,
        help = "HTTP port"
    )]
    pub port: u16,
    #[arg(
        long,
        env = "IMGDROP_CORS_ORIGINS",
        help = "Comma separated CORS origins (default: allow all)"
    )]
    pub cors_origins: Option<String>,
}
