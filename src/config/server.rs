use std::env;
use std::net::{AddrParseError, SocketAddr};

const DEFAULT_ADDR: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "./public";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub port: u16,
    pub public_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            port: DEFAULT_PORT,
            public_dir: DEFAULT_PUBLIC_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn get_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.get_addr().parse()
    }

    pub fn init_from_env(&mut self) -> Result<(), String> {
        if let Ok(addr) = env::var("SERVER_ADDR") {
            self.addr = addr;
        }

        if let Ok(port) = env::var("SERVER_PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| "SERVER_PORT is not a valid u16".to_string())?;
        }

        if let Ok(dir) = env::var("PUBLIC_DIR") {
            self.public_dir = dir;
        }

        Ok(())
    }
}
