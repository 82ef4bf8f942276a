use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
};

use color_eyre::{eyre::WrapErr, Result};

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads `HOST` and `PORT`, after loading a `.env` file if one exists.
    ///
    /// # Errors
    ///
    /// Fails if either variable is set to something unparseable.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var("HOST").ok(), env::var("PORT").ok())
    }

    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_vars(
        host: Option<String>,
        port: Option<String>,
    ) -> Result<Self> {
        let host = host
            .map(|h| {
                h.trim().parse::<IpAddr>().wrap_err_with(|| {
                    format!("HOST {h:?} is not an IP address")
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_HOST);

        let port = port
            .map(|p| {
                p.trim().parse::<u16>().wrap_err_with(|| {
                    format!("PORT {p:?} is not a port number")
                })
            })
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { host, port })
    }

    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_host_and_port() {
        let config =
            Config::from_vars(Some("127.0.0.1".into()), Some(" 6502 ".into()))
                .unwrap();
        assert_eq!(config.addr().to_string(), "127.0.0.1:6502");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Config::from_vars(None, Some("eighty".into())).is_err());
        assert!(Config::from_vars(None, Some("70000".into())).is_err());
        assert!(Config::from_vars(Some("localhost".into()), None).is_err());
    }
}
