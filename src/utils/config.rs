#![forbid(unsafe_code)]

use anyhow::{Result, anyhow};
use log::{info, error, LevelFilter};
use std::env;

use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;

// WEXA utilities
use crate::utils::errors::Errors;

// ***************************************************************************
//                                Constants
// ***************************************************************************
// Networking.
const ENV_HTTP_PORT        : &str = "PORT";
const DEFAULT_HTTP_ADDR    : &str = "0.0.0.0";
const DEFAULT_HTTP_PORT    : u16  = 3000;

// Logging.
const LOG_APPENDER         : &str = "stdout";
const LOG_PATTERN          : &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

// ***************************************************************************
//                               Config Structs
// ***************************************************************************
// ---------------------------------------------------------------------------
// Parms:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Parms {
    pub config: Config,
}

// ---------------------------------------------------------------------------
// RuntimeCtx:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct RuntimeCtx {
    pub parms: Parms,
}

// ---------------------------------------------------------------------------
// Config:
// ---------------------------------------------------------------------------
#[derive(Debug)]
pub struct Config {
    pub http_addr: String,
    pub http_port: u16,
}

impl Config {
    #[allow(dead_code)]
    pub fn new() -> Self {
        Config::default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_addr: DEFAULT_HTTP_ADDR.to_string(),
            http_port: DEFAULT_HTTP_PORT,
        }
    }
}

// ***************************************************************************
//                               Log Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_log:
// ---------------------------------------------------------------------------
/** Initialize log4rs logging with a console appender on stdout.  The server
 * keeps nothing on disk, so the appender is assembled in code rather than
 * read from a log4rs configuration file.
 *
 * Any failure results in a panic.
 */
pub fn init_log() {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();
    let logconfig = match log4rs::config::Config::builder()
        .appender(Appender::builder().build(LOG_APPENDER, Box::new(stdout)))
        .build(Root::builder().appender(LOG_APPENDER).build(LevelFilter::Info))
    {
        Ok(c) => c,
        Err(e) => {
            println!("{}", e);
            panic!("{}", Errors::LogInitialization(e.to_string()));
        },
    };
    match log4rs::init_config(logconfig) {
        Ok(_) => (),
        Err(e) => {
            println!("{}", e);
            panic!("{}", Errors::LogInitialization(e.to_string()));
        },
    }
    info!("Log4rs initialized using console appender: {}", LOG_APPENDER);
}

/// ***************************************************************************
//                             Parms Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_parms:
// ---------------------------------------------------------------------------
/** Resolve the application parameters.  The listen port is taken from the
 * PORT environment variable when set; otherwise the default port applies.
 * A PORT value that does not parse as a TCP port aborts start up.
 */
fn get_parms() -> Result<Parms> {
    // Read the listen port from the environment.
    let http_port = match env::var(ENV_HTTP_PORT) {
        Ok(val) => parse_port(&val)?,
        Err(_) => DEFAULT_HTTP_PORT,
    };

    let config = Config { http_addr: DEFAULT_HTTP_ADDR.to_string(), http_port };
    Ok(Parms { config })
}

// ---------------------------------------------------------------------------
// parse_port:
// ---------------------------------------------------------------------------
fn parse_port(val: &str) -> Result<u16> {
    match val.parse::<u16>() {
        Ok(port) => Ok(port),
        Err(e) => {
            let msg = format!("{}\n   {}", Errors::InvalidPortError(val.to_string()), e);
            error!("{}", msg);
            Result::Err(anyhow!(msg))
        },
    }
}

// ***************************************************************************
//                             Config Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// init_runtime_context:
// ---------------------------------------------------------------------------
pub fn init_runtime_context() -> RuntimeCtx {
    // If this fails the application aborts.
    let parms = get_parms().expect("FAILED to resolve server parameters.");
    RuntimeCtx { parms }
}

// ***************************************************************************
//                                  Tests
// ***************************************************************************
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::new();
        assert_eq!(config.http_addr, "0.0.0.0");
        assert_eq!(config.http_port, 3000);
    }

    #[test]
    fn port_resolution() {
        // The process environment is shared across test threads, so the
        // whole precedence chain runs inside one test.
        env::remove_var(ENV_HTTP_PORT);
        let parms = get_parms().expect("default parms");
        assert_eq!(parms.config.http_port, DEFAULT_HTTP_PORT);

        env::set_var(ENV_HTTP_PORT, "8080");
        let parms = get_parms().expect("overridden parms");
        assert_eq!(parms.config.http_port, 8080);

        env::set_var(ENV_HTTP_PORT, "not-a-port");
        assert!(get_parms().is_err());

        env::remove_var(ENV_HTTP_PORT);
    }

    #[test]
    fn reject_unparseable_ports() {
        assert_eq!(parse_port("8080").expect("valid port"), 8080);
        assert!(parse_port("").is_err());
        assert!(parse_port("65536").is_err());
        assert!(parse_port("-1").is_err());
    }
}
