#![forbid(unsafe_code)]

use lazy_static::lazy_static;
use log::info;
use poem::listener::{Listener, TcpListener};
use poem::{Route, Server};

// WEXA utilities
use crate::routes::greeting;
use crate::utils::config::{init_log, init_runtime_context, RuntimeCtx};
use crate::utils::errors::Errors;

// Modules
mod routes;
mod utils;

// ***************************************************************************
//                                Constants
// ***************************************************************************
const SERVER_NAME : &str = "WexaServer"; // for poem logging

// ***************************************************************************
//                             Static Variables
// ***************************************************************************
// Lazily initialize the parameters variable so that is has a 'static lifetime.
// We exit if we can't resolve our parameters.
lazy_static! {
    static ref RUNTIME_CTX: RuntimeCtx = init_runtime_context();
}

// ---------------------------------------------------------------------------
// main:
// ---------------------------------------------------------------------------
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // --------------- Initialize WEXA ----------------
    // Announce ourselves.
    println!("Starting wexa_server!");

    // Initialize the server.
    wexa_init();

    // --------------- Main Loop Set Up ---------------
    // Create the routes.  Everything the greeting endpoint doesn't serve
    // gets poem's not-found response.
    let app = Route::new().at("/", greeting::get_greeting);

    // Bind the listener on all interfaces.  The confirmation line is only
    // logged once the listener actually holds the port.
    let addr = format!("{}:{}",
        RUNTIME_CTX.parms.config.http_addr,
        RUNTIME_CTX.parms.config.http_port);
    let acceptor = TcpListener::bind(addr).into_acceptor().await?;
    info!("server running on port {}", RUNTIME_CTX.parms.config.http_port);

    // ------------------ Main Loop -------------------
    Server::new_with_acceptor(acceptor)
        .name(SERVER_NAME)
        .run(app)
        .await
}

// ***************************************************************************
//                             Private Functions
// ***************************************************************************
// ---------------------------------------------------------------------------
// wexa_init:
// ---------------------------------------------------------------------------
/** Initialize all subsystems and data structures other than those needed
 * to configure the main loop processor.
 */
fn wexa_init() {
    // Configure our log.
    init_log();

    // Force the reading of input parameters and initialization of runtime context.
    info!("{}", Errors::InputParms(format!("{:#?}", *RUNTIME_CTX)));
}
