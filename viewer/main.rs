//! lattice-nn viewer
//!
//! Serves a live view of a small network while it learns OR and AND from
//! two boolean inputs, one training tick every 50 ms.
//!
//! Run with:
//!   cargo run --bin viewer --release
//! Then open http://127.0.0.1:7878

mod render;
mod routes;
mod state;

use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tiny_http::Server;

use state::ViewerState;

const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() {
    let addr = "127.0.0.1:7878";
    let server = Server::http(addr).expect("failed to bind HTTP server");

    let shared_state = Arc::new(Mutex::new(ViewerState::new()));

    // Simulation thread: one training tick per interval. Handlers only read
    // between ticks because both sides go through the same mutex.
    {
        let sim_state = shared_state.clone();
        thread::spawn(move || loop {
            {
                let mut guard = sim_state.lock().expect("viewer state poisoned");
                if let Err(e) = guard.tick() {
                    eprintln!("training tick failed: {e}");
                    break;
                }
            }
            thread::sleep(TICK_INTERVAL);
        });
    }

    println!("lattice-nn viewer");
    println!("  open http://{addr}");

    // Each request is dispatched on its own thread so a slow client cannot
    // hold up other page loads or the poll loop.
    for request in server.incoming_requests() {
        let state_clone = shared_state.clone();
        thread::spawn(move || {
            routes::dispatch(request, state_clone);
        });
    }
}
