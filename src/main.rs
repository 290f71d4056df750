// A small employee management console: keeps a roster of employee records in
// memory for one session, letting the user add a record, list them all, or
// look one up by its numeric ID.  Nothing is saved between runs.
use std::process;

use staff_roster::textinterface::TextInterface;

fn main() {
    let mut interface = TextInterface::init();

    // The only non-recoverable errors are console I/O failures and malformed
    // numeric input, neither of which has a retry path.
    if let Err(e) = interface.run() {
        eprintln!("Fatal error: {}", e);
        process::exit(1);
    }
}
