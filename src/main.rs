//! paytrack main entrypoint.

use paytrack::run;
use paytrack::ui::messages::report;

fn main() {
    println!();
    if let Err(e) = run() {
        report(&e);
        std::process::exit(1);
    }
}
