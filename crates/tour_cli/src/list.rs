//! `tour list`: print the id of every lesson.

use crate::pipeline::load_service;
use crate::GlobalArgs;

/// Runs the `tour list` command, printing ids in sorted order.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (_, service, _) = load_service(global)?;
    for id in service.ids() {
        println!("{id}");
    }
    Ok(0)
}
