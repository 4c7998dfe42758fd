//! `tour get`: print lesson JSON exactly as it would be served.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tour_cache::LessonService;

use crate::pipeline::load_service;
use crate::{GetArgs, GlobalArgs};

/// Exit code for a lesson id that is not in the cache.
pub const EXIT_NOT_FOUND: i32 = 2;

/// Runs the `tour get` command.
///
/// Without an id the aggregate object of all lessons is printed. An unknown
/// id returns [`EXIT_NOT_FOUND`] and leaves `--output` untouched.
pub fn run(args: &GetArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (_, service, _) = load_service(global)?;
    let id = args.id.as_deref().unwrap_or("");

    if !id.is_empty() && !service.contains(id) {
        eprintln!("error: lesson not found: {id}");
        return Ok(EXIT_NOT_FOUND);
    }

    match args.output {
        Some(ref path) => {
            let file = File::create(path)
                .map_err(|e| format!("cannot create {}: {e}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_response(&service, id, &mut out)?;
            if !global.quiet {
                eprintln!("      Wrote {}", path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_response(&service, id, &mut out)?;
            writeln!(out)?;
        }
    }
    Ok(0)
}

fn write_response<W: Write>(
    service: &LessonService,
    id: &str,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    service.write_lesson(id, out)?;
    out.flush()?;
    Ok(())
}
