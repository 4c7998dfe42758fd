//! `tour build`: compile every lesson and report on the result.

use tour_lesson::CompiledLesson;

use crate::pipeline::load_service;
use crate::GlobalArgs;

/// Runs the `tour build` command.
///
/// Prints one line per compiled lesson and one per skipped lesson. Returns
/// exit code 0 when the cache was built; a failure under the abort policy is
/// returned as an error.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (project, service, report) = load_service(global)?;

    if !global.quiet {
        eprintln!(
            "   Building {} from {}",
            project.config.tour.name,
            project.content_dir().display()
        );
        for id in &report.compiled {
            if let Some(lesson) = service.cache().get(id.as_str()) {
                println!("{}", summary_line(id.as_str(), lesson));
            }
        }
        for skipped in &report.skipped {
            eprintln!("   Skipped {}: {}", skipped.id, skipped.error);
        }
        eprintln!(
            "   Finished {} lesson(s), {} skipped",
            report.compiled.len(),
            report.skipped.len()
        );
    }
    Ok(0)
}

/// Formats the `id  pages  files  bytes` summary for one lesson.
fn summary_line(id: &str, lesson: &CompiledLesson) -> String {
    format!(
        "{id:<24} {:>4} pages {:>4} files {:>8} bytes",
        lesson.page_count(),
        lesson.file_count(),
        lesson.as_bytes().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::sample_project;

    #[test]
    fn summary_columns() {
        let tmp = sample_project("");
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(tmp.path().to_path_buf()),
        };
        let (_, service, _) = load_service(&global).unwrap();
        let lesson = service.cache().get("hello").unwrap();
        let line = summary_line("hello", lesson);
        assert!(line.starts_with("hello "));
        assert!(line.contains("   1 pages"));
        assert!(line.contains("   1 files"));
        assert!(line.ends_with(&format!("{} bytes", lesson.as_bytes().len())));
    }

    #[test]
    fn run_succeeds_quietly() {
        let tmp = sample_project("");
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(tmp.path().to_path_buf()),
        };
        assert_eq!(run(&global).unwrap(), 0);
    }

    #[test]
    fn run_fails_on_bad_lesson() {
        let tmp = sample_project("");
        std::fs::write(tmp.path().join("content/broken.article"), "").unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(tmp.path().to_path_buf()),
        };
        assert!(run(&global).is_err());
    }
}
