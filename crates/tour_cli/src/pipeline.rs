//! Shared helpers for CLI commands: project discovery, configuration loading
//! and the cache build every lesson command starts with.

use std::path::{Path, PathBuf};

use tour_cache::{build_cache_with_report, BuildOptions, BuildReport, LessonService};
use tour_config::{load_config, load_config_from_str, TourConfig, CONFIG_FILE};

use crate::GlobalArgs;

/// A loaded project: its root directory and configuration.
pub struct Project {
    /// The directory holding `tour.toml`.
    pub root: PathBuf,
    /// The parsed configuration.
    pub config: TourConfig,
}

impl Project {
    /// Returns the directory that holds the lesson files.
    pub fn content_dir(&self) -> PathBuf {
        self.config.content_dir(&self.root)
    }
}

/// Walks up from `start` looking for the nearest directory containing `tour.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Loads the project selected by the global CLI args.
///
/// `--config` may name a configuration file (any file name) or a project
/// directory. Without it, the project is found by walking up from the
/// current directory.
pub fn load_project(global: &GlobalArgs) -> Result<Project, Box<dyn std::error::Error>> {
    let (root, config) = match global.config {
        Some(ref path) if path.is_file() => {
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            (root, load_config_from_str(&content)?)
        }
        Some(ref dir) => (dir.clone(), load_config(dir)?),
        None => {
            let root = find_project_root(&std::env::current_dir()?)?;
            let config = load_config(&root)?;
            (root, config)
        }
    };
    tracing::debug!(root = %root.display(), name = %config.tour.name, "loaded project");
    Ok(Project { root, config })
}

/// Builds the lesson service for a project using its build settings.
pub fn build_service(
    project: &Project,
) -> Result<(LessonService, BuildReport), Box<dyn std::error::Error>> {
    let options = BuildOptions::from_config(&project.config);
    let (cache, report) = build_cache_with_report(&project.content_dir(), &options)?;
    Ok((LessonService::new(cache), report))
}

/// Loads the project and builds its lesson service in one step.
pub fn load_service(
    global: &GlobalArgs,
) -> Result<(Project, LessonService, BuildReport), Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let (service, report) = build_service(&project)?;
    Ok((project, service, report))
}

/// Test fixture: a project directory with a config and two lessons.
#[cfg(test)]
pub(crate) fn sample_project(extra_config: &str) -> tempfile::TempDir {
    use std::fs;

    let tmp = tempfile::TempDir::new().unwrap();
    fs::write(
        tmp.path().join(CONFIG_FILE),
        format!("[tour]\nname = \"Sample\"\n{extra_config}"),
    )
    .unwrap();
    let content = tmp.path().join("content");
    fs::create_dir_all(content.join("hello")).unwrap();
    fs::write(
        content.join("hello.article"),
        "Hello\n\n* Intro\n\n.play hello/main.go\n",
    )
    .unwrap();
    fs::write(content.join("hello/main.go"), "package main").unwrap();
    fs::write(
        content.join("basics.article"),
        "Basics\nThe basics.\n\n* Packages\n\nEvery program is made of packages.\n",
    )
    .unwrap();
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use tour_config::FailurePolicy;

    fn global_for(path: &Path) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            config: Some(path.to_path_buf()),
        }
    }

    #[test]
    fn find_project_root_in_current_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[tour]\nname = \"t\"\n").unwrap();
        let root = find_project_root(tmp.path()).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn find_project_root_in_parent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[tour]\nname = \"t\"\n").unwrap();
        let nested = tmp.path().join("content").join("hello");
        fs::create_dir_all(&nested).unwrap();
        let root = find_project_root(&nested).unwrap();
        assert_eq!(root, tmp.path());
    }

    #[test]
    fn find_project_root_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = find_project_root(tmp.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("could not find tour.toml"));
    }

    #[test]
    fn load_project_from_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("staging.toml");
        fs::write(&config_path, "[tour]\nname = \"Staging\"\ncontent = \"lessons\"\n").unwrap();
        let project = load_project(&global_for(&config_path)).unwrap();
        assert_eq!(project.root, tmp.path());
        assert_eq!(project.config.tour.name, "Staging");
        assert_eq!(project.content_dir(), tmp.path().join("lessons"));
    }

    #[test]
    fn load_project_from_dir() {
        let tmp = sample_project("");
        let project = load_project(&global_for(tmp.path())).unwrap();
        assert_eq!(project.root, tmp.path());
        assert_eq!(project.config.tour.name, "Sample");
    }

    #[test]
    fn load_project_missing_config() {
        let tmp = TempDir::new().unwrap();
        assert!(load_project(&global_for(tmp.path())).is_err());
    }

    #[test]
    fn load_service_builds_every_lesson() {
        let tmp = sample_project("[build]\nparallel = true\n");
        let (project, service, report) = load_service(&global_for(tmp.path())).unwrap();
        assert!(project.config.build.parallel);
        let ids: Vec<&str> = service.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["basics", "hello"]);
        assert_eq!(report.compiled.len(), 2);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn load_service_skip_policy() {
        let tmp = sample_project("[build]\non_error = \"skip\"\n");
        fs::write(tmp.path().join("content/empty.article"), "").unwrap();
        let (project, service, report) = load_service(&global_for(tmp.path())).unwrap();
        assert_eq!(project.config.build.on_error, FailurePolicy::Skip);
        assert_eq!(service.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].id.as_str(), "empty");
    }

    #[test]
    fn load_service_abort_policy() {
        let tmp = sample_project("");
        fs::write(tmp.path().join("content/empty.article"), "").unwrap();
        let err = load_service(&global_for(tmp.path())).err().unwrap();
        assert!(err.to_string().contains("lesson 'empty'"));
    }
}
