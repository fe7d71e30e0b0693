//! Plain-text and JSON listings for the non-interactive subcommands.

use std::fmt::Write as _;

use serde::Serialize;

use folio_engine::devicon_url;
use folio_types::{Experience, Project, truncate_with_ellipsis};

const SUMMARY_WIDTH: usize = 72;

/// One line per project: slug, status and title, then a short summary.
#[must_use]
pub fn project_list(projects: &[&Project]) -> String {
    let slug_width = projects
        .iter()
        .map(|project| project.slug.as_str().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for project in projects {
        let featured = if project.featured { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<slug_width$}  {:<11}  {}{featured}",
            project.slug.as_str(),
            project.status.label(),
            project.title,
        );
        let _ = writeln!(
            out,
            "{:<slug_width$}  {}",
            "",
            truncate_with_ellipsis(&project.short_description, SUMMARY_WIDTH),
        );
    }
    out
}

#[must_use]
pub fn project_detail(project: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", project.title);
    let _ = writeln!(out, "{} · {}", project.status.label(), project.role);
    out.push('\n');
    for paragraph in project.paragraphs() {
        let _ = writeln!(out, "{paragraph}\n");
    }
    if !project.highlights.is_empty() {
        out.push_str("Highlights\n");
        for item in &project.highlights {
            let _ = writeln!(out, "  - {item}");
        }
        out.push('\n');
    }
    if !project.tech.is_empty() {
        out.push_str("Tech\n");
        for tech in &project.tech {
            match devicon_url(tech) {
                Some(icon) => {
                    let _ = writeln!(out, "  - {tech} ({icon})");
                }
                None => {
                    let _ = writeln!(out, "  - {tech}");
                }
            }
        }
        out.push('\n');
    }
    if !project.gallery.is_empty() {
        out.push_str("Gallery\n");
        for image in &project.gallery {
            let _ = writeln!(out, "  - {image}");
        }
        out.push('\n');
    }
    if let Some(video) = &project.video {
        match &video.poster {
            Some(poster) => {
                let _ = writeln!(out, "Video: {} (poster {poster})", video.src);
            }
            None => {
                let _ = writeln!(out, "Video: {}", video.src);
            }
        }
    }
    if let Some(repo) = &project.repo_url {
        let _ = writeln!(out, "Repository: {repo}");
    }
    if let Some(live) = &project.live_url {
        let _ = writeln!(out, "Live: {live}");
    }
    out
}

#[must_use]
pub fn experience_list(entries: &[Experience]) -> String {
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(out, "{} · {}", entry.role, entry.company);
        let _ = writeln!(out, "{} · {}", entry.period, entry.location);
        let _ = writeln!(out, "{}", entry.description);
        for item in &entry.responsibilities {
            let _ = writeln!(out, "  - {item}");
        }
        out.push('\n');
    }
    out
}

/// Pretty JSON with a trailing newline.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::{experience_list, project_detail, project_list, to_json};
    use folio_content::ContentStore;
    use folio_types::ProjectVideo;

    #[test]
    fn list_has_two_lines_per_project() {
        let store = ContentStore::builtin().unwrap();
        let projects: Vec<_> = store.projects().all().iter().collect();
        let text = project_list(&projects);
        assert_eq!(text.lines().count(), projects.len() * 2);
        assert!(text.starts_with("wms"));
        assert!(text.lines().next().unwrap().ends_with(" *"));
    }

    #[test]
    fn detail_includes_links_and_highlights() {
        let store = ContentStore::builtin().unwrap();
        let text = project_detail(store.project("helpdesk").unwrap());
        assert!(text.starts_with("Helpdesk MVP\n"));
        assert!(text.contains("Highlights"));
        assert!(text.contains("Repository: https://github.com/albertogalvez-dev/helpdesk-mvp"));
    }

    #[test]
    fn detail_lists_tech_with_icons() {
        let store = ContentStore::builtin().unwrap();
        let text = project_detail(store.project("helpdesk").unwrap());
        assert!(text.contains(
            "  - Docker (https://cdn.jsdelivr.net/gh/devicons/devicon/icons/docker/docker-original.svg)\n"
        ));
        assert!(text.contains("  - Celery\n"));
    }

    #[test]
    fn detail_lists_gallery_and_video() {
        let store = ContentStore::builtin().unwrap();
        let mut project = store.project("wms").unwrap().clone();
        assert!(project.video.is_none());
        project.video = Some(ProjectVideo {
            src: "/projects/wms/demo.mp4".into(),
            poster: Some("/projects/wms/poster.svg".into()),
        });

        let text = project_detail(&project);
        assert!(text.contains("Gallery\n  - /projects/wms/dashboard.svg\n"));
        assert!(text.contains("  - /projects/wms/reports.svg\n"));
        assert!(text.contains("Video: /projects/wms/demo.mp4 (poster /projects/wms/poster.svg)\n"));

        project.video.as_mut().unwrap().poster = None;
        assert!(project_detail(&project).contains("Video: /projects/wms/demo.mp4\n"));
    }

    #[test]
    fn experience_lists_responsibilities() {
        let store = ContentStore::builtin().unwrap();
        let text = experience_list(store.experiences().all());
        assert!(text.contains("  - Available in Granada or remote."));
    }

    #[test]
    fn json_uses_kebab_case_status() {
        let store = ContentStore::builtin().unwrap();
        let json = to_json(store.project("project-3").unwrap()).unwrap();
        assert!(json.contains("\"status\": \"coming-soon\""));
        assert!(json.ends_with('\n'));
    }
}
