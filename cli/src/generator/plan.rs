//! # Generation Plan Selector
//!
//! File: cli/src/generator/plan.rs
//!
//! ## Overview
//!
//! Maps a validated `ProjectSpec` to the ordered list of files a run writes:
//! which catalog template renders each output path, relative to the project
//! root. The selection is a pure function of four inputs (project type, view
//! style, database, containerization), so all 16 combinations are covered by a
//! single `match` plus a few conditional groups.
//!
//! ## Layout
//!
//! ```text
//! <name>/
//! ├── manage.py  requirements.txt  .env.example  .gitignore
//! ├── <name>/      __init__.py settings.py urls.py wsgi.py asgi.py
//! ├── <app>/       __init__.py admin.py apps.py models.py tests.py
//! │                views.py urls.py (+ forms.py | serializers.py)
//! ├── <app>/templates/<app>/  base.html home.html about.html   (mvp)
//! ├── static/css/style.css                                     (mvp)
//! └── Dockerfile docker-compose.yml .dockerignore [entrypoint.sh] (docker)
//! ```
//!
use super::catalog::TemplateId;
use super::spec::{Database, ProjectSpec, ProjectType, ViewStyle};

/// One file to produce: render `template`, write it to `output` (relative to
/// the project root), optionally mark it executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub template: TemplateId,
    pub output: String,
    pub executable: bool,
}

impl PlanEntry {
    fn file(template: TemplateId, output: impl Into<String>) -> Self {
        Self {
            template,
            output: output.into(),
            executable: false,
        }
    }

    fn script(template: TemplateId, output: impl Into<String>) -> Self {
        Self {
            template,
            output: output.into(),
            executable: true,
        }
    }
}

/// Ordered plan for one run. Output paths are unique within a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationPlan {
    entries: Vec<PlanEntry>,
}

impl GenerationPlan {
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Relative output paths in plan order.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.output.as_str())
    }

    fn push(&mut self, entry: PlanEntry) {
        self.entries.push(entry);
    }
}

/// Selects the files to generate for `spec`.
pub fn select_plan(spec: &ProjectSpec) -> GenerationPlan {
    let project = spec.name.as_str();
    let app = spec.app_name.as_str();
    let mut plan = GenerationPlan::default();

    // Root metadata
    plan.push(PlanEntry::file(TemplateId::ManagePy, "manage.py"));
    plan.push(PlanEntry::file(TemplateId::Requirements, "requirements.txt"));
    plan.push(PlanEntry::file(TemplateId::EnvExample, ".env.example"));
    plan.push(PlanEntry::file(TemplateId::GitIgnore, ".gitignore"));

    // Configuration package
    plan.push(PlanEntry::file(TemplateId::PackageInit, format!("{project}/__init__.py")));
    plan.push(PlanEntry::file(TemplateId::Settings, format!("{project}/settings.py")));
    plan.push(PlanEntry::file(TemplateId::ProjectUrls, format!("{project}/urls.py")));
    plan.push(PlanEntry::file(TemplateId::Wsgi, format!("{project}/wsgi.py")));
    plan.push(PlanEntry::file(TemplateId::Asgi, format!("{project}/asgi.py")));

    // Application package
    plan.push(PlanEntry::file(TemplateId::PackageInit, format!("{app}/__init__.py")));
    plan.push(PlanEntry::file(TemplateId::Admin, format!("{app}/admin.py")));
    plan.push(PlanEntry::file(TemplateId::Apps, format!("{app}/apps.py")));
    plan.push(PlanEntry::file(TemplateId::Models, format!("{app}/models.py")));
    plan.push(PlanEntry::file(TemplateId::Tests, format!("{app}/tests.py")));

    let (views, urls, extra, extra_file) = match (spec.project_type, spec.view_style) {
        (ProjectType::Api, ViewStyle::FunctionBased) => (
            TemplateId::ViewsApiFbv,
            TemplateId::UrlsApi,
            TemplateId::Serializers,
            "serializers.py",
        ),
        (ProjectType::Api, ViewStyle::ClassBased) => (
            TemplateId::ViewsApiCbv,
            TemplateId::UrlsApi,
            TemplateId::Serializers,
            "serializers.py",
        ),
        (ProjectType::Mvp, ViewStyle::FunctionBased) => (
            TemplateId::ViewsFbv,
            TemplateId::UrlsMvp,
            TemplateId::Forms,
            "forms.py",
        ),
        (ProjectType::Mvp, ViewStyle::ClassBased) => (
            TemplateId::ViewsCbv,
            TemplateId::UrlsMvp,
            TemplateId::Forms,
            "forms.py",
        ),
    };
    plan.push(PlanEntry::file(views, format!("{app}/views.py")));
    plan.push(PlanEntry::file(urls, format!("{app}/urls.py")));
    plan.push(PlanEntry::file(extra, format!("{app}/{extra_file}")));

    if spec.project_type == ProjectType::Mvp {
        plan.push(PlanEntry::file(TemplateId::BaseHtml, format!("{app}/templates/{app}/base.html")));
        plan.push(PlanEntry::file(TemplateId::HomeHtml, format!("{app}/templates/{app}/home.html")));
        plan.push(PlanEntry::file(TemplateId::AboutHtml, format!("{app}/templates/{app}/about.html")));
        plan.push(PlanEntry::file(TemplateId::Stylesheet, "static/css/style.css"));
    }

    if spec.with_containerization {
        plan.push(PlanEntry::file(TemplateId::Dockerfile, "Dockerfile"));
        plan.push(PlanEntry::file(TemplateId::DockerCompose, "docker-compose.yml"));
        plan.push(PlanEntry::file(TemplateId::DockerIgnore, ".dockerignore"));
        if spec.database == Database::Postgresql {
            plan.push(PlanEntry::script(TemplateId::Entrypoint, "entrypoint.sh"));
        }
    }

    plan
}
