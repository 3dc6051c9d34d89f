//! # Template Catalog
//!
//! File: cli/src/generator/catalog.rs
//!
//! ## Overview
//!
//! The fixed, versioned set of templates the generator can render. Every
//! template is compiled into the binary with `include_str!`, so a run depends on
//! no filesystem layout other than the output root.
//!
//! Templates are addressed by [`TemplateId`]. Each id maps to a stable Tera
//! template name (its path under `cli/templates/` without the `.tera`
//! suffix) and to its embedded source. The catalog is read-only; the renderer
//! copies it into a fresh `Tera` instance once per run.
//!

/// Every template the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    // Root metadata
    ManagePy,
    Requirements,
    EnvExample,
    GitIgnore,
    /// Empty `__init__.py` package marker.
    PackageInit,
    // Configuration package
    Settings,
    ProjectUrls,
    Wsgi,
    Asgi,
    // Application package
    Admin,
    Apps,
    Models,
    Tests,
    ViewsFbv,
    ViewsCbv,
    ViewsApiFbv,
    ViewsApiCbv,
    UrlsMvp,
    UrlsApi,
    Forms,
    Serializers,
    // MVP front end
    BaseHtml,
    HomeHtml,
    AboutHtml,
    Stylesheet,
    // Containerization
    Dockerfile,
    DockerCompose,
    DockerIgnore,
    Entrypoint,
}

impl TemplateId {
    pub const ALL: [TemplateId; 29] = [
        TemplateId::ManagePy,
        TemplateId::Requirements,
        TemplateId::EnvExample,
        TemplateId::GitIgnore,
        TemplateId::PackageInit,
        TemplateId::Settings,
        TemplateId::ProjectUrls,
        TemplateId::Wsgi,
        TemplateId::Asgi,
        TemplateId::Admin,
        TemplateId::Apps,
        TemplateId::Models,
        TemplateId::Tests,
        TemplateId::ViewsFbv,
        TemplateId::ViewsCbv,
        TemplateId::ViewsApiFbv,
        TemplateId::ViewsApiCbv,
        TemplateId::UrlsMvp,
        TemplateId::UrlsApi,
        TemplateId::Forms,
        TemplateId::Serializers,
        TemplateId::BaseHtml,
        TemplateId::HomeHtml,
        TemplateId::AboutHtml,
        TemplateId::Stylesheet,
        TemplateId::Dockerfile,
        TemplateId::DockerCompose,
        TemplateId::DockerIgnore,
        TemplateId::Entrypoint,
    ];

    /// The name the template is registered under in the rendering engine.
    pub fn name(self) -> &'static str {
        match self {
            TemplateId::ManagePy => "root/manage.py",
            TemplateId::Requirements => "root/requirements.txt",
            TemplateId::EnvExample => "root/env.example",
            TemplateId::GitIgnore => "root/gitignore",
            TemplateId::PackageInit => "package/init.py",
            TemplateId::Settings => "project/settings.py",
            TemplateId::ProjectUrls => "project/urls.py",
            TemplateId::Wsgi => "project/wsgi.py",
            TemplateId::Asgi => "project/asgi.py",
            TemplateId::Admin => "app/admin.py",
            TemplateId::Apps => "app/apps.py",
            TemplateId::Models => "app/models.py",
            TemplateId::Tests => "app/tests.py",
            TemplateId::ViewsFbv => "app/views_fbv.py",
            TemplateId::ViewsCbv => "app/views_cbv.py",
            TemplateId::ViewsApiFbv => "app/views_api_fbv.py",
            TemplateId::ViewsApiCbv => "app/views_api_cbv.py",
            TemplateId::UrlsMvp => "app/urls_mvp.py",
            TemplateId::UrlsApi => "app/urls_api.py",
            TemplateId::Forms => "app/forms.py",
            TemplateId::Serializers => "app/serializers.py",
            TemplateId::BaseHtml => "html/base.html",
            TemplateId::HomeHtml => "html/home.html",
            TemplateId::AboutHtml => "html/about.html",
            TemplateId::Stylesheet => "static/style.css",
            TemplateId::Dockerfile => "docker/Dockerfile",
            TemplateId::DockerCompose => "docker/docker-compose.yml",
            TemplateId::DockerIgnore => "docker/dockerignore",
            TemplateId::Entrypoint => "docker/entrypoint.sh",
        }
    }

    /// The embedded template source.
    pub fn source(self) -> &'static str {
        match self {
            TemplateId::ManagePy => include_str!("../../templates/root/manage.py.tera"),
            TemplateId::Requirements => include_str!("../../templates/root/requirements.txt.tera"),
            TemplateId::EnvExample => include_str!("../../templates/root/env.example.tera"),
            TemplateId::GitIgnore => include_str!("../../templates/root/gitignore.tera"),
            TemplateId::PackageInit => include_str!("../../templates/package/init.py.tera"),
            TemplateId::Settings => include_str!("../../templates/project/settings.py.tera"),
            TemplateId::ProjectUrls => include_str!("../../templates/project/urls.py.tera"),
            TemplateId::Wsgi => include_str!("../../templates/project/wsgi.py.tera"),
            TemplateId::Asgi => include_str!("../../templates/project/asgi.py.tera"),
            TemplateId::Admin => include_str!("../../templates/app/admin.py.tera"),
            TemplateId::Apps => include_str!("../../templates/app/apps.py.tera"),
            TemplateId::Models => include_str!("../../templates/app/models.py.tera"),
            TemplateId::Tests => include_str!("../../templates/app/tests.py.tera"),
            TemplateId::ViewsFbv => include_str!("../../templates/app/views_fbv.py.tera"),
            TemplateId::ViewsCbv => include_str!("../../templates/app/views_cbv.py.tera"),
            TemplateId::ViewsApiFbv => include_str!("../../templates/app/views_api_fbv.py.tera"),
            TemplateId::ViewsApiCbv => include_str!("../../templates/app/views_api_cbv.py.tera"),
            TemplateId::UrlsMvp => include_str!("../../templates/app/urls_mvp.py.tera"),
            TemplateId::UrlsApi => include_str!("../../templates/app/urls_api.py.tera"),
            TemplateId::Forms => include_str!("../../templates/app/forms.py.tera"),
            TemplateId::Serializers => include_str!("../../templates/app/serializers.py.tera"),
            TemplateId::BaseHtml => include_str!("../../templates/html/base.html.tera"),
            TemplateId::HomeHtml => include_str!("../../templates/html/home.html.tera"),
            TemplateId::AboutHtml => include_str!("../../templates/html/about.html.tera"),
            TemplateId::Stylesheet => include_str!("../../templates/static/style.css.tera"),
            TemplateId::Dockerfile => include_str!("../../templates/docker/Dockerfile.tera"),
            TemplateId::DockerCompose => {
                include_str!("../../templates/docker/docker-compose.yml.tera")
            }
            TemplateId::DockerIgnore => include_str!("../../templates/docker/dockerignore.tera"),
            TemplateId::Entrypoint => include_str!("../../templates/docker/entrypoint.sh.tera"),
        }
    }
}

/// `(name, source)` pairs for every catalog entry, in catalog order.
pub fn entries() -> impl Iterator<Item = (&'static str, &'static str)> {
    TemplateId::ALL.iter().map(|id| (id.name(), id.source()))
}
