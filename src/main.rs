use chrono::Utc;
use clap::Parser;
use dialoguer::Password;
use portfolio_common::{
    filter_projects, CategoryFilter, DeleteOutcome, DraftForm, LoadOrigin, ProjectDraft,
    ProjectRepository,
};
use portfolio_site::{cli, config, error, prompt, report, store};
use cli::{Cli, Commands};
use config::Config;
use error::{PortfolioError, Result};
use std::path::{Path, PathBuf};
use store::JsonFileStore;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let password = cli.password.as_deref();

    if let Commands::Config { set_store, set_password, show } = cli.command {
        return run_config(&mut config, set_store, set_password, show, password);
    }

    let store_path = config.store_path(cli.store.as_deref())?;
    tracing::debug!(path = %store_path.display(), "opening store");
    let mut repo = ProjectRepository::open(JsonFileStore::new(&store_path));
    match repo.origin() {
        LoadOrigin::Stored => {}
        LoadOrigin::Seed => tracing::info!("store is empty, showing bundled projects"),
        LoadOrigin::Recovered(reason) => {
            eprintln!("⚠ {} no se pudo leer ({}); se muestran los proyectos por defecto", store_path.display(), reason);
        }
    }

    match cli.command {
        Commands::List { category } => {
            let filter = category.map(CategoryFilter::Only).unwrap_or_default();
            let projects = filter_projects(repo.list(), filter);
            println!("{}\n", filter.label());
            report::print_table(&projects);
        }

        Commands::Show { id } => {
            let project = repo.get(&id).ok_or_else(|| PortfolioError::ProjectNotFound(id.clone()))?;
            report::print_detail(project);
        }

        Commands::Add { from } => {
            prompt::require_admin(config.expected_digest(), password)?;
            let draft = match from {
                Some(path) => ProjectDraft::from_json(&read_input(&path)?)?,
                None => prompt::prompt_form(DraftForm::default())?.into_draft()?,
            };
            let project = repo.create(draft, Utc::now())?;
            println!("✔ Proyecto creado: {} ({})", project.title, project.id);
        }

        Commands::Edit { id, from } => {
            prompt::require_admin(config.expected_digest(), password)?;
            let current = repo.get(&id).ok_or_else(|| PortfolioError::ProjectNotFound(id.clone()))?;
            let draft = match from {
                Some(path) => ProjectDraft::from_json(&read_input(&path)?)?,
                None => prompt::prompt_form(DraftForm::from_project(current))?.into_draft()?,
            };
            let project = repo.update(&id, draft, Utc::now())?;
            println!("✔ Cambios guardados correctamente: {}", project.title);
        }

        Commands::Delete { id, yes } => {
            prompt::require_admin(config.expected_digest(), password)?;
            let mut prompt_error = None;
            let outcome = repo.delete_with(&id, |project| {
                if yes {
                    return true;
                }
                prompt::confirm_delete(project).unwrap_or_else(|e| {
                    prompt_error = Some(e);
                    false
                })
            })?;
            if let Some(e) = prompt_error {
                return Err(e);
            }
            match outcome {
                DeleteOutcome::Deleted => println!("✔ Proyecto eliminado: {}", id),
                DeleteOutcome::Cancelled => println!("Eliminación cancelada"),
                DeleteOutcome::NotFound => return Err(PortfolioError::ProjectNotFound(id)),
            }
        }

        Commands::Export { output } => {
            prompt::require_admin(config.expected_digest(), password)?;
            let document = repo.export(Utc::now());
            let target = export_target(output, &document.file_name());
            if let Some(parent) = target.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&target, document.to_json()?)?;
            println!("✔ {} proyecto(s) exportados a {}", document.projects.len(), target.display());
        }

        Commands::Import { input } => {
            prompt::require_admin(config.expected_digest(), password)?;
            let text = read_input(&input)?;
            let count = repo.import_json(&text)?;
            println!("✔ Proyectos importados correctamente ({})", count);
        }

        // handled before the store is opened
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn run_config(
    config: &mut Config,
    set_store: Option<PathBuf>,
    set_password: bool,
    show: bool,
    password: Option<&str>,
) -> Result<()> {
    let mut changed = false;

    if let Some(path) = set_store {
        config.store_path = Some(path.clone());
        println!("✔ Almacén: {}", path.display());
        changed = true;
    }

    if set_password {
        prompt::require_admin(config.expected_digest(), password)?;
        let new_password = Password::new()
            .with_prompt("Nueva contraseña")
            .with_confirmation("Repetir contraseña", "Las contraseñas no coinciden")
            .interact()?;
        config.set_password(&new_password);
        println!("✔ Contraseña actualizada");
        changed = true;
    }

    if changed {
        config.save()?;
    }

    if show || !changed {
        println!("Configuración: {}", Config::config_path()?.display());
        println!("  almacén:    {}", config.store_path(None)?.display());
        println!(
            "  contraseña: {}",
            if config.password_digest.is_some() { "personalizada" } else { "por defecto" }
        );
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// A directory (or nothing) gets the dated backup file name
fn export_target(output: Option<PathBuf>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
        None => PathBuf::from(file_name),
    }
}
