//! Interactive prompts for the admin commands

use crate::error::Result;
use dialoguer::{Confirm, Input, Password, Select};
use portfolio_common::{AdminGate, Category, ContentFields, DraftForm, ExecutionType, PortfolioProject};

/// Pass the admin gate, prompting for the password unless one was given
pub fn require_admin(expected_digest: &str, password: Option<&str>) -> Result<()> {
    let mut gate = AdminGate::new(expected_digest);
    let candidate = match password {
        Some(password) => password.to_string(),
        None => Password::new().with_prompt("Contraseña").interact()?,
    };
    gate.unlock(&candidate)?;
    Ok(())
}

pub fn confirm_delete(project: &PortfolioProject) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!("¿Eliminar el proyecto \"{}\"?", project.title))
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Walk through every form field, starting from `form`
pub fn prompt_form(mut form: DraftForm) -> Result<DraftForm> {
    form.title = text("Título", &form.title)?;
    form.category = select("Categoría", &Category::ALL, form.category, Category::label)?;
    form.execution = select("Tipo", &ExecutionType::ALL, form.execution, ExecutionType::label)?;
    form.date = text("Fecha (AAAA-MM-DD)", &form.date)?;
    form.main_image = text("Imagen principal (URL)", &form.main_image)?;
    form.slug = text("Slug (vacío = automático)", &form.slug)?;
    form.summary = text("Resumen", &form.summary)?;
    form.image_urls = text("Imágenes adicionales (URLs separadas por coma)", &form.image_urls)?;
    form.external_links = text("Enlaces externos (URLs separadas por coma)", &form.external_links)?;
    form.content = prompt_content(form.category, form.content)?;
    Ok(form)
}

fn prompt_content(category: Category, mut fields: ContentFields) -> Result<ContentFields> {
    println!("--- Contenido: {} ---", category);
    match category {
        Category::Strategy => {
            fields.problem_statement = text("Planteamiento del problema", &fields.problem_statement)?;
            fields.objective = text("Objetivo", &fields.objective)?;
            fields.data_and_brief = text("Datos y brief", &fields.data_and_brief)?;
            fields.phases = prompt_phases(&fields.phases)?;
            fields.evaluation = text("Evaluación", &fields.evaluation)?;
            fields.conclusion = text("Conclusión", &fields.conclusion)?;
        }
        Category::Design => {
            fields.brief = text("Brief", &fields.brief)?;
            fields.problem = text("Problema", &fields.problem)?;
            fields.uses_ai = Confirm::new()
                .with_prompt("¿Uso de IA?")
                .default(fields.uses_ai)
                .interact()?;
            fields.description = text("Descripción", &fields.description)?;
            fields.closing = text("Conclusión o presentación", &fields.closing)?;
        }
        Category::Website => {
            fields.brief = text("Brief", &fields.brief)?;
            fields.objective = text("Objetivo", &fields.objective)?;
            fields.architecture = text("Arquitectura", &fields.architecture)?;
            fields.tech_stack = text("Stack técnico (separado por coma)", &fields.tech_stack)?;
            fields.interactive_experiences =
                text("Experiencias interactivas (separadas por coma)", &fields.interactive_experiences)?;
            fields.deliverables = text("Entregables (separados por coma)", &fields.deliverables)?;
        }
        Category::Miscellaneous => {
            fields.misc_label = text("Categoría libre", &fields.misc_label)?;
            fields.description = text("Descripción", &fields.description)?;
            fields.highlights = text("Highlights (separados por coma)", &fields.highlights)?;
        }
    }
    Ok(fields)
}

/// One prompt per phase; an empty answer ends the list
fn prompt_phases(current: &str) -> Result<String> {
    let existing: Vec<&str> = current.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut phases = Vec::new();
    loop {
        let initial = existing.get(phases.len()).copied().unwrap_or("");
        let prompt = format!("Fase {} (Título: descripción, vacío para terminar)", phases.len() + 1);
        let line = text(&prompt, initial)?;
        if line.trim().is_empty() {
            break;
        }
        phases.push(line);
    }
    Ok(phases.join("\n"))
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

fn select<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    current: T,
    label: fn(&T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(label).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(options[index])
}
