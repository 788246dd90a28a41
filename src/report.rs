//! Console rendering of projects

use portfolio_common::{PortfolioProject, ProjectContent};

/// Date as shown in the admin table, e.g. 12/9/2024
pub fn display_date(project: &PortfolioProject) -> String {
    project.date.format("%-d/%-m/%Y").to_string()
}

pub fn print_table(projects: &[&PortfolioProject]) {
    if projects.is_empty() {
        println!("No hay proyectos todavía.");
        return;
    }
    println!("{:<44} {:<32} {:<11} {:<11} {}", "ID", "Título", "Categoría", "Fecha", "Tipo");
    for project in projects {
        println!(
            "{:<44} {:<32} {:<11} {:<11} {}",
            project.id,
            truncate(&project.title, 32),
            project.category(),
            display_date(project),
            project.execution
        );
    }
    println!("\n{} proyecto(s)", projects.len());
}

pub fn print_detail(project: &PortfolioProject) {
    println!("{}", project.title);
    println!("  id:        {}", project.id);
    println!("  slug:      {}", project.slug);
    println!("  categoría: {}", project.category());
    println!("  tipo:      {}", project.execution);
    println!("  fecha:     {}", display_date(project));
    if !project.main_image.is_empty() {
        println!("  imagen:    {}", project.main_image);
    }
    println!("\n{}\n", project.summary);

    for (label, value) in content_lines(&project.content) {
        if !value.is_empty() {
            println!("{}: {}", label, value);
        }
    }

    if !project.attachments.is_empty() {
        println!("\nAdjuntos:");
        for attachment in &project.attachments {
            println!("  - {} ({:?}) {}", attachment.label, attachment.kind, attachment.url);
        }
    }
    if !project.external_links.is_empty() {
        println!("\nEnlaces externos:");
        for link in &project.external_links {
            println!("  - {} {}", link.label, link.url);
        }
    }
}

/// Labelled text rows for the category-specific content
pub fn content_lines(content: &ProjectContent) -> Vec<(&'static str, String)> {
    match content {
        ProjectContent::Strategy(c) => {
            let mut lines = vec![
                ("Planteamiento del problema", c.problem_statement.clone()),
                ("Objetivo", c.objective.clone()),
                ("Datos y brief", c.data_and_brief.clone()),
            ];
            for phase in &c.phases {
                lines.push(("Fase", format!("{}. {} - {}", phase.number, phase.title, phase.description)));
            }
            lines.push(("Evaluación", c.evaluation.clone()));
            lines.push(("Conclusión", c.conclusion.clone()));
            lines
        }
        ProjectContent::Design(c) => vec![
            ("Brief", c.brief.clone()),
            ("Problema", c.problem.clone()),
            ("Uso de IA", if c.uses_ai { "Sí" } else { "No" }.to_string()),
            ("Descripción", c.description.clone()),
            ("Conclusión", c.closing.clone()),
        ],
        ProjectContent::Website(c) => vec![
            ("Brief", c.brief.clone()),
            ("Objetivo", c.objective.clone()),
            ("Arquitectura", c.architecture.clone()),
            ("Stack técnico", c.tech_stack.join(", ")),
            ("Experiencias", c.interactive_experiences.join(", ")),
            ("Entregables", c.deliverables.join(", ")),
        ],
        ProjectContent::Miscellaneous(c) => vec![
            ("Categoría", c.label.clone()),
            ("Descripción", c.description.clone()),
            ("Highlights", c.highlights.join(", ")),
        ],
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
