//! Detail modal for one project

use leptos::prelude::*;
use portfolio_common::{PortfolioProject, ProjectContent};

const MONTHS: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
    "octubre", "noviembre", "diciembre",
];

/// Long form date, e.g. "12 de septiembre de 2024"
pub fn long_date(project: &PortfolioProject) -> String {
    use chrono::Datelike;
    format!(
        "{} de {} de {}",
        project.date.day(),
        MONTHS[project.date.month0() as usize],
        project.date.year()
    )
}

fn section(title: &'static str, body: String) -> impl IntoView {
    (!body.trim().is_empty()).then(|| {
        view! {
            <div class="detail-section">
                <h3>{title}</h3>
                <p>{body}</p>
            </div>
        }
    })
}

fn list_section(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="detail-section">
                <h3>{title}</h3>
                <ul>{items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}</ul>
            </div>
        }
    })
}

fn content_view(content: ProjectContent) -> AnyView {
    match content {
        ProjectContent::Strategy(c) => {
            let phases: Vec<String> = c
                .phases
                .iter()
                .map(|p| format!("Fase {}: {} - {}", p.number, p.title, p.description))
                .collect();
            view! {
                {section("Planteamiento del Problema", c.problem_statement)}
                {section("Objetivo", c.objective)}
                {section("Datos y Brief", c.data_and_brief)}
                {list_section("Fases", phases)}
                {section("Evaluación", c.evaluation)}
                {section("Conclusión", c.conclusion)}
            }
            .into_any()
        }
        ProjectContent::Design(c) => view! {
            {section("Brief", c.brief)}
            {section("Problema", c.problem)}
            {section("Uso de IA", if c.uses_ai { "Sí" } else { "No" }.to_string())}
            {section("Descripción", c.description)}
            {section("Conclusión o Presentación", c.closing)}
        }
        .into_any(),
        ProjectContent::Website(c) => view! {
            {section("Brief", c.brief)}
            {section("Objetivo", c.objective)}
            {section("Arquitectura", c.architecture)}
            {section("Stack Técnico", c.tech_stack.join(", "))}
            {list_section("Experiencias Interactivas", c.interactive_experiences)}
            {list_section("Entregables", c.deliverables)}
        }
        .into_any(),
        ProjectContent::Miscellaneous(c) => view! {
            {section("Categoría", c.label)}
            {section("Descripción", c.description)}
            {list_section("Highlights", c.highlights)}
        }
        .into_any(),
    }
}

#[component]
pub fn ProjectDetail<F>(project: PortfolioProject, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    let date = long_date(&project);
    let category = project.category().label();
    let PortfolioProject {
        title,
        summary,
        main_image,
        execution,
        content,
        attachments,
        external_links,
        ..
    } = project;

    let close_backdrop = on_close.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| close_backdrop(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| on_close(())>"✕"</button>

                {(!main_image.is_empty()).then(|| view! { <img class="detail-image" src=main_image alt=title.clone() /> })}

                <span class="badge">{category}</span>
                <h2>{title.clone()}</h2>
                <p class="detail-summary">{summary}</p>

                <div class="card-meta">
                    <span class="pill">{date}</span>
                    <span class="pill muted">{execution.label()}</span>
                </div>

                {content_view(content)}

                {(!attachments.is_empty()).then(|| view! {
                    <div class="detail-section">
                        <h3>"Adjuntos"</h3>
                        <div class="link-row">
                            {attachments
                                .into_iter()
                                .map(|a| view! {
                                    <a class="chip" href=a.url target="_blank" rel="noopener noreferrer">{a.label}</a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })}

                {(!external_links.is_empty()).then(|| view! {
                    <div class="detail-section">
                        <h3>"Enlaces Externos"</h3>
                        <div class="link-row">
                            {external_links
                                .into_iter()
                                .map(|l| view! {
                                    <a class="chip outline" href=l.url target="_blank" rel="noopener noreferrer">{l.label}</a>
                                })
                                .collect_view()}
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
