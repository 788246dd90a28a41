//! Gallery card

use leptos::prelude::*;
use portfolio_common::PortfolioProject;

/// Month and year, e.g. "sept 2024"
pub fn month_year(project: &PortfolioProject) -> String {
    const MONTHS: [&str; 12] = [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ];
    use chrono::Datelike;
    let month = MONTHS[project.date.month0() as usize];
    format!("{} {}", month, project.date.year())
}

#[component]
pub fn ProjectCard<F>(project: PortfolioProject, on_select: F) -> impl IntoView
where
    F: Fn(PortfolioProject) + 'static + Clone,
{
    let date = month_year(&project);
    let category = project.category().label();
    let execution = project.execution.label();
    let title = project.title.clone();
    let summary = project.summary.clone();
    let image = project.main_image.clone();

    view! {
        <article
            class="project-card"
            on:click=move |_| on_select(project.clone())
        >
            <div class="card-image">
                {if image.is_empty() {
                    view! { <div class="card-placeholder">"📊"</div> }.into_any()
                } else {
                    view! { <img src=image alt=title.clone() loading="lazy" /> }.into_any()
                }}
                <span class="card-badge">{category}</span>
            </div>
            <div class="card-body">
                <h3>{title}</h3>
                <p class="card-summary">{summary}</p>
                <div class="card-meta">
                    <span class="pill">{date}</span>
                    <span class="pill muted">{execution}</span>
                </div>
            </div>
        </article>
    }
}
