//! Gallery page

use crate::components::{
    category_filter::CategoryFilterSelect, project_card::ProjectCard, project_detail::ProjectDetail,
};
use crate::storage::LocalStorageStore;
use gloo::console;
use leptos::prelude::*;
use portfolio_common::{CategoryFilter, LoadOrigin, PortfolioProject, ProjectRepository};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let repo = ProjectRepository::open(LocalStorageStore::new());
    if let LoadOrigin::Recovered(reason) = repo.origin() {
        console::warn!(format!("No se pudo leer el portafolio local: {}", reason));
    }
    let projects = repo.list().to_vec();

    let (filter, set_filter) = signal(CategoryFilter::All);
    let (selected, set_selected) = signal(None::<PortfolioProject>);

    // keyed by position so repeated ids still get their own card
    let visible = Memo::new(move |_| {
        let filter = filter.get();
        projects
            .iter()
            .enumerate()
            .filter(|(_, project)| filter.matches(project))
            .map(|(index, project)| (index, project.clone()))
            .collect::<Vec<_>>()
    });

    let on_select = move |project: PortfolioProject| set_selected.set(Some(project));
    let on_close = move |_: ()| set_selected.set(None);

    view! {
        <div class="portfolio">
            <header class="portfolio-header">
                <div class="eyebrow">"Portafolio Visela"</div>
                <h1>"Casos estratégicos, experiencias de diseño y activaciones inmersivas"</h1>
                <p class="text-muted">
                    "Filtra por categoría para explorar Estrategia, Diseño, Websites o Activaciones."
                </p>
                <CategoryFilterSelect value=filter set_value=set_filter />
            </header>

            <section class="project-grid">
                <For
                    each=move || visible.get()
                    key=|(index, _)| *index
                    children=move |(_, project)| {
                        view! { <ProjectCard project=project on_select=on_select /> }
                    }
                />
            </section>

            <Show when=move || visible.with(|v| v.is_empty())>
                <div class="empty-state">"No hay proyectos en esta categoría todavía."</div>
            </Show>

            {move || selected.get().map(|project| view! { <ProjectDetail project=project on_close=on_close /> })}
        </div>
    }
}
