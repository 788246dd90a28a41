//! Admin panel: password gate, project table, CRUD, backup

use crate::browser;
use crate::components::project_form::ProjectForm;
use crate::storage::LocalStorageStore;
use gloo::console;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use portfolio_common::{
    AdminGate, DeleteOutcome, DraftForm, Error, LoadOrigin, ProjectRepository,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const NOTICE_MS: u32 = 3_000;
const SAVED_NOTICE: &str = "Cambios guardados correctamente";

#[component]
pub fn AdminPage() -> impl IntoView {
    let gate = RwSignal::new(AdminGate::default());

    view! {
        <Show
            when=move || gate.with(|g| g.is_unlocked())
            fallback=move || view! { <LoginForm gate=gate /> }
        >
            <Dashboard gate=gate />
        </Show>
    }
}

#[component]
fn LoginForm(gate: RwSignal<AdminGate>) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = password.get_untracked();
        let mut result = Ok(());
        gate.update(|g| result = g.unlock(&candidate));
        match result {
            Ok(()) => set_error.set(None),
            Err(_) => set_error.set(Some("Contraseña incorrecta".to_string())),
        }
    };

    view! {
        <div class="login">
            <div class="card login-card">
                <div class="login-icon">"🔒"</div>
                <h2>"Panel de Administración"</h2>
                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="admin-password">"Contraseña"</label>
                        <input
                            type="password"
                            id="admin-password"
                            placeholder="Ingresa tu contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                    <button class="btn btn-primary btn-block" type="submit">"Ingresar"</button>
                </form>
            </div>
        </div>
    }
}

#[component]
fn Dashboard(gate: RwSignal<AdminGate>) -> impl IntoView {
    let repo = RwSignal::new(ProjectRepository::open(LocalStorageStore::new()));
    if let LoadOrigin::Recovered(reason) = repo.with_untracked(|r| r.origin().clone()) {
        console::error!(format!("Error loading projects: {}", reason));
    }

    let (notice, set_notice) = signal(None::<String>);
    let show_notice = move || {
        set_notice.set(Some(SAVED_NOTICE.to_string()));
        Timeout::new(NOTICE_MS, move || {
            let _ = set_notice.try_set(None);
        })
        .forget();
    };

    // None: form closed. Some(None): creating. Some(Some(id)): editing.
    let editing = RwSignal::new(None::<Option<String>>);
    let form = RwSignal::new(DraftForm::default());
    let (form_error, set_form_error) = signal(None::<String>);

    let open_create = move |_| {
        form.set(DraftForm::default());
        set_form_error.set(None);
        editing.set(Some(None));
    };

    let open_edit = move |id: String| {
        let Some(project) = repo.with_untracked(|r| r.get(&id).cloned()) else {
            browser::alert("El proyecto ya no existe");
            return;
        };
        form.set(DraftForm::from_project(&project));
        set_form_error.set(None);
        editing.set(Some(Some(project.id)));
    };

    let close_form = move |_: ()| editing.set(None);

    let submit_form = move |_: ()| {
        let draft = match form.with_untracked(|f| f.into_draft()) {
            Ok(draft) => draft,
            Err(e) => {
                set_form_error.set(Some(e.to_string()));
                return;
            }
        };
        let target = editing.get_untracked().flatten();
        let now = browser::now_utc();
        let mut result = Ok(());
        repo.update(|r| {
            result = match &target {
                Some(id) => r.update(id, draft, now).map(|_| ()),
                None => r.create(draft, now).map(|_| ()),
            };
        });
        match result {
            Ok(()) => {
                editing.set(None);
                show_notice();
            }
            Err(e) => {
                console::error!(format!("save failed: {}", e));
                set_form_error.set(Some(e.to_string()));
            }
        }
    };

    let delete_project = move |id: String| {
        let mut result = Ok(DeleteOutcome::NotFound);
        repo.update(|r| {
            result = r.delete_with(&id, |_| browser::confirm("¿Eliminar este proyecto?"));
        });
        match result {
            Ok(DeleteOutcome::Deleted) => show_notice(),
            Ok(_) => {}
            Err(e) => browser::alert(&format!("Error al eliminar: {}", e)),
        }
    };

    let export_backup = move |_| {
        let document = repo.with_untracked(|r| r.export(browser::now_utc()));
        let result = document
            .to_json()
            .map_err(|e| e.to_string())
            .and_then(|json| browser::download_text(&document.file_name(), &json, "application/json"));
        if let Err(e) = result {
            console::error!(format!("export failed: {}", e));
            browser::alert(&format!("Error al exportar: {}", e));
        }
    };

    let import_backup = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // same file can be picked again
        input.set_value("");

        let started = browser::read_file_text(file, move |text| {
            let result = match text {
                Ok(text) => repo
                    .try_update(|r| r.import_json(&text))
                    .unwrap_or_else(|| Err(Error::Storage("el panel ya no está abierto".to_string()))),
                Err(e) => Err(Error::Storage(e)),
            };
            match result {
                Ok(count) => {
                    console::log!(format!("imported {} projects", count));
                    show_notice();
                }
                Err(e) => browser::alert(&format!("Error al importar: {}", e)),
            }
        });
        if let Err(e) = started {
            browser::alert(&format!("Error al importar: {}", e));
        }
    };

    // rows are keyed by (revision, position): every commit rebuilds them
    let rows = Memo::new(move |_| {
        repo.with(|r| {
            let revision = r.revision();
            r.list()
                .iter()
                .cloned()
                .enumerate()
                .map(|(index, project)| (revision, index, project))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="admin">
            <div class="admin-header">
                <div>
                    <h1>"Panel de Administración"</h1>
                    <p class="text-muted">"Gestiona tu portafolio y contenido"</p>
                </div>
                <button class="btn btn-secondary" on:click=move |_| gate.update(|g| g.lock())>
                    "Cerrar Sesión"
                </button>
            </div>

            {move || notice.get().map(|message| view! { <div class="notice">{format!("✓ {}", message)}</div> })}

            <div class="admin-toolbar">
                <h2>"Proyectos"</h2>
                <div class="toolbar-actions">
                    <button class="btn btn-secondary" on:click=export_backup>"Exportar"</button>
                    <label class="btn btn-secondary">
                        "Importar"
                        <input type="file" accept=".json,application/json" class="hidden" on:change=import_backup />
                    </label>
                    <button class="btn btn-primary" on:click=open_create>"Nuevo Proyecto"</button>
                </div>
            </div>

            <table class="project-table">
                <thead>
                    <tr>
                        <th>"Título"</th>
                        <th>"Categoría"</th>
                        <th>"Fecha"</th>
                        <th>"Tipo"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|(revision, index, _)| (*revision, *index)
                        children=move |(_, _, project)| {
                            let for_edit = project.id.clone();
                            let id = project.id.clone();
                            view! {
                                <tr>
                                    <td>{project.title.clone()}</td>
                                    <td>{project.category().label()}</td>
                                    <td>{project.date.format("%-d/%-m/%Y").to_string()}</td>
                                    <td>{project.execution.label()}</td>
                                    <td class="row-actions">
                                        <button class="btn btn-small" on:click=move |_| open_edit(for_edit.clone())>
                                            "Editar"
                                        </button>
                                        <button class="btn btn-small btn-danger" on:click=move |_| delete_project(id.clone())>
                                            "Eliminar"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            {move || editing.get().map(|target| view! {
                <ProjectForm
                    form=form
                    editing=target.is_some()
                    error=form_error
                    on_submit=submit_form
                    on_cancel=close_form
                />
            })}
        </div>
    }
}
