//! Form inputs bound to a `DraftForm` signal

use leptos::prelude::*;
use portfolio_common::{Category, DraftForm};

pub type Getter = fn(&DraftForm) -> String;
pub type Setter = fn(&mut DraftForm, String);

pub fn text_field(
    label: &'static str,
    input_type: &'static str,
    required: bool,
    form: RwSignal<DraftForm>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                required=required
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </div>
    }
}

pub fn text_area(
    label: &'static str,
    hint: &'static str,
    form: RwSignal<DraftForm>,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows="3"
                placeholder=hint
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            ></textarea>
        </div>
    }
}

/// Inputs for the content of the selected category
#[component]
pub fn ContentFields(form: RwSignal<DraftForm>, category: Memo<Category>) -> impl IntoView {
    move || match category.get() {
        Category::Strategy => view! {
            {text_area("Planteamiento del problema", "", form,
                |f| f.content.problem_statement.clone(), |f, v| f.content.problem_statement = v)}
            {text_area("Objetivo", "", form,
                |f| f.content.objective.clone(), |f, v| f.content.objective = v)}
            {text_area("Datos y brief", "", form,
                |f| f.content.data_and_brief.clone(), |f, v| f.content.data_and_brief = v)}
            {text_area("Fases", "Una fase por línea: Título: descripción", form,
                |f| f.content.phases.clone(), |f, v| f.content.phases = v)}
            {text_area("Evaluación", "", form,
                |f| f.content.evaluation.clone(), |f, v| f.content.evaluation = v)}
            {text_area("Conclusión", "", form,
                |f| f.content.conclusion.clone(), |f, v| f.content.conclusion = v)}
        }
        .into_any(),
        Category::Design => view! {
            {text_area("Brief", "", form, |f| f.content.brief.clone(), |f, v| f.content.brief = v)}
            {text_area("Problema", "", form, |f| f.content.problem.clone(), |f, v| f.content.problem = v)}
            <div class="form-group checkbox">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.content.uses_ai)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.content.uses_ai = checked);
                        }
                    />
                    "Uso de IA"
                </label>
            </div>
            {text_area("Descripción", "", form,
                |f| f.content.description.clone(), |f, v| f.content.description = v)}
            {text_area("Conclusión o presentación", "", form,
                |f| f.content.closing.clone(), |f, v| f.content.closing = v)}
        }
        .into_any(),
        Category::Website => view! {
            {text_area("Brief", "", form, |f| f.content.brief.clone(), |f, v| f.content.brief = v)}
            {text_area("Objetivo", "", form, |f| f.content.objective.clone(), |f, v| f.content.objective = v)}
            {text_area("Arquitectura", "", form,
                |f| f.content.architecture.clone(), |f, v| f.content.architecture = v)}
            {text_field("Stack técnico (separado por coma)", "text", false, form,
                |f| f.content.tech_stack.clone(), |f, v| f.content.tech_stack = v)}
            {text_field("Experiencias interactivas (separadas por coma)", "text", false, form,
                |f| f.content.interactive_experiences.clone(), |f, v| f.content.interactive_experiences = v)}
            {text_field("Entregables (separados por coma)", "text", false, form,
                |f| f.content.deliverables.clone(), |f, v| f.content.deliverables = v)}
        }
        .into_any(),
        Category::Miscellaneous => view! {
            {text_field("Categoría libre", "text", false, form,
                |f| f.content.misc_label.clone(), |f, v| f.content.misc_label = v)}
            {text_area("Descripción", "", form,
                |f| f.content.description.clone(), |f, v| f.content.description = v)}
            {text_field("Highlights (separados por coma)", "text", false, form,
                |f| f.content.highlights.clone(), |f, v| f.content.highlights = v)}
        }
        .into_any(),
    }
}
