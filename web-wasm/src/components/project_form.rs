//! Create / edit modal form

use crate::components::content_fields::{text_area, text_field, ContentFields};
use leptos::prelude::*;
use portfolio_common::{Category, DraftForm, ExecutionType};

#[component]
pub fn ProjectForm<FS, FC>(
    form: RwSignal<DraftForm>,
    editing: bool,
    error: ReadSignal<Option<String>>,
    on_submit: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let category = Memo::new(move |_| form.with(|f| f.category));
    let execution = Memo::new(move |_| form.with(|f| f.execution));
    let cancel = on_cancel.clone();

    view! {
        <div class="modal-backdrop">
            <div class="modal form-modal">
                <button class="modal-close" type="button" on:click=move |_| cancel(())>"✕"</button>
                <h2>{if editing { "Editar Proyecto" } else { "Nuevo Proyecto" }}</h2>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit(());
                }>
                    {text_field("Título", "text", true, form, |f| f.title.clone(), |f, v| f.title = v)}
                    {text_field("Slug", "text", false, form, |f| f.slug.clone(), |f, v| f.slug = v)}

                    <div class="form-row">
                        <div class="form-group">
                            <label>"Categoría"</label>
                            <select on:change=move |ev| {
                                if let Some(next) = Category::from_key(&event_target_value(&ev)) {
                                    form.update(|f| f.category = next);
                                }
                            }>
                                {Category::ALL
                                    .into_iter()
                                    .map(|c| view! {
                                        <option value=c.label() selected=move || category.get() == c>{c.label()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-group">
                            <label>"Tipo"</label>
                            <select on:change=move |ev| {
                                if let Some(next) = ExecutionType::from_key(&event_target_value(&ev)) {
                                    form.update(|f| f.execution = next);
                                }
                            }>
                                {ExecutionType::ALL
                                    .into_iter()
                                    .map(|t| view! {
                                        <option value=t.label() selected=move || execution.get() == t>{t.label()}</option>
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    {text_field("Fecha", "date", true, form, |f| f.date.clone(), |f, v| f.date = v)}
                    {text_field("Imagen principal (URL)", "url", false, form,
                        |f| f.main_image.clone(), |f, v| f.main_image = v)}
                    {text_area("Resumen", "", form, |f| f.summary.clone(), |f, v| f.summary = v)}

                    <fieldset class="content-fields">
                        <legend>"Contenido"</legend>
                        <ContentFields form=form category=category />
                    </fieldset>

                    {text_field("Imágenes adicionales (URLs separadas por coma)", "text", false, form,
                        |f| f.image_urls.clone(), |f, v| f.image_urls = v)}
                    {text_field("Enlaces externos (URLs separadas por coma)", "text", false, form,
                        |f| f.external_links.clone(), |f, v| f.external_links = v)}

                    {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}

                    <div class="form-actions">
                        <button class="btn btn-primary" type="submit">"Guardar"</button>
                        <button class="btn btn-secondary" type="button" on:click=move |_| on_cancel(())>
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
