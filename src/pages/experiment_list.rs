//! Student experiment list: assigned experiments, submissions, and upload
//! history.

use leptos::prelude::*;

use crate::net::types::UploadRecord;
use crate::state::experiments::ExperimentsState;
use crate::state::session::SessionStore;

#[component]
pub fn ExperimentListPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore>>();
    let experiments = expect_context::<RwSignal<ExperimentsState>>();
    let history = RwSignal::new(Vec::<UploadRecord>::new());
    let note = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    // Initial page load.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        experiments.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::experiment::fetch_student_experiments(1, 10).await {
                Ok(page) => experiments.update(|s| s.apply_page(1, 10, page)),
                Err(err) => {
                    log::warn!("experiment list fetch failed: {err}");
                    experiments.update(|s| s.loading = false);
                }
            }
        });
    });

    let on_open = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::experiment::fetch_experiment(id).await {
                Ok(detail) => experiments.update(|s| s.apply_detail(detail)),
                Err(err) => log::warn!("experiment detail fetch failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_load_history = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::upload::fetch_upload_history(id).await {
                Ok(records) => history.set(records),
                Err(err) => log::warn!("upload history fetch failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_delete_upload = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::upload::delete_upload(id).await {
                Ok(_) => history.update(|h| h.retain(|r| r.upload_id != id)),
                Err(err) => log::warn!("upload delete failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_submit_note = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = experiments.with_untracked(|s| s.current.as_ref().map(|e| e.experiment_id))
        else {
            info.set("Open an experiment first.".to_owned());
            return;
        };
        let content = serde_json::json!({ "content": note.get() });
        info.set("Submitting...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::experiment::submit_experiment(id, &content).await {
                Ok(resp) => info.set(resp.message),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, content);
    };

    let on_upload = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            let Some(form) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
            else {
                return;
            };
            let Ok(form_data) = web_sys::FormData::new_with_form(&form) else {
                return;
            };
            info.set("Uploading archive...".to_owned());
            leptos::task::spawn_local(async move {
                match crate::net::upload::upload_experiment_archive(form_data).await {
                    Ok(resp) => info.set(resp.message),
                    Err(err) => info.set(err.to_string()),
                }
            });
        }
    };

    let student_id = move || {
        session.with(|s| s.profile().map_or(0, |p| p.user_id)).to_string()
    };
    let current_id = move || {
        experiments
            .with(|s| s.current.as_ref().map(|e| e.experiment_id))
            .map_or_else(String::new, |id| id.to_string())
    };

    view! {
        <div class="experiment-list-page">
            <h1>"My experiments"</h1>
            <p class="experiment-list__count">
                {move || experiments.with(|s| format!("{} experiments", s.total))}
            </p>
            <ul class="experiment-list">
                <For
                    each=move || experiments.with(|s| s.items.clone())
                    key=|e| e.experiment_id
                    let:exp
                >
                    {
                        let id = exp.experiment_id;
                        view! {
                            <li class="experiment-list__row">
                                <span class="experiment-list__name">{exp.experiment_name.clone()}</span>
                                <span class="experiment-list__deadline">
                                    {exp.deadline.clone().unwrap_or_default()}
                                </span>
                                <button class="btn" on:click=move |_| on_open(id)>"Open"</button>
                                <button class="btn" on:click=move |_| on_load_history(id)>
                                    "History"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>

            <Show when=move || experiments.with(|s| s.current.is_some())>
                <section class="experiment-detail">
                    <h2>{move || {
                        experiments.with(|s| {
                            s.current.as_ref().map_or_else(String::new, |e| e.experiment_name.clone())
                        })
                    }}</h2>
                    <p>{move || {
                        experiments.with(|s| {
                            s.current.as_ref().map_or_else(String::new, |e| e.description.clone())
                        })
                    }}</p>

                    <form class="submit-form" on:submit=on_submit_note>
                        <textarea
                            placeholder="Submission notes"
                            prop:value=move || note.get()
                            on:input=move |ev| note.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit">"Submit"</button>
                    </form>

                    <form class="upload-form" on:submit=on_upload>
                        <input type="hidden" name="experimentId" prop:value=current_id/>
                        <input type="hidden" name="studentId" prop:value=student_id/>
                        <input type="file" name="file" accept=".zip,.rar,.7z"/>
                        <button class="btn" type="submit">"Upload archive"</button>
                    </form>
                </section>
            </Show>

            <ul class="upload-history">
                <For each=move || history.get() key=|r| r.upload_id let:record>
                    {
                        let id = record.upload_id;
                        view! {
                            <li class="upload-history__row">
                                <span>{record.file_name.clone()}</span>
                                <span>{record.upload_time.clone().unwrap_or_default()}</span>
                                <button class="btn" on:click=move |_| on_delete_upload(id)>
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>

            <p class="experiment-list__info">{move || info.get()}</p>
            <a href="/student/home">"Back"</a>
        </div>
    }
}
