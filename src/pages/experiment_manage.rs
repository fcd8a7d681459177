//! Teacher experiment management: experiment CRUD plus class administration.

use leptos::prelude::*;

use crate::net::class::ClassDraft;
use crate::net::experiment::ExperimentDraft;
use crate::net::types::ClassInfo;
use crate::state::experiments::ExperimentsState;

#[component]
pub fn ExperimentManagePage() -> impl IntoView {
    let experiments = expect_context::<RwSignal<ExperimentsState>>();
    let classes = RwSignal::new(Vec::<ClassInfo>::new());
    let info = RwSignal::new(String::new());

    let new_name = RwSignal::new(String::new());
    let new_description = RwSignal::new(String::new());
    let new_deadline = RwSignal::new(String::new());
    let new_class_id = RwSignal::new(String::new());
    let new_class_name = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let reload = move || {
        experiments.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::experiment::fetch_experiments(1, 10).await {
                Ok(page) => experiments.update(|s| s.apply_page(1, 10, page)),
                Err(err) => {
                    log::warn!("experiment fetch failed: {err}");
                    experiments.update(|s| s.loading = false);
                }
            }
            match crate::net::class::fetch_classes().await {
                Ok(list) => classes.set(list),
                Err(err) => log::warn!("class fetch failed: {err}"),
            }
        });
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || reload());

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(class_id) = new_class_id.get().trim().parse::<i64>() else {
            info.set("Pick a class first.".to_owned());
            return;
        };
        let draft = ExperimentDraft {
            experiment_name: new_name.get().trim().to_owned(),
            class_id,
            description: new_description.get(),
            deadline: Some(new_deadline.get()).filter(|d| !d.is_empty()),
        };
        if draft.experiment_name.is_empty() {
            info.set("Experiment name is required.".to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::experiment::create_experiment(&draft).await {
                Ok(resp) if resp.code == 200 => {
                    new_name.set(String::new());
                    new_description.set(String::new());
                    reload();
                }
                Ok(resp) => info.set(resp.message),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    let on_rename = move |id: i64, name: String| {
        let Some(existing) =
            experiments.with_untracked(|s| s.items.iter().find(|e| e.experiment_id == id).cloned())
        else {
            return;
        };
        let draft = ExperimentDraft {
            experiment_name: name,
            class_id: existing.class_id,
            description: existing.description,
            deadline: existing.deadline,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::experiment::update_experiment(id, &draft).await {
                Ok(_) => reload(),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, draft);
    };

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::experiment::delete_experiment(id).await {
                Ok(_) => reload(),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let on_create_class = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ClassDraft { class_name: new_class_name.get().trim().to_owned() };
        if draft.class_name.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::class::create_class(&draft).await {
                Ok(_) => {
                    new_class_name.set(String::new());
                    reload();
                }
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    };

    let on_rename_class = move |id: i64, name: String| {
        let draft = ClassDraft { class_name: name };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::class::update_class(id, &draft).await {
                Ok(_) => reload(),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, draft);
    };

    let on_delete_class = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::class::delete_class(id).await {
                Ok(_) => reload(),
                Err(err) => info.set(err.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="manage-page">
            <h1>"Experiments"</h1>
            <form class="manage-create" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Experiment name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <select on:change=move |ev| new_class_id.set(event_target_value(&ev))>
                    <option value="">"Pick a class"</option>
                    <For each=move || classes.get() key=|c| c.class_id let:class>
                        <option value=class.class_id.to_string()>{class.class_name.clone()}</option>
                    </For>
                </select>
                <textarea
                    placeholder="Description"
                    prop:value=move || new_description.get()
                    on:input=move |ev| new_description.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="text"
                    placeholder="Deadline (YYYY-MM-DD HH:MM)"
                    prop:value=move || new_deadline.get()
                    on:input=move |ev| new_deadline.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">"Create experiment"</button>
            </form>

            <ul class="manage-list">
                <For
                    each=move || experiments.with(|s| s.items.clone())
                    key=|e| e.experiment_id
                    let:exp
                >
                    {
                        let id = exp.experiment_id;
                        let rename_value = RwSignal::new(exp.experiment_name.clone());
                        view! {
                            <li class="manage-list__row">
                                <input
                                    type="text"
                                    prop:value=move || rename_value.get()
                                    on:input=move |ev| rename_value.set(event_target_value(&ev))
                                />
                                <button class="btn" on:click=move |_| {
                                    on_rename(id, rename_value.get_untracked())
                                }>"Rename"</button>
                                <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>

            <h2>"Classes"</h2>
            <form class="class-create" on:submit=on_create_class>
                <input
                    type="text"
                    placeholder="Class name"
                    prop:value=move || new_class_name.get()
                    on:input=move |ev| new_class_name.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Create class"</button>
            </form>
            <ul class="class-list">
                <For each=move || classes.get() key=|c| c.class_id let:class>
                    {
                        let id = class.class_id;
                        let rename_value = RwSignal::new(class.class_name.clone());
                        view! {
                            <li class="class-list__row">
                                <input
                                    type="text"
                                    prop:value=move || rename_value.get()
                                    on:input=move |ev| rename_value.set(event_target_value(&ev))
                                />
                                <span>{format!("{} students", class.student_count)}</span>
                                <button class="btn" on:click=move |_| {
                                    on_rename_class(id, rename_value.get_untracked())
                                }>"Rename"</button>
                                <button class="btn btn--danger" on:click=move |_| on_delete_class(id)>
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                </For>
            </ul>

            <p class="manage-info">{move || info.get()}</p>
            <a href="/teacher/home">"Back"</a>
        </div>
    }
}
