//! Admin service management: create, edit, and delete catalog entries.

#[cfg(test)]
#[path = "manage_services_test.rs"]
mod manage_services_test;

use leptos::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::image_upload::ImageUploadField;
use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::api::ServiceQuery;
use crate::net::types::{SERVICE_CATEGORIES, Service, ServiceInput, ServicesPage};
use crate::state::toast::ToastState;
use crate::util::format;

/// Validate the editor form; returns the parsed cost.
fn validate_service_form(
    name: &str,
    category: &str,
    cost: &str,
    unit: &str,
) -> Result<f64, &'static str> {
    if name.trim().is_empty() {
        return Err("Service name is required");
    }
    if category.is_empty() {
        return Err("Category is required");
    }
    let Ok(cost) = cost.trim().parse::<f64>() else {
        return Err("Cost must be a number");
    };
    if cost < 0.0 {
        return Err("Cost cannot be negative");
    }
    if unit.trim().is_empty() {
        return Err("Unit is required");
    }
    Ok(cost)
}

#[component]
pub fn ManageServices() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let services = LocalResource::new(|| async {
        let query = ServiceQuery { page: 1, limit: 100, ..ServiceQuery::default() };
        crate::net::api::services(&query).await.ok()
    });

    let show_editor = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let cost = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let image_url = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    // (service id, service name) pending delete confirmation.
    let delete_target = RwSignal::new(None::<(String, String)>);

    let open_create = move |_| {
        editing_id.set(None);
        name.set(String::new());
        category.set(String::new());
        cost.set(String::new());
        unit.set(String::new());
        description.set(String::new());
        image_url.set(String::new());
        show_editor.set(true);
    };

    let open_edit = Callback::new(move |service: Service| {
        editing_id.set(Some(service.id));
        name.set(service.service_name);
        category.set(service.service_category);
        cost.set(format!("{}", service.cost));
        unit.set(service.unit);
        description.set(service.description);
        image_url.set(service.image_url.unwrap_or_default());
        show_editor.set(true);
    });

    let submit = Callback::new(move |()| {
        let cost_value = match validate_service_form(
            &name.get_untracked(),
            &category.get_untracked(),
            &cost.get_untracked(),
            &unit.get_untracked(),
        ) {
            Ok(value) => value,
            Err(msg) => {
                toast::error(toasts, msg);
                return;
            }
        };
        let image = image_url.get_untracked();
        let input = ServiceInput {
            service_name: name.get_untracked().trim().to_owned(),
            service_category: category.get_untracked(),
            cost: cost_value,
            unit: unit.get_untracked().trim().to_owned(),
            description: description.get_untracked(),
            image_url: if image.is_empty() { None } else { Some(image) },
        };

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let editing = editing_id.get_untracked();
            leptos::task::spawn_local(async move {
                let result = match editing.as_deref() {
                    Some(id) => crate::net::api::update_service(id, &input).await.map(|_| ()),
                    None => crate::net::api::create_service(&input).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        toast::success(toasts, "Service saved");
                        show_editor.set(false);
                        services.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some((id, _)) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_service(&id).await {
                    Ok(()) => {
                        toast::success(toasts, "Service deleted");
                        services.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let request_delete = Callback::new(move |target: (String, String)| {
        delete_target.set(Some(target));
    });

    view! {
        <div class="manage-services">
            <header class="manage-services__header">
                <h2>"Manage Services"</h2>
                <button class="btn btn--primary" on:click=open_create>
                    "+ Add Service"
                </button>
            </header>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    services.get().map(|page| service_table(page, open_edit, request_delete))
                }}
            </Suspense>

            <Show when=move || show_editor.get()>
                <Modal
                    title=if editing_id.get_untracked().is_some() { "Edit Service" } else { "Add Service" }
                    on_close=Callback::new(move |()| show_editor.set(false))
                >
                    <div class="form">
                        <label class="form__field">
                            "Service Name"
                            <input
                                type="text"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Category"
                            <select
                                prop:value=move || category.get()
                                on:change=move |ev| category.set(event_target_value(&ev))
                            >
                                <option value="">"Select a category"</option>
                                {SERVICE_CATEGORIES
                                    .into_iter()
                                    .map(|cat| view! { <option value=cat>{cat}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="form__field">
                            "Cost (BDT)"
                            <input
                                type="number"
                                prop:value=move || cost.get()
                                on:input=move |ev| cost.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Unit"
                            <input
                                type="text"
                                placeholder="event, day, sqft..."
                                prop:value=move || unit.get()
                                on:input=move |ev| unit.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Description"
                            <textarea
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form__field">
                            "Image"
                            <ImageUploadField value=image_url uploading=uploading/>
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_editor.set(false)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                prop:disabled=move || uploading.get()
                                on:click=move |_| submit.run(())
                            >
                                "Save"
                            </button>
                        </div>
                    </div>
                </Modal>
            </Show>

            <Show when=move || delete_target.get().is_some()>
                {move || {
                    let service_name = delete_target.get().map(|(_, n)| n).unwrap_or_default();
                    view! {
                        <ConfirmModal
                            title="Delete Service"
                            message=format!(
                                "Are you sure you want to delete \"{service_name}\"? Existing bookings keep their records.",
                            )
                            confirm_label="Yes, Delete"
                            cancel_label="Keep Service"
                            on_confirm=on_confirm_delete
                            on_cancel=Callback::new(move |()| delete_target.set(None))
                        />
                    }
                }}
            </Show>
        </div>
    }
}

fn service_table(
    page: Option<ServicesPage>,
    open_edit: Callback<Service>,
    request_delete: Callback<(String, String)>,
) -> AnyView {
    let services = page.map(|p| p.services).unwrap_or_default();
    if services.is_empty() {
        return view! { <p class="empty-state">"No services yet"</p> }.into_any();
    }

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {services
                    .into_iter()
                    .map(|service| {
                        let edit_payload = service.clone();
                        let delete_payload = (service.id.clone(), service.service_name.clone());
                        view! {
                            <tr>
                                <td>{service.service_name.clone()}</td>
                                <td>{service.service_category.clone()}</td>
                                <td>
                                    {format::money(service.cost)} "/" {service.unit.clone()}
                                </td>
                                <td class="admin-table__actions">
                                    <button
                                        class="btn btn--sm"
                                        on:click=move |_| open_edit.run(edit_payload.clone())
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn--danger btn--sm"
                                        on:click=move |_| request_delete.run(delete_payload.clone())
                                    >
                                        "Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
