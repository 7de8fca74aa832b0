use contracts::domain::a010_service_lead::dto::ApplicationStage;
use contracts::enums::{StageSlug, StageStatus};
use leptos::prelude::*;

use super::view_model::UpdateStageViewModel;
use crate::shared::icons::icon;
use crate::system::auth::context::{current_role, use_api_context};

/// Role-gated actions for one lead: customers see nothing here, every
/// other role can push a stage forward through the dialog.
#[component]
pub fn LeadActions(
    #[prop(into)] lead_id: Signal<String>,
    #[prop(into)] stages: Signal<Vec<ApplicationStage>>,
    /// Runs after a successful stage update so the page can re-fetch.
    on_updated: Callback<()>,
) -> impl IntoView {
    let ctx = use_api_context();
    let role = current_role();
    let vm = UpdateStageViewModel::new();

    let vm_open = vm.clone();
    let open_dialog = move |_| {
        vm_open.open_for(&stages.get_untracked());
    };

    let vm_dialog = vm.clone();

    view! {
        <Show when=move || role.get().can_update_stages()>
            <button class="button button--primary" on:click=open_dialog.clone()>
                {icon("edit")}
                "Update Stage"
            </button>
        </Show>

        <Show when=move || vm_dialog.open.get()>
            {
                let vm = vm_dialog.clone();
                let ctx = ctx.clone();
                move || {
                    let vm = vm.clone();
                    let vm_select = vm.clone();
                    let vm_status = vm.clone();
                    let vm_notes_in = vm.clone();
                    let vm_error = vm.clone();
                    let vm_save = vm.clone();
                    let vm_cancel = vm.clone();
                    let ctx = ctx.clone();
                    view! {
                        <div class="modal-overlay">
                            <div class="modal">
                                <div class="modal__header">
                                    <h3>"Update Stage"</h3>
                                </div>

                                {move || vm_error.error.get().map(|e| view! {
                                    <div class="error-message">{e}</div>
                                })}

                                <div class="details-form">
                                    <div class="form-group">
                                        <label for="stage-slug">"Stage"</label>
                                        <select
                                            id="stage-slug"
                                            prop:value={
                                                let vm = vm_select.clone();
                                                move || vm.stage_slug.get().as_str().to_string()
                                            }
                                            on:change={
                                                let vm = vm_select.clone();
                                                move |ev| {
                                                    if let Some(slug) =
                                                        StageSlug::from_value(&event_target_value(&ev))
                                                    {
                                                        vm.stage_changed(slug, &stages.get_untracked());
                                                    }
                                                }
                                            }
                                        >
                                            {StageSlug::ORDER
                                                .iter()
                                                .map(|s| {
                                                    view! { <option value=s.as_str()>{s.label()}</option> }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>

                                    <div class="form-group">
                                        <label for="stage-status">"Status"</label>
                                        <select
                                            id="stage-status"
                                            prop:value={
                                                let vm = vm_status.clone();
                                                move || vm.status.get().as_str().to_string()
                                            }
                                            on:change={
                                                let vm = vm_status.clone();
                                                move |ev| {
                                                    if let Some(status) =
                                                        StageStatus::from_value(&event_target_value(&ev))
                                                    {
                                                        vm.status.set(status);
                                                    }
                                                }
                                            }
                                        >
                                            {StageStatus::ALL
                                                .iter()
                                                .map(|s| {
                                                    view! { <option value=s.as_str()>{s.label()}</option> }
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>

                                    <div class="form-group">
                                        <label for="stage-notes">"Notes"</label>
                                        <textarea
                                            id="stage-notes"
                                            rows="3"
                                            placeholder="Optional remarks for this stage"
                                            prop:value={
                                                let vm = vm_notes_in.clone();
                                                move || vm.notes.get()
                                            }
                                            on:input={
                                                let vm = vm_notes_in.clone();
                                                move |ev| vm.notes.set(event_target_value(&ev))
                                            }
                                        />
                                    </div>
                                </div>

                                <div class="details-actions">
                                    <button
                                        class="button button--primary"
                                        disabled={
                                            let vm = vm_save.clone();
                                            move || vm.saving.get()
                                        }
                                        on:click={
                                            let vm = vm_save.clone();
                                            let ctx = ctx.clone();
                                            move |_| {
                                                vm.save_command(
                                                    ctx.clone(),
                                                    lead_id.get_untracked(),
                                                    on_updated,
                                                )
                                            }
                                        }
                                    >
                                        {icon("save")}
                                        "Save"
                                    </button>
                                    <button
                                        class="button button--secondary"
                                        on:click={
                                            let vm = vm_cancel.clone();
                                            move |_| vm.close()
                                        }
                                    >
                                        {icon("cancel")}
                                        "Cancel"
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                }
            }
        </Show>
    }
}
