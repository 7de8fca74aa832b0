use contracts::domain::a010_service_lead::dto::{ApplicationStage, StageUpdateRequest};
use contracts::enums::{StageSlug, StageStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a010_service_lead::api;
use crate::shared::api_utils::ApiContext;

/// ViewModel for the update-stage dialog.
///
/// One stage at a time: the dialog issues a single-stage upsert and never
/// touches the other records. There is no local mutation of the lead —
/// the page re-fetches after a successful save.
#[derive(Clone)]
pub struct UpdateStageViewModel {
    pub open: RwSignal<bool>,
    pub stage_slug: RwSignal<StageSlug>,
    pub status: RwSignal<StageStatus>,
    pub notes: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UpdateStageViewModel {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            stage_slug: RwSignal::new(StageSlug::ORDER[0]),
            status: RwSignal::new(StageStatus::Pending),
            notes: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Open the dialog seeded with the first catalogue stage.
    pub fn open_for(&self, stages: &[ApplicationStage]) {
        self.error.set(None);
        self.stage_changed(StageSlug::ORDER[0], stages);
        self.open.set(true);
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Pre-fill status and notes from the lead's existing record for the
    /// picked stage; a missing record reads as Pending with no notes.
    pub fn stage_changed(&self, slug: StageSlug, stages: &[ApplicationStage]) {
        self.stage_slug.set(slug);
        match stages.iter().find(|s| s.stage_slug == slug) {
            Some(record) => {
                self.status.set(record.status);
                self.notes.set(record.notes.clone().unwrap_or_default());
            }
            None => {
                self.status.set(StageStatus::Pending);
                self.notes.set(String::new());
            }
        }
    }

    /// Issue the upsert. On success the dialog closes and `on_saved`
    /// runs so the page can re-fetch; a backend rejection stays in the
    /// dialog, message shown exactly as received.
    pub fn save_command(&self, ctx: ApiContext, lead_id: String, on_saved: Callback<()>) {
        let notes = self.notes.get();
        let request = StageUpdateRequest {
            stage_slug: self.stage_slug.get(),
            status: self.status.get(),
            notes: if notes.trim().is_empty() { None } else { Some(notes) },
        };

        let open = self.open;
        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::update_stage(&ctx, &lead_id, &request).await {
                Ok(_) => {
                    saving.set(false);
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    }
}
