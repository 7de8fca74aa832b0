use contracts::domain::a002_user::dto::{BaseUser, UserUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_user::api;
use crate::shared::api_utils::ApiContext;

/// Editable subset of a user record.
#[derive(Clone, Debug, Default)]
pub struct UserForm {
    pub name: String,
    pub phone: String,
    pub status: String,
}

/// ViewModel for the user edit form
#[derive(Clone)]
pub struct UserDetailsViewModel {
    pub form: RwSignal<UserForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UserDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(UserForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Seed the form from a freshly fetched user.
    pub fn load_from(&self, user: &BaseUser) {
        self.form.set(UserForm {
            name: user.name.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            status: user.status.clone(),
        });
        self.error.set(None);
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || !self.form.get().name.trim().is_empty()
    }

    /// Push the edited fields to the backend; `on_saved` runs with the
    /// updated record so the page can refresh its copy.
    pub fn save_command(&self, ctx: ApiContext, id: String, on_saved: Callback<BaseUser>) {
        let current = self.form.get();
        if current.name.trim().is_empty() {
            self.error.set(Some("Name is required.".to_string()));
            return;
        }

        let update = UserUpdate {
            name: Some(current.name),
            phone: if current.phone.trim().is_empty() {
                None
            } else {
                Some(current.phone)
            },
            status: Some(current.status),
        };

        let error = self.error;
        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::update_user(&ctx, &id, &update).await {
                Ok(user) => {
                    saving.set(false);
                    on_saved.run(user);
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(e));
                }
            }
        });
    }
}
