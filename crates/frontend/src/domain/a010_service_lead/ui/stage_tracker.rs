use contracts::domain::a010_service_lead::dto::ApplicationStage;
use contracts::domain::a010_service_lead::tracker::render_track;
use contracts::enums::StageStatus;
use leptos::prelude::*;

use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_local;

/// Horizontal ten-step progress tracker. Always renders the full
/// catalogue in process order; stages without a record show as Pending.
#[component]
pub fn StageTracker(#[prop(into)] stages: Signal<Vec<ApplicationStage>>) -> impl IntoView {
    view! {
        <div class="stage-tracker">
            {move || {
                let track = render_track(&stages.get());
                let last = track.len().saturating_sub(1);
                track
                    .into_iter()
                    .enumerate()
                    .map(|(i, descriptor)| {
                        let status = descriptor.status;
                        let circle_class = format!(
                            "stage-tracker__circle stage-tracker__circle--{}",
                            status.badge_variant()
                        );
                        let connector = (i != last).then(|| {
                            let connector_class = if status == StageStatus::Completed {
                                "stage-tracker__connector stage-tracker__connector--done"
                            } else {
                                "stage-tracker__connector"
                            };
                            view! { <div class=connector_class></div> }
                        });
                        view! {
                            <div class="stage-tracker__step">
                                <div class="stage-tracker__cell">
                                    <div class=circle_class>{status.icon()}</div>
                                    <p class="stage-tracker__label">{descriptor.label}</p>
                                    <p class="stage-tracker__responsible">{descriptor.responsible}</p>
                                    <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                    {descriptor.completed_at.as_deref().map(|ts| {
                                        view! {
                                            <p class="stage-tracker__timestamp">{format_local(ts)}</p>
                                        }
                                    })}
                                </div>
                                {connector}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
