use crate::dashboards::d100_service_summary::api;
use crate::layout::global_context::use_app_context;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d100_service_summary::StatItem;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const TAB_KEY: &str = "d100_service_summary";

fn card_icon(item: &StatItem) -> &'static str {
    match item.label {
        "Mail To Be Sent" => "mail",
        "Spare Pending" => "wrench",
        "Escalation" => "file-text",
        _ if item.section == "Stock" => "package",
        _ => "list",
    }
}

/// Counter cards over `/menu/dashboard`, served from the browser cache
/// while a refetch runs
#[component]
pub fn ServiceSummaryDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let cached = api::cached();
    let refreshing = RwSignal::new(cached.needs_refresh());
    let data = RwSignal::new(cached.value().unwrap_or_default());

    let refresh = move || {
        refreshing.set(true);
        spawn_local(async move {
            match api::fetch_dashboard().await {
                Ok(fresh) => data.set(fresh),
                // cached or all-zero numbers stay on screen
                Err(e) => log::error!("dashboard fetch failed: {}", e),
            }
            refreshing.set(false);
        });
    };

    if refreshing.get_untracked() {
        refresh();
    }

    let items = Memo::new(move |_| data.with(|d| d.stat_items(ctx.company.get())));

    let section = move |name: &'static str| {
        view! {
            <section class="dashboard__section">
                <h3 class="dashboard__section-title">{name}</h3>
                <div class="dashboard__cards">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .enumerate()
                            .filter(|(_, item)| item.section == name)
                            .map(|(index, item)| {
                                let value = Signal::derive(move || {
                                    items.with(|list| list.get(index).map(|i| i.value).unwrap_or(0))
                                });
                                view! {
                                    <StatCard
                                        label=item.label
                                        icon_name=card_icon(&item)
                                        value=value
                                        refreshing=refreshing
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        }
    };

    view! {
        <PageFrame page_id=page_id(TAB_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h2>"Service Summary"</h2>
                <div class="page__header-actions">
                    <span class="page__subtitle">
                        {move || ctx.company.get().map(|c| c.to_string()).unwrap_or_else(|| "All companies".to_string())}
                    </span>
                    <button
                        class="button button--secondary"
                        disabled=move || refreshing.get()
                        on:click=move |_| refresh()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>
            <div class="page__content">
                {section("Complaints")}
                {section("Stock")}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d100_service_summary::DashboardData;

    #[test]
    fn test_card_icons() {
        let items = DashboardData::default().stat_items(None);
        let icons: Vec<_> = items.iter().map(card_icon).collect();
        assert_eq!(icons[0], "list");
        assert_eq!(icons[4], "mail");
        assert!(icons[5..].iter().all(|i| *i == "package"));
    }
}
