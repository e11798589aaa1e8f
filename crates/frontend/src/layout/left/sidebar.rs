//! Sidebar with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![],
        },
        MenuGroup {
            id: "stock",
            label: "Stock",
            icon: "package",
            items: vec![
                ("p101_stock_enquiry_cgcel", "search"),
                ("p101_stock_enquiry_cgpisl", "search"),
                ("p102_indent_enquiry_cgcel", "list"),
                ("p102_indent_enquiry_cgpisl", "list"),
                ("u202_generate_indent_cgcel", "file-text"),
                ("u202_generate_indent_cgpisl", "file-text"),
            ],
        },
        MenuGroup {
            id: "grc",
            label: "GRC",
            icon: "truck",
            items: vec![
                ("u201_grc_return_cgcel", "truck"),
                ("u201_grc_return_cgpisl", "truck"),
            ],
        },
        MenuGroup {
            id: "complaints",
            label: "Complaints",
            icon: "wrench",
            items: vec![
                ("u203_complaint_mail", "mail"),
                ("u204_generate_rfr", "file-text"),
                ("u205_reallocation", "users"),
            ],
        },
    ]
}

/// Tab key opened by a group without children
fn group_tab_key(group_id: &str) -> &'static str {
    match group_id {
        "dashboards" => "d100_service_summary",
        _ => "",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let expanded_groups = RwSignal::new(vec!["stock".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let has_children = !group.items.is_empty();
                let group_key = group_tab_key(group.id);
                let group_id = StoredValue::new(group.id.to_string());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                !has_children && ctx.active.get().as_deref() == Some(group_key)
                            }
                            style:padding-left="12px"
                            on:click=move |_| {
                                if has_children {
                                    let gid = group_id.get_value();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                } else {
                                    ctx.open_tab(group_key, tab_label_for_key(group_key));
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        group_id.with_value(|gid| expanded_groups.get().contains(gid))
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || group_id.with_value(|gid| expanded_groups.get().contains(gid))>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|(key, icon_name)| {
                                            let label = tab_label_for_key(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "{}", key);
            }
        }
        assert!(!tab_label_for_key(group_tab_key("dashboards")).is_empty());
    }
}
