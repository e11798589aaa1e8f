use super::flag_toggle::FlagToggle;
use super::table_checkbox::TableCheckbox;
use crate::shared::export::{cell_text, print_table, serial_number};
use crate::shared::icons::icon;
use contracts::shared::enquiry::{ColumnDef, ColumnKind, EnquiryRow, Selection};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

/// Custom cell renderer; `None` falls back to the column kind
pub type CellRenderer = Callback<(ColumnDef, EnquiryRow), Option<AnyView>>;

/// Empty input clears the quantity; anything unparsable is ignored
fn parse_quantity(text: &str) -> Option<Option<u32>> {
    let text = text.trim();
    if text.is_empty() {
        return Some(None);
    }
    text.parse::<u32>().ok().map(Some)
}

/// Column-configured table over opaque enquiry rows
#[component]
pub fn EnquiryTable(
    /// Used for the print window title
    #[prop(into)]
    title: String,
    columns: &'static [ColumnDef],
    #[prop(into)] rows: Signal<Vec<EnquiryRow>>,
    #[prop(into)] loading: Signal<bool>,
    /// First serial number minus one (the page offset)
    #[prop(optional, into)]
    offset: Signal<usize>,
    /// Shown in the "Total Records" badge; defaults to the row count
    #[prop(optional, into)]
    total_records: Option<Signal<usize>>,
    #[prop(optional, into)] no_data_message: Option<String>,
    /// `(row index, flag key)` of a clicked Yes/No toggle
    #[prop(optional)]
    on_toggle: Option<Callback<(usize, &'static str)>>,
    /// `(row index, quantity key, new value)` of an edited quantity cell
    #[prop(optional)]
    on_quantity: Option<Callback<(usize, &'static str, Option<u32>)>>,
    #[prop(optional)] render: Option<CellRenderer>,
    /// Checkbox column keyed by `selection_key`
    #[prop(optional, into)]
    selection: Option<Signal<Selection>>,
    #[prop(optional)] on_select: Option<Callback<String>>,
    #[prop(default = "complaint_number")] selection_key: &'static str,
) -> impl IntoView {
    let no_data_message = no_data_message.unwrap_or_else(|| "No Records Found".to_string());
    let has_selection = selection.is_some();
    let colspan = columns.len() + usize::from(has_selection);
    let total = move || match total_records {
        Some(total) => total.get(),
        None => rows.with(Vec::len),
    };

    let table_ref = NodeRef::<leptos::html::Table>::new();

    let on_print = move |_| {
        let Some(table) = table_ref.get_untracked() else {
            return;
        };
        if let Err(e) = print_table(&title, &table) {
            log!("Print failed: {}", e);
        }
    };

    let render_cell = move |column: ColumnDef, row: EnquiryRow, index: usize| -> AnyView {
        if let Some(view) = render.and_then(|r| r.run((column, row.clone()))) {
            return view;
        }
        match column.kind {
            ColumnKind::Flag => {
                let key = column.key;
                let value = Signal::derive(move || {
                    rows.with(|rows| rows.get(index).map(|r| r.flag(key)).unwrap_or_default())
                });
                match on_toggle {
                    Some(on_toggle) => view! {
                        <FlagToggle value=value on_toggle=Callback::new(move |_| on_toggle.run((index, key))) />
                    }
                    .into_any(),
                    None => cell_text(&column, &row, 0).into_any(),
                }
            }
            ColumnKind::Quantity => {
                let key = column.key;
                let locked = Signal::derive(move || {
                    rows.with(|rows| rows.get(index).map(EnquiryRow::is_invoiced).unwrap_or(true))
                });
                let value = Signal::derive(move || {
                    rows.with(|rows| rows.get(index).map(|r| r.text(key)).unwrap_or_default())
                });
                view! {
                    <input
                        class="form__input form__input--qty"
                        type="number"
                        min="0"
                        prop:value=value
                        prop:disabled=move || locked.get() || on_quantity.is_none()
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            if let (Some(on_quantity), Some(qty)) = (on_quantity, parse_quantity(&input.value())) {
                                on_quantity.run((index, key, qty));
                            }
                            // a rejected edit leaves the row as it was
                            input.set_value(&value.get_untracked());
                        }
                    />
                }
                .into_any()
            }
            _ => cell_text(&column, &row, serial_number(offset.get_untracked(), index)).into_any(),
        }
    };

    view! {
        <div class="enquiry-table">
            <div class="enquiry-table__toolbar">
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || format!("Total Records: {}", total())}
                </Badge>
                <button class="button button--secondary" on:click=on_print>
                    {icon("printer")}
                    "Print"
                </button>
            </div>
            <div class="table-container">
                <table class="table__data table--striped" node_ref=table_ref>
                    <thead class="table__head">
                        <tr>
                            {has_selection.then(|| view! { <th class="table__header-cell table__header-cell--checkbox"></th> })}
                            {columns.iter().map(|c| {
                                let class = if c.is_numeric() {
                                    "table__header-cell table__header-cell--number"
                                } else {
                                    "table__header-cell"
                                };
                                view! { <th class=class>{c.label}</th> }
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr><td class="table__cell table__cell--loading" colspan=colspan>"Loading..."</td></tr>
                                }
                                .into_any();
                            }
                            let current = rows.get();
                            if current.is_empty() {
                                return view! {
                                    <tr><td class="table__cell table__cell--empty" colspan=colspan>{no_data_message.clone()}</td></tr>
                                }
                                .into_any();
                            }
                            current.into_iter().enumerate().map(|(index, row)| {
                                let id = row.text(selection_key);
                                let checkbox = selection.map(|selection| {
                                    let id_checked = id.clone();
                                    let id_toggle = id.clone();
                                    view! {
                                        <TableCheckbox
                                            checked=Signal::derive(move || selection.with(|s| s.contains(&id_checked)))
                                            on_change=Callback::new(move |_| {
                                                if let Some(on_select) = on_select {
                                                    on_select.run(id_toggle.clone());
                                                }
                                            })
                                        />
                                    }
                                });
                                view! {
                                    <tr class="table__row">
                                        {checkbox}
                                        {columns.iter().map(|column| {
                                            let class = if column.is_numeric() {
                                                "table__cell table__cell--number"
                                            } else {
                                                "table__cell"
                                            };
                                            view! { <td class=class>{render_cell(*column, row.clone(), index)}</td> }
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(""), Some(None));
        assert_eq!(parse_quantity(" 4 "), Some(Some(4)));
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("abc"), None);
    }
}
