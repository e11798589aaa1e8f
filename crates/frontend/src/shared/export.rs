//! Printing of enquiry tables and opening of generated PDF reports
use super::date_utils::format_date;
use contracts::shared::enquiry::{ColumnDef, ColumnKind, EnquiryRow};
use web_sys::{Blob, BlobPropertyBag, Element, Url};

const PRINT_STYLE: &str = "body{font-family:sans-serif;margin:16px}\
h2{margin:0 0 12px}\
table{border-collapse:collapse;width:100%;font-size:12px}\
th,td{border:1px solid #999;padding:4px 6px;text-align:center}\
th{background:#eee}";

/// Delay before the print window closes itself
const PRINT_CLOSE_DELAY_MS: u32 = 500;

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// 1-based serial number of the row at `index` on a page starting at `offset`
pub fn serial_number(offset: usize, index: usize) -> usize {
    offset + index + 1
}

/// Text of a read-only cell as the table shows it
pub fn cell_text(column: &ColumnDef, row: &EnquiryRow, serial: usize) -> String {
    match column.kind {
        ColumnKind::Serial => serial.to_string(),
        ColumnKind::Date => format_date(&row.display(column.key)),
        ColumnKind::Flag => row.flag(column.key).label().to_string(),
        _ => row.display(column.key),
    }
}

/// Body markup of the print window: a title over the rendered table
pub fn print_document(title: &str, table_html: &str) -> String {
    format!("<h2>{}</h2>{}", escape_html(title), table_html)
}

/// Opens a blank window with a copy of the rendered `table` and sends it to
/// the printer
pub fn print_table(title: &str, table: &Element) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let print_window = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?
        .ok_or("Print window blocked")?;
    let document = print_window.document().ok_or("No document object")?;
    document.set_title(title);
    if let Some(head) = document.head() {
        head.set_inner_html(&format!("<style>{}</style>", PRINT_STYLE));
    }
    let body = document.body().ok_or("No body element")?;
    body.set_inner_html(&print_document(title, &table.outer_html()));

    print_window
        .focus()
        .map_err(|e| format!("Failed to focus print window: {:?}", e))?;
    print_window
        .print()
        .map_err(|e| format!("Print failed: {:?}", e))?;

    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(PRINT_CLOSE_DELAY_MS).await;
        let _ = print_window.close();
    });
    Ok(())
}

/// Shows a PDF returned by the backend in a new browser tab
pub fn open_pdf(bytes: &[u8]) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open report: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_third_page_cells() {
        let serial = ColumnDef::serial("Sl. No.");
        let date = ColumnDef::date("grc_date", "GRC Date");
        let row = EnquiryRow::from(json!({"grc_date": "2025-06-02"}));

        // limit 25, page 3
        assert_eq!(cell_text(&serial, &row, serial_number(50, 0)), "51");
        assert_eq!(cell_text(&serial, &row, serial_number(50, 24)), "75");
        assert_eq!(cell_text(&date, &row, 1), "02-06-2025");
    }

    #[test]
    fn test_flag_and_text_cells() {
        let row = EnquiryRow::from(json!({"spare_code": "FN<CAP>", "invoice": "Y"}));
        let flag = ColumnDef::flag("invoice", "Invoice");
        let text = ColumnDef::text("spare_code", "Spare Code");
        assert_eq!(cell_text(&flag, &row, 1), "Yes");
        assert_eq!(cell_text(&text, &row, 1), "FN<CAP>");
    }

    #[test]
    fn test_print_document_escapes_title_only() {
        let html = print_document("Stock & Indent", "<table><tr><td>51</td></tr></table>");
        assert_eq!(
            html,
            "<h2>Stock &amp; Indent</h2><table><tr><td>51</td></tr></table>"
        );
    }
}
