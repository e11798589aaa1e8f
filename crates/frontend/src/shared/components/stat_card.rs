use crate::shared::icons::icon;
use leptos::prelude::*;

/// Groups digits in threes: 12500 -> "12,500"
fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)] value: Signal<i64>,
    /// Set while a refetch runs over cached numbers
    #[prop(into, optional)]
    refreshing: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class=move || {
            if refreshing.get() {
                "stat-card stat-card--refreshing"
            } else {
                "stat-card"
            }
        }>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12500), "12,500");
        assert_eq!(format_count(-1234567), "-1,234,567");
    }
}
