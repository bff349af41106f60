//! Loading, error and data-quality notices.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 40px; color: #666;",
            "Loading weather data..."
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SkippedRowsNoticeProps {
    pub count: usize,
}

/// Tells the reader some CSV rows were left out. Renders nothing for zero.
#[component]
pub fn SkippedRowsNotice(props: SkippedRowsNoticeProps) -> Element {
    if props.count == 0 {
        return rsx! {};
    }
    let plural = if props.count == 1 { "row" } else { "rows" };
    rsx! {
        p {
            style: "font-size: 11px; color: #8a6d3b; margin: 4px 0;",
            "{props.count} malformed {plural} skipped while loading the dataset."
        }
    }
}
