//! A titled chart block: header, optional controls, and the D3 container.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartSectionProps {
    /// DOM id D3 renders into
    pub id: String,
    pub title: String,
    /// Y-axis unit explanation (e.g., "Max Temp (°F)")
    #[props(default = String::new())]
    pub y_axis_label: String,
    #[props(default = 400)]
    pub min_height: u32,
    /// Selector controls shown above the chart
    #[props(default = VNode::empty())]
    pub children: Element,
}

#[component]
pub fn ChartSection(props: ChartSectionProps) -> Element {
    let container_style = format!("min-height: {}px; width: 100%;", props.min_height);

    rsx! {
        section {
            style: "margin-bottom: 32px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.y_axis_label.is_empty() {
                p {
                    style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.y_axis_label}"
                }
            }
            {props.children}
            div {
                id: "{props.id}",
                style: "{container_style}",
            }
        }
    }
}
