//! Menu listing the screen's dimensions, highlighting those with picks.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdChevronRight};

use common::filter_modal::condition_menu_rows;
use crate::data_definitions::filter_controller::FilterController;


fn row_color(highlighted: bool) -> &'static str {
    if highlighted { "#4F46E5" } else { "#111827" }
}

fn row_weight(highlighted: bool) -> &'static str {
    if highlighted { "600" } else { "400" }
}

#[component]
pub fn ConditionMenu() -> Element {
    let controller = use_context::<FilterController>();
    let filters = controller.filters;
    let rows = use_memo(move || condition_menu_rows(&controller.consumer.menu_dimensions(), &filters.read()));

    rsx! {
        ul {
            style: "list-style: none; margin: 0px; padding: 0px;",
            for row in rows() {
                li {
                    key: "{row.dimension:?}",
                    style: "
                        display: flex;
                        flex-direction: row;
                        align-items: center;
                        padding: 16px;
                        border-bottom: 1px solid #F3F4F6;
                        cursor: pointer;
                        font-size: 17px;
                        color: {row_color(row.highlighted)};
                        font-weight: {row_weight(row.highlighted)};
                    ",
                    onclick: move |_| controller.choose(row.dimension),
                    div { style: "flex-grow: 1;", "{row.dimension.title()}" }
                    Icon { icon: MdChevronRight, style: "width: 22px; height: 22px; color: #9CA3AF;" }
                }
            }
        }
    }
}
