//! Two-column pick list shared by every dimension.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank}};

use common::{dimension::FilterDimension, selector_state::SelectorView};
use crate::components::filter_components::chip_tray::ChipTray;
use crate::data_definitions::filter_controller::FilterController;


fn category_background(is_active: bool) -> &'static str {
    if is_active { "white" } else { "transparent" }
}

fn category_weight(is_active: bool) -> &'static str {
    if is_active { "600" } else { "400" }
}

// categories holding a pick stay tinted even when not active
fn category_color(has_selection: bool) -> &'static str {
    if has_selection { "#4F46E5" } else { "#111827" }
}

#[component]
pub fn CategorySelector(dimension: FilterDimension) -> Element {
    let controller = use_context::<FilterController>();
    let filters = controller.filters;
    let category_rows = use_memo(move || SelectorView::new(dimension, filters.read().get(dimension)).category_rows());
    let sub_item_rows = use_memo(move || SelectorView::new(dimension, filters.read().get(dimension)).sub_item_rows());

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    flex-grow: 1;
                    min-height: 0px;
                ",

                // top-level categories
                ul {
                    style: "
                        list-style: none;
                        margin: 0px;
                        padding: 0px;
                        width: 40%;
                        max-height: 50vh;
                        overflow-y: auto;
                        background-color: #F5F6F8;
                    ",
                    for row in category_rows() {
                        li {
                            key: "{row.name}",
                            style: "
                                padding: 12px 14px;
                                cursor: pointer;
                                font-size: 16px;
                                background-color: {category_background(row.is_active)};
                                font-weight: {category_weight(row.is_active)};
                                color: {category_color(row.has_selection)};
                            ",
                            onclick: move |_| controller.select_category(dimension, row.name),
                            "{row.name}"
                        }
                    }
                }

                // sub-items of the active category
                ul {
                    style: "
                        list-style: none;
                        margin: 0px;
                        padding: 0px;
                        width: 60%;
                        max-height: 50vh;
                        overflow-y: auto;
                    ",
                    for row in sub_item_rows() {
                        li {
                            key: "{row.stored_value}",
                            style: "
                                display: flex;
                                flex-direction: row;
                                align-items: center;
                                gap: 8px;
                                padding: 10px 14px;
                                cursor: pointer;
                                font-size: 16px;
                            ",
                            onclick: move |_| controller.toggle_sub_item(dimension, row.label),
                            if row.is_selected {
                                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #4F46E5; flex-shrink: 0;" }
                            } else {
                                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" }
                            }
                            "{row.label}"
                        }
                    }
                }
            }
            ChipTray { dimension }
        }
    }
}
