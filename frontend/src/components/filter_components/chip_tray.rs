//! Removable chips for the current selection of one dimension.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdClose};

use common::dimension::FilterDimension;
use crate::data_definitions::filter_controller::FilterController;


#[component]
pub fn ChipTray(dimension: FilterDimension) -> Element {
    let controller = use_context::<FilterController>();
    let filters = controller.filters;
    let chips = use_memo(move || filters.read().get(dimension).chips().map(str::to_string).collect::<Vec<_>>());

    if chips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "x-filter-chip-tray",
            style: "
                display: flex;
                flex-direction: row;
                gap: 6px;
                padding: 10px 12px;
                overflow-x: auto;
                border-top: 1px solid #E5E7EB;
            ",
            for chip in chips() {
                div {
                    key: "{chip}",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        padding: 4px 6px 4px 10px;
                        border-radius: 1000px;
                        background-color: #EEF2FF;
                        color: #3730A3;
                        font-size: 14px;
                        white-space: nowrap;
                        flex-shrink: 0;
                    ",
                    "{chip}"
                    button {
                        style: "border: none; background: none; cursor: pointer; display: flex; padding: 0px;",
                        onclick: {
                            let chip = chip.clone();
                            move |_| controller.remove_chip(dimension, &chip)
                        },
                        Icon { icon: MdClose, style: "width: 16px; height: 16px; color: #3730A3;" }
                    }
                }
            }
        }
    }
}
