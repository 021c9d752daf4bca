//! Row of condition buttons that open the filter modal.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_image_icons::MdTune, md_navigation_icons::MdArrowDropDown}};

use common::dimension::FilterDimension;
use crate::data_definitions::filter_controller::FilterController;


#[component]
pub fn FilterButtonStrip() -> Element {
    let controller = use_context::<FilterController>();
    let dimensions = controller.consumer.dimensions();

    rsx! {
        div {
            id: "x-filter-button-strip",
            style: "
                width: 100%;
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 8px;
                padding: 10px;
                overflow-x: auto;
                box-sizing: border-box;
            ",

            button {
                style: "
                    cursor: pointer;
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    border: 1px solid rgba(0,0,0,0.5);
                    border-radius: 1000px;
                    background-color: white;
                    padding: 6px 12px;
                    font-size: 15px;
                    flex-shrink: 0;
                ",
                onclick: move |_| controller.open_menu(),
                Icon { icon: MdTune, style: "width: 18px; height: 18px;" }
                "조건 추가"
            }

            for dimension in dimensions.iter().copied() {
                FilterButton { key: "{dimension:?}", dimension }
            }
        }
    }
}

#[component]
fn FilterButton(dimension: FilterDimension) -> Element {
    let controller = use_context::<FilterController>();
    let filters = controller.filters;
    let selection_count = use_memo(move || filters.read().get(dimension).selected_sub_items.len());
    let border_color = use_memo(move || if selection_count() > 0 { "rgba(0,0,255,0.9)" } else { "rgba(0,0,0,0.5)" });
    let label = use_memo(move || match selection_count() {
        0 => dimension.title().to_string(),
        n => format!("{} {}", dimension.title(), n),
    });

    rsx! {
        button {
            onclick: move |_| controller.open_dimension(dimension),
            style: "
                cursor: pointer;
                display: flex;
                align-items: center;
                gap: 2px;
                border: 2px solid {border_color()};
                border-radius: 1000px;
                background-color: white;
                padding: 6px 10px;
                font-size: 15px;
                white-space: nowrap;
                flex-shrink: 0;
            ",
            "{label}"
            Icon { icon: MdArrowDropDown, style: "width: 20px; height: 20px;" }
        }
    }
}
