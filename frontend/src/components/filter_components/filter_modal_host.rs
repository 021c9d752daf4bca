//! Bottom sheet hosting the condition menu or one dimension's selector.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdClose}};

use common::filter_modal::FilterModalView;
use crate::components::filter_components::{category_selector::CategorySelector, condition_menu::ConditionMenu};
use crate::data_definitions::filter_controller::FilterController;


#[component]
pub fn FilterModalHost() -> Element {
    let controller = use_context::<FilterController>();
    let modal = controller.modal;
    let Some(view) = modal.read().view else {
        return rsx! {};
    };
    let shows_back = modal.read().shows_back_control();

    rsx! {
        // backdrop
        div {
            style: "
                position: fixed;
                inset: 0px;
                z-index: 999;
                background-color: rgba(0,0,0,0.3);
            ",
            onclick: move |_| controller.close(),
        }
        div {
            id: "x-filter-modal",
            style: "
                position: fixed;
                left: 0px;
                right: 0px;
                bottom: 0px;
                z-index: 1000;
                max-height: 80vh;
                display: flex;
                flex-direction: column;
                background-color: white;
                border-radius: 16px 16px 0px 0px;
                box-shadow: 0 -4px 16px rgba(0,0,0,0.15);
            ",

            // header
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 8px;
                    padding: 14px 16px;
                    border-bottom: 1px solid #E5E7EB;
                ",
                if shows_back {
                    button {
                        style: "border: none; background: none; cursor: pointer;",
                        onclick: move |_| controller.back(),
                        Icon { icon: MdArrowBack, style: "width: 22px; height: 22px;" }
                    }
                }
                div { style: "font-size: 18px; font-weight: 500; flex-grow: 1;", "{view.title()}" }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| controller.close(),
                    Icon { icon: MdClose, style: "width: 22px; height: 22px;" }
                }
            }

            // body
            div {
                style: "flex-grow: 1; overflow-y: auto; min-height: 240px;",
                {match view {
                    FilterModalView::Menu => rsx! { ConditionMenu {} },
                    FilterModalView::Dimension { dimension, .. } => rsx! { CategorySelector { dimension } },
                }}
            }

            // footer
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 10px;
                    padding: 12px 16px;
                    border-top: 1px solid #E5E7EB;
                ",
                button {
                    style: "
                        flex: 1;
                        height: 44px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                        background: white;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    onclick: move |_| controller.reset(),
                    "초기화"
                }
                button {
                    style: "
                        flex: 2;
                        height: 44px;
                        border-radius: 8px;
                        border: none;
                        background: #4F46E5;
                        color: white;
                        font-size: 16px;
                        cursor: pointer;
                    ",
                    onclick: move |_| controller.apply(),
                    "적용하기"
                }
            }
        }
    }
}
