//! Hit summary and previous/next page buttons for job lists.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_navigation_icons::{MdArrowBack, MdArrowForward}};


#[component]
pub fn SearchResultListControls(current_page: ReadSignal<u64>, shown: ReadSignal<usize>, has_next: ReadSignal<bool>, set_current_page: Callback<u64>) -> Element {
    let can_go_back = use_memo(move || *current_page.read() > 0);
    let page_label = use_memo(move || format!("{} 페이지", *current_page.read() + 1));

    rsx! {
        div {
            id: "x-job-list-controls",
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 12px;
                padding: 8px 12px;
                height: 48px;
            ",
            div {
                style: "font-size: 15px; color: rgb(75, 87, 112);",
                "공고 {shown}건"
            }
            div { style: "flex-grow: 1;" }
            PageButton {
                enabled: can_go_back(),
                onclick: move |_| set_current_page.call(current_page.read().saturating_sub(1)),
                Icon { icon: MdArrowBack, style: "width: 20px; height: 20px;" }
            }
            div { style: "font-size: 15px;", "{page_label}" }
            PageButton {
                enabled: has_next(),
                onclick: move |_| set_current_page.call(*current_page.read() + 1),
                Icon { icon: MdArrowForward, style: "width: 20px; height: 20px;" }
            }
        }
    }
}

fn button_opacity(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0.4" }
}

#[component]
fn PageButton(enabled: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    rsx! {
        button {
            disabled: !enabled,
            style: "
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                padding: 4px 8px;
                cursor: pointer;
                opacity: {button_opacity(enabled)};
            ",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
