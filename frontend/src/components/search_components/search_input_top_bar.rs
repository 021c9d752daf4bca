//! Keyword box and condition buttons at the top of the job search screen.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::MdSearch};

use common::job_query::JobSearchQuery;
use crate::{components::filter_components::filter_button_strip::FilterButtonStrip, data_definitions::filter_controller::FilterController, routes::Route};


#[component]
pub fn SearchInputTopBar(original_query: ReadSignal<JobSearchQuery>) -> Element {
    let controller = use_context::<FilterController>();
    let mut keyword = use_signal(|| original_query.read().keyword.clone());
    // navigation does not reset our signals, so follow the route
    use_effect(move || {
        let new_keyword = original_query.read().keyword.clone();
        keyword.set(new_keyword);
    });
    let keyword_has_changed = use_memo(move || *keyword.read() != original_query.read().keyword);
    let search_button_color = use_memo(move || if keyword_has_changed() { "blue" } else { "#6B7280" });
    let trigger_search = move |_: ()| {
        let query = JobSearchQuery {
            keyword: keyword.read().clone(),
            filters: controller.filters.read().clone(),
        };
        navigator().push(Route::job_search_from_query(query));
    };

    rsx! {
        div {
            id: "x-job-search-input-box",
            style: "
                display: flex;
                align-items: center;
                gap: 12px;
                background-color: white;
                border-radius: 9999px;
                padding: 8px 14px;
                margin: 12px 12px 0px 12px;
                height: 44px;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.8);
            ",
            button {
                style: "border: none; background: none; cursor: pointer;",
                onclick: move |_| trigger_search(()),
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color:{search_button_color()};" }
            }
            input {
                r#type: "search",
                placeholder: "직무, 기업명으로 검색",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 17px;
                ",
                value: "{keyword}",
                oninput: move |event: Event<FormData>| keyword.set(event.value()),
                onkeydown: move |event: Event<KeyboardData>| {
                    if event.key() == Key::Enter {
                        trigger_search(());
                    }
                },
            }
        }
        FilterButtonStrip {}
    }
}
