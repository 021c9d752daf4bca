//! Card for one job posting in a result list.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_action_icons::{MdBookmark, MdBookmarkBorder}};

use common::job_posting::JobPostingSummary;
use crate::routes::Route;


#[component]
pub fn JobPostingCard(posting: ReadSignal<JobPostingSummary>, on_toggle_bookmark: Callback<String>) -> Element {
    let posting = posting.read().clone();
    let posting_id = posting.id.clone();
    let detail_id = posting.id.clone();
    let subtitle = [posting.region.as_str(), posting.employment_type.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div {
            class: "x-job-posting-card",
            style: "
                display: flex;
                flex-direction: row;
                gap: 12px;
                padding: 14px 16px;
                margin: 6px 0px;
                border-radius: 12px;
                background-color: white;
                border: 1px solid #E5E7EB;
            ",
            div {
                style: "flex-grow: 1; min-width: 0; cursor: pointer;",
                onclick: move |_| {
                    navigator().push(Route::JobPostingEditorPage { posting_id: Some(detail_id.clone()).into() });
                },
                div { style: "font-size: 14px; color: #6B7280;", "{posting.company_name}" }
                div {
                    style: "
                        font-size: 18px;
                        font-weight: 500;
                        color: #111827;
                        overflow: hidden;
                        text-overflow: ellipsis;
                        white-space: nowrap;
                    ",
                    "{posting.title}"
                }
                div { style: "font-size: 14px; color: #4B5563;", "{subtitle}" }
                {posting.deadline.clone().map(|deadline| rsx! {
                    div { style: "font-size: 13px; color: #B91C1C;", "마감 {deadline}" }
                })}
            }
            button {
                style: "border: none; background: none; cursor: pointer; align-self: flex-start;",
                onclick: move |_| on_toggle_bookmark.call(posting_id.clone()),
                if posting.bookmarked {
                    Icon { icon: MdBookmark, style: "width: 24px; height: 24px; color: #4F46E5;" }
                } else {
                    Icon { icon: MdBookmarkBorder, style: "width: 24px; height: 24px; color: #6B7280;" }
                }
            }
        }
    }
}
