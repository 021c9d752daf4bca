use dioxus::prelude::*;
use dioxus::logger::tracing::{debug, error, info};
use dioxus_free_icons::{Icon, icons::md_navigation_icons::MdRefresh};

use common::{
    filter_consumer::FilterConsumer, filter_params::FilterParams, filter_state::FilterState,
    job_posting::JobPostingPage, request_generation::RequestGeneration,
};
use crate::{
    api::job_api::{recommend_jobs, toggle_bookmark},
    components::{
        error_boundary::ComponentErrorDisplay,
        filter_components::{filter_button_strip::FilterButtonStrip, filter_modal_host::FilterModalHost},
        job_components::job_posting_card::JobPostingCard,
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{current_user::use_current_user, filter_controller::use_filter_controller},
};


#[component]
pub fn JobRecommendPage() -> Element {
    let current_user = use_current_user();
    let mut generation = use_signal(RequestGeneration::default);
    let mut recommendations = use_signal(|| None::<Result<JobPostingPage, ServerFnError>>);

    // applies and refreshes can overlap; only the newest response is shown
    let fetch = use_callback(move |params: FilterParams| {
        let ticket = generation.write().begin();
        let user_id = current_user.id();
        spawn(async move {
            let result = recommend_jobs(user_id, params).await;
            if !generation.peek().is_current(ticket) {
                debug!("dropping stale recommendation response {ticket:?}");
                return;
            }
            if let Ok(page) = &result {
                info!("{} recommended postings", page.postings.len());
            }
            recommendations.set(Some(result));
        });
    });
    let on_apply = Callback::new(move |filters: FilterState| fetch.call(filters.build_params()));
    let controller = use_filter_controller(FilterConsumer::JobRecommend, None, true, on_apply);

    use_effect(move || {
        fetch.call(controller.filters.peek().build_params());
    });

    let on_toggle_bookmark = Callback::new(move |posting_id: String| {
        spawn(async move {
            match toggle_bookmark(posting_id.clone()).await {
                Ok(status) => {
                    if let Some(Ok(page)) = recommendations.write().as_mut() {
                        for posting in page.postings.iter_mut().filter(|p| p.id == posting_id) {
                            posting.bookmarked = status.bookmarked;
                        }
                    }
                }
                Err(e) => error!("could not toggle bookmark for {posting_id}: {e}"),
            }
        });
    });

    rsx! {
        Title { "맞춤 추천 공고" }
        div {
            id: "x-job-recommend-page",
            style: "
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            ",
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    padding: 16px 16px 0px 16px;
                ",
                div { style: "font-size: 22px; font-weight: 600; flex-grow: 1;", "맞춤 추천 공고" }
                button {
                    style: "border: none; background: none; cursor: pointer;",
                    onclick: move |_| fetch.call(controller.filters.peek().build_params()),
                    Icon { icon: MdRefresh, style: "width: 24px; height: 24px; color: #4B5563;" }
                }
            }
            FilterButtonStrip {}
            div {
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                    padding: 0px 10px;
                ",
                {match recommendations.read().as_ref() {
                    None => rsx! { LoadingIndicator {} },
                    Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
                    Some(Ok(page)) if page.postings.is_empty() => rsx! {
                        div {
                            style: "padding: 40px 0px; text-align: center; color: #6B7280; font-size: 16px;",
                            "추천할 공고가 아직 없어요"
                        }
                    },
                    Some(Ok(page)) => rsx! {
                        for posting in page.postings.iter().cloned() {
                            JobPostingCard { key: "{posting.id}", posting, on_toggle_bookmark }
                        }
                    },
                }}
            }
        }
        FilterModalHost {}
    }
}
