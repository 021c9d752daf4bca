use std::collections::BTreeMap;

use dioxus::prelude::*;
use dioxus::logger::tracing::{error, info};

use common::{filter_consumer::FilterConsumer, filter_state::FilterState, job_posting::JobPostingPage, job_query::JobSearchQuery};
use crate::{
    api::job_api::{search_jobs, toggle_bookmark},
    components::{
        error_boundary::ComponentErrorDisplay,
        filter_components::filter_modal_host::FilterModalHost,
        job_components::job_posting_card::JobPostingCard,
        search_components::{search_input_top_bar::SearchInputTopBar, search_result_list_controls::SearchResultListControls},
        suspend_boundary::LoadingIndicator,
    },
    data_definitions::{filter_controller::use_filter_controller, url_param::UrlParam},
    routes::Route,
};


fn title_ellipsis(keyword: &str) -> String {
    if keyword.chars().count() > 12 {
        keyword.chars().take(10).collect::<String>() + "..."
    } else {
        keyword.to_string()
    }
}

#[component]
pub fn JobSearchPage(query: UrlParam<JobSearchQuery>, current_page: u64) -> Element {
    rsx! {
        Title { "채용공고 검색 {title_ellipsis(&query.0.keyword)}" }
        JobSearchRootComponent { query: query.0.clone(), current_page }
    }
}

#[component]
fn JobSearchRootComponent(query: ReadSignal<JobSearchQuery>, current_page: ReadSignal<u64>) -> Element {
    let on_apply = Callback::new(move |filters: FilterState| {
        let new_query = JobSearchQuery { keyword: query.read().keyword.clone(), filters };
        navigator().push(Route::job_search_from_query(new_query));
    });
    // a bare search link starts from the cached conditions
    let route_filters = query.peek().filters.clone();
    let initial = (route_filters != FilterState::default()).then_some(route_filters);
    let mut controller = use_filter_controller(FilterConsumer::JobSearch, initial, true, on_apply);

    // On arrival a bare query is replaced by one carrying the cached conditions,
    // so results match the strip. After that the route is followed, since
    // back/forward navigation keeps this component alive.
    let mut arrived = use_signal(|| true);
    use_effect(move || {
        let route_query = query.read().clone();
        if *arrived.peek() {
            arrived.set(false);
            if let Some(seeded) = route_query.seeded_with(&controller.filters.peek()) {
                info!("seeding job search with cached conditions");
                navigator().replace(Route::JobSearchPage { query: seeded.into(), current_page: *current_page.peek() });
                return;
            }
        }
        if *controller.filters.peek() != route_query.filters {
            controller.filters.set(route_query.filters);
        }
    });

    let mut search_result = use_resource(move || {
        let q = query.read().clone();
        // the first fetch runs before the seeding replace lands
        let q = match *arrived.peek() {
            true => q.seeded_with(&controller.filters.peek()).unwrap_or(q),
            false => q,
        };
        search_jobs(q, *current_page.read())
    });
    use_effect(move || {
        let _ = current_page.read();
        let _ = query.read();
        search_result.clear();
        search_result.restart();
    });

    let set_current_page = Callback::new(move |page: u64| {
        navigator().push(Route::JobSearchPage { query: query.read().clone().into(), current_page: page });
    });

    rsx! {
        div {
            id: "x-job-search-page-root-component",
            style: r#"
                height: 100%;
                width: 100%;
                display: flex;
                flex-direction: column;
            "#,
            div {
                id: "x-job-search-top-bar",
                style: "
                    border-bottom: 1px solid rgb(164, 164, 164);
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    width: 100%;
                ",
                SearchInputTopBar { original_query: query }
            }
            div {
                id: "x-job-search-results",
                style: "
                    flex-grow: 1;
                    overflow-y: auto;
                    background-color: #ECEEF2;
                    padding: 0px 10px;
                ",
                JobSearchResultsView { search_result: search_result, current_page, set_current_page }
            }
        }
        FilterModalHost {}
    }
}

#[component]
fn JobSearchResultsView(
    search_result: ReadSignal<Option<Result<JobPostingPage, ServerFnError>>>,
    current_page: ReadSignal<u64>,
    set_current_page: Callback<u64>,
) -> Element {
    // bookmark flips confirmed by the server, on top of the loaded page
    let mut bookmarks = use_signal(BTreeMap::<String, bool>::new);
    let on_toggle_bookmark = Callback::new(move |posting_id: String| {
        spawn(async move {
            match toggle_bookmark(posting_id.clone()).await {
                Ok(status) => {
                    info!("posting {posting_id} bookmarked: {}", status.bookmarked);
                    bookmarks.write().insert(posting_id, status.bookmarked);
                }
                Err(e) => error!("could not toggle bookmark for {posting_id}: {e}"),
            }
        });
    });

    let search_result = search_result.read();
    let page = match search_result.as_ref() {
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
        Some(Ok(page)) => page,
        None => return rsx! { LoadingIndicator {} },
    };
    let postings = page
        .postings
        .iter()
        .cloned()
        .map(|mut posting| {
            if let Some(bookmarked) = bookmarks.read().get(&posting.id) {
                posting.bookmarked = *bookmarked;
            }
            posting
        })
        .collect::<Vec<_>>();

    rsx! {
        SearchResultListControls {
            current_page,
            shown: postings.len(),
            has_next: page.has_next,
            set_current_page,
        }
        if postings.is_empty() {
            div {
                style: "padding: 40px 0px; text-align: center; color: #6B7280; font-size: 16px;",
                "조건에 맞는 공고가 없어요"
            }
        }
        for posting in postings.into_iter() {
            JobPostingCard { key: "{posting.id}", posting, on_toggle_bookmark }
        }
    }
}
