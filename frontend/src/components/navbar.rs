//! Bottom tab bar shared by every screen.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdDescription, MdHome, MdSearch, MdThumbUp, MdWork};
use dioxus_free_icons::{Icon, IconShape};

use common::job_query::JobSearchQuery;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;


#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                height: 100vh;
            ",

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 0px; overflow-y: auto; background: #F5F6F8;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }

            div {
                id: "x-nav-tabbar",
                style: "
                    display: flex;
                    flex-direction: row;
                    justify-content: space-around;
                    align-items: center;
                    height: 60px;
                    flex-shrink: 0;
                    background-color: white;
                    border-top: 1px solid #E5E7EB;
                ",
                TabLink { to: Route::HomePage {}, icon: MdHome, label: "홈" }
                TabLink { to: Route::job_search_from_query(JobSearchQuery::default()), icon: MdSearch, label: "채용공고" }
                TabLink { to: Route::JobRecommendPage {}, icon: MdThumbUp, label: "추천" }
                TabLink { to: Route::JobPostingEditorPage { posting_id: None.into() }, icon: MdWork, label: "공고등록" }
                TabLink { to: Route::ResumeEditorPage { resume_id: None.into() }, icon: MdDescription, label: "이력서" }
            }
        }
    }
}

#[component]
fn TabLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2px;
                    color: #374151;
                    font-size: 11px;
                ",
                Icon { icon: icon, style: "width: 24px; height: 24px;" }
                "{label}"
            }
        }
    }
}
