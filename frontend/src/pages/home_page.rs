use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdDescription, MdSearch, MdThumbUp, MdWork};
use dioxus_free_icons::{Icon, IconShape};

use common::job_query::JobSearchQuery;
use crate::routes::Route;


/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "일자리 찾기" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                width: 100%;
                padding: 28px 16px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            MainTitle {}
            KeywordSearchCard {}

            // Shortcut cards
            div {
                style: "
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 12px;
                ",
                ShortcutCard {
                    to: Route::JobRecommendPage {},
                    icon: MdThumbUp,
                    title: "맞춤 추천",
                    description: "내 조건에 맞는 공고를 모아 봐요",
                }
                ShortcutCard {
                    to: Route::ResumeEditorPage { resume_id: None.into() },
                    icon: MdDescription,
                    title: "이력서 작성",
                    description: "희망 조건을 담아 이력서를 등록해요",
                }
                ShortcutCard {
                    to: Route::JobPostingEditorPage { posting_id: None.into() },
                    icon: MdWork,
                    title: "공고 등록",
                    description: "기업 담당자라면 채용공고를 올려 보세요",
                }
            }
        }
    }
}


#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                color: #0F172A;
                font-size: 30px;
                font-weight: 600;
                letter-spacing: -0.02em;
                line-height: 1.3;
            ",
            span { "나에게 맞는 " }
            span { style: "color: #4F46E5;", "일자리" }
            span { "를 찾아보세요" }
        }
    }
}

#[component]
fn KeywordSearchCard() -> Element {
    let mut keyword = use_signal(String::new);
    let search = move || {
        let query = JobSearchQuery { keyword: keyword.read().clone(), ..Default::default() };
        navigator().push(Route::job_search_from_query(query));
    };

    rsx! {
        div {
            id: "x-card-keyword-search",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                border-radius: 18px;
                padding: 18px;
                background: linear-gradient(135deg, #2D208A 0%, #5B3DF5 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 22px; font-weight: 500;", "채용공고 검색" }
            div {
                style: "font-size: 15px; color: rgba(255,255,255,0.9);",
                "검색 후 지역, 직종, 맞춤조건으로 공고를 좁혀 보세요."
            }
            div {
                style: "
                    display: flex;
                    align-items: center;
                    gap: 10px;
                    background-color: white;
                    border-radius: 9999px;
                    padding: 10px 14px;
                    height: 42px;
                    color: #111827;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
                input {
                    r#type: "search",
                    placeholder: "직무, 기업명으로 검색",
                    style: "
                        flex: 1;
                        border: none;
                        outline: none;
                        background: transparent;
                        color: #111827;
                        font-size: 15px;
                    ",
                    oninput: move |e| keyword.set(e.value()),
                    onkeypress: move |e| {
                        if e.key() == Key::Enter {
                            e.prevent_default();
                            search();
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ShortcutCard<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, title: String, description: String) -> Element {
    rsx! {
        Link {
            to: to,
            div {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    height: 100%;
                    border-radius: 14px;
                    padding: 14px;
                    background: white;
                    color: #111827;
                    border: 1px solid #E5E7EB;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                    box-sizing: border-box;
                ",
                div {
                    style: "
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 36px;
                        height: 36px;
                        border-radius: 10px;
                        background: #EEF2FF;
                        border: 1px solid #C7D2FE;
                        color: #4F46E5;
                    ",
                    Icon { icon, style: "width: 20px; height: 20px;" }
                }
                div { style: "font-size: 17px; font-weight: 500;", "{title}" }
                div { style: "font-size: 13px; color: #4B5563;", "{description}" }
            }
        }
    }
}
