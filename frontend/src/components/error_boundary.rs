//! Error boundaries for the router and for individual panels.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("{boundary_name}: render failed: {err:?}");
                rsx! {
                    div {
                        style: "padding: 24px; display: flex; flex-direction: column; gap: 12px;",
                        h1 { style: "color: #B91C1C; font-size: 28px;", "문제가 발생했어요" }
                        p { style: "color: #7F1D1D; font-size: 16px;", "위치: {boundary_name}" }
                        Link {
                            to: Route::HomePage {},
                            "홈으로 돌아가기"
                        }
                        pre {
                            style: "font-size: 12px; color: #374151; white-space: pre-wrap;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "알 수 없는 오류".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "font-size: 16px; border: 1px solid #4F46E5; color: #4F46E5; background: white; padding: 8px 14px; border-radius: 8px;",
                            onclick: move |_| err.clear_errors(),
                            "다시 시도"
                        }
                    }
                }
            },
            div {
                width: "100%",
                height: "100%",
                {children}
            }
        }
    }
}

/// Inline failure notice, used for failed API calls as well as render errors.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            gap: "10px",
            padding: "20px",
            box_sizing: "border-box",

            div { style: "color: #B91C1C; font-size: 18px; font-weight: 500;", "불러오지 못했어요" }
            pre {
                style: "color: #7F1D1D; font-size: 12px; white-space: pre-wrap; max-width: 100%; max-height: 200px; overflow-y: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
