//! Inputs and the save bar shared by the posting and resume editors.

use dioxus::prelude::*;


#[derive(Debug, Clone, PartialEq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Saved,
    /// Comma separated labels of the required fields left empty.
    Missing(String),
    Failed(String),
}

impl SaveStatus {
    fn message(&self) -> Option<String> {
        match self {
            SaveStatus::Idle => None,
            SaveStatus::Saving => Some("저장 중...".to_string()),
            SaveStatus::Saved => Some("저장되었습니다".to_string()),
            SaveStatus::Missing(fields) => Some(format!("필수 항목을 입력해 주세요: {fields}")),
            SaveStatus::Failed(e) => Some(format!("저장하지 못했어요: {e}")),
        }
    }

    fn color(&self) -> &'static str {
        match self {
            SaveStatus::Missing(_) | SaveStatus::Failed(_) => "#B91C1C",
            _ => "#4B5563",
        }
    }
}

const INPUT_STYLE: &str = "
    height: 44px;
    padding: 0px 12px;
    border-radius: 8px;
    border: 1px solid #D1D5DB;
    font-size: 16px;
    background: white;
";

#[component]
pub fn EditorField(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span { style: "font-size: 15px; font-weight: 500; color: #374151;", "{label}" }
            input {
                r#type: "text",
                style: INPUT_STYLE,
                value: "{value}",
                oninput: move |e: Event<FormData>| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn EditorTextArea(label: String, value: String, oninput: EventHandler<String>) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px;",
            span { style: "font-size: 15px; font-weight: 500; color: #374151;", "{label}" }
            textarea {
                style: "
                    min-height: 140px;
                    padding: 10px 12px;
                    border-radius: 8px;
                    border: 1px solid #D1D5DB;
                    font-size: 16px;
                    resize: vertical;
                ",
                value: "{value}",
                oninput: move |e: Event<FormData>| oninput.call(e.value()),
            }
        }
    }
}

#[component]
pub fn SaveBar(status: SaveStatus, onsave: EventHandler<MouseEvent>) -> Element {
    let saving = status == SaveStatus::Saving;
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; margin-top: 10px;",
            {status.message().map(|message| rsx! {
                div { style: "font-size: 14px; color: {status.color()};", "{message}" }
            })}
            button {
                disabled: saving,
                style: "
                    height: 48px;
                    border-radius: 8px;
                    border: none;
                    background: #4F46E5;
                    color: white;
                    font-size: 17px;
                    cursor: pointer;
                ",
                onclick: move |e| onsave.call(e),
                "저장하기"
            }
        }
    }
}
