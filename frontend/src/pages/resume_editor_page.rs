use dioxus::prelude::*;
use dioxus::logger::tracing::{error, info};

use common::{
    filter_consumer::FilterConsumer, filter_state::FilterState,
    resume::{ResumeDetail, ResumeDraft},
};
use crate::{
    api::job_api::{get_resume, save_resume},
    components::{
        editor_components::editor_form::{EditorField, EditorTextArea, SaveBar, SaveStatus},
        error_boundary::ComponentErrorDisplay,
        filter_components::{filter_button_strip::FilterButtonStrip, filter_modal_host::FilterModalHost},
        suspend_boundary::SuspendWrapper,
    },
    data_definitions::{filter_controller::use_filter_controller, url_param::UrlParam},
    routes::Route,
};


#[component]
pub fn ResumeEditorPage(resume_id: UrlParam<Option<String>>) -> Element {
    rsx! {
        Title { "이력서 작성" }
        SuspendWrapper {
            ResumeLoader { resume_id: resume_id.0.clone() }
        }
    }
}

#[component]
fn ResumeLoader(resume_id: ReadSignal<Option<String>>) -> Element {
    let detail = use_resource(move || {
        let resume_id = resume_id.read().clone();
        async move {
            match resume_id {
                Some(resume_id) => get_resume(resume_id).await.map(Some),
                None => Ok(None),
            }
        }
    })
    .suspend()?
    .cloned();

    let detail = match detail {
        Ok(detail) => detail,
        Err(e) => return rsx! { ComponentErrorDisplay { error_txt: format!("{:#?}", e) } },
    };
    let form_key = resume_id.read().clone().unwrap_or_default();

    rsx! {
        ResumeForm { key: "{form_key}", resume_id: resume_id.read().clone(), detail }
    }
}

#[component]
fn ResumeForm(resume_id: Option<String>, detail: Option<ResumeDetail>) -> Element {
    let draft = detail.as_ref().map(|d| d.draft.clone()).unwrap_or_default();
    let mut title = use_signal(|| draft.title.clone());
    let mut introduction = use_signal(|| draft.introduction.clone());
    let mut status = use_signal(|| SaveStatus::Idle);

    let initial = detail.as_ref().map(|d| FilterState::from_params(&d.draft.conditions));
    let controller = use_filter_controller(
        FilterConsumer::ResumeEditor,
        initial,
        resume_id.is_none(),
        Callback::new(|_: FilterState| {}),
    );

    let resume_id_for_save = resume_id.clone();
    let on_save = move |_: MouseEvent| {
        let draft = ResumeDraft::new(
            title.read().clone(),
            introduction.read().clone(),
            controller.filters.read().build_params(),
        );
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            status.set(SaveStatus::Missing(missing.join(", ")));
            return;
        }
        let resume_id = resume_id_for_save.clone();
        status.set(SaveStatus::Saving);
        spawn(async move {
            match save_resume(resume_id.clone(), draft).await {
                Ok(saved) => {
                    info!("saved resume {}", saved.id);
                    status.set(SaveStatus::Saved);
                    if resume_id.is_none() {
                        controller.clear_cache();
                        navigator().replace(Route::ResumeEditorPage { resume_id: Some(saved.id).into() });
                    }
                }
                Err(e) => {
                    error!("could not save resume: {e}");
                    status.set(SaveStatus::Failed(format!("{e}")));
                }
            }
        });
    };

    rsx! {
        div {
            id: "x-resume-editor",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 20px 16px;
                box-sizing: border-box;
            ",
            div {
                style: "font-size: 22px; font-weight: 600;",
                if resume_id.is_some() { "이력서 수정" } else { "이력서 작성" }
            }
            EditorField { label: "이력서 제목", value: title(), oninput: move |v| title.set(v) }
            EditorTextArea { label: "자기소개", value: introduction(), oninput: move |v| introduction.set(v) }
            div { style: "font-size: 15px; font-weight: 500; color: #374151;", "희망 조건" }
            FilterButtonStrip {}
            SaveBar { status: status(), onsave: on_save }
        }
        FilterModalHost {}
    }
}
