use dioxus::prelude::*;
use dioxus::logger::tracing::{error, info};

use common::{
    filter_consumer::FilterConsumer, filter_state::FilterState,
    job_posting::{JobPostingDetail, JobPostingDraft},
};
use crate::{
    api::job_api::{get_job_posting, save_job_posting},
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
pub fn JobPostingEditorPage(posting_id: UrlParam<Option<String>>) -> Element {
    rsx! {
        Title { "채용공고 등록" }
        SuspendWrapper {
            JobPostingLoader { posting_id: posting_id.0.clone() }
        }
    }
}

#[component]
fn JobPostingLoader(posting_id: ReadSignal<Option<String>>) -> Element {
    let detail = use_resource(move || {
        let posting_id = posting_id.read().clone();
        async move {
            match posting_id {
                Some(posting_id) => get_job_posting(posting_id).await.map(Some),
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
    let form_key = posting_id.read().clone().unwrap_or_default();

    rsx! {
        JobPostingForm { key: "{form_key}", posting_id: posting_id.read().clone(), detail }
    }
}

#[component]
fn JobPostingForm(posting_id: Option<String>, detail: Option<JobPostingDetail>) -> Element {
    let draft = detail.as_ref().map(|d| d.draft.clone()).unwrap_or_default();
    let mut title = use_signal(|| draft.title.clone());
    let mut company_name = use_signal(|| draft.company_name.clone());
    let mut description = use_signal(|| draft.description.clone());
    let mut status = use_signal(|| SaveStatus::Idle);

    // a saved posting edits its own conditions; a new one starts from the cache
    let initial = detail.as_ref().map(|d| FilterState::from_params(&d.draft.conditions));
    let persist = posting_id.is_none();
    let controller = use_filter_controller(
        FilterConsumer::JobPostingEditor,
        initial,
        persist,
        Callback::new(|_: FilterState| {}),
    );

    let posting_id_for_save = posting_id.clone();
    let on_save = move |_: MouseEvent| {
        let draft = JobPostingDraft {
            title: title.read().clone(),
            company_name: company_name.read().clone(),
            description: description.read().clone(),
            conditions: controller.filters.read().build_params(),
        };
        let missing = draft.missing_fields();
        if !missing.is_empty() {
            status.set(SaveStatus::Missing(missing.join(", ")));
            return;
        }
        let posting_id = posting_id_for_save.clone();
        status.set(SaveStatus::Saving);
        spawn(async move {
            match save_job_posting(posting_id.clone(), draft).await {
                Ok(saved) => {
                    info!("saved job posting {}", saved.id);
                    status.set(SaveStatus::Saved);
                    if posting_id.is_none() {
                        controller.clear_cache();
                        navigator().replace(Route::JobPostingEditorPage { posting_id: Some(saved.id).into() });
                    }
                }
                Err(e) => {
                    error!("could not save job posting: {e}");
                    status.set(SaveStatus::Failed(format!("{e}")));
                }
            }
        });
    };

    rsx! {
        div {
            id: "x-job-posting-editor",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                padding: 20px 16px;
                box-sizing: border-box;
            ",
            div {
                style: "font-size: 22px; font-weight: 600;",
                if posting_id.is_some() { "채용공고 수정" } else { "채용공고 등록" }
            }
            EditorField { label: "공고 제목", value: title(), oninput: move |v| title.set(v) }
            EditorField { label: "기업명", value: company_name(), oninput: move |v| company_name.set(v) }
            EditorTextArea { label: "상세 내용", value: description(), oninput: move |v| description.set(v) }
            div { style: "font-size: 15px; font-weight: 500; color: #374151;", "모집 조건" }
            FilterButtonStrip {}
            SaveBar { status: status(), onsave: on_save }
        }
        FilterModalHost {}
    }
}
