use dioxus::prelude::*;

use common::job_query::JobSearchQuery;
use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::home_page::HomePage;
use crate::pages::job_search_page::JobSearchPage;
use crate::pages::job_recommend_page::JobRecommendPage;
use crate::pages::job_posting_editor_page::JobPostingEditorPage;
use crate::pages::resume_editor_page::ResumeEditorPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/jobs/:query/:current_page")]
    JobSearchPage {
        query: UrlParam<JobSearchQuery>,
        current_page: u64,
    },


    #[route("/recommend")]
    JobRecommendPage {},


    #[route("/postings/:posting_id")]
    JobPostingEditorPage { posting_id: UrlParam<Option<String>> },


    #[route("/resumes/:resume_id")]
    ResumeEditorPage { resume_id: UrlParam<Option<String>> },

}

impl Route {
    pub fn job_search_from_query(query: JobSearchQuery) -> Self {
        Self::JobSearchPage {
            query: UrlParam::from(query),
            current_page: 0_u64,
        }
    }
}
