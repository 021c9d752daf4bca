//! The seven independent filter axes.

use serde::{Deserialize, Serialize};

use crate::taxonomy::{SubItemRule, Taxonomy};
use crate::taxonomy_tables::{
    CAREER_TAXONOMY, COMPANY_TYPE_TAXONOMY, EDUCATION_TAXONOMY, EMPLOYMENT_TYPE_TAXONOMY,
    JOB_TAXONOMY, PERSONALIZED_TAXONOMY, REGION_TAXONOMY, REGION_WHOLE_ALIAS,
};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FilterDimension {
    Region,
    Job,
    Career,
    Education,
    CompanyType,
    EmploymentType,
    Personalized,
}

impl FilterDimension {
    /// Every dimension, in condition-menu order.
    pub const ALL: [FilterDimension; 7] = [
        FilterDimension::Region,
        FilterDimension::Job,
        FilterDimension::Career,
        FilterDimension::Education,
        FilterDimension::CompanyType,
        FilterDimension::EmploymentType,
        FilterDimension::Personalized,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            FilterDimension::Region => "지역",
            FilterDimension::Job => "직종",
            FilterDimension::Career => "경력",
            FilterDimension::Education => "학력",
            FilterDimension::CompanyType => "기업형태",
            FilterDimension::EmploymentType => "고용형태",
            FilterDimension::Personalized => "맞춤조건",
        }
    }

    pub fn from_title(title: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.title() == title)
    }

    pub fn taxonomy(&self) -> Taxonomy {
        match self {
            FilterDimension::Region => REGION_TAXONOMY,
            FilterDimension::Job => JOB_TAXONOMY,
            FilterDimension::Career => CAREER_TAXONOMY,
            FilterDimension::Education => EDUCATION_TAXONOMY,
            FilterDimension::CompanyType => COMPANY_TYPE_TAXONOMY,
            FilterDimension::EmploymentType => EMPLOYMENT_TYPE_TAXONOMY,
            FilterDimension::Personalized => PERSONALIZED_TAXONOMY,
        }
    }

    /// Category shown when nothing else was picked. Builders treat an active
    /// category equal to this as "no intent expressed".
    pub fn default_category(&self) -> &'static str {
        match self {
            FilterDimension::Region => "전국",
            FilterDimension::Job => "식음료외식",
            FilterDimension::Career => "신입",
            FilterDimension::Education => "학력무관",
            FilterDimension::CompanyType => "민간기업",
            FilterDimension::EmploymentType => "정규직",
            FilterDimension::Personalized => "장애 정도",
        }
    }

    pub fn sub_item_rule(&self) -> SubItemRule {
        match self {
            FilterDimension::Region => SubItemRule::WholeCategoryAlias(REGION_WHOLE_ALIAS),
            _ => SubItemRule::Plain,
        }
    }

    /// Field name of this dimension in the serialized filter parameters.
    pub fn param_key(&self) -> &'static str {
        match self {
            FilterDimension::Region => "region",
            FilterDimension::Job => "job",
            FilterDimension::Career => "career",
            FilterDimension::Education => "education",
            FilterDimension::CompanyType => "companyType",
            FilterDimension::EmploymentType => "employmentType",
            FilterDimension::Personalized => "personalized",
        }
    }
}

impl std::fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_round_trip() {
        for dimension in FilterDimension::ALL {
            assert_eq!(FilterDimension::from_title(dimension.title()), Some(dimension));
        }
        assert_eq!(FilterDimension::from_title("조건 추가"), None);
    }

    #[test]
    fn default_category_exists_in_taxonomy() {
        for dimension in FilterDimension::ALL {
            assert!(
                dimension.taxonomy().contains_category(dimension.default_category()),
                "{dimension}: {}",
                dimension.default_category()
            );
        }
    }

    #[test]
    fn only_region_aliases_whole_category() {
        for dimension in FilterDimension::ALL {
            let expected = dimension == FilterDimension::Region;
            assert_eq!(matches!(dimension.sub_item_rule(), SubItemRule::WholeCategoryAlias(_)), expected);
        }
    }
}
