//! Static taxonomy data for every filter dimension.

use crate::taxonomy::{Taxonomy, TaxonomyCategory};

/// Region sub-item that selects a whole region.
pub const REGION_WHOLE_ALIAS: &str = "전체";

pub const REGION_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "전국", sub_items: &["전체"] },
    TaxonomyCategory {
        name: "서울",
        sub_items: &[
            "전체", "강남구", "강동구", "강북구", "강서구", "관악구", "광진구", "구로구", "금천구",
            "노원구", "도봉구", "동대문구", "동작구", "마포구", "서대문구", "서초구", "성동구",
            "성북구", "송파구", "양천구", "영등포구", "용산구", "은평구", "종로구", "중구", "중랑구",
        ],
    },
    TaxonomyCategory {
        name: "경기",
        sub_items: &[
            "전체", "고양시", "과천시", "광명시", "구리시", "군포시", "김포시", "남양주시", "부천시",
            "성남시", "수원시", "시흥시", "안산시", "안양시", "용인시", "의정부시", "파주시", "평택시",
            "하남시", "화성시",
        ],
    },
    TaxonomyCategory {
        name: "인천",
        sub_items: &["전체", "계양구", "남동구", "동구", "미추홀구", "부평구", "서구", "연수구", "중구"],
    },
    TaxonomyCategory {
        name: "부산",
        sub_items: &[
            "전체", "강서구", "금정구", "남구", "동래구", "부산진구", "북구", "사하구", "서구",
            "수영구", "연제구", "영도구", "해운대구",
        ],
    },
    TaxonomyCategory { name: "대구", sub_items: &["전체", "남구", "달서구", "동구", "북구", "서구", "수성구", "중구"] },
    TaxonomyCategory { name: "광주", sub_items: &["전체", "광산구", "남구", "동구", "북구", "서구"] },
    TaxonomyCategory { name: "대전", sub_items: &["전체", "대덕구", "동구", "서구", "유성구", "중구"] },
    TaxonomyCategory { name: "울산", sub_items: &["전체", "남구", "동구", "북구", "울주군", "중구"] },
    TaxonomyCategory { name: "세종", sub_items: &["전체"] },
    TaxonomyCategory { name: "강원", sub_items: &["전체", "강릉시", "속초시", "원주시", "춘천시"] },
    TaxonomyCategory { name: "충북", sub_items: &["전체", "제천시", "청주시", "충주시"] },
    TaxonomyCategory { name: "충남", sub_items: &["전체", "계룡시", "공주시", "논산시", "서산시", "아산시", "천안시"] },
    TaxonomyCategory { name: "전북", sub_items: &["전체", "군산시", "익산시", "전주시", "정읍시"] },
    TaxonomyCategory { name: "전남", sub_items: &["전체", "나주시", "목포시", "순천시", "여수시"] },
    TaxonomyCategory { name: "경북", sub_items: &["전체", "경산시", "경주시", "구미시", "안동시", "포항시"] },
    TaxonomyCategory { name: "경남", sub_items: &["전체", "거제시", "김해시", "양산시", "진주시", "창원시"] },
    TaxonomyCategory { name: "제주", sub_items: &["전체", "서귀포시", "제주시"] },
]);

pub const JOB_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory {
        name: "식음료외식",
        sub_items: &["주방보조", "조리사", "바리스타", "제과제빵", "홀서빙", "매장관리"],
    },
    TaxonomyCategory {
        name: "IT개발",
        sub_items: &["웹개발", "앱개발", "데이터입력", "정보보안", "시스템운영", "QA·테스트"],
    },
    TaxonomyCategory {
        name: "사무행정",
        sub_items: &["사무보조", "경리·회계", "인사·총무", "문서작성", "전화상담"],
    },
    TaxonomyCategory {
        name: "생산제조",
        sub_items: &["조립", "포장", "검사·품질", "기계조작", "재봉"],
    },
    TaxonomyCategory {
        name: "서비스",
        sub_items: &["고객상담", "미화", "경비", "주차관리", "세탁"],
    },
    TaxonomyCategory {
        name: "디자인",
        sub_items: &["웹디자인", "편집디자인", "영상편집", "일러스트"],
    },
    TaxonomyCategory {
        name: "물류운송",
        sub_items: &["상하차", "배송", "재고관리", "분류작업"],
    },
    TaxonomyCategory {
        name: "교육",
        sub_items: &["강사", "교육보조", "특수교육"],
    },
    TaxonomyCategory {
        name: "의료보건",
        sub_items: &["안마사", "간호조무", "요양보호", "의료사무"],
    },
    TaxonomyCategory {
        name: "영업판매",
        sub_items: &["매장판매", "온라인판매", "텔레마케팅"],
    },
]);

pub const CAREER_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "신입", sub_items: &["신입", "경력무관"] },
    TaxonomyCategory { name: "경력", sub_items: &["1년 이상", "3년 이상", "5년 이상", "10년 이상"] },
]);

pub const EDUCATION_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "학력무관", sub_items: &["학력무관"] },
    TaxonomyCategory { name: "고졸", sub_items: &["중학교 졸업", "고등학교 졸업"] },
    TaxonomyCategory { name: "대졸", sub_items: &["대학교(2,3년) 졸업", "대학교(4년) 졸업"] },
    TaxonomyCategory { name: "대학원", sub_items: &["석사 졸업", "박사 졸업"] },
]);

pub const COMPANY_TYPE_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "민간기업", sub_items: &["대기업", "중견기업", "중소기업", "스타트업"] },
    TaxonomyCategory { name: "공공기관", sub_items: &["공기업", "공공기관", "지방자치단체"] },
    TaxonomyCategory { name: "비영리", sub_items: &["장애인표준사업장", "사회적기업", "비영리단체"] },
]);

pub const EMPLOYMENT_TYPE_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "정규직", sub_items: &["정규직"] },
    TaxonomyCategory { name: "계약직", sub_items: &["계약직", "인턴"] },
    TaxonomyCategory { name: "시간제", sub_items: &["아르바이트", "파트타임"] },
    TaxonomyCategory { name: "기타", sub_items: &["프리랜서", "재택근무"] },
]);

pub const PERSONALIZED_TAXONOMY: Taxonomy = Taxonomy::new(&[
    TaxonomyCategory { name: "장애 정도", sub_items: &["심한 장애", "심하지 않은 장애"] },
    TaxonomyCategory {
        name: "장애 유형",
        sub_items: &[
            "지체 장애", "뇌병변 장애", "시각 장애", "청각 장애", "언어 장애", "안면 장애",
            "신장 장애", "심장 장애", "호흡기 장애", "간 장애", "장루·요루 장애", "뇌전증 장애",
            "지적 장애", "자폐성 장애", "정신 장애",
        ],
    },
    TaxonomyCategory {
        name: "보조기기",
        sub_items: &["휠체어", "보청기", "점자정보단말기", "화면낭독프로그램", "보행보조기", "의사소통보조기기"],
    },
    TaxonomyCategory {
        name: "관심 직무",
        sub_items: &["사무직", "생산직", "서비스직", "전문직", "IT직", "예술·체육"],
    },
    TaxonomyCategory {
        name: "선호 근무형태",
        sub_items: &["재택근무", "단축근무", "유연근무", "전일근무"],
    },
]);

/// Backend parameter key for each personalized category, in table order.
pub const PERSONALIZED_PARAM_KEYS: &[(&str, &str)] = &[
    ("장애 정도", "disabilityGrade"),
    ("장애 유형", "disabilityTypes"),
    ("보조기기", "assistiveDevices"),
    ("관심 직무", "jobInterest"),
    ("선호 근무형태", "preferredWorkType"),
];

pub fn personalized_param_key(category: &str) -> Option<&'static str> {
    PERSONALIZED_PARAM_KEYS.iter().find(|(name, _)| *name == category).map(|(_, key)| *key)
}

pub fn personalized_category_for_key(key: &str) -> Option<&'static str> {
    PERSONALIZED_PARAM_KEYS.iter().find(|(_, k)| *k == key).map(|(name, _)| *name)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_personalized_category_has_a_param_key() {
        for name in PERSONALIZED_TAXONOMY.category_names() {
            assert!(personalized_param_key(name).is_some(), "missing key for {name}");
        }
        assert_eq!(PERSONALIZED_PARAM_KEYS.len(), PERSONALIZED_TAXONOMY.categories().len());
    }

    #[test]
    fn every_region_offers_the_whole_region_pick() {
        for category in REGION_TAXONOMY.categories() {
            assert_eq!(category.sub_items.first(), Some(&REGION_WHOLE_ALIAS), "{}", category.name);
        }
    }

    #[test]
    fn category_names_are_unique() {
        for taxonomy in [
            REGION_TAXONOMY, JOB_TAXONOMY, CAREER_TAXONOMY, EDUCATION_TAXONOMY,
            COMPANY_TYPE_TAXONOMY, EMPLOYMENT_TYPE_TAXONOMY, PERSONALIZED_TAXONOMY,
        ] {
            let names = taxonomy.category_names().collect::<Vec<_>>();
            let unique = names.iter().collect::<std::collections::BTreeSet<_>>();
            assert_eq!(names.len(), unique.len());
        }
    }
}
