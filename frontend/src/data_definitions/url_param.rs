//! Route segment codec: any serde value as CBOR, then URL-safe base64.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


// Routable segments need Display + FromStr + Default; this wraps any serde type.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl <T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if let Err(e) = ciborium::into_writer(&self.0, &mut encoded) {
            dioxus::logger::tracing::error!("could not encode route parameter: {e}");
            return Ok(());
        }
        write!(f, "{}", URL_SAFE.encode(encoded))
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "route parameter is not base64: {}", err),
            Self::CiboriumError(err) => write!(f, "route parameter does not decode: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = URL_SAFE
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        let value = ciborium::from_reader(std::io::Cursor::new(raw))
            .map_err(StateParseError::CiboriumError)?;
        Ok(UrlParam(value))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::{dimension::FilterDimension, job_query::JobSearchQuery};

    #[test]
    fn search_query_survives_the_url() {
        let mut query = JobSearchQuery { keyword: "조리사".to_string(), ..Default::default() };
        query.filters.select_category(FilterDimension::Region, "서울");
        query.filters.toggle_sub_item(FilterDimension::Region, "전체");

        let segment = UrlParam(query.clone()).to_string();
        assert!(!segment.contains('/'));
        let parsed: UrlParam<JobSearchQuery> = segment.parse().unwrap();
        assert_eq!(parsed.into_inner(), query);
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!("***".parse::<UrlParam<Option<String>>>(), Err(StateParseError::DecodeError(_))));
    }
}
