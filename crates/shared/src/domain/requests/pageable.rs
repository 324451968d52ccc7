use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Page request as sent by list screens: `?page=0&size=20&sort=id,asc`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pageable {
    #[serde(default)]
    pub page: u32,

    #[serde(default = "default_size")]
    #[validate(range(min = 1, max = 2000, message = "Size must be between 1 and 2000"))]
    pub size: u32,

    #[serde(default)]
    pub sort: Option<String>,
}

fn default_size() -> u32 {
    20
}

impl Default for Pageable {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
            sort: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub property: String,
    pub direction: Direction,
}

impl Pageable {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn with_sort(mut self, sort: &str) -> Self {
        self.sort = Some(sort.to_string());
        self
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }

    pub fn offset(&self) -> i64 {
        self.page as i64 * self.size as i64
    }

    /// Parses `property[,asc|desc]`. A missing or unknown direction sorts ascending.
    pub fn sort_order(&self) -> Option<SortOrder> {
        let raw = self.sort.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        let mut parts = raw.split(',').map(str::trim);
        let property = parts.next().filter(|p| !p.is_empty())?.to_string();
        let direction = match parts.next() {
            Some(d) if d.eq_ignore_ascii_case("desc") => Direction::Desc,
            _ => Direction::Asc,
        };

        Some(SortOrder {
            property,
            direction,
        })
    }
}
