use std::str::FromStr;

use url::Url;

use crate::types::UserRole;

use super::common::{ListParams, Query, SortDirection};

#[derive(Default)]
pub struct UserQuery {
    pub common: ListParams,
    pub roles: Vec<UserRole>,
    pub sort_by: UserSortBy,
}

impl Query for UserQuery {
    fn get_common(&mut self) -> &mut ListParams {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        for role in self.roles.iter() {
            url.query_pairs_mut()
                .append_pair("role", role.to_string().as_str());
        }

        url.query_pairs_mut().append_pair(
            "sortBy",
            format!(
                "{}{}",
                match self.common.sort_direction {
                    SortDirection::Asc => "",
                    SortDirection::Desc => "-",
                },
                &self.sort_by.to_string().as_str()
            )
            .as_str(),
        );

        url
    }
}

impl UserQuery {
    pub fn with_role(mut self, role: UserRole) -> Self {
        self.roles.push(role);
        self
    }
    pub fn with_roles(mut self, roles: &[UserRole]) -> Self {
        self.roles.extend_from_slice(roles);
        self
    }

    pub fn with_sort_by(mut self, sort_by: UserSortBy) -> Self {
        self.sort_by = sort_by;
        self
    }
}

#[derive(Clone, Copy, Default)]
pub enum UserSortBy {
    /// Account creation date. This is the default.
    #[default]
    CreatedAt,
    /// User display name.
    Name,
}
impl std::fmt::Display for UserSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserSortBy::CreatedAt => "createdAt",
                UserSortBy::Name => "name",
            }
        )
    }
}
impl FromStr for UserSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created-at" | "createdAt" => Ok(UserSortBy::CreatedAt),
            "name" => Ok(UserSortBy::Name),
            _ => Err(()),
        }
    }
}
