/*
 * Responsibility
 * - Posts request/response DTO (camelCase on the wire: fullName / username / email)
 * - conversion between DTO and repo rows
 * - no content validation: any string is accepted, missing or null fields decode as ""
 */
use serde::{Deserialize, Serialize};

use crate::repos::post_repo::{AuthorChanges, AuthorRow, PostChanges, PostRow};

// A field that is missing or `null` decodes as None.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthorRequest {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Body of POST /posts, PUT /posts/{id} and PATCH /posts/{id}.
///
/// POST and PUT build a fresh record with `into_row`, so anything absent ends
/// up empty. PATCH uses `changes`, so anything absent keeps its stored value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<AuthorRequest>,
}

impl PostRequest {
    pub fn into_row(self) -> PostRow {
        let author = self.author.unwrap_or_default();

        PostRow {
            title: self.title.unwrap_or_default(),
            body: self.body.unwrap_or_default(),
            author: AuthorRow {
                full_name: author.full_name.unwrap_or_default(),
                username: author.username.unwrap_or_default(),
                email: author.email.unwrap_or_default(),
            },
        }
    }

    pub fn changes(&self) -> PostChanges<'_> {
        let author = self
            .author
            .as_ref()
            .map(|a| AuthorChanges {
                full_name: a.full_name.as_deref(),
                username: a.username.as_deref(),
                email: a.email.as_deref(),
            })
            .unwrap_or_default();

        PostChanges {
            title: self.title.as_deref(),
            body: self.body.as_deref(),
            author,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorResponse {
    pub full_name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub title: String,
    pub body: String,
    pub author: AuthorResponse,
}

impl From<PostRow> for PostResponse {
    fn from(row: PostRow) -> Self {
        PostResponse {
            title: row.title,
            body: row.body,
            author: AuthorResponse {
                full_name: row.author.full_name,
                username: row.author.username,
                email: row.author.email,
            },
        }
    }
}
