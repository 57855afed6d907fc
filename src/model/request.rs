//! Request records: the dialog's output and the persisted document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata collected by the new-request dialog.
///
/// Built once when the user confirms creation, then handed to the caller that
/// actually writes the file. `file_name` already carries the on-disk suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRequestData {
    /// Human-readable title of the request.
    pub title: String,
    /// File name including the `.posting.yaml` suffix.
    pub file_name: String,
    /// Free-form description, possibly multi-line or empty.
    pub description: String,
    /// Directory relative to the collection root.
    pub directory: String,
}

/// HTTP method of a saved request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// `GET`, the method of every new request.
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        };
        f.write_str(s)
    }
}

/// A request header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Header name, sent as written.
    pub name: String,
    /// Header value.
    pub value: String,
    /// Disabled rows are kept in the file but not sent.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// A query string parameter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Parameter name.
    pub name: String,
    /// Parameter value, unencoded.
    pub value: String,
    /// Disabled rows are kept in the file but not sent.
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

/// Raw request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Body text as stored.
    pub content: String,
}

/// The YAML document stored in a `*.posting.yaml` file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestFile {
    /// Display name of the request.
    pub name: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// HTTP method.
    #[serde(default)]
    pub method: HttpMethod,
    /// Target URL; empty for new requests.
    #[serde(default)]
    pub url: String,
    /// Header rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    /// Query parameter rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<QueryParam>,
    /// Optional body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl RequestFile {
    /// Blank GET request document for freshly created requests.
    pub fn from_new_request(data: &NewRequestData) -> Self {
        Self {
            name: data.title.clone(),
            description: data.description.clone(),
            ..Self::default()
        }
    }
}
