use crate::session::QueryError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Body of a query request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryRequest {
    pub query: String,

    /// Operation arguments keyed by variable name
    #[serde(default)]
    pub variables: Option<Value>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
        }
    }

    pub fn with_variables(mut self, variables: Value) -> Self {
        self.variables = Some(variables);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTranscriptArgs {
    pub session_id: String,
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionIdArgs {
    pub id: String,
}

/// A decoded request, one variant per supported root field
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    CreateSession,
    AddTranscript(AddTranscriptArgs),
    GetSession(SessionIdArgs),
    ListSessions,
    DeleteSession(SessionIdArgs),
}

impl Operation {
    /// Root field name, used as the key under `data`
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateSession => "createSession",
            Operation::AddTranscript(_) => "addTranscript",
            Operation::GetSession(_) => "session",
            Operation::ListSessions => "sessions",
            Operation::DeleteSession(_) => "deleteSession",
        }
    }

    /// Decode the root field and its typed arguments
    pub fn decode(request: &QueryRequest) -> Result<Self, QueryError> {
        let field = root_field(&request.query).ok_or(QueryError::UnsupportedOperation)?;

        match field {
            "createSession" => Ok(Operation::CreateSession),
            "addTranscript" => Ok(Operation::AddTranscript(arguments(request)?)),
            "session" => Ok(Operation::GetSession(arguments(request)?)),
            "sessions" => Ok(Operation::ListSessions),
            "deleteSession" => Ok(Operation::DeleteSession(arguments(request)?)),
            _ => Err(QueryError::UnsupportedOperation),
        }
    }
}

fn arguments<T: DeserializeOwned>(request: &QueryRequest) -> Result<T, QueryError> {
    let variables = match &request.variables {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value.clone(),
    };

    serde_json::from_value(variables).map_err(QueryError::malformed)
}

/// Name of the first field in the outermost selection set
///
/// `mutation AddIt($s: ID!) { addTranscript(sessionId: $s) { id } }` yields
/// `addTranscript`. Text without a selection set yields its first identifier
/// after an optional `query`/`mutation` keyword. Aliases are not supported:
/// `latest: session(...)` yields `latest`.
pub fn root_field(query: &str) -> Option<&str> {
    let (field, _) = match query.find('{') {
        Some(open) => next_identifier(&query[open + 1..])?,
        None => match next_identifier(query)? {
            ("query" | "mutation", rest) => next_identifier(rest)?,
            found => found,
        },
    };

    Some(field)
}

/// First identifier in `text` and the text after it. Comments are skipped.
fn next_identifier(text: &str) -> Option<(&str, &str)> {
    let mut rest = text;

    loop {
        rest = rest.trim_start();
        if rest.starts_with('#') {
            rest = match rest.find('\n') {
                Some(end) => &rest[end..],
                None => "",
            };
            continue;
        }

        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;

        if first.is_ascii_alphabetic() || first == '_' {
            let end = chars
                .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
                .map_or(rest.len(), |(index, _)| index);
            return Some((&rest[..end], &rest[end..]));
        }

        // A brace ends the search; other punctuation and `$variables` are skipped
        if first == '{' || first == '}' {
            return None;
        }
        rest = &rest[first.len_utf8()..];
        if first == '$' {
            let end = rest
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            rest = &rest[end..];
        }
    }
}
