// src/api/query.rs
//! The database query driver: a lazily paginated stream of pages.

use std::collections::VecDeque;

use futures::stream::{self, Stream};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::model::Page;
use crate::types::DatabaseId;

use super::{normalize, Transport};

/// Parameters for [`query_database`].
#[derive(Debug, Clone)]
pub struct QueryDatabaseParams {
    pub database_id: DatabaseId,
    /// Results per fetch; omitted from the request when `None`, letting
    /// the service apply its own default. Not clamped client-side.
    pub page_size: Option<u32>,
    pub filter: Option<Filter>,
}

impl QueryDatabaseParams {
    pub fn new(database_id: DatabaseId) -> Self {
        Self {
            database_id,
            page_size: None,
            filter: None,
        }
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

struct QueryState {
    path: String,
    page_size: Option<u32>,
    filter: Option<Filter>,
    cursor: Option<String>,
    buffer: VecDeque<Value>,
    exhausted: bool,
}

/// Query a database's rows as a lazy stream.
///
/// One POST per result page, issued only when the consumer pulls past the
/// buffered results; a consumer that stops pulling never triggers the next
/// fetch. Elements are normalized one at a time, so memory stays bounded
/// to a single response. An error envelope (or a malformed element) fails
/// the in-flight pull and ends the stream; the driver never retries.
///
/// The stream is single-pass and forward-only. Separate calls share no
/// state and may run concurrently.
pub fn query_database<'a, T: Transport + ?Sized>(
    transport: &'a T,
    params: QueryDatabaseParams,
) -> impl Stream<Item = Result<Page>> + 'a {
    let state = QueryState {
        path: format!("databases/{}/query", params.database_id.to_hyphenated()),
        page_size: params.page_size,
        filter: params.filter,
        cursor: None,
        buffer: VecDeque::new(),
        exhausted: false,
    };

    stream::try_unfold(state, move |mut state| async move {
        loop {
            if let Some(item) = state.buffer.pop_front() {
                let page = normalize::page_from_value(item)?;
                return Ok(Some((page, state)));
            }
            if state.exhausted {
                return Ok::<_, Error>(None);
            }

            let mut body = Map::new();
            if let Some(cursor) = &state.cursor {
                body.insert("start_cursor".to_string(), Value::String(cursor.clone()));
            }
            if let Some(size) = state.page_size {
                body.insert("page_size".to_string(), Value::from(size));
            }
            if let Some(filter) = &state.filter {
                body.insert("filter".to_string(), serde_json::to_value(filter)?);
            }

            let response = transport.post(&state.path, Value::Object(body)).await?;
            let list = normalize::list_from_value(response)?;
            state.buffer = list.results.into();
            state.cursor = list.next_cursor;
            state.exhausted = state.cursor.is_none();
        }
    })
}
