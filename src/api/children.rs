// src/api/children.rs
//! The block children driver: a lazily paginated stream of child blocks.

use std::collections::VecDeque;

use futures::stream::{self, Stream};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::Block;
use crate::types::BlockId;

use super::{normalize, Transport};

/// Parameters for [`retrieve_block_children`].
///
/// A page is addressable as its own root block, so `block_id` accepts
/// `PageId` through `BlockId: From<PageId>`.
#[derive(Debug, Clone)]
pub struct RetrieveBlockChildrenParams {
    pub block_id: BlockId,
    /// Results per fetch; omitted from the request when `None`.
    pub page_size: Option<u32>,
}

impl RetrieveBlockChildrenParams {
    pub fn new(block_id: impl Into<BlockId>) -> Self {
        Self {
            block_id: block_id.into(),
            page_size: None,
        }
    }

    pub fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }
}

struct ChildrenState {
    path: String,
    page_size: Option<u32>,
    cursor: Option<String>,
    buffer: VecDeque<Value>,
    exhausted: bool,
}

/// Enumerate a block's direct children as a lazy stream.
///
/// Same pagination contract as `query_database`: one GET per result page,
/// fetched only on demand, error envelopes fail the in-flight pull, no
/// retries, single-pass. Children of children are not fetched; recursion
/// is the caller's loop.
pub fn retrieve_block_children<'a, T: Transport + ?Sized>(
    transport: &'a T,
    params: RetrieveBlockChildrenParams,
) -> impl Stream<Item = Result<Block>> + 'a {
    let state = ChildrenState {
        path: format!("blocks/{}/children", params.block_id.to_hyphenated()),
        page_size: params.page_size,
        cursor: None,
        buffer: VecDeque::new(),
        exhausted: false,
    };

    stream::try_unfold(state, move |mut state| async move {
        loop {
            if let Some(item) = state.buffer.pop_front() {
                let block = normalize::block_from_value(item)?;
                return Ok(Some((block, state)));
            }
            if state.exhausted {
                return Ok::<_, Error>(None);
            }

            let mut query: Vec<(String, String)> = Vec::new();
            if let Some(cursor) = &state.cursor {
                query.push(("start_cursor".to_string(), cursor.clone()));
            }
            if let Some(size) = state.page_size {
                query.push(("page_size".to_string(), size.to_string()));
            }

            let response = transport.get(&state.path, &query).await?;
            let list = normalize::list_from_value(response)?;
            state.buffer = list.results.into();
            state.cursor = list.next_cursor;
            state.exhausted = state.cursor.is_none();
        }
    })
}
