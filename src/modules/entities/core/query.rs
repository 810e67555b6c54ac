use crate::modules::entities::core::record::EntityRecord;
use std::collections::HashMap;

/// Recognized OData system query options.
///
/// `$filter` and `$orderby` are accepted and kept for logging but never
/// evaluated: every record passes and insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub skip: usize,
    pub top: Option<usize>,
    pub select: Option<Vec<String>>,
    pub filter: Option<String>,
    pub orderby: Option<String>,
}

impl QueryOptions {
    /// Reads options from raw query parameters. Malformed or negative
    /// `$skip`/`$top` values fall back to their defaults instead of failing.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let skip = params
            .get("$skip")
            .and_then(|raw| parse_count("$skip", raw))
            .unwrap_or(0);
        let top = params.get("$top").and_then(|raw| parse_count("$top", raw));
        let select = params.get("$select").and_then(|raw| {
            let fields: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_string)
                .collect();
            (!fields.is_empty()).then_some(fields)
        });

        Self {
            skip,
            top,
            select,
            filter: non_empty(params.get("$filter")),
            orderby: non_empty(params.get("$orderby")),
        }
    }
}

fn parse_count(option: &str, raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::debug!(option, raw, "ignoring malformed query option");
            None
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

/// One page of a listing plus the size of the whole listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPage {
    pub records: Vec<EntityRecord>,
    pub count: usize,
}

/// Paginates then projects `listing`. The reported count is always the full
/// listing size, independent of `$skip`/`$top`.
pub fn apply(listing: Vec<EntityRecord>, options: &QueryOptions) -> QueryPage {
    if let Some(filter) = &options.filter {
        tracing::debug!(filter = filter.as_str(), "$filter is accepted but not evaluated");
    }
    if let Some(orderby) = &options.orderby {
        tracing::debug!(orderby = orderby.as_str(), "$orderby is accepted but not applied");
    }

    let count = listing.len();
    let page = listing
        .into_iter()
        .skip(options.skip)
        .take(options.top.unwrap_or(usize::MAX));

    let records = match &options.select {
        Some(fields) => page.map(|record| record.project(fields)).collect(),
        None => page.collect(),
    };

    QueryPage { records, count }
}
