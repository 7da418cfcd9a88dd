//! Link and sample encoding.
//!
//! Each link or sample becomes one [`EncodedRow`]. Fields whose value equals
//! the host default are left out, so an omitted field reads as "use default"
//! on import.
//!
//! # Field Order
//!
//! | Position | Link | Sample | Omitted when |
//! |----------|------|--------|--------------|
//! | 1 | `group_title` | `group_title` | never |
//! | 2 | `purchased_separately` | - | never |
//! | 3 | `title` | `title` | never |
//! | 4 | `price` | - | unset or zero |
//! | 5 | `downloads` | - | unset or `<= 0` |
//! | 6 | `sortorder` | `sortorder` | `<= 0` |
//! | 7 | `shareable` | - | use config (`2`) |
//! | 8 | `file` / `url` | `file` / `url` | never |
//! | 9 | `sample_file` / `sample_url` | - | no sample attached |

use crate::config::ExportConfig;
use crate::models::{
    DEFAULT_NUMBER_OF_DOWNLOADS, DEFAULT_SORT_ORDER, EncodedRow, FieldKey, Link, Payload,
    Product, Sample,
};

/// Encodes the product-level and always-present fields of a link.
#[must_use]
pub fn prepare_link_data(product: &Product, link: &Link) -> EncodedRow {
    let mut row = EncodedRow::new();
    row.push(
        FieldKey::GroupTitle,
        product.links_title.clone().unwrap_or_default(),
    );
    row.push(
        FieldKey::PurchasedSeparately,
        flag_value(product.links_purchased_separately),
    );
    row.push(FieldKey::Title, link.title.as_str());
    row
}

/// Encodes the optional fields and payloads of a link.
#[must_use]
pub fn prepare_additional_link_data(link: &Link) -> EncodedRow {
    let mut row = EncodedRow::new();

    if let Some(price) = link.price.filter(|p| !is_zero(*p)) {
        row.push(FieldKey::Price, price.to_string());
    }
    if let Some(downloads) = link
        .number_of_downloads
        .filter(|d| *d > DEFAULT_NUMBER_OF_DOWNLOADS)
    {
        row.push(FieldKey::Downloads, downloads.to_string());
    }
    push_sort_order(&mut row, link.sort_order);
    if !link.is_shareable.is_default() {
        row.push(FieldKey::Shareable, link.is_shareable.to_string());
    }
    push_payload(&mut row, &link.link, FieldKey::File, FieldKey::Url);
    if let Some(sample) = &link.sample {
        push_payload(&mut row, sample, FieldKey::SampleFile, FieldKey::SampleUrl);
    }

    row
}

/// Encodes the product-level and always-present fields of a sample.
#[must_use]
pub fn prepare_sample_data(product: &Product, sample: &Sample) -> EncodedRow {
    let mut row = EncodedRow::new();
    row.push(
        FieldKey::GroupTitle,
        product.samples_title.clone().unwrap_or_default(),
    );
    row.push(FieldKey::Title, sample.title.as_str());
    row
}

/// Encodes the optional fields and payload of a sample.
#[must_use]
pub fn prepare_additional_sample_data(sample: &Sample) -> EncodedRow {
    let mut row = EncodedRow::new();
    push_sort_order(&mut row, sample.sort_order);
    push_payload(&mut row, &sample.sample, FieldKey::File, FieldKey::Url);
    row
}

/// Encodes a link completely.
#[must_use]
pub fn encode_link(product: &Product, link: &Link) -> EncodedRow {
    let mut row = prepare_link_data(product, link);
    row.extend(prepare_additional_link_data(link));
    row
}

/// Encodes a sample completely.
#[must_use]
pub fn encode_sample(product: &Product, sample: &Sample) -> EncodedRow {
    let mut row = prepare_sample_data(product, sample);
    row.extend(prepare_additional_sample_data(sample));
    row
}

/// Formats one encoded component as `key=value` pairs.
#[must_use]
pub fn format_row(fields: &EncodedRow, config: &ExportConfig) -> String {
    fields.format(config.multi_value_separator)
}

/// Joins formatted components into one cell value.
///
/// Returns `None` when there are no components.
#[must_use]
pub fn join_components<I>(components: I, config: &ExportConfig) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut components = components.into_iter();
    let mut cell = components.next()?;
    for component in components {
        cell.push(config.component_separator);
        cell.push_str(&component);
    }
    Some(cell)
}

/// Splits a cell value back into its components' `key=value` pairs.
///
/// Values containing either separator cannot be recovered; the export does
/// not escape them. A pair without `=` is returned with an empty value.
#[must_use]
pub fn decode_cell(cell: &str, config: &ExportConfig) -> Vec<Vec<(String, String)>> {
    if cell.is_empty() {
        return Vec::new();
    }

    cell.split(config.component_separator)
        .map(|component| {
            component
                .split(config.multi_value_separator)
                .map(|pair| match pair.split_once('=') {
                    Some((key, value)) => (key.to_string(), value.to_string()),
                    None => (pair.to_string(), String::new()),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

fn push_sort_order(row: &mut EncodedRow, sort_order: i64) {
    if sort_order > DEFAULT_SORT_ORDER {
        row.push(FieldKey::SortOrder, sort_order.to_string());
    }
}

fn push_payload(row: &mut EncodedRow, payload: &Payload, file_key: FieldKey, url_key: FieldKey) {
    match payload {
        Payload::File(path) => row.push(file_key, path.as_str()),
        Payload::Url(address) => row.push(url_key, address.as_str()),
    }
}

fn flag_value(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "1",
        Some(false) => "0",
        None => "",
    }
}

#[allow(clippy::float_cmp)]
fn is_zero(value: f64) -> bool {
    value == 0.0
}
