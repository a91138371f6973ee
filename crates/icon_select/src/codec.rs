//! Text transforms between committed values and [`IconChecked`].
//!
//! Committed markup carries its identity in `data-name`/`data-id` attributes on the root
//! `<svg>` element. Single quotes are stripped from markup on the way in.

use form_contract::{ControlValue, IconValue};

use crate::{model::IconChecked, model::COMMITTED_ID_PREFIX, schema::IconSelectOptions};

const SVG_OPEN_TAG: &str = "<svg";

/// Reads the displayable icon out of a committed value; `None` when nothing is committed.
pub fn decode_value(value: &ControlValue) -> Option<IconChecked> {
    match value {
        ControlValue::Empty => None,
        ControlValue::Text(markup) if markup.is_empty() => None,
        ControlValue::Text(markup) => Some(IconChecked {
            name: Some(attribute_value(markup, "data-name").unwrap_or_default().to_string()),
            id: attribute_value(markup, "data-id").unwrap_or_default().to_string(),
            svg: Some(strip_single_quotes(markup)),
        }),
        ControlValue::Icon(icon) => Some(IconChecked {
            id: icon.id.clone(),
            name: icon.name.clone(),
            svg: icon.svg.as_deref().map(strip_single_quotes),
        }),
    }
}

/// Provisional selection used when the modal opens over `value`.
///
/// The committed `svg-` prefix is dropped so the id compares equal to catalog ids.
/// Values without an id seed nothing.
pub fn seed_selection(value: &ControlValue) -> Option<IconChecked> {
    let decoded = decode_value(value)?;
    if decoded.id.is_empty() {
        return None;
    }
    let id = decoded
        .id
        .strip_prefix(COMMITTED_ID_PREFIX)
        .unwrap_or(&decoded.id)
        .to_string();
    Some(IconChecked { id, ..decoded })
}

/// Builds the committed value for a confirmed selection.
pub fn encode_selection(checked: Option<&IconChecked>, options: &IconSelectOptions) -> ControlValue {
    if options.return_svg {
        let Some(checked) = checked else {
            return ControlValue::Empty;
        };
        let annotated = annotate_markup(
            checked.markup(),
            checked.name.as_deref().unwrap_or_default(),
            &checked.id,
        );
        let markup = if options.no_size {
            remove_attribute(&remove_attribute(&annotated, "width"), "height")
        } else {
            annotated
        };
        return ControlValue::text(markup);
    }

    match checked {
        Some(checked) if !checked.id.is_empty() => ControlValue::Icon(IconValue {
            id: format!("{COMMITTED_ID_PREFIX}{}", checked.id),
            name: checked.name.clone(),
            svg: checked.svg.clone(),
        }),
        _ => ControlValue::Empty,
    }
}

fn strip_single_quotes(markup: &str) -> String {
    markup.replace('\'', "")
}

fn annotate_markup(markup: &str, name: &str, id: &str) -> String {
    match markup.find(SVG_OPEN_TAG) {
        Some(at) => {
            let (head, tail) = markup.split_at(at + SVG_OPEN_TAG.len());
            format!(r#"{head} data-name="{name}" data-id="{id}"{tail}"#)
        }
        None => markup.to_string(),
    }
}

/// Finds the first `name="..."` attribute whose value stays on one line.
fn attribute_span(markup: &str, name: &str) -> Option<(usize, usize, usize)> {
    let needle = format!("{name}=\"");
    let mut from = 0;
    while let Some(found) = markup[from..].find(&needle) {
        let start = from + found;
        let value_start = start + needle.len();
        let bounded = start == 0
            || markup[..start]
                .chars()
                .next_back()
                .is_some_and(|c| c.is_whitespace() || c == '<');
        match markup[value_start..].find(|c: char| c == '"' || c == '\n') {
            Some(offset) if bounded && markup[value_start + offset..].starts_with('"') => {
                return Some((start, value_start, value_start + offset));
            }
            Some(_) | None => from = value_start,
        }
    }
    None
}

fn attribute_value<'a>(markup: &'a str, name: &str) -> Option<&'a str> {
    attribute_span(markup, name).map(|(_, value_start, value_end)| &markup[value_start..value_end])
}

fn remove_attribute(markup: &str, name: &str) -> String {
    let Some((start, _, value_end)) = attribute_span(markup, name) else {
        return markup.to_string();
    };
    let keep_from = markup[..start].trim_end().len();
    format!("{}{}", &markup[..keep_from], &markup[value_end + 1..])
}
