//! Category tabs and the icon list shown inside the picker modal.

use icon_catalog::{IconGroup, SvgIcon};

use crate::ranking::rank_items;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the category sidebar.
pub struct CategoryTab {
    /// Catalog group id.
    pub id: String,
    /// Display label.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// What the icon list area renders.
pub enum IconListing {
    /// Nothing to show; render the translated tip.
    Empty {
        /// Message key for the empty-list text.
        tip: String,
    },
    /// Icons in display order.
    Icons(Vec<SvgIcon>),
}

/// Sidebar entries, one per catalog group, in catalog order.
pub fn category_tabs(groups: &[IconGroup]) -> Vec<CategoryTab> {
    groups
        .iter()
        .map(|group| CategoryTab {
            id: group.group_id.clone(),
            label: group.name.clone(),
        })
        .collect()
}

/// Icons of the category at `index`; empty when the catalog has no such group.
pub fn icons_for_type(groups: &[IconGroup], index: usize) -> Vec<SvgIcon> {
    groups
        .get(index)
        .map(|group| group.children.clone())
        .unwrap_or_default()
}

/// Filters `icons` by name against `search`; an empty search keeps every icon.
///
/// Matching ignores case and accents, so `cafe` finds `Café`.
pub fn filter_icons(icons: &[SvgIcon], search: &str) -> Vec<SvgIcon> {
    if search.is_empty() {
        return icons.to_vec();
    }
    rank_items(icons, search, |icon| icon.name.as_str())
}

/// Resolves the list area for the active category and search text.
pub fn icon_listing(
    groups: &[IconGroup],
    active_type_index: usize,
    search: &str,
    no_data_tip: &str,
) -> IconListing {
    let icons = filter_icons(&icons_for_type(groups, active_type_index), search);
    if icons.is_empty() {
        IconListing::Empty {
            tip: no_data_tip.to_string(),
        }
    } else {
        IconListing::Icons(icons)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn catalog() -> Vec<IconGroup> {
        vec![
            IconGroup::new(
                "common",
                "Common",
                vec![
                    SvgIcon::new("a", "Alpha", "<svg></svg>"),
                    SvgIcon::new("b", "Beta", "<svg></svg>"),
                ],
            ),
            IconGroup::new(
                "arrows",
                "Arrows",
                vec![SvgIcon::new("up", "Arrow Up", "<svg></svg>")],
            ),
        ]
    }

    fn ids(listing: IconListing) -> Vec<String> {
        match listing {
            IconListing::Icons(icons) => icons.into_iter().map(|icon| icon.id).collect(),
            IconListing::Empty { .. } => Vec::new(),
        }
    }

    #[test]
    fn tabs_mirror_catalog_groups() {
        assert_eq!(
            category_tabs(&catalog()),
            vec![
                CategoryTab {
                    id: "common".to_string(),
                    label: "Common".to_string(),
                },
                CategoryTab {
                    id: "arrows".to_string(),
                    label: "Arrows".to_string(),
                },
            ]
        );
    }

    #[test]
    fn search_filters_active_category_by_name() {
        assert_eq!(
            ids(icon_listing(&catalog(), 0, "al", "placeholder.noData")),
            vec!["a".to_string()]
        );
    }

    #[test]
    fn empty_search_shows_whole_category() {
        assert_eq!(
            ids(icon_listing(&catalog(), 0, "", "placeholder.noData")),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            ids(icon_listing(&catalog(), 1, "", "placeholder.noData")),
            vec!["up".to_string()]
        );
    }

    #[test]
    fn search_only_looks_at_active_category() {
        assert_eq!(
            icon_listing(&catalog(), 0, "arrow", "placeholder.noData"),
            IconListing::Empty {
                tip: "placeholder.noData".to_string(),
            }
        );
    }

    #[test]
    fn empty_catalog_renders_no_data_tip_for_any_index() {
        for index in [0, 1, 7] {
            assert_eq!(
                icon_listing(&[], index, "", "icons.empty"),
                IconListing::Empty {
                    tip: "icons.empty".to_string(),
                }
            );
        }
        assert!(category_tabs(&[]).is_empty());
    }

    #[test]
    fn search_ignores_accents_in_icon_names() {
        let icons = vec![
            SvgIcon::new("c", "Café", "<svg></svg>"),
            SvgIcon::new("r", "Résumé", "<svg></svg>"),
        ];
        let hits: Vec<String> = filter_icons(&icons, "cafe")
            .into_iter()
            .map(|icon| icon.id)
            .collect();
        assert_eq!(hits, vec!["c".to_string()]);
        assert_eq!(filter_icons(&icons, "resume")[0].id, "r");
    }

    #[test]
    fn out_of_range_index_is_empty() {
        assert!(icons_for_type(&catalog(), 5).is_empty());
    }
}
