//! Collection registry.
//!
//! Every content type the CMS knows, in admin sidebar order. Declarations are
//! plain data built once on first access.

mod categories;
mod cities;
mod continents;
mod cooking_methods;
mod countries;
mod cuisines;
mod dietary_types;
mod difficulty_levels;
mod ingredient_categories;
mod ingredient_units;
mod ingredients;
mod media;
pub mod recipes;
mod regions;
mod seasons;
mod users;

use std::sync::LazyLock;

use crate::schema::CollectionConfig;

static REGISTRY: LazyLock<Vec<CollectionConfig>> = LazyLock::new(|| {
    vec![
        users::collection(),
        media::collection(),
        categories::collection(),
        recipes::collection(),
        ingredients::collection(),
        ingredient_units::collection(),
        cooking_methods::collection(),
        cuisines::collection(),
        difficulty_levels::collection(),
        seasons::collection(),
        dietary_types::collection(),
        ingredient_categories::collection(),
        continents::collection(),
        countries::collection(),
        regions::collection(),
        cities::collection(),
    ]
});

/// All collections in registration order.
pub fn registry() -> &'static [CollectionConfig] {
    &REGISTRY
}

/// Look up a collection by slug.
pub fn find(slug: &str) -> Option<&'static CollectionConfig> {
    REGISTRY.iter().find(|collection| collection.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldKind};
    use rustc_hash::FxHashSet;

    /// Relation targets of every field, however deeply nested.
    fn relations(fields: &[Field], out: &mut Vec<(&'static str, &'static str)>) {
        for field in fields {
            if let Some((target, _)) = field.relation() {
                out.push((field.name.unwrap_or_default(), target));
            }
            match &field.kind {
                FieldKind::Array { fields, .. }
                | FieldKind::Group { fields }
                | FieldKind::Row { fields } => relations(fields, out),
                FieldKind::Tabs { tabs } => {
                    for tab in tabs {
                        relations(&tab.fields, out);
                    }
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_slugs_are_unique() {
        let slugs: FxHashSet<_> = registry().iter().map(|c| c.slug).collect();
        assert_eq!(registry().len(), 16);
        assert_eq!(slugs.len(), 16);
    }

    #[test]
    fn test_relation_targets_exist() {
        for collection in registry() {
            let mut out = Vec::new();
            relations(&collection.fields, &mut out);
            for (field, target) in out {
                assert!(
                    find(target).is_some(),
                    "{}.{field} points at unknown collection `{target}`",
                    collection.slug
                );
            }
        }
    }

    #[test]
    fn test_slug_fields() {
        let without: Vec<_> = registry()
            .iter()
            .filter(|c| !c.has_slug())
            .map(|c| c.slug)
            .collect();
        assert_eq!(without, ["users", "media", "difficultyLevels", "ingredientUnits"]);
    }

    #[test]
    fn test_title_field_exists() {
        for collection in registry() {
            let title = collection.admin.use_as_title;
            if title != "id" {
                assert!(
                    collection.field(title).is_some(),
                    "{} uses missing title field `{title}`",
                    collection.slug
                );
            }
        }
    }

    #[test]
    fn test_find() {
        assert_eq!(find("recipes").map(|c| c.slug), Some("recipes"));
        assert!(find("posts").is_none());
    }

    #[test]
    fn test_recipe_relations() {
        let mut out = Vec::new();
        relations(&find("recipes").unwrap().fields, &mut out);
        for expected in [
            ("category", "categories"),
            ("difficulty", "difficultyLevels"),
            ("ingredient", "ingredients"),
            ("unit", "ingredientUnits"),
            ("author", "users"),
            ("image16x9", "media"),
        ] {
            assert!(out.contains(&expected), "missing {expected:?}");
        }
    }
}
