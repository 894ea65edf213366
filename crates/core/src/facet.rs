//! Facet filtering for catalog queries.
//!
//! An artwork carries three independent free-text facets: category,
//! material, and size. Every catalog listing operation, filtered or not,
//! reduces to a [`FacetFilter`] with an optional value per facet; the
//! persistence layer builds a conjunction from the present values only.

/// An equality filter over the three artwork facets.
///
/// A `None` facet is unconstrained. Values are matched by exact
/// code-point equality, case-sensitive; the empty string is a legal
/// value and matches literally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetFilter {
    pub category: Option<String>,
    pub material: Option<String>,
    pub size: Option<String>,
}

impl FacetFilter {
    /// A filter that matches every artwork.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Constrain the category facet.
    pub fn with_category(mut self, value: impl Into<String>) -> Self {
        self.category = Some(value.into());
        self
    }

    /// Constrain the material facet.
    pub fn with_material(mut self, value: impl Into<String>) -> Self {
        self.material = Some(value.into());
        self
    }

    /// Constrain the size facet.
    pub fn with_size(mut self, value: impl Into<String>) -> Self {
        self.size = Some(value.into());
        self
    }
}

/// Split a hyphen-joined path segment into exactly `N` facet values.
///
/// Multi-facet routes join their values into one path segment
/// (`{type}-{material}`); the router matches whole segments only, so the
/// split happens here on the first `N - 1` hyphens. Empty values are
/// allowed (the empty string is a legal facet value); a segment with too
/// few hyphens yields `None`.
pub fn split_facet_segment<const N: usize>(segment: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = segment.splitn(N, '-').collect();
    <[&str; N]>::try_from(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_compose() {
        let filter = FacetFilter::unfiltered()
            .with_category("油画")
            .with_size("100x80");
        assert_eq!(filter.category.as_deref(), Some("油画"));
        assert_eq!(filter.material, None);
        assert_eq!(filter.size.as_deref(), Some("100x80"));
    }

    #[test]
    fn unfiltered_has_no_constraints() {
        assert_eq!(FacetFilter::unfiltered(), FacetFilter::default());
    }

    #[test]
    fn splits_two_values() {
        assert_eq!(split_facet_segment::<2>("oil-canvas"), Some(["oil", "canvas"]));
    }

    #[test]
    fn splits_three_values_keeping_later_hyphens() {
        // Only the first N - 1 hyphens split; the rest stay in the tail value.
        assert_eq!(
            split_facet_segment::<3>("oil-canvas-100-80"),
            Some(["oil", "canvas", "100-80"])
        );
    }

    #[test]
    fn empty_values_are_legal() {
        assert_eq!(split_facet_segment::<2>("-"), Some(["", ""]));
        assert_eq!(split_facet_segment::<2>("oil-"), Some(["oil", ""]));
    }

    #[test]
    fn too_few_values_is_rejected() {
        assert_eq!(split_facet_segment::<2>("plainsegment"), None);
        assert_eq!(split_facet_segment::<3>("only-two"), None);
    }
}
