//! Catalog filtering, ordering, and home-page sectioning.
//!
//! Every function here is a pure transformation of an in-memory product
//! list. The storefront fetches the full catalog once per render and
//! derives each page's contents from it, so there is no hidden state:
//! filtered lists are passed in and returned explicitly.

use crate::types::Product;

/// The named category pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Men,
    Women,
    Accessories,
}

impl Category {
    /// The backend's category slug. Matching against products is exact and
    /// case-sensitive: a product categorized `"Men"` does not appear on the
    /// men page.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Accessories => "accessories",
        }
    }

    /// Page title for the category listing.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Men => "Men's Apparel",
            Self::Women => "Women's Apparel",
            Self::Accessories => "Accessories & Gear",
        }
    }
}

/// Keep only products whose category matches the given page, verbatim.
#[must_use]
pub fn filter_category(products: Vec<Product>, category: Category) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category == category.slug())
        .collect()
}

/// Case-insensitive substring search over product name and category.
///
/// An empty (or whitespace-only) query is not a search: the full list is
/// returned unfiltered.
#[must_use]
pub fn search(products: Vec<Product>, query: &str) -> Vec<Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return products;
    }
    products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort by ID descending, so the newest products come first.
#[must_use]
pub fn newest_first(mut products: Vec<Product>) -> Vec<Product> {
    products.sort_by_key(|p| std::cmp::Reverse(p.id));
    products
}

/// Maximum size of the home page's featured set.
pub const FEATURED_COUNT: usize = 5;

/// Products shown per non-featured home section.
const SECTION_SIZE: usize = 4;

/// Select the featured set: the first [`FEATURED_COUNT`] discounted
/// products in list order, padded with the leading non-discounted products
/// when fewer discounted ones exist. Never exceeds the list length.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<Product> {
    let mut picks: Vec<Product> = products
        .iter()
        .filter(|p| p.is_discounted())
        .take(FEATURED_COUNT)
        .cloned()
        .collect();

    if picks.len() < FEATURED_COUNT {
        let fillers = products
            .iter()
            .filter(|p| !p.is_discounted())
            .take(FEATURED_COUNT - picks.len())
            .cloned();
        picks.extend(fillers);
    }

    picks
}

/// The six fixed product sections of the home page.
#[derive(Debug, Clone, Default)]
pub struct HomeSections {
    /// Discount-led featured set, at most 5 products.
    pub featured: Vec<Product>,
    /// Newest 4 men's products.
    pub sneakers: Vec<Product>,
    /// Newest 4 accessories.
    pub bags_and_hats: Vec<Product>,
    /// Newest 4 women's products.
    pub womens_picks: Vec<Product>,
    /// Accessories 5-8.
    pub fragrance: Vec<Product>,
    /// Accessories 9-12.
    pub headwear: Vec<Product>,
}

impl HomeSections {
    /// Partition the full catalog into home-page sections.
    ///
    /// The list is ordered newest-first before bucketing, so every section
    /// leads with the most recent additions.
    #[must_use]
    pub fn build(products: Vec<Product>) -> Self {
        let products = newest_first(products);

        let men = filter_category(products.clone(), Category::Men);
        let women = filter_category(products.clone(), Category::Women);
        let accessories = filter_category(products.clone(), Category::Accessories);

        Self {
            featured: featured(&products),
            sneakers: slice_section(&men, 0),
            bags_and_hats: slice_section(&accessories, 0),
            womens_picks: slice_section(&women, 0),
            fragrance: slice_section(&accessories, SECTION_SIZE),
            headwear: slice_section(&accessories, 2 * SECTION_SIZE),
        }
    }
}

/// A [`SECTION_SIZE`] window into a category bucket, empty past the end.
fn slice_section(products: &[Product], start: usize) -> Vec<Product> {
    products
        .iter()
        .skip(start)
        .take(SECTION_SIZE)
        .cloned()
        .collect()
}
