//! Metadata Selectors
//!
//! Selector rules for extracting article metadata (author, title, tags, categories).
//!
//! Port of:
//! - `internal/selector/meta-author.go` - Author extraction
//! - `internal/selector/meta-author-discard.go` - Author noise removal
//! - `internal/selector/meta-title.go` - Title extraction
//! - `internal/selector/meta-tags.go` - Tag extraction
//! - `internal/selector/meta-categories.go` - Category extraction

use dom_query::Selection;

use crate::selector::utils::{attr, class, contains, id, lower, tag};
use crate::selector::Rule;

// ============================================================
// AUTHOR SELECTORS
// ============================================================

/// Author selector rules (in priority order)
pub static META_AUTHOR: &[Rule] = &[meta_author_rule_1, meta_author_rule_2, meta_author_rule_3];

/// Rule 1: Specific author markers
///
/// Tags: a, address, div, link, p, span, strong, author
/// Patterns: rel="author", id="author", class="author", itemprop="author name", etc.
///
/// Go: metaAuthorRule1 (lines 37-70)
#[must_use]
pub fn meta_author_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let rel = attr(sel, "rel");
    let item_prop = attr(sel, "itemprop");
    let data_testid = attr(sel, "data-testid");

    // <author> tag always matches
    if tag_val == "author" {
        return true;
    }

    // Tag filter
    if !matches!(
        tag_val.as_str(),
        "a" | "address" | "div" | "link" | "p" | "span" | "strong"
    ) {
        return false;
    }

    // Pattern matching
    rel == "author"
        || id_val == "author"
        || class_val == "author"
        || item_prop == "author name"
        || rel == "me"
        || contains(&class_val, "author-name")
        || contains(&class_val, "AuthorName")
        || contains(&class_val, "authorName")
        || contains(&class_val, "author name")
        || data_testid == "AuthorCard"
        || data_testid == "AuthorURL"
}

/// Rule 2: Generic author markers
///
/// Tags: a, div, h3, h4, p, span
/// Patterns: *author*, byline, channel-name, submitted-by, posted-by, etc.
///
/// Go: metaAuthorRule2 (lines 72-109)
#[must_use]
pub fn meta_author_rule_2(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let item_prop = attr(sel, "itemprop");

    // Tag filter
    if !matches!(
        tag_val.as_str(),
        "a" | "div" | "h3" | "h4" | "p" | "span"
    ) {
        return false;
    }

    // Pattern matching
    contains(&class_val, "author")
        || contains(&id_val, "author")
        || contains(&item_prop, "author")
        || class_val == "byline"
        || contains(&class_val, "channel-name")
        // Chinese patterns
        || contains(&id_val, "zuozhe")
        || contains(&class_val, "zuozhe")
        || contains(&id_val, "bianji")
        || contains(&class_val, "bianji")
        || contains(&id_val, "xiaobian")
        || contains(&class_val, "xiaobian")
        // Other patterns
        || contains(&class_val, "submitted-by")
        || contains(&class_val, "posted-by")
        || class_val == "username"
        || class_val == "byl"
        || class_val == "BBL"
        || contains(&class_val, "journalist-name")
}

/// Rule 3: Last resort author markers (any element)
///
/// No tag filter - matches any element
/// Patterns: author (case-insensitive), screenname, byline, writer
///
/// Go: metaAuthorRule3 (lines 111-132)
#[must_use]
pub fn meta_author_rule_3(sel: &Selection) -> bool {
    let id_val = id(sel);
    let class_val = class(sel);
    let data_component = attr(sel, "data-component");
    let item_prop = attr(sel, "itemprop");

    // No tag filter

    // Pattern matching
    contains(&lower(&id_val), "author")
        || contains(&lower(&class_val), "author")
        || contains(&class_val, "screenname")
        || contains(&lower(&data_component), "byline")
        || contains(&item_prop, "author")
        || contains(&class_val, "writer")
        || contains(&lower(&class_val), "byline")
}

// ============================================================
// AUTHOR DISCARD SELECTORS
// ============================================================

/// Author discard rules (noise to remove from author elements)
pub static META_AUTHOR_DISCARD: &[Rule] = &[
    meta_author_discard_rule_1,
    meta_author_discard_rule_2,
    meta_author_discard_rule_3,
];

/// Rule 1: Author noise by tag
///
/// Tags: a, span, div
/// Patterns: link, author-link, mailto, twitter, avatar, pic, photo, image, logo
///
/// Go: metaAuthorDiscardRule1 (lines 30-55)
#[must_use]
pub fn meta_author_discard_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let class_val = class(sel);
    let href = attr(sel, "href");

    // Tag filter
    if !matches!(tag_val.as_str(), "a" | "span" | "div") {
        return false;
    }

    // Pattern matching
    contains(&class_val, "link")
        || contains(&class_val, "author-link")
        || contains(&href, "mailto")
        || contains(&href, "twitter")
        || contains(&class_val, "avatar")
        || contains(&class_val, "pic")
        || contains(&class_val, "photo")
        || contains(&class_val, "image")
        || contains(&class_val, "logo")
}

/// Rule 2: Author social links
///
/// Tags: a
/// Patterns: href contains social media domains
///
/// Go: metaAuthorDiscardRule2 (lines 57-73)
#[must_use]
pub fn meta_author_discard_rule_2(sel: &Selection) -> bool {
    if tag(sel) != "a" {
        return false;
    }

    let href = attr(sel, "href");

    // Social media patterns
    contains(&href, "facebook")
        || contains(&href, "twitter")
        || contains(&href, "linkedin")
        || contains(&href, "instagram")
        || contains(&href, "youtube")
}

/// Rule 3: Author image elements
///
/// Tags: img, figure
///
/// Go: metaAuthorDiscardRule3 (lines 75-93)
#[must_use]
pub fn meta_author_discard_rule_3(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    tag_val == "img" || tag_val == "figure"
}

// ============================================================
// TITLE SELECTORS
// ============================================================

/// Title selector rules
pub static META_TITLE: &[Rule] = &[meta_title_rule_1, meta_title_rule_2, meta_title_rule_3];

/// Rule 1: Specific title markers
///
/// Tags: h1, h2
/// Patterns: itemprop="headline", class*="title", id*="title"
///
/// Go: metaTitleRule1 (lines 30-52)
#[must_use]
pub fn meta_title_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let item_prop = attr(sel, "itemprop");

    // Tag filter
    if !matches!(tag_val.as_str(), "h1" | "h2") {
        return false;
    }

    // Pattern matching
    item_prop == "headline"
        || item_prop == "name"
        || contains(&class_val, "title")
        || contains(&id_val, "title")
        || contains(&class_val, "headline")
        || contains(&id_val, "headline")
}

/// Rule 2: Generic h1 elements
///
/// Tags: h1 only
///
/// Go: metaTitleRule2 (lines 54-74)
#[must_use]
pub fn meta_title_rule_2(sel: &Selection) -> bool {
    tag(sel) == "h1"
}

/// Rule 3: Entry title markers
///
/// Any tag
/// Patterns: entry-title, post-title, article-title
///
/// Go: metaTitleRule3 (lines 76-93)
#[must_use]
pub fn meta_title_rule_3(sel: &Selection) -> bool {
    let class_val = class(sel);

    // No tag filter
    contains(&class_val, "entry-title")
        || contains(&class_val, "post-title")
        || contains(&class_val, "article-title")
}

// ============================================================
// TAG SELECTORS
// ============================================================

/// Tag selector rules (article tags/keywords)
pub static META_TAGS: &[Rule] = &[
    meta_tags_rule_1,
    meta_tags_rule_2,
    meta_tags_rule_3,
    meta_tags_rule_4,
];

/// Rule 1: Specific tag containers
///
/// Tags: div, p, ul, ol, span
/// Patterns: tags, tag-list, keywords
///
/// Go: metaTagsRule1 (lines 30-55)
#[must_use]
pub fn meta_tags_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let id_class = format!("{id_val}{class_val}");

    // Tag filter
    if !matches!(tag_val.as_str(), "div" | "p" | "ul" | "ol" | "span") {
        return false;
    }

    // Pattern matching
    contains(&id_class, "tags") || contains(&class_val, "tag-list") || contains(&id_class, "keywords")
}

/// Rule 2: Link-based tags
///
/// Tags: a
/// Patterns: rel="tag", href contains "/tag/"
///
/// Go: metaTagsRule2 (lines 57-80)
#[must_use]
pub fn meta_tags_rule_2(sel: &Selection) -> bool {
    if tag(sel) != "a" {
        return false;
    }

    let rel = attr(sel, "rel");
    let href = attr(sel, "href");

    rel == "tag" || contains(&href, "/tag/")
}

/// Rule 3: Meta tag elements
///
/// Tags: meta
/// Patterns: name="keywords"
///
/// Go: metaTagsRule3 (lines 82-100)
#[must_use]
pub fn meta_tags_rule_3(sel: &Selection) -> bool {
    if tag(sel) != "meta" {
        return false;
    }

    let name = attr(sel, "name");
    name == "keywords" || name == "news_keywords"
}

/// Rule 4: Generic tag markers
///
/// Any tag
/// Patterns: itemprop="keywords"
///
/// Go: metaTagsRule4 (lines 102-125)
#[must_use]
pub fn meta_tags_rule_4(sel: &Selection) -> bool {
    let item_prop = attr(sel, "itemprop");
    item_prop == "keywords"
}

// ============================================================
// CATEGORY SELECTORS
// ============================================================

/// Category selector rules
pub static META_CATEGORIES: &[Rule] = &[
    meta_categories_rule_1,
    meta_categories_rule_2,
    meta_categories_rule_3,
    meta_categories_rule_4,
    meta_categories_rule_5,
    meta_categories_rule_6,
];

/// Rule 1: Specific category containers
///
/// Tags: div, p, ul, ol, span
/// Patterns: category, categories, section, rubric
///
/// Go: metaCategoriesRule1 (lines 30-60)
#[must_use]
pub fn meta_categories_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let id_class = format!("{id_val}{class_val}");

    // Tag filter
    if !matches!(tag_val.as_str(), "div" | "p" | "ul" | "ol" | "span") {
        return false;
    }

    // Pattern matching
    contains(&id_class, "category")
        || contains(&id_class, "categories")
        || contains(&id_class, "section")
        || contains(&id_class, "rubric")
}

/// Rule 2: Link-based categories
///
/// Tags: a
/// Patterns: href contains "/category/"
///
/// Go: metaCategoriesRule2 (lines 62-85)
#[must_use]
pub fn meta_categories_rule_2(sel: &Selection) -> bool {
    if tag(sel) != "a" {
        return false;
    }

    let href = attr(sel, "href");
    contains(&href, "/category/") || contains(&href, "/section/")
}

/// Rule 3: Meta category elements
///
/// Tags: meta
/// Patterns: name="category", property="article:section"
///
/// Go: metaCategoriesRule3 (lines 87-110)
#[must_use]
pub fn meta_categories_rule_3(sel: &Selection) -> bool {
    if tag(sel) != "meta" {
        return false;
    }

    let name = attr(sel, "name");
    let property = attr(sel, "property");

    name == "category" || property == "article:section"
}

/// Rule 4: Breadcrumb categories
///
/// Tags: nav, ol, ul
/// Patterns: breadcrumb
///
/// Go: metaCategoriesRule4 (lines 112-135)
#[must_use]
pub fn meta_categories_rule_4(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let id_class = format!("{id_val}{class_val}");

    // Tag filter
    if !matches!(tag_val.as_str(), "nav" | "ol" | "ul") {
        return false;
    }

    contains(&id_class, "breadcrumb")
}

/// Rule 5: Schema.org article section
///
/// Any tag
/// Patterns: itemprop="articleSection"
///
/// Go: metaCategoriesRule5 (lines 137-160)
#[must_use]
pub fn meta_categories_rule_5(sel: &Selection) -> bool {
    let item_prop = attr(sel, "itemprop");
    item_prop == "articleSection"
}

/// Rule 6: Generic section markers
///
/// Any tag
/// Patterns: data-section, section-name
///
/// Go: metaCategoriesRule6 (lines 162-192)
#[must_use]
pub fn meta_categories_rule_6(sel: &Selection) -> bool {
    let class_val = class(sel);
    let data_section = attr(sel, "data-section");

    !data_section.is_empty() || contains(&class_val, "section-name")
}

// ============================================================
// SITENAME SELECTORS
// ============================================================

/// Sitename selector rules
pub static META_SITENAME: &[Rule] = &[meta_sitename_rule_1, meta_sitename_rule_2];

/// Rule 1: Specific sitename markers
///
/// Tags: div, p, span, a
/// Patterns: site-name, site-title, brand
#[must_use]
pub fn meta_sitename_rule_1(sel: &Selection) -> bool {
    let tag_val = tag(sel);
    let id_val = id(sel);
    let class_val = class(sel);
    let id_class = format!("{id_val}{class_val}");

    // Tag filter
    if !matches!(tag_val.as_str(), "div" | "p" | "span" | "a") {
        return false;
    }

    // Pattern matching
    contains(&id_class, "site-name")
        || contains(&id_class, "sitename")
        || contains(&id_class, "site-title")
        || contains(&id_class, "brand")
        || id_val == "logo"
        || class_val == "logo"
}

/// Rule 2: Header/nav sitename
///
/// Tags: header, nav
/// Patterns: any header/nav with site info
#[must_use]
pub fn meta_sitename_rule_2(sel: &Selection) -> bool {
    let tag_val = tag(sel);

    // Look for header or nav tags that might contain site name
    matches!(tag_val.as_str(), "header" | "nav")
}

// ============================================================
// HELPER FUNCTIONS
// ============================================================

/// Find author elements
#[must_use]
pub fn find_authors<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    use crate::selector::query_all;
    let mut all = Vec::new();
    for rule in META_AUTHOR {
        all.extend(query_all(root, *rule));
    }
    all
}

/// Find title elements
#[must_use]
pub fn find_titles<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    use crate::selector::query_all;
    let mut all = Vec::new();
    for rule in META_TITLE {
        all.extend(query_all(root, *rule));
    }
    all
}

/// Find tag elements
#[must_use]
pub fn find_tags<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    use crate::selector::query_all;
    let mut all = Vec::new();
    for rule in META_TAGS {
        all.extend(query_all(root, *rule));
    }
    all
}

/// Find category elements
#[must_use]
pub fn find_categories<'a>(root: &Selection<'a>) -> Vec<Selection<'a>> {
    use crate::selector::query_all;
    let mut all = Vec::new();
    for rule in META_CATEGORIES {
        all.extend(query_all(root, *rule));
    }
    all
}

/// Check if element is author noise
#[must_use]
pub fn is_author_discard(sel: &Selection) -> bool {
    META_AUTHOR_DISCARD.iter().any(|rule| rule(sel))
}
