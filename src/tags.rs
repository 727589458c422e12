use std::collections::HashSet;

/// Split raw prompt input on commas exactly as typed.
///
/// No trimming happens here, so `" a"` keeps its leading space and an empty
/// input produces a single empty candidate.
pub fn split_tag_input(raw: &str) -> Vec<String> {
    raw.split(',').map(|t| t.to_string()).collect()
}

/// Normalize one candidate to a bare tag name: trimmed, without a leading `#`.
pub fn normalize_tag(t: &str) -> String {
    let trimmed = t.trim();
    trimmed.strip_prefix('#').unwrap_or(trimmed).trim().to_string()
}

/// Split and clean raw input into the tags the writer applies.
pub fn tag_candidates(raw: &str) -> Vec<String> {
    split_tag_input(raw)
        .iter()
        .map(|t| normalize_tag(t))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Suggested tag when a whole folder is targeted.
pub fn folder_default_tag(folder_name: &str) -> String {
    folder_name.replace(' ', "-")
}

/// Insertion-ordered set of tag names. Equality is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the tag was not present yet.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.seen.contains(&tag) {
            return false;
        }
        self.seen.insert(tag.clone());
        self.order.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.seen.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

impl<S: Into<String>> Extend<S> for TagSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        set.extend(iter);
        set
    }
}

/// Hash a tag for deterministic color selection
pub fn hash_tag(tag: &str) -> u64 {
    let mut h: u64 = 5381;
    for b in tag.bytes() {
        h = (h.wrapping_shl(5)).wrapping_add(h) ^ u64::from(b);
    }
    h
}

/// Get color for a tag based on hash
pub fn color_for_tag(tag: &str) -> (u8, u8, u8) {
    const PALETTE: &[(u8, u8, u8)] = &[
        (137, 180, 250),
        (166, 227, 161),
        (249, 226, 175),
        (245, 194, 231),
        (255, 169, 167),
        (148, 226, 213),
        (198, 160, 246),
        (240, 198, 198),
        (181, 232, 224),
        (255, 214, 165),
        (186, 225, 255),
        (214, 182, 255),
    ];
    let h = hash_tag(tag);
    PALETTE[(h as usize) % PALETTE.len()]
}
