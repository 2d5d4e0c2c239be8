//! Page descriptors for the paged summary collection.

/// Where the current page sits in the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub current_page: u32,
  pub total_pages: u32,
  pub has_next_page: bool,
  pub has_prev_page: bool,
}

impl Pagination {
  /// Derive the descriptor for `page` of a collection with `total_count` items.
  ///
  /// `total_pages` is never below 1, so an empty collection still has page 1.
  pub fn new(page: u32, total_count: u64, page_size: u32) -> Self {
    let page_size = u64::from(page_size.max(1));
    let total_pages = u32::try_from(total_count.div_ceil(page_size))
      .unwrap_or(u32::MAX)
      .max(1);
    let current_page = page.max(1);

    Self {
      current_page,
      total_pages,
      has_next_page: current_page < total_pages,
      has_prev_page: current_page > 1,
    }
  }

  /// Descriptor used while showing search results: one page, no navigation.
  pub fn search_mode() -> Self {
    Self {
      current_page: 1,
      total_pages: 1,
      has_next_page: false,
      has_prev_page: false,
    }
  }

  /// Page numbers to offer around the current page, at most `max_buttons` wide.
  ///
  /// The window is centred on the current page where possible and shifted to
  /// stay inside `1..=total_pages` near either end.
  pub fn visible_pages(&self, max_buttons: u32) -> Vec<u32> {
    if max_buttons == 0 {
      return Vec::new();
    }

    let total = i64::from(self.total_pages);
    let current = i64::from(self.current_page.min(self.total_pages));
    let width = i64::from(max_buttons);

    let mut start = (current - width / 2).max(1);
    let end = (start + width - 1).min(total);
    if end - start + 1 < width {
      start = (end - width + 1).max(1);
    }

    (start..=end).map(|p| p as u32).collect()
  }
}

/// Zero-based item offset of the first entry on `page`.
pub fn offset(page: u32, page_size: u32) -> u32 {
  page.max(1).saturating_sub(1).saturating_mul(page_size)
}

/// The slice of `items` that falls on the page described by `pagination`.
pub fn page_slice<'a, T>(items: &'a [T], pagination: &Pagination, page_size: u32) -> &'a [T] {
  let start = (offset(pagination.current_page, page_size) as usize).min(items.len());
  let end = start.saturating_add(page_size as usize).min(items.len());
  &items[start..end]
}
