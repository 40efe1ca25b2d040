use sea_orm::{EntityTrait, QuerySelect, Select};

use siidona_domain::pagination::PageRequest;

/// Apply a clamped [`PageRequest`] as `OFFSET`/`LIMIT` to a select.
pub trait PageWindow {
    fn window(self, page: PageRequest) -> Self;
}

impl<E> PageWindow for Select<E>
where
    E: EntityTrait,
{
    fn window(self, page: PageRequest) -> Self {
        self.offset(page.offset()).limit(page.limit())
    }
}
