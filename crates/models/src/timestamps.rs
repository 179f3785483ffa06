use chrono::Utc;
use sea_orm::{entity::prelude::DateTimeWithTimeZone, ActiveValue, Set};

/// Stamp `created_at` on insert and `updated_at` on every save.
pub(crate) fn touch(
    created_at: &mut ActiveValue<DateTimeWithTimeZone>,
    updated_at: &mut ActiveValue<DateTimeWithTimeZone>,
    insert: bool,
) {
    let now: DateTimeWithTimeZone = Utc::now().into();
    if insert && created_at.is_not_set() {
        *created_at = Set(now);
    }
    *updated_at = Set(now);
}
