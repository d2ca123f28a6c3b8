pub mod repos;

pub(self) fn default_per_page() -> i64 {
    20
}
