//! Behavioural tests for page slicing and cursor continuation.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use pagination::{Cursor, Page, PageRequest, paginate};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

#[derive(Default, ScenarioState)]
struct World {
    items: Slot<Vec<usize>>,
    pages: Slot<Vec<Page<usize>>>,
    page: Slot<Page<usize>>,
}

impl World {
    fn items(&self) -> Vec<usize> {
        self.items.get().expect("items should be set")
    }

    fn page(&self) -> Page<usize> {
        self.page.get().expect("a page should be requested")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

#[given("a result list of {count:usize} items")]
fn a_result_list_of_items(world: &World, count: usize) {
    world.items.set((0..count).collect());
}

#[when("pages of size {size:usize} are requested until no more remain")]
fn pages_are_requested_until_no_more_remain(world: &World, size: usize) {
    let items = world.items();
    let mut request = PageRequest::new(0, size).expect("valid page size");
    let mut pages = Vec::new();
    loop {
        let page = paginate(&items, request);
        let has_more = page.has_more;
        pages.push(page);
        if !has_more {
            break;
        }
        request = request.next();
    }
    world.pages.set(pages);
}

#[when("page {page:usize} of size {size:usize} is requested")]
fn page_of_size_is_requested(world: &World, page: usize, size: usize) {
    let request = PageRequest::new(page, size).expect("valid page size");
    world.page.set(paginate(&world.items(), request));
}

#[when("the next cursor is followed")]
fn the_next_cursor_is_followed(world: &World) {
    let token = world
        .page()
        .next_cursor
        .expect("page should carry a next cursor")
        .encode();
    let cursor = Cursor::decode(&token).expect("cursor should decode");
    world.page.set(paginate(&world.items(), cursor.request()));
}

#[then("the concatenated pages equal the result list")]
fn the_concatenated_pages_equal_the_result_list(world: &World) {
    let pages = world.pages.get().expect("pages should be requested");
    let rebuilt: Vec<usize> = pages.into_iter().flat_map(|page| page.items).collect();
    assert_eq!(rebuilt, world.items());
}

#[then("only the final page reports no more results")]
fn only_the_final_page_reports_no_more_results(world: &World) {
    let pages = world.pages.get().expect("pages should be requested");
    let flags: Vec<bool> = pages.iter().map(|page| page.has_more).collect();
    let (last, earlier) = flags.split_last().expect("at least one page");
    assert!(!last, "final page must not report more results");
    assert!(earlier.iter().all(|flag| *flag), "earlier pages report more");
}

#[then("the page holds {count:usize} items")]
fn the_page_holds_items(world: &World, count: usize) {
    assert_eq!(world.page().items.len(), count);
}

#[then("the page reports no more results")]
fn the_page_reports_no_more_results(world: &World) {
    let page = world.page();
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
}

#[then("the page starts at item {first:usize}")]
fn the_page_starts_at_item(world: &World, first: usize) {
    assert_eq!(world.page().items.first().copied(), Some(first));
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "Walking every page rebuilds the result list"
)]
fn walking_every_page_rebuilds_the_result_list(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "A short list fits on the first page"
)]
fn a_short_list_fits_on_the_first_page(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "A page beyond the data is empty"
)]
fn a_page_beyond_the_data_is_empty(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/pagination.feature",
    name = "The next cursor addresses the following page"
)]
fn the_next_cursor_addresses_the_following_page(world: World) {
    let _ = world;
}
