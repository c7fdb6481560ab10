//! Behaviour-driven tests for restaurant discovery orchestration.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dining_backend::domain::ports::{
    DiscoveryRequest, FixtureRestaurantSource, RawElement, RestaurantDiscovery, RestaurantSource,
    RestaurantSourceError,
};
use dining_backend::domain::{
    Coordinates, DietaryTag, Error, ErrorCode, OverpassQuery, RandomSource, Restaurant,
    RestaurantDiscoveryService,
};
use mockable::DefaultClock;
use pagination::{PageRequest, paginate};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;

const OTTAWA: Coordinates = Coordinates::new(45.4215, -75.6972);
const KM_PER_DEGREE: f64 = 111.194_926_6;
const WANTED_DIETS: [DietaryTag; 2] = [DietaryTag::Vegan, DietaryTag::GlutenFree];

#[derive(Debug, Clone, Copy, Default)]
struct TimingOutSource;

#[async_trait]
impl RestaurantSource for TimingOutSource {
    async fn fetch_elements(
        &self,
        _query: &OverpassQuery,
    ) -> Result<Vec<RawElement>, RestaurantSourceError> {
        Err(RestaurantSourceError::timeout("status 504"))
    }
}

#[derive(Debug, Clone)]
enum SourceSetup {
    Payload(Vec<RawElement>),
    TimesOut,
}

#[derive(Default, ScenarioState)]
struct DiscoveryWorld {
    source: Slot<SourceSetup>,
    last_result: Slot<Result<Vec<Restaurant>, Error>>,
}

impl DiscoveryWorld {
    fn discover(&self, request: DiscoveryRequest) {
        let runtime = Runtime::new().expect("create runtime");
        let setup = self.source.get().expect("source should be configured");
        let result = runtime.block_on(async {
            match setup {
                SourceSetup::Payload(elements) => {
                    seeded(FixtureRestaurantSource::new(elements))
                        .discover(request)
                        .await
                }
                SourceSetup::TimesOut => seeded(TimingOutSource).discover(request).await,
            }
        });
        self.last_result.set(result);
    }

    fn restaurants(&self) -> Vec<Restaurant> {
        self.last_result
            .get()
            .expect("discovery should have run")
            .expect("discovery should succeed")
    }
}

fn seeded<S>(source: S) -> RestaurantDiscoveryService<S> {
    RestaurantDiscoveryService::new(Arc::new(source), Arc::new(DefaultClock))
        .with_random_source(RandomSource::Seeded(7))
}

fn element(element_type: &str, id: i64, pairs: &[(&str, &str)]) -> RawElement {
    RawElement {
        element_type: element_type.to_owned(),
        id: Some(id),
        tags: pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<BTreeMap<_, _>>(),
        ..RawElement::default()
    }
}

fn north_of_origin(km: f64) -> Coordinates {
    Coordinates::new(OTTAWA.latitude + km / KM_PER_DEGREE, OTTAWA.longitude)
}

fn node_at(id: i64, km: f64, pairs: &[(&str, &str)]) -> RawElement {
    let point = north_of_origin(km);
    RawElement {
        lat: Some(point.latitude),
        lon: Some(point.longitude),
        ..element("node", id, pairs)
    }
}

#[fixture]
fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

#[given("the Ottawa fixture payload")]
fn the_ottawa_fixture_payload(world: &DiscoveryWorld) {
    let sakura = node_at(1, 2.1, &[("name", "Sakura Sushi"), ("cuisine", "japanese")]);
    let unnamed = node_at(2, 1.0, &[("amenity", "restaurant")]);
    let marios = RawElement {
        geometry: vec![north_of_origin(5.2), north_of_origin(7.4)],
        ..element("way", 3, &[("name", "Mario's")])
    };
    world
        .source
        .set(SourceSetup::Payload(vec![sakura, unnamed, marios]));
}

#[given("a neighbourhood with vegan and gluten-free options")]
fn a_neighbourhood_with_vegan_and_gluten_free_options(world: &DiscoveryWorld) {
    world.source.set(SourceSetup::Payload(vec![
        node_at(1, 0.8, &[("name", "Green Bowl"), ("diet:vegan", "yes")]),
        node_at(2, 1.4, &[("name", "Steak Barn")]),
        node_at(3, 2.2, &[("name", "Rice Kitchen"), ("diet:gluten_free", "only")]),
        node_at(4, 2.9, &[("name", "Halal Grill"), ("diet:halal", "yes")]),
    ]));
}

#[given("a restaurant source that times out")]
fn a_restaurant_source_that_times_out(world: &DiscoveryWorld) {
    world.source.set(SourceSetup::TimesOut);
}

#[when("restaurants within 5000 metres are discovered")]
fn restaurants_within_5000_metres_are_discovered(world: &DiscoveryWorld) {
    world.discover(DiscoveryRequest::new(OTTAWA, 5_000.0));
}

#[when("restaurants within 5000 metres are discovered for vegan or gluten-free diners")]
fn restaurants_are_discovered_for_vegan_or_gluten_free_diners(world: &DiscoveryWorld) {
    world.discover(DiscoveryRequest {
        dietary: WANTED_DIETS.to_vec(),
        ..DiscoveryRequest::new(OTTAWA, 5_000.0)
    });
}

#[then("only Sakura Sushi is returned at 2.1 km")]
fn only_sakura_sushi_is_returned(world: &DiscoveryWorld) {
    let restaurants = world.restaurants();
    let labels: Vec<(String, String)> = restaurants
        .iter()
        .map(|r| (r.name.clone(), r.distance_label()))
        .collect();
    assert_eq!(labels, vec![("Sakura Sushi".to_owned(), "2.1 km".to_owned())]);
}

#[then("the first page reports no more results")]
fn the_first_page_reports_no_more_results(world: &DiscoveryWorld) {
    let page = paginate(&world.restaurants(), PageRequest::first());
    assert!(!page.has_more);
    assert!(page.next_cursor.is_none());
}

#[then("{count:usize} restaurants are returned")]
fn restaurants_are_returned(world: &DiscoveryWorld, count: usize) {
    assert_eq!(world.restaurants().len(), count);
}

#[then("every returned restaurant carries a requested tag")]
fn every_returned_restaurant_carries_a_requested_tag(world: &DiscoveryWorld) {
    assert!(
        world
            .restaurants()
            .iter()
            .all(|restaurant| restaurant.has_any_tag(&WANTED_DIETS))
    );
}

#[then("discovery fails with a gateway timeout")]
fn discovery_fails_with_a_gateway_timeout(world: &DiscoveryWorld) {
    let result = world.last_result.get().expect("discovery should have run");
    let error = result.expect_err("timeout should fail discovery");
    assert_eq!(error.code(), ErrorCode::GatewayTimeout);
}

#[scenario(
    path = "tests/features/discovery.feature",
    name = "Unusable and distant places are excluded"
)]
fn unusable_and_distant_places_are_excluded(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/discovery.feature",
    name = "Dietary filters match any requested tag"
)]
fn dietary_filters_match_any_requested_tag(world: DiscoveryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/discovery.feature",
    name = "A fetch timeout fails the whole discovery"
)]
fn a_fetch_timeout_fails_the_whole_discovery(world: DiscoveryWorld) {
    let _ = world;
}
