#![cfg(feature = "server")]

use actix_web::{App, test, web};
use irlwork_discovery::domain::human::Human;
use irlwork_discovery::domain::listing::ListingPage;
use irlwork_discovery::domain::task::Task;
use irlwork_discovery::dto::api::ErrorResponse;
use irlwork_discovery::routes::api::configure;

mod common;

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(common::seed_catalog()))
                .app_data(web::Data::new(common::test_config()))
                .service(web::scope("/api").configure(configure)),
        )
        .await
    };
}

fn titles(page: &ListingPage<Task>) -> Vec<&str> {
    page.items.iter().map(|t| t.title.as_str()).collect()
}

#[actix_web::test]
async fn test_tasks_default_listing_is_newest_first() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/tasks").to_request();
    let page: ListingPage<Task> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 6);
    assert_eq!(page.items[0].title, "Translate a menu");
    assert_eq!(page.items[5].title, "Pick up dry cleaning");
}

#[actix_web::test]
async fn test_tasks_filters_combine_with_and() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/tasks?category=errands&city=austin&max_rate=30")
        .to_request();
    let page: ListingPage<Task> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.total, 1);
    assert_eq!(titles(&page), vec!["Pick up dry cleaning"]);
}

#[actix_web::test]
async fn test_tasks_geo_search_sorted_by_distance() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/tasks?sort=distance&user_lat=30.2672&user_lng=-97.7431&radius_km=50")
        .to_request();
    let page: ListingPage<Task> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        titles(&page),
        vec!["Pick up dry cleaning", "Assemble bookshelf", "Deliver flowers"]
    );
}

#[actix_web::test]
async fn test_tasks_pagination_reports_full_total() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/tasks?limit=4&offset=4")
        .to_request();
    let page: ListingPage<Task> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 2);
}

#[actix_web::test]
async fn test_humans_filter_by_skill_and_rating_sort() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/humans?skill=errands&sort=rating")
        .to_request();
    let page: ListingPage<Human> = test::call_and_read_body_json(&app, req).await;

    let names: Vec<&str> = page.items.iter().map(|h| h.name.as_str()).collect();
    assert_eq!(names, vec!["Ana Ruiz", "Carla Weiss"]);
}

#[actix_web::test]
async fn test_invalid_params_return_bad_request() {
    let app = init_app!();

    for uri in [
        "/api/v1/tasks?limit=0",
        "/api/v1/tasks?sort=cheapest",
        "/api/v1/humans?user_lat=30.2&user_lng=-97.7",
        "/api/v1/humans?max_rate=abc",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400, "{uri}");

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());
    }
}
